pub mod memory;
pub mod postgres;

/// Per-collection fetch ceiling. A policy limit mirroring the original
/// single-query cap, not a pagination mechanism.
pub const FETCH_LIMIT: usize = 1000;

pub use memory::MemStore;
pub use postgres::PgStore;
