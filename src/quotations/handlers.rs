use axum::{routing::get, Json, Router};
use rand::Rng;
use time::OffsetDateTime;
use tracing::instrument;

use crate::quotations::dto::Quotation;
use crate::state::AppState;

/// Base prices in BRL per 60kg sack. Mock data — a stand-in for a real B3
/// market feed.
const BASE_PRICES: &[(&str, f64)] = &[
    ("Soybeans", 130.50),
    ("Corn", 65.20),
    ("Wheat", 95.80),
    ("Cotton", 180.30),
    ("Oats", 45.60),
];

pub fn routes() -> Router<AppState> {
    Router::new().route("/quotations/b3", get(list_quotations))
}

#[instrument]
pub async fn list_quotations() -> Json<Vec<Quotation>> {
    let mut rng = rand::thread_rng();
    let now = OffsetDateTime::now_utc();

    let quotations = BASE_PRICES
        .iter()
        .map(|&(product, base_price)| {
            let variation: f64 = rng.gen_range(-5.0..=5.0);
            let price = base_price * (1.0 + variation / 100.0);
            Quotation {
                product: product.to_string(),
                price: round2(price),
                change_pct: round2(variation),
                unit: "BRL/sack".to_string(),
                date: now,
            }
        })
        .collect();

    Json(quotations)
}

fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn jitter_stays_within_five_percent() {
        for _ in 0..50 {
            let Json(quotations) = list_quotations().await;
            assert_eq!(quotations.len(), BASE_PRICES.len());
            for (q, &(product, base)) in quotations.iter().zip(BASE_PRICES) {
                assert_eq!(q.product, product);
                assert!(q.change_pct.abs() <= 5.0);
                assert!((q.price - base).abs() <= base * 0.051);
            }
        }
    }
}
