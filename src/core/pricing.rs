use serde::Serialize;
use crate::models::Provider;

/// Course price range across the catalog
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingSummary<'a> {
    pub lowest_price: f64,
    pub highest_price: f64,
    /// Mean price rounded to whole dollars
    pub average_price: f64,
    /// Cheapest first; equal prices keep catalog order
    pub providers: Vec<&'a Provider>,
}

/// Summarise course prices. `None` for an empty catalog.
pub fn summarize(providers: &[Provider]) -> Option<PricingSummary<'_>> {
    let mut sorted: Vec<&Provider> = providers.iter().collect();
    sorted.sort_by(|a, b| {
        a.pricing
            .price
            .partial_cmp(&b.pricing.price)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    let lowest_price = sorted.first()?.pricing.price;
    let highest_price = sorted.last()?.pricing.price;
    let total: f64 = providers.iter().map(|p| p.pricing.price).sum();
    let average_price = (total / providers.len() as f64).round();

    Some(PricingSummary {
        lowest_price,
        highest_price,
        average_price,
        providers: sorted,
    })
}
