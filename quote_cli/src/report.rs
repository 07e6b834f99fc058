//! Runs the selected models and renders their output as JSON documents.

use chrono::NaiveDate;
use log::info;
use model_a::ModelA;
use model_b::ModelB;
use model_c::ModelC;
use quote_common::{PricingModel, QuoteRequest, Result};
use rand::Rng;

use crate::args::ModelKind;

/// Price `request` with every model in `selection`, one JSON document each.
pub fn render_quotes<R: Rng + ?Sized>(
    selection: ModelKind,
    request: &QuoteRequest,
    today: NaiveDate,
    rng: &mut R,
) -> Result<Vec<String>> {
    let mut documents = Vec::new();

    if selection.includes(ModelKind::A) {
        let quote = ModelA::new().calculate_price_at(request, today, rng);
        info!("{}: {:.2} {}", quote.model_name, quote.price, quote.currency);
        documents.push(quote.to_json()?);
    }
    if selection.includes(ModelKind::B) {
        let quote = ModelB::new().calculate_price_at(request, today, rng);
        info!("{}: {:.2} {}", quote.model_name, quote.price, quote.currency);
        documents.push(quote.to_json()?);
    }
    if selection.includes(ModelKind::C) {
        let quote = ModelC::new().calculate_price_at(request, today, rng);
        info!("{}: {:.2} {}", quote.model_name, quote.price, quote.currency);
        documents.push(quote.to_json()?);
    }
    Ok(documents)
}

/// Health check of every model in `selection`, one JSON document each.
pub fn render_health(selection: ModelKind) -> Result<Vec<String>> {
    let mut documents = Vec::new();
    if selection.includes(ModelKind::A) {
        documents.push(ModelA::new().health_check().to_json()?);
    }
    if selection.includes(ModelKind::B) {
        documents.push(ModelB::new().health_check().to_json()?);
    }
    if selection.includes(ModelKind::C) {
        documents.push(ModelC::new().health_check().to_json()?);
    }
    Ok(documents)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use serde_json::Value;

    fn request() -> QuoteRequest {
        QuoteRequest::parse("1995-06-15", "2015-08-20", "Golf", "Volkswagen", "3014 NM").unwrap()
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
    }

    #[test]
    fn all_renders_three_quotes_in_order() {
        let mut rng = StdRng::seed_from_u64(1);
        let docs = render_quotes(ModelKind::All, &request(), today(), &mut rng).unwrap();
        assert_eq!(docs.len(), 3);

        let names: Vec<String> = docs
            .iter()
            .map(|d| {
                let v: Value = serde_json::from_str(d).unwrap();
                v["model_name"].as_str().unwrap().to_string()
            })
            .collect();
        assert_eq!(
            names,
            [
                "Model A - Age Based Pricing",
                "Model B - Experience Based Pricing",
                "Model C - Brand Based Pricing",
            ]
        );
    }

    #[test]
    fn same_seed_renders_same_output() {
        let first = render_quotes(ModelKind::C, &request(), today(), &mut StdRng::seed_from_u64(8))
            .unwrap();
        let second = render_quotes(ModelKind::C, &request(), today(), &mut StdRng::seed_from_u64(8))
            .unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn health_for_single_model() {
        let docs = render_health(ModelKind::B).unwrap();
        assert_eq!(docs.len(), 1);
        let v: Value = serde_json::from_str(&docs[0]).unwrap();
        assert_eq!(v["status"], "healthy");
        assert_eq!(v["model"], "Model B - Experience Based Pricing");
    }
}
