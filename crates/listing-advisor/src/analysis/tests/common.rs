use std::sync::Arc;

use axum::body::to_bytes;
use axum::response::Response;
use serde_json::Value;

use crate::analysis::domain::{Category, Selections};
use crate::analysis::{analysis_router, ListingAnalyzer, TemplateCatalog};

pub(super) fn analyzer() -> ListingAnalyzer {
    ListingAnalyzer::standard()
}

pub(super) fn router() -> axum::Router {
    analysis_router(Arc::new(analyzer()))
}

pub(super) fn catalog() -> TemplateCatalog {
    TemplateCatalog::standard()
}

/// Tiger owner who needs cash, move-in ready, priced to sell, exclusive.
pub(super) fn hot_listing() -> Selections {
    Selections::builder()
        .set(Category::Personality, ["tiger"])
        .set(Category::Motivation, ["cash"])
        .set(Category::OwnerType, ["normal"])
        .set(Category::Condition, ["perfect"])
        .set(Category::Price, ["urgent"])
        .set(Category::Contract, ["exclusive"])
        .build()
}

/// Investor testing the market with an overpriced, defective open listing.
pub(super) fn cold_listing() -> Selections {
    Selections::builder()
        .set(Category::Personality, ["owl"])
        .set(Category::Motivation, ["test"])
        .set(Category::OwnerType, ["investor"])
        .set(Category::Condition, ["flaw"])
        .set(Category::Price, ["challenge"])
        .set(Category::Contract, ["general"])
        .build()
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = to_bytes(response.into_body(), 1024 * 1024)
        .await
        .expect("body");
    serde_json::from_slice(&body).expect("json")
}
