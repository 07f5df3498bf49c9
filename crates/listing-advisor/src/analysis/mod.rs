//! Listing analysis: weighted scoring, radar vector and advisory narrative.
//!
//! The analyzer is pure. It holds only immutable tables and templates, so one
//! instance can be shared across requests behind an `Arc`.

pub mod domain;
pub mod narrative;
pub mod router;
pub mod scoring;

#[cfg(test)]
mod tests;

pub use domain::{
    Category, Condition, ContractKind, Motivation, OwnerType, Personality, PriceStance,
    SelectionValue, Selections, SelectionsBuilder, SelectionsPayload,
};
pub use narrative::{Narrative, NarrativeGenerator, ScoreTier, TemplateCatalog, TemplateKey};
pub use router::analysis_router;
pub use scoring::{ScoreTable, ScoringEngine, ScoringProfile, ScoringProfileError};

use serde::Serialize;
use tracing::debug;

/// Output of one analysis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub score: u32,
    pub radar_data: [u32; 6],
    pub analysis: Narrative,
}

impl AnalysisResult {
    pub fn tier(&self) -> ScoreTier {
        ScoreTier::from_score(self.score)
    }
}

/// Runs the scoring engine and the narrative generator in sequence.
#[derive(Debug, Clone, Default)]
pub struct ListingAnalyzer {
    scoring: ScoringEngine,
    narrative: NarrativeGenerator,
}

impl ListingAnalyzer {
    pub fn new(profile: ScoringProfile, catalog: TemplateCatalog) -> Self {
        Self {
            scoring: ScoringEngine::new(profile),
            narrative: NarrativeGenerator::new(catalog),
        }
    }

    pub fn standard() -> Self {
        Self::new(ScoringProfile::standard(), TemplateCatalog::standard())
    }

    pub fn scoring(&self) -> &ScoringEngine {
        &self.scoring
    }

    pub fn analyze(&self, selections: &Selections) -> AnalysisResult {
        let score = self.scoring.score(selections);
        let radar_data = self.scoring.radar(selections);
        let analysis = self.narrative.generate(selections, score);

        let result = AnalysisResult {
            score,
            radar_data,
            analysis,
        };
        debug!(score, tier = result.tier().label(), "listing analysed");
        result
    }
}
