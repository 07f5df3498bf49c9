mod tables;

pub use tables::{ScoreTable, ScoringProfile, ScoringProfileError};

use super::domain::{Category, Selections};

/// Stateless engine turning selections into the weighted score and radar vector.
#[derive(Debug, Clone)]
pub struct ScoringEngine {
    profile: ScoringProfile,
}

impl ScoringEngine {
    pub fn new(profile: ScoringProfile) -> Self {
        Self { profile }
    }

    pub fn profile(&self) -> &ScoringProfile {
        &self.profile
    }

    pub fn score(&self, selections: &Selections) -> u32 {
        let total: f64 = Category::ordered()
            .into_iter()
            .map(|category| {
                self.profile
                    .weights
                    .resolve(category, selections.tags(category))
            })
            .sum();
        round_half_up(total)
    }

    pub fn radar(&self, selections: &Selections) -> [u32; 6] {
        Category::ordered().map(|category| {
            round_half_up(
                self.profile
                    .radar
                    .resolve(category, selections.tags(category)),
            )
        })
    }
}

impl Default for ScoringEngine {
    fn default() -> Self {
        Self::new(ScoringProfile::standard())
    }
}

fn round_half_up(value: f64) -> u32 {
    // Resolved values are never negative, so `floor(x + 0.5)` is half-up.
    // The float-to-int cast saturates on oversized custom profiles.
    (value + 0.5).floor().max(0.0) as u32
}
