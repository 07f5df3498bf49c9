use super::super::domain::Category;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Per-category lookup of tag constants.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScoreTable {
    entries: BTreeMap<Category, BTreeMap<String, u32>>,
}

impl ScoreTable {
    pub fn from_entries<I, T>(entries: I) -> Self
    where
        I: IntoIterator<Item = (Category, T)>,
        T: IntoIterator<Item = (&'static str, u32)>,
    {
        let entries = entries
            .into_iter()
            .map(|(category, values)| {
                let values = values
                    .into_iter()
                    .map(|(tag, value)| (tag.to_string(), value))
                    .collect();
                (category, values)
            })
            .collect();
        Self { entries }
    }

    /// Configured constant for a tag, `None` when the tag is unknown.
    pub fn value(&self, category: Category, tag: &str) -> Option<u32> {
        self.entries
            .get(&category)
            .and_then(|values| values.get(tag))
            .copied()
    }

    /// Scalar contribution of a category's tags.
    ///
    /// Several tags are averaged rather than summed. Unknown tags add nothing
    /// but still count toward the divisor.
    pub fn resolve(&self, category: Category, tags: &[String]) -> f64 {
        if tags.is_empty() {
            return 0.0;
        }

        let sum: f64 = tags
            .iter()
            .map(|tag| f64::from(self.value(category, tag).unwrap_or(0)))
            .sum();
        sum / tags.len() as f64
    }

    pub fn category_max(&self, category: Category) -> u32 {
        self.entries
            .get(&category)
            .and_then(|values| values.values().max())
            .copied()
            .unwrap_or(0)
    }
}

/// Weight and radar tables used together by the scoring engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoringProfile {
    pub weights: ScoreTable,
    pub radar: ScoreTable,
}

impl ScoringProfile {
    pub fn standard() -> Self {
        let weights = ScoreTable::from_entries([
            (
                Category::Personality,
                vec![("tiger", 5), ("owl", 10), ("peacock", 15), ("koala", 15)],
            ),
            (
                Category::Motivation,
                vec![("change", 20), ("cash", 25), ("asset", 10), ("test", 0)],
            ),
            (Category::OwnerType, vec![("normal", 10), ("investor", 5)]),
            (
                Category::Condition,
                vec![("perfect", 15), ("needsWork", 12), ("complex", 8), ("flaw", 5)],
            ),
            (
                Category::Price,
                vec![("urgent", 25), ("market", 15), ("high", 5), ("challenge", 0)],
            ),
            (Category::Contract, vec![("exclusive", 10), ("general", 5)]),
        ]);

        let radar = ScoreTable::from_entries([
            (
                Category::Personality,
                vec![("tiger", 60), ("owl", 50), ("peacock", 70), ("koala", 90)],
            ),
            (
                Category::Motivation,
                vec![("change", 80), ("cash", 100), ("asset", 60), ("test", 30)],
            ),
            (Category::OwnerType, vec![("normal", 90), ("investor", 40)]),
            (
                Category::Condition,
                vec![("perfect", 100), ("needsWork", 80), ("complex", 50), ("flaw", 40)],
            ),
            (
                Category::Price,
                vec![("urgent", 100), ("market", 90), ("high", 60), ("challenge", 20)],
            ),
            (Category::Contract, vec![("exclusive", 100), ("general", 50)]),
        ]);

        Self { weights, radar }
    }

    /// Upper bound on the total score: the sum of per-category weight maxima,
    /// saturating at `u32::MAX`.
    pub fn max_score(&self) -> u32 {
        Category::ordered()
            .into_iter()
            .map(|category| self.weights.category_max(category))
            .fold(0, u32::saturating_add)
    }

    pub fn from_json(raw: &str) -> Result<Self, ScoringProfileError> {
        serde_json::from_str(raw).map_err(ScoringProfileError::Parse)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ScoringProfileError> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|source| ScoringProfileError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&raw)
    }
}

impl Default for ScoringProfile {
    fn default() -> Self {
        Self::standard()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ScoringProfileError {
    #[error("unable to read scoring profile {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("scoring profile is not valid JSON: {0}")]
    Parse(#[source] serde_json::Error),
}
