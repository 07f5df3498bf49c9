mod rules;
mod templates;

pub use rules::ScoreTier;
pub use templates::{TemplateCatalog, TemplateKey};

use super::domain::Selections;
use rules::{emotion_keys, psychology_keys, team_keys, NarrativeContext};
use serde::Serialize;

/// The three advisory text blocks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Narrative {
    pub psychology: String,
    pub emotion_tip: String,
    pub team_strategy: String,
}

/// Renders advisory text by folding rule-selected template keys over a catalog.
#[derive(Debug, Clone, Default)]
pub struct NarrativeGenerator {
    catalog: TemplateCatalog,
}

impl NarrativeGenerator {
    pub fn new(catalog: TemplateCatalog) -> Self {
        Self { catalog }
    }

    pub fn generate(&self, selections: &Selections, score: u32) -> Narrative {
        let context = NarrativeContext::new(selections, score);

        Narrative {
            psychology: self.render(&psychology_keys(&context)),
            emotion_tip: self.render(&emotion_keys(&context)),
            team_strategy: self.render(&team_keys(&context)),
        }
    }

    fn render(&self, keys: &[TemplateKey]) -> String {
        keys.iter()
            .map(|key| self.catalog.text(*key))
            .filter(|text| !text.is_empty())
            .collect::<Vec<_>>()
            .join("\n\n")
    }
}
