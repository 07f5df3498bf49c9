use super::super::domain::{
    Condition, ContractKind, Motivation, OwnerType, Personality, PriceStance, Selections,
};
use super::templates::TemplateKey;
use serde::Serialize;

/// Score bucket driving the team-strategy tier paragraph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreTier {
    TopTier,
    NeedsEngineering,
    LongGame,
}

impl ScoreTier {
    pub const fn from_score(score: u32) -> Self {
        if score >= 80 {
            Self::TopTier
        } else if score >= 50 {
            Self::NeedsEngineering
        } else {
            Self::LongGame
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::TopTier => "Top tier",
            Self::NeedsEngineering => "Needs engineering",
            Self::LongGame => "Long game",
        }
    }

    const fn template(self) -> TemplateKey {
        match self {
            Self::TopTier => TemplateKey::TopTier,
            Self::NeedsEngineering => TemplateKey::NeedsEngineering,
            Self::LongGame => TemplateKey::LongGame,
        }
    }
}

/// Typed view of the selections that the text rules branch on.
#[derive(Debug, Clone)]
pub(crate) struct NarrativeContext {
    personalities: Vec<Personality>,
    motivations: Vec<Motivation>,
    owner_type: Option<OwnerType>,
    condition: Option<Condition>,
    price: Option<PriceStance>,
    contract: Option<ContractKind>,
    tier: ScoreTier,
}

impl NarrativeContext {
    pub(crate) fn new(selections: &Selections, score: u32) -> Self {
        Self {
            personalities: dedup(selections.personalities()),
            motivations: dedup(selections.motivations()),
            owner_type: selections.owner_type(),
            condition: selections.condition(),
            price: selections.price(),
            contract: selections.contract(),
            tier: ScoreTier::from_score(score),
        }
    }

    fn has_personality(&self, personality: Personality) -> bool {
        self.personalities.contains(&personality)
    }

    fn has_pressing_motivation(&self) -> bool {
        self.motivations.iter().any(|motivation| motivation.is_pressing())
    }

    fn is_investor(&self) -> bool {
        self.owner_type == Some(OwnerType::Investor)
    }

    fn price_above_market(&self) -> bool {
        self.price.is_some_and(PriceStance::is_above_market)
    }

    fn price_competitive(&self) -> bool {
        matches!(self.price, Some(PriceStance::Urgent | PriceStance::Market))
    }
}

fn dedup<T: PartialEq>(values: Vec<T>) -> Vec<T> {
    let mut unique = Vec::with_capacity(values.len());
    for value in values {
        if !unique.contains(&value) {
            unique.push(value);
        }
    }
    unique
}

fn owner_profile(owner_type: OwnerType) -> TemplateKey {
    match owner_type {
        OwnerType::Investor => TemplateKey::InvestorOwnerProfile,
        OwnerType::Normal => TemplateKey::OccupierOwnerProfile,
    }
}

fn personality_profile(personality: Personality, context: &NarrativeContext) -> TemplateKey {
    match personality {
        Personality::Tiger if context.has_pressing_motivation() => TemplateKey::TigerUnderPressure,
        Personality::Tiger => TemplateKey::TigerAtEase,
        Personality::Owl if context.price_above_market() => TemplateKey::OwlPriceDispute,
        Personality::Owl => TemplateKey::OwlDealSafety,
        Personality::Peacock if context.is_investor() => TemplateKey::PeacockInvestorPride,
        Personality::Peacock => TemplateKey::PeacockStoryteller,
        Personality::Koala => TemplateKey::KoalaProtector,
    }
}

/// At most one combination paragraph; the dual mask wins when both apply.
fn combination_profile(context: &NarrativeContext) -> Option<TemplateKey> {
    if !context.has_personality(Personality::Tiger) {
        return None;
    }

    if context.has_personality(Personality::Koala) || context.has_personality(Personality::Peacock)
    {
        Some(TemplateKey::DualMask)
    } else if context.has_personality(Personality::Owl) {
        Some(TemplateKey::PrecisionManager)
    } else {
        None
    }
}

pub(crate) fn psychology_keys(context: &NarrativeContext) -> Vec<TemplateKey> {
    let mut keys = Vec::new();
    keys.extend(context.owner_type.map(owner_profile));

    if context.personalities.is_empty() {
        keys.push(TemplateKey::ProfilePending);
        return keys;
    }

    keys.extend(
        context
            .personalities
            .iter()
            .map(|personality| personality_profile(*personality, context)),
    );

    if context.personalities.len() > 1 {
        keys.extend(combination_profile(context));
        if context.motivations.len() > 1 {
            keys.push(TemplateKey::MixedMotivation);
        }
    }

    keys
}

pub(crate) fn emotion_keys(context: &NarrativeContext) -> Vec<TemplateKey> {
    let mut keys = Vec::new();
    keys.extend(context.owner_type.map(|owner_type| match owner_type {
        OwnerType::Investor => TemplateKey::InvestorRapport,
        OwnerType::Normal => TemplateKey::OccupierRapport,
    }));

    if context.personalities.is_empty() {
        keys.push(TemplateKey::RapportPending);
        return keys;
    }

    keys.extend(context.personalities.iter().map(|personality| match personality {
        Personality::Tiger => TemplateKey::TigerTactic,
        Personality::Owl => TemplateKey::OwlTactic,
        Personality::Peacock => TemplateKey::PeacockTactic,
        Personality::Koala => TemplateKey::KoalaTactic,
    }));

    keys
}

pub(crate) fn team_keys(context: &NarrativeContext) -> Vec<TemplateKey> {
    let mut keys = vec![
        match context.contract {
            Some(ContractKind::General) => TemplateKey::GeneralSpeedWar,
            Some(ContractKind::Exclusive) | None => TemplateKey::ExclusiveValueWar,
        },
        context.tier.template(),
    ];

    // Renovation needs a competitive price. Urgent or above-market pricing
    // replaces the disclosure note.
    match context.condition {
        Some(Condition::NeedsWork) if context.price_competitive() => {
            keys.push(TemplateKey::RenovationAppendix)
        }
        Some(Condition::Flaw | Condition::Complex)
            if context.price != Some(PriceStance::Urgent) && !context.price_above_market() =>
        {
            keys.push(TemplateKey::DisclosureAppendix)
        }
        _ => {}
    }

    if context.price_above_market() {
        keys.push(TemplateKey::PriceResistanceAppendix);
    }

    if context.has_pressing_motivation() || context.price == Some(PriceStance::Urgent) {
        keys.push(TemplateKey::UrgencyAppendix);
    }

    let testing_the_market = context
        .motivations
        .iter()
        .any(|motivation| matches!(motivation, Motivation::Test | Motivation::Asset));
    if testing_the_market && context.is_investor() {
        keys.push(TemplateKey::ColdHandlingAppendix);
    }

    keys
}
