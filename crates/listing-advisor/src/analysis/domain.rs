use serde::de::IgnoredAny;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::warn;

/// Listing attribute dimensions, in radar order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Category {
    Personality,
    Motivation,
    OwnerType,
    Condition,
    Price,
    Contract,
}

impl Category {
    /// Radar consumers index positionally, so this order is part of the wire contract.
    pub const fn ordered() -> [Self; 6] {
        [
            Self::Personality,
            Self::Motivation,
            Self::OwnerType,
            Self::Condition,
            Self::Price,
            Self::Contract,
        ]
    }

    pub const fn key(self) -> &'static str {
        match self {
            Self::Personality => "personality",
            Self::Motivation => "motivation",
            Self::OwnerType => "ownerType",
            Self::Condition => "condition",
            Self::Price => "price",
            Self::Contract => "contract",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Personality => "Owner Personality",
            Self::Motivation => "Selling Motivation",
            Self::OwnerType => "Owner Type",
            Self::Condition => "Property Condition",
            Self::Price => "Price Posture",
            Self::Contract => "Listing Contract",
        }
    }

    pub const fn is_multi_select(self) -> bool {
        matches!(self, Self::Personality | Self::Motivation)
    }

    /// Human label for a tag of this category, `None` when the tag is unknown.
    pub fn describe(self, tag: &str) -> Option<&'static str> {
        match self {
            Self::Personality => Personality::parse(tag).map(Personality::label),
            Self::Motivation => Motivation::parse(tag).map(Motivation::label),
            Self::OwnerType => OwnerType::parse(tag).map(OwnerType::label),
            Self::Condition => Condition::parse(tag).map(Condition::label),
            Self::Price => PriceStance::parse(tag).map(PriceStance::label),
            Self::Contract => ContractKind::parse(tag).map(ContractKind::label),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Personality {
    Tiger,
    Owl,
    Peacock,
    Koala,
}

impl Personality {
    pub fn parse(tag: &str) -> Option<Self> {
        match tag {
            "tiger" => Some(Self::Tiger),
            "owl" => Some(Self::Owl),
            "peacock" => Some(Self::Peacock),
            "koala" => Some(Self::Koala),
            _ => None,
        }
    }

    pub const fn tag(self) -> &'static str {
        match self {
            Self::Tiger => "tiger",
            Self::Owl => "owl",
            Self::Peacock => "peacock",
            Self::Koala => "koala",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Tiger => "Dominant (Tiger)",
            Self::Owl => "Analytical (Owl)",
            Self::Peacock => "Expressive (Peacock)",
            Self::Koala => "Amiable (Koala)",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Motivation {
    Change,
    Cash,
    Asset,
    Test,
}

impl Motivation {
    pub fn parse(tag: &str) -> Option<Self> {
        match tag {
            "change" => Some(Self::Change),
            "cash" => Some(Self::Cash),
            "asset" => Some(Self::Asset),
            "test" => Some(Self::Test),
            _ => None,
        }
    }

    pub const fn tag(self) -> &'static str {
        match self {
            Self::Change => "change",
            Self::Cash => "cash",
            Self::Asset => "asset",
            Self::Test => "test",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Change => "Trading up / relocating",
            Self::Cash => "Needs cash",
            Self::Asset => "Rebalancing assets",
            Self::Test => "Testing the market",
        }
    }

    /// Motivations that put a clock on the sale.
    pub const fn is_pressing(self) -> bool {
        matches!(self, Self::Change | Self::Cash)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OwnerType {
    Normal,
    Investor,
}

impl OwnerType {
    pub fn parse(tag: &str) -> Option<Self> {
        match tag {
            "normal" => Some(Self::Normal),
            "investor" => Some(Self::Investor),
            _ => None,
        }
    }

    pub const fn tag(self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Investor => "investor",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Normal => "Owner-occupier",
            Self::Investor => "Investor",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Condition {
    Perfect,
    NeedsWork,
    Complex,
    Flaw,
}

impl Condition {
    pub fn parse(tag: &str) -> Option<Self> {
        match tag {
            "perfect" => Some(Self::Perfect),
            "needsWork" => Some(Self::NeedsWork),
            "complex" => Some(Self::Complex),
            "flaw" => Some(Self::Flaw),
            _ => None,
        }
    }

    pub const fn tag(self) -> &'static str {
        match self {
            Self::Perfect => "perfect",
            Self::NeedsWork => "needsWork",
            Self::Complex => "complex",
            Self::Flaw => "flaw",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Perfect => "Move-in ready",
            Self::NeedsWork => "Needs work",
            Self::Complex => "Complex title or structure",
            Self::Flaw => "Known defect",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PriceStance {
    Urgent,
    Market,
    High,
    Challenge,
}

impl PriceStance {
    pub fn parse(tag: &str) -> Option<Self> {
        match tag {
            "urgent" => Some(Self::Urgent),
            "market" => Some(Self::Market),
            "high" => Some(Self::High),
            "challenge" => Some(Self::Challenge),
            _ => None,
        }
    }

    pub const fn tag(self) -> &'static str {
        match self {
            Self::Urgent => "urgent",
            Self::Market => "market",
            Self::High => "high",
            Self::Challenge => "challenge",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Urgent => "Priced to sell fast",
            Self::Market => "At market",
            Self::High => "Above market",
            Self::Challenge => "Well above market",
        }
    }

    pub const fn is_above_market(self) -> bool {
        matches!(self, Self::High | Self::Challenge)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContractKind {
    Exclusive,
    General,
}

impl ContractKind {
    pub fn parse(tag: &str) -> Option<Self> {
        match tag {
            "exclusive" => Some(Self::Exclusive),
            "general" => Some(Self::General),
            _ => None,
        }
    }

    pub const fn tag(self) -> &'static str {
        match self {
            Self::Exclusive => "exclusive",
            Self::General => "general",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Exclusive => "Exclusive listing",
            Self::General => "Open listing",
        }
    }
}

/// A category value as it arrives on the wire.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum SelectionValue {
    Single(String),
    Multiple(Vec<String>),
    /// Numbers, objects, mixed arrays; treated as absent.
    Unsupported(IgnoredAny),
}

impl SelectionValue {
    fn into_tags(self) -> Vec<String> {
        match self {
            SelectionValue::Single(tag) => vec![tag],
            SelectionValue::Multiple(tags) => tags,
            SelectionValue::Unsupported(_) => Vec::new(),
        }
    }
}

/// Request body for an analysis. Unknown keys are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectionsPayload {
    #[serde(default)]
    pub personality: Option<SelectionValue>,
    #[serde(default)]
    pub motivation: Option<SelectionValue>,
    #[serde(default)]
    pub owner_type: Option<SelectionValue>,
    #[serde(default)]
    pub condition: Option<SelectionValue>,
    #[serde(default)]
    pub price: Option<SelectionValue>,
    #[serde(default)]
    pub contract: Option<SelectionValue>,
}

/// Normalized selections: every category is an ordered tag sequence.
///
/// Empty tags are dropped and single-select categories hold at most one tag.
/// Tags are kept verbatim, so unknown values survive normalization and simply
/// resolve to nothing downstream.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selections {
    tags: BTreeMap<Category, Vec<String>>,
}

impl Selections {
    pub fn builder() -> SelectionsBuilder {
        SelectionsBuilder::default()
    }

    pub fn from_payload(payload: SelectionsPayload) -> Self {
        let SelectionsPayload {
            personality,
            motivation,
            owner_type,
            condition,
            price,
            contract,
        } = payload;

        let mut selections = Self::default();
        for (category, value) in [
            (Category::Personality, personality),
            (Category::Motivation, motivation),
            (Category::OwnerType, owner_type),
            (Category::Condition, condition),
            (Category::Price, price),
            (Category::Contract, contract),
        ] {
            if let Some(value) = value {
                selections.insert(category, value.into_tags());
            }
        }
        selections
    }

    fn insert(&mut self, category: Category, tags: Vec<String>) {
        let mut tags: Vec<String> = tags.into_iter().filter(|tag| !tag.is_empty()).collect();

        if !category.is_multi_select() && tags.len() > 1 {
            warn!(
                category = category.key(),
                supplied = tags.len(),
                "single-select category received several tags; keeping the first"
            );
            tags.truncate(1);
        }

        if tags.is_empty() {
            self.tags.remove(&category);
        } else {
            self.tags.insert(category, tags);
        }
    }

    pub fn tags(&self, category: Category) -> &[String] {
        self.tags.get(&category).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    pub fn personalities(&self) -> Vec<Personality> {
        self.parsed(Category::Personality, Personality::parse)
    }

    pub fn motivations(&self) -> Vec<Motivation> {
        self.parsed(Category::Motivation, Motivation::parse)
    }

    pub fn owner_type(&self) -> Option<OwnerType> {
        self.first(Category::OwnerType, OwnerType::parse)
    }

    pub fn condition(&self) -> Option<Condition> {
        self.first(Category::Condition, Condition::parse)
    }

    pub fn price(&self) -> Option<PriceStance> {
        self.first(Category::Price, PriceStance::parse)
    }

    pub fn contract(&self) -> Option<ContractKind> {
        self.first(Category::Contract, ContractKind::parse)
    }

    fn parsed<T>(&self, category: Category, parse: fn(&str) -> Option<T>) -> Vec<T> {
        self.tags(category)
            .iter()
            .filter_map(|tag| parse(tag))
            .collect()
    }

    fn first<T>(&self, category: Category, parse: fn(&str) -> Option<T>) -> Option<T> {
        self.tags(category).first().and_then(|tag| parse(tag))
    }
}

impl From<SelectionsPayload> for Selections {
    fn from(value: SelectionsPayload) -> Self {
        Self::from_payload(value)
    }
}

#[derive(Debug, Default)]
pub struct SelectionsBuilder {
    selections: Selections,
}

impl SelectionsBuilder {
    pub fn set<I, S>(mut self, category: Category, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.selections
            .insert(category, tags.into_iter().map(Into::into).collect());
        self
    }

    pub fn build(self) -> Selections {
        self.selections
    }
}
