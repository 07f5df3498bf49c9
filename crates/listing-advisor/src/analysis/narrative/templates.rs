//! Advisory text fragments, one per template key.

use std::borrow::Cow;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TemplateKey {
    InvestorOwnerProfile,
    OccupierOwnerProfile,
    TigerUnderPressure,
    TigerAtEase,
    OwlPriceDispute,
    OwlDealSafety,
    PeacockInvestorPride,
    PeacockStoryteller,
    KoalaProtector,
    DualMask,
    PrecisionManager,
    MixedMotivation,
    ProfilePending,
    InvestorRapport,
    OccupierRapport,
    TigerTactic,
    OwlTactic,
    PeacockTactic,
    KoalaTactic,
    RapportPending,
    ExclusiveValueWar,
    GeneralSpeedWar,
    TopTier,
    NeedsEngineering,
    LongGame,
    RenovationAppendix,
    DisclosureAppendix,
    PriceResistanceAppendix,
    UrgencyAppendix,
    ColdHandlingAppendix,
}

impl TemplateKey {
    pub const fn all() -> [Self; 30] {
        [
            Self::InvestorOwnerProfile,
            Self::OccupierOwnerProfile,
            Self::TigerUnderPressure,
            Self::TigerAtEase,
            Self::OwlPriceDispute,
            Self::OwlDealSafety,
            Self::PeacockInvestorPride,
            Self::PeacockStoryteller,
            Self::KoalaProtector,
            Self::DualMask,
            Self::PrecisionManager,
            Self::MixedMotivation,
            Self::ProfilePending,
            Self::InvestorRapport,
            Self::OccupierRapport,
            Self::TigerTactic,
            Self::OwlTactic,
            Self::PeacockTactic,
            Self::KoalaTactic,
            Self::RapportPending,
            Self::ExclusiveValueWar,
            Self::GeneralSpeedWar,
            Self::TopTier,
            Self::NeedsEngineering,
            Self::LongGame,
            Self::RenovationAppendix,
            Self::DisclosureAppendix,
            Self::PriceResistanceAppendix,
            Self::UrgencyAppendix,
            Self::ColdHandlingAppendix,
        ]
    }
}

/// Key to text mapping consulted by the narrative generator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateCatalog {
    templates: BTreeMap<TemplateKey, Cow<'static, str>>,
}

impl TemplateCatalog {
    pub fn standard() -> Self {
        let templates = TemplateKey::all()
            .into_iter()
            .map(|key| (key, Cow::Borrowed(standard_text(key))))
            .collect();
        Self { templates }
    }

    pub fn with_override(mut self, key: TemplateKey, text: impl Into<Cow<'static, str>>) -> Self {
        self.templates.insert(key, text.into());
        self
    }

    pub fn text(&self, key: TemplateKey) -> &str {
        self.templates.get(&key).map(|text| text.as_ref()).unwrap_or("")
    }
}

impl Default for TemplateCatalog {
    fn default() -> Self {
        Self::standard()
    }
}

fn standard_text(key: TemplateKey) -> &'static str {
    match key {
        TemplateKey::InvestorOwnerProfile => {
            "[Owner type: Investor]\n\
             This owner reads the listing as a spreadsheet line. Loyalty to any one agent is close to zero; \
             whoever brings the best net number gets the deal. Frame every update in profit, holding cost and \
             opportunity cost, never in sentiment."
        }
        TemplateKey::OccupierOwnerProfile => {
            "[Owner type: Owner-occupier]\n\
             This home carries years of family memories, so price conversations are also emotional ones. \
             Trust is built before numbers are discussed: acknowledge what the home means to them before \
             you talk about what the market will pay for it."
        }
        TemplateKey::TigerUnderPressure => {
            "[Dominant profile: Tiger]\n\
             Core needs are control and efficiency. The manner can feel aggressive; it is a habit, not a \
             personal attack. Success is theirs and failure is someone else's.\n\
             With a clear deadline on the sale, the impatience doubles. Do not match their urgency, beat it: \
             skip the process in every report and lead with results (\"three viewings this week, one offer\")."
        }
        TemplateKey::TigerAtEase => {
            "[Dominant profile: Tiger]\n\
             Core needs are control and efficiency. The manner can feel aggressive; it is a habit, not a \
             personal attack. Success is theirs and failure is someone else's.\n\
             With no pressure to sell, they will treat you like a subordinate. Build expert authority and \
             occasionally decline unreasonable requests politely (a call at midnight); it earns more respect \
             than compliance."
        }
        TemplateKey::OwlPriceDispute => {
            "[Analytical profile: Owl]\n\
             Core needs are precision and logic. Confirmation bias is strong: only data they found \
             themselves is trusted, and emotional appeals (\"the buyer is very sincere\") are noise unless \
             you can price that sincerity.\n\
             Do not argue the asking price out loud. Bring a clean comparable-listings sheet showing better \
             homes nearby asking less, and let the data lead them to conclude the price is off."
        }
        TemplateKey::OwlDealSafety => {
            "[Analytical profile: Owl]\n\
             Core needs are precision and logic. Confirmation bias is strong: only data they found \
             themselves is trusted, and emotional appeals (\"the buyer is very sincere\") are noise unless \
             you can price that sincerity.\n\
             With a reasonable price, the worry moves to contract terms and transaction safety. Walk them \
             through escrow, performance guarantees and the closing agent's credentials before they ask."
        }
        TemplateKey::PeacockInvestorPride => {
            "[Expressive profile: Peacock]\n\
             Core needs are recognition and a stage. Social proof matters and the home feels like a one-of-a-kind \
             piece of art; criticism of the property lands as criticism of the person.\n\
             Even as an investor, the reward they enjoy is the glory of the win. Report how impressive this \
             sale will look, not only how much it will earn."
        }
        TemplateKey::PeacockStoryteller => {
            "[Expressive profile: Peacock]\n\
             Core needs are recognition and a stage. Social proof matters and the home feels like a one-of-a-kind \
             piece of art; criticism of the property lands as criticism of the person.\n\
             Play the fan. Ask about the renovation ideas and the family stories behind the home; the more \
             absorbed you are, the faster trust grows."
        }
        TemplateKey::KoalaProtector => {
            "[Amiable profile: Koala]\n\
             The core need is safety. The biggest fear is making a decision the family will blame them for. \
             Easy to talk to, but decisions are slow and a single remark from a relative can undo them.\n\
             Your role is protector and gentle driver. Do not push for a decision; remove the fear instead, \
             for example by offering to explain the details to the family yourself."
        }
        TemplateKey::DualMask => {
            "[Compound profile: Dual mask]\n\
             A hard, demanding surface sits on top of a soft, approval-seeking core. Expect commands in \
             public and hesitation in private. Answer the commands with speed, then follow up one-on-one to \
             reassure; never call out the contradiction."
        }
        TemplateKey::PrecisionManager => {
            "[Compound profile: Precision manager]\n\
             Decisive and data-driven at once: they want results fast and every number to reconcile. \
             Lead with the conclusion, attach the evidence, and never round a figure they can check."
        }
        TemplateKey::MixedMotivation => {
            "[Caution: Mixed motivations]\n\
             More than one reason to sell is in play, so expect ambivalence. The owner may agree one day \
             and retreat the next. Pin down which motivation wins when they conflict before you commit the \
             team's time."
        }
        TemplateKey::ProfilePending => {
            "[Profile pending]\n\
             No personality read yet. Spend the next conversation listening: note how they make decisions, \
             who else they consult, and what they ask about first."
        }
        TemplateKey::InvestorRapport => {
            "[Rapport: Investor] Lead with market pressure: recent comparable sales, days on market and the \
             carrying cost of waiting speak louder than any relationship."
        }
        TemplateKey::OccupierRapport => {
            "[Rapport: Owner-occupier] Relationship first: ask about the home and the move before the \
             price. They sell through someone they trust, not someone who is merely competent."
        }
        TemplateKey::TigerTactic => {
            "[Icebreaker: Tiger] Strong leaders are often lonely. After the business update, switch channels \
             for one line (\"you have been so busy lately, please look after yourself\"). An unexpected moment \
             of care cracks the armor and tells them you understand the weight they carry."
        }
        TemplateKey::OwlTactic => {
            "[Icebreaker: Owl] The coolness is really attention to detail. Praise how well organized the home \
             or their records are, even ask how they sorted it all. Feed their sense of intellectual \
             superiority and they will start treating you as a peer worth talking to."
        }
        TemplateKey::PeacockTactic => {
            "[Icebreaker: Peacock] Emotions run high in both directions. When they are worked up, do not \
             push business; mirror the mood first. Angry at the market? Be angry with them. Excited? Laugh \
             along. Once the feeling has run its course, hand them a glass of water and get to the point."
        }
        TemplateKey::KoalaTactic => {
            "[Icebreaker: Koala] Soft-hearted. Share a small setback or family story of your own to show the \
             human side. Build the sense that you are on the same team, or they will stop answering the \
             phone at the critical moment."
        }
        TemplateKey::RapportPending => {
            "[Icebreaker] Until you know their style, keep updates short, factual and regular, and let them \
             choose the pace of the relationship."
        }
        TemplateKey::ExclusiveValueWar => {
            "[Contract position: Exclusive listing, a value war]\n\
             The information and the first move are yours, so the campaign can be shaped carefully.\n\
             - Core strategy: create scarcity. Do not spray the listing everywhere; filter for serious buyers. \
             Suggest small cleanups or repairs, because that investment shows up in the price you negotiate.\n\
             - Team guidance: tell colleagues plainly that this is your exclusive and the owner trusts you. \
             Establishing home-court authority makes them rely on your negotiating advice during viewings."
        }
        TemplateKey::GeneralSpeedWar => {
            "[Contract position: Open listing, a speed war]\n\
             The owner has many agents and information is badly asymmetric. Winning is about speed and reach.\n\
             - Core strategy: no hoarding. The moment the owner softens, broadcast to the whole office and \
             region. Better a colleague closes than a competitor.\n\
             - Risk: be ready for work that never pays. Keep your owner reports high quality so you stand \
             out from every other agent on the file."
        }
        TemplateKey::TopTier => {
            "[Tier: Top tier, must win]\n\
             Every signal lines up. Treat this as a flagship file: put it in front of the whole team today, \
             concentrate viewings, and consider a single open-house window to create competing offers."
        }
        TemplateKey::NeedsEngineering => {
            "[Tier: Needs engineering]\n\
             Sellable, but not on its own. Identify the one weak factor holding it back (price, condition or \
             commitment) and work it deliberately with the owner before the team loses interest."
        }
        TemplateKey::LongGame => {
            "[Tier: Long game]\n\
             Several factors work against a quick sale. Do not give up and do not go cold: keep a steady \
             weekly rhythm with the owner and look for a colleague who already has a buyer searching this \
             area for point-to-point matching."
        }
        TemplateKey::RenovationAppendix => {
            "- Development note: the condition needs work but leaves room on price. Work out the renovation \
             cost against the post-renovation value for investor buyers."
        }
        TemplateKey::DisclosureAppendix => {
            "- Development note: there are defects in the condition or title, so risk control comes first. \
             Prepare a detailed property disclosure statement and have a manager or closing agent check the \
             contract terms. Target specialist channels and seasoned investors."
        }
        TemplateKey::PriceResistanceAppendix => {
            "- Price resistance: the asking price sits above market and colleagues will hesitate. Report \
             market movement weekly (especially nearby sales below the asking price) and find the one \
             irreplaceable feature that makes the home worth showing anyway."
        }
        TemplateKey::UrgencyAppendix => {
            "- Urgency: the owner needs this done. Shorten every feedback loop, confirm viewing slots the \
             same day and bring offers to the table before the motivation cools."
        }
        TemplateKey::ColdHandlingAppendix => {
            "- Cold handling: an investor with no pressure to sell is testing the market. Keep effort \
             proportional, share data rather than enthusiasm, and wait for the numbers to move them."
        }
    }
}
