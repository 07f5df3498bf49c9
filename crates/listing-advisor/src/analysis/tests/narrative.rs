use super::common::*;
use crate::analysis::domain::{Category, Selections};
use crate::analysis::{ListingAnalyzer, NarrativeGenerator, ScoringProfile, TemplateKey};

#[test]
fn hot_listing_reads_as_top_tier_value_war() {
    let catalog = catalog();
    let result = analyzer().analyze(&hot_listing());
    let team = &result.analysis.team_strategy;

    assert!(team.starts_with(catalog.text(TemplateKey::ExclusiveValueWar)));
    assert!(team.contains(catalog.text(TemplateKey::TopTier)));
    assert!(team.contains(catalog.text(TemplateKey::UrgencyAppendix)));
    assert!(!team.contains(catalog.text(TemplateKey::GeneralSpeedWar)));

    let psychology = &result.analysis.psychology;
    assert!(psychology.starts_with(catalog.text(TemplateKey::OccupierOwnerProfile)));
    assert!(psychology.contains(catalog.text(TemplateKey::TigerUnderPressure)));
    assert!(!psychology.contains(catalog.text(TemplateKey::TigerAtEase)));

    let tips = &result.analysis.emotion_tip;
    assert_eq!(
        *tips,
        format!(
            "{}\n\n{}",
            catalog.text(TemplateKey::OccupierRapport),
            catalog.text(TemplateKey::TigerTactic)
        )
    );
}

#[test]
fn tiger_and_owl_produce_precision_manager_profile() {
    let catalog = catalog();
    let selections = Selections::builder()
        .set(Category::Personality, ["tiger", "owl"])
        .set(Category::Motivation, ["test"])
        .build();

    let result = analyzer().analyze(&selections);
    let psychology = &result.analysis.psychology;

    assert!(psychology.contains(catalog.text(TemplateKey::TigerAtEase)));
    assert!(psychology.contains(catalog.text(TemplateKey::OwlDealSafety)));
    assert!(psychology.contains(catalog.text(TemplateKey::PrecisionManager)));
    assert!(!psychology.contains(catalog.text(TemplateKey::DualMask)));

    let tips = &result.analysis.emotion_tip;
    assert!(tips.contains(catalog.text(TemplateKey::TigerTactic)));
    assert!(tips.contains(catalog.text(TemplateKey::OwlTactic)));

    let tiger_at = psychology
        .find(catalog.text(TemplateKey::TigerAtEase))
        .expect("tiger paragraph");
    let owl_at = psychology
        .find(catalog.text(TemplateKey::OwlDealSafety))
        .expect("owl paragraph");
    assert!(tiger_at < owl_at, "paragraphs follow input order");
}

#[test]
fn empty_selections_fall_back_to_default_fragments() {
    let catalog = catalog();
    let result = analyzer().analyze(&Selections::default());

    assert_eq!(
        result.analysis.psychology,
        catalog.text(TemplateKey::ProfilePending)
    );
    assert_eq!(
        result.analysis.emotion_tip,
        catalog.text(TemplateKey::RapportPending)
    );
    assert_eq!(
        result.analysis.team_strategy,
        format!(
            "{}\n\n{}",
            catalog.text(TemplateKey::ExclusiveValueWar),
            catalog.text(TemplateKey::LongGame)
        )
    );
}

#[test]
fn unknown_tags_are_skipped_by_text_rules() {
    let catalog = catalog();
    let selections = Selections::builder()
        .set(Category::Personality, ["unicorn"])
        .set(Category::Contract, ["handshake"])
        .build();

    let result = analyzer().analyze(&selections);
    assert_eq!(
        result.analysis.psychology,
        catalog.text(TemplateKey::ProfilePending)
    );
    assert!(result
        .analysis
        .team_strategy
        .starts_with(catalog.text(TemplateKey::ExclusiveValueWar)));
}

#[test]
fn cold_investor_gets_defensive_appendices() {
    let catalog = catalog();
    let result = analyzer().analyze(&cold_listing());
    let team = &result.analysis.team_strategy;

    assert!(team.starts_with(catalog.text(TemplateKey::GeneralSpeedWar)));
    assert!(team.contains(catalog.text(TemplateKey::LongGame)));
    assert!(team.contains(catalog.text(TemplateKey::PriceResistanceAppendix)));
    assert!(!team.contains(catalog.text(TemplateKey::DisclosureAppendix)));
    assert!(team.contains(catalog.text(TemplateKey::ColdHandlingAppendix)));
    assert!(!team.contains(catalog.text(TemplateKey::UrgencyAppendix)));

    let psychology = &result.analysis.psychology;
    assert!(psychology.starts_with(catalog.text(TemplateKey::InvestorOwnerProfile)));
    assert!(psychology.contains(catalog.text(TemplateKey::OwlPriceDispute)));
    assert!(result
        .analysis
        .emotion_tip
        .starts_with(catalog.text(TemplateKey::InvestorRapport)));
}

#[test]
fn mid_scores_need_engineering() {
    let catalog = catalog();
    let selections = Selections::builder()
        .set(Category::Personality, ["koala"])
        .set(Category::Motivation, ["asset"])
        .set(Category::OwnerType, ["normal"])
        .set(Category::Condition, ["needsWork"])
        .set(Category::Price, ["market"])
        .set(Category::Contract, ["exclusive"])
        .build();

    let result = analyzer().analyze(&selections);
    assert_eq!(result.score, 15 + 10 + 10 + 12 + 15 + 10);
    let team = &result.analysis.team_strategy;
    assert!(team.contains(catalog.text(TemplateKey::NeedsEngineering)));
    assert!(team.contains(catalog.text(TemplateKey::RenovationAppendix)));
    assert!(result
        .analysis
        .psychology
        .contains(catalog.text(TemplateKey::KoalaProtector)));
}

#[test]
fn peacock_framing_depends_on_owner_type() {
    let catalog = catalog();
    let investor = Selections::builder()
        .set(Category::Personality, ["peacock"])
        .set(Category::OwnerType, ["investor"])
        .build();
    let occupier = Selections::builder()
        .set(Category::Personality, ["peacock"])
        .set(Category::OwnerType, ["normal"])
        .build();

    let analyzer = analyzer();
    assert!(analyzer
        .analyze(&investor)
        .analysis
        .psychology
        .contains(catalog.text(TemplateKey::PeacockInvestorPride)));
    assert!(analyzer
        .analyze(&occupier)
        .analysis
        .psychology
        .contains(catalog.text(TemplateKey::PeacockStoryteller)));
}

#[test]
fn generation_is_deterministic() {
    let selections = Selections::builder()
        .set(Category::Personality, ["peacock", "tiger", "koala"])
        .set(Category::Motivation, ["change", "asset"])
        .set(Category::OwnerType, ["investor"])
        .set(Category::Price, ["high"])
        .build();

    let analyzer = analyzer();
    let first = analyzer.analyze(&selections);
    let second = analyzer.analyze(&selections);
    assert_eq!(first, second);
}

#[test]
fn catalog_overrides_flow_into_generated_text() {
    let catalog = catalog().with_override(TemplateKey::TopTier, "Flagship: clear the calendar.");
    let analyzer = ListingAnalyzer::new(ScoringProfile::standard(), catalog);

    let result = analyzer.analyze(&hot_listing());
    assert!(result
        .analysis
        .team_strategy
        .contains("Flagship: clear the calendar."));
}

#[test]
fn generator_branches_on_supplied_score_only() {
    let catalog = catalog();
    let generator = NarrativeGenerator::new(catalog.clone());
    let selections = Selections::default();

    let narrative = generator.generate(&selections, 85);
    assert!(narrative
        .team_strategy
        .contains(catalog.text(TemplateKey::TopTier)));
}
