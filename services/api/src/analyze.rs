use crate::infra::load_profile;
use clap::Args;
use listing_advisor::analysis::{
    AnalysisResult, Category, ListingAnalyzer, Selections, TemplateCatalog,
};
use listing_advisor::error::AppError;
use std::path::PathBuf;

#[derive(Args, Debug, Default)]
pub(crate) struct AnalyzeArgs {
    /// Owner personality: tiger, owl, peacock, koala (repeatable or comma separated)
    #[arg(long, value_delimiter = ',')]
    pub(crate) personality: Vec<String>,
    /// Selling motivation: change, cash, asset, test (repeatable or comma separated)
    #[arg(long, value_delimiter = ',')]
    pub(crate) motivation: Vec<String>,
    /// Owner type: normal or investor
    #[arg(long)]
    pub(crate) owner_type: Option<String>,
    /// Property condition: perfect, needsWork, complex, flaw
    #[arg(long)]
    pub(crate) condition: Option<String>,
    /// Price posture: urgent, market, high, challenge
    #[arg(long)]
    pub(crate) price: Option<String>,
    /// Listing contract: exclusive or general
    #[arg(long)]
    pub(crate) contract: Option<String>,
    /// JSON scoring profile replacing the standard tables
    #[arg(long)]
    pub(crate) scoring_profile: Option<PathBuf>,
    /// Print the raw JSON result instead of the text report
    #[arg(long)]
    pub(crate) json: bool,
}

impl AnalyzeArgs {
    fn selections(&self) -> Selections {
        Selections::builder()
            .set(Category::Personality, self.personality.iter().cloned())
            .set(Category::Motivation, self.motivation.iter().cloned())
            .set(Category::OwnerType, self.owner_type.iter().cloned())
            .set(Category::Condition, self.condition.iter().cloned())
            .set(Category::Price, self.price.iter().cloned())
            .set(Category::Contract, self.contract.iter().cloned())
            .build()
    }
}

pub(crate) fn run_analysis(args: AnalyzeArgs) -> Result<(), AppError> {
    let profile = load_profile(args.scoring_profile.as_deref())?;
    let analyzer = ListingAnalyzer::new(profile, TemplateCatalog::standard());
    let selections = args.selections();
    let result = analyzer.analyze(&selections);

    if args.json {
        let rendered = serde_json::to_string_pretty(&result)
            .map_err(|err| AppError::Io(std::io::Error::other(err)))?;
        println!("{rendered}");
    } else {
        print!("{}", render_report(&selections, &result));
    }

    Ok(())
}

fn render_report(selections: &Selections, result: &AnalysisResult) -> String {
    let mut out = String::new();
    out.push_str("Listing analysis\n");
    out.push_str(&format!(
        "Score: {} ({})\n",
        result.score,
        result.tier().label()
    ));

    out.push_str("\nRadar\n");
    for (category, value) in Category::ordered().iter().zip(result.radar_data) {
        let tags = selections.tags(*category);
        let shown = if tags.is_empty() {
            "-".to_string()
        } else {
            tags.iter()
                .map(|tag| category.describe(tag).unwrap_or(tag.as_str()))
                .collect::<Vec<_>>()
                .join(", ")
        };
        out.push_str(&format!("- {}: {} [{}]\n", category.label(), value, shown));
    }

    for (heading, block) in [
        ("Owner psychology", &result.analysis.psychology),
        ("Rapport tactics", &result.analysis.emotion_tip),
        ("Team strategy", &result.analysis.team_strategy),
    ] {
        out.push_str(&format!("\n{heading}\n{block}\n"));
    }

    out
}
