use listing_advisor::analysis::{ListingAnalyzer, ScoringProfile, TemplateCatalog};
use listing_advisor::config::AnalysisConfig;
use listing_advisor::error::AppError;
use metrics_exporter_prometheus::PrometheusHandle;
use std::path::Path;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use tracing::info;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Loads the scoring profile from disk when one is configured.
pub(crate) fn load_profile(path: Option<&Path>) -> Result<ScoringProfile, AppError> {
    match path {
        Some(path) => {
            let profile = ScoringProfile::from_path(path)?;
            info!(
                path = %path.display(),
                max_score = profile.max_score(),
                "loaded custom scoring profile"
            );
            Ok(profile)
        }
        None => Ok(ScoringProfile::standard()),
    }
}

pub(crate) fn build_analyzer(config: &AnalysisConfig) -> Result<ListingAnalyzer, AppError> {
    let profile = load_profile(config.scoring_profile.as_deref())?;
    Ok(ListingAnalyzer::new(profile, TemplateCatalog::standard()))
}
