//! Configuration for the survey normalizer.

use crate::algorithm::serology::TiterCorrections;

/// Configuration for [`crate::models::adapters::FieldSurveyAdapter`]
#[derive(Debug, Clone)]
pub struct NormalizerConfig {
    /// Fixed strftime format the collection-date column is parsed with
    pub date_format: String,
    /// Exact-match transcription-error corrections applied to parsed titers
    pub corrections: TiterCorrections,
    /// Emit a `log` record for every rejected row in addition to the report
    pub log_rejections: bool,
}

impl Default for NormalizerConfig {
    fn default() -> Self {
        Self {
            date_format: "%m/%d/%Y".to_string(),
            corrections: TiterCorrections::default(),
            log_rejections: true,
        }
    }
}
