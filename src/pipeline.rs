//! Batch pipeline facade
//!
//! `SurveyPipeline` runs the full normalize -> classify -> aggregate pass over
//! loader-produced record batches in one call. Each stage consumes the prior
//! stage's immutable output; rerunning the pipeline on the same input yields
//! an identical outcome.

use arrow::record_batch::RecordBatch;
use log::info;

use crate::algorithm::colony::aggregate_colonies;
use crate::config::NormalizerConfig;
use crate::error::Result;
use crate::models::adapters::{FieldSurveyAdapter, SurveyAdapter};
use crate::models::collections::NormalizedSurvey;
use crate::models::colony::ColonyCohort;
use crate::palette::PrevalenceRamp;
use crate::utils::logging;
use crate::utils::logging::progress;

/// Everything a presenter consumes from one pipeline run
#[derive(Debug, Clone)]
pub struct SurveyOutcome {
    /// Normalized records plus rejection accounting
    pub survey: NormalizedSurvey,
    /// One cohort per colony with at least one qualifying member
    pub cohorts: Vec<ColonyCohort>,
    /// Prevalence ramp fitted to the observed cohort range; `None` when no
    /// cohort carries an assessable prevalence
    pub prevalence_ramp: Option<PrevalenceRamp>,
}

/// One-call orchestrator over the pipeline stages
#[derive(Debug, Clone, Default)]
pub struct SurveyPipeline {
    config: NormalizerConfig,
    show_progress: bool,
}

impl SurveyPipeline {
    /// Create a pipeline with the given normalizer configuration
    #[must_use]
    pub fn new(config: NormalizerConfig) -> Self {
        Self {
            config,
            show_progress: false,
        }
    }

    /// Display an indicatif progress bar while normalizing batches
    #[must_use]
    pub fn with_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }

    /// The normalizer configuration in effect
    #[must_use]
    pub fn config(&self) -> &NormalizerConfig {
        &self.config
    }

    /// Normalize every batch, aggregate colonies and fit the prevalence ramp
    pub fn process(&self, batches: &[RecordBatch]) -> Result<SurveyOutcome> {
        let pb = self.show_progress.then(|| {
            progress::create_batch_progress_bar(
                batches.len() as u64,
                Some("Normalizing survey batches"),
            )
        });

        let mut survey = NormalizedSurvey::default();
        for batch in batches {
            let normalized = FieldSurveyAdapter::from_record_batch(batch, &self.config)?;
            survey = survey.merge(normalized);
            if let Some(pb) = &pb {
                pb.inc(1);
            }
        }
        if let Some(pb) = &pb {
            progress::finish_progress_bar(pb, Some("normalization complete"));
        }

        logging::log_normalization_complete(
            "field survey",
            survey.report().accepted_count(),
            survey.report().rejected_count(),
        );

        let cohorts = aggregate_colonies(survey.records());
        info!("Aggregated {} records into {} colonies", survey.len(), cohorts.len());

        let prevalence_ramp = PrevalenceRamp::fit(&cohorts).ok();

        Ok(SurveyOutcome {
            survey,
            cohorts,
            prevalence_ramp,
        })
    }
}
