//! Raw-survey to domain-model adapters
//!
//! Adapters turn loader-produced record batches into normalized domain
//! models. They never mutate their input; every row either becomes a record
//! or lands in the rejection report.

mod field_survey;

pub use field_survey::FieldSurveyAdapter;

use arrow::record_batch::RecordBatch;

use crate::config::NormalizerConfig;
use crate::error::Result;
use crate::models::collections::NormalizedSurvey;

/// Adapter from one raw survey batch to normalized records
pub trait SurveyAdapter {
    /// Convert a raw `RecordBatch` into qualifying records plus rejection
    /// accounting
    fn from_record_batch(batch: &RecordBatch, config: &NormalizerConfig)
    -> Result<NormalizedSurvey>;
}
