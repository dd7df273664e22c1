//! Field-survey sheet to CatRecord adapter
//!
//! This is the normalizer: it cleans and type-converts the raw survey columns
//! into [`CatRecord`]s, applying the cohort filter, the completeness filter,
//! titer cleanup and correction, ordinal category parsing and date
//! conversion. Rejection, not substitution: a row missing or failing any
//! required field is excluded and counted, never padded with defaults.

use arrow::array::{Array, ArrayRef, Float64Array, StringArray};
use arrow::datatypes::DataType;
use arrow::record_batch::RecordBatch;
use chrono::{Datelike, NaiveDate};
use log::debug;

use super::SurveyAdapter;
use crate::algorithm::serology::{self, ExposureProfile};
use crate::config::NormalizerConfig;
use crate::error::Result;
use crate::models::cat::CatRecord;
use crate::models::collections::{NormalizedSurvey, RejectionReason, RejectionReport};
use crate::models::types::{AgeClass, CohortType, LifeStage};
use crate::schema::survey;
use crate::utils::arrow::{downcast_array, get_column};

/// Adapter for converting raw field-survey batches to `CatRecord` models
pub struct FieldSurveyAdapter;

impl SurveyAdapter for FieldSurveyAdapter {
    fn from_record_batch(
        batch: &RecordBatch,
        config: &NormalizerConfig,
    ) -> Result<NormalizedSurvey> {
        let colony_ref = require_column(batch, survey::COLONY_ID, &DataType::Utf8)?;
        let colony = downcast_array::<StringArray>(&colony_ref, survey::COLONY_ID, "String")?;

        let cohort_ref = require_column(batch, survey::COHORT_TYPE, &DataType::Utf8)?;
        let cohort = downcast_array::<StringArray>(&cohort_ref, survey::COHORT_TYPE, "String")?;

        let longitude_ref = require_column(batch, survey::LONGITUDE, &DataType::Float64)?;
        let longitude =
            downcast_array::<Float64Array>(&longitude_ref, survey::LONGITUDE, "Float64")?;

        let latitude_ref = require_column(batch, survey::LATITUDE, &DataType::Float64)?;
        let latitude = downcast_array::<Float64Array>(&latitude_ref, survey::LATITUDE, "Float64")?;

        let date_ref = require_column(batch, survey::COLLECTION_DATE, &DataType::Utf8)?;
        let date = downcast_array::<StringArray>(&date_ref, survey::COLLECTION_DATE, "String")?;

        let age_ref = require_column(batch, survey::AGE_CLASS, &DataType::Utf8)?;
        let age = downcast_array::<StringArray>(&age_ref, survey::AGE_CLASS, "String")?;

        let stage_ref = require_column(batch, survey::LIFE_STAGE, &DataType::Utf8)?;
        let stage = downcast_array::<StringArray>(&stage_ref, survey::LIFE_STAGE, "String")?;

        let titer_ref = require_column(batch, survey::TOXO_TITER, &DataType::Utf8)?;
        let titer = downcast_array::<StringArray>(&titer_ref, survey::TOXO_TITER, "String")?;

        let fiv_ref = require_column(batch, survey::FIV, &DataType::Utf8)?;
        let fiv = downcast_array::<StringArray>(&fiv_ref, survey::FIV, "String")?;

        let felv_ref = require_column(batch, survey::FELV, &DataType::Utf8)?;
        let felv = downcast_array::<StringArray>(&felv_ref, survey::FELV, "String")?;

        let mut records = Vec::with_capacity(batch.num_rows());
        let mut report = RejectionReport::new(batch.num_rows());

        for row in 0..batch.num_rows() {
            // Cohort filter first: out-of-scope animals are never converted
            let Some(cohort_raw) = text_value(cohort, row) else {
                reject(&mut report, config, row, RejectionReason::MissingField(survey::COHORT_TYPE));
                continue;
            };
            if CohortType::try_from(cohort_raw) != Ok(CohortType::Managed) {
                reject(&mut report, config, row, RejectionReason::UnmanagedCohort);
                continue;
            }

            let Some(colony_id) = text_value(colony, row) else {
                reject(&mut report, config, row, RejectionReason::MissingField(survey::COLONY_ID));
                continue;
            };

            if latitude.is_null(row) {
                reject(&mut report, config, row, RejectionReason::MissingField(survey::LATITUDE));
                continue;
            }
            if longitude.is_null(row) {
                reject(&mut report, config, row, RejectionReason::MissingField(survey::LONGITUDE));
                continue;
            }

            let Some(date_raw) = text_value(date, row) else {
                reject(
                    &mut report,
                    config,
                    row,
                    RejectionReason::MissingField(survey::COLLECTION_DATE),
                );
                continue;
            };
            let Ok(collected) = NaiveDate::parse_from_str(date_raw, &config.date_format) else {
                reject(&mut report, config, row, RejectionReason::InvalidDate(date_raw.to_string()));
                continue;
            };

            let Some(age_raw) = text_value(age, row) else {
                reject(&mut report, config, row, RejectionReason::MissingField(survey::AGE_CLASS));
                continue;
            };
            let Ok(age_class) = AgeClass::try_from(age_raw) else {
                reject(
                    &mut report,
                    config,
                    row,
                    RejectionReason::UnknownAgeClass(age_raw.to_string()),
                );
                continue;
            };

            let Some(stage_raw) = text_value(stage, row) else {
                reject(&mut report, config, row, RejectionReason::MissingField(survey::LIFE_STAGE));
                continue;
            };
            let Ok(life_stage) = LifeStage::try_from(stage_raw) else {
                reject(
                    &mut report,
                    config,
                    row,
                    RejectionReason::UnknownLifeStage(stage_raw.to_string()),
                );
                continue;
            };

            let Some(titer_raw) = text_value(titer, row) else {
                reject(&mut report, config, row, RejectionReason::MissingField(survey::TOXO_TITER));
                continue;
            };
            // Cleanup precedes numeric conversion; corrections precede
            // threshold derivation
            let Some(magnitude) = serology::clean_titer(titer_raw) else {
                reject(
                    &mut report,
                    config,
                    row,
                    RejectionReason::MalformedTiter(titer_raw.to_string()),
                );
                continue;
            };
            let canonical_titer = f64::from(config.corrections.correct(magnitude));

            let Some(fiv_raw) = text_value(fiv, row) else {
                reject(&mut report, config, row, RejectionReason::MissingField(survey::FIV));
                continue;
            };
            let Some(fiv_exposed) = binary_flag(fiv_raw) else {
                reject(
                    &mut report,
                    config,
                    row,
                    RejectionReason::MalformedRetroFlag {
                        column: survey::FIV,
                        value: fiv_raw.to_string(),
                    },
                );
                continue;
            };

            let Some(felv_raw) = text_value(felv, row) else {
                reject(&mut report, config, row, RejectionReason::MissingField(survey::FELV));
                continue;
            };
            let Some(felv_exposed) = binary_flag(felv_raw) else {
                reject(
                    &mut report,
                    config,
                    row,
                    RejectionReason::MalformedRetroFlag {
                        column: survey::FELV,
                        value: felv_raw.to_string(),
                    },
                );
                continue;
            };

            let profile = ExposureProfile::classify(Some(canonical_titer));

            records.push(CatRecord {
                colony_id: colony_id.to_string(),
                age_class,
                life_stage,
                collection_day_of_year: collected.ordinal() as u16,
                latitude: Some(latitude.value(row)),
                longitude: Some(longitude.value(row)),
                toxo_titer: Some(canonical_titer),
                toxo_exposed_40: profile.detectable,
                toxo_exposed_160: profile.clinical,
                toxo_exposed_320: profile.high_titer,
                fiv_exposed,
                felv_exposed,
            });
        }

        Ok(NormalizedSurvey::new(records, report))
    }
}

/// Fetch a column that must exist, with type adaptation
fn require_column(batch: &RecordBatch, name: &str, expected: &DataType) -> Result<ArrayRef> {
    match get_column(batch, name, expected, true)? {
        Some(array) => Ok(array),
        None => unreachable!(), // required=true never yields Ok(None)
    }
}

/// Non-null, non-blank string value at `row`
fn text_value(array: &StringArray, row: usize) -> Option<&str> {
    if array.is_null(row) {
        return None;
    }
    let value = array.value(row).trim();
    if value.is_empty() { None } else { Some(value) }
}

/// Parse a 0/1 retrovirus flag; anything else is malformed
fn binary_flag(raw: &str) -> Option<bool> {
    match raw {
        "0" => Some(false),
        "1" => Some(true),
        _ => None,
    }
}

fn reject(report: &mut RejectionReport, config: &NormalizerConfig, row: usize, reason: RejectionReason) {
    if config.log_rejections {
        debug!("Survey row {row} rejected: {reason:?}");
    }
    report.push(row, reason);
}
