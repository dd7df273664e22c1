//! Survey record collections and rejection accounting
//!
//! The normalizer never silently drops a row: every exclusion is recorded in
//! a [`RejectionReport`] alongside the accepted records, so data loss stays
//! visible to the caller.

use itertools::Itertools;
use rustc_hash::FxHashMap;
use serde::Serialize;

use crate::models::cat::CatRecord;

/// Why a raw survey row was excluded from the normalized record set
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum RejectionReason {
    /// Cohort-type tag was not the managed/colony type
    UnmanagedCohort,
    /// A required field was null or absent
    MissingField(&'static str),
    /// Titer string had no parseable magnitude after cleanup
    MalformedTiter(String),
    /// Age bracket outside the enumerated set
    UnknownAgeClass(String),
    /// Life-stage bracket outside the enumerated set
    UnknownLifeStage(String),
    /// Collection date did not match the configured format
    InvalidDate(String),
    /// Retrovirus flag was not binary 0/1
    MalformedRetroFlag {
        /// Offending column
        column: &'static str,
        /// Raw value as seen in the sheet
        value: String,
    },
}

impl RejectionReason {
    /// Stable short label for counting and log output
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::UnmanagedCohort => "unmanaged_cohort",
            Self::MissingField(_) => "missing_field",
            Self::MalformedTiter(_) => "malformed_titer",
            Self::UnknownAgeClass(_) => "unknown_age_class",
            Self::UnknownLifeStage(_) => "unknown_life_stage",
            Self::InvalidDate(_) => "invalid_date",
            Self::MalformedRetroFlag { .. } => "malformed_retro_flag",
        }
    }
}

/// One excluded row: its position in the raw input plus the reason
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RejectedRow {
    /// Zero-based row index within the raw input
    pub row: usize,
    /// Why the row was excluded
    pub reason: RejectionReason,
}

/// Accounting of rows seen, accepted and excluded during normalization
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RejectionReport {
    total_rows: usize,
    rejections: Vec<RejectedRow>,
}

impl RejectionReport {
    /// Start a report for an input of `total_rows` rows
    #[must_use]
    pub fn new(total_rows: usize) -> Self {
        Self {
            total_rows,
            rejections: Vec::new(),
        }
    }

    /// Record one excluded row
    pub fn push(&mut self, row: usize, reason: RejectionReason) {
        self.rejections.push(RejectedRow { row, reason });
    }

    /// Rows seen in the raw input
    #[must_use]
    pub fn total_rows(&self) -> usize {
        self.total_rows
    }

    /// Rows excluded
    #[must_use]
    pub fn rejected_count(&self) -> usize {
        self.rejections.len()
    }

    /// Rows that qualified for normalization
    #[must_use]
    pub fn accepted_count(&self) -> usize {
        self.total_rows - self.rejections.len()
    }

    /// Excluded rows in input order
    pub fn iter(&self) -> impl Iterator<Item = &RejectedRow> {
        self.rejections.iter()
    }

    /// Count of exclusions per reason label
    #[must_use]
    pub fn counts_by_reason(&self) -> FxHashMap<&'static str, usize> {
        let mut counts = FxHashMap::default();
        for rejected in &self.rejections {
            *counts.entry(rejected.reason.label()).or_insert(0) += 1;
        }
        counts
    }

    /// Combine two reports; `other`'s row indexes are offset past `self`'s rows
    #[must_use]
    pub fn merge(mut self, other: Self) -> Self {
        let offset = self.total_rows;
        self.total_rows += other.total_rows;
        self.rejections.extend(
            other
                .rejections
                .into_iter()
                .map(|r| RejectedRow {
                    row: r.row + offset,
                    reason: r.reason,
                }),
        );
        self
    }
}

/// Normalized survey: accepted records plus the rejection accounting
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct NormalizedSurvey {
    records: Vec<CatRecord>,
    report: RejectionReport,
}

impl NormalizedSurvey {
    /// Assemble a survey from normalized records and their report
    #[must_use]
    pub fn new(records: Vec<CatRecord>, report: RejectionReport) -> Self {
        Self { records, report }
    }

    /// The normalized records, in input order
    #[must_use]
    pub fn records(&self) -> &[CatRecord] {
        &self.records
    }

    /// The rejection accounting for the raw input
    #[must_use]
    pub fn report(&self) -> &RejectionReport {
        &self.report
    }

    /// Number of normalized records
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether no record qualified
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Distinct colony identifiers, sorted
    #[must_use]
    pub fn colony_ids(&self) -> Vec<&str> {
        self.records
            .iter()
            .map(|r| r.colony_id.as_str())
            .unique()
            .sorted()
            .collect()
    }

    /// Records assigned to one colony
    pub fn records_for_colony<'a>(
        &'a self,
        colony_id: &'a str,
    ) -> impl Iterator<Item = &'a CatRecord> {
        self.records.iter().filter(move |r| r.colony_id == colony_id)
    }

    /// Concatenate two surveys into a new one; row accounting is offset
    #[must_use]
    pub fn merge(mut self, other: Self) -> Self {
        self.records.extend(other.records);
        Self {
            records: self.records,
            report: self.report.merge(other.report),
        }
    }
}
