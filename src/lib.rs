//! A Rust library for normalizing, classifying and aggregating a serological
//! field survey of free-roaming cats.
//!
//! The pipeline turns raw survey rows (Toxoplasma titer strings, FIV/FeLV
//! flags, demographics, coordinates) into immutable [`CatRecord`]s, derives
//! exposure classifications at the standard diagnostic thresholds, rolls the
//! records up into [`ColonyCohort`]s, and maps exposure states onto visual
//! encoding tokens for an external presenter.

pub mod algorithm;
pub mod config;
pub mod error;
pub mod models;
pub mod palette;
pub mod pipeline;
pub mod schema;
pub mod utils;

// Re-export the most common types for easier use
// Core types
pub use config::NormalizerConfig;
pub use error::{Error, Result};
pub use models::adapters::{FieldSurveyAdapter, SurveyAdapter};
pub use models::{
    AgeClass, CatRecord, CohortType, ColonyCohort, LifeStage, NormalizedSurvey, RejectionReason,
    RejectionReport,
};

// Classification
pub use algorithm::serology::{
    ExposureProfile, THRESHOLD_CLINICAL, THRESHOLD_DETECTABLE, THRESHOLD_HIGH_TITER,
    TiterCorrections,
};
pub use algorithm::{aggregate_colonies, retro_interaction_counts};

// Visual encoding
pub use palette::{
    DiscretePalette, EmphasisMode, InteractionState, PaletteToken, PrevalenceRamp, encode,
};

// Pipeline facade
pub use pipeline::{SurveyOutcome, SurveyPipeline};

// Arrow types
pub use arrow::record_batch::RecordBatch;
