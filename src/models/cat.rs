//! Individual survey record model
//!
//! A `CatRecord` is one sampled, in-scope individual after normalization:
//! managed cohort, complete fields, canonical titer, derived exposure flags.
//! Records are created once by the normalizer and never updated; filtering
//! happens at construction, not by mutating existing instances.

use serde::{Deserialize, Serialize};

use crate::algorithm::serology::{self, ExposureProfile};
use crate::error::Result;
use crate::models::types::{AgeClass, LifeStage};
use crate::palette::InteractionState;

/// One normalized survey record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatRecord {
    /// Named location/group this cat belongs to
    pub colony_id: String,
    /// Ordinal age bracket
    pub age_class: AgeClass,
    /// Ordinal life stage
    pub life_stage: LifeStage,
    /// Day of year the sample was collected, 1-366
    pub collection_day_of_year: u16,
    /// Sampling site latitude, decimal degrees
    pub latitude: Option<f64>,
    /// Sampling site longitude, decimal degrees
    pub longitude: Option<f64>,
    /// Canonical Toxoplasma titer magnitude
    pub toxo_titer: Option<f64>,
    /// Titer >= 40, null-propagating
    pub toxo_exposed_40: Option<bool>,
    /// Titer >= 160, null-propagating
    pub toxo_exposed_160: Option<bool>,
    /// Titer >= 320, null-propagating
    pub toxo_exposed_320: Option<bool>,
    /// FIV serology result
    pub fiv_exposed: bool,
    /// FeLV serology result
    pub felv_exposed: bool,
}

impl CatRecord {
    /// Classify a titer against an arbitrary threshold.
    ///
    /// The three standard flags are precomputed on the record; this is the
    /// escape hatch for non-standard cutoffs. Null titers propagate.
    pub fn toxo_exposed_at(&self, threshold: f64) -> Result<Option<bool>> {
        serology::exposure_at(self.toxo_titer, threshold)
    }

    /// Joint FIV x FeLV exposure state
    #[must_use]
    pub fn retro_interaction(&self) -> InteractionState {
        InteractionState::pair(self.fiv_exposed, self.felv_exposed)
    }

    /// Joint FIV x FeLV x Toxoplasma exposure state at the clinical cutoff.
    ///
    /// `None` when the 160 flag is null; the caller decides how to present
    /// unassessable records.
    #[must_use]
    pub fn full_interaction(&self) -> Option<InteractionState> {
        self.toxo_exposed_160
            .map(|toxo| InteractionState::triple(self.fiv_exposed, self.felv_exposed, toxo))
    }

    /// Recompute the three standard threshold flags from the stored titer
    #[must_use]
    pub fn exposure_profile(&self) -> ExposureProfile {
        ExposureProfile::classify(self.toxo_titer)
    }
}
