//! Colony cohort model
//!
//! A `ColonyCohort` is the per-colony aggregate the presenter consumes:
//! member count, Toxoplasma prevalence at the clinical cutoff, and the
//! coordinate centroid. Cohorts are built once from a completed record set;
//! recomputing means rebuilding from scratch.

use serde::{Deserialize, Serialize};

use crate::models::traits::EntityModel;

/// Aggregate statistics for one colony
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColonyCohort {
    /// Colony identifier, unique across the cohort set
    pub colony_id: String,
    /// Number of qualifying records assigned to this colony, always >= 1
    pub size: usize,
    /// Percentage of assessable members with `toxo_exposed_160 == true`.
    /// `None` when no member carries an assessable flag.
    pub toxo_prevalence_pct: Option<f64>,
    /// Mean latitude over members with coordinates
    pub centroid_latitude: Option<f64>,
    /// Mean longitude over members with coordinates
    pub centroid_longitude: Option<f64>,
}

impl EntityModel for ColonyCohort {
    type Id = String;

    fn id(&self) -> &Self::Id {
        &self.colony_id
    }

    fn key(&self) -> String {
        self.colony_id.clone()
    }
}
