//! Derivation algorithms: serological classification and colony aggregation

pub mod colony;
pub mod serology;

pub use colony::{aggregate_colonies, retro_interaction_counts};
pub use serology::{ExposureProfile, TiterCorrections, exposure_at};
