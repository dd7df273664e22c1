//! Common domain type definitions
//!
//! Ordered categorical types used across the survey models. The ordinal
//! categories declare their total order through variant order, so sorting and
//! comparisons follow the epidemiological meaning rather than any string
//! ordering of the raw labels.

use serde::{Deserialize, Serialize};

/// Age bracket of a sampled cat, youngest first
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum AgeClass {
    /// Under six months
    Under6Months,
    /// Six to twelve months
    SixToTwelveMonths,
    /// Over twelve months
    OverTwelveMonths,
}

impl AgeClass {
    /// Canonical survey-sheet label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Under6Months => "<6mo",
            Self::SixToTwelveMonths => "6-12mo",
            Self::OverTwelveMonths => ">12mo",
        }
    }
}

impl TryFrom<&str> for AgeClass {
    type Error = String;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.trim().to_lowercase().as_str() {
            "<6mo" | "<6 mo" | "<6 months" => Ok(Self::Under6Months),
            "6-12mo" | "6-12 mo" | "6-12 months" => Ok(Self::SixToTwelveMonths),
            ">12mo" | ">12 mo" | ">12 months" => Ok(Self::OverTwelveMonths),
            _ => Err(s.trim().to_string()),
        }
    }
}

/// Life stage of a sampled cat
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum LifeStage {
    /// Not yet reproductively mature
    Juvenile,
    /// Reproductively mature
    Adult,
}

impl LifeStage {
    /// Canonical survey-sheet label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Juvenile => "juvenile",
            Self::Adult => "adult",
        }
    }
}

impl TryFrom<&str> for LifeStage {
    type Error = String;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.trim().to_lowercase().as_str() {
            "juvenile" | "kitten" | "j" => Ok(Self::Juvenile),
            "adult" | "a" => Ok(Self::Adult),
            _ => Err(s.trim().to_string()),
        }
    }
}

/// Cohort classification of a surveyed animal.
///
/// Only managed, colony-affiliated individuals are in scope for the study;
/// every other cohort is filtered out at normalization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CohortType {
    /// Colony-affiliated, managed through a caretaker program
    Managed,
    /// Free-roaming without colony management
    Unmanaged,
}

impl TryFrom<&str> for CohortType {
    type Error = String;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.trim().to_lowercase().as_str() {
            "managed" | "colony" | "m" => Ok(Self::Managed),
            "unmanaged" | "feral" | "u" | "f" => Ok(Self::Unmanaged),
            _ => Err(s.trim().to_string()),
        }
    }
}
