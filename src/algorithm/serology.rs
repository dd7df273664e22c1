//! Serological titer classification
//!
//! This module owns everything that turns a raw laboratory titer into
//! threshold-level exposure flags: string cleanup, the transcription-error
//! correction table, and the fixed diagnostic cutoffs. Keeping the policy in
//! one place keeps it auditable and testable in isolation.

use rustc_hash::FxHashMap;

use crate::error::{Error, Result};

/// Lowest dilution the assay reports; anything below is censored as `<40`
pub const DETECTION_FLOOR: f64 = 40.0;

/// Any detectable exposure
pub const THRESHOLD_DETECTABLE: f64 = 40.0;

/// Conventional clinical-significance cutoff
pub const THRESHOLD_CLINICAL: f64 = 160.0;

/// High-titer subset
pub const THRESHOLD_HIGH_TITER: f64 = 320.0;

/// Clean a raw titer string into a non-negative integer magnitude.
///
/// A `<`-marked below-detection notation (for example `"<40"`) maps to half
/// the stated bound, the standard serological convention for censored values.
/// Any other non-digit character is stripped before parsing. Returns `None`
/// when no parseable magnitude remains; callers treat that as a rejection,
/// never as zero.
#[must_use]
pub fn clean_titer(raw: &str) -> Option<u32> {
    let trimmed = raw.trim();
    let digits: String = trimmed.chars().filter(char::is_ascii_digit).collect();
    if digits.is_empty() {
        return None;
    }
    let magnitude: u32 = digits.parse().ok()?;
    if trimmed.contains('<') {
        Some(magnitude / 2)
    } else {
        Some(magnitude)
    }
}

/// Exact-match corrections for known transcription errors in the titer column.
///
/// A finite, enumerated set of `{wrong -> right}` pairs consulted after
/// parsing and before threshold derivation. The defaults carry the two errors
/// observed in the field sheets: a mistyped four-digit dilution and a mistyped
/// five-digit one, each off by a transposed digit from a real dilution step.
#[derive(Debug, Clone)]
pub struct TiterCorrections {
    table: FxHashMap<u32, u32>,
}

impl Default for TiterCorrections {
    fn default() -> Self {
        Self::empty().with_pair(5180, 5120).with_pair(10420, 10240)
    }
}

impl TiterCorrections {
    /// Create a correction table with no entries
    #[must_use]
    pub fn empty() -> Self {
        Self {
            table: FxHashMap::default(),
        }
    }

    /// Add a `{wrong -> right}` pair
    #[must_use]
    pub fn with_pair(mut self, wrong: u32, right: u32) -> Self {
        self.table.insert(wrong, right);
        self
    }

    /// Apply the table to a parsed magnitude; unknown values pass through
    #[must_use]
    pub fn correct(&self, magnitude: u32) -> u32 {
        self.table.get(&magnitude).copied().unwrap_or(magnitude)
    }

    /// Number of enumerated pairs
    #[must_use]
    pub fn len(&self) -> usize {
        self.table.len()
    }

    /// Whether the table has no entries
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }
}

/// Classify a titer against one threshold.
///
/// `None` titers propagate as `None`; they are never defaulted to a negative
/// result. A non-finite or negative threshold is a programming-contract
/// violation and aborts the call.
pub fn exposure_at(titer: Option<f64>, threshold: f64) -> Result<Option<bool>> {
    if !threshold.is_finite() || threshold < 0.0 {
        return Err(Error::InvalidThreshold { threshold });
    }
    Ok(titer.map(|t| t >= threshold))
}

/// Exposure flags at the three fixed diagnostic thresholds.
///
/// All three are derived together and exposed independently: downstream
/// consumers select different cutoffs for different questions, so no single
/// flag is privileged here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExposureProfile {
    /// Titer >= 40
    pub detectable: Option<bool>,
    /// Titer >= 160
    pub clinical: Option<bool>,
    /// Titer >= 320
    pub high_titer: Option<bool>,
}

impl ExposureProfile {
    /// Derive all three threshold flags from a canonical titer magnitude
    #[must_use]
    pub fn classify(titer: Option<f64>) -> Self {
        Self {
            detectable: titer.map(|t| t >= THRESHOLD_DETECTABLE),
            clinical: titer.map(|t| t >= THRESHOLD_CLINICAL),
            high_titer: titer.map(|t| t >= THRESHOLD_HIGH_TITER),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_titer_below_detection() {
        assert_eq!(clean_titer("<40"), Some(20));
        assert_eq!(clean_titer("  < 40 "), Some(20));
        assert_eq!(clean_titer("<40*"), Some(20));
    }

    #[test]
    fn test_clean_titer_strips_noise() {
        assert_eq!(clean_titer(" 320 "), Some(320));
        assert_eq!(clean_titer("640+"), Some(640));
        assert_eq!(clean_titer("160*"), Some(160));
    }

    #[test]
    fn test_clean_titer_unparsable() {
        assert_eq!(clean_titer("positive"), None);
        assert_eq!(clean_titer(""), None);
        assert_eq!(clean_titer("   "), None);
    }

    #[test]
    fn test_corrections_exact_match_only() {
        let corrections = TiterCorrections::default();
        assert_eq!(corrections.correct(5180), 5120);
        assert_eq!(corrections.correct(10420), 10240);
        assert_eq!(corrections.correct(5120), 5120);
        assert_eq!(corrections.correct(160), 160);
    }

    #[test]
    fn test_exposure_null_propagates() {
        assert_eq!(exposure_at(None, THRESHOLD_CLINICAL).unwrap(), None);
        assert_eq!(exposure_at(Some(160.0), THRESHOLD_CLINICAL).unwrap(), Some(true));
        assert_eq!(exposure_at(Some(80.0), THRESHOLD_CLINICAL).unwrap(), Some(false));
    }

    #[test]
    fn test_exposure_rejects_bad_threshold() {
        assert!(exposure_at(Some(160.0), -1.0).is_err());
        assert!(exposure_at(Some(160.0), f64::NAN).is_err());
    }

    #[test]
    fn test_profile_threshold_monotonicity() {
        for magnitude in [0u32, 20, 40, 80, 160, 320, 640, 5120] {
            let profile = ExposureProfile::classify(Some(f64::from(magnitude)));
            if profile.high_titer == Some(true) {
                assert_eq!(profile.clinical, Some(true));
            }
            if profile.clinical == Some(true) {
                assert_eq!(profile.detectable, Some(true));
            }
        }
    }

    #[test]
    fn test_profile_of_censored_titer() {
        // "<40" cleans to 20, below every threshold
        let profile = ExposureProfile::classify(Some(20.0));
        assert_eq!(profile.detectable, Some(false));
        assert_eq!(profile.clinical, Some(false));
        assert_eq!(profile.high_titer, Some(false));
    }
}
