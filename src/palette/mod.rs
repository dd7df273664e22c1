//! Visual-encoding palette for exposure states and cohort prevalence
//!
//! One parameterized mapping covers every pathogen and pathogen combination:
//! an [`InteractionState`] (1, 2 or 3 joint exposure factors) is compared
//! against a caller-supplied designated-positive tuple and encoded as a
//! highlight or background token. The same machinery serves single-pathogen
//! maps (arity 1), co-exposure maps (arity 2) and triple co-exposure maps
//! (arity 3), so adding a pathogen never grows the mapping code.
//!
//! Cohort-level prevalence uses the continuous [`PrevalenceRamp`] instead of
//! the discrete lookup.

use serde::Serialize;
use smallvec::SmallVec;

use crate::error::{Error, Result};
use crate::models::colony::ColonyCohort;

/// Default highlight color for designated-positive states
pub const DEFAULT_HIGHLIGHT: &str = "#d7191c";

/// Default background color for all other states
pub const DEFAULT_BACKGROUND: &str = "#2b83ba";

/// Default ordered ramp for prevalence display, low to high
pub const DEFAULT_RAMP: [&str; 5] = ["#ffffb2", "#fecc5c", "#fd8d3c", "#f03b20", "#bd0026"];

/// One discrete encoding token handed to the presenter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PaletteToken {
    /// Render with this color identifier
    Color(&'static str),
    /// Do not render the mark at all
    Suppress,
}

/// The two-token palette a discrete encoding draws from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiscretePalette {
    /// Color for the designated-positive state
    pub highlight: &'static str,
    /// Color for every other state
    pub background: &'static str,
}

impl Default for DiscretePalette {
    fn default() -> Self {
        Self {
            highlight: DEFAULT_HIGHLIGHT,
            background: DEFAULT_BACKGROUND,
        }
    }
}

/// How non-designated states are rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EmphasisMode {
    /// Background states get the visible background color
    #[default]
    Solid,
    /// Background states are suppressed entirely
    HighlightOnly,
}

/// Joint exposure status across one, two or three pathogens.
///
/// Backed by an inline small vector; arity is fixed at construction and
/// checked, so an out-of-contract tuple fails loudly instead of mapping to
/// some accidental token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InteractionState(SmallVec<[bool; 3]>);

impl InteractionState {
    /// Largest supported number of joint factors
    pub const MAX_FACTORS: usize = 3;

    /// Build a state from a factor slice; arity must be 1..=3
    pub fn new(factors: &[bool]) -> Result<Self> {
        if factors.is_empty() || factors.len() > Self::MAX_FACTORS {
            return Err(Error::InvalidArity {
                arity: factors.len(),
            });
        }
        Ok(Self(SmallVec::from_slice(factors)))
    }

    /// Single-factor state
    #[must_use]
    pub fn single(a: bool) -> Self {
        Self(SmallVec::from_slice(&[a]))
    }

    /// Two-factor state
    #[must_use]
    pub fn pair(a: bool, b: bool) -> Self {
        Self(SmallVec::from_slice(&[a, b]))
    }

    /// Three-factor state
    #[must_use]
    pub fn triple(a: bool, b: bool, c: bool) -> Self {
        Self(SmallVec::from_slice(&[a, b, c]))
    }

    /// Number of joint factors
    #[must_use]
    pub fn arity(&self) -> usize {
        self.0.len()
    }

    /// The factor values in declaration order
    #[must_use]
    pub fn factors(&self) -> &[bool] {
        &self.0
    }
}

/// Encode an interaction state against a designated-positive tuple.
///
/// Total over every tuple of the designated arity: the designated combination
/// maps to the highlight token, every other combination to the background
/// token (or [`PaletteToken::Suppress`] under
/// [`EmphasisMode::HighlightOnly`]). An arity mismatch between `state` and
/// `designated` is a contract violation and aborts the call.
pub fn encode(
    state: &InteractionState,
    designated: &InteractionState,
    palette: &DiscretePalette,
    mode: EmphasisMode,
) -> Result<PaletteToken> {
    if state.arity() != designated.arity() {
        return Err(Error::InteractionArity {
            expected: designated.arity(),
            actual: state.arity(),
        });
    }
    if state == designated {
        return Ok(PaletteToken::Color(palette.highlight));
    }
    Ok(match mode {
        EmphasisMode::Solid => PaletteToken::Color(palette.background),
        EmphasisMode::HighlightOnly => PaletteToken::Suppress,
    })
}

/// Continuous color ramp for cohort prevalence percentages.
///
/// Fitted to the observed prevalence range so the ramp spans exactly what the
/// data shows; the mapping is monotonic in the input percentage.
#[derive(Debug, Clone, PartialEq)]
pub struct PrevalenceRamp {
    stops: Vec<&'static str>,
    min: f64,
    max: f64,
}

impl PrevalenceRamp {
    /// Fit the default ramp to the observed prevalence range of `cohorts`.
    ///
    /// Cohorts without an assessable prevalence are ignored; if none remains
    /// there is nothing to span and the call fails.
    pub fn fit(cohorts: &[ColonyCohort]) -> Result<Self> {
        let observed: Vec<f64> = cohorts
            .iter()
            .filter_map(|c| c.toxo_prevalence_pct)
            .collect();
        let (Some(min), Some(max)) = (
            observed.iter().copied().reduce(f64::min),
            observed.iter().copied().reduce(f64::max),
        ) else {
            return Err(Error::EmptyRamp);
        };
        Self::with_stops(DEFAULT_RAMP.to_vec(), min, max)
    }

    /// Build a ramp over an explicit domain with custom stops
    pub fn with_stops(stops: Vec<&'static str>, min: f64, max: f64) -> Result<Self> {
        if stops.is_empty() || !min.is_finite() || !max.is_finite() || min > max {
            return Err(Error::EmptyRamp);
        }
        Ok(Self { stops, min, max })
    }

    /// Observed domain the ramp spans
    #[must_use]
    pub fn domain(&self) -> (f64, f64) {
        (self.min, self.max)
    }

    /// The ordered color stops, low to high
    #[must_use]
    pub fn stops(&self) -> &[&'static str] {
        &self.stops
    }

    /// Color for a prevalence percentage; inputs outside the fitted domain
    /// clamp to its ends
    #[must_use]
    pub fn color_for(&self, prevalence_pct: f64) -> &'static str {
        let last = self.stops.len() - 1;
        if self.max <= self.min || last == 0 {
            return self.stops[last];
        }
        let t = ((prevalence_pct - self.min) / (self.max - self.min)).clamp(0.0, 1.0);
        let index = (t * last as f64).round() as usize;
        self.stops[index.min(last)]
    }
}
