use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Valid band for measurement A.
pub const A_RANGE: RangeInclusive<f64> = 16.0..=24.0;
/// Valid band for measurement B.
pub const B_RANGE: RangeInclusive<f64> = 14.0..=29.0;

const SMALL_MAX_A: f64 = 18.5;
const REGULAR_MAX_A: f64 = 21.0;
const STANDARD_MAX_B: f64 = 21.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BraceSize {
    Small,
    Regular,
    Tall,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StrapSize {
    Standard,
    Long,
}

impl BraceSize {
    pub const ALL: [BraceSize; 3] = [BraceSize::Small, BraceSize::Regular, BraceSize::Tall];

    pub fn as_str(self) -> &'static str {
        match self {
            BraceSize::Small => "Small",
            BraceSize::Regular => "Regular",
            BraceSize::Tall => "Tall",
        }
    }
}

impl StrapSize {
    pub const ALL: [StrapSize; 2] = [StrapSize::Standard, StrapSize::Long];

    pub fn as_str(self) -> &'static str {
        match self {
            StrapSize::Standard => "Standard",
            StrapSize::Long => "Long",
        }
    }
}

impl fmt::Display for BraceSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for StrapSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown size name {0:?}")]
pub struct UnknownSize(pub String);

impl FromStr for BraceSize {
    type Err = UnknownSize;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BraceSize::ALL
            .into_iter()
            .find(|b| b.as_str() == s)
            .ok_or_else(|| UnknownSize(s.to_string()))
    }
}

impl FromStr for StrapSize {
    type Err = UnknownSize;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        StrapSize::ALL
            .into_iter()
            .find(|b| b.as_str() == s)
            .ok_or_else(|| UnknownSize(s.to_string()))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SizeSelection {
    pub brace: BraceSize,
    pub strap: StrapSize,
}

impl SizeSelection {
    pub const fn new(brace: BraceSize, strap: StrapSize) -> Self {
        Self { brace, strap }
    }

    /// Every selection the bands can produce.
    pub fn all() -> impl Iterator<Item = SizeSelection> {
        BraceSize::ALL
            .into_iter()
            .flat_map(|brace| StrapSize::ALL.into_iter().map(move |strap| SizeSelection { brace, strap }))
    }
}

impl fmt::Display for SizeSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} Brace / {} Strap", self.brace, self.strap)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SizeResult {
    /// A value is missing or unparseable. Nothing is shown.
    Incomplete,
    /// Outside the sizes we make; the page points to the help line.
    OutOfRange,
    Fit(SizeSelection),
}

impl SizeResult {
    pub fn selection(&self) -> Option<SizeSelection> {
        match self {
            SizeResult::Fit(s) => Some(*s),
            _ => None,
        }
    }

    pub fn is_fit(&self) -> bool {
        matches!(self, SizeResult::Fit(_))
    }
}

/// Derives the size from both measurements. The range check runs before
/// banding.
pub fn compute(a: Option<f64>, b: Option<f64>) -> SizeResult {
    let (Some(a), Some(b)) = (a, b) else {
        return SizeResult::Incomplete;
    };
    if !(a.is_finite() && b.is_finite() && a > 0.0 && b > 0.0) {
        return SizeResult::Incomplete;
    }
    if !A_RANGE.contains(&a) || !B_RANGE.contains(&b) {
        return SizeResult::OutOfRange;
    }
    SizeResult::Fit(SizeSelection {
        brace: brace_band(a),
        strap: strap_band(b),
    })
}

fn brace_band(a: f64) -> BraceSize {
    if a <= SMALL_MAX_A {
        BraceSize::Small
    } else if a <= REGULAR_MAX_A {
        BraceSize::Regular
    } else {
        BraceSize::Tall
    }
}

fn strap_band(b: f64) -> StrapSize {
    if b <= STANDARD_MAX_B {
        StrapSize::Standard
    } else {
        StrapSize::Long
    }
}
