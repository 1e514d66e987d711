//! Specification parsing and dispatch.
//!
//! A [`Spec`] names one of the five supported boundary-detection
//! strategies. It is parsed once, up front, from a specification string;
//! after that, resolving boundaries against a reference row cannot fail.

use std::fmt;
use std::str::FromStr;

use crate::detect;
use crate::error::{Result, SpecError};
use crate::widths;

/// A parsed boundary-detection specification.
///
/// The recognized specification strings are:
///
/// | Form | Meaning |
/// |------|---------|
/// | `widths:<w1,w2,...>` | explicit comma-separated column widths; omit the last width to leave the final column open-ended |
/// | `left-align` | infer boundaries from a left-aligned reference row, single-word column names |
/// | `left-align-multi-word` | same, but column names may contain a single interior space |
/// | `right-align` | infer boundaries from a right-aligned reference row, single-word column names |
/// | `right-align-multi-word` | same, but column names may contain a single interior space |
///
/// Anything else fails with [`SpecError::UnknownSpec`]. Width validation
/// happens here too, so a successfully parsed `Spec` always resolves.
///
/// # Example
///
/// ```
/// use colcut::Spec;
///
/// let spec: Spec = "widths:4,4,5".parse().unwrap();
/// assert_eq!(spec.boundaries(""), [4, 8, 13]);
///
/// assert!("tab-separated".parse::<Spec>().is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Spec {
    /// Explicit column widths, validated to be positive.
    ExplicitWidths(Vec<usize>),
    /// Left-aligned reference row, single-word column names.
    LeftAlign,
    /// Left-aligned reference row, multi-word column names.
    LeftAlignMultiWord,
    /// Right-aligned reference row, single-word column names.
    RightAlign,
    /// Right-aligned reference row, multi-word column names.
    RightAlignMultiWord,
}

impl Spec {
    /// Resolves the boundary offsets for this spec.
    ///
    /// Alignment specs scan the reference row; explicit widths ignore it.
    /// The result is strictly increasing and never contains 0.
    pub fn boundaries(&self, reference_row: &str) -> Vec<usize> {
        match self {
            Spec::ExplicitWidths(ws) => widths::to_offsets(ws),
            Spec::LeftAlign => detect::left_aligned(reference_row, false),
            Spec::LeftAlignMultiWord => detect::left_aligned(reference_row, true),
            Spec::RightAlign => detect::right_aligned(reference_row, false),
            Spec::RightAlignMultiWord => detect::right_aligned(reference_row, true),
        }
    }

    /// Returns `true` if resolving this spec consults the reference row.
    pub fn needs_reference_row(&self) -> bool {
        !matches!(self, Spec::ExplicitWidths(_))
    }
}

impl FromStr for Spec {
    type Err = SpecError;

    fn from_str(s: &str) -> Result<Self> {
        if let Some(list) = s.strip_prefix("widths:") {
            return Ok(Spec::ExplicitWidths(widths::parse_list(list)?));
        }
        match s {
            "left-align" => Ok(Spec::LeftAlign),
            "left-align-multi-word" => Ok(Spec::LeftAlignMultiWord),
            "right-align" => Ok(Spec::RightAlign),
            "right-align-multi-word" => Ok(Spec::RightAlignMultiWord),
            other => Err(SpecError::UnknownSpec(other.to_string())),
        }
    }
}

impl fmt::Display for Spec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Spec::ExplicitWidths(ws) => {
                let list: Vec<String> = ws.iter().map(|w| w.to_string()).collect();
                write!(f, "widths:{}", list.join(","))
            }
            Spec::LeftAlign => f.write_str("left-align"),
            Spec::LeftAlignMultiWord => f.write_str("left-align-multi-word"),
            Spec::RightAlign => f.write_str("right-align"),
            Spec::RightAlignMultiWord => f.write_str("right-align-multi-word"),
        }
    }
}
