//! Colcut - column boundary detection and field splitting for aligned text.
//!
//! Many tabular formats (legacy report exports, fixed-width logs, terminal
//! table output) align their columns with padding instead of separating
//! them with a delimiter character. Colcut locates the column boundaries
//! in such data and splits each line at those boundaries. It supports:
//!
//! - Explicit column widths (`widths:4,4,5`)
//! - Boundary inference from a left-aligned header row
//! - Boundary inference from a right-aligned header row
//! - Multi-word variants of both, allowing a single interior space in
//!   column names ("Last Seen")
//!
//! # Quick Start
//!
//! ```rust
//! use colcut::Splitter;
//!
//! let header = "Name      Place    Thing";
//! let splitter = Splitter::new("left-align", header).unwrap();
//!
//! let fields = splitter.split("JohnDoe   Nyc      Bottle");
//! assert_eq!(fields, ["JohnDoe   ", "Nyc      ", "Bottle"]);
//! ```
//!
//! # Boundary semantics
//!
//! A splitter owns an ordered, strictly increasing list of character
//! offsets, each marking where a new field starts. An empty list means the
//! whole line is one field. Splitting never fails: offsets beyond the end
//! of a short line are ignored, and an empty remainder after the last
//! offset is omitted rather than returned as an empty field, so joining
//! the fields reproduces the original line exactly.
//!
//! A [`Splitter`] is immutable after construction and holds no shared
//! state, so one instance can serve any number of threads concurrently.

mod detect;
mod error;
mod spec;
mod splitter;
mod widths;

// Re-export public API
pub use error::{Result, SpecError};
pub use spec::Spec;
pub use splitter::Splitter;
