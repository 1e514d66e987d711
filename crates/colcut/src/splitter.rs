//! The splitter value and the split operation.

use crate::error::Result;
use crate::spec::Spec;

/// An immutable field splitter holding resolved column boundaries.
///
/// A splitter is constructed once per specification and reused for every
/// line of a dataset. It has no mutable state, so a single instance can
/// be shared across threads without locking. The reference row is only
/// consulted during construction and is not retained.
///
/// # Example
///
/// ```
/// use colcut::Splitter;
///
/// let splitter = Splitter::new("widths:4,4,5", "").unwrap();
/// assert_eq!(splitter.offsets(), [4, 8, 13]);
/// assert_eq!(splitter.split("abc123defghij"), ["abc1", "23de", "fghij"]);
/// ```
#[derive(Debug, Clone)]
pub struct Splitter {
    offsets: Vec<usize>,
}

impl Splitter {
    /// Parses `spec` and resolves boundaries against `reference_row`.
    ///
    /// See [`Spec`] for the recognized specification strings. The
    /// reference row is only consulted by the alignment specs.
    pub fn new(spec: &str, reference_row: &str) -> Result<Self> {
        let spec: Spec = spec.parse()?;
        Ok(Splitter::from_spec(&spec, reference_row))
    }

    /// Builds a splitter from an already parsed [`Spec`].
    pub fn from_spec(spec: &Spec, reference_row: &str) -> Self {
        Splitter {
            offsets: spec.boundaries(reference_row),
        }
    }

    /// Returns the resolved boundary offsets.
    pub fn offsets(&self) -> &[usize] {
        &self.offsets
    }

    /// Splits `line` at the boundary offsets.
    ///
    /// With no offsets the whole line is returned as a single field, even
    /// when empty. Otherwise the line is cut at each offset in order;
    /// offsets beyond the end of the line are ignored, so short lines
    /// yield fewer fields. An empty remainder after the last cut is
    /// omitted rather than returned as an empty field: a line whose
    /// length equals the last offset has no trailing empty field, and an
    /// empty line yields no fields at all.
    ///
    /// Joining the returned fields always reproduces `line` exactly.
    pub fn split<'a>(&self, line: &'a str) -> Vec<&'a str> {
        if self.offsets.is_empty() {
            return vec![line];
        }
        let cuts = self.cut_points(line);
        let mut fields = Vec::with_capacity(cuts.len() + 1);
        let mut start = 0;
        for &cut in &cuts {
            fields.push(&line[start..cut]);
            start = cut;
        }
        if start < line.len() {
            fields.push(&line[start..]);
        }
        fields
    }

    /// Maps the character offsets to byte positions in `line`, dropping
    /// offsets past the end of the line.
    fn cut_points(&self, line: &str) -> Vec<usize> {
        let mut cuts = Vec::with_capacity(self.offsets.len());
        let mut pending = self.offsets.iter().peekable();
        // One position per character, plus the end of the line so an
        // offset equal to the line length still cuts.
        let positions = line
            .char_indices()
            .map(|(byte, _)| byte)
            .chain(std::iter::once(line.len()));
        for (char_pos, byte_pos) in positions.enumerate() {
            match pending.peek() {
                Some(&&offset) if offset == char_pos => {
                    cuts.push(byte_pos);
                    pending.next();
                }
                Some(_) => {}
                None => break,
            }
        }
        cuts
    }
}
