//! Property-based tests for colcut using proptest.

use colcut::{Spec, Splitter};
use proptest::prelude::*;

// ============================================================================
// Test helpers
// ============================================================================

const ALIGNMENT_SPECS: [&str; 4] = [
    "left-align",
    "left-align-multi-word",
    "right-align",
    "right-align-multi-word",
];

// Rows and lines drawn from the splitter's alphabet: words and spaces.
fn row_strategy() -> impl Strategy<Value = String> {
    "[ a-zA-Z0-9]{0,60}".prop_map(String::from)
}

fn widths_strategy() -> impl Strategy<Value = Vec<usize>> {
    prop::collection::vec(1usize..20, 0..8)
}

fn widths_spec(widths: &[usize]) -> String {
    let list: Vec<String> = widths.iter().map(|w| w.to_string()).collect();
    format!("widths:{}", list.join(","))
}

// ============================================================================
// Property tests
// ============================================================================

proptest! {
    /// Joining the fields of any split reproduces the line exactly, for
    /// every alignment mode and any reference row.
    #[test]
    fn alignment_split_round_trips(
        mode in 0usize..ALIGNMENT_SPECS.len(),
        reference_row in row_strategy(),
        line in row_strategy(),
    ) {
        let splitter = Splitter::new(ALIGNMENT_SPECS[mode], &reference_row).unwrap();
        let fields = splitter.split(&line);
        prop_assert_eq!(fields.concat(), line);
    }

    /// Joining the fields of a width-based split reproduces the line.
    #[test]
    fn widths_split_round_trips(
        widths in widths_strategy(),
        line in row_strategy(),
    ) {
        let splitter = Splitter::new(&widths_spec(&widths), "").unwrap();
        let fields = splitter.split(&line);
        prop_assert_eq!(fields.concat(), line);
    }

    /// Detected boundary offsets are strictly increasing and never zero.
    #[test]
    fn boundaries_are_strictly_increasing_and_nonzero(
        mode in 0usize..ALIGNMENT_SPECS.len(),
        reference_row in row_strategy(),
    ) {
        let spec: Spec = ALIGNMENT_SPECS[mode].parse().unwrap();
        let offsets = spec.boundaries(&reference_row);
        for pair in offsets.windows(2) {
            prop_assert!(pair[0] < pair[1]);
        }
        prop_assert!(!offsets.contains(&0));
    }

    /// Width offsets are exactly the prefix sums of the width list.
    #[test]
    fn width_offsets_are_prefix_sums(widths in widths_strategy()) {
        let spec: Spec = widths_spec(&widths).parse().unwrap();
        let offsets = spec.boundaries("");

        let mut sum = 0;
        let expected: Vec<usize> = widths
            .iter()
            .map(|w| {
                sum += w;
                sum
            })
            .collect();
        prop_assert_eq!(offsets, expected);
    }

    /// A split yields at most one field more than there are offsets, and
    /// never an empty field except the single-field whole-line case.
    #[test]
    fn field_count_is_bounded(
        widths in widths_strategy(),
        line in row_strategy(),
    ) {
        let splitter = Splitter::new(&widths_spec(&widths), "").unwrap();
        let fields = splitter.split(&line);
        prop_assert!(fields.len() <= splitter.offsets().len() + 1);
        if !splitter.offsets().is_empty() {
            for field in &fields {
                prop_assert!(!field.is_empty());
            }
        }
    }

    /// With no offsets, splitting is the identity (one whole-line field).
    #[test]
    fn empty_offsets_return_line_unchanged(line in row_strategy()) {
        let splitter = Splitter::new("widths:", "anything").unwrap();
        prop_assert_eq!(splitter.split(&line), vec![line.as_str()]);
    }

    /// Splitting the reference row itself by its left-aligned boundaries
    /// yields fields that each start with a word character (boundaries
    /// always land on gap-to-word transitions).
    #[test]
    fn left_fields_of_reference_row_start_with_words(
        reference_row in "[a-z]{1,8}(  +[a-z]{1,8})*".prop_map(String::from),
    ) {
        let splitter = Splitter::new("left-align", &reference_row).unwrap();
        for (i, field) in splitter.split(&reference_row).iter().enumerate() {
            if i > 0 {
                prop_assert!(!field.starts_with(' '));
            }
        }
    }

    /// Display output of a parsed spec parses back to the same spec.
    #[test]
    fn spec_display_round_trips(
        mode in 0usize..ALIGNMENT_SPECS.len(),
        widths in widths_strategy(),
    ) {
        for spec_str in [ALIGNMENT_SPECS[mode].to_string(), widths_spec(&widths)] {
            let spec: Spec = spec_str.parse().unwrap();
            let reparsed: Spec = spec.to_string().parse().unwrap();
            prop_assert_eq!(reparsed, spec);
        }
    }
}

// ============================================================================
// Additional edge case tests
// ============================================================================

#[test]
fn empty_line_with_offsets_yields_no_fields() {
    let splitter = Splitter::new("widths:2,4", "").unwrap();
    assert!(splitter.split("").is_empty());
}

#[test]
fn empty_line_without_offsets_is_one_empty_field() {
    let splitter = Splitter::new("left-align", "").unwrap();
    assert_eq!(splitter.split(""), [""]);
}

#[test]
fn splitter_is_reusable_across_lines() {
    let splitter = Splitter::new("widths:3", "").unwrap();
    assert_eq!(splitter.split("abcdef"), ["abc", "def"]);
    assert_eq!(splitter.split("xyz"), ["xyz"]);
    assert_eq!(splitter.split("ab"), ["ab"]);
}
