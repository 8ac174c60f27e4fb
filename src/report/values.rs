//! Capability value rendering
//!
//! Each query result is turned into the text that follows its label:
//! - name lists: `a, b, c` with no brackets, empty when there is nothing to list
//! - ranges: `[min, max]`
//! - range lists: `[min, max], [min, max]` with every bound divided by a scale
//! - number lists: `[a, b, c]`, collapsed to `[first, last]` past three entries

use alloc::{format, string::String, vec::Vec};

use super::number::General;
use crate::device::Range;

/// Number lists longer than this are collapsed to their first and last entry.
const MAX_LISTED_NUMBERS: usize = 3;

/// Joins names with `, `.
pub fn names<S: AsRef<str>>(names: &[S]) -> String {
    names
        .iter()
        .map(|name| name.as_ref())
        .collect::<Vec<&str>>()
        .join(", ")
}

/// Renders a range as `[min, max]`.
pub fn range(range: &Range) -> String {
    format!("[{}, {}]", General(range.minimum), General(range.maximum))
}

/// Renders every range as `[min/scale, max/scale]`, separated by `, `.
pub fn range_list(ranges: &[Range], scale: f64) -> String {
    ranges
        .iter()
        .map(|r| format!("[{}, {}]", General(r.minimum / scale), General(r.maximum / scale)))
        .collect::<Vec<String>>()
        .join(", ")
}

/// Renders numbers divided by `scale` inside brackets.
///
/// Lists longer than three entries only show their first and last value.
pub fn number_list(numbers: &[f64], scale: f64) -> String {
    if let [first, .., last] = numbers {
        if numbers.len() > MAX_LISTED_NUMBERS {
            return format!("[{}, {}]", General(first / scale), General(last / scale));
        }
    }

    let listed = numbers
        .iter()
        .map(|n| format!("{}", General(n / scale)))
        .collect::<Vec<String>>()
        .join(", ");
    format!("[{listed}]")
}

/// Renders a capability flag as `YES` or `NO`.
pub fn yes_no(flag: bool) -> &'static str {
    if flag {
        "YES"
    } else {
        "NO"
    }
}
