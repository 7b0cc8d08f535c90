//! Rendering of curve segments as a source-ready C array literal.
use crate::fitting::fitstruct::CurveSegment;
use itertools::Itertools;

/// Header line printed above the rendered array literal.
pub const CURVE_STRUCT_HEADER: &str = "RAIL_TxPowerCurveSegment_t[] C Structure";

/// Renders the segment list as a brace-delimited array of
/// `{ maxValue, slope, intercept }` tuples, ready for pasting into a power
/// curve header.
///
/// Every row is left-justified to the width of the longest unspaced tuple
/// plus five, rows after the first are indented under the opening brace, and
/// rows are joined with C line continuations. The final row's padding and
/// trailing comma are stripped so the literal closes cleanly.
pub fn curve_segments_string(segments: &[CurveSegment]) -> String {
    let width = segments
        .iter()
        .map(|s| format!("{{{}, {}, {}}},", s.max_value, s.slope, s.intercept).len())
        .max()
        .unwrap_or(0)
        + 5;

    let body = segments
        .iter()
        .map(|s| {
            let row = format!("{{ {}, {}, {} }},", s.max_value, s.slope, s.intercept);
            format!("{row:<width$}")
        })
        .join("\\\n  ");

    let mut array_str = format!("{{ {body}");
    while !array_str.is_empty() && !array_str.ends_with('}') {
        array_str.pop();
    }
    array_str.push_str(" }");
    array_str
}
