//! Fixed-column rendering of the size-type set.
//!
//! The set is split into contiguous, near-equal segments (the first
//! `len % columns` segments take one extra element) and printed row by row
//! across segments. Rows past the end of a short segment simply lose that
//! cell, so the tail of an uneven set renders as a short final row.

/// Render `values` as tab-joined rows across `columns` segments.
pub fn render_rows(values: &[String], columns: usize) -> Vec<String> {
    let segments = split_segments(values, columns);
    let height = segments.first().map(|s| s.len()).unwrap_or(0);

    (0..height)
        .map(|row| {
            segments
                .iter()
                .filter_map(|segment| segment.get(row))
                .map(|value| value.trim())
                .collect::<Vec<_>>()
                .join("\t")
        })
        .collect()
}

/// Print the column layout for interactive use.
pub fn print_columns(values: &[String], columns: usize) {
    for row in render_rows(values, columns) {
        println!("\t{}", row);
    }
    println!();
}

/// Split into `n` contiguous segments of near-equal length; when the length
/// is not divisible the first `len % n` segments get one extra element.
fn split_segments(values: &[String], n: usize) -> Vec<&[String]> {
    if n == 0 {
        return Vec::new();
    }
    let k = values.len() / n;
    let m = values.len() % n;

    (0..n)
        .map(|i| {
            let start = i * k + i.min(m);
            let end = (i + 1) * k + (i + 1).min(m);
            &values[start..end]
        })
        .collect()
}
