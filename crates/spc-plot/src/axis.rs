//! Tick label precision

/// Decimals for tick labels on an axis spanning `range`
pub fn axis_decimals(range: f64) -> usize {
    let range = range.abs();
    if range > 100.0 {
        0
    } else if range > 10.0 {
        1
    } else {
        2
    }
}

/// Format `value` for an axis spanning `range`
pub fn format_tick(value: f64, range: f64) -> String {
    format!("{:.*}", axis_decimals(range), value)
}
