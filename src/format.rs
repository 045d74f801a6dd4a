//! Byte-size formatting helper.

const UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];

/// Render a byte count using binary (1024-based) units, rounded to at most
/// two decimal places with trailing zeros trimmed.
///
/// Zero is special-cased to `"0 Bytes"`. Counts past the GB range stay in GB.
pub fn format_file_size(bytes: u64) -> String {
    if bytes == 0 {
        return "0 Bytes".to_string();
    }

    let exponent = ((bytes as f64).ln() / 1024_f64.ln()).floor() as usize;
    let exponent = exponent.min(UNITS.len() - 1);
    let value = bytes as f64 / 1024_f64.powi(exponent as i32);

    format!("{} {}", trim_decimals(value), UNITS[exponent])
}

/// Format to two decimal places, then drop trailing zeros ("1.50" → "1.5",
/// "1.00" → "1").
fn trim_decimals(value: f64) -> String {
    let fixed = format!("{value:.2}");
    fixed.trim_end_matches('0').trim_end_matches('.').to_string()
}
