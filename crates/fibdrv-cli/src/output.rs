//! CLI output formatting.

use std::io::{self, Write};
use std::path::Path;
use std::time::Duration;

/// Shorten a long decimal string for display unless `verbose` is set.
#[must_use]
pub fn format_result(digits: &str, verbose: bool) -> String {
    if !verbose && digits.len() > 100 {
        format!(
            "{}...{} ({} digits)",
            &digits[..50],
            &digits[digits.len() - 50..],
            digits.len()
        )
    } else {
        digits.to_string()
    }
}

/// Format an elapsed time with a unit that keeps it readable.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn format_duration(d: Duration) -> String {
    if d < Duration::from_millis(1) {
        format!("{:.2}µs", d.as_secs_f64() * 1e6)
    } else if d < Duration::from_secs(1) {
        format!("{:.2}ms", d.as_secs_f64() * 1e3)
    } else if d < Duration::from_secs(60) {
        format!("{:.3}s", d.as_secs_f64())
    } else {
        let mins = d.as_secs() / 60;
        let rest = d.as_secs_f64() - (mins * 60) as f64;
        format!("{mins}m{rest:.1}s")
    }
}

/// Group the digits of `n` in threes with commas.
#[must_use]
pub fn format_number(n: u64) -> String {
    let digits = n.to_string();
    let head = digits.len() % 3;
    let mut out = String::from(&digits[..head]);
    for start in (head..digits.len()).step_by(3) {
        if !out.is_empty() {
            out.push(',');
        }
        out.push_str(&digits[start..start + 3]);
    }
    out
}

/// Write the digits to `path`, newline terminated.
pub fn write_to_file(path: &Path, digits: &str) -> io::Result<()> {
    let mut file = std::fs::File::create(path)?;
    writeln!(file, "{digits}")?;
    Ok(())
}
