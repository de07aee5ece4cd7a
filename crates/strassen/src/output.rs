//! Output formatting helpers.

use std::io::{self, Write};
use std::path::Path;
use std::time::Duration;

use strassen_core::Matrix;

/// Format a duration for display.
#[must_use]
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
pub fn format_duration(d: Duration) -> String {
    let secs = d.as_secs_f64();
    if secs < 0.001 {
        format!("{:.2}µs", secs * 1_000_000.0)
    } else if secs < 1.0 {
        format!("{:.2}ms", secs * 1000.0)
    } else if secs < 60.0 {
        format!("{secs:.3}s")
    } else {
        let mins = (secs / 60.0).floor() as u64;
        let remaining = secs - (mins as f64 * 60.0);
        format!("{mins}m{remaining:.1}s")
    }
}

/// Wrapping sum of all entries, used as a compact fingerprint of a product.
#[must_use]
pub fn checksum(m: &Matrix) -> i64 {
    m.values()
        .iter()
        .flatten()
        .fold(0i64, |acc, &v| acc.wrapping_add(i64::from(v)))
}

/// Render a matrix, eliding it when large unless `verbose` is set.
#[must_use]
pub fn format_matrix(m: &Matrix, verbose: bool) -> String {
    if !verbose && m.rows().max(m.cols()) > 16 {
        format!("<{}x{} matrix, checksum {}>\n", m.rows(), m.cols(), checksum(m))
    } else {
        m.to_string()
    }
}

/// Write a matrix to a file.
pub fn write_to_file(path: &Path, m: &Matrix) -> io::Result<()> {
    let mut file = std::fs::File::create(path)?;
    write!(file, "{m}")?;
    Ok(())
}
