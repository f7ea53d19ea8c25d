//! Human-readable byte size expressions.
//!
//! Converts size strings like `"128MB"` or `"1.5GB"` into byte counts and
//! byte counts back into strings for reporting. Units are binary multiples
//! (1 KB = 1024 B).

use thiserror::Error;

/// One kibibyte in bytes.
pub const ONE_KB: u64 = 1024;
/// One mebibyte in bytes.
pub const ONE_MB: u64 = 1024 * 1024;
/// One gibibyte in bytes.
pub const ONE_GB: u64 = 1024 * 1024 * 1024;

/// Errors produced when a size expression cannot be parsed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MalformedSizeError {
    /// The numeric magnitude is missing or not parseable.
    #[error("invalid size magnitude in {0:?}")]
    InvalidMagnitude(String),

    /// The unit suffix is not one of the recognized units.
    #[error("unrecognized size unit {unit:?} in {input:?} (expected one of B, KB, MB, GB)")]
    UnknownUnit { input: String, unit: String },

    /// The magnitude is negative or otherwise out of range.
    #[error("size magnitude out of range in {0:?}")]
    OutOfRange(String),
}

/// Parse a size expression into a byte count.
///
/// The expression is a numeric magnitude (integer or fractional) followed by
/// a unit suffix: `B`, `KB`, `MB` or `GB`. The single-letter and IEC-style
/// aliases `K`, `Mi` and `Gi` are accepted too.
///
/// ```
/// assert_eq!(sizeunit::parse_size("128MB").unwrap(), 128 * 1024 * 1024);
/// assert_eq!(sizeunit::parse_size("1.5KB").unwrap(), 1536);
/// ```
pub fn parse_size(input: &str) -> Result<u64, MalformedSizeError> {
    let trimmed = input.trim();
    let split = trimmed
        .find(|c: char| c != '.' && !c.is_ascii_digit())
        .unwrap_or(trimmed.len());
    let (magnitude, unit) = trimmed.split_at(split);
    let unit = unit.trim_start();

    let magnitude: f64 = magnitude
        .parse()
        .map_err(|_| MalformedSizeError::InvalidMagnitude(input.to_string()))?;
    if !magnitude.is_finite() || magnitude < 0.0 {
        return Err(MalformedSizeError::OutOfRange(input.to_string()));
    }

    let multiplier = match unit {
        "B" => 1,
        "K" | "KB" => ONE_KB,
        "Mi" | "MB" => ONE_MB,
        "Gi" | "GB" => ONE_GB,
        _ => {
            return Err(MalformedSizeError::UnknownUnit {
                input: input.to_string(),
                unit: unit.to_string(),
            })
        }
    };

    Ok((magnitude * multiplier as f64) as u64)
}

/// Format a byte count using the largest fitting unit, to 3 decimal places.
///
/// Boundary rule: a value is shown in the smaller unit up to and including
/// the unit threshold, i.e. 1024 renders as `"1024.000 B"` and 1025 as
/// `"1.001 KB"`.
pub fn format_size(bytes: u64) -> String {
    if bytes <= ONE_KB {
        format!("{:.3} B", bytes as f64)
    } else if bytes <= ONE_MB {
        format!("{:.3} KB", bytes as f64 / ONE_KB as f64)
    } else if bytes <= ONE_GB {
        format!("{:.3} MB", bytes as f64 / ONE_MB as f64)
    } else {
        format!("{:.3} GB", bytes as f64 / ONE_GB as f64)
    }
}
