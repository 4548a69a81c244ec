/// Placeholder shown for any absent field.
pub const PLACEHOLDER: &str = "\u{2014}";

const CARD_UNITS: [&str; 5] = ["B", "KB", "MB", "GB", "TB"];

const GENERAL_UNITS: [&str; 9] = [
    "Bytes", "KB", "MB", "GB", "TB", "PB", "EB", "ZB", "YB",
];

/// Format a byte count for the host cards.
///
/// Absent values render as the placeholder. The unit sequence is bounded at
/// TB; anything larger stays expressed in TB. The byte tier prints with no
/// decimals, every other tier with exactly two. That asymmetry is part of
/// the display contract: 512 -> "512 B", 1536 -> "1.50 KB".
pub fn byte_format(value: Option<u64>) -> String {
    let Some(bytes) = value else {
        return PLACEHOLDER.to_string();
    };

    let mut n = bytes as f64;
    let mut unit = 0;
    while n >= 1024.0 && unit < CARD_UNITS.len() - 1 {
        n /= 1024.0;
        unit += 1;
    }

    if unit == 0 {
        format!("{:.0} {}", n, CARD_UNITS[unit])
    } else {
        format!("{:.2} {}", n, CARD_UNITS[unit])
    }
}

/// General-purpose byte formatter for chart labels and tooltips.
///
/// Unit index comes from the base-1024 logarithm, the sequence runs up to
/// yottabytes, and trailing zeros are trimmed from the fraction. Exactly
/// zero is special-cased as "0 Bytes". This is a separate contract from
/// [`byte_format`]: the two deliberately disagree at the byte tier and must
/// not be merged.
pub fn format_bytes(bytes: f64, decimals: usize) -> String {
    if bytes == 0.0 {
        return "0 Bytes".to_string();
    }

    let unit = (bytes.ln() / 1024_f64.ln()).floor() as usize;
    let unit = unit.min(GENERAL_UNITS.len() - 1);
    let scaled = bytes / 1024_f64.powi(unit as i32);

    let mut text = format!("{:.*}", decimals, scaled);
    if text.contains('.') {
        text = text
            .trim_end_matches('0')
            .trim_end_matches('.')
            .to_string();
    }

    format!("{} {}", text, GENERAL_UNITS[unit])
}

/// Percent suffix for the card sub-lines: empty when the value is absent.
pub fn percent_suffix(value: Option<f64>) -> String {
    match value {
        Some(percent) => format!("{}%", percent),
        None => String::new(),
    }
}
