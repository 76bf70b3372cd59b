//! Human-readable byte and usage formatting

use keyhelp_client::UsageValue;

const KIB: f64 = 1024.0;
const MIB: i64 = 1_048_576;
const GIB: i64 = 1_073_741_824;

/// Placeholder for values that are missing or malformed.
pub const NOT_AVAILABLE: &str = "N/A";

/// Label used when a quota is unlimited.
pub const UNLIMITED_LABEL: &str = "Unlimited";

/// Format a byte count as GB, MB or KB, rounded to two decimals.
///
/// Thresholds are binary: `1024³` bytes and up are GB, `1024²` and up are MB,
/// everything else is KB. Trailing zeros are dropped (`2 GB`, `1.5 MB`).
#[allow(clippy::cast_precision_loss)]
pub fn format_bytes(bytes: i64) -> String {
    if bytes >= GIB {
        format!("{} GB", format_decimal(bytes as f64 / GIB as f64, 2))
    } else if bytes >= MIB {
        format!("{} MB", format_decimal(bytes as f64 / MIB as f64, 2))
    } else {
        format!("{} KB", format_decimal(bytes as f64 / KIB, 2))
    }
}

/// Disk usage line from a stats `{value, max}` pair.
///
/// Missing pair or missing `value` yields [`NOT_AVAILABLE`]; missing `max`
/// counts as unlimited.
pub fn format_disk_usage(usage: Option<&UsageValue>) -> String {
    match usage {
        Some(UsageValue {
            value: Some(used),
            max,
        }) => format_usage(*used, max.unwrap_or(-1)),
        _ => NOT_AVAILABLE.to_string(),
    }
}

/// `"<used> / Unlimited"` when `max <= 0`, else `"<used> / <max> (<percent>%)"`.
#[allow(clippy::cast_precision_loss)]
pub fn format_usage(used: i64, max: i64) -> String {
    let used_label = format_bytes(used);
    if max <= 0 {
        return format!("{used_label} / {UNLIMITED_LABEL}");
    }

    let percent = used as f64 / max as f64 * 100.0;
    format!(
        "{used_label} / {} ({}%)",
        format_bytes(max),
        format_decimal(percent, 1)
    )
}

/// Round half away from zero to `decimals` places and drop trailing zeros.
///
/// The scaled value is first cut to 15 significant digits, so decimal
/// half-cases such as `0.55` round up even when their binary value sits
/// just below the half.
fn format_decimal(value: f64, decimals: usize) -> String {
    let factor = 10_f64.powi(i32::try_from(decimals).unwrap_or(0));
    let rounded = pre_round(value * factor).round() / factor;
    let text = format!("{rounded:.decimals$}");
    let text = if text.contains('.') {
        text.trim_end_matches('0').trim_end_matches('.')
    } else {
        text.as_str()
    };
    if text == "-0" {
        "0".to_string()
    } else {
        text.to_string()
    }
}

/// `value` limited to 15 significant digits.
fn pre_round(value: f64) -> f64 {
    format!("{value:.14e}").parse().unwrap_or(value)
}
