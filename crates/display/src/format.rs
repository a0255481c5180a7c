//! Compact amount formatting.

const MEGA: f64 = 1_000_000.0;
const KILO: f64 = 1_000.0;

/// Format a quantity for a panel line.
///
/// Millions get an `M` suffix, thousands a `k`; the scaled value is
/// truncated, never rounded (`1999` → `1k`).
pub fn format_amount(value: f64) -> String {
    let (scaled, unit) = if value >= MEGA {
        (value / MEGA, "M")
    } else if value >= KILO {
        (value / KILO, "k")
    } else {
        (value, "")
    };
    format!("{}{unit}", scaled.trunc() as i64)
}
