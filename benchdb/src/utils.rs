/// Rounds to four decimal places, the precision stored for derived metrics.
///
/// Rounding is done on the exact decimal expansion of `value`, halves away
/// from zero, so `2.00005` (stored as 2.0000499..) rounds down.
pub fn round4(value: f64) -> f64 {
    if !value.is_finite() {
        return value;
    }

    let expansion = format!("{:.40}", value.abs());
    let Some((whole, fraction)) = expansion.split_once('.') else {
        return value;
    };
    let (kept, dropped) = fraction.split_at(4);
    let Ok(mut scaled) = format!("{whole}{kept}").parse::<u64>() else {
        return value;
    };
    if dropped.starts_with(['5', '6', '7', '8', '9']) {
        scaled += 1;
    }
    (scaled as f64 / 10_000.0).copysign(value)
}

pub fn contains_ignore_case(
    haystack: &str,
    needle: &str,
) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}
