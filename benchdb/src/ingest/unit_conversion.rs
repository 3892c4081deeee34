/// A header annotation that rescales a column into the canonical unit.
#[derive(Debug)]
pub struct UnitConversion {
    /// Lower-case fragments looked up in the lower-cased header.
    pub identifiers: &'static [&'static str],
    pub factor: f64,
    pub description: &'static str,
}

pub const UNIT_CONVERSIONS: &[UnitConversion] = &[UnitConversion {
    identifiers: &[
        "(s)",
        "(sec)",
        "(secs)",
        "(seconds)",
        " seconds",
        " secs",
    ],
    factor: 1000.0,
    description: "seconds to milliseconds",
}];

/// Any of these disqualifies a header from seconds conversion.
const MILLISECOND_MARKERS: &[&str] = &["ms", "millisecond"];

/// The conversion announced by a time column's header, if any.
pub fn unit_conversion(header: &str) -> Option<&'static UnitConversion> {
    let lower = header.to_lowercase();
    if MILLISECOND_MARKERS.iter().any(|marker| lower.contains(marker)) {
        return None;
    }

    UNIT_CONVERSIONS.iter().find(|conversion| {
        conversion
            .identifiers
            .iter()
            .any(|identifier| lower.contains(identifier))
    })
}

/// Scale factor to apply to values of a time column, 1.0 when the header
/// carries no recognised seconds annotation.
pub fn conversion_factor(header: &str) -> f64 {
    unit_conversion(header)
        .map(|conversion| conversion.factor)
        .unwrap_or(1.0)
}
