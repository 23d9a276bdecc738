use std::sync::LazyLock;

use regex::Regex;

/// Marker convention: `area_km2_<number>` anywhere in the base file name,
/// where `<number>` is unsigned digits with an optional decimal part.
static AREA_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"area_km2_([0-9]+(?:\.[0-9]+)?)").expect("valid marker pattern"));

/// Returns the authoritative area for an image. A caller-supplied value wins
/// outright; otherwise the file name is inspected for the marker convention.
/// `None` means the caller has to estimate or fail the image.
pub fn resolve_area(identifier: &str, caller_supplied: Option<f64>) -> Option<f64> {
    caller_supplied.or_else(|| area_from_name(identifier))
}

pub fn area_from_name(identifier: &str) -> Option<f64> {
    AREA_MARKER
        .captures(identifier)
        .and_then(|captures| captures.get(1))
        .and_then(|value| value.as_str().parse().ok())
}
