/// Text used for a coordinate entry left blank.
pub const BLANK_COORDINATE: &str = "0";

/// Substitute the `"0"` default for blank coordinate input.
pub fn resolve_coordinate_text(text: &str) -> &str {
    if text.trim().is_empty() {
        BLANK_COORDINATE
    } else {
        text
    }
}

/// Parse a grid coordinate typed by the user.
///
/// Surrounding whitespace is ignored and `,` is accepted as the decimal
/// separator. Empty text and non-finite values (`inf`, `NaN`) are rejected.
pub fn parse_coordinate(text: &str) -> Option<f64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }
    let value = if trimmed.contains(',') {
        trimmed.replace(',', ".").parse::<f64>().ok()?
    } else {
        trimmed.parse::<f64>().ok()?
    };
    value.is_finite().then_some(value)
}
