use http::StatusCode;

/// Name used when a code has no standard status text
pub const UNKNOWN: &str = "unknown";

/// Canonical status text for a code (e.g. `404` → `"Not Found"`)
pub fn status_text(code: u16) -> Option<&'static str> {
    StatusCode::from_u16(code).ok()?.canonical_reason()
}

/// Status text for a code, or [`UNKNOWN`]
pub(crate) fn name_for_code(code: u16) -> &'static str {
    status_text(code).unwrap_or(UNKNOWN)
}
