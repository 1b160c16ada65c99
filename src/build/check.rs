//! Build-time configuration checks

/// Environment variable consulted at build time
pub const MAX_TITLE_ENV: &str = "RETITLE_MAX_TITLE";

pub const DEFAULT_MAX_TITLE: usize = 255;

/// Must hold at least a full task name (15 bytes) so the task-name feature is never the longer of
/// the two views.
const MIN_MAX_TITLE: usize = 15;

/// The staging buffer lives on the stack; keep it within a page.
const MAX_MAX_TITLE: usize = 4095;

pub fn check_max_title(raw: &str) -> Result<usize, String> {
    let value: usize = raw
        .trim()
        .parse()
        .map_err(|e| format!("`{raw}` is not a byte count: {e}"))?;

    if value < MIN_MAX_TITLE {
        return Err(format!("{value} is below the minimum of {MIN_MAX_TITLE}"));
    }
    if value > MAX_MAX_TITLE {
        return Err(format!("{value} is above the maximum of {MAX_MAX_TITLE}"));
    }

    Ok(value)
}
