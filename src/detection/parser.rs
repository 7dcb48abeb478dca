//! Parsing of OS-release files and version strings.

use crate::DetectionError;
use regex::Regex;
use semver::Version;

/// Extract the `NAME` value from OS-release file contents.
///
/// Lines are `KEY=value`; values may be wrapped in single or double quotes.
/// Blank lines and `#` comments are skipped. Only the quotes are stripped:
/// the value is otherwise returned as written.
pub(crate) fn parse_os_release_name(contents: &str) -> Result<String, DetectionError> {
    for line in contents.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let Some((key, value)) = line.split_once('=') else {
            continue;
        };
        if key.trim() != "NAME" {
            continue;
        }
        let value = unquote(value.trim());
        if value.is_empty() {
            return Err(DetectionError::InvalidOutput);
        }
        return Ok(value.to_string());
    }
    Err(DetectionError::InvalidOutput)
}

fn unquote(value: &str) -> &str {
    for quote in ['"', '\''] {
        if let Some(inner) = value
            .strip_prefix(quote)
            .and_then(|v| v.strip_suffix(quote))
        {
            return inner;
        }
    }
    value
}

/// Parse a release version such as `10.12` or `10.11.6`.
///
/// A missing patch component is read as 0. Only the leading
/// `major.minor[.patch]` is considered.
pub(crate) fn parse_release(version: &str) -> Result<Version, DetectionError> {
    let re = Regex::new(r"^(\d+)\.(\d+)(?:\.(\d+))?").expect("Invalid regex pattern");
    let caps = re
        .captures(version.trim())
        .ok_or(DetectionError::InvalidOutput)?;

    let component = |i: usize| -> Result<u64, DetectionError> {
        match caps.get(i) {
            Some(m) => m.as_str().parse().map_err(|_| DetectionError::InvalidOutput),
            None => Ok(0),
        }
    };

    Ok(Version::new(component(1)?, component(2)?, component(3)?))
}
