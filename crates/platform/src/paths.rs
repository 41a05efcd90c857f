//! Install-directory templates and per-user data directories
//!
//! Configured install locations are templates like
//! `$APPDATA/kiosk-apps/$APPNAME`. Substitution is a pure function over an
//! explicit token list, so path construction stays testable without
//! touching the process environment.

use std::path::PathBuf;

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

use crate::error::PlatformError;

/// Token substituted with the per-user data directory.
pub const APPDATA_TOKEN: &str = "APPDATA";

/// Token substituted with the sanitized application name.
pub const APPNAME_TOKEN: &str = "APPNAME";

/// Characters percent-encoded by [`sanitize_app_name`]: everything outside
/// `[A-Za-z0-9._-]`.
const APP_NAME_ESCAPED: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'.')
    .remove(b'_')
    .remove(b'-');

/// Substitute `$NAME` tokens in an install-directory template.
///
/// The template is scanned once, left to right. At each `$` the longest
/// token name that follows it wins; a `$` that matches no token is kept
/// verbatim. Token values are inserted as-is and never rescanned.
///
/// # Examples
///
/// ```
/// use kiosk_platform::expand_tokens;
///
/// let tokens = vec![
///     ("APPDATA".to_string(), "/home/user/.local/share".to_string()),
///     ("APPNAME".to_string(), "demo".to_string()),
/// ];
/// let path = expand_tokens("$APPDATA/kiosk-apps/$APPNAME", &tokens);
/// assert_eq!(path, "/home/user/.local/share/kiosk-apps/demo");
/// ```
pub fn expand_tokens(template: &str, tokens: &[(String, String)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(pos) = rest.find('$') {
        out.push_str(&rest[..pos]);
        rest = &rest[pos..];
        match longest_token(&rest[1..], tokens) {
            Some((name, value)) => {
                out.push_str(value);
                rest = &rest[1 + name.len()..];
            }
            None => {
                out.push('$');
                rest = &rest[1..];
            }
        }
    }

    out.push_str(rest);
    out
}

fn longest_token<'t>(after: &str, tokens: &'t [(String, String)]) -> Option<(&'t str, &'t str)> {
    tokens
        .iter()
        .filter(|(name, _)| after.starts_with(name.as_str()))
        .max_by_key(|(name, _)| name.len())
        .map(|(name, value)| (name.as_str(), value.as_str()))
}

/// The per-user application data directory: `%APPDATA%` on Windows,
/// `~/Library/Application Support` on macOS, and `$XDG_DATA_HOME` or
/// `~/.local/share` elsewhere.
pub fn system_data_dir() -> Result<PathBuf, PlatformError> {
    dirs::data_dir().ok_or(PlatformError::NoDataDirectory)
}

/// Make an application name safe to use as a single path component.
///
/// Everything outside `[A-Za-z0-9._-]` is percent-encoded, so distinct
/// names stay distinct after sanitization.
///
/// # Examples
///
/// ```
/// use kiosk_platform::sanitize_app_name;
///
/// assert_eq!(sanitize_app_name("demo-app_1.0"), "demo-app_1.0");
/// assert_eq!(sanitize_app_name("My App"), "My%20App");
/// ```
pub fn sanitize_app_name(name: &str) -> String {
    utf8_percent_encode(name, APP_NAME_ESCAPED).to_string()
}

/// The token list install-directory templates are expanded with:
/// `$APPDATA` and `$APPNAME`.
pub fn install_tokens(app_name: &str) -> Result<Vec<(String, String)>, PlatformError> {
    let data_dir = system_data_dir()?;
    Ok(vec![
        (
            APPDATA_TOKEN.to_string(),
            data_dir.to_string_lossy().into_owned(),
        ),
        (APPNAME_TOKEN.to_string(), sanitize_app_name(app_name)),
    ])
}
