//! Shell configuration
//!
//! The runtime knobs an embedding application exposes: where to install
//! resources, where the bundled UI lives, and which page a new window
//! opens first.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::{Result, ShellError};

/// Configuration for a [`crate::Shell`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ShellConfig {
    /// Application name; substituted for `$APPNAME` in `install_dir`
    /// after sanitization.
    pub app_name: String,

    /// Template for the directory resources, application data, and the
    /// embedded engine's files are installed under. `$APPDATA` and
    /// `$APPNAME` are substituted at startup.
    pub install_dir: String,

    /// Logical prefix the bundled HTML, CSS, and JavaScript live under.
    pub resource_root: String,

    /// Page a new window opens, relative to `resource_root`.
    pub start_page: String,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            app_name: "kiosk-app".to_string(),
            install_dir: "$APPDATA/kiosk-apps/$APPNAME".to_string(),
            resource_root: "/ui".to_string(),
            start_page: "/index.html".to_string(),
        }
    }
}

impl ShellConfig {
    /// Default configuration for the given application name.
    pub fn new(app_name: impl Into<String>) -> Self {
        Self {
            app_name: app_name.into(),
            ..Default::default()
        }
    }

    /// Parse a TOML configuration document. Missing keys take their
    /// defaults; unknown keys are rejected.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Load a TOML configuration file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|source| ShellError::ReadConfig {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config() {
        let config = ShellConfig::default();
        assert_eq!(config.install_dir, "$APPDATA/kiosk-apps/$APPNAME");
        assert_eq!(config.resource_root, "/ui");
        assert_eq!(config.start_page, "/index.html");
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = ShellConfig::from_toml_str("app_name = \"demo\"").unwrap();
        assert_eq!(config.app_name, "demo");
        assert_eq!(config.start_page, "/index.html");
    }

    #[test]
    fn test_full_toml_overrides_everything() {
        let config = ShellConfig::from_toml_str(
            r#"
            app_name = "demo"
            install_dir = "/opt/demo"
            resource_root = "/web"
            start_page = "/home.html"
            "#,
        )
        .unwrap();
        assert_eq!(config.install_dir, "/opt/demo");
        assert_eq!(config.resource_root, "/web");
        assert_eq!(config.start_page, "/home.html");
    }

    #[test]
    fn test_unknown_key_is_rejected() {
        assert!(ShellConfig::from_toml_str("bogus_key = 1").is_err());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "app_name = \"demo\"").unwrap();

        let config = ShellConfig::load(file.path()).unwrap();
        assert_eq!(config.app_name, "demo");
    }

    #[test]
    fn test_load_missing_file() {
        let err = ShellConfig::load(Path::new("/nonexistent/kiosk.toml")).unwrap_err();
        assert!(matches!(err, ShellError::ReadConfig { .. }));
    }
}
