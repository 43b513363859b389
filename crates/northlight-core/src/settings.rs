//! Settings for the Northlight site.
//!
//! [`Settings`] holds all site configuration with sensible defaults for
//! local development. Values can be overridden from a TOML file via
//! [`Settings::load_from_toml`], mirroring a `settings.py`-style setup.

use serde::{Deserialize, Serialize};

/// Configuration for the hosted email relay.
///
/// The relay is addressed by a service / template / public-key triple,
/// the shape used by hosted form-to-email providers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RelaySettings {
    /// The relay service identifier.
    pub service_id: String,
    /// The message template identifier.
    pub template_id: String,
    /// The public API key.
    pub public_key: String,
}

impl Default for RelaySettings {
    fn default() -> Self {
        Self {
            service_id: "service_local".to_string(),
            template_id: "template_contact".to_string(),
            public_key: "pk_local".to_string(),
        }
    }
}

/// The complete set of site settings.
///
/// # Examples
///
/// ```
/// use northlight_core::settings::Settings;
///
/// let settings = Settings::default();
/// assert!(settings.debug);
/// assert_eq!(settings.bind_addr, "127.0.0.1:8000");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Whether debug mode is enabled.
    pub debug: bool,
    /// The display name of the site.
    pub site_name: String,
    /// The address the HTTP server binds to.
    pub bind_addr: String,
    /// Hostnames this site can serve.
    pub allowed_hosts: Vec<String>,
    /// The directory holding tera templates, as a glob.
    pub templates_glob: String,
    /// Mailbox that receives contact inquiries.
    pub contact_recipient: String,
    /// Hosted relay configuration.
    pub relay: RelaySettings,
    /// The tracing filter directive (e.g. "info", "northlight=debug").
    pub log_level: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            debug: true,
            site_name: "Northlight".to_string(),
            bind_addr: "127.0.0.1:8000".to_string(),
            allowed_hosts: vec!["localhost".to_string(), "127.0.0.1".to_string()],
            templates_glob: "templates/**/*.html".to_string(),
            contact_recipient: "hello@northlight.studio".to_string(),
            relay: RelaySettings::default(),
            log_level: "info".to_string(),
        }
    }
}

impl Settings {
    /// Loads settings from a TOML file, falling back to defaults for any
    /// key the file does not set.
    ///
    /// An unreadable or unparsable file logs a warning and yields the
    /// defaults, so a missing config never prevents startup.
    pub fn load_from_toml(path: &str) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str::<Self>(&content) {
                Ok(settings) => settings,
                Err(e) => {
                    tracing::warn!("Failed to parse settings file {path}: {e}. Using defaults.");
                    Self::default()
                }
            },
            Err(e) => {
                tracing::info!("Settings file not found ({e}). Using defaults.");
                Self::default()
            }
        }
    }
}
