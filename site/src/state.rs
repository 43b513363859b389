//! Shared application state.

use std::sync::Arc;

use tera::Tera;

use northlight_content::InquiryBook;
use northlight_core::{Settings, SiteError, SiteResult};
use northlight_mail::{HostedRelay, MailRelay};

/// State shared by every page handler: settings, the template engine,
/// the mail relay, and the inquiry book backing the admin dashboard.
pub struct AppState {
    pub settings: Settings,
    pub templates: Tera,
    pub relay: Arc<dyn MailRelay>,
    pub inquiries: InquiryBook,
}

impl AppState {
    /// Builds state with an explicit relay (tests swap in an in-memory one).
    pub fn new(settings: Settings, relay: Arc<dyn MailRelay>) -> SiteResult<Self> {
        let templates = Tera::new(&settings.templates_glob)
            .map_err(|e| SiteError::TemplateError(e.to_string()))?;
        Ok(Self {
            settings,
            templates,
            relay,
            inquiries: InquiryBook::with_sample_data(),
        })
    }

    /// Builds state with the hosted relay configured in the settings.
    pub fn from_settings(settings: Settings) -> SiteResult<Self> {
        let relay = Arc::new(HostedRelay::new(
            settings.relay.service_id.clone(),
            settings.relay.template_id.clone(),
            settings.relay.public_key.clone(),
        ));
        Self::new(settings, relay)
    }
}
