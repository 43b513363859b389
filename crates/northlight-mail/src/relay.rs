//! Email relay backends.
//!
//! The [`MailRelay`] trait is the seam between the submission controller
//! and the outside world. A relay accepts a fully-assembled
//! [`InquiryMessage`] and settles with either a [`RelayReceipt`] or a
//! [`SiteError`]. There is no partial or streaming result.

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use northlight_core::{SiteError, SiteResult};

/// A message assembled from a submitted form, ready for relay dispatch.
///
/// Field values are carried as an ordered map so the relay template can
/// interpolate them by name.
#[derive(Debug, Clone)]
pub struct InquiryMessage {
    /// The message subject line.
    pub subject: String,
    /// The address the recipient should reply to (the submitter's email).
    pub reply_to: String,
    /// Named template parameters, one per form field.
    pub fields: BTreeMap<String, String>,
}

impl InquiryMessage {
    /// Creates a new inquiry message.
    pub fn new(
        subject: impl Into<String>,
        reply_to: impl Into<String>,
        fields: BTreeMap<String, String>,
    ) -> Self {
        Self {
            subject: subject.into(),
            reply_to: reply_to.into(),
            fields,
        }
    }

    /// Formats the message as a human-readable string.
    pub fn format_message(&self) -> String {
        use std::fmt::Write;
        let mut output = String::new();
        let _ = writeln!(output, "Subject: {}", self.subject);
        let _ = writeln!(output, "Reply-To: {}", self.reply_to);
        for (name, value) in &self.fields {
            let _ = writeln!(output, "{name}: {value}");
        }
        output
    }
}

/// A token returned by a relay on successful dispatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelayReceipt {
    /// The relay's response token.
    pub token: String,
}

/// A backend that dispatches inquiry messages.
///
/// All methods are async and the trait requires `Send + Sync` so a single
/// relay instance can be shared across request handlers.
#[async_trait]
pub trait MailRelay: Send + Sync {
    /// Sends a single message, settling with a receipt or an error.
    async fn send(&self, message: &InquiryMessage) -> SiteResult<RelayReceipt>;
}

/// A hosted form-to-email relay.
///
/// Addressed by the service / template / public-key triple used by hosted
/// providers. The dispatch itself is treated as an opaque network call;
/// this implementation logs the outgoing message and settles successfully.
#[derive(Debug, Clone)]
pub struct HostedRelay {
    /// The relay service identifier.
    pub service_id: String,
    /// The message template identifier.
    pub template_id: String,
    /// The public API key.
    pub public_key: String,
}

impl HostedRelay {
    /// Creates a new hosted relay from its identifier triple.
    pub fn new(
        service_id: impl Into<String>,
        template_id: impl Into<String>,
        public_key: impl Into<String>,
    ) -> Self {
        Self {
            service_id: service_id.into(),
            template_id: template_id.into(),
            public_key: public_key.into(),
        }
    }
}

#[async_trait]
impl MailRelay for HostedRelay {
    async fn send(&self, message: &InquiryMessage) -> SiteResult<RelayReceipt> {
        if message.reply_to.is_empty() {
            return Err(SiteError::RelayError(
                "Message must carry a reply-to address".to_string(),
            ));
        }

        tracing::info!(
            "Relay: dispatching '{}' via {} (template {})",
            message.subject,
            self.service_id,
            self.template_id,
        );

        let token = format!(
            "{}-{}",
            self.template_id,
            chrono::Utc::now().timestamp_millis()
        );
        Ok(RelayReceipt { token })
    }
}

/// A relay that prints messages to stdout.
///
/// Useful for development.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleRelay;

#[async_trait]
impl MailRelay for ConsoleRelay {
    async fn send(&self, message: &InquiryMessage) -> SiteResult<RelayReceipt> {
        let separator = "-".repeat(60);
        let formatted = message.format_message();

        // Stdout I/O goes through spawn_blocking to keep the runtime free.
        tokio::task::spawn_blocking(move || {
            println!("{separator}");
            print!("{formatted}");
            println!("{separator}");
        })
        .await
        .map_err(|e| SiteError::InternalServerError(e.to_string()))?;

        Ok(RelayReceipt {
            token: "console".to_string(),
        })
    }
}

/// A relay that collects messages in memory.
///
/// Sent messages land in a thread-safe outbox that tests can inspect.
/// [`InMemoryRelay::fail_next`] arms a one-shot failure so settlement
/// failure paths can be exercised without a network.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRelay {
    messages: Arc<RwLock<Vec<InquiryMessage>>>,
    fail_next: Arc<RwLock<Option<String>>>,
}

impl InMemoryRelay {
    /// Creates a new in-memory relay.
    pub fn new() -> Self {
        Self::default()
    }

    /// Arms the relay to fail its next send with the given reason.
    pub async fn fail_next(&self, reason: impl Into<String>) {
        *self.fail_next.write().await = Some(reason.into());
    }

    /// Returns a copy of all sent messages.
    pub async fn messages(&self) -> Vec<InquiryMessage> {
        self.messages.read().await.clone()
    }

    /// Returns the number of sent messages.
    pub async fn message_count(&self) -> usize {
        self.messages.read().await.len()
    }

    /// Clears the outbox.
    pub async fn clear(&self) {
        self.messages.write().await.clear();
    }
}

#[async_trait]
impl MailRelay for InMemoryRelay {
    async fn send(&self, message: &InquiryMessage) -> SiteResult<RelayReceipt> {
        if let Some(reason) = self.fail_next.write().await.take() {
            return Err(SiteError::RelayError(reason));
        }

        let mut outbox = self.messages.write().await;
        outbox.push(message.clone());
        Ok(RelayReceipt {
            token: format!("outbox-{}", outbox.len()),
        })
    }
}
