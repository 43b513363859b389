//! # northlight-mail
//!
//! The email-relay collaborator for the Northlight site. Provides the
//! [`MailRelay`] trait and built-in backends.
//!
//! ## Backends
//!
//! - [`HostedRelay`] - Hosted form-to-email service, addressed by a
//!   service / template / public-key triple
//! - [`ConsoleRelay`] - Prints messages to stdout (for development)
//! - [`InMemoryRelay`] - Collects messages in memory (for testing)

pub mod relay;

pub use relay::{ConsoleRelay, HostedRelay, InMemoryRelay, InquiryMessage, MailRelay, RelayReceipt};
