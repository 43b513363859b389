//! The submission controller.
//!
//! Drives a validated form through exactly one relay dispatch. The
//! controller owns the submission flag: it is raised after validation
//! passes and lowered when the relay settles, success or failure. While
//! the flag is up, further attempts on the same controller are refused;
//! that is the only concurrency hazard this component has.
//!
//! Recovery is always user-initiated: a failed dispatch leaves the form
//! values intact so the visitor can simply resubmit.

use northlight_mail::{InquiryMessage, MailRelay};

use crate::form::FormState;
use crate::notices::NoticeBoard;

/// The notice texts a submission posts at each outcome.
#[derive(Debug, Clone)]
pub struct SubmitNotices {
    /// Posted when validation rejects the submission.
    pub invalid: String,
    /// Posted when the relay settles successfully.
    pub success: String,
    /// Posted when the relay settles with a failure.
    pub failure: String,
}

impl Default for SubmitNotices {
    fn default() -> Self {
        Self {
            invalid: "Please fix the errors in the form".to_string(),
            success: "Your message has been sent successfully!".to_string(),
            failure: "Failed to send message. Please try again later.".to_string(),
        }
    }
}

/// How a submission attempt ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// A prior submission is still in flight; nothing was done.
    InFlight,
    /// Validation failed; no relay call was made.
    Rejected,
    /// The relay settled successfully; the form was reset.
    Sent,
    /// The relay settled with a failure; the form values are intact.
    Failed,
}

/// Coordinates validation, the single relay attempt, and notices for
/// one form instance.
#[derive(Debug, Default)]
pub struct SubmissionController {
    submitting: bool,
    notices: SubmitNotices,
}

impl SubmissionController {
    /// Creates a controller with the default notice texts.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a controller with custom notice texts.
    pub fn with_notices(notices: SubmitNotices) -> Self {
        Self {
            submitting: false,
            notices,
        }
    }

    /// Returns `true` while a submission is between start and settlement.
    pub const fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Runs one submission attempt.
    ///
    /// The `assemble` closure turns the validated form into the relay
    /// payload; it runs only after validation passes. Exactly one relay
    /// call is made per attempt and nothing is retried automatically.
    pub async fn submit<F>(
        &mut self,
        form: &mut FormState,
        assemble: F,
        relay: &dyn MailRelay,
        board: &mut NoticeBoard,
    ) -> SubmitOutcome
    where
        F: FnOnce(&FormState) -> InquiryMessage,
    {
        if self.submitting {
            tracing::debug!("submission refused: one already in flight");
            return SubmitOutcome::InFlight;
        }

        if !form.validate() {
            board.error(&self.notices.invalid);
            return SubmitOutcome::Rejected;
        }

        let message = assemble(form);
        self.submitting = true;
        let settled = relay.send(&message).await;
        self.submitting = false;

        match settled {
            Ok(receipt) => {
                tracing::info!("inquiry relayed, receipt {}", receipt.token);
                form.reset();
                board.success(&self.notices.success);
                SubmitOutcome::Sent
            }
            Err(err) => {
                tracing::warn!("inquiry relay failed: {err}");
                board.error(&self.notices.failure);
                SubmitOutcome::Failed
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use async_trait::async_trait;
    use northlight_core::{SiteError, SiteResult};
    use northlight_mail::{InMemoryRelay, RelayReceipt};

    use super::*;
    use crate::notices::NoticeLevel;
    use crate::rules::{FieldRules, FormSchema, Rule};

    fn make_form() -> FormState {
        FormState::new(FormSchema::new(vec![
            FieldRules::new("name").rule(Rule::required("Name is required")),
            FieldRules::new("email").rule(Rule::required("Email is required")),
        ]))
    }

    fn assemble(form: &FormState) -> InquiryMessage {
        InquiryMessage::new(
            "Test inquiry",
            form.value("email").to_string(),
            form.values().clone(),
        )
    }

    #[tokio::test]
    async fn test_invalid_form_is_rejected_without_relay_call() {
        let relay = InMemoryRelay::new();
        let mut controller = SubmissionController::new();
        let mut form = make_form();
        let mut board = NoticeBoard::new();

        let outcome = controller
            .submit(&mut form, assemble, &relay, &mut board)
            .await;

        assert_eq!(outcome, SubmitOutcome::Rejected);
        assert_eq!(relay.message_count().await, 0);
        assert!(form.error("name").is_some());
        assert_eq!(board.peek()[0].level, NoticeLevel::Error);
        assert!(!controller.is_submitting());
    }

    #[tokio::test]
    async fn test_successful_send_resets_form() {
        let relay = InMemoryRelay::new();
        let mut controller = SubmissionController::new();
        let mut form = make_form();
        form.set_value("name", "Alice");
        form.set_value("email", "alice@example.com");
        let mut board = NoticeBoard::new();

        let outcome = controller
            .submit(&mut form, assemble, &relay, &mut board)
            .await;

        assert_eq!(outcome, SubmitOutcome::Sent);
        assert_eq!(relay.message_count().await, 1);
        assert!(form.is_empty());
        assert!(!controller.is_submitting());

        let notices = board.drain();
        assert_eq!(notices.len(), 1);
        assert_eq!(notices[0].level, NoticeLevel::Success);
        assert_eq!(notices[0].text, "Your message has been sent successfully!");
    }

    #[tokio::test]
    async fn test_failed_send_preserves_values() {
        let relay = InMemoryRelay::new();
        relay.fail_next("simulated outage").await;
        let mut controller = SubmissionController::new();
        let mut form = make_form();
        form.set_value("name", "Alice");
        form.set_value("email", "alice@example.com");
        let mut board = NoticeBoard::new();

        let outcome = controller
            .submit(&mut form, assemble, &relay, &mut board)
            .await;

        assert_eq!(outcome, SubmitOutcome::Failed);
        assert_eq!(form.value("name"), "Alice");
        assert_eq!(form.value("email"), "alice@example.com");
        assert!(!controller.is_submitting());

        let notices = board.drain();
        assert_eq!(notices[0].level, NoticeLevel::Error);
        assert_eq!(
            notices[0].text,
            "Failed to send message. Please try again later."
        );
    }

    #[tokio::test]
    async fn test_exactly_one_attempt_per_submit() {
        let relay = InMemoryRelay::new();
        relay.fail_next("down").await;
        let mut controller = SubmissionController::new();
        let mut form = make_form();
        form.set_value("name", "Alice");
        form.set_value("email", "alice@example.com");
        let mut board = NoticeBoard::new();

        controller
            .submit(&mut form, assemble, &relay, &mut board)
            .await;
        // No automatic retry happened after the failure.
        assert_eq!(relay.message_count().await, 0);

        // A manual resubmit is a fresh attempt and goes through.
        let outcome = controller
            .submit(&mut form, assemble, &relay, &mut board)
            .await;
        assert_eq!(outcome, SubmitOutcome::Sent);
        assert_eq!(relay.message_count().await, 1);
    }

    /// A relay that reports whether it was invoked at all.
    #[derive(Default)]
    struct CountingRelay {
        calls: std::sync::atomic::AtomicUsize,
    }

    #[async_trait]
    impl MailRelay for CountingRelay {
        async fn send(&self, _message: &InquiryMessage) -> SiteResult<RelayReceipt> {
            self.calls
                .fetch_add(1, std::sync::atomic::Ordering::SeqCst);
            Err(SiteError::RelayError("always down".to_string()))
        }
    }

    #[tokio::test]
    async fn test_flag_lowered_after_failed_settlement() {
        let relay = CountingRelay::default();
        let mut controller = SubmissionController::new();
        let mut form = make_form();
        form.set_value("name", "Alice");
        form.set_value("email", "alice@example.com");
        let mut board = NoticeBoard::new();

        let outcome = controller
            .submit(&mut form, assemble, &relay, &mut board)
            .await;

        assert_eq!(outcome, SubmitOutcome::Failed);
        assert_eq!(relay.calls.load(std::sync::atomic::Ordering::SeqCst), 1);
        assert!(!controller.is_submitting());
    }

    #[tokio::test]
    async fn test_custom_notice_texts() {
        let relay = InMemoryRelay::new();
        let mut controller = SubmissionController::with_notices(SubmitNotices {
            invalid: "Check the sign-in form".to_string(),
            success: "Login Successful!".to_string(),
            failure: "Sign-in unavailable".to_string(),
        });
        let mut form = make_form();
        let mut board = NoticeBoard::new();

        controller
            .submit(&mut form, assemble, &relay, &mut board)
            .await;
        assert_eq!(board.drain()[0].text, "Check the sign-in form");
    }
}
