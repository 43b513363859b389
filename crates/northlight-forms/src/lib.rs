//! # northlight-forms
//!
//! The form pipeline for the Northlight site: a shared rule-set
//! abstraction for field validation, per-form value and error state,
//! one-time notices, and the submission controller that drives the
//! email relay.
//!
//! The contact form and the admin login form are both defined here on
//! top of the same [`rules`] machinery rather than carrying their own
//! validation code.

pub mod contact;
pub mod form;
pub mod login;
pub mod notices;
pub mod rules;
pub mod submit;

pub use form::FormState;
pub use notices::{Notice, NoticeBoard, NoticeLevel};
pub use rules::{FieldRules, FormSchema, Rule};
pub use submit::{SubmissionController, SubmitNotices, SubmitOutcome};
