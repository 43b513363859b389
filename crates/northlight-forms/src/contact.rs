//! The contact ("Get In Touch") form.
//!
//! Six fields: name, organization, email, phone, website, message.
//! Name, email, and message are required; phone and website validate
//! only when the visitor filled them in.

use once_cell::sync::Lazy;
use regex::Regex;

use northlight_mail::InquiryMessage;

use crate::form::FormState;
use crate::rules::{FieldRules, FormSchema, Rule};

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\S+@\S+\.\S+$").unwrap());

static PHONE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[+]?[(]?[0-9]{3}[)]?[-\s.]?[0-9]{3}[-\s.]?[0-9]{4,6}$").unwrap()
});

static WEBSITE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^(https?://)?(www\.)?[-a-zA-Z0-9@:%._+~#=]{1,256}\.[a-zA-Z0-9()]{1,6}\b([-a-zA-Z0-9()@:%_+.~#?&/=]*)$",
    )
    .unwrap()
});

/// Builds the contact form rule set.
pub fn contact_schema() -> FormSchema {
    FormSchema::new(vec![
        FieldRules::new("name")
            .label("Full Name")
            .rule(Rule::required("Name is required")),
        FieldRules::new("organization").label("Organization Name"),
        FieldRules::new("email")
            .label("Email Address")
            .rule(Rule::required("Email is required"))
            .rule(Rule::pattern(EMAIL_RE.clone(), "Email is invalid")),
        FieldRules::new("phone")
            .label("Phone Number")
            .rule(Rule::pattern(PHONE_RE.clone(), "Phone number is invalid")),
        FieldRules::new("website")
            .label("Website or Social Media Link")
            .rule(Rule::pattern(WEBSITE_RE.clone(), "Website URL is invalid")),
        FieldRules::new("message")
            .label("Your Message")
            .rule(Rule::required("Message is required")),
    ])
}

/// Creates fresh state for the contact form.
pub fn contact_form() -> FormState {
    FormState::new(contact_schema())
}

/// Assembles the relay payload from a validated contact form.
///
/// The subject names the sender and the reply-to is the submitted email,
/// so the inbox owner can answer directly.
pub fn contact_message(form: &FormState) -> InquiryMessage {
    InquiryMessage::new(
        format!("New inquiry from {}", form.value("name")),
        form.value("email").to_string(),
        form.values().clone(),
    )
}
