//! Rule-set validation.
//!
//! Each form is described by a [`FormSchema`]: an ordered list of
//! [`FieldRules`], one per field, each carrying an ordered list of
//! [`Rule`]s (a predicate plus a human-readable message).
//!
//! Validation runs every field independently and collects all failures
//! at once (no short-circuiting across fields). Within one field the
//! rules run in declaration order and the first failure wins, so a field
//! reports at most one message per pass. Rules other than `Required`
//! skip empty values, which is how optional fields (phone, website)
//! validate only when the visitor typed something.

use std::collections::{BTreeMap, HashMap};

use regex::Regex;

/// A single validation rule: a predicate plus the message reported when
/// the predicate fails.
#[derive(Debug, Clone)]
pub struct Rule {
    kind: RuleKind,
    message: String,
}

#[derive(Debug, Clone)]
enum RuleKind {
    /// The value must be non-empty after trimming whitespace.
    Required,
    /// The value must be at least this many characters long.
    MinLength(usize),
    /// The value must match the regex.
    Pattern(Regex),
    /// The value must satisfy an arbitrary predicate. Used where the
    /// regex crate cannot express the check (e.g. password complexity,
    /// which would need lookahead).
    Check(fn(&str) -> bool),
}

impl Rule {
    /// The value must be non-empty (whitespace-only counts as empty).
    pub fn required(message: impl Into<String>) -> Self {
        Self {
            kind: RuleKind::Required,
            message: message.into(),
        }
    }

    /// The value must be at least `min` characters long.
    pub fn min_length(min: usize, message: impl Into<String>) -> Self {
        Self {
            kind: RuleKind::MinLength(min),
            message: message.into(),
        }
    }

    /// The value must match `pattern`.
    pub fn pattern(pattern: Regex, message: impl Into<String>) -> Self {
        Self {
            kind: RuleKind::Pattern(pattern),
            message: message.into(),
        }
    }

    /// The value must satisfy `predicate`.
    pub fn check(predicate: fn(&str) -> bool, message: impl Into<String>) -> Self {
        Self {
            kind: RuleKind::Check(predicate),
            message: message.into(),
        }
    }

    /// Returns the failure message if `value` violates this rule.
    ///
    /// Every kind except `Required` passes on an empty value.
    fn apply(&self, value: &str) -> Option<&str> {
        let failed = match &self.kind {
            RuleKind::Required => value.trim().is_empty(),
            RuleKind::MinLength(min) => !value.is_empty() && value.chars().count() < *min,
            RuleKind::Pattern(re) => !value.is_empty() && !re.is_match(value),
            RuleKind::Check(predicate) => !value.is_empty() && !predicate(value),
        };
        failed.then_some(self.message.as_str())
    }
}

/// The ordered rules for one named field.
#[derive(Debug, Clone)]
pub struct FieldRules {
    /// The field name (HTML name attribute).
    pub name: String,
    /// Human-readable label for rendering.
    pub label: String,
    rules: Vec<Rule>,
}

impl FieldRules {
    /// Creates a rule list for the named field. The label defaults to
    /// the name with underscores replaced by spaces.
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        let label = name.replace('_', " ");
        Self {
            name,
            label,
            rules: Vec::new(),
        }
    }

    /// Sets the label.
    #[must_use]
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Appends a rule. Order matters: the first failing rule supplies
    /// the field's message.
    #[must_use]
    pub fn rule(mut self, rule: Rule) -> Self {
        self.rules.push(rule);
        self
    }

    /// Returns the message of the first failing rule, if any.
    pub fn first_failure(&self, value: &str) -> Option<&str> {
        self.rules.iter().find_map(|rule| rule.apply(value))
    }
}

/// The complete rule set for one form.
#[derive(Debug, Clone, Default)]
pub struct FormSchema {
    fields: Vec<FieldRules>,
}

impl FormSchema {
    /// Creates a schema from its field rule lists.
    pub fn new(fields: Vec<FieldRules>) -> Self {
        Self { fields }
    }

    /// Returns the field definitions in declaration order.
    pub fn fields(&self) -> &[FieldRules] {
        &self.fields
    }

    /// Returns `true` if the schema defines a field with this name.
    pub fn has_field(&self, name: &str) -> bool {
        self.fields.iter().any(|f| f.name == name)
    }

    /// Validates the full value map, recomputing every field's error.
    ///
    /// Fields are checked independently; all failures are reported
    /// together. A field missing from `values` is treated as empty.
    pub fn validate(&self, values: &BTreeMap<String, String>) -> HashMap<String, String> {
        let mut errors = HashMap::new();
        for field in &self.fields {
            let value = values.get(&field.name).map_or("", String::as_str);
            if let Some(message) = field.first_failure(value) {
                errors.insert(field.name.clone(), message.to_string());
            }
        }
        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn schema() -> FormSchema {
        FormSchema::new(vec![
            FieldRules::new("name").rule(Rule::required("Name is required")),
            FieldRules::new("email")
                .rule(Rule::required("Email is required"))
                .rule(Rule::pattern(
                    Regex::new(r"^\S+@\S+\.\S+$").unwrap(),
                    "Email is invalid",
                )),
            FieldRules::new("nickname").rule(Rule::min_length(3, "Too short")),
        ])
    }

    fn values(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    #[test]
    fn test_all_valid() {
        let errors = schema().validate(&values(&[
            ("name", "Alice"),
            ("email", "alice@example.com"),
            ("nickname", "ali"),
        ]));
        assert!(errors.is_empty());
    }

    #[test]
    fn test_errors_collected_across_fields() {
        let errors = schema().validate(&values(&[("name", ""), ("email", "not-an-email")]));
        assert_eq!(errors.get("name").map(String::as_str), Some("Name is required"));
        assert_eq!(errors.get("email").map(String::as_str), Some("Email is invalid"));
    }

    #[test]
    fn test_rule_order_first_failure_wins() {
        // Empty email trips Required before Pattern.
        let errors = schema().validate(&values(&[("name", "Alice"), ("email", "")]));
        assert_eq!(
            errors.get("email").map(String::as_str),
            Some("Email is required")
        );
    }

    #[test]
    fn test_whitespace_only_is_empty() {
        let errors = schema().validate(&values(&[("name", "   ")]));
        assert!(errors.contains_key("name"));
    }

    #[test]
    fn test_optional_field_skips_empty() {
        // nickname has no Required rule; empty passes, short fails.
        let ok = schema().validate(&values(&[
            ("name", "Alice"),
            ("email", "a@b.c"),
            ("nickname", ""),
        ]));
        assert!(!ok.contains_key("nickname"));

        let bad = schema().validate(&values(&[
            ("name", "Alice"),
            ("email", "a@b.c"),
            ("nickname", "ab"),
        ]));
        assert_eq!(bad.get("nickname").map(String::as_str), Some("Too short"));
    }

    #[test]
    fn test_missing_key_treated_as_empty() {
        let errors = schema().validate(&BTreeMap::new());
        assert!(errors.contains_key("name"));
        assert!(errors.contains_key("email"));
        assert!(!errors.contains_key("nickname"));
    }

    #[test]
    fn test_check_rule() {
        let field = FieldRules::new("code").rule(Rule::check(
            |v| v.chars().all(|c| c.is_ascii_digit()),
            "Digits only",
        ));
        assert_eq!(field.first_failure("12a"), Some("Digits only"));
        assert_eq!(field.first_failure("123"), None);
        assert_eq!(field.first_failure(""), None);
    }

    #[test]
    fn test_min_length_counts_chars() {
        let field = FieldRules::new("word").rule(Rule::min_length(3, "Too short"));
        assert_eq!(field.first_failure("äö"), Some("Too short"));
        assert_eq!(field.first_failure("äöü"), None);
    }

    #[test]
    fn test_has_field() {
        let s = schema();
        assert!(s.has_field("email"));
        assert!(!s.has_field("unknown"));
    }

    #[test]
    fn test_default_label() {
        let field = FieldRules::new("full_name");
        assert_eq!(field.label, "full name");
        let field = FieldRules::new("email").label("Email Address");
        assert_eq!(field.label, "Email Address");
    }
}
