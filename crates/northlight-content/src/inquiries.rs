//! The admin dashboard's inquiry book.
//!
//! A hard-coded table of contact submissions with a case-insensitive
//! substring search across every field. There is no persistence; the
//! dashboard is a demonstration surface.

use serde::Serialize;

/// One recorded contact inquiry.
#[derive(Debug, Clone, Serialize)]
pub struct Inquiry {
    /// Stable identifier.
    pub id: &'static str,
    /// The submitter's full name.
    pub full_name: &'static str,
    /// The submitter's organization.
    pub organization: &'static str,
    /// Contact email.
    pub email: &'static str,
    /// Contact phone number.
    pub phone: &'static str,
    /// Linked website.
    pub website: &'static str,
    /// The inquiry body.
    pub message: &'static str,
    /// Submission date (YYYY-MM-DD).
    pub created_at: &'static str,
}

impl Inquiry {
    /// Returns `true` if any field contains `needle` (already lowercased).
    fn matches(&self, needle: &str) -> bool {
        [
            self.id,
            self.full_name,
            self.organization,
            self.email,
            self.phone,
            self.website,
            self.message,
            self.created_at,
        ]
        .iter()
        .any(|field| field.to_lowercase().contains(needle))
    }
}

/// The collection of recorded inquiries.
#[derive(Debug, Clone, Default)]
pub struct InquiryBook {
    entries: Vec<Inquiry>,
}

impl InquiryBook {
    /// Creates an empty book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a book preloaded with the demonstration entries.
    pub fn with_sample_data() -> Self {
        Self {
            entries: vec![
                Inquiry {
                    id: "1",
                    full_name: "John Doe",
                    organization: "Tech Solutions Inc",
                    email: "john.doe@techsolutions.com",
                    phone: "+1 (555) 123-4567",
                    website: "https://techsolutions.com",
                    message: "Interested in your services for our upcoming project.",
                    created_at: "2024-02-24",
                },
                Inquiry {
                    id: "2",
                    full_name: "Sarah Johnson",
                    organization: "Creative Designs LLC",
                    email: "sarah.j@creativedesigns.com",
                    phone: "+1 (555) 987-6543",
                    website: "https://creativedesigns.com",
                    message: "Looking for a partnership opportunity.",
                    created_at: "2024-02-23",
                },
            ],
        }
    }

    /// Returns every entry.
    pub fn all(&self) -> &[Inquiry] {
        &self.entries
    }

    /// Returns the entries whose fields contain `term`, case-insensitively.
    ///
    /// An empty or whitespace-only term returns everything.
    pub fn search(&self, term: &str) -> Vec<&Inquiry> {
        let needle = term.trim().to_lowercase();
        if needle.is_empty() {
            return self.entries.iter().collect();
        }
        self.entries
            .iter()
            .filter(|inquiry| inquiry.matches(&needle))
            .collect()
    }

    /// Returns the number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the book has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_term_returns_all() {
        let book = InquiryBook::with_sample_data();
        assert_eq!(book.search("").len(), book.len());
        assert_eq!(book.search("   ").len(), book.len());
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let book = InquiryBook::with_sample_data();
        assert_eq!(book.search("SARAH").len(), 1);
        assert_eq!(book.search("sarah").len(), 1);
    }

    #[test]
    fn test_search_spans_every_field() {
        let book = InquiryBook::with_sample_data();
        // Organization, phone, and message fields.
        assert_eq!(book.search("creative designs")[0].id, "2");
        assert_eq!(book.search("123-4567")[0].id, "1");
        assert_eq!(book.search("partnership")[0].id, "2");
        assert_eq!(book.search("2024-02-24")[0].id, "1");
    }

    #[test]
    fn test_no_match_yields_empty() {
        let book = InquiryBook::with_sample_data();
        assert!(book.search("zebra").is_empty());
    }

    #[test]
    fn test_shared_substring_matches_both() {
        let book = InquiryBook::with_sample_data();
        assert_eq!(book.search("+1 (555)").len(), 2);
    }

    #[test]
    fn test_new_book_empty() {
        let book = InquiryBook::new();
        assert!(book.is_empty());
        assert!(book.search("anything").is_empty());
    }
}
