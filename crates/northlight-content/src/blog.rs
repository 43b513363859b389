//! Blog posts.
//!
//! Posts are compiled-in; there is no editorial backend.

use serde::Serialize;

/// One blog post card.
#[derive(Debug, Clone, Serialize)]
pub struct BlogPost {
    /// Stable identifier.
    pub id: u32,
    /// Publication date, human-formatted.
    pub date: &'static str,
    /// Post title.
    pub title: &'static str,
    /// Teaser paragraph.
    pub description: &'static str,
    /// Category label.
    pub category: &'static str,
}

/// Returns the published posts, newest first.
pub fn blog_posts() -> Vec<BlogPost> {
    vec![
        BlogPost {
            id: 3,
            date: "January 14, 2025",
            title: "Shipping Our Natural Language to SQL Pipeline",
            description: "An inside look at how we translate plain-English questions \
                into production database queries, and what we learned tuning it.",
            category: "Technology",
        },
        BlogPost {
            id: 2,
            date: "December 19, 2024",
            title: "What the Latest Platform Announcements Mean for Your Business",
            description: "A discussion of the newest assistant-platform releases and \
                the practical implications for teams planning automation work.",
            category: "Industry News",
        },
        BlogPost {
            id: 1,
            date: "November 2, 2024",
            title: "Introducing the Northlight Agent Toolkit",
            description: "Streamlining the creation, management, and deployment of \
                task-specific assistants.",
            category: "Product Launch",
        },
    ]
}
