//! The team roster.

use serde::Serialize;

/// One team member card.
#[derive(Debug, Clone, Serialize)]
pub struct TeamMember {
    /// Display name.
    pub name: &'static str,
    /// Role title.
    pub role: &'static str,
    /// Short bio line.
    pub bio: &'static str,
}

/// Returns the team roster in display order.
pub fn team_members() -> Vec<TeamMember> {
    vec![
        TeamMember {
            name: "Anna Reyes",
            role: "Chief Executive",
            bio: "Leads strategy and client partnerships.",
        },
        TeamMember {
            name: "Marcus Lindqvist",
            role: "Full Stack Developer",
            bio: "Builds the product end to end, from data pipelines to pixels.",
        },
    ]
}
