//! # northlight-content
//!
//! Static page content for the Northlight site. Everything here is
//! compiled-in data handed to templates: the services catalogue, the
//! team roster, blog posts, the navigation model with active-route
//! highlighting, and the admin dashboard's inquiry book with its
//! search filter.

pub mod blog;
pub mod inquiries;
pub mod nav;
pub mod services;
pub mod team;

pub use blog::{blog_posts, BlogPost};
pub use inquiries::{Inquiry, InquiryBook};
pub use nav::{nav_for, NavLink};
pub use services::{services, Service};
pub use team::{team_members, TeamMember};
