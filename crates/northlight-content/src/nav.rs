//! The site navigation model.
//!
//! Navigation is a fixed list of links; each page computes its own
//! active link from the request path rather than sharing any global
//! state.

use serde::Serialize;

/// One rendered navigation link.
#[derive(Debug, Clone, Serialize)]
pub struct NavLink {
    /// The display name.
    pub name: &'static str,
    /// The link target path.
    pub href: &'static str,
    /// Whether this link matches the current path.
    pub active: bool,
}

const NAV_ITEMS: &[(&str, &str)] = &[
    ("Home", "/"),
    ("Services", "/services"),
    ("Blog", "/blog"),
    ("Team", "/team"),
];

/// Returns `true` if the link at `href` is active for `current_path`.
///
/// The home link matches only exactly; every other link matches itself
/// and any path beneath it.
fn is_active(href: &str, current_path: &str) -> bool {
    if href == "/" {
        current_path == "/"
    } else {
        current_path.starts_with(href)
    }
}

/// Builds the navigation links for the given request path.
pub fn nav_for(current_path: &str) -> Vec<NavLink> {
    NAV_ITEMS
        .iter()
        .map(|&(name, href)| NavLink {
            name,
            href,
            active: is_active(href, current_path),
        })
        .collect()
}
