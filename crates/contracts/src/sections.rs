//! Dashboard section registry.
//!
//! One enumerated value per section of the back office. The identifier
//! strings and fragment resource paths form the static configuration table
//! the navigation layer dispatches on; the enum replaces the shared mutable
//! config object the section state used to live in.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    Main,
    Content,
    Packages,
    Bookings,
    Users,
    Messages,
    Settings,
}

impl Section {
    pub const ALL: [Section; 7] = [
        Section::Main,
        Section::Content,
        Section::Packages,
        Section::Bookings,
        Section::Users,
        Section::Messages,
        Section::Settings,
    ];

    /// Stable identifier used in nav items and the URL query string.
    pub fn id(&self) -> &'static str {
        match self {
            Section::Main => "main",
            Section::Content => "content",
            Section::Packages => "packages",
            Section::Bookings => "bookings",
            Section::Users => "users",
            Section::Messages => "messages",
            Section::Settings => "settings",
        }
    }

    /// Reverse lookup for identifiers coming from the outside (nav data
    /// attributes, URL). Unknown identifiers are a configuration failure
    /// the caller must handle.
    pub fn from_id(id: &str) -> Option<Self> {
        Section::ALL.iter().copied().find(|s| s.id() == id)
    }

    pub fn title(&self) -> &'static str {
        match self {
            Section::Main => "Dashboard",
            Section::Content => "Content Management",
            Section::Packages => "Package Management",
            Section::Bookings => "Booking Management",
            Section::Users => "User Management",
            Section::Messages => "Messages",
            Section::Settings => "Settings",
        }
    }

    /// Resource path of the markup fragment loaded on demand for this
    /// section.
    pub fn fragment_path(&self) -> &'static str {
        match self {
            Section::Main => "sections/main-dashboard.html",
            Section::Content => "sections/content-management.html",
            Section::Packages => "sections/package-management.html",
            Section::Bookings => "sections/booking-management.html",
            Section::Users => "sections/user-management.html",
            Section::Messages => "sections/messages.html",
            Section::Settings => "sections/settings.html",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_roundtrip() {
        for section in Section::ALL {
            assert_eq!(Section::from_id(section.id()), Some(section));
        }
    }

    #[test]
    fn test_unknown_id() {
        assert_eq!(Section::from_id("reports"), None);
        assert_eq!(Section::from_id(""), None);
        assert_eq!(Section::from_id("Main"), None);
    }

    #[test]
    fn test_fragment_paths_are_distinct() {
        let mut paths: Vec<&str> = Section::ALL.iter().map(|s| s.fragment_path()).collect();
        paths.sort_unstable();
        paths.dedup();
        assert_eq!(paths.len(), Section::ALL.len());
    }
}
