use std::fmt;

/// Identifies one modal overlay on the page.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OverlayKey {
    About,
    Charity,
    Associations,
    /// Detail overlay for a single supported association, keyed by slug
    /// (e.g. `foodbank`).
    Association(String),
}

impl OverlayKey {
    /// Element id the overlay carries in the page markup.
    pub fn element_id(&self) -> String {
        match self {
            Self::About => "aboutme-overlay".to_string(),
            Self::Charity => "charity-overlay".to_string(),
            Self::Associations => "associations-overlay".to_string(),
            Self::Association(slug) => format!("sa-{slug}"),
        }
    }

    /// Inverse of [`OverlayKey::element_id`].
    pub fn from_element_id(id: &str) -> Option<Self> {
        match id {
            "aboutme-overlay" => Some(Self::About),
            "charity-overlay" => Some(Self::Charity),
            "associations-overlay" => Some(Self::Associations),
            other => other
                .strip_prefix("sa-")
                .filter(|slug| !slug.is_empty())
                .map(|slug| Self::Association(slug.to_string())),
        }
    }
}

impl fmt::Display for OverlayKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.element_id())
    }
}
