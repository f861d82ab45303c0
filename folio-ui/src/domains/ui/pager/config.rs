use folio_config::{PagerSettings, constants::pager as defaults};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PagerConfig {
    /// Items shown per page.
    pub per_page: usize,
    /// Numbered buttons shown around the current page when the strip
    /// collapses.
    pub window_size: usize,
}

impl Default for PagerConfig {
    fn default() -> Self {
        Self {
            per_page: defaults::PER_PAGE,
            window_size: defaults::WINDOW_SIZE,
        }
    }
}

impl PagerConfig {
    pub fn from_settings(settings: &PagerSettings) -> Self {
        Self {
            per_page: settings.per_page,
            window_size: settings.window_size,
        }
    }
}
