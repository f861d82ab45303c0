//! Visibility of the page's modal overlays.

use folio_model::OverlayKey;

#[derive(Debug, Clone, Default)]
pub struct OverlayRegistry {
    /// Registration order is kept so `close_all` reports deterministically.
    entries: Vec<(OverlayKey, bool)>,
}

impl OverlayRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the overlays present in the page markup.
    pub fn with_overlays<I: IntoIterator<Item = OverlayKey>>(keys: I) -> Self {
        let mut registry = Self::new();
        for key in keys {
            registry.register(key);
        }
        registry
    }

    /// Add an overlay (hidden). Registering twice is a no-op.
    pub fn register(&mut self, key: OverlayKey) {
        if !self.contains(&key) {
            self.entries.push((key, false));
        }
    }

    pub fn contains(&self, key: &OverlayKey) -> bool {
        self.entries.iter().any(|(k, _)| k == key)
    }

    pub fn is_visible(&self, key: &OverlayKey) -> bool {
        self.entries.iter().any(|(k, visible)| k == key && *visible)
    }

    pub fn visible(&self) -> impl Iterator<Item = &OverlayKey> {
        self.entries
            .iter()
            .filter(|(_, visible)| *visible)
            .map(|(k, _)| k)
    }

    /// Show `key`. Returns false when it is unknown or already visible.
    pub fn open(&mut self, key: &OverlayKey) -> bool {
        self.set_visible(key, true)
    }

    /// Hide `key`. Returns false when it is unknown or already hidden.
    pub fn close(&mut self, key: &OverlayKey) -> bool {
        self.set_visible(key, false)
    }

    /// Click inside an overlay. Only a click on the backdrop itself (not on
    /// the dialog content) closes it.
    pub fn backdrop_click(&mut self, key: &OverlayKey, hit_backdrop: bool) -> bool {
        hit_backdrop && self.close(key)
    }

    /// Hide every overlay, returning those that were visible.
    pub fn close_all(&mut self) -> Vec<OverlayKey> {
        let mut closed = Vec::new();
        for (key, visible) in &mut self.entries {
            if std::mem::take(visible) {
                closed.push(key.clone());
            }
        }
        closed
    }

    fn set_visible(&mut self, key: &OverlayKey, value: bool) -> bool {
        match self.entries.iter_mut().find(|(k, _)| k == key) {
            Some((_, visible)) if *visible != value => {
                *visible = value;
                log::debug!(
                    "overlay {key} {}",
                    if value { "opened" } else { "closed" }
                );
                true
            }
            Some(_) => false,
            None => {
                log::warn!("overlay {key} is not on this page");
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page() -> OverlayRegistry {
        OverlayRegistry::with_overlays([
            OverlayKey::About,
            OverlayKey::Charity,
            OverlayKey::Associations,
            OverlayKey::Association("foodbank".into()),
        ])
    }

    #[test]
    fn open_and_close_toggle_visibility() {
        let mut overlays = page();
        assert!(overlays.open(&OverlayKey::About));
        assert!(overlays.is_visible(&OverlayKey::About));
        assert!(!overlays.open(&OverlayKey::About));
        assert!(overlays.close(&OverlayKey::About));
        assert!(!overlays.is_visible(&OverlayKey::About));
    }

    #[test]
    fn unknown_overlay_is_ignored() {
        let mut overlays = page();
        let missing = OverlayKey::Association("zoo".into());
        assert!(!overlays.open(&missing));
        assert_eq!(overlays.visible().count(), 0);
    }

    #[test]
    fn only_backdrop_hits_close() {
        let mut overlays = page();
        let key = OverlayKey::Association("foodbank".into());
        overlays.open(&key);
        assert!(!overlays.backdrop_click(&key, false));
        assert!(overlays.is_visible(&key));
        assert!(overlays.backdrop_click(&key, true));
        assert!(!overlays.is_visible(&key));
    }

    #[test]
    fn close_all_reports_in_registration_order() {
        let mut overlays = page();
        overlays.open(&OverlayKey::Associations);
        overlays.open(&OverlayKey::About);
        assert_eq!(
            overlays.close_all(),
            vec![OverlayKey::About, OverlayKey::Associations]
        );
        assert!(overlays.close_all().is_empty());
    }
}
