//! Page shell: overlays plus the pagers that live inside them.

use std::fmt;

use folio_contracts::{PageItem, PagerHost, Resettable};
use folio_model::{OverlayKey, PageControl};

use super::overlays::OverlayRegistry;
use super::pager::{Pager, PagerMessage};

/// Object-safe view of a mounted pager, so overlays can own pagers over
/// different item and host types.
pub trait OverlayPager: Resettable {
    fn update(&mut self, msg: PagerMessage);
    fn current_page(&self) -> usize;
    fn total_pages(&self) -> usize;
    fn controls(&self) -> Vec<PageControl>;
}

impl<I: PageItem, H: PagerHost> OverlayPager for Pager<I, H> {
    fn update(&mut self, msg: PagerMessage) {
        Pager::update(self, msg);
    }

    fn current_page(&self) -> usize {
        Pager::current_page(self)
    }

    fn total_pages(&self) -> usize {
        Pager::total_pages(self)
    }

    fn controls(&self) -> Vec<PageControl> {
        Pager::controls(self)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellMessage {
    Open(OverlayKey),
    /// Close button inside the overlay.
    Close(OverlayKey),
    /// Click anywhere inside the overlay; `hit_backdrop` is false when the
    /// click landed on the dialog content.
    Backdrop { key: OverlayKey, hit_backdrop: bool },
    /// Click on a navigation link. Closes everything.
    NavClick,
    Pager(OverlayKey, PagerMessage),
}

pub struct Shell {
    overlays: OverlayRegistry,
    pagers: Vec<(OverlayKey, Box<dyn OverlayPager>)>,
}

impl fmt::Debug for Shell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Shell")
            .field("overlays", &self.overlays)
            .field(
                "pagers",
                &self.pagers.iter().map(|(k, _)| k).collect::<Vec<_>>(),
            )
            .finish()
    }
}

impl Shell {
    pub fn new(overlays: OverlayRegistry) -> Self {
        Self {
            overlays,
            pagers: Vec::new(),
        }
    }

    /// Attach `pager` to the overlay `key`, registering the overlay if the
    /// page had not declared it.
    pub fn bind_pager(&mut self, key: OverlayKey, pager: Box<dyn OverlayPager>) {
        self.overlays.register(key.clone());
        self.pagers.push((key, pager));
    }

    pub fn overlays(&self) -> &OverlayRegistry {
        &self.overlays
    }

    /// First pager bound to `key`.
    pub fn pager(&self, key: &OverlayKey) -> Option<&dyn OverlayPager> {
        self.pagers
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, pager)| &**pager)
    }

    pub fn update(&mut self, msg: ShellMessage) {
        match msg {
            ShellMessage::Open(key) => {
                if self.overlays.open(&key) {
                    self.reset_bound(&key);
                }
            }
            ShellMessage::Close(key) => {
                if self.overlays.close(&key) {
                    self.reset_bound(&key);
                }
            }
            ShellMessage::Backdrop { key, hit_backdrop } => {
                if self.overlays.backdrop_click(&key, hit_backdrop) {
                    self.reset_bound(&key);
                }
            }
            ShellMessage::NavClick => {
                let closed = self.overlays.close_all();
                log::debug!("navigation closed {} overlay(s)", closed.len());
                for (_, pager) in &mut self.pagers {
                    pager.reset();
                }
            }
            ShellMessage::Pager(key, msg) => {
                if !self.overlays.is_visible(&key) {
                    log::debug!("ignoring pager input for hidden overlay {key}");
                    return;
                }
                for (_, pager) in self.pagers.iter_mut().filter(|(k, _)| *k == key) {
                    pager.update(msg);
                }
            }
        }
    }

    fn reset_bound(&mut self, key: &OverlayKey) {
        for (_, pager) in self.pagers.iter_mut().filter(|(k, _)| k == key) {
            pager.reset();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::ui::pager::PagerConfig;
    use crate::infra::headless::{HeadlessItem, HeadlessPagerHost};

    fn shell() -> Shell {
        let mut shell = Shell::new(OverlayRegistry::with_overlays([
            OverlayKey::About,
            OverlayKey::Charity,
        ]));
        let pager = Pager::mount(
            HeadlessItem::batch("charity", 45, 10.0),
            Some(HeadlessPagerHost::new()),
            PagerConfig::default(),
        )
        .expect("pager mounts");
        shell.bind_pager(OverlayKey::Charity, Box::new(pager));
        shell
    }

    fn charity_page(shell: &Shell) -> usize {
        shell
            .pager(&OverlayKey::Charity)
            .map(|pager| pager.current_page())
            .unwrap_or_default()
    }

    #[test]
    fn opening_renders_first_page() {
        let mut shell = shell();
        shell.update(ShellMessage::Open(OverlayKey::Charity));
        assert!(shell.overlays().is_visible(&OverlayKey::Charity));
        assert_eq!(charity_page(&shell), 1);
        assert_eq!(
            shell.pager(&OverlayKey::Charity).map(|p| p.total_pages()),
            Some(5)
        );
    }

    #[test]
    fn closing_resets_to_first_page() {
        let mut shell = shell();
        shell.update(ShellMessage::Open(OverlayKey::Charity));
        shell.update(ShellMessage::Pager(OverlayKey::Charity, PagerMessage::Goto(4)));
        assert_eq!(charity_page(&shell), 4);

        shell.update(ShellMessage::Close(OverlayKey::Charity));
        assert_eq!(charity_page(&shell), 1);
    }

    #[test]
    fn content_clicks_keep_the_overlay_open() {
        let mut shell = shell();
        shell.update(ShellMessage::Open(OverlayKey::Charity));
        shell.update(ShellMessage::Pager(OverlayKey::Charity, PagerMessage::Next));
        shell.update(ShellMessage::Backdrop {
            key: OverlayKey::Charity,
            hit_backdrop: false,
        });
        assert!(shell.overlays().is_visible(&OverlayKey::Charity));
        assert_eq!(charity_page(&shell), 2);

        shell.update(ShellMessage::Backdrop {
            key: OverlayKey::Charity,
            hit_backdrop: true,
        });
        assert!(!shell.overlays().is_visible(&OverlayKey::Charity));
        assert_eq!(charity_page(&shell), 1);
    }

    #[test]
    fn navigation_closes_everything_and_resets() {
        let mut shell = shell();
        shell.update(ShellMessage::Open(OverlayKey::About));
        shell.update(ShellMessage::Open(OverlayKey::Charity));
        shell.update(ShellMessage::Pager(OverlayKey::Charity, PagerMessage::Goto(3)));
        shell.update(ShellMessage::NavClick);
        assert_eq!(shell.overlays().visible().count(), 0);
        assert_eq!(charity_page(&shell), 1);
    }

    #[test]
    fn hidden_overlay_ignores_pager_input() {
        let mut shell = shell();
        shell.update(ShellMessage::Pager(OverlayKey::Charity, PagerMessage::Goto(3)));
        assert_eq!(charity_page(&shell), 1);
    }
}
