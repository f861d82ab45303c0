//! Pager: shows one fixed-size slice of an ordered item list at a time and
//! keeps the control strip in sync.

use std::ops::Range;

use folio_contracts::{PageItem, PagerHost, Resettable};
use folio_model::{PageControl, ScrollMotion};

use super::config::PagerConfig;
use super::messages::PagerMessage;
use super::strip::{build_controls, clamp_page, total_pages};

#[derive(Debug)]
pub struct Pager<I, H> {
    cfg: PagerConfig,
    items: Vec<I>,
    host: H,
    current_page: usize,
}

impl<I: PageItem, H: PagerHost> Pager<I, H> {
    /// Bind `items` to `host`. Returns `None` (and touches nothing) when the
    /// list is empty, the host is missing, or the page size is zero.
    pub fn mount(items: Vec<I>, host: Option<H>, cfg: PagerConfig) -> Option<Self> {
        let Some(host) = host else {
            log::debug!("pager has no render target; not mounting");
            return None;
        };
        if items.is_empty() || cfg.per_page == 0 {
            log::debug!("pager has nothing to paginate; not mounting");
            return None;
        }
        Some(Self {
            cfg,
            items,
            host,
            current_page: 1,
        })
    }

    pub fn config(&self) -> &PagerConfig {
        &self.cfg
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn total_pages(&self) -> usize {
        total_pages(self.items.len(), self.cfg.per_page)
    }

    pub fn items(&self) -> &[I] {
        &self.items
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    /// Index range of the items on the current page.
    pub fn visible_range(&self) -> Range<usize> {
        let start = (self.current_page - 1) * self.cfg.per_page;
        let end = (start + self.cfg.per_page).min(self.items.len());
        start.min(end)..end
    }

    /// Strip for the current page, as it was last rendered.
    pub fn controls(&self) -> Vec<PageControl> {
        build_controls(self.current_page, self.total_pages(), self.cfg.window_size)
    }

    /// Show page `page` (clamped into range), rebuild the strip and scroll the
    /// container back to the top.
    pub fn render_page(&mut self, page: usize) {
        self.render_page_with(page, ScrollMotion::Smooth);
    }

    /// [`Pager::render_page`] with an explicit scroll motion.
    pub fn render_page_with(&mut self, page: usize, motion: ScrollMotion) {
        let total = self.total_pages();
        let page = clamp_page(page, total);
        if page != self.current_page {
            log::debug!("pager page {} -> {page} of {total}", self.current_page);
        }
        self.current_page = page;

        let visible = self.visible_range();
        for (i, item) in self.items.iter_mut().enumerate() {
            item.set_visible(visible.contains(&i));
        }

        let controls = self.controls();
        self.host.render_controls(&controls);
        self.host.scroll_to_top(motion);
    }

    pub fn previous(&mut self) {
        self.render_page(self.current_page.saturating_sub(1));
    }

    pub fn next(&mut self) {
        self.render_page(self.current_page + 1);
    }

    /// Back to page 1.
    pub fn reset(&mut self) {
        self.render_page(1);
    }

    /// Handle a control-strip message.
    pub fn update(&mut self, msg: PagerMessage) {
        match msg {
            PagerMessage::Goto(page) => self.render_page(page),
            PagerMessage::Previous => self.previous(),
            PagerMessage::Next => self.next(),
            PagerMessage::Reset => self.reset(),
        }
    }

    /// Unbind: clear the strip, show every item and hand the items back.
    pub fn destroy(mut self) -> (Vec<I>, H) {
        self.host.render_controls(&[]);
        for item in &mut self.items {
            item.set_visible(true);
        }
        log::debug!("pager destroyed ({} items)", self.items.len());
        (self.items, self.host)
    }
}

/// External reset (overlay opened or closed, navigation). The container is
/// appearing or going away, so it jumps to the top instead of animating.
impl<I: PageItem, H: PagerHost> Resettable for Pager<I, H> {
    fn reset(&mut self) {
        self.render_page_with(1, ScrollMotion::Instant);
    }
}
