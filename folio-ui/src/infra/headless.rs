//! In-memory items and hosts.
//!
//! These stand in for page elements when the components run without a
//! document: in the `folio` binary's headless session and in tests.

use std::collections::HashSet;

use folio_contracts::{CarouselItem, PageItem, PagerHost, Presentable};
use folio_model::{BubbleSlot, Bounds, PageControl, PresentationFlag, ScrollMotion};

/// A square element that renders exactly where it is told to.
#[derive(Debug, Clone)]
pub struct HeadlessItem {
    pub label: String,
    pub size: f32,
    /// Page x of the containing track's left edge.
    pub origin_x: f32,
    offset: f32,
    slot: BubbleSlot,
    flags: HashSet<PresentationFlag>,
}

impl HeadlessItem {
    pub fn new(label: impl Into<String>, size: f32) -> Self {
        Self {
            label: label.into(),
            size,
            origin_x: 0.0,
            offset: 0.0,
            slot: BubbleSlot::default(),
            flags: HashSet::new(),
        }
    }

    /// `count` items labelled `{prefix}-0`, `{prefix}-1`, ...
    pub fn batch(prefix: &str, count: usize, size: f32) -> Vec<Self> {
        (0..count)
            .map(|i| Self::new(format!("{prefix}-{i}"), size))
            .collect()
    }

    pub fn with_origin(mut self, origin_x: f32) -> Self {
        self.origin_x = origin_x;
        self
    }

    pub fn slot(&self) -> BubbleSlot {
        self.slot
    }

    pub fn flags(&self) -> impl Iterator<Item = PresentationFlag> + '_ {
        PresentationFlag::ALL
            .into_iter()
            .filter(|flag| self.flags.contains(flag))
    }
}

impl Presentable for HeadlessItem {
    fn set_flag(&mut self, flag: PresentationFlag, on: bool) {
        if on {
            self.flags.insert(flag);
        } else {
            self.flags.remove(&flag);
        }
    }

    fn has_flag(&self, flag: PresentationFlag) -> bool {
        self.flags.contains(&flag)
    }
}

impl CarouselItem for HeadlessItem {
    fn bounds(&self) -> Bounds {
        Bounds::centered_at(self.origin_x + self.offset, 0.0, self.size, self.size)
    }

    fn offset(&self) -> f32 {
        self.offset
    }

    fn set_offset(&mut self, x: f32) {
        self.offset = x;
    }

    fn set_slot(&mut self, slot: BubbleSlot) {
        self.slot = slot;
    }
}

impl PageItem for HeadlessItem {}

/// Records what a pager asked the page to do.
#[derive(Debug, Clone, Default)]
pub struct HeadlessPagerHost {
    pub controls: Vec<PageControl>,
    pub scroll_requests: Vec<ScrollMotion>,
    pub renders: usize,
}

impl HeadlessPagerHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// The last rendered strip as text, e.g. `‹ 1 … [10] … 20 ›`.
    pub fn strip_text(&self) -> String {
        strip_text(&self.controls)
    }
}

impl PagerHost for HeadlessPagerHost {
    fn render_controls(&mut self, controls: &[PageControl]) {
        self.controls = controls.to_vec();
        self.renders += 1;
    }

    fn scroll_to_top(&mut self, motion: ScrollMotion) {
        self.scroll_requests.push(motion);
    }
}

/// Text rendering of a control strip. Active pages are bracketed and
/// disabled arrows are dropped.
pub fn strip_text(controls: &[PageControl]) -> String {
    controls
        .iter()
        .filter_map(|control| match control {
            PageControl::Previous { enabled: false, .. }
            | PageControl::Next { enabled: false, .. } => None,
            PageControl::Page { number, active: true } => Some(format!("[{number}]")),
            other => Some(other.label()),
        })
        .collect::<Vec<_>>()
        .join(" ")
}
