//! Carousel engine: auto-advance, drag and circular layout over a fixed set
//! of items.
//!
//! State machine:
//! - `Auto`: every frame moves `base_offset` by `-speed * dt` (plus any
//!   release fling).
//! - `Dragging`: pointer moves set `base_offset` to the press-time offset plus
//!   the pointer travel; time does not advance the offset.
//!
//! `base_offset` always stays in `(-total_width, 0]`.

use std::time::Instant;

use folio_contracts::CarouselItem;
use folio_model::{BubbleSlot, Bounds, PresentationFlag};

use super::config::CarouselConfig;
use super::fling::{Fling, VelocityTracker};
use super::layout::{item_position, nearest_index, normalize_offset};
use super::messages::{ArrowDirection, PointerSource};
use super::ticker::FrameTicker;

#[derive(Debug, Clone)]
pub struct DragSession {
    pub source: PointerSource,
    pub start_x: f32,
    pub offset_at_press: f32,
    /// Set once the pointer travelled past the drag threshold.
    pub dragged: bool,
    tracker: VelocityTracker,
}

#[derive(Debug, Clone)]
pub enum CarouselPhase {
    Auto,
    Dragging(DragSession),
}

/// Result of a click landing on an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemClick {
    /// The click closed a drag gesture and must not act.
    Suppressed,
    Recentered(usize),
    /// Out-of-range index, or a click arriving mid-drag.
    Ignored,
}

#[derive(Debug)]
pub struct CarouselEngine<I> {
    cfg: CarouselConfig,
    items: Vec<I>,
    track: Bounds,
    base_offset: f32,
    phase: CarouselPhase,
    ticker: FrameTicker,
    fling: Fling,
    suppress_next_click: bool,
    centered: usize,
}

impl<I: CarouselItem> CarouselEngine<I> {
    /// Lay out `items` on `track`. Returns `None` when there is nothing to
    /// animate, leaving the page untouched.
    pub fn new(items: Vec<I>, track: Bounds, cfg: CarouselConfig) -> Option<Self> {
        if items.is_empty() {
            log::debug!("carousel has no items; not starting");
            return None;
        }
        if !(cfg.spacing.is_finite() && cfg.spacing > 0.0) {
            log::warn!("carousel spacing {} is unusable; not starting", cfg.spacing);
            return None;
        }
        let mut engine = Self {
            cfg,
            items,
            track,
            base_offset: 0.0,
            phase: CarouselPhase::Auto,
            ticker: FrameTicker::new(),
            fling: Fling::default(),
            suppress_next_click: false,
            centered: 0,
        };
        engine.layout();
        log::debug!(
            "carousel started with {} items (total width {})",
            engine.items.len(),
            engine.total_width()
        );
        Some(engine)
    }

    /// Start with `index` centered instead of item 0.
    pub fn with_initial_center(mut self, index: usize) -> Self {
        if index < self.items.len() {
            self.set_offset(self.centering_offset(index));
        }
        self
    }

    pub fn config(&self) -> &CarouselConfig {
        &self.cfg
    }

    pub fn items(&self) -> &[I] {
        &self.items
    }

    pub fn into_items(self) -> Vec<I> {
        self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn track(&self) -> Bounds {
        self.track
    }

    pub fn total_width(&self) -> f32 {
        self.cfg.spacing * self.items.len() as f32
    }

    pub fn base_offset(&self) -> f32 {
        self.base_offset
    }

    pub fn phase(&self) -> &CarouselPhase {
        &self.phase
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.phase, CarouselPhase::Dragging(_))
    }

    pub fn centered_index(&self) -> usize {
        self.centered
    }

    pub fn fling_velocity(&self) -> f32 {
        self.fling.velocity()
    }

    /// Whether the host should keep scheduling frame callbacks.
    pub fn wants_frames(&self) -> bool {
        !self.ticker.is_paused()
    }

    /// Track-local logical position of every item, before host rendering.
    pub fn positions(&self) -> Vec<f32> {
        let n = self.items.len();
        (0..n)
            .map(|i| {
                item_position(
                    i,
                    self.cfg.spacing,
                    self.base_offset,
                    self.track.width,
                    n,
                )
            })
            .collect()
    }

    pub fn set_track(&mut self, track: Bounds) {
        self.track = track;
        self.layout();
    }

    /// Advance auto-scroll by the time since the previous frame. Returns true
    /// when items moved.
    pub fn tick(&mut self, now: Instant) -> bool {
        if self.is_dragging() {
            return false;
        }
        let Some(dt) = self.ticker.advance(now) else {
            return false;
        };

        let mut delta = -self.cfg.speed_px_per_s * dt.as_secs_f32();
        if let Some(tau) = self.cfg.fling_tau_secs() {
            delta += self.fling.step(dt, tau);
        }
        if delta == 0.0 {
            return false;
        }
        log::trace!("carousel tick dt={:?} delta={delta}", dt);
        self.set_offset(self.base_offset + delta);
        true
    }

    /// Pointer or touch press: enter `Dragging` and stop the frame loop.
    pub fn press(&mut self, x: f32, at: Instant, source: PointerSource) {
        if self.is_dragging() {
            log::debug!("carousel press while already dragging; restarting drag");
        }
        self.ticker.pause();
        self.fling.cancel();
        self.suppress_next_click = false;

        let mut tracker = VelocityTracker::new();
        tracker.record(at, x);
        self.phase = CarouselPhase::Dragging(DragSession {
            source,
            start_x: x,
            offset_at_press: self.base_offset,
            dragged: false,
            tracker,
        });
        log::debug!("carousel drag start at x={x} ({source:?})");
    }

    /// Pointer or touch move while pressed.
    pub fn drag_to(&mut self, x: f32, at: Instant) {
        let threshold = self.cfg.drag_threshold_px;
        let CarouselPhase::Dragging(session) = &mut self.phase else {
            return;
        };
        session.tracker.record(at, x);
        let dx = x - session.start_x;
        if dx.abs() > threshold {
            session.dragged = true;
        }
        let next = session.offset_at_press + dx;
        self.set_offset(next);
    }

    /// Pointer or touch release: back to `Auto` with a fresh time baseline.
    pub fn release(&mut self, at: Instant) {
        let phase = std::mem::replace(&mut self.phase, CarouselPhase::Auto);
        let CarouselPhase::Dragging(session) = phase else {
            return;
        };
        self.suppress_next_click = session.dragged;

        // A pointer that came back to where it started leaves the ring where
        // it was pressed, whatever the last leg's speed.
        let net = session.tracker.last_x().map_or(0.0, |x| x - session.start_x);
        if self.cfg.fling_tau_secs().is_some() && net != 0.0 {
            let v = session.tracker.velocity(at, self.cfg.sample_window());
            self.fling.launch(v);
        }
        self.ticker.resume();
        log::debug!(
            "carousel drag end: dragged={} fling={:.1}px/s offset={}",
            session.dragged,
            self.fling.velocity(),
            self.base_offset
        );
    }

    /// Arrow control: shift the ring by one item. Ignored mid-drag.
    pub fn step(&mut self, direction: ArrowDirection) -> bool {
        if self.is_dragging() {
            log::debug!("carousel arrow ignored while dragging");
            return false;
        }
        self.suppress_next_click = false;
        let shift = match direction {
            ArrowDirection::Previous => self.cfg.spacing,
            ArrowDirection::Next => -self.cfg.spacing,
        };
        self.set_offset(self.base_offset + shift);
        true
    }

    /// Click on item `index`. Only the click that directly follows a drag
    /// release is swallowed; any arrow step in between clears it.
    pub fn click_item(&mut self, index: usize) -> ItemClick {
        if std::mem::take(&mut self.suppress_next_click) {
            log::debug!("carousel click on {index} suppressed after drag");
            return ItemClick::Suppressed;
        }
        if self.is_dragging() || index >= self.items.len() {
            return ItemClick::Ignored;
        }
        self.recenter_on(index);
        ItemClick::Recentered(index)
    }

    /// Put item `index` at the track center.
    pub fn recenter_on(&mut self, index: usize) {
        if index >= self.items.len() {
            return;
        }
        self.fling.cancel();
        self.set_offset(self.centering_offset(index));
        log::debug!("carousel recentered on {index}");
    }

    /// Offset that wraps item `index` to logical 0, the track midpoint.
    fn centering_offset(&self, index: usize) -> f32 {
        self.total_width() / 2.0 - index as f32 * self.cfg.spacing
    }

    fn set_offset(&mut self, offset: f32) {
        self.base_offset = normalize_offset(offset, self.total_width());
        self.layout();
    }

    /// Write positions, then flag the item nearest the track midpoint and
    /// classify the rest by circular distance from it.
    fn layout(&mut self) -> usize {
        let n = self.items.len();
        let spacing = self.cfg.spacing;
        let track_width = self.track.width;
        for (i, item) in self.items.iter_mut().enumerate() {
            item.set_offset(item_position(
                i,
                spacing,
                self.base_offset,
                track_width,
                n,
            ));
        }

        let midpoint = self.track.center_x();
        let centered = nearest_index(
            midpoint,
            self.items.iter().map(|item| item.bounds().center_x()),
        )
        .unwrap_or(0);

        for (i, item) in self.items.iter_mut().enumerate() {
            let is_center = i == centered;
            item.set_flag(PresentationFlag::Centered, is_center);
            item.set_flag(PresentationFlag::Active, is_center);
            item.set_slot(BubbleSlot::from_distance(
                BubbleSlot::circular_distance(i, centered, n),
            ));
        }
        if centered != self.centered {
            log::trace!("carousel center {} -> {centered}", self.centered);
        }
        self.centered = centered;
        centered
    }
}
