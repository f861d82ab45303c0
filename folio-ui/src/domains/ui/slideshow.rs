//! Auto-advancing media slideshow embedded in content cards.

use std::time::{Duration, Instant};

use folio_config::SlideshowSettings;
use folio_config::constants::slideshow;
use folio_contracts::Presentable;
use folio_model::PresentationFlag;

#[derive(Debug, Clone)]
pub struct Slideshow<S> {
    slides: Vec<S>,
    current: usize,
    interval: Duration,
    paused: bool,
    /// Start of the running interval; `None` until the first tick.
    since: Option<Instant>,
}

impl<S: Presentable> Slideshow<S> {
    /// Build a slideshow with the default interval. Returns `None` for an
    /// empty slide list.
    pub fn new(slides: Vec<S>) -> Option<Self> {
        Self::with_interval(slides, slideshow::INTERVAL)
    }

    pub fn from_settings(slides: Vec<S>, settings: &SlideshowSettings) -> Option<Self> {
        let mut show = Self::with_interval(slides, settings.interval)?;
        show.paused = !settings.autoplay;
        Some(show)
    }

    pub fn with_interval(mut slides: Vec<S>, interval: Duration) -> Option<Self> {
        if slides.is_empty() {
            return None;
        }
        for (i, slide) in slides.iter_mut().enumerate() {
            slide.set_flag(PresentationFlag::Active, i == 0);
        }
        Some(Self {
            slides,
            current: 0,
            interval,
            paused: false,
            since: None,
        })
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    pub fn slides(&self) -> &[S] {
        &self.slides
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn next(&mut self) {
        self.go_to((self.current + 1) % self.slides.len());
    }

    pub fn previous(&mut self) {
        let len = self.slides.len();
        self.go_to((self.current + len - 1) % len);
    }

    /// Activate slide `index`. Out-of-range indices are ignored.
    pub fn go_to(&mut self, index: usize) {
        if index >= self.slides.len() {
            return;
        }
        self.slides[self.current].set_flag(PresentationFlag::Active, false);
        self.slides[index].set_flag(PresentationFlag::Active, true);
        self.current = index;
    }

    /// Advance once a full interval has passed since the last advance (or the
    /// first tick). Returns whether the slide changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        if self.paused {
            return false;
        }
        let Some(since) = self.since else {
            self.since = Some(now);
            return false;
        };
        if now.saturating_duration_since(since) < self.interval {
            return false;
        }
        self.since = Some(now);
        self.next();
        true
    }

    pub fn pause(&mut self) {
        self.paused = true;
    }

    /// Resume autoplay. The interval restarts at the next tick.
    pub fn resume(&mut self) {
        self.paused = false;
        self.since = None;
    }
}
