use folio_model::{BubbleSlot, Bounds, PresentationFlag};

/// Anything that carries toggleable presentation flags.
pub trait Presentable {
    /// Turn `flag` on or off.
    fn set_flag(&mut self, flag: PresentationFlag, on: bool);

    /// Whether `flag` is currently on.
    fn has_flag(&self, flag: PresentationFlag) -> bool;

    /// Flip `flag` and return its new state.
    fn toggle_flag(&mut self, flag: PresentationFlag) -> bool {
        let next = !self.has_flag(flag);
        self.set_flag(flag, next);
        next
    }
}

/// A bubble positioned along a carousel track.
///
/// Offsets are horizontal, relative to the track's left edge, and name the
/// point the item is centered on.
pub trait CarouselItem: Presentable {
    /// Rendered bounding box in the same coordinate space as the track.
    fn bounds(&self) -> Bounds;

    /// Last horizontal offset written by the carousel.
    fn offset(&self) -> f32;

    /// Write a new horizontal offset.
    fn set_offset(&mut self, x: f32);

    /// Positional class relative to the centered item. Hosts that only care
    /// about offsets can ignore it.
    fn set_slot(&mut self, _slot: BubbleSlot) {}
}

/// A card the pager shows or hides. Visibility is the inverse of
/// [`PresentationFlag::Hidden`].
pub trait PageItem: Presentable {
    fn set_visible(&mut self, visible: bool) {
        self.set_flag(PresentationFlag::Hidden, !visible);
    }

    fn is_visible(&self) -> bool {
        !self.has_flag(PresentationFlag::Hidden)
    }
}
