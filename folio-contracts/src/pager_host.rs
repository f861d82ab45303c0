use folio_model::{PageControl, ScrollMotion};

/// Render target for a pager: the control strip container plus the
/// scrollable element holding the cards.
pub trait PagerHost {
    /// Replace the rendered control strip. An empty slice clears it.
    fn render_controls(&mut self, controls: &[PageControl]);

    /// Scroll the card container back to its top edge.
    fn scroll_to_top(&mut self, motion: ScrollMotion);
}

/// Receiver of the page-level reset signal (navigation click, overlay close).
pub trait Resettable {
    fn reset(&mut self);
}
