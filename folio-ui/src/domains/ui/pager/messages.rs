#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PagerMessage {
    /// A numbered page button was clicked.
    Goto(usize),
    Previous,
    Next,
    /// External reset signal (navigation click, overlay close).
    Reset,
}
