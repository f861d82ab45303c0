//! Page-control strip entries produced by the pager.

/// One entry in a pager's control strip, in render order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PageControl {
    /// "Previous" button; `target` is the page it leads to.
    Previous { enabled: bool, target: usize },
    /// Numbered page button.
    Page { number: usize, active: bool },
    /// Marker for a collapsed run of pages.
    Ellipsis,
    /// "Next" button; `target` is the page it leads to.
    Next { enabled: bool, target: usize },
}

impl PageControl {
    /// Page a click on this control should render, if it is clickable.
    pub fn click_target(&self) -> Option<usize> {
        match *self {
            Self::Previous { enabled, target } | Self::Next { enabled, target } => {
                enabled.then_some(target)
            }
            Self::Page { number, active } => (!active).then_some(number),
            Self::Ellipsis => None,
        }
    }

    /// Short textual label, e.g. for logs or a text renderer.
    pub fn label(&self) -> String {
        match self {
            Self::Previous { .. } => "‹".to_string(),
            Self::Page { number, .. } => number.to_string(),
            Self::Ellipsis => "…".to_string(),
            Self::Next { .. } => "›".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::PageControl;

    #[test]
    fn disabled_and_active_controls_are_not_clickable() {
        let prev = PageControl::Previous {
            enabled: false,
            target: 1,
        };
        let active = PageControl::Page {
            number: 3,
            active: true,
        };
        let other = PageControl::Page {
            number: 4,
            active: false,
        };
        assert_eq!(prev.click_target(), None);
        assert_eq!(active.click_target(), None);
        assert_eq!(other.click_target(), Some(4));
        assert_eq!(PageControl::Ellipsis.click_target(), None);
    }
}
