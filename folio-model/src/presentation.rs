//! Presentation flags and slot classes toggled on page items.

use std::fmt;

/// Toggleable presentation state on an item. A browser host maps these to
/// CSS classes (`is-active`, `is-centered`, `is-hidden`, `expanded`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PresentationFlag {
    Active,
    Centered,
    Hidden,
    Expanded,
    Disabled,
}

impl PresentationFlag {
    pub const ALL: [Self; 5] = [
        Self::Active,
        Self::Centered,
        Self::Hidden,
        Self::Expanded,
        Self::Disabled,
    ];

    pub fn class_name(self) -> &'static str {
        match self {
            Self::Active => "is-active",
            Self::Centered => "is-centered",
            Self::Hidden => "is-hidden",
            Self::Expanded => "expanded",
            Self::Disabled => "is-disabled",
        }
    }
}

impl fmt::Display for PresentationFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.class_name())
    }
}

/// Where a carousel bubble sits relative to the centered one.
///
/// Only the five slots around the center are shown; everything further away
/// is hidden and ignores pointer input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BubbleSlot {
    FarLeft,
    Left,
    Center,
    Right,
    FarRight,
    #[default]
    Hidden,
}

impl BubbleSlot {
    /// Classify a signed circular distance from the centered item.
    pub fn from_distance(distance: isize) -> Self {
        match distance {
            0 => Self::Center,
            -1 => Self::Left,
            1 => Self::Right,
            -2 => Self::FarLeft,
            2 => Self::FarRight,
            _ => Self::Hidden,
        }
    }

    /// Signed circular distance of `index` from `centered` in a ring of `len`.
    ///
    /// Distances past the halfway point wrap to the negative side so the
    /// left neighbours of the center come out as -1, -2, ...
    pub fn circular_distance(index: usize, centered: usize, len: usize) -> isize {
        if len == 0 {
            return 0;
        }
        let n = len as isize;
        let mut diff = (index as isize - centered as isize).rem_euclid(n);
        if diff * 2 > n {
            diff -= n;
        }
        diff
    }

    pub fn is_visible(self) -> bool {
        !matches!(self, Self::Hidden)
    }

    pub fn is_interactive(self) -> bool {
        matches!(self, Self::Center)
    }

    pub fn class_name(self) -> &'static str {
        match self {
            Self::FarLeft => "company-bubble--far-left",
            Self::Left => "company-bubble--left",
            Self::Center => "company-bubble--center",
            Self::Right => "company-bubble--right",
            Self::FarRight => "company-bubble--far-right",
            Self::Hidden => "company-bubble--hidden",
        }
    }
}

/// How a host should move its scroll container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScrollMotion {
    #[default]
    Smooth,
    Instant,
}
