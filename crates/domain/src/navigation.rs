//! Keyboard navigation directions.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};

/// Direction of a cyclic tab switch (Ctrl+PageUp / Ctrl+PageDown).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SwitchDirection {
    /// Previous tab, wrapping to the last one.
    PageUp,
    /// Next tab, wrapping to the first one.
    PageDown,
}

impl SwitchDirection {
    /// Returns the index reached from `current` in a bar of `len` tabs.
    ///
    /// `current` is `None` when no tab is focused, which behaves like an
    /// index just before the first tab. Returns `None` for an empty bar.
    #[must_use]
    pub fn step(self, current: Option<usize>, len: usize) -> Option<usize> {
        if len == 0 {
            return None;
        }

        let len = i64::try_from(len).ok()?;
        let current = current.and_then(|i| i64::try_from(i).ok()).unwrap_or(-1);
        let next = match self {
            Self::PageUp => current - 1,
            Self::PageDown => current + 1,
        };
        usize::try_from(next.rem_euclid(len)).ok()
    }
}

impl FromStr for SwitchDirection {
    type Err = DomainError;

    fn from_str(s: &str) -> DomainResult<Self> {
        match s {
            "pageup" => Ok(Self::PageUp),
            "pagedown" => Ok(Self::PageDown),
            other => Err(DomainError::InvalidDirection(other.to_string())),
        }
    }
}

/// Direction for moving the focused tab one slot in the tab bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MoveDirection {
    /// One slot towards the start.
    Left,
    /// One slot towards the end.
    Right,
}

impl MoveDirection {
    /// Returns the neighbouring index, or `None` when it would leave the bar.
    #[must_use]
    pub fn neighbour(self, index: usize, len: usize) -> Option<usize> {
        let target = match self {
            Self::Left => index.checked_sub(1)?,
            Self::Right => index.checked_add(1)?,
        };
        (target < len).then_some(target)
    }
}
