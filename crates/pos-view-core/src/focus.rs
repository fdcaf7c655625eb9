//! # Keyboard Focus Movement
//!
//! Pure transition function for the single terminal-wide focus position.
//!
//! ```text
//!   Categories pane          Menu pane
//!   ┌──────────┐  ◄─ Left   ┌──────────┐
//!   │ 0 ▲      │  Right ─►  │ 0 ▲      │
//!   │ 1 │ Up   │            │ 1 │ Up   │
//!   │ 2 ▼ Down │            │ 2 ▼ Down │
//!   └──────────┘            └──────────┘
//!   Enter activates, Escape clears.
//! ```

use crate::types::{FocusState, Pane};

/// Navigation keys understood by the panes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavKey {
    Up,
    Down,
    Left,
    Right,
    Enter,
    Escape,
}

/// Number of focusable entries in each pane.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PaneLengths {
    pub categories: usize,
    pub menu: usize,
}

impl PaneLengths {
    fn of(&self, pane: Pane) -> usize {
        match pane {
            Pane::Categories => self.categories,
            Pane::Menu => self.menu,
        }
    }
}

/// What a key press does to the focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusMove {
    /// Focus moves (or is cleared when `None`).
    Moved(Option<FocusState>),
    /// The focused entry should be activated.
    Activate(FocusState),
    /// Nothing to do.
    Ignored,
}

/// Applies a navigation key to the current focus.
pub fn apply_nav_key(current: Option<FocusState>, key: NavKey, lengths: PaneLengths) -> FocusMove {
    let Some(focus) = current else {
        return match key {
            NavKey::Enter | NavKey::Escape => FocusMove::Ignored,
            _ => seed(lengths),
        };
    };

    match key {
        NavKey::Escape => FocusMove::Moved(None),
        NavKey::Enter => FocusMove::Activate(focus),
        NavKey::Up => {
            let index = focus.index.saturating_sub(1);
            moved_if_changed(focus, FocusState::new(focus.pane, index))
        }
        NavKey::Down => {
            let len = lengths.of(focus.pane);
            if len == 0 {
                return FocusMove::Ignored;
            }
            let index = (focus.index + 1).min(len - 1);
            moved_if_changed(focus, FocusState::new(focus.pane, index))
        }
        NavKey::Left => switch_pane(focus, Pane::Categories, lengths),
        NavKey::Right => switch_pane(focus, Pane::Menu, lengths),
    }
}

fn seed(lengths: PaneLengths) -> FocusMove {
    if lengths.categories > 0 {
        FocusMove::Moved(Some(FocusState::new(Pane::Categories, 0)))
    } else if lengths.menu > 0 {
        FocusMove::Moved(Some(FocusState::new(Pane::Menu, 0)))
    } else {
        FocusMove::Ignored
    }
}

fn switch_pane(focus: FocusState, target: Pane, lengths: PaneLengths) -> FocusMove {
    let len = lengths.of(target);
    if focus.pane == target || len == 0 {
        return FocusMove::Ignored;
    }
    FocusMove::Moved(Some(FocusState::new(target, focus.index.min(len - 1))))
}

fn moved_if_changed(from: FocusState, to: FocusState) -> FocusMove {
    if from == to {
        FocusMove::Ignored
    } else {
        FocusMove::Moved(Some(to))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LENGTHS: PaneLengths = PaneLengths {
        categories: 4,
        menu: 2,
    };

    #[test]
    fn test_vertical_moves_clamp() {
        let top = FocusState::new(Pane::Categories, 0);
        assert_eq!(apply_nav_key(Some(top), NavKey::Up, LENGTHS), FocusMove::Ignored);
        assert_eq!(
            apply_nav_key(Some(top), NavKey::Down, LENGTHS),
            FocusMove::Moved(Some(FocusState::new(Pane::Categories, 1)))
        );

        let bottom = FocusState::new(Pane::Categories, 3);
        assert_eq!(apply_nav_key(Some(bottom), NavKey::Down, LENGTHS), FocusMove::Ignored);
    }

    #[test]
    fn test_pane_switch_clamps_index() {
        let focus = FocusState::new(Pane::Categories, 3);
        assert_eq!(
            apply_nav_key(Some(focus), NavKey::Right, LENGTHS),
            FocusMove::Moved(Some(FocusState::new(Pane::Menu, 1)))
        );
        assert_eq!(apply_nav_key(Some(focus), NavKey::Left, LENGTHS), FocusMove::Ignored);
    }

    #[test]
    fn test_seed_enter_escape() {
        assert_eq!(
            apply_nav_key(None, NavKey::Down, LENGTHS),
            FocusMove::Moved(Some(FocusState::new(Pane::Categories, 0)))
        );
        assert_eq!(apply_nav_key(None, NavKey::Enter, LENGTHS), FocusMove::Ignored);

        let focus = FocusState::new(Pane::Menu, 1);
        assert_eq!(
            apply_nav_key(Some(focus), NavKey::Enter, LENGTHS),
            FocusMove::Activate(focus)
        );
        assert_eq!(
            apply_nav_key(Some(focus), NavKey::Escape, LENGTHS),
            FocusMove::Moved(None)
        );
    }
}
