//! # Zoom
//!
//! Base font size arithmetic for the zoom controls.
//!
//! ## Zoom Domain
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Zoom Steps                                      │
//! │                                                                         │
//! │   12 ◄── 13 ◄── 14 ◄── 15 ◄── [16] ──► 17 ──► 18 ──► 19 ──► 20         │
//! │   min                        default                         max        │
//! │                                                                         │
//! │   A step that would leave [min, max] is refused as a whole:            │
//! │   no font change, no recorded level, no action-log entry.              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::{CoreError, CoreResult};
use crate::{DEFAULT_ZOOM_PX, MAX_ZOOM_PX, MIN_ZOOM_PX};

/// Direction of a zoom step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum ZoomDirection {
    In,
    Out,
}

impl std::fmt::Display for ZoomDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ZoomDirection::In => write!(f, "in"),
            ZoomDirection::Out => write!(f, "out"),
        }
    }
}

/// Inclusive bounds of the zoom domain plus the starting size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZoomBounds {
    pub min_px: u32,
    pub max_px: u32,
    pub default_px: u32,
}

impl Default for ZoomBounds {
    fn default() -> Self {
        ZoomBounds {
            min_px: MIN_ZOOM_PX,
            max_px: MAX_ZOOM_PX,
            default_px: DEFAULT_ZOOM_PX,
        }
    }
}

impl ZoomBounds {
    /// Returns true if `px` lies inside the domain.
    pub fn contains(&self, px: u32) -> bool {
        (self.min_px..=self.max_px).contains(&px)
    }

    /// Computes the size one step away from `current_px`.
    ///
    /// Returns `None` when the step would leave the domain. `current_px`
    /// itself is not validated: the host may report any size.
    pub fn step(&self, current_px: u32, direction: ZoomDirection) -> Option<ZoomLevel> {
        let next = match direction {
            ZoomDirection::In => current_px.checked_add(1)?,
            ZoomDirection::Out => current_px.checked_sub(1)?,
        };
        self.contains(next).then_some(ZoomLevel(next))
    }

    /// The starting level.
    pub fn initial(&self) -> ZoomLevel {
        ZoomLevel(self.default_px)
    }
}

/// Base font size in pixels, always inside its [`ZoomBounds`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ZoomLevel(u32);

impl ZoomLevel {
    /// Creates a level, checking it against `bounds`.
    pub fn new(px: u32, bounds: &ZoomBounds) -> CoreResult<Self> {
        if bounds.contains(px) {
            Ok(ZoomLevel(px))
        } else {
            Err(CoreError::ZoomOutOfRange {
                size: px,
                min: bounds.min_px,
                max: bounds.max_px,
            })
        }
    }

    #[inline]
    pub const fn px(&self) -> u32 {
        self.0
    }
}

impl Default for ZoomLevel {
    fn default() -> Self {
        ZoomLevel(DEFAULT_ZOOM_PX)
    }
}
