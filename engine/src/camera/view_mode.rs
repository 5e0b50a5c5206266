//! View Mode Module
//!
//! The character's camera perspective as an explicit state machine.
//!
//! ```text
//!   ThirdPerson <--scroll in at min / scroll out--> FirstPerson
//!        |                                              |
//!      map toggle                                    map toggle
//!        v                                              v
//!   Map { pov: ThirdPerson }               Map { pov: FirstPerson }
//! ```
//!
//! The point of view survives a trip through the map so closing the map
//! returns to whichever gameplay camera was in use.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Gameplay point of view - which player camera is used outside the map.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
pub enum CameraMode {
    /// Default: follow camera on a boom behind the character
    #[default]
    ThirdPerson,
    /// Camera at the character's head
    FirstPerson,
}

/// Complete view state of the character.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ViewMode {
    #[default]
    ThirdPerson,
    FirstPerson,
    /// Overhead map is open; `pov` is restored when it closes
    Map { pov: CameraMode },
}

impl ViewMode {
    /// Gameplay view for a point of view.
    pub fn gameplay(pov: CameraMode) -> Self {
        match pov {
            CameraMode::ThirdPerson => ViewMode::ThirdPerson,
            CameraMode::FirstPerson => ViewMode::FirstPerson,
        }
    }

    /// The remembered gameplay point of view, also while the map is open.
    pub fn pov(self) -> CameraMode {
        match self {
            ViewMode::ThirdPerson => CameraMode::ThirdPerson,
            ViewMode::FirstPerson => CameraMode::FirstPerson,
            ViewMode::Map { pov } => pov,
        }
    }

    #[inline]
    pub fn is_map(self) -> bool {
        matches!(self, ViewMode::Map { .. })
    }

    /// Open the map from gameplay, or close it back to the remembered view.
    pub fn toggle_map(self) -> Self {
        match self {
            ViewMode::Map { pov } => ViewMode::gameplay(pov),
            gameplay => ViewMode::Map { pov: gameplay.pov() },
        }
    }
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ViewMode::ThirdPerson => write!(f, "third-person"),
            ViewMode::FirstPerson => write!(f, "first-person"),
            ViewMode::Map { pov } => write!(f, "map ({:?})", pov),
        }
    }
}
