//! HUD Overlays
//!
//! The minimap and full-screen map widgets. Drawing belongs to the host
//! renderer; this side only decides which overlays are in the viewport.

use std::fmt;

/// Which widget an overlay is.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OverlayKind {
    /// Corner minimap shown during gameplay
    MiniMap,
    /// Full-screen overlay shown while the map camera is active
    MainMap,
}

impl fmt::Display for OverlayKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OverlayKind::MiniMap => write!(f, "minimap"),
            OverlayKind::MainMap => write!(f, "main map"),
        }
    }
}

/// A widget that can be added to or removed from the viewport.
#[derive(Clone, Debug)]
pub struct Overlay {
    kind: OverlayKind,
    in_viewport: bool,
}

impl Overlay {
    /// Create an overlay that is not yet in the viewport.
    pub fn new(kind: OverlayKind) -> Self {
        Self {
            kind,
            in_viewport: false,
        }
    }

    #[inline]
    pub fn kind(&self) -> OverlayKind {
        self.kind
    }

    #[inline]
    pub fn is_in_viewport(&self) -> bool {
        self.in_viewport
    }

    pub fn add_to_viewport(&mut self) {
        self.in_viewport = true;
    }

    pub fn remove_from_viewport(&mut self) {
        self.in_viewport = false;
    }
}

/// The character's cached overlays.
#[derive(Clone, Debug)]
pub struct Hud {
    pub minimap: Overlay,
    pub main_map: Overlay,
}

impl Default for Hud {
    fn default() -> Self {
        Self::new()
    }
}

impl Hud {
    /// Construct both overlays, neither in the viewport yet.
    pub fn new() -> Self {
        Self {
            minimap: Overlay::new(OverlayKind::MiniMap),
            main_map: Overlay::new(OverlayKind::MainMap),
        }
    }

    /// Gameplay layout: minimap in, main map out.
    pub fn show_gameplay(&mut self) {
        self.minimap.add_to_viewport();
        self.main_map.remove_from_viewport();
    }

    /// Map layout: minimap out, main map in.
    pub fn show_map(&mut self) {
        self.minimap.remove_from_viewport();
        self.main_map.add_to_viewport();
    }

    /// Overlays currently in the viewport, for the renderer.
    pub fn visible(&self) -> impl Iterator<Item = OverlayKind> + '_ {
        [&self.minimap, &self.main_map]
            .into_iter()
            .filter(|overlay| overlay.is_in_viewport())
            .map(Overlay::kind)
    }
}
