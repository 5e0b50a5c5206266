//! Wayfinder Engine Library
//!
//! A third/first-person character with an overhead map and point-and-click
//! waypoints. Everything here is platform-agnostic; the demo binary feeds
//! it window events.
//!
//! # Modules
//!
//! - [`math`] - Rotator and the Z-up coordinate conventions
//! - [`camera`] - View modes, camera rigs and cursor deprojection
//! - [`input`] - Keys, mouse, bindings and cursor state
//! - [`player`] - Player controller and character movement
//! - [`character`] - The playable character and its configuration
//! - [`waypoint`] - Waypoint marker and the pointer arrow
//! - [`world`] - Actors, the frame clock and line traces
//! - [`ui`] - Map and minimap overlays
//! - [`game`] - A session that runs the frame loop
//!
//! # Example
//!
//! ```ignore
//! use wayfinder_engine::{CharacterConfig, Game, KeyCode, MouseButton};
//! use wayfinder_engine::world::GroundPlane;
//!
//! let mut game = Game::new(CharacterConfig::default(), GroundPlane::default());
//! game.start();
//!
//! // Open the map and click the middle of the screen
//! game.key(KeyCode::M, true);
//! game.cursor_moved(640.0, 400.0, 1280, 800);
//! game.mouse_button(MouseButton::Left, true);
//!
//! game.frame(1.0 / 60.0);
//! for event in game.drain_events() {
//!     log::info!("{:?}", event);
//! }
//! ```

pub mod camera;
pub mod character;
pub mod input;
pub mod math;
pub mod player;
pub mod ui;
pub mod waypoint;
pub mod world;

// Session and frame loop (located in src/game/ directory)
#[path = "../../src/game/mod.rs"]
pub mod game;

// Re-export the types a host touches every frame
pub use character::{Character, CharacterConfig, CharacterEvent, ConfigError};
pub use game::Game;
pub use input::{InputBindings, InputEvent, InputState, KeyCode, MouseButton, ScrollDelta};
pub use math::Rotator;
pub use world::{ActorId, World};
