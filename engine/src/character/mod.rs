//! Character Module
//!
//! The playable character: camera rigs, the view-mode state machine, the
//! waypoint pointer, sprint, and the input handlers that drive them.
//!
//! # Frame Contract
//!
//! The owner calls, in order:
//! 1. [`Character::handle_input`] for every input event of the frame
//! 2. [`Character::tick`] once
//! 3. [`Character::drain_events`] to collect animation and gameplay events
//!
//! Input is ignored until [`Character::begin_play`] has run.
//!
//! # Submodules
//!
//! - `camera_control` - scroll zoom, POV switching and the map toggle
//! - `waypoints` - point-and-click waypoint placement and deletion
//! - `locomotion` - movement, turn and look-up axes

mod camera_control;
pub mod config;
mod locomotion;
mod waypoints;

use glam::Vec3;

use crate::camera::{CameraMode, CameraRig, CameraRigs, ViewMode};
use crate::input::{InputAction, InputAxis, InputEvent};
use crate::math::Rotator;
use crate::player::{BodyFacing, PlayerController};
use crate::ui::Hud;
use crate::waypoint::WaypointPointer;
use crate::world::{ActorId, World};

pub use config::{CharacterConfig, ConfigError};

/// Events for the host: animation triggers and gameplay notifications.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CharacterEvent {
    /// Start a jump
    Jump,
    /// Release the jump
    StopJumping,
    /// Reset head-mounted display orientation and position
    ResetVr,
    /// Play the light attack animation
    LightAttack,
    /// Play the heavy attack animation
    HeavyAttack,
    WaypointPlaced { id: ActorId, location: Vec3 },
    WaypointRemoved { id: ActorId },
    ViewModeChanged { from: ViewMode, to: ViewMode },
}

/// The player character.
#[derive(Debug)]
pub struct Character {
    config: CharacterConfig,
    location: Vec3,
    rotation: Rotator,
    use_controller_rotation_yaw: bool,
    cameras: CameraRigs,
    pointer: WaypointPointer,
    view_mode: ViewMode,
    sprint: bool,
    waypoint: Option<ActorId>,
    controller: Option<PlayerController>,
    hud: Option<Hud>,
    events: Vec<CharacterEvent>,
    begun_play: bool,
}

impl Default for Character {
    fn default() -> Self {
        Self::new(CharacterConfig::default())
    }
}

impl Character {
    /// Build the character with its rigs laid out from `config`.
    ///
    /// All view cameras start inactive; [`Character::begin_play`] picks the
    /// initial view.
    pub fn new(config: CharacterConfig) -> Self {
        let cameras = CameraRigs {
            follow: CameraRig::new(config.follow_offset, config.initial_follow_distance),
            first_person: CameraRig::new(config.first_person_offset, config.first_person_arm),
            map: CameraRig::fixed(config.map_camera_location, config.map_camera_rotation, 0.0)
                .with_absolute_location(),
            minimap: CameraRig::fixed(
                config.minimap_offset,
                Rotator::new(-90.0, 0.0, 0.0),
                config.minimap_arm,
            ),
        };
        let pointer = WaypointPointer::new(config.pointer_arm_third_person);

        Self {
            config,
            location: Vec3::ZERO,
            rotation: Rotator::ZERO,
            use_controller_rotation_yaw: false,
            cameras,
            pointer,
            view_mode: ViewMode::ThirdPerson,
            sprint: false,
            waypoint: None,
            controller: None,
            hud: None,
            events: Vec::new(),
            begun_play: false,
        }
    }

    /// Place the character at `location`.
    pub fn with_location(mut self, location: Vec3) -> Self {
        self.location = location;
        self
    }

    /// Attach a player controller, replacing any previous one.
    pub fn possess(&mut self, controller: PlayerController) {
        self.controller = Some(controller);
    }

    /// Detach and return the player controller.
    pub fn unpossess(&mut self) -> Option<PlayerController> {
        self.controller.take()
    }

    /// Enter play: third-person view, overlays built and the minimap shown.
    ///
    /// Runs once; later calls leave the current view untouched.
    pub fn begin_play(&mut self) {
        if self.begun_play {
            log::debug!("begin_play called again in {} view, ignored", self.view_mode);
            return;
        }
        self.view_mode = ViewMode::ThirdPerson;
        self.cameras.sync(self.view_mode);

        if self.controller.is_none() {
            log::debug!("Character began play without a player controller");
        }

        let mut hud = Hud::new();
        hud.show_gameplay();
        self.hud = Some(hud);

        self.begun_play = true;
        log::info!(
            "Character began play in {} view, follow distance {}",
            self.view_mode,
            self.follow_distance()
        );
    }

    /// Dispatch one input event.
    pub fn handle_input(&mut self, world: &mut World, event: InputEvent) {
        if !self.begun_play {
            log::debug!("Ignoring {:?} before begin_play", event);
            return;
        }

        match event {
            InputEvent::Action { action, pressed } => self.handle_action(world, action, pressed),
            InputEvent::Axis { axis, value } => self.handle_axis(world, axis, value),
            InputEvent::Touch { pressed, .. } => {
                self.push_event(if pressed {
                    CharacterEvent::Jump
                } else {
                    CharacterEvent::StopJumping
                });
            }
        }
    }

    fn handle_action(&mut self, world: &mut World, action: InputAction, pressed: bool) {
        match (action, pressed) {
            (InputAction::Jump, true) => self.push_event(CharacterEvent::Jump),
            (InputAction::Jump, false) => self.push_event(CharacterEvent::StopJumping),
            (InputAction::ResetVr, true) => self.push_event(CharacterEvent::ResetVr),
            (InputAction::ScrollIn, true) => self.scroll_in(),
            (InputAction::ScrollOut, true) => self.scroll_out(),
            (InputAction::Map, true) => self.toggle_map(),
            (InputAction::SetWaypoint, true) => self.set_waypoint(world),
            (InputAction::DeleteWaypoint, true) => self.delete_waypoint(world),
            (InputAction::ToggleSprint, pressed) => self.set_sprint(pressed),
            // Releases of press-only actions
            (_, false) => {}
        }
    }

    fn handle_axis(&mut self, world: &World, axis: InputAxis, value: f32) {
        match axis {
            InputAxis::MoveForward => self.move_forward(value),
            InputAxis::MoveRight => self.move_right(value),
            InputAxis::Turn => self.turn(value),
            InputAxis::TurnRate => self.turn_at_rate(value, world.delta_seconds()),
            InputAxis::LookUp => self.look_up(value),
            InputAxis::LookUpRate => self.look_up_at_rate(value, world.delta_seconds()),
        }
    }

    /// Per-frame update: fold look input into the control rotation and turn
    /// the pointer toward the waypoint.
    pub fn tick(&mut self, world: &World) {
        if let Some(controller) = self.controller.as_mut() {
            controller.update_rotation();
        }
        self.update_pointer(world);
    }

    /// Take the events produced since the last drain.
    pub fn drain_events(&mut self) -> Vec<CharacterEvent> {
        std::mem::take(&mut self.events)
    }

    fn push_event(&mut self, event: CharacterEvent) {
        self.events.push(event);
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    pub fn config(&self) -> &CharacterConfig {
        &self.config
    }

    pub fn has_begun_play(&self) -> bool {
        self.begun_play
    }

    #[inline]
    pub fn location(&self) -> Vec3 {
        self.location
    }

    pub fn set_location(&mut self, location: Vec3) {
        self.location = location;
    }

    /// Body rotation.
    #[inline]
    pub fn rotation(&self) -> Rotator {
        self.rotation
    }

    pub fn set_rotation(&mut self, rotation: Rotator) {
        self.rotation = rotation;
    }

    #[inline]
    pub fn view_mode(&self) -> ViewMode {
        self.view_mode
    }

    /// Gameplay point of view, remembered while the map is open.
    #[inline]
    pub fn pov(&self) -> CameraMode {
        self.view_mode.pov()
    }

    #[inline]
    pub fn is_map_open(&self) -> bool {
        self.view_mode.is_map()
    }

    /// Current follow boom length.
    #[inline]
    pub fn follow_distance(&self) -> f32 {
        self.cameras.follow.arm_length
    }

    pub fn cameras(&self) -> &CameraRigs {
        &self.cameras
    }

    pub fn pointer(&self) -> &WaypointPointer {
        &self.pointer
    }

    pub fn hud(&self) -> Option<&Hud> {
        self.hud.as_ref()
    }

    pub fn controller(&self) -> Option<&PlayerController> {
        self.controller.as_ref()
    }

    pub fn controller_mut(&mut self) -> Option<&mut PlayerController> {
        self.controller.as_mut()
    }

    /// The live waypoint marker, if one has been placed.
    #[inline]
    pub fn waypoint(&self) -> Option<ActorId> {
        self.waypoint
    }

    #[inline]
    pub fn is_sprinting(&self) -> bool {
        self.sprint
    }

    /// Whether the body yaw follows the controller (first-person).
    #[inline]
    pub fn uses_controller_rotation_yaw(&self) -> bool {
        self.use_controller_rotation_yaw
    }

    /// How the movement component should turn the body this frame.
    pub fn body_facing(&self) -> BodyFacing {
        match self.controller.as_ref() {
            Some(controller) if self.use_controller_rotation_yaw => {
                BodyFacing::ControllerYaw(controller.control_rotation().yaw)
            }
            _ => BodyFacing::OrientToMovement,
        }
    }

    fn control_rotation(&self) -> Rotator {
        self.controller
            .as_ref()
            .map(PlayerController::control_rotation)
            .unwrap_or(Rotator::ZERO)
    }

    /// World location and rotation of the active view camera.
    pub fn view_point(&self) -> Option<(Vec3, Rotator)> {
        let control = self.control_rotation();
        self.cameras.active_view().map(|rig| {
            (
                rig.socket_location(self.location, control),
                rig.view_rotation(control),
            )
        })
    }
}
