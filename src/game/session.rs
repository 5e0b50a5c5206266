//! Game Session
//!
//! Central state that holds the world, the character and the input layer
//! together and runs the frame loop.
//!
//! # Frame Order
//!
//! 1. Platform input arrives through [`Game::key`], [`Game::mouse_button`],
//!    [`Game::scroll`], [`Game::mouse_motion`] and [`Game::cursor_moved`]
//! 2. [`Game::frame`] advances the world clock, feeds the held-key axes,
//!    ticks the character and the markers, then moves the body
//! 3. The host collects [`Game::drain_events`] for animation and UI

use glam::Vec3;

use crate::character::{Character, CharacterConfig, CharacterEvent};
use crate::input::{
    InputBindings, InputEvent, InputState, InputTrigger, KeyCode, MouseButton, ScrollDelta,
};
use crate::math::Rotator;
use crate::player::{CharacterMovement, PlayerController};
use crate::world::{LineTrace, World};

/// How far below the capsule the floor probe reaches, cm
pub const FLOOR_PROBE_DEPTH: f32 = 100_000.0;

static_assertions::assert_impl_all!(CharacterEvent: Copy, Send, Sync);

/// One running session.
#[derive(Debug)]
pub struct Game {
    // === World ===
    /// Level geometry, markers and the frame clock
    pub world: World,

    // === Player ===
    /// The possessed character
    pub character: Character,
    /// Walking and jumping of the character's capsule
    pub movement: CharacterMovement,

    // === Input ===
    /// Trigger to action/axis mapping
    pub bindings: InputBindings,
    /// Held keys and cursor position
    pub input: InputState,

    /// Last floor height found under the character
    floor_height: f32,
    /// Character events collected since the last drain
    events: Vec<CharacterEvent>,
}

impl Game {
    /// Create a session over `geometry` with a possessed character standing at the origin.
    ///
    /// Play has not begun; call [`Game::start`].
    pub fn new(config: CharacterConfig, geometry: impl LineTrace + 'static) -> Self {
        let movement = CharacterMovement::new(config.movement);
        let spawn = Vec3::new(0.0, 0.0, movement.settings.capsule_half_height);

        let mut character = Character::new(config).with_location(spawn);
        character.possess(PlayerController::new());

        Self {
            world: World::new(geometry),
            character,
            movement,
            bindings: InputBindings::new(),
            input: InputState::new(),
            floor_height: 0.0,
            events: Vec::new(),
        }
    }

    /// Replace the default bindings.
    pub fn with_bindings(mut self, bindings: InputBindings) -> Self {
        self.bindings = bindings;
        self
    }

    /// Begin play and settle the character on the floor below it.
    ///
    /// Only the first call has an effect.
    pub fn start(&mut self) {
        if self.character.has_begun_play() {
            log::debug!("Session already started");
            return;
        }
        self.probe_floor();
        let rest = self.floor_height + self.movement.settings.capsule_half_height;
        let location = self.character.location();
        if location.z < rest {
            self.character.set_location(Vec3::new(location.x, location.y, rest));
        }
        self.character.begin_play();
    }

    /// Deliver an input event straight to the character.
    pub fn send(&mut self, event: InputEvent) {
        self.character.handle_input(&mut self.world, event);
    }

    /// Keyboard transition. Repeats of a held key are dropped.
    pub fn key(&mut self, key: KeyCode, pressed: bool) {
        if !self.input.keyboard.handle_key(key, pressed) {
            return;
        }
        if let Some(event) = self.bindings.translate(key, pressed) {
            self.send(event);
        }
    }

    /// Mouse button transition.
    ///
    /// While the map cursor is up, clicks only reach the world when the
    /// controller accepts them.
    pub fn mouse_button(&mut self, button: MouseButton, pressed: bool) {
        let blocked = self.character.controller().is_some_and(|controller| {
            controller.cursor.is_cursor_shown() && !controller.cursor.accepts_world_clicks()
        });
        if blocked {
            log::debug!("{:?} click dropped: cursor not over a focused window", button);
            return;
        }
        if let Some(event) = self.bindings.translate(button, pressed) {
            self.send(event);
        }
    }

    /// Wheel movement. Every whole notch is a full press and release;
    /// fractional trackpad deltas build up across events.
    pub fn scroll(&mut self, delta: ScrollDelta) {
        let notches = self.input.mouse.accumulate_scroll(delta);
        let trigger = if notches > 0 {
            InputTrigger::WheelUp
        } else {
            InputTrigger::WheelDown
        };
        for _ in 0..notches.unsigned_abs() {
            if let Some(event) = self.bindings.translate(trigger, true) {
                self.send(event);
            }
            if let Some(event) = self.bindings.translate(trigger, false) {
                self.send(event);
            }
        }
    }

    /// Raw mouse motion in pixels, used for mouse look.
    pub fn mouse_motion(&mut self, dx: f64, dy: f64) {
        for event in self.bindings.mouse_motion(dx, dy) {
            self.send(event);
        }
    }

    /// Cursor moved to pixel `(x, y)` in a window of `width` by `height`.
    pub fn cursor_moved(&mut self, x: f64, y: f64, width: u32, height: u32) {
        self.input.mouse.set_position(x, y, width, height);
        let uv = self.input.cursor_uv();
        if let Some(controller) = self.character.controller_mut() {
            controller.set_cursor_position(uv);
        }
    }

    pub fn cursor_entered(&mut self) {
        self.input.mouse.enter_window();
        if let Some(controller) = self.character.controller_mut() {
            controller.cursor.handle_cursor_enter();
        }
    }

    pub fn cursor_left(&mut self) {
        self.input.mouse.leave_window();
        if let Some(controller) = self.character.controller_mut() {
            controller.cursor.handle_cursor_leave();
            controller.set_cursor_position(None);
        }
    }

    /// Window focus change. Held keys are released when focus is lost.
    pub fn focus_changed(&mut self, focused: bool) {
        if !focused {
            let held: Vec<KeyCode> = self.input.keyboard.pressed_keys().iter().copied().collect();
            for key in held {
                self.key(key, false);
            }
        }
        if let Some(controller) = self.character.controller_mut() {
            if focused {
                controller.cursor.handle_focus_gained();
            } else {
                controller.cursor.handle_focus_lost();
            }
        }
    }

    /// Advance the session by `delta_seconds`.
    pub fn frame(&mut self, delta_seconds: f32) {
        self.world.begin_frame(delta_seconds);

        for event in self.bindings.axis_events(&self.input.keyboard) {
            self.send(event);
        }

        self.character.tick(&self.world);
        self.world.tick();

        for event in self.character.drain_events() {
            match event {
                CharacterEvent::Jump => {
                    self.movement.jump();
                }
                CharacterEvent::StopJumping => self.movement.stop_jumping(),
                _ => {}
            }
            self.events.push(event);
        }

        self.update_movement();
    }

    fn update_movement(&mut self) {
        let input = self
            .character
            .controller_mut()
            .map(PlayerController::consume_movement_input)
            .unwrap_or(Vec3::ZERO);

        self.probe_floor();
        let location = self.movement.update(
            self.character.location(),
            input,
            self.character.body_facing(),
            self.floor_height,
            self.world.delta_seconds(),
        );
        self.character.set_location(location);
        self.character
            .set_rotation(Rotator::from_yaw(self.movement.body_yaw()));
    }

    /// Trace straight down from the top of the capsule. Keeps the last
    /// height when nothing is below.
    fn probe_floor(&mut self) {
        let location = self.character.location();
        let top = location + Vec3::Z * self.movement.settings.capsule_half_height;
        let bottom = location - Vec3::Z * FLOOR_PROBE_DEPTH;
        let hit = self.world.line_trace_single(top, bottom);
        if hit.blocking_hit {
            self.floor_height = hit.location.z;
        }
    }

    /// Height of the floor under the character as of the last frame.
    pub fn floor_height(&self) -> f32 {
        self.floor_height
    }

    /// Take the character events produced since the last drain.
    pub fn drain_events(&mut self) -> Vec<CharacterEvent> {
        std::mem::take(&mut self.events)
    }
}
