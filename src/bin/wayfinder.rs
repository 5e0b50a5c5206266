//! Wayfinder demo
//!
//! Opens a window and drives a [`Game`] session from its events. The
//! scene is reported through the log and the window title.
//!
//! Run with: `cargo run --bin wayfinder [config.json]`
//!
//! Controls:
//! - WASD: Move
//! - Mouse: Look (arrow keys and PageUp/PageDown at the base rate)
//! - Left Shift (hold): Sprint
//! - Space: Jump
//! - Mouse wheel: Zoom, past the closest distance switches to first-person
//! - Tab / M: Toggle the overhead map
//! - Left click on the map: Place a waypoint (light attack otherwise)
//! - Right click on the map: Delete the waypoint near the cursor (heavy attack otherwise)
//! - R: Reset VR
//! - ESC: Exit

use std::path::Path;
use std::sync::Arc;
use std::time::Instant;

use winit::application::ApplicationHandler;
use winit::dpi::PhysicalSize;
use winit::event::{DeviceEvent, DeviceId, ElementState, MouseScrollDelta, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::PhysicalKey;
use winit::window::{CursorGrabMode, Window, WindowAttributes, WindowId};

use wayfinder_engine::world::GroundPlane;
use wayfinder_engine::{CharacterConfig, CharacterEvent, Game, KeyCode, MouseButton, ScrollDelta};

const DEFAULT_CONFIG_PATH: &str = "wayfinder.json";

fn map_key(key: winit::keyboard::KeyCode) -> KeyCode {
    use winit::keyboard::KeyCode as Winit;
    match key {
        Winit::KeyW => KeyCode::W,
        Winit::KeyA => KeyCode::A,
        Winit::KeyS => KeyCode::S,
        Winit::KeyD => KeyCode::D,
        Winit::KeyM => KeyCode::M,
        Winit::KeyR => KeyCode::R,
        Winit::Space => KeyCode::Space,
        Winit::ShiftLeft => KeyCode::ShiftLeft,
        Winit::ShiftRight => KeyCode::ShiftRight,
        Winit::ControlLeft => KeyCode::ControlLeft,
        Winit::ControlRight => KeyCode::ControlRight,
        Winit::ArrowUp => KeyCode::ArrowUp,
        Winit::ArrowDown => KeyCode::ArrowDown,
        Winit::ArrowLeft => KeyCode::ArrowLeft,
        Winit::ArrowRight => KeyCode::ArrowRight,
        Winit::PageUp => KeyCode::PageUp,
        Winit::PageDown => KeyCode::PageDown,
        Winit::Tab => KeyCode::Tab,
        Winit::Escape => KeyCode::Escape,
        Winit::Enter => KeyCode::Enter,
        _ => KeyCode::Unknown,
    }
}

fn map_button(button: winit::event::MouseButton) -> MouseButton {
    use winit::event::MouseButton as Winit;
    match button {
        Winit::Left => MouseButton::Left,
        Winit::Middle => MouseButton::Middle,
        Winit::Right => MouseButton::Right,
        Winit::Back => MouseButton::Other(3),
        Winit::Forward => MouseButton::Other(4),
        Winit::Other(id) => MouseButton::Other(id),
    }
}

struct WayfinderApp {
    window: Option<Arc<Window>>,
    game: Game,
    last_frame: Instant,
    title: String,
}

impl WayfinderApp {
    fn new(config: CharacterConfig) -> Self {
        let mut game = Game::new(config, GroundPlane::default());
        game.start();
        Self {
            window: None,
            game,
            last_frame: Instant::now(),
            title: String::new(),
        }
    }

    fn window_size(&self) -> PhysicalSize<u32> {
        self.window
            .as_ref()
            .map(|window| window.inner_size())
            .unwrap_or(PhysicalSize::new(0, 0))
    }

    /// Push the controller's cursor settings to the window when they change.
    fn apply_cursor_state(&mut self) {
        let Some(window) = &self.window else {
            return;
        };
        let Some(controller) = self.game.character.controller_mut() else {
            return;
        };
        if !controller.cursor.is_dirty() {
            return;
        }

        window.set_cursor_visible(controller.cursor.should_cursor_be_visible());
        let result = if controller.cursor.should_cursor_be_grabbed() {
            window
                .set_cursor_grab(CursorGrabMode::Locked)
                .or_else(|_| window.set_cursor_grab(CursorGrabMode::Confined))
        } else {
            window.set_cursor_grab(CursorGrabMode::None)
        };
        if let Err(err) = result {
            log::warn!("Cursor grab not applied: {}", err);
        }
        controller.cursor.clear_dirty();
    }

    fn update_title(&mut self) {
        let character = &self.game.character;
        let title = format!(
            "Wayfinder - {} view, distance {:.0}{}",
            character.view_mode(),
            character.follow_distance(),
            if character.is_sprinting() { ", sprinting" } else { "" }
        );
        if title != self.title {
            if let Some(window) = &self.window {
                window.set_title(&title);
            }
            self.title = title;
        }
    }

    fn frame(&mut self) {
        let now = Instant::now();
        let dt = (now - self.last_frame).as_secs_f32();
        self.last_frame = now;

        self.game.frame(dt);
        for event in self.game.drain_events() {
            match event {
                CharacterEvent::WaypointPlaced { id, location } => {
                    log::info!("Waypoint {} at ({:.0}, {:.0}, {:.0})", id, location.x, location.y, location.z);
                }
                other => log::debug!("{:?}", other),
            }
        }

        self.apply_cursor_state();
        self.update_title();
    }
}

impl ApplicationHandler for WayfinderApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }
        let attrs = WindowAttributes::default()
            .with_title("Wayfinder")
            .with_inner_size(PhysicalSize::new(1280, 800));
        match event_loop.create_window(attrs) {
            Ok(window) => {
                self.window = Some(Arc::new(window));
                self.last_frame = Instant::now();
            }
            Err(err) => {
                log::error!("Failed to create window: {}", err);
                event_loop.exit();
            }
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => event_loop.exit(),

            WindowEvent::KeyboardInput { event, .. } => {
                if let PhysicalKey::Code(key) = event.physical_key {
                    let pressed = event.state == ElementState::Pressed;
                    let key = map_key(key);
                    if key == KeyCode::Escape && pressed {
                        event_loop.exit();
                        return;
                    }
                    self.game.key(key, pressed);
                }
            }

            WindowEvent::MouseInput { button, state, .. } => {
                self.game
                    .mouse_button(map_button(button), state == ElementState::Pressed);
            }

            WindowEvent::MouseWheel { delta, .. } => {
                let scroll = match delta {
                    MouseScrollDelta::LineDelta(x, y) => ScrollDelta::from_lines(x, y),
                    MouseScrollDelta::PixelDelta(pos) => ScrollDelta::from_pixels(pos.x, pos.y),
                };
                self.game.scroll(scroll);
            }

            WindowEvent::CursorMoved { position, .. } => {
                let size = self.window_size();
                self.game
                    .cursor_moved(position.x, position.y, size.width, size.height);
            }

            WindowEvent::CursorEntered { .. } => self.game.cursor_entered(),
            WindowEvent::CursorLeft { .. } => self.game.cursor_left(),
            WindowEvent::Focused(focused) => self.game.focus_changed(focused),

            WindowEvent::RedrawRequested => self.frame(),

            _ => {}
        }
    }

    fn about_to_wait(&mut self, _: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }

    fn device_event(&mut self, _: &ActiveEventLoop, _: DeviceId, event: DeviceEvent) {
        let grabbed = self
            .game
            .character
            .controller()
            .is_some_and(|controller| controller.cursor.should_cursor_be_grabbed());
        if !grabbed {
            return;
        }
        if let DeviceEvent::MouseMotion { delta } = event {
            self.game.mouse_motion(delta.0, delta.1);
        }
    }
}

fn main() -> Result<(), winit::error::EventLoopError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_CONFIG_PATH.to_string());
    let config = CharacterConfig::load_or_default(Path::new(&config_path));

    log::info!("Wayfinder");
    log::info!("Controls: WASD Move, Mouse Look, Shift Sprint, Space Jump, Wheel Zoom");
    log::info!("Tab/M: Map, Left click: Place waypoint, Right click: Delete waypoint, ESC: Exit");

    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Poll);
    let mut app = WayfinderApp::new(config);
    event_loop.run_app(&mut app)
}
