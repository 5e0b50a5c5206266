//! Scroll zoom, point-of-view switching and the map toggle.
//!
//! Every view change goes through `apply_view_mode`, which derives the
//! camera flags, pointer boom, controller gates and overlays from the new
//! [`ViewMode`].

use super::{Character, CharacterEvent};
use crate::camera::{CameraMode, ViewMode};

impl Character {
    /// Zoom the follow camera out one step, or leave first-person.
    ///
    /// Ignored while the map is open or once the boom is past the maximum.
    pub fn scroll_out(&mut self) {
        if self.is_map_open() {
            log::debug!("Scroll out ignored: map is open");
            return;
        }
        if self.follow_distance() > self.config.max_follow_distance {
            return;
        }

        match self.pov() {
            CameraMode::FirstPerson => self.apply_view_mode(ViewMode::ThirdPerson),
            CameraMode::ThirdPerson => {
                self.cameras.follow.arm_length += self.config.zoom_step;
                log::debug!("Follow distance {}", self.follow_distance());
            }
        }
    }

    /// Zoom the follow camera in one step, or enter first-person at the minimum.
    ///
    /// Ignored while the map is open or already in first-person.
    pub fn scroll_in(&mut self) {
        if self.is_map_open() {
            log::debug!("Scroll in ignored: map is open");
            return;
        }
        if self.pov() == CameraMode::FirstPerson {
            return;
        }

        if self.follow_distance() <= self.config.min_follow_distance {
            self.apply_view_mode(ViewMode::FirstPerson);
        } else {
            self.cameras.follow.arm_length -= self.config.zoom_step;
            log::debug!("Follow distance {}", self.follow_distance());
        }
    }

    /// Open the overhead map, or close it back to the remembered view.
    pub fn toggle_map(&mut self) {
        self.apply_view_mode(self.view_mode.toggle_map());
    }

    fn apply_view_mode(&mut self, next: ViewMode) {
        let previous = self.view_mode;
        if previous == next {
            return;
        }
        self.view_mode = next;
        self.cameras.sync(next);

        match next.pov() {
            CameraMode::ThirdPerson => {
                self.use_controller_rotation_yaw = false;
                self.pointer.arm_length = self.config.pointer_arm_third_person;
            }
            CameraMode::FirstPerson => {
                self.use_controller_rotation_yaw = true;
                self.pointer.arm_length = self.config.pointer_arm_first_person;
            }
        }

        let map_open = next.is_map();
        match self.controller.as_mut() {
            Some(controller) => {
                controller.cursor.set_show_cursor(map_open);
                controller.cursor.set_click_events(map_open);
                controller.set_ignore_move_input(map_open);
                controller.set_ignore_look_input(map_open);
            }
            None => log::debug!("No player controller to update for {} view", next),
        }

        if let Some(hud) = self.hud.as_mut() {
            if map_open {
                hud.show_map();
            } else {
                hud.show_gameplay();
            }
        }

        log::info!("View mode {} -> {}", previous, next);
        self.push_event(CharacterEvent::ViewModeChanged {
            from: previous,
            to: next,
        });
    }
}

#[cfg(test)]
mod tests {
    use crate::camera::{CameraMode, ViewMode};
    use crate::character::{Character, CharacterConfig, CharacterEvent};
    use crate::player::PlayerController;
    use crate::ui::OverlayKind;

    fn playing(config: CharacterConfig) -> Character {
        let mut character = Character::new(config);
        character.possess(PlayerController::new());
        character.begin_play();
        character
    }

    #[test]
    fn test_scroll_out_grows_by_step() {
        let mut character = playing(CharacterConfig::default());
        character.scroll_out();
        character.scroll_out();
        assert_eq!(character.follow_distance(), 340.0);
        assert_eq!(character.view_mode(), ViewMode::ThirdPerson);
    }

    #[test]
    fn test_scroll_in_at_min_enters_first_person() {
        let mut character = playing(CharacterConfig::default());
        character.scroll_in();
        assert_eq!(character.view_mode(), ViewMode::FirstPerson);
        assert!(character.uses_controller_rotation_yaw());
        assert_eq!(character.pointer().arm_length, -200.0);
        assert!(character.cameras().first_person.is_active());
        assert!(!character.cameras().follow.is_active());
        // Boom length is untouched by the switch
        assert_eq!(character.follow_distance(), 300.0);
    }

    #[test]
    fn test_scroll_out_leaves_first_person_without_zoom() {
        let mut character = playing(CharacterConfig::default());
        character.scroll_in();
        character.drain_events();

        character.scroll_out();
        assert_eq!(character.view_mode(), ViewMode::ThirdPerson);
        assert_eq!(character.follow_distance(), 300.0);
        assert!(!character.uses_controller_rotation_yaw());
        assert_eq!(character.pointer().arm_length, -100.0);
        assert_eq!(
            character.drain_events(),
            vec![CharacterEvent::ViewModeChanged {
                from: ViewMode::FirstPerson,
                to: ViewMode::ThirdPerson,
            }]
        );
    }

    #[test]
    fn test_scroll_in_above_min_shrinks() {
        let mut character = playing(CharacterConfig {
            initial_follow_distance: 500.0,
            ..CharacterConfig::default()
        });
        character.scroll_in();
        assert_eq!(character.follow_distance(), 480.0);
        assert_eq!(character.view_mode(), ViewMode::ThirdPerson);
    }

    #[test]
    fn test_scroll_ignored_while_map_open() {
        let mut character = playing(CharacterConfig::default());
        character.toggle_map();
        character.scroll_out();
        character.scroll_in();
        assert_eq!(character.follow_distance(), 300.0);
        assert_eq!(character.view_mode(), ViewMode::Map { pov: CameraMode::ThirdPerson });
    }

    #[test]
    fn test_map_open_sets_controller_and_overlays() {
        let mut character = playing(CharacterConfig::default());
        character.toggle_map();

        let cameras = character.cameras();
        assert!(cameras.map.is_active());
        assert_eq!(cameras.active_gameplay_cameras(), 0);

        let controller = character.controller().unwrap();
        assert!(controller.cursor.is_cursor_shown());
        assert!(controller.cursor.click_events_enabled());
        assert!(controller.is_move_input_ignored());
        assert!(controller.is_look_input_ignored());

        let visible: Vec<_> = character.hud().unwrap().visible().collect();
        assert_eq!(visible, vec![OverlayKind::MainMap]);
    }

    #[test]
    fn test_map_close_restores_first_person() {
        let mut character = playing(CharacterConfig::default());
        character.scroll_in();
        character.toggle_map();
        assert!(!character.cameras().first_person.is_active());

        character.toggle_map();
        assert_eq!(character.view_mode(), ViewMode::FirstPerson);
        assert!(character.cameras().first_person.is_active());
        assert!(!character.cameras().map.is_active());
        assert!(!character.controller().unwrap().is_move_input_ignored());
    }

    #[test]
    fn test_toggle_map_without_controller() {
        let mut character = Character::default();
        character.begin_play();
        character.toggle_map();
        assert!(character.is_map_open());
        assert!(character.cameras().map.is_active());
    }
}
