//! Locomotion domain: input snapshot sampling, once per rendered frame.

use bevy::prelude::*;

use crate::controller::MovementInput;

pub(crate) fn read_input(
    keyboard: Option<Res<ButtonInput<KeyCode>>>,
    mut input: ResMut<MovementInput>,
) {
    // Input service unavailable: substitute a neutral snapshot. The
    // character idles until the service comes back.
    let Some(keyboard) = keyboard else {
        *input = MovementInput::default();
        return;
    };

    // Horizontal axis
    let mut x = 0.0;
    if keyboard.pressed(KeyCode::KeyA) || keyboard.pressed(KeyCode::ArrowLeft) {
        x -= 1.0;
    }
    if keyboard.pressed(KeyCode::KeyD) || keyboard.pressed(KeyCode::ArrowRight) {
        x += 1.0;
    }

    // Vertical axis (down triggers fast fall while descending)
    let mut y = 0.0;
    if keyboard.pressed(KeyCode::KeyS) || keyboard.pressed(KeyCode::ArrowDown) {
        y -= 1.0;
    }
    if keyboard.pressed(KeyCode::KeyW) || keyboard.pressed(KeyCode::ArrowUp) {
        y += 1.0;
    }

    input.axis = Vec2::new(x, y);
    input.jump_just_pressed =
        keyboard.just_pressed(KeyCode::Space) || keyboard.just_pressed(KeyCode::KeyK);
    input.jump_just_released =
        keyboard.just_released(KeyCode::Space) || keyboard.just_released(KeyCode::KeyK);
}
