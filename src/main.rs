//! Sandbox: a playable test room for hand-tuning the locomotion feel.

use avian2d::prelude::*;
use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;
use std::path::Path;

use sidescroller_locomotion::{
    GameLayer, Ground, LocomotionPlugin, MovementConfigHandle, MovementState, Player,
    RespawnEvent, load_preset_or_default,
};

const RESPAWN_POINT: Vec2 = Vec2::new(0.0, 60.0);

fn main() {
    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Locomotion Sandbox".to_string(),
                resolution: (1280, 720).into(),
                resizable: true,
                ..default()
            }),
            ..default()
        }))
        .add_plugins(PhysicsPlugins::default())
        .add_plugins(LocomotionPlugin)
        .add_systems(Startup, (setup_camera, spawn_test_room, spawn_player))
        .add_systems(Update, respawn_on_fall)
        .run();
}

fn setup_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}

fn spawn_player(mut commands: Commands) {
    let config = load_preset_or_default(Path::new("assets/movement/default.ron"));

    commands.spawn((
        (
            Player,
            MovementState::new(&config),
            MovementConfigHandle::new(config),
        ),
        // Rendering
        Sprite {
            color: Color::srgb(0.9, 0.9, 0.9),
            custom_size: Some(Vec2::new(24.0, 48.0)),
            ..default()
        },
        Transform::from_xyz(RESPAWN_POINT.x, RESPAWN_POINT.y, 0.0),
        // Physics
        (
            RigidBody::Dynamic,
            Collider::rectangle(24.0, 48.0),
            LockedAxes::ROTATION_LOCKED,
            LinearVelocity::default(),
            GravityScale(0.0), // The locomotion core owns gravity
            Friction::new(0.0),
            CollisionLayers::new(GameLayer::Character, [GameLayer::Ground]),
        ),
    ));
}

fn spawn_test_room(mut commands: Commands) {
    let ground_color = Color::srgb(0.4, 0.5, 0.4);
    let platform_color = Color::srgb(0.5, 0.4, 0.3);

    let ground_layers = CollisionLayers::new(GameLayer::Ground, [GameLayer::Character]);

    // Ground
    commands.spawn((
        Ground,
        Sprite {
            color: ground_color,
            custom_size: Some(Vec2::new(900.0, 40.0)),
            ..default()
        },
        Transform::from_xyz(0.0, -200.0, 0.0),
        RigidBody::Static,
        Collider::rectangle(900.0, 40.0),
        ground_layers,
    ));

    // Platform 1 - left side, coyote-jump distance from the ground edge
    commands.spawn((
        Ground,
        Sprite {
            color: platform_color,
            custom_size: Some(Vec2::new(150.0, 20.0)),
            ..default()
        },
        Transform::from_xyz(-280.0, -60.0, 0.0),
        RigidBody::Static,
        Collider::rectangle(150.0, 20.0),
        ground_layers,
    ));

    // Platform 2 - right side, single-jump height
    commands.spawn((
        Ground,
        Sprite {
            color: platform_color,
            custom_size: Some(Vec2::new(150.0, 20.0)),
            ..default()
        },
        Transform::from_xyz(280.0, 40.0, 0.0),
        RigidBody::Static,
        Collider::rectangle(150.0, 20.0),
        ground_layers,
    ));

    // Platform 3 - center, needs the air jump
    commands.spawn((
        Ground,
        Sprite {
            color: platform_color,
            custom_size: Some(Vec2::new(120.0, 20.0)),
            ..default()
        },
        Transform::from_xyz(0.0, 170.0, 0.0),
        RigidBody::Static,
        Collider::rectangle(120.0, 20.0),
        ground_layers,
    ));
}

/// Falling out of the room counts as dying: respawn at the checkpoint.
fn respawn_on_fall(
    query: Query<(Entity, &Transform), With<Player>>,
    mut respawns: MessageWriter<RespawnEvent>,
) {
    for (entity, transform) in &query {
        if transform.translation.y < -600.0 {
            respawns.write(RespawnEvent {
                entity,
                position: RESPAWN_POINT,
            });
        }
    }
}
