//! Locomotion domain: fire-and-forget messages for external collaborators
//! (audio, haptics, animation parameters, camera shake) and the respawn
//! command.

use bevy::ecs::message::Message;
use bevy::prelude::*;

/// Fired on the tick a character executes any jump.
#[derive(Debug)]
pub struct JumpedEvent {
    pub entity: Entity,
}

impl Message for JumpedEvent {}

/// Fired exactly once per airborne-to-grounded transition.
#[derive(Debug)]
pub struct LandedEvent {
    pub entity: Entity,
}

impl Message for LandedEvent {}

/// Fired every physics tick with the latched horizontal input.
#[derive(Debug)]
pub struct MovedEvent {
    pub entity: Entity,
    pub horizontal_input: f32,
}

impl Message for MovedEvent {}

/// Command: fully reinitialize a character at a respawn position.
#[derive(Debug)]
pub struct RespawnEvent {
    pub entity: Entity,
    pub position: Vec2,
}

impl Message for RespawnEvent {}
