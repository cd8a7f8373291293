//! Locomotion domain: markers, physics layers, and adapter components.

use avian2d::prelude::*;
use bevy::prelude::*;
use std::sync::Arc;

use crate::config::MovementConfig;

/// Physics layers for collision filtering
#[derive(PhysicsLayer, Clone, Copy, Debug, Default)]
pub enum GameLayer {
    #[default]
    Default,
    /// Walkable surfaces (floors, platforms)
    Ground,
    /// Player and other locomotion-driven characters
    Character,
}

/// Marker for the player-controlled character
#[derive(Component, Debug)]
pub struct Player;

/// Marker for walkable colliders
#[derive(Component, Debug)]
pub struct Ground;

/// Shared handle to an immutable movement preset.
///
/// Many characters may hold clones of the same handle; nothing mutates the
/// config after construction. Reconfiguring a character means inserting a new
/// handle - in-flight timers on its [`MovementState`](crate::MovementState)
/// are left untouched.
#[derive(Component, Debug, Clone, Deref)]
pub struct MovementConfigHandle(pub Arc<MovementConfig>);

impl MovementConfigHandle {
    pub fn new(config: MovementConfig) -> Self {
        Self(Arc::new(config))
    }
}

/// Result of the ground probe for the current physics tick.
#[derive(Component, Debug, Default, Clone, Copy)]
pub struct GroundContact(pub bool);
