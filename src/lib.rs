//! Kinematic locomotion and jump timing for side-scrolling characters.
//!
//! The crate owns exactly one concern: turning input edges and a ground
//! probe into a frame-accurate velocity, with the timing-sensitive pieces
//! (coyote time, jump buffering, variable jump height, limited air jumps,
//! state-dependent gravity) handled by an explicit state machine. Rendering,
//! animation, audio, and camera behavior are external collaborators that
//! consume the emitted [`JumpedEvent`] / [`LandedEvent`] / [`MovedEvent`]
//! messages.
//!
//! [`LocomotionPlugin`] samples input once per rendered frame, right before
//! the fixed main loop, and runs the ground probe plus integration in
//! `FixedUpdate`; it requires avian2d's `PhysicsPlugins` to be registered.
//! The state machine itself lives on [`MovementState`] and can be ticked by
//! hand (`sample_input` / `integrate`) from any harness.

mod components;
mod config;
mod controller;
mod events;
mod systems;


pub use components::{GameLayer, Ground, GroundContact, MovementConfigHandle, Player};
pub use config::{MovementConfig, PresetLoadError, load_preset, load_preset_or_default};
pub use controller::{
    GravityRegime, JumpKind, MovementInput, MovementPhase, MovementState, TickEvents,
};
pub use events::{JumpedEvent, LandedEvent, MovedEvent, RespawnEvent};

use bevy::prelude::*;

pub struct LocomotionPlugin;

impl Plugin for LocomotionPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<MovementInput>()
            .add_message::<JumpedEvent>()
            .add_message::<LandedEvent>()
            .add_message::<MovedEvent>()
            .add_message::<RespawnEvent>()
            // Render-rate input tick, guaranteed to complete before any of
            // this frame's fixed physics ticks run.
            .add_systems(
                RunFixedMainLoop,
                (systems::read_input, systems::latch_input)
                    .chain()
                    .in_set(RunFixedMainLoopSystems::BeforeFixedMainLoop),
            )
            .add_systems(
                FixedUpdate,
                (
                    systems::ensure_config,
                    systems::detect_ground,
                    systems::apply_locomotion,
                    systems::handle_respawn,
                )
                    .chain(),
            );
    }
}
