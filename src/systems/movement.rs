//! Locomotion domain: the tick drivers bridging the state machine to the
//! ECS - input latching at render rate, integration at physics rate.

use avian2d::prelude::*;
use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;

use crate::components::{GroundContact, MovementConfigHandle};
use crate::config::MovementConfig;
use crate::controller::{MovementInput, MovementState};
use crate::events::{JumpedEvent, LandedEvent, MovedEvent, RespawnEvent};

/// Render-rate tick: feed the frame's input snapshot into every character.
pub(crate) fn latch_input(
    time: Res<Time>,
    input: Res<MovementInput>,
    mut query: Query<(&mut MovementState, &MovementConfigHandle)>,
) {
    let dt = time.delta_secs();

    for (mut state, config) in &mut query {
        state.sample_input(&input, config, dt);
    }
}

/// Synthesize a default preset for characters spawned without one.
pub(crate) fn ensure_config(
    mut commands: Commands,
    query: Query<Entity, (With<MovementState>, Without<MovementConfigHandle>)>,
) {
    for entity in &query {
        warn!(
            "Movement config missing on {:?}, synthesizing defaults",
            entity
        );
        commands
            .entity(entity)
            .insert(MovementConfigHandle::new(MovementConfig::default()));
    }
}

/// Physics-rate tick: integrate each character and hand the resulting
/// velocity to the physics integrator.
pub(crate) fn apply_locomotion(
    time: Res<Time>,
    mut query: Query<(
        Entity,
        &mut MovementState,
        &MovementConfigHandle,
        &GroundContact,
        &mut LinearVelocity,
    )>,
    mut jumps: MessageWriter<JumpedEvent>,
    mut landings: MessageWriter<LandedEvent>,
    mut moves: MessageWriter<MovedEvent>,
) {
    let dt = time.delta_secs();

    for (entity, mut state, config, contact, mut velocity) in &mut query {
        // Pull the solver-resolved velocity first so contact response from
        // the previous step (e.g. standing on a floor) carries over.
        state.velocity = velocity.0;

        let events = state.integrate(contact.0, config, dt);

        velocity.0 = state.velocity;

        if events.jumped.is_some() {
            jumps.write(JumpedEvent { entity });
        }
        if events.landed {
            landings.write(LandedEvent { entity });
        }
        moves.write(MovedEvent {
            entity,
            horizontal_input: events.moved,
        });
    }
}

/// Full reinitialization at a checkpoint position.
pub(crate) fn handle_respawn(
    mut respawns: MessageReader<RespawnEvent>,
    mut query: Query<(
        &mut MovementState,
        &MovementConfigHandle,
        &mut Transform,
        &mut LinearVelocity,
    )>,
) {
    for respawn in respawns.read() {
        let Ok((mut state, config, mut transform, mut velocity)) = query.get_mut(respawn.entity)
        else {
            warn!("Respawn requested for unknown entity {:?}", respawn.entity);
            continue;
        };

        state.reset(config);
        transform.translation = respawn.position.extend(transform.translation.z);
        velocity.0 = Vec2::ZERO;

        info!(
            "Respawned {:?} at ({}, {})",
            respawn.entity, respawn.position.x, respawn.position.y
        );
    }
}
