//! Locomotion domain: system modules for the input and physics ticks.

pub(crate) mod collisions;
pub(crate) mod input;
pub(crate) mod movement;

pub(crate) use collisions::detect_ground;
pub(crate) use input::read_input;
pub(crate) use movement::{apply_locomotion, ensure_config, handle_respawn, latch_input};
