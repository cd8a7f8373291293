//! Locomotion domain: the per-character movement state machine.
//!
//! The machine ticks at two rates. [`MovementState::sample_input`] runs once
//! per rendered frame and latches input edges into timers and flags;
//! [`MovementState::integrate`] runs once per fixed physics tick and may run
//! zero or several times between input samples. Because edges are latched,
//! repeated physics ticks never consume the same press twice.

use bevy::prelude::*;

use crate::components::GroundContact;
use crate::config::MovementConfig;

/// Latched input snapshot for the current frame. A missing input service
/// leaves this at its neutral default and the character simply idles.
#[derive(Resource, Debug, Default, Clone)]
pub struct MovementInput {
    /// Horizontal in `x`, down/fast-fall in negative `y`. Both in [-1, 1].
    pub axis: Vec2,
    pub jump_just_pressed: bool,
    pub jump_just_released: bool,
}

/// The effective locomotion phase, stored explicitly so the reachable state
/// space stays enumerable. Fast fall is an orthogonal overlay bit on the
/// descending phases, not a phase of its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MovementPhase {
    /// Standing on walkable ground.
    Grounded,
    /// Airborne and ascending.
    Rising,
    /// Airborne after walking off a ledge, still inside the coyote window.
    CoyoteFalling,
    /// Airborne and descending. Freshly spawned characters start here.
    #[default]
    Falling,
}

/// Mutually exclusive gravity selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GravityRegime {
    #[default]
    Ground,
    Jump,
    Fall,
}

impl GravityRegime {
    pub fn value(self, config: &MovementConfig) -> f32 {
        match self {
            GravityRegime::Ground => config.gravity,
            GravityRegime::Jump => config.jump_gravity,
            GravityRegime::Fall => config.fall_gravity,
        }
    }
}

/// Which jump source a tick consumed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JumpKind {
    Ground,
    Air,
}

/// What a single physics tick produced, for the driving system to forward
/// as fire-and-forget messages.
#[derive(Debug, Clone, Copy, Default)]
pub struct TickEvents {
    pub jumped: Option<JumpKind>,
    pub landed: bool,
    /// The latched horizontal input, reported every tick.
    pub moved: f32,
}

/// Mutable per-character locomotion state. One instance per character, owned
/// by that character's entity and never shared.
#[derive(Component, Debug, Clone)]
#[require(GroundContact)]
pub struct MovementState {
    pub velocity: Vec2,
    /// Latched horizontal input in [-1, 1].
    pub move_input: f32,
    pub phase: MovementPhase,
    /// Previous physics tick's ground-probe result. Landing is defined on
    /// the probe transition, not on the phase.
    pub was_grounded: bool,
    pub fast_falling: bool,
    pub gravity: GravityRegime,
    /// Seconds of ground-jump eligibility remaining. Held at
    /// `coyote_time` while grounded, decaying once airborne.
    pub coyote_timer: f32,
    /// Seconds the buffered jump request stays alive. Zeroed on consumption.
    pub jump_buffer_timer: f32,
    pub air_jumps_remaining: u8,
    /// True from jump execution until the early-release cut or landing.
    pub jump_active: bool,
    pub jump_released: bool,
}

impl Default for MovementState {
    fn default() -> Self {
        Self {
            velocity: Vec2::ZERO,
            move_input: 0.0,
            phase: MovementPhase::default(),
            was_grounded: false,
            fast_falling: false,
            gravity: GravityRegime::default(),
            coyote_timer: 0.0,
            jump_buffer_timer: 0.0,
            air_jumps_remaining: 0,
            jump_active: false,
            jump_released: true,
        }
    }
}

impl MovementState {
    /// Spawn state: airborne, at rest, full air-jump budget.
    pub fn new(config: &MovementConfig) -> Self {
        Self {
            air_jumps_remaining: config.max_air_jumps,
            ..Self::default()
        }
    }

    pub fn is_grounded(&self) -> bool {
        self.phase == MovementPhase::Grounded
    }

    pub fn is_jumping(&self) -> bool {
        self.jump_active
    }

    /// Reinitialize for a respawn. Equivalent to [`MovementState::new`]; the
    /// character starts airborne and falls onto whatever is below it.
    pub fn reset(&mut self, config: &MovementConfig) {
        *self = Self::new(config);
    }

    /// Scripted equivalent of the jump-pressed edge: arms the jump buffer.
    pub fn press_jump(&mut self, config: &MovementConfig) {
        self.jump_buffer_timer = config.jump_buffer_time;
        self.jump_released = false;
    }

    /// Scripted equivalent of the jump-released edge.
    pub fn release_jump(&mut self) {
        self.jump_released = true;
    }

    /// Input/timer tick, once per rendered frame. Latches edges, updates the
    /// fast-fall overlay, and decays both timing windows. Velocity is never
    /// touched here; the physics tick owns it.
    pub fn sample_input(&mut self, input: &MovementInput, config: &MovementConfig, dt: f32) {
        self.move_input = input.axis.x.clamp(-1.0, 1.0);

        if input.jump_just_pressed {
            self.press_jump(config);
        }
        if input.jump_just_released {
            self.release_jump();
        }

        self.fast_falling = input.axis.y < -0.5 && !self.is_grounded() && self.velocity.y < 0.0;

        self.coyote_timer = (self.coyote_timer - dt).max(0.0);
        self.jump_buffer_timer = (self.jump_buffer_timer - dt).max(0.0);
    }

    /// Physics tick, once per fixed step: ground transitions, jump
    /// resolution, gravity selection, and velocity integration. `grounded`
    /// is this tick's ground-probe result.
    pub fn integrate(&mut self, grounded: bool, config: &MovementConfig, dt: f32) -> TickEvents {
        let mut events = TickEvents::default();

        self.apply_release_cut(config);
        self.update_ground_state(grounded, config, &mut events);
        self.resolve_jump(config, &mut events);
        self.select_gravity();
        self.integrate_horizontal(config, dt, &mut events);
        self.integrate_vertical(config, dt);

        events
    }

    /// Variable jump height: an early release clips the ascent to the
    /// minimum. Runs at the top of the physics tick, after the driver has
    /// synced the solver's velocity in, so the cut reaches the solver.
    /// Clearing `jump_active` makes it fire at most once per jump.
    fn apply_release_cut(&mut self, config: &MovementConfig) {
        if self.jump_active && self.jump_released && self.velocity.y > config.min_jump_velocity {
            self.velocity.y = config.min_jump_velocity;
            self.jump_active = false;
        }
    }

    fn update_ground_state(
        &mut self,
        grounded: bool,
        config: &MovementConfig,
        events: &mut TickEvents,
    ) {
        let was_grounded = self.was_grounded;
        self.was_grounded = grounded;

        if grounded {
            if !was_grounded {
                self.jump_active = false;
                self.fast_falling = false;
                self.air_jumps_remaining = config.max_air_jumps;
                self.gravity = GravityRegime::Ground;
                events.landed = true;
                debug!(
                    "Landed: air_jumps_remaining={}",
                    self.air_jumps_remaining
                );
            }
            // A freshly executed jump can overlap the probe for a tick; it
            // stays `Rising` and keeps its zeroed coyote window.
            if self.phase != MovementPhase::Rising || self.velocity.y <= 0.0 {
                self.phase = MovementPhase::Grounded;
                // Grounded characters are always ground-jump eligible; the
                // timer starts decaying the moment the probe loses the
                // ground.
                self.coyote_timer = config.coyote_time;
            }
        } else if was_grounded {
            if self.velocity.y <= 0.0 {
                // Walked off a ledge: the coyote window is already armed.
                self.phase = MovementPhase::CoyoteFalling;
            } else {
                self.phase = MovementPhase::Rising;
                self.coyote_timer = 0.0;
            }
        } else if self.phase == MovementPhase::CoyoteFalling && self.coyote_timer <= 0.0 {
            self.phase = MovementPhase::Falling;
        }
    }

    fn resolve_jump(&mut self, config: &MovementConfig, events: &mut TickEvents) {
        if self.jump_buffer_timer <= 0.0 {
            return;
        }

        // A ground jump always outranks an air jump when both are eligible.
        let ground_eligible = self.is_grounded() || self.coyote_timer > 0.0;

        if ground_eligible {
            self.velocity.y = config.jump_velocity;
            self.air_jumps_remaining = config.max_air_jumps;
            events.jumped = Some(JumpKind::Ground);
            debug!("Ground jump: air_jumps_remaining={}", self.air_jumps_remaining);
        } else if self.air_jumps_remaining > 0 {
            self.velocity.y = config.air_jump_velocity;
            self.air_jumps_remaining -= 1;
            events.jumped = Some(JumpKind::Air);
            debug!("Air jump: air_jumps_remaining={}", self.air_jumps_remaining);
        } else {
            return;
        }

        self.phase = MovementPhase::Rising;
        self.jump_active = true;
        self.jump_buffer_timer = 0.0;
        self.coyote_timer = 0.0;
        self.gravity = GravityRegime::Jump;
    }

    fn select_gravity(&mut self) {
        if self.velocity.y >= 0.0 {
            return;
        }
        if self.phase == MovementPhase::Rising {
            self.phase = MovementPhase::Falling;
        }
        // A held jump keeps its lighter ascent gravity through the apex; the
        // heavy fall gravity only kicks in once the jump is over.
        if !self.jump_active {
            self.gravity = GravityRegime::Fall;
        }
    }

    fn integrate_horizontal(&mut self, config: &MovementConfig, dt: f32, events: &mut TickEvents) {
        let target = self.move_input * config.move_speed;
        let rate = match (self.is_grounded(), self.move_input.abs() > 0.1) {
            (true, true) => config.acceleration,
            (true, false) => config.deceleration,
            (false, true) => config.air_acceleration,
            (false, false) => config.air_deceleration,
        };

        // Move toward the target without overshooting it in one tick.
        let step = rate * dt;
        if self.velocity.x < target {
            self.velocity.x = (self.velocity.x + step).min(target);
        } else {
            self.velocity.x = (self.velocity.x - step).max(target);
        }

        events.moved = self.move_input;
    }

    fn integrate_vertical(&mut self, config: &MovementConfig, dt: f32) {
        let multiplier = if self.fast_falling {
            config.fast_fall_multiplier
        } else {
            1.0
        };

        self.velocity.y -= self.gravity.value(config) * multiplier * dt;
        if self.velocity.y < -config.max_fall_speed {
            self.velocity.y = -config.max_fall_speed;
        }
    }
}
