/// GLIDE Project
/// `File` player.rs
/// `Description` Agent state and simulation step module
/// `Author` TioT2
/// `Last changed` 18.10.2026

use crate::collision::{first_crossed_portal, resolve, resolve_detailed, CollisionWorld};
use crate::config::SimulationConfig;
use crate::input::Controls;
use crate::level::{Portal, Spawn};
use crate::math::*;

/// Agent motion state
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MotionState {
    /// Downward probe is blocked
    Grounded,
    /// Downward probe passes freely
    Airborne,
} // enum MotionState

/// Single step outcome
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct StepReport {
    /// Index of the portal crossed during the step
    pub teleported: Option<usize>,
    /// Blocking contacts met by the step motion
    pub contacts: usize,
    /// State after the step
    pub state: MotionState,
} // struct StepReport

/// Agent (player camera) representation structure
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Player {
    pub position: Vec3,
    /// Per-step velocity, persists between steps
    pub velocity: Vec3,
    /// Accumulated acceleration, zeroed after each step
    pub acceleration: Vec3,
    /// Yaw, degrees in [0, 360)
    pub yaw: f32,
    /// Pitch, degrees in [-90, 90]
    pub pitch: f32,
    pub state: MotionState,
} // struct Player

impl Player {
    /// Player creation function
    /// * `spawn` - initial pose
    pub fn new(spawn: &Spawn) -> Self {
        Self {
            position: spawn.position,
            velocity: Vec3::ZERO,
            acceleration: Vec3::ZERO,
            yaw: spawn.yaw.rem_euclid(360.0),
            pitch: spawn.pitch.clamp(-90.0, 90.0),
            state: MotionState::Airborne,
        }
    } // fn new

    /// Horizontal forward direction
    pub fn forward(&self) -> Vec3 {
        yaw_forward(self.yaw)
    } // fn forward

    /// Horizontal right direction, forward rotated by 90 degrees
    pub fn right(&self) -> Vec3 {
        yaw_forward(self.yaw - 90.0)
    } // fn right

    /// Look angles update function
    /// * `yaw_delta` - horizontal motion, positive turns right
    /// * `pitch_delta` - vertical motion, positive looks down
    /// * `sensitivity` - degrees per motion unit
    pub fn look(&mut self, yaw_delta: f32, pitch_delta: f32, sensitivity: f32) {
        self.yaw = (self.yaw - yaw_delta * sensitivity).rem_euclid(360.0);
        self.pitch = (self.pitch - pitch_delta * sensitivity).clamp(-90.0, 90.0);
    } // fn look

    /// Control driven acceleration accumulation function
    /// * `controls` - step controls
    /// * `config` - simulation config
    pub fn accumulate(&mut self, controls: &Controls, config: &SimulationConfig) {
        let axis = |positive: bool, negative: bool| (positive as i32 - negative as i32) as f32;

        let walk = self.forward() * axis(controls.forward, controls.back)
            + self.right() * axis(controls.strafe_right, controls.strafe_left);

        self.acceleration += walk.normalize_or_zero() * config.move_acceleration;

        if controls.descend {
            self.acceleration.y -= config.descend_acceleration;
        }

        if controls.jump && self.state == MotionState::Grounded {
            self.acceleration.y += config.jump_acceleration;
            self.state = MotionState::Airborne;
            tracing::debug!("jump from {}", self.position);
        }
    } // fn accumulate

    /// Ground probing function
    /// * Returns motion state at current position
    pub fn probe_ground(&self, world: &CollisionWorld, config: &SimulationConfig) -> MotionState {
        let probed = resolve(self.position, Vec3::new(0.0, -config.probe_distance, 0.0), world, 0);

        if self.position.y - probed.y < config.probe_distance - config.probe_tolerance {
            MotionState::Grounded
        } else {
            MotionState::Airborne
        }
    } // fn probe_ground

    /// Simulation step function
    /// * `controls` - step controls
    /// * `world` - collision world
    /// * `portals` - level portals
    /// * `config` - simulation config
    /// * Returns step report
    pub fn step(&mut self, controls: &Controls, world: &CollisionWorld, portals: &[Portal], config: &SimulationConfig) -> StepReport {
        self.look(controls.yaw_delta, controls.pitch_delta, config.mouse_sensitivity);
        self.accumulate(controls, config);

        self.velocity = (self.velocity + self.acceleration) / config.damping;

        let delta = self.velocity + Vec3::new(0.0, -config.gravity_bias, 0.0);
        let resolution = resolve_detailed(self.position, delta, world, config.max_slide_depth);
        let mut new_position = resolution.position;

        let teleported = first_crossed_portal(self.position, new_position - self.position, portals)
            .map(|(index, portal)| {
                new_position += portal.offset();
                tracing::info!("portal {index} crossed, moved to {new_position}");
                index
            });

        self.position = new_position;
        self.acceleration = Vec3::ZERO;

        let state = self.probe_ground(world, config);
        if state != self.state {
            tracing::debug!("{:?} -> {:?} at {}", self.state, state, self.position);
        }
        self.state = state;

        if resolution.contacts > 0 {
            tracing::trace!("{} contacts, delta {delta} resolved to {}", resolution.contacts, self.position);
        }

        StepReport { teleported, contacts: resolution.contacts, state }
    } // fn step
} // impl Player


// file player.rs
