/// GLIDE Project
/// `File` input.rs
/// `Description` Key table and movement bindings module
/// `Author` TioT2
/// `Last changed` 18.10.2026

use std::collections::BTreeMap;
use crate::math::Vec2;

/// Single key state
#[derive(Copy, Clone, PartialEq, Eq)]
struct KeyState {
    /// Is key pressed
    pub pressed: bool,
    /// Is key state changed during previous frame
    pub changed: bool,
} // struct KeyState

/// Keycode representation structure
pub type KeyCode = winit::keyboard::KeyCode;

/// Movement action
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Action {
    Forward,
    Back,
    StrafeLeft,
    StrafeRight,
    Jump,
    Descend,
} // enum Action

/// Action to key bindings
#[derive(Clone, Debug)]
pub struct Bindings {
    keys: BTreeMap<Action, KeyCode>,
} // struct Bindings

impl Default for Bindings {
    fn default() -> Self {
        Self {
            keys: BTreeMap::from([
                (Action::Forward, KeyCode::KeyW),
                (Action::Back, KeyCode::KeyS),
                (Action::StrafeLeft, KeyCode::KeyA),
                (Action::StrafeRight, KeyCode::KeyD),
                (Action::Jump, KeyCode::Space),
                (Action::Descend, KeyCode::ShiftLeft),
            ]),
        }
    }
}

impl Bindings {
    /// Action key getting function
    pub fn key(&self, action: Action) -> Option<KeyCode> {
        self.keys.get(&action).copied()
    } // fn key
} // impl Bindings

/// Per-step control snapshot consumed by the simulation
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Controls {
    pub forward: bool,
    pub back: bool,
    pub strafe_left: bool,
    pub strafe_right: bool,
    pub jump: bool,
    pub descend: bool,
    /// Horizontal look motion
    pub yaw_delta: f32,
    /// Vertical look motion, positive is down
    pub pitch_delta: f32,
} // struct Controls

/// Input state representation structure
pub struct State {
    keys: BTreeMap<KeyCode, KeyState>,
    mouse_motion: Vec2,
} // struct State

impl State {
    /// Key state getting function
    /// * `key` - keycode to get state of
    /// * Returns key state
    fn get_key_state(&self, key: KeyCode) -> KeyState {
        self.keys
            .get(&key)
            .copied()
            .unwrap_or(KeyState { pressed: false, changed: false })
    } // fn get_key_state

    /// Is key pressed checking function
    /// * `key` - key to check state of
    /// * Returns true if key is pressed
    pub fn is_key_pressed(&self, key: KeyCode) -> bool {
        self.get_key_state(key).pressed
    } // fn is_key_pressed

    /// Is key clicked checking function
    /// * `key` - key to check state of
    /// * Returns true if key's clicked
    pub fn is_key_clicked(&self, key: KeyCode) -> bool {
        let state = self.get_key_state(key);
        state.pressed && state.changed
    } // fn is_key_clicked

    /// Action state checking function
    pub fn is_action_pressed(&self, bindings: &Bindings, action: Action) -> bool {
        bindings.key(action).map_or(false, |key| self.is_key_pressed(key))
    } // fn is_action_pressed

    /// Control snapshot building function
    /// * `bindings` - action bindings
    /// * Returns controls for one simulation step
    pub fn controls(&self, bindings: &Bindings) -> Controls {
        Controls {
            forward: self.is_action_pressed(bindings, Action::Forward),
            back: self.is_action_pressed(bindings, Action::Back),
            strafe_left: self.is_action_pressed(bindings, Action::StrafeLeft),
            strafe_right: self.is_action_pressed(bindings, Action::StrafeRight),
            jump: self.is_action_pressed(bindings, Action::Jump),
            descend: self.is_action_pressed(bindings, Action::Descend),
            yaw_delta: self.mouse_motion.x,
            pitch_delta: self.mouse_motion.y,
        }
    } // fn controls
} // impl State

// Input getting function
pub struct Input {
    state: State,
} // struct Input

impl Input {
    /// New input construction function
    /// * Returns newly-created input
    pub fn new() -> Self {
        Self {
            state: State {
                keys: BTreeMap::new(),
                mouse_motion: Vec2::ZERO,
            },
        }
    } // fn new

    /// Key state change callback
    /// * `key` - keycode
    /// * `is_pressed` - changed key state
    pub fn on_key_state_change(&mut self, key: KeyCode, is_pressed: bool) {
        let state = self.state.keys.entry(key).or_insert(KeyState { pressed: false, changed: false });

        // Key repeat is not a change
        state.changed = state.pressed != is_pressed;
        state.pressed = is_pressed;
    } // fn on_key_state_change

    /// Raw mouse motion callback
    /// * `delta` - device motion delta
    pub fn on_mouse_motion(&mut self, delta: Vec2) {
        self.state.mouse_motion += delta;
    } // fn on_mouse_motion

    // Changed parameters clearing function
    pub fn clear_changed(&mut self) {
        for state in self.state.keys.values_mut() {
            state.changed = false;
        }
        self.state.mouse_motion = Vec2::ZERO;
    } // fn clear_changed

    /// State getting function
    /// * Returns input state reference
    pub fn get_state(&self) -> &State {
        &self.state
    } // fn get_state
} // impl Input


// file input.rs
