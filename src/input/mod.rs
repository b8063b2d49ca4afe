use std::collections::HashMap;
use std::hash::Hash;

pub use winit::event::MouseButton;
pub use winit::keyboard::KeyCode;

use crate::geometry::Direction;

/// A single input occurrence, kept in arrival order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// A key went down. OS auto-repeat is filtered out before this is queued.
    KeyDown(KeyCode),
    /// A key the platform could not map to a `KeyCode` went down.
    UnidentifiedKeyDown,
    PointerDown(MouseButton),
    /// The window was asked to close.
    Quit,
}

/// Ordered queue of the input events seen since the last frame.
///
/// Every press is queued, even for a key that never reported its release
/// (for example because focus moved to another window in between).
#[derive(Debug, Default)]
pub struct InputState {
    events: Vec<InputEvent>,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn press_key(&mut self, key: KeyCode) {
        self.events.push(InputEvent::KeyDown(key));
    }

    pub fn press_unidentified_key(&mut self) {
        self.events.push(InputEvent::UnidentifiedKeyDown);
    }

    pub fn press_mouse(&mut self, button: MouseButton) {
        self.events.push(InputEvent::PointerDown(button));
    }

    pub fn push_quit(&mut self) {
        self.events.push(InputEvent::Quit);
    }

    /// Take every queued event, oldest first.
    pub fn drain_events(&mut self) -> Vec<InputEvent> {
        std::mem::take(&mut self.events)
    }
}

/// Maps logical actions (defined by the game) to one or more keys.
#[derive(Debug, Clone)]
pub struct ActionMap<A: Hash + Eq + Copy> {
    bindings: HashMap<KeyCode, A>,
}

impl<A: Hash + Eq + Copy> ActionMap<A> {
    pub fn new() -> Self {
        Self { bindings: HashMap::new() }
    }

    /// Bind `key` to `action`, replacing any earlier binding for that key.
    pub fn bind(&mut self, action: A, key: KeyCode) {
        self.bindings.insert(key, action);
    }

    /// The action a key-down event triggers, if any.
    pub fn action_for(&self, event: &InputEvent) -> Option<A> {
        match event {
            InputEvent::KeyDown(key) => self.bindings.get(key).copied(),
            _ => None,
        }
    }
}

impl ActionMap<Direction> {
    /// The arrow keys bound to their directions.
    pub fn arrows() -> Self {
        let mut map = Self::new();
        map.bind(Direction::Up, KeyCode::ArrowUp);
        map.bind(Direction::Down, KeyCode::ArrowDown);
        map.bind(Direction::Left, KeyCode::ArrowLeft);
        map.bind(Direction::Right, KeyCode::ArrowRight);
        map
    }
}

impl<A: Hash + Eq + Copy> Default for ActionMap<A> {
    fn default() -> Self { Self::new() }
}
