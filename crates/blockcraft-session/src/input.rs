use std::collections::HashSet;

/// Keys the session responds to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    W,
    A,
    S,
    D,
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    PageUp,
    PageDown,
    /// Place a voxel at the cursor.
    Q,
    /// Remove the voxel at the cursor.
    E,
    /// Next block type.
    Period,
    /// Previous block type.
    Comma,
    Space,
}

impl Key {
    /// Map a browser `KeyboardEvent.key` value. Letters match either case.
    pub fn from_name(name: &str) -> Option<Self> {
        let key = match name {
            "w" | "W" => Key::W,
            "a" | "A" => Key::A,
            "s" | "S" => Key::S,
            "d" | "D" => Key::D,
            "ArrowUp" => Key::ArrowUp,
            "ArrowDown" => Key::ArrowDown,
            "ArrowLeft" => Key::ArrowLeft,
            "ArrowRight" => Key::ArrowRight,
            "PageUp" => Key::PageUp,
            "PageDown" => Key::PageDown,
            "q" | "Q" => Key::Q,
            "e" | "E" => Key::E,
            "." => Key::Period,
            "," => Key::Comma,
            " " | "Spacebar" => Key::Space,
            _ => return None,
        };
        Some(key)
    }
}

/// Which avatar movement keys are held.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MovementKeys {
    pub forward: bool,
    pub backward: bool,
    pub left: bool,
    pub right: bool,
}

impl MovementKeys {
    pub fn any(&self) -> bool {
        self.forward || self.backward || self.left || self.right
    }

    /// Heading offset from the view direction, in radians counter-clockwise
    /// about +Y. Forward beats backward and left beats right when both are
    /// held. None when no movement key is held.
    pub fn direction_offset(&self) -> Option<f32> {
        use std::f32::consts::{FRAC_PI_2, FRAC_PI_4, PI};

        let offset = if self.forward {
            if self.left {
                FRAC_PI_4
            } else if self.right {
                -FRAC_PI_4
            } else {
                0.0
            }
        } else if self.backward {
            if self.left {
                FRAC_PI_4 + FRAC_PI_2
            } else if self.right {
                -FRAC_PI_4 - FRAC_PI_2
            } else {
                PI
            }
        } else if self.left {
            FRAC_PI_2
        } else if self.right {
            -FRAC_PI_2
        } else {
            return None;
        };
        Some(offset)
    }
}

/// Held-key state, sampled once per frame.
#[derive(Debug, Default)]
pub struct InputState {
    held: HashSet<Key>,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark a key held. Returns false for auto-repeat of an already held key.
    pub fn press(&mut self, key: Key) -> bool {
        self.held.insert(key)
    }

    pub fn release(&mut self, key: Key) {
        self.held.remove(&key);
    }

    pub fn is_held(&self, key: Key) -> bool {
        self.held.contains(&key)
    }

    /// Release everything (focus loss).
    pub fn clear(&mut self) {
        self.held.clear();
    }

    pub fn movement_keys(&self) -> MovementKeys {
        MovementKeys {
            forward: self.is_held(Key::W),
            backward: self.is_held(Key::S),
            left: self.is_held(Key::A),
            right: self.is_held(Key::D),
        }
    }
}
