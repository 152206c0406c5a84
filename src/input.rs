use crate::constants::POINTER_OFFSCREEN;
use glam::Vec2;

/// Last known pointer position in client (CSS pixel) coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerState {
    pub x: f32,
    pub y: f32,
}

impl Default for PointerState {
    fn default() -> Self {
        Self::offscreen()
    }
}

impl PointerState {
    pub fn offscreen() -> Self {
        Self {
            x: POINTER_OFFSCREEN,
            y: POINTER_OFFSCREEN,
        }
    }

    #[inline]
    pub fn set(&mut self, x: f32, y: f32) {
        self.x = x;
        self.y = y;
    }

    #[inline]
    pub fn leave(&mut self) {
        *self = Self::offscreen();
    }

    #[inline]
    pub fn pos(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }
}

// Keys that activate focusable, button-like elements
#[inline]
pub fn is_activation_key(key: &str) -> bool {
    matches!(key, "Enter" | " ")
}
