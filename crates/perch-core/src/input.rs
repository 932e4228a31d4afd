use crate::Vec2;

/// Pointer sample in device pixels. The panel applies its own pixel-ratio
/// division and offset before hit-testing.
#[derive(Clone, Copy, Debug)]
pub struct PointerEvent {
    pub position: Vec2,
}

impl PointerEvent {
    pub fn at(x: f32, y: f32) -> Self {
        Self {
            position: Vec2::new(x, y),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    Backspace,
    /// Any key code the panel has no handler for.
    Other(u32),
}

#[derive(Clone, Copy, Debug)]
pub struct KeyEvent {
    pub key: Key,
}

/// Printable character delivery, separate from key codes the way host
/// windowing systems report them.
#[derive(Clone, Debug)]
pub struct TextInputEvent {
    pub text: String,
}

impl TextInputEvent {
    pub fn from_str(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}
