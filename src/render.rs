//! Renderer contract: an explicit, typed version of the prose "renderer is
//! an external collaborator" boundary, so a test double can stand in for a
//! real renderer without pulling one in. This crate ships no implementation
//! of this trait — drawing, presenting and input polling are out of scope.

use crate::catalog::{Direction, SpriteHandle};

/// Input the host loop polls for and forwards into whatever drives this
/// crate's generation calls.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    Quit,
    Move(Direction),
    ToggleDebug,
    Screenshot,
    Resize(u32, u32),
}

/// Minimal surface a renderer must provide: draw a sprite at a position,
/// present the accumulated frame, and report input events since the last
/// poll. Implementations own everything about pixels, windows and devices.
pub trait Renderer {
    fn draw_sprite(&mut self, sprite: SpriteHandle, x: f32, y: f32);
    fn present_frame(&mut self);
    fn read_input(&mut self) -> Vec<InputEvent>;
}
