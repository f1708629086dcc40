//! Press-move-release state machine for the draggable modal panel.

use glam::Vec2;

/// One drag gesture. `begin` records the pointer-to-panel offset, `track`
/// yields the panel's new top-left while active, `end` returns to idle.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DragSession {
    active: bool,
    offset: Vec2,
}

impl DragSession {
    /// Enter the dragging state from a press at `pointer` while the panel's
    /// top-left corner sits at `panel_origin`.
    pub fn begin(&mut self, pointer: Vec2, panel_origin: Vec2) {
        self.active = true;
        self.offset = pointer - panel_origin;
    }

    /// New panel top-left for a pointer position, or `None` when idle.
    /// No bounds clamping: the panel may follow the pointer off-screen.
    pub fn track(&self, pointer: Vec2) -> Option<Vec2> {
        self.active.then(|| pointer - self.offset)
    }

    /// Release observed anywhere ends the gesture.
    pub fn end(&mut self) {
        self.active = false;
    }

    pub fn is_active(&self) -> bool {
        self.active
    }
}
