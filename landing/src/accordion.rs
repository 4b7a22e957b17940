//! Single-open, collapsible accordion state.

use tracing::debug;

/// One row of the accordion: a stable id plus the trigger and body text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AccordionItem {
    pub id: String,
    pub trigger: String,
    pub body: String,
}

impl AccordionItem {
    pub fn new(
        id: impl Into<String>,
        trigger: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            trigger: trigger.into(),
            body: body.into(),
        }
    }
}

/// Tracks which row (if any) is expanded. At most one at a time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AccordionState {
    open: Option<usize>,
    len: usize,
}

impl AccordionState {
    pub fn new(len: usize) -> Self {
        Self { open: None, len }
    }

    pub fn open_index(&self) -> Option<usize> {
        self.open
    }

    pub fn is_open(&self, index: usize) -> bool {
        self.open == Some(index)
    }

    /// Expand `index`, collapsing whatever was open. Toggling the open row
    /// collapses it. Out-of-range indices are ignored.
    pub fn toggle(&mut self, index: usize) {
        if index >= self.len {
            return;
        }
        self.open = if self.open == Some(index) {
            None
        } else {
            Some(index)
        };
        debug!(index, open = ?self.open, "accordion toggled");
    }
}

/// Keyboard navigation between triggers. Returns the trigger index that
/// should receive focus for `key`, or `None` if the key is not handled.
pub fn focus_target(key: &str, current: usize, len: usize) -> Option<usize> {
    if len == 0 {
        return None;
    }
    match key {
        "ArrowDown" => Some((current + 1) % len),
        "ArrowUp" => Some((current + len - 1) % len),
        "Home" => Some(0),
        "End" => Some(len - 1),
        _ => None,
    }
}
