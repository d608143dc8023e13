//! Modal stack for managing overlays
//!
//! An enum-based stack instead of per-dialog boolean flags. Modals are
//! rendered bottom to top and only the top modal receives input.

/// What the value-input dialog will do with the submitted value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputPurpose {
    Insert,
    Delete,
    Search,
}

impl InputPurpose {
    pub fn title(&self) -> &'static str {
        match self {
            InputPurpose::Insert => " Insert Value ",
            InputPurpose::Delete => " Delete Value ",
            InputPurpose::Search => " Search Value ",
        }
    }

    pub fn prompt(&self) -> &'static str {
        match self {
            InputPurpose::Insert => "Value to insert:",
            InputPurpose::Delete => "Value to delete:",
            InputPurpose::Search => "Value to search for:",
        }
    }
}

/// A modal overlay on top of the main UI
#[derive(Debug, Clone, PartialEq)]
pub enum Modal {
    /// Quit confirmation dialog
    QuitConfirm,
    /// Keyboard shortcut overlay
    Help { scroll_offset: usize },
    /// Integer prompt used by insert / delete / search
    ValueInput {
        purpose: InputPurpose,
        buffer: String,
    },
}

/// A stack of modal overlays
#[derive(Debug, Default)]
pub struct ModalStack {
    stack: Vec<Modal>,
}

impl ModalStack {
    pub fn new() -> Self {
        Self { stack: Vec::new() }
    }

    pub fn push(&mut self, modal: Modal) {
        self.stack.push(modal);
    }

    pub fn pop(&mut self) -> Option<Modal> {
        self.stack.pop()
    }

    pub fn top(&self) -> Option<&Modal> {
        self.stack.last()
    }

    pub fn top_mut(&mut self) -> Option<&mut Modal> {
        self.stack.last_mut()
    }

    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_modal_stack_push_pop() {
        let mut stack = ModalStack::new();
        assert!(stack.top().is_none());

        stack.push(Modal::QuitConfirm);
        stack.push(Modal::Help { scroll_offset: 0 });

        assert_eq!(stack.pop(), Some(Modal::Help { scroll_offset: 0 }));
        assert_eq!(stack.pop(), Some(Modal::QuitConfirm));
        assert!(stack.is_empty());
    }

    #[test]
    fn test_modal_stack_top_mut_edits_buffer() {
        let mut stack = ModalStack::new();
        stack.push(Modal::ValueInput {
            purpose: InputPurpose::Insert,
            buffer: String::new(),
        });

        if let Some(Modal::ValueInput { buffer, .. }) = stack.top_mut() {
            buffer.push('4');
            buffer.push('2');
        }

        assert_eq!(
            stack.top(),
            Some(&Modal::ValueInput {
                purpose: InputPurpose::Insert,
                buffer: "42".to_string(),
            })
        );
    }
}
