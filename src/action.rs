//! Action enum - All possible application actions
//!
//! Actions are discrete operations that the application can perform.
//! Components emit Actions in response to events, and the App processes
//! them to update state.

use crate::model::InputPurpose;
use std::fmt;

/// All possible actions in the application
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    // ─────────────────────────────────────────────────────────────────────────
    // App Lifecycle
    // ─────────────────────────────────────────────────────────────────────────
    /// Regular tick for animation stepping
    Tick,
    /// Terminal was resized
    Resize(u16, u16),
    /// Force quit without confirmation
    ForceQuit,
    /// Transition from splash to main app
    SplashComplete,

    // ─────────────────────────────────────────────────────────────────────────
    // Selection
    // ─────────────────────────────────────────────────────────────────────────
    /// Switch to the next data structure
    NextStructure,
    /// Switch to the previous data structure
    PrevStructure,
    /// Move algorithm selection down
    NextAlgorithm,
    /// Move algorithm selection up
    PrevAlgorithm,

    // ─────────────────────────────────────────────────────────────────────────
    // Dataset
    // ─────────────────────────────────────────────────────────────────────────
    /// Open the value-input dialog for insert / delete / search
    OpenValueInput(InputPurpose),
    /// Add a character to the input buffer
    InputChar(char),
    /// Remove the last character from the input buffer
    InputBackspace,
    /// Submit the input buffer
    SubmitInput,
    /// Replace the dataset with random values
    GenerateRandom,
    /// Empty the dataset
    ClearAll,

    // ─────────────────────────────────────────────────────────────────────────
    // Animation
    // ─────────────────────────────────────────────────────────────────────────
    /// Start the selected algorithm
    StartAlgorithm,
    /// Increase animation speed
    SpeedUp,
    /// Decrease animation speed
    SpeedDown,

    // ─────────────────────────────────────────────────────────────────────────
    // View
    // ─────────────────────────────────────────────────────────────────────────
    /// Show or hide the code panel
    ToggleCodePanel,
    /// Scroll the code panel up
    ScrollUp,
    /// Scroll the code panel down
    ScrollDown,

    // ─────────────────────────────────────────────────────────────────────────
    // Modals
    // ─────────────────────────────────────────────────────────────────────────
    /// Open quit confirmation dialog
    OpenQuitDialog,
    /// Open the keyboard shortcut overlay
    OpenHelp,
    /// Close the current modal
    CloseModal,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Tick => write!(f, "Tick"),
            Action::Resize(w, h) => write!(f, "Resize({}, {})", w, h),
            Action::ForceQuit => write!(f, "ForceQuit"),
            Action::SplashComplete => write!(f, "SplashComplete"),
            Action::NextStructure => write!(f, "NextStructure"),
            Action::PrevStructure => write!(f, "PrevStructure"),
            Action::NextAlgorithm => write!(f, "NextAlgorithm"),
            Action::PrevAlgorithm => write!(f, "PrevAlgorithm"),
            Action::OpenValueInput(purpose) => write!(f, "OpenValueInput({:?})", purpose),
            Action::InputChar(c) => write!(f, "InputChar('{}')", c),
            Action::InputBackspace => write!(f, "InputBackspace"),
            Action::SubmitInput => write!(f, "SubmitInput"),
            Action::GenerateRandom => write!(f, "GenerateRandom"),
            Action::ClearAll => write!(f, "ClearAll"),
            Action::StartAlgorithm => write!(f, "StartAlgorithm"),
            Action::SpeedUp => write!(f, "SpeedUp"),
            Action::SpeedDown => write!(f, "SpeedDown"),
            Action::ToggleCodePanel => write!(f, "ToggleCodePanel"),
            Action::ScrollUp => write!(f, "ScrollUp"),
            Action::ScrollDown => write!(f, "ScrollDown"),
            Action::OpenQuitDialog => write!(f, "OpenQuitDialog"),
            Action::OpenHelp => write!(f, "OpenHelp"),
            Action::CloseModal => write!(f, "CloseModal"),
        }
    }
}
