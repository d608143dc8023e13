//! Model layer - centralized state management
//!
//! - `Dataset` - the flat list of integers under animation
//! - `Structure` / `Algorithm` - the catalogs with their display metadata
//! - `animation` / `scripts` - the Step Animator (playback and builders)
//! - `ModalStack` - modal overlay management

pub mod algorithm;
pub mod animation;
pub mod dataset;
pub mod graph;
pub mod modal;
pub mod scripts;
pub mod structure;
pub mod tree;

// Re-export commonly used types
pub use algorithm::Algorithm;
pub use animation::{AnimationRun, Frame, Highlight, Outcome, Pause, Script};
pub use dataset::Dataset;
pub use graph::DemoGraph;
pub use modal::{InputPurpose, Modal, ModalStack};
pub use structure::Structure;
pub use tree::Bst;
