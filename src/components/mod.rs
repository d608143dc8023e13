//! UI Components
//!
//! Each component encapsulates its own state, event handling, and rendering logic.
//! Components communicate through Actions rather than direct state mutation.

pub mod canvas;
pub mod code_highlight;
pub mod code_panel;
pub mod help_dialog;
pub mod home;
pub mod input_dialog;
pub mod layout;
pub mod quit_dialog;
pub mod splash;

pub use code_panel::CodePanel;
pub use help_dialog::HelpDialog;
pub use home::{draw_home_screen, HomeComponent, HomeRenderContext};
pub use input_dialog::InputDialog;
pub use layout::{calculate_main_layout, centered_popup};
pub use quit_dialog::QuitDialog;
pub use splash::SplashComponent;
