//! Interactive interview using cliclack (Charm-style inline prompts)
//!
//! This module is only available when the `tui` feature is enabled.

mod prompts;

pub use prompts::Interview;
