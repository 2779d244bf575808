//! Focus-managing widgets built on the `zincdom` composed tree.

pub mod config;
pub mod dropdown;
pub mod error;
pub mod focus_trap;
pub mod menu;

pub use config::MenuConfig;
pub use dropdown::Dropdown;
pub use error::Error;
pub use focus_trap::FocusTrap;
pub use menu::{Menu, MenuEvent};
