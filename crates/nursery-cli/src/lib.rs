//! Paradise Nursery text storefront
//!
//! The presentation layer over [`nursery_core::Storefront`]: command
//! parsing, screen rendering, the interactive shell and scripted runs.

#![warn(unreachable_pub)]

pub mod app;
pub mod command;
pub mod render;
pub mod shell;

pub use app::{build_storefront, catalog_screen, run_script, AppOptions, ScriptError, ScriptReport};
pub use command::{parse_command, CommandError, ShellCommand, HELP};
pub use render::{format_money, Screen};
pub use shell::{Shell, Step};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
