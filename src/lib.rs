// src/lib.rs

pub mod config;
pub mod constants;
pub mod core;
pub mod models;
pub mod system;

pub use crate::config::HelpStyle;
pub use crate::core::argument::Argument;
pub use crate::core::codec::{ArgumentType, CodecError};
pub use crate::core::command::{Command, CommandExt, GroupCommand};
pub use crate::core::error::ParseError;
pub use crate::core::help::{Help, Version};
pub use crate::core::option::NamedOption;
pub use crate::core::property::{CommandProperty, Declaration, PropertyGroup, declare};
pub use crate::core::subcommand::SubCommand;
pub use crate::models::{Control, PropertyInfo, PropertyKind, Signal};
pub use crate::system::tool::{ProcessTerminator, Terminator, Tool};
