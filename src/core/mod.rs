// src/core/mod.rs

pub mod argument;
pub mod codec;
pub mod command;
pub mod error;
pub mod help;
pub mod option;
pub mod property;
pub mod render;
pub mod subcommand;
pub mod suggest;
