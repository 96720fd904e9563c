// src/system/mod.rs

pub mod tool;
