#![forbid(unsafe_code)]

pub mod config;
pub mod constants;
pub mod editor;
pub mod gui;
