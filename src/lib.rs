pub mod commands;
pub mod installer;
pub mod manager;
pub mod package;
pub mod runtime;
