//! CLI commands for wayfind

pub mod dispatch;
pub mod path;
pub mod show;
pub mod traverse;
