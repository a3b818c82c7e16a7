//! qgjob subcommands

pub mod health;
pub mod status;
pub mod submit;
