//! Core Night Vigilance library (config, auth client, session, roster).

pub mod auth;
pub mod config;
pub mod logging;
pub mod roster;
pub mod session;
pub mod validate;
