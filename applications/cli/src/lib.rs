//! Podcastr terminal player
//!
//! Configuration, the interactive session and the terminal views used by the
//! `podcastr` binary.

pub mod config;
pub mod session;
pub mod views;
