//! Core Pulse library (feed model, loader, navigation, config).

pub mod config;
pub mod feed;
pub mod interrupt;
pub mod logging;
pub mod navigation;
pub mod post;
pub mod preferences;
pub mod profile;
