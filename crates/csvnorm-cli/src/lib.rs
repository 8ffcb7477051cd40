//! CLI library components for csvnorm.

pub mod commands;
pub mod logging;
pub mod summary;
