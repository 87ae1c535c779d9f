//! Command implementations for swervectl

pub mod check_config;
pub mod home;
pub mod simulate;
pub mod target;
