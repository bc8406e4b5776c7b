//! Infrastructure layer (adapters/implementations).
//!
//! This module contains IO-heavy integrations (HTTP, filesystem, child processes, terminal).

pub mod app_config;
pub mod convert;
pub mod display;
pub mod source;
