//! Foundation module - Core utilities and types
//!
//! This module provides fundamental utilities used throughout the crate:
//! - Screen-space math types
//! - Logging utilities

pub mod math;
pub mod logging;
