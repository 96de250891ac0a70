//! Core business logic layer
//!
//! This module contains the plan data model, attribute diffing, the
//! renderer trait, and the operations that tie them together.

pub mod data;
pub mod diff;
pub mod operations;
pub mod traits;
