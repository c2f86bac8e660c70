//! Core domain models for distkit
//!
//! This module defines the data structures that describe applications,
//! project layout, derived output locations, and run state.

pub mod app;
pub mod layout;
pub mod manifest;
pub mod plan;
pub mod run;
pub mod state;

pub use app::*;
pub use layout::*;
pub use manifest::*;
pub use plan::*;
pub use run::*;
pub use state::*;
