//! Scenario-based tests for the distkit build pipeline


mod clean_rebuild;
mod config_staging;
mod isolation;
mod path_resolution;
