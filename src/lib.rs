//! Project metadata inference, README badge rendering and README linting.
//!
//! - [`analyzer`] walks a project tree and fills a [`models::ProjectMetadata`]
//! - [`badges`] turns metadata plus user-supplied values into markdown badges
//! - [`validator`] scores an existing README

pub mod analyzer;
pub mod badges;
pub mod commands;
pub mod completions;
pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod utils;
pub mod validator;
