//! Submission core for the glossary web application.
//!
//! A UI shell hands over the raw form values, this crate validates and trims
//! them, posts them to the glossary backend and says where to navigate or
//! what to tell the user.

pub mod config;
pub mod error;
pub mod model;
pub mod protocol;
pub mod services;

pub use error::SubmitError;
pub use services::submit::{submit, SubmitConfig, Submitted};
