#![doc = include_str!("../README.md")]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

//! # thermoconv-api
//!
//! HTTP API server for Thermoconv. Browser front ends post the raw form
//! fields here and display the returned result or error message.

pub mod error;
pub mod routes;
pub mod server;

pub use error::{Error, ErrorBody, Result};
pub use routes::HealthResponse;
pub use server::Server;
