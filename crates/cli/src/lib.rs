//! Command-line front end for U-Loading.
//!
//! This crate provides:
//! - JSON loading requests in the shape the web client sends
//! - Summary and JSON reports for optimization runs and quick estimates

mod report;
mod request;

pub use report::{render_estimate, render_summary, save_json, to_json, OptimizeReport};
pub use request::{ContainerSpec, LoadRequest, PalletSpec, RequestError};
