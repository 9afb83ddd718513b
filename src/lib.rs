//! EarthSentinel Library
//!
//! The binary is a thin terminal loop around these modules; integration
//! tests drive them directly.

pub mod api;
pub mod app;
pub mod classify;
pub mod cli;
pub mod data;
pub mod loading;
pub mod logging;
pub mod projection;
pub mod report_form;
pub mod store;
pub mod ui;
