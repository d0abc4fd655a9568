//! ascii-view library crate.
//!
//! Renders images and videos as true-color text for ANSI terminals. The
//! pipeline is decode, resample, render, display; see [`driver`] for how the
//! stages are sequenced.

pub mod app;
pub mod ascii;
pub mod cli;
pub mod config;
pub mod driver;
pub mod error;
pub mod source;
pub mod terminal;
pub mod video;

pub use error::{Result, ViewError};
