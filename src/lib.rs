//! navtree: render documentation navigation trees into sidebar markup
//!
//! Layers, innermost first:
//! - [`domain`]: navigation model and the pure renderer
//! - [`application`]: services loading, rendering and writing navigation data
//! - [`infrastructure`]: I/O boundary traits and the service container
//! - [`cli`]: argument parsing and command dispatch

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod infrastructure;
pub mod util;
