//! Domain layer: navigation model and rendering
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).

pub mod entities;
pub mod error;
pub mod format;
pub mod outline;
pub mod render;

pub use entities::*;
pub use error::DomainError;
pub use format::DataFormat;
pub use outline::outline;
pub use render::{ClientHooks, NavTreeRenderer, PageShell};
