//! Gallery - toolkit-independent core of a UI control gallery
//!
//! The gallery's pages are thin UI glue; the logic worth testing lives here.
//!
//! # Architecture
//!
//! - [`core`] - Easing curves, animation runs, suggestion filtering, path
//!   splitting and the control taxonomy
//! - [`validators`] - Range checks for user-supplied settings
//! - [`config`] - Configuration persistence
//! - [`utils`] - Utility functions (XDG directories, etc.)

// Allow pedantic clippy warnings that are not worth fixing for this codebase
#![allow(clippy::must_use_candidate)]
#![allow(clippy::return_self_not_must_use)]
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::missing_errors_doc)]

pub mod config;
pub mod core;
pub mod utils;
pub mod validators;

// Re-export commonly used types
pub use core::animation::{AnimationRun, Frame};
pub use core::easing::{Direction, EasingCurve, EasingFamily};
pub use core::error::{Error, Result};
pub use core::resolver::{EasingResolver, resolve};
pub use core::suggest::{FilterResult, NO_RESULTS, filter};
