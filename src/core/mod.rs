//! Toolkit-independent gallery logic
//!
//! Everything here is pure and synchronous; the UI layer that renders the
//! results is out of scope. It provides:
//!
//! - [`easing`]: Easing families, directions and curve evaluation
//! - [`resolver`]: Name/direction to curve resolution with a `Back` fallback
//! - [`animation`]: The toggling animation run and frame sampling
//! - [`suggest`]: Tokenized substring filter for the suggestion box
//! - [`path`]: Directory / file name / extension splitting
//! - [`taxonomy`]: Control categories, sort order and icons
//! - [`error`]: Error types for configuration and CLI failures

pub mod animation;
pub mod easing;
pub mod error;
pub mod path;
pub mod resolver;
pub mod suggest;
pub mod taxonomy;
