//! persona-radar - deterministic GitHub career persona engine
//!
//! The [`persona`] module holds the pure engine. The remaining modules are
//! the command-line shell around it: input loading, configuration, logging
//! and error reporting.

pub mod cli;
pub mod config;
pub mod error;
pub mod input;
pub mod logging;
pub mod persona;
pub mod version;

pub use config::RadarConfig;
pub use error::{Error, ErrorCode, Result};
pub use input::{parse_as_of, AnalysisInput};
pub use persona::{
    apply_customization, compute_profile, Customization, ProfileDocument, ProfileEngine,
};
