pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub mod app;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::ResolvedConfig;
pub use core::{
    batch::BatchClamper,
    clamp::{clamp, try_clamp},
    policy::{ClampPolicy, Clamper, InvertedBounds, NonFinite},
};
pub use domain::model::{BatchSummary, Bounds, ClampRecord, Position};
pub use utils::error::{ClampError, Result};
