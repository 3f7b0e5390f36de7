pub mod batch;
pub mod clamp;
pub mod policy;

pub use crate::domain::model::{BatchSummary, Bounds, ClampRecord, Position};
pub use crate::domain::ports::ConfigProvider;
pub use crate::utils::error::Result;
