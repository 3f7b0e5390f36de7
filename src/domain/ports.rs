use crate::core::policy::ClampPolicy;
use crate::domain::model::Bounds;
use crate::utils::error::Result;

/// Source of the settings a clamp run needs, whichever layer they came from.
pub trait ConfigProvider {
    fn bounds(&self) -> Result<Bounds>;
    fn policy(&self) -> ClampPolicy;
    fn column(&self) -> &str;
}
