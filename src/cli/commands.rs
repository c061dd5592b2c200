pub mod features;
pub mod predict;
pub mod serve;
pub mod simulate;

pub use features::extract_features;
pub use predict::predict;
pub use serve::serve;
pub use simulate::simulate;
