pub mod layout;
pub mod scale;
pub mod svg;

pub use layout::{Scene, compose};
pub use scale::TimeScale;
