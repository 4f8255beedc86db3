pub mod payload;
pub mod predict;

pub use payload::{payload, PayloadArgs};
pub use predict::{predict, PredictArgs};
