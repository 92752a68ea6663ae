pub mod models;
pub mod registry;
pub mod service;

pub use models::{Countdown, DeadlineRow, RgbaColor, UrgencyTier, FINISHED_LABEL};
pub use registry::{TickUpdate, VisibleRegistry};
pub use service::{compute, rows};
