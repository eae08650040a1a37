pub mod client;
pub mod common;
pub mod error;
pub mod messages;

pub use client::{CommandOutcome, MotorControlClient};
pub use common::Axis;
pub use error::CommandError;
pub use messages::{MoveAxisRelMsg, SurfaceGrinderCutParams};
