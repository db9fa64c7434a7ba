//! Record module for generating the resolved launch record

pub mod generator;
pub mod types;

pub use generator::CommandGenerator;
pub use types::{LaunchRecord, NodeRecord};
