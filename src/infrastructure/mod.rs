//! Infrastructure layer - Clock, randomness and persisted configuration

pub mod clock;
pub mod config;
pub mod random;
pub mod store;

pub use clock::{Clock, ClockMode, FixedClock, SystemClock};
pub use config::Config;
pub use random::{SeededRandom, ThreadRandom};
pub use store::ConfigStore;
