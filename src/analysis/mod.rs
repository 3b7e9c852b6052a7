pub mod budget;
pub mod filter;
pub mod health;
pub mod metrics;
pub mod progress;
