//! Critterwatch tracks how long the user spends in each foreground
//! application and attributes that time to semantic categories, so a
//! companion UI can turn usage into creature-themed feedback.
//!
//! The core is [`tracker::UsageAccumulator`]: a tick-driven engine that
//! assigns each elapsed interval to exactly one application and one
//! category. Everything around it is a pure classification table, platform
//! foreground detection, and a small stdio query host.

pub mod classifier;
pub mod error;
pub mod host;
pub mod models;
pub mod platform;
pub mod tracker;

pub use classifier::Classifier;
pub use error::TrackerError;
pub use models::{BeneficialPolicy, Category, UsageReport};
pub use tracker::{TrackerConfig, TrackerService, UsageAccumulator, IDLE_IDENTIFIER};
