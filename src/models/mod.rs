pub mod category;
pub mod report;

pub use category::{BeneficialPolicy, Category};
pub use report::{AppUsage, CategoryUsage, UsageReport};
