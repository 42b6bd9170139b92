use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::Category;

/// Point-in-time view of accumulated usage, in whole minutes.
///
/// This is the externally observable `getScreenTime` shape; field names and
/// casing are fixed by existing callers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsageReport {
    pub apps: BTreeMap<String, AppUsage>,
    pub categories: Vec<CategoryUsage>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppUsage {
    pub minutes: u64,
    pub category: Category,
    #[serde(rename = "isBeneficial")]
    pub is_beneficial: bool,
    #[serde(rename = "displayLabel")]
    pub display_label: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryUsage {
    pub category: Category,
    pub minutes: u64,
    #[serde(rename = "isBeneficial")]
    pub is_beneficial: bool,
}

impl UsageReport {
    pub fn is_empty(&self) -> bool {
        self.apps.is_empty() && self.categories.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_usage_serializes_with_contract_casing() {
        let usage = AppUsage {
            minutes: 2,
            category: Category::Development,
            is_beneficial: true,
            display_label: Category::Development.display_label().to_string(),
        };

        let json = serde_json::to_value(&usage).unwrap();
        assert_eq!(json["minutes"], 2);
        assert_eq!(json["category"], "Development");
        assert_eq!(json["isBeneficial"], true);
        assert_eq!(json["displayLabel"], "Wise Owl");
    }

    #[test]
    fn test_empty_report_round_trips() {
        let report = UsageReport::default();
        assert!(report.is_empty());

        let json = serde_json::to_string(&report).unwrap();
        let back: UsageReport = serde_json::from_str(&json).unwrap();
        assert_eq!(back, report);
    }
}
