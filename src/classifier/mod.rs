use std::collections::HashMap;

use crate::models::Category;

/// Maps application identifiers (bundle ids, package names) to categories.
///
/// The table is captured at construction and never changes for the life of a
/// tracking session. Classification is total: identifiers absent from the
/// table, empty identifiers, and missing identifiers all resolve to
/// `Category::Other`.
pub struct Classifier {
    table: HashMap<String, Category>,
}

impl Classifier {
    pub fn new(table: HashMap<String, Category>) -> Self {
        Self { table }
    }

    /// Built-in table covering common desktop applications. Extending it is
    /// a data change only; the attribution algorithm never looks inside.
    pub fn with_default_rules() -> Self {
        let entries: &[(&str, Category)] = &[
            // Development
            ("com.microsoft.VSCode", Category::Development),
            ("com.apple.dt.Xcode", Category::Development),
            ("com.sublimetext.4", Category::Development),
            ("com.jetbrains.intellij", Category::Development),
            ("com.cursor.Cursor", Category::Development),
            ("com.DanPristupov.Fork", Category::Development),
            // Browsers
            ("com.google.Chrome", Category::Browser),
            ("com.microsoft.Edge", Category::Browser),
            ("com.apple.Safari", Category::Browser),
            ("org.mozilla.firefox", Category::Browser),
            // Productivity
            ("com.apple.finder", Category::Productivity),
            ("com.apple.mail", Category::Productivity),
            ("com.microsoft.Excel", Category::Productivity),
            ("com.microsoft.Word", Category::Productivity),
            ("com.microsoft.Powerpoint", Category::Productivity),
            ("com.apple.iWork.Pages", Category::Productivity),
            ("com.apple.iWork.Numbers", Category::Productivity),
            ("com.apple.iWork.Keynote", Category::Productivity),
            // Social
            ("com.tencent.xinWeChat", Category::Social),
            ("com.apple.iChat", Category::Social),
            ("com.apple.FaceTime", Category::Social),
            ("com.skype.skype", Category::Social),
            ("com.slack.Slack", Category::Social),
            ("com.discord.Discord", Category::Social),
            ("com.apple.Messages", Category::Social),
            ("com.tencent.QQ", Category::Social),
            ("com.tencent.WeChat", Category::Social),
            ("com.tencent.tim", Category::Social),
            // Games
            ("com.steam.Steam", Category::Game),
            ("com.epicgames.EpicGamesLauncher", Category::Game),
            ("com.blizzard.BattleNet", Category::Game),
            // Entertainment
            ("com.apple.TV", Category::Entertainment),
            ("com.spotify.client", Category::Entertainment),
            ("com.netflix.Netflix", Category::Entertainment),
            ("com.bilibili.player", Category::Entertainment),
            ("com.tencent.QQMusic", Category::Entertainment),
            ("com.netease.163music", Category::Entertainment),
            // Social media
            ("com.instagram.Instagram", Category::SocialMedia),
            ("com.zhiliaoapp.musically", Category::SocialMedia),
            ("com.xingin.discover", Category::SocialMedia),
            // Education
            ("com.apple.iBooks", Category::Education),
            ("com.readdle.PDFExpert-Mac", Category::Education),
            ("com.adobe.Reader", Category::Education),
            ("org.zotero.zotero", Category::Education),
        ];

        Self::new(
            entries
                .iter()
                .map(|(id, category)| ((*id).to_string(), *category))
                .collect(),
        )
    }

    /// Pure, total lookup. Never fails.
    pub fn classify(&self, identifier: Option<&str>) -> Category {
        match identifier {
            Some(id) if !id.is_empty() => self.table.get(id).copied().unwrap_or(Category::Other),
            _ => Category::Other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_identifier_classifies() {
        let classifier = Classifier::with_default_rules();

        assert_eq!(
            classifier.classify(Some("com.microsoft.VSCode")),
            Category::Development
        );
        assert_eq!(
            classifier.classify(Some("com.google.Chrome")),
            Category::Browser
        );
        assert_eq!(
            classifier.classify(Some("com.spotify.client")),
            Category::Entertainment
        );
    }

    #[test]
    fn test_unknown_identifier_is_other() {
        let classifier = Classifier::with_default_rules();
        assert_eq!(
            classifier.classify(Some("com.example.nowhere")),
            Category::Other
        );
    }

    #[test]
    fn test_missing_and_empty_identifiers_are_other() {
        let classifier = Classifier::with_default_rules();
        assert_eq!(classifier.classify(None), Category::Other);
        assert_eq!(classifier.classify(Some("")), Category::Other);
    }

    #[test]
    fn test_classification_is_idempotent() {
        let classifier = Classifier::with_default_rules();
        for _ in 0..3 {
            assert_eq!(
                classifier.classify(Some("com.apple.iBooks")),
                Category::Education
            );
            assert_eq!(classifier.classify(Some("no.such.app")), Category::Other);
        }
    }

    #[test]
    fn test_custom_table_entry() {
        let mut table = HashMap::new();
        table.insert("com.example.ide".to_string(), Category::Development);
        let classifier = Classifier::new(table);

        assert_eq!(
            classifier.classify(Some("com.example.ide")),
            Category::Development
        );
        assert_eq!(
            classifier.classify(Some("com.microsoft.VSCode")),
            Category::Other
        );
    }
}
