use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Closed set of app categories. Serialized by variant name, which is the
/// `category` string of the external report contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Productivity,
    Development,
    Browser,
    Social,
    Entertainment,
    Game,
    Education,
    SocialMedia,
    Other,
}

impl Category {
    /// Every category, in the stable order reports are emitted in.
    pub const ALL: [Category; 9] = [
        Category::Productivity,
        Category::Development,
        Category::Browser,
        Category::Social,
        Category::Entertainment,
        Category::Game,
        Category::Education,
        Category::SocialMedia,
        Category::Other,
    ];

    /// Fallback beneficial-ness when no `BeneficialPolicy` override is set.
    /// Browser, Social and Other currently count as beneficial; override via
    /// policy where that reading is too generous.
    pub fn default_beneficial(self) -> bool {
        match self {
            Category::Productivity | Category::Development | Category::Education => true,
            Category::Entertainment | Category::Game | Category::SocialMedia => false,
            Category::Browser | Category::Social | Category::Other => true,
        }
    }

    /// Presentation label: the companion creature shown for time spent in
    /// this category. Purely cosmetic.
    pub fn display_label(self) -> &'static str {
        match self {
            Category::Productivity => "Busy Bee",
            Category::Development => "Wise Owl",
            Category::Browser => "Curious Fox",
            Category::Social => "Friendly Puppy",
            Category::Entertainment => "Lazy Sloth",
            Category::Game => "Playful Imp",
            Category::Education => "Scholar Dolphin",
            Category::SocialMedia => "Beguiling Siren",
            Category::Other => "Mystery Chameleon",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Category::Productivity => "Productivity",
            Category::Development => "Development",
            Category::Browser => "Browser",
            Category::Social => "Social",
            Category::Entertainment => "Entertainment",
            Category::Game => "Game",
            Category::Education => "Education",
            Category::SocialMedia => "SocialMedia",
            Category::Other => "Other",
        }
    }
}

/// Per-category overrides on top of `Category::default_beneficial`.
///
/// Which categories count as beneficial is a policy question, not an
/// algorithmic one, so it travels as configuration next to the
/// classification table rather than baked into the enum.
#[derive(Debug, Clone, Default)]
pub struct BeneficialPolicy {
    overrides: HashMap<Category, bool>,
}

impl BeneficialPolicy {
    pub fn new(overrides: HashMap<Category, bool>) -> Self {
        Self { overrides }
    }

    pub fn with_override(mut self, category: Category, beneficial: bool) -> Self {
        self.overrides.insert(category, beneficial);
        self
    }

    pub fn is_beneficial(&self, category: Category) -> bool {
        self.overrides
            .get(&category)
            .copied()
            .unwrap_or_else(|| category.default_beneficial())
    }
}
