use serde::Serialize;

#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    #[serde(rename = "Family Ride")]
    FamilyRide,
    #[serde(rename = "Thrill Adventure")]
    ThrillAdventure,
    #[serde(rename = "Water Attraction")]
    WaterAttraction,
    #[serde(rename = "Kiddie Fun")]
    KiddieFun,
}

impl Category {
    pub const fn label(self) -> &'static str {
        match self {
            Category::FamilyRide => "Family Ride",
            Category::ThrillAdventure => "Thrill Adventure",
            Category::WaterAttraction => "Water Attraction",
            Category::KiddieFun => "Kiddie Fun",
        }
    }

    /// Exact, case-sensitive match on the display label.
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "Family Ride" => Some(Category::FamilyRide),
            "Thrill Adventure" => Some(Category::ThrillAdventure),
            "Water Attraction" => Some(Category::WaterAttraction),
            "Kiddie Fun" => Some(Category::KiddieFun),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Product {
    pub name_en: &'static str,
    pub name_zh: &'static str,
    pub category: Category,
}

impl Product {
    pub const fn new(name_en: &'static str, name_zh: &'static str, category: Category) -> Self {
        Self {
            name_en,
            name_zh,
            category,
        }
    }
}
