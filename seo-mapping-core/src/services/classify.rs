use crate::model::product::Category;

pub const DEFAULT_KEYWORD: &str = "amusement-ride-manufacturer";

/// Name rules, most specific first. A name matching several rules takes
/// the earliest one ("Carousel Train" is a carousel).
const NAME_RULES: &[(&[&str], &str)] = &[
    (&["carousel"], "carousel-ride-manufacturer"),
    (&["bumper", "collision"], "bumper-car-manufacturer"),
    (&["train"], "mini-train-manufacturer"),
    (&["kart", "racing"], "go-kart-manufacturer"),
    (&["trampoline", "jump"], "trampoline-manufacturer"),
    (&["ferris", "wheel"], "ferris-wheel-manufacturer"),
    (&["ship", "pirate"], "pirate-ship-manufacturer"),
    (&["water", "rafting"], "water-ride-manufacturer"),
    (&["swing"], "swing-ride-manufacturer"),
    (&["tank"], "tank-ride-manufacturer"),
    (&["adventure"], "adventure-ride-manufacturer"),
];

fn category_keyword(category: Category) -> Option<&'static str> {
    match category {
        Category::ThrillAdventure => Some("thrill-ride-manufacturer"),
        Category::WaterAttraction => Some("water-ride-manufacturer"),
        Category::KiddieFun => Some("kiddie-ride-manufacturer"),
        Category::FamilyRide => None,
    }
}

pub fn classify(name: &str, category: &str) -> &'static str {
    let name_lower = name.to_lowercase();

    let by_name = NAME_RULES.iter().find_map(|(triggers, keyword)| {
        triggers
            .iter()
            .any(|t| name_lower.contains(t))
            .then_some(*keyword)
    });

    by_name
        .or_else(|| Category::from_label(category).and_then(category_keyword))
        .unwrap_or(DEFAULT_KEYWORD)
}
