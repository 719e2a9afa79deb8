//! Category value objects
//!
//! Closed vocabularies for crops, livestock, greenhouses, diary entries and
//! calendar events, each with its static display lookup (label, icon, tint).

use serde::{Deserialize, Serialize};

/// Semantic color a category is tagged with.
///
/// The UI layer maps tints onto terminal colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tint {
    Blue,
    Green,
    Yellow,
    Purple,
    Red,
    Grey,
}

/// Field crop
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Crop {
    Wheat,
    Corn,
    Potato,
    Tomatoes,
    Cucumbers,
    Barley,
    Sunflower,
    Soybeans,
    Vegetables,
    Fruits,
    Other,
}

impl Crop {
    pub fn label(&self) -> &'static str {
        match self {
            Crop::Wheat => "Wheat",
            Crop::Corn => "Corn",
            Crop::Potato => "Potato",
            Crop::Tomatoes => "Tomatoes",
            Crop::Cucumbers => "Cucumbers",
            Crop::Barley => "Barley",
            Crop::Sunflower => "Sunflower",
            Crop::Soybeans => "Soybeans",
            Crop::Vegetables => "Vegetables",
            Crop::Fruits => "Fruits",
            Crop::Other => "Other",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Crop::Wheat | Crop::Barley => "🌾",
            Crop::Corn => "🌽",
            Crop::Potato => "🥔",
            Crop::Tomatoes => "🍅",
            Crop::Cucumbers => "🥒",
            Crop::Sunflower => "🌻",
            Crop::Soybeans => "🫘",
            Crop::Vegetables => "🥦",
            Crop::Fruits => "🍎",
            Crop::Other => "🌱",
        }
    }

    /// Typical yield in centners per hectare, used for rough estimates.
    pub fn base_yield(&self) -> f64 {
        match self {
            Crop::Wheat => 35.0,
            Crop::Corn => 60.0,
            Crop::Soybeans => 25.0,
            Crop::Sunflower => 20.0,
            Crop::Potato => 200.0,
            Crop::Vegetables | Crop::Tomatoes | Crop::Cucumbers => 150.0,
            Crop::Fruits => 100.0,
            Crop::Barley | Crop::Other => 30.0,
        }
    }
}

/// Livestock kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum AnimalKind {
    Cow,
    Pig,
    Sheep,
    Goat,
    Chicken,
    Duck,
    Goose,
    Turkey,
    Rabbit,
    Horse,
    Other,
}

impl AnimalKind {
    pub fn label(&self) -> &'static str {
        match self {
            AnimalKind::Cow => "Cows",
            AnimalKind::Pig => "Pigs",
            AnimalKind::Sheep => "Sheep",
            AnimalKind::Goat => "Goats",
            AnimalKind::Chicken => "Chickens",
            AnimalKind::Duck => "Ducks",
            AnimalKind::Goose => "Geese",
            AnimalKind::Turkey => "Turkeys",
            AnimalKind::Rabbit => "Rabbits",
            AnimalKind::Horse => "Horses",
            AnimalKind::Other => "Other",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            AnimalKind::Cow => "🐄",
            AnimalKind::Pig => "🐖",
            AnimalKind::Sheep => "🐑",
            AnimalKind::Goat => "🐐",
            AnimalKind::Chicken => "🐔",
            AnimalKind::Duck => "🦆",
            AnimalKind::Goose => "🪿",
            AnimalKind::Turkey => "🦃",
            AnimalKind::Rabbit => "🐇",
            AnimalKind::Horse => "🐎",
            AnimalKind::Other => "🐾",
        }
    }
}

/// Greenhouse construction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum GreenhouseKind {
    Film,
    Polycarbonate,
    Glass,
    Winter,
    Hydroponics,
    Other,
}

impl GreenhouseKind {
    pub fn label(&self) -> &'static str {
        match self {
            GreenhouseKind::Film => "Film",
            GreenhouseKind::Polycarbonate => "Polycarbonate",
            GreenhouseKind::Glass => "Glass",
            GreenhouseKind::Winter => "Winter",
            GreenhouseKind::Hydroponics => "Hydroponics",
            GreenhouseKind::Other => "Other",
        }
    }
}

/// Crop grown under cover
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum GreenhouseCrop {
    Tomatoes,
    Cucumbers,
    Peppers,
    Eggplant,
    Greens,
    Strawberries,
    Flowers,
    Seedlings,
    Other,
}

impl GreenhouseCrop {
    pub fn label(&self) -> &'static str {
        match self {
            GreenhouseCrop::Tomatoes => "Tomatoes",
            GreenhouseCrop::Cucumbers => "Cucumbers",
            GreenhouseCrop::Peppers => "Peppers",
            GreenhouseCrop::Eggplant => "Eggplant",
            GreenhouseCrop::Greens => "Greens",
            GreenhouseCrop::Strawberries => "Strawberries",
            GreenhouseCrop::Flowers => "Flowers",
            GreenhouseCrop::Seedlings => "Seedlings",
            GreenhouseCrop::Other => "Other",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            GreenhouseCrop::Tomatoes => "🍅",
            GreenhouseCrop::Cucumbers => "🥒",
            GreenhouseCrop::Peppers => "🫑",
            GreenhouseCrop::Eggplant => "🍆",
            GreenhouseCrop::Greens => "🥬",
            GreenhouseCrop::Strawberries => "🍓",
            GreenhouseCrop::Flowers => "🌷",
            GreenhouseCrop::Seedlings | GreenhouseCrop::Other => "🌱",
        }
    }
}

/// Unit a harvest quantity is recorded in
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum HarvestUnit {
    #[default]
    #[serde(alias = "кг")]
    Kg,
    /// 100 kg
    #[serde(alias = "ц")]
    Centner,
    #[serde(alias = "т")]
    Tonne,
    #[serde(alias = "меш")]
    Sack,
}

impl HarvestUnit {
    pub fn symbol(&self) -> &'static str {
        match self {
            HarvestUnit::Kg => "kg",
            HarvestUnit::Centner => "c",
            HarvestUnit::Tonne => "t",
            HarvestUnit::Sack => "sack",
        }
    }
}

/// Work diary category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum DiaryCategory {
    Work,
    Observation,
    Problem,
    Harvest,
    Expense,
}

impl DiaryCategory {
    pub const ALL: [DiaryCategory; 5] = [
        DiaryCategory::Work,
        DiaryCategory::Observation,
        DiaryCategory::Problem,
        DiaryCategory::Harvest,
        DiaryCategory::Expense,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            DiaryCategory::Work => "work",
            DiaryCategory::Observation => "observation",
            DiaryCategory::Problem => "problem",
            DiaryCategory::Harvest => "harvest",
            DiaryCategory::Expense => "expense",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DiaryCategory::Work => "Field work",
            DiaryCategory::Observation => "Observations",
            DiaryCategory::Problem => "Problems",
            DiaryCategory::Harvest => "Harvest",
            DiaryCategory::Expense => "Expenses",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            DiaryCategory::Work => "🚜",
            DiaryCategory::Observation => "👀",
            DiaryCategory::Problem => "⚠",
            DiaryCategory::Harvest => "📊",
            DiaryCategory::Expense => "💰",
        }
    }

    pub fn tint(&self) -> Tint {
        match self {
            DiaryCategory::Work => Tint::Blue,
            DiaryCategory::Observation => Tint::Green,
            DiaryCategory::Problem => Tint::Red,
            DiaryCategory::Harvest => Tint::Yellow,
            DiaryCategory::Expense => Tint::Purple,
        }
    }
}

/// Kind of planned calendar event
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum EventKind {
    #[default]
    Work,
    Harvest,
    Meeting,
    Maintenance,
    Other,
}

impl EventKind {
    pub fn label(&self) -> &'static str {
        match self {
            EventKind::Work => "Work",
            EventKind::Harvest => "Harvest",
            EventKind::Meeting => "Meeting",
            EventKind::Maintenance => "Maintenance",
            EventKind::Other => "Other",
        }
    }

    pub fn tint(&self) -> Tint {
        match self {
            EventKind::Work => Tint::Blue,
            EventKind::Harvest => Tint::Yellow,
            EventKind::Meeting => Tint::Purple,
            EventKind::Maintenance => Tint::Grey,
            EventKind::Other => Tint::Green,
        }
    }

    /// One-letter tag used where emoji and color are unavailable.
    pub fn tag(&self) -> char {
        match self {
            EventKind::Work => 'W',
            EventKind::Harvest => 'H',
            EventKind::Meeting => 'M',
            EventKind::Maintenance => 'S',
            EventKind::Other => 'O',
        }
    }
}

/// Event priority
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    pub fn label(&self) -> &'static str {
        match self {
            Priority::High => "high",
            Priority::Medium => "medium",
            Priority::Low => "low",
        }
    }

    /// Marker for an optional priority; events without one get a neutral dot.
    pub fn marker(priority: Option<Priority>, unicode: bool) -> &'static str {
        match (unicode, priority) {
            (true, Some(Priority::High)) => "🔴",
            (true, Some(Priority::Medium)) => "🟡",
            (true, Some(Priority::Low)) => "🟢",
            (true, None) => "⚪",
            (false, Some(Priority::High)) => "!",
            (false, Some(Priority::Medium)) => "~",
            (false, Some(Priority::Low)) => ".",
            (false, None) => " ",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_crop_is_rejected() {
        assert!(serde_json::from_str::<Crop>(r#""rye""#).is_err());
    }

    #[test]
    fn harvest_units_accept_russian_abbreviations() {
        let units: Vec<HarvestUnit> = serde_json::from_str(r#"["кг", "ц", "т", "меш"]"#).unwrap();
        assert_eq!(
            units,
            vec![HarvestUnit::Kg, HarvestUnit::Centner, HarvestUnit::Tonne, HarvestUnit::Sack]
        );
        assert_eq!(serde_json::to_string(&HarvestUnit::Centner).unwrap(), r#""centner""#);
    }

    #[test]
    fn event_kind_serde_lowercase() {
        let kind: EventKind = serde_json::from_str(r#""maintenance""#).unwrap();
        assert_eq!(kind, EventKind::Maintenance);
        assert_eq!(serde_json::to_string(&EventKind::Work).unwrap(), r#""work""#);
    }

    #[test]
    fn event_tints_follow_category_table() {
        assert_eq!(EventKind::Work.tint(), Tint::Blue);
        assert_eq!(EventKind::Harvest.tint(), Tint::Yellow);
        assert_eq!(EventKind::Meeting.tint(), Tint::Purple);
        assert_eq!(EventKind::Maintenance.tint(), Tint::Grey);
        assert_eq!(EventKind::Other.tint(), Tint::Green);
    }

    #[test]
    fn priority_markers() {
        assert_eq!(Priority::marker(Some(Priority::High), true), "🔴");
        assert_eq!(Priority::marker(None, true), "⚪");
        assert_eq!(Priority::marker(Some(Priority::High), false), "!");
    }

    #[test]
    fn base_yields() {
        assert_eq!(Crop::Wheat.base_yield(), 35.0);
        assert_eq!(Crop::Potato.base_yield(), 200.0);
        assert_eq!(Crop::Other.base_yield(), 30.0);
    }

    #[test]
    fn diary_category_ids_match_serde() {
        for category in DiaryCategory::ALL {
            let json = serde_json::to_string(&category).unwrap();
            assert_eq!(json, format!("\"{}\"", category.id()));
        }
    }
}
