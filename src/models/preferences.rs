use serde::{Deserialize, Serialize};
use std::fmt;

use super::null_as_default;

/// Interests offered as quick picks in the questionnaire. Interests are
/// free-form, this is only the seed list.
pub const INTEREST_SUGGESTIONS: [&str; 10] = [
    "Food",
    "Photography",
    "Museums",
    "Wildlife",
    "Surfing",
    "Hiking",
    "Architecture",
    "Street Art",
    "Markets",
    "Beaches",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Budget {
    Backpacker,
    MidRange,
    Luxury,
}

impl Budget {
    pub const ALL: [Budget; 3] = [Budget::Backpacker, Budget::MidRange, Budget::Luxury];

    pub fn as_str(&self) -> &'static str {
        match self {
            Budget::Backpacker => "backpacker",
            Budget::MidRange => "mid-range",
            Budget::Luxury => "luxury",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Budget::Backpacker => "Backpacker",
            Budget::MidRange => "Mid-range",
            Budget::Luxury => "Luxury",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Pace {
    Fast,
    Balanced,
    Relaxed,
}

impl Pace {
    pub const ALL: [Pace; 3] = [Pace::Fast, Pace::Balanced, Pace::Relaxed];

    pub fn as_str(&self) -> &'static str {
        match self {
            Pace::Fast => "fast",
            Pace::Balanced => "balanced",
            Pace::Relaxed => "relaxed",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Pace::Fast => "Fast",
            Pace::Balanced => "Balanced",
            Pace::Relaxed => "Relaxed",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Pace::Fast => "See everything!",
            Pace::Balanced => "Perfect mix",
            Pace::Relaxed => "Take it easy",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Accommodation {
    Hotel,
    Hostel,
    Airbnb,
    Camping,
}

impl Accommodation {
    pub const ALL: [Accommodation; 4] = [
        Accommodation::Hotel,
        Accommodation::Hostel,
        Accommodation::Airbnb,
        Accommodation::Camping,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Accommodation::Hotel => "hotel",
            Accommodation::Hostel => "hostel",
            Accommodation::Airbnb => "airbnb",
            Accommodation::Camping => "camping",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Accommodation::Hotel => "Hotel",
            Accommodation::Hostel => "Hostel",
            Accommodation::Airbnb => "Airbnb",
            Accommodation::Camping => "Camping/Glamping",
        }
    }
}

/// Desired trip atmosphere. Multi-select.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Vibe {
    Party,
    Nature,
    Culture,
    Adventure,
    Wellness,
    Festivals,
    Shopping,
    Music,
}

impl Vibe {
    pub const ALL: [Vibe; 8] = [
        Vibe::Party,
        Vibe::Nature,
        Vibe::Culture,
        Vibe::Adventure,
        Vibe::Wellness,
        Vibe::Festivals,
        Vibe::Shopping,
        Vibe::Music,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Vibe::Party => "party",
            Vibe::Nature => "nature",
            Vibe::Culture => "culture",
            Vibe::Adventure => "adventure",
            Vibe::Wellness => "wellness",
            Vibe::Festivals => "festivals",
            Vibe::Shopping => "shopping",
            Vibe::Music => "music",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Vibe::Party => "Party & Nightlife",
            Vibe::Nature => "Peace & Nature",
            Vibe::Culture => "Culture & History",
            Vibe::Adventure => "Adventure",
            Vibe::Wellness => "Wellness",
            Vibe::Festivals => "Festivals",
            Vibe::Shopping => "Shopping",
            Vibe::Music => "Live Music",
        }
    }
}

macro_rules! display_as_id {
    ($($ty:ty),*) => {
        $(impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        })*
    };
}

display_as_id!(Budget, Pace, Accommodation, Vibe);

fn default_travelers() -> u32 {
    1
}

/// Everything the questionnaire collects about how the party wants to travel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PreferenceSet {
    pub travelers: u32,
    pub budget: Option<Budget>,
    pub pace: Option<Pace>,
    #[serde(deserialize_with = "null_as_default")]
    pub vibes: Vec<Vibe>,
    pub accommodation: Option<Accommodation>,
    #[serde(deserialize_with = "null_as_default")]
    pub interests: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub must_dos: String,
    #[serde(deserialize_with = "null_as_default")]
    pub avoids: String,
    #[serde(deserialize_with = "null_as_default")]
    pub surprises: bool,
}

impl Default for PreferenceSet {
    fn default() -> Self {
        Self {
            travelers: default_travelers(),
            budget: None,
            pace: None,
            vibes: Vec::new(),
            accommodation: None,
            interests: Vec::new(),
            must_dos: String::new(),
            avoids: String::new(),
            surprises: false,
        }
    }
}

impl PreferenceSet {
    /// Names of required answers that are still missing, in form order.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.budget.is_none() {
            missing.push("budget");
        }
        if self.pace.is_none() {
            missing.push("pace");
        }
        if self.vibes.is_empty() {
            missing.push("vibes");
        }
        if self.accommodation.is_none() {
            missing.push("accommodation");
        }
        if self.interests.is_empty() {
            missing.push("interests");
        }
        missing
    }

    pub fn is_complete(&self) -> bool {
        self.missing_fields().is_empty()
    }
}
