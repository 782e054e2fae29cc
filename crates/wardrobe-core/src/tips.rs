use crate::model::{TipBundle, WeatherReading};

/// Temperature bracket with its base outfit lists. `below` is an exclusive
/// upper bound in °C; `None` marks the open-ended warm bracket.
#[derive(Debug, Clone, Copy)]
pub struct Bracket {
    pub name: &'static str,
    pub below: Option<i32>,
    pub outfits: &'static [&'static str],
    pub fabrics: &'static [&'static str],
    pub accessories: &'static [&'static str],
}

/// Extra accessories added when the condition contains `needle`.
#[derive(Debug, Clone, Copy)]
pub struct ConditionRule {
    pub needle: &'static str,
    pub accessories: &'static [&'static str],
}

/// Brackets ordered by ascending bound; the last one is open-ended.
pub const BRACKETS: &[Bracket] = &[
    Bracket {
        name: "cold",
        below: Some(5),
        outfits: &[
            "Heavy winter coat or parka",
            "Thick sweater or thermal layers",
            "Warm pants or insulated jeans",
            "Winter boots",
        ],
        fabrics: &["Wool", "Fleece", "Down", "Thermal materials"],
        accessories: &["Scarf", "Gloves", "Beanie", "Warm socks"],
    },
    Bracket {
        name: "cool",
        below: Some(15),
        outfits: &[
            "Light jacket or cardigan",
            "Long-sleeve shirt or sweater",
            "Jeans or trousers",
            "Closed-toe shoes",
        ],
        fabrics: &["Cotton", "Light wool", "Denim", "Knit fabrics"],
        accessories: &["Light scarf", "Crossbody bag"],
    },
    Bracket {
        name: "mild",
        below: Some(25),
        outfits: &[
            "T-shirt or blouse",
            "Light pants or jeans",
            "Sneakers or loafers",
            "Optional light cardigan",
        ],
        fabrics: &["Cotton", "Linen blend", "Light denim"],
        accessories: &["Sunglasses", "Tote bag"],
    },
    Bracket {
        name: "warm",
        below: None,
        outfits: &[
            "Breathable t-shirt or tank top",
            "Shorts or light dress",
            "Sandals or canvas shoes",
            "Sun hat",
        ],
        fabrics: &["Linen", "Cotton", "Breathable synthetics"],
        accessories: &["Sunglasses", "Sun hat", "Light bag"],
    },
];

pub const CONDITION_RULES: &[ConditionRule] = &[
    ConditionRule {
        needle: "rain",
        accessories: &["Umbrella", "Waterproof jacket"],
    },
    ConditionRule {
        needle: "snow",
        accessories: &["Waterproof boots", "Insulated gloves"],
    },
];

pub const SUSTAINABILITY_TIP: &str = "Choose natural, breathable fabrics when possible. \
Layer clothing instead of overheating to save energy. \
Consider second-hand options for seasonal items you'll only wear occasionally.";

/// The bracket `temperature` falls in.
pub fn bracket_for(temperature: i32) -> &'static Bracket {
    BRACKETS
        .iter()
        .find(|b| b.below.map_or(true, |bound| temperature < bound))
        .unwrap_or(&BRACKETS[BRACKETS.len() - 1])
}

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Build outfit tips for a reading: bracket lists by temperature, plus
/// condition accessories appended after the bracket's own.
pub fn generate_tips(reading: &WeatherReading) -> TipBundle {
    let bracket = bracket_for(reading.temperature);
    let condition = reading.condition.to_lowercase();

    let mut accessories = owned(bracket.accessories);
    for rule in CONDITION_RULES {
        if condition.contains(rule.needle) {
            accessories.extend(rule.accessories.iter().map(|s| s.to_string()));
        }
    }

    TipBundle {
        outfit_suggestions: owned(bracket.outfits),
        fabric_recommendations: owned(bracket.fabrics),
        accessories,
        sustainability_tip: SUSTAINABILITY_TIP.to_string(),
    }
}
