use std::sync::LazyLock;

use regex::Regex;

use crate::domain::hazard::{
    entities::{
        HAZARD_SOURCES, HazardCategory, HazardEntry, HazardReport, HazardSpec, HazardTables,
    },
    tables::{self, CHEMICAL, MICROBIAL, PHYSICAL},
};

/// Canonical (English) terms per category. Checked in order, first hit wins.
const CANONICAL_KEYWORDS: &[(HazardCategory, &[&str])] = &[
    (
        HazardCategory::Produce,
        &[
            "apple",
            "pear",
            "strawberry",
            "grape",
            "tomato",
            "garlic",
            "onion",
            "green onion",
            "cabbage",
            "napa cabbage",
            "lettuce",
            "spinach",
            "carrot",
            "potato",
            "sweet potato",
            "cucumber",
            "zucchini",
            "eggplant",
            "radish",
            "bell pepper",
            "chili pepper",
            "mushroom",
            "shiitake mushroom",
            "banana",
            "orange",
            "tangerine",
            "peach",
            "watermelon",
            "melon",
            "blueberry",
            "persimmon",
            "kiwi",
            "lemon",
            "broccoli",
            "pumpkin",
            "corn",
            "soybean sprouts",
            "perilla leaves",
            "plum",
        ],
    ),
    (
        HazardCategory::Livestock,
        &[
            "beef", "pork", "chicken", "duck", "lamb", "milk", "egg", "cheese", "butter",
            "yogurt", "ham", "bacon", "sausage",
        ],
    ),
    (
        HazardCategory::Seafood,
        &[
            "salmon", "tuna", "mackerel", "cod", "squid", "octopus", "shrimp", "crab", "oyster",
            "clam", "anchovy", "seaweed", "laver", "abalone", "eel",
        ],
    ),
    (
        HazardCategory::Grain,
        &[
            "rice",
            "brown rice",
            "wheat flour",
            "bread flour",
            "all-purpose flour",
            "cake flour",
            "bread",
            "noodles",
            "ramen",
            "barley",
            "oats",
            "buckwheat",
            "tofu",
            "soybean",
        ],
    ),
    (
        HazardCategory::FoodAdditive,
        &[
            "aspartame",
            "saccharin",
            "food additives",
            "monosodium glutamate",
            "sucralose",
            "sodium benzoate",
            "sodium nitrite",
            "potassium sorbate",
            "stevia",
            "citric acid",
            "xylitol",
        ],
    ),
    (
        HazardCategory::Spice,
        &[
            "pepper",
            "black pepper",
            "basil",
            "cinnamon",
            "spices",
            "ginger",
            "turmeric",
            "nutmeg",
            "clove",
            "oregano",
            "rosemary",
            "thyme",
            "mustard",
            "chili powder",
            "wasabi",
        ],
    ),
    (
        HazardCategory::MedicinalHerb,
        &[
            "ginseng",
            "red ginseng",
            "licorice root",
            "jujube",
            "angelica root",
            "astragalus root",
            "schisandra berry",
            "goji berry",
            "cnidium rhizome",
            "rehmannia root",
            "platycodon root",
            "medicinal herbs",
        ],
    ),
];

static PROVIDER_CATEGORY_PATTERNS: LazyLock<Vec<(Regex, HazardCategory)>> = LazyLock::new(|| {
    compile(&[
        (r"(?i)fruit|vegetable", HazardCategory::Produce),
        (
            r"(?i)meat|poultry|dairy|beef|pork|egg|sausage",
            HazardCategory::Livestock,
        ),
        (r"(?i)fish|seafood|shellfish", HazardCategory::Seafood),
        (
            r"(?i)grain|cereal|flour|bread|baked|pasta",
            HazardCategory::Grain,
        ),
        (r"(?i)additive|sweetener", HazardCategory::FoodAdditive),
        (r"(?i)spice|herb", HazardCategory::Spice),
    ])
});

static RAW_QUERY_PATTERNS: LazyLock<Vec<(Regex, HazardCategory)>> = LazyLock::new(|| {
    compile(&[
        (
            r"첨가물|감미료|보존료|색소|添加物|甘味料|保存料",
            HazardCategory::FoodAdditive,
        ),
        (
            r"인삼|한약|약초|약재|漢方|生薬|薬草|人参",
            HazardCategory::MedicinalHerb,
        ),
        (r"향신료|양념|시즈닝|香辛料|スパイス", HazardCategory::Spice),
        (
            r"생선|수산|해산물|조개|젓갈|魚|海老|貝|刺身",
            HazardCategory::Seafood,
        ),
        (
            r"고기|육류|우유|계란|치즈|肉|乳|卵",
            HazardCategory::Livestock,
        ),
        (
            r"쌀|밀|가루|빵|면|떡|米|麦|粉|パン|麺",
            HazardCategory::Grain,
        ),
        (
            r"과일|채소|야채|나물|果物|野菜|果実",
            HazardCategory::Produce,
        ),
    ])
});

fn compile(patterns: &[(&str, HazardCategory)]) -> Vec<(Regex, HazardCategory)> {
    patterns
        .iter()
        .map(|(pattern, category)| {
            (
                Regex::new(pattern).expect("hazard category pattern is valid"),
                *category,
            )
        })
        .collect()
}

fn first_match(patterns: &[(Regex, HazardCategory)], text: &str) -> Option<HazardCategory> {
    patterns
        .iter()
        .find(|(pattern, _)| pattern.is_match(text))
        .map(|(_, category)| *category)
}

/// Resolve the hazard category of an ingredient.
///
/// Signals are tried from strongest to weakest: the canonical term, the provider's
/// food category, the untranslated user query. Anything left over is treated as
/// fresh produce.
pub fn classify(
    canonical: &str,
    provider_category: Option<&str>,
    raw_query: Option<&str>,
) -> HazardCategory {
    if let Some(category) = CANONICAL_KEYWORDS
        .iter()
        .find(|(_, keywords)| keywords.contains(&canonical))
        .map(|(category, _)| *category)
    {
        return category;
    }

    if let Some(category) =
        provider_category.and_then(|text| first_match(&PROVIDER_CATEGORY_PATTERNS, text))
    {
        return category;
    }

    raw_query
        .and_then(|text| first_match(&RAW_QUERY_PATTERNS, text))
        .unwrap_or(HazardCategory::Produce)
}

pub fn hazards_for(category: HazardCategory) -> HazardTables {
    HazardTables {
        microbial: tables::lookup(MICROBIAL, category),
        chemical: tables::lookup(CHEMICAL, category),
        physical: tables::lookup(PHYSICAL, category),
    }
}

pub fn hazard_report(category: HazardCategory) -> HazardReport {
    let tables = hazards_for(category);
    let entries = |rows: &[HazardSpec]| rows.iter().map(HazardEntry::from).collect::<Vec<_>>();

    HazardReport {
        category,
        microbial: entries(tables.microbial),
        chemical: entries(tables.chemical),
        physical: entries(tables.physical),
        sources: HAZARD_SOURCES.iter().map(|s| s.to_string()).collect(),
    }
}
