//! Demo data used when the nutrition provider is unreachable or finds nothing.

use rand::Rng;

use crate::domain::{
    common::capitalize,
    nutrition::entities::{FdcId, Nutrient, ProviderNutritionRecord},
};

pub const SIMULATED_FDC_ID: u64 = 999_999;
pub const SIMULATED_CATEGORY: &str = "General";

/// Literal nutrient values in the fixed order
/// protein, fat, carbohydrate, energy, sugars, sodium, cholesterol, saturated, trans.
type NutrientValues = [f64; 9];

struct KnownFood {
    key: &'static str,
    fdc_id: u64,
    description: &'static str,
    food_category: &'static str,
    values: NutrientValues,
}

const NUTRIENT_LABELS: [(&str, &str); 9] = [
    ("Protein", "g"),
    ("Total lipid (fat)", "g"),
    ("Carbohydrate, by difference", "g"),
    ("Energy", "kcal"),
    ("Sugars, total including NLEA", "g"),
    ("Sodium, Na", "mg"),
    ("Cholesterol", "mg"),
    ("Fatty acids, total saturated", "g"),
    ("Fatty acids, total trans", "g"),
];

const KNOWN_FOODS: &[KnownFood] = &[
    KnownFood {
        key: "apple",
        fdc_id: 171_688,
        description: "Apples, raw, with skin",
        food_category: "Fruits",
        values: [0.26, 0.17, 13.8, 52.0, 10.4, 1.0, 0.0, 0.03, 0.0],
    },
    KnownFood {
        key: "beef",
        fdc_id: 170_567,
        description: "Beef, raw",
        food_category: "Meat",
        values: [26.1, 11.8, 0.0, 250.0, 0.0, 72.0, 90.0, 4.6, 0.4],
    },
    KnownFood {
        key: "strawberry",
        fdc_id: 167_762,
        description: "Strawberries, raw",
        food_category: "Fruits",
        values: [0.67, 0.3, 7.6, 32.0, 4.89, 1.0, 0.0, 0.01, 0.0],
    },
    KnownFood {
        key: "pork",
        fdc_id: 167_812,
        description: "Pork, fresh, raw",
        food_category: "Meat",
        values: [20.9, 14.3, 0.0, 212.0, 0.0, 62.0, 71.0, 5.3, 0.1],
    },
    KnownFood {
        key: "pepper",
        fdc_id: 170_931,
        description: "Spices, pepper, black",
        food_category: "Spices and Herbs",
        values: [10.4, 3.3, 64.0, 251.0, 0.6, 20.0, 0.0, 1.4, 0.0],
    },
    KnownFood {
        key: "aspartame",
        fdc_id: 999_123,
        description: "Aspartame (Sweetener)",
        food_category: "Food Additives",
        values: [0.0, 0.0, 85.0, 365.0, 0.0, 0.0, 0.0, 0.0, 0.0],
    },
];

/// Inclusive range and rounding precision of each simulated nutrient,
/// in `NUTRIENT_LABELS` order.
pub const SIMULATED_RANGES: [(f64, f64, i32); 9] = [
    (0.5, 20.0, 1),
    (0.1, 15.0, 1),
    (5.0, 30.0, 1),
    (20.0, 250.0, 1),
    (0.0, 15.0, 1),
    (5.0, 300.0, 1),
    (0.0, 100.0, 1),
    (0.1, 10.0, 2),
    (0.0, 1.0, 2),
];

fn nutrients_from(values: &NutrientValues) -> Vec<Nutrient> {
    NUTRIENT_LABELS
        .iter()
        .zip(values)
        .map(|((name, unit), value)| Nutrient::new(*name, *value, *unit))
        .collect()
}

fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

/// Build a nutrition record for `english_query` without calling the provider.
///
/// Six known ingredients return their literal tables; anything else gets
/// randomized values inside `SIMULATED_RANGES`.
pub fn generate_fallback(english_query: &str) -> ProviderNutritionRecord {
    let key = english_query.to_lowercase();

    if let Some(food) = KNOWN_FOODS.iter().find(|food| food.key == key) {
        return ProviderNutritionRecord {
            fdc_id: FdcId::Known(food.fdc_id),
            description: food.description.to_string(),
            food_category: Some(food.food_category.to_string()),
            nutrients: nutrients_from(&food.values),
        };
    }

    let mut rng = rand::thread_rng();
    let mut values: NutrientValues = [0.0; 9];
    for (slot, (low, high, decimals)) in values.iter_mut().zip(SIMULATED_RANGES) {
        *slot = round_to(rng.gen_range(low..=high), decimals);
    }

    ProviderNutritionRecord {
        fdc_id: FdcId::Known(SIMULATED_FDC_ID),
        description: format!("{} (Simulated Data)", capitalize(english_query)),
        food_category: Some(SIMULATED_CATEGORY.to_string()),
        nutrients: nutrients_from(&values),
    }
}
