use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

use crate::{scoring::Logged, store::repo::Identified};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MealType {
    #[default]
    Breakfast,
    Lunch,
    Dinner,
    Snack,
}

/// A logged food item, as stored under `aura_food_logs`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FoodEntry {
    pub id: Uuid,
    pub food_name: String,
    pub calories: u32,
    pub protein: f64, // grams
    pub carbs: f64,   // grams
    pub fats: f64,    // grams
    pub meal_type: MealType,
    #[serde(with = "time::serde::rfc3339")]
    pub logged_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

impl Identified for FoodEntry {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl Logged for FoodEntry {
    fn logged_at(&self) -> OffsetDateTime {
        self.logged_at
    }
}
