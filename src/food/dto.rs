use serde::{Deserialize, Serialize};
use time::Date;

use crate::food::repo_types::{FoodEntry, MealType};
use crate::lenient;

/// Request body for logging a food item. Numbers may arrive as strings.
#[derive(Debug, Deserialize)]
pub struct CreateFoodRequest {
    #[serde(default)]
    pub food_name: String,
    #[serde(default, deserialize_with = "lenient::u32_or_zero")]
    pub calories: u32,
    #[serde(default, deserialize_with = "lenient::f64_or_zero")]
    pub protein: f64,
    #[serde(default, deserialize_with = "lenient::f64_or_zero")]
    pub carbs: f64,
    #[serde(default, deserialize_with = "lenient::f64_or_zero")]
    pub fats: f64,
    #[serde(default)]
    pub meal_type: MealType,
}

#[derive(Debug, Default, PartialEq, Serialize)]
pub struct FoodTotals {
    pub calories: u64,
    pub protein: f64,
    pub carbs: f64,
    pub fats: f64,
}

/// One day of food logs, newest first.
#[derive(Debug, Serialize)]
pub struct FoodDayResponse {
    pub date: Date,
    pub entries: Vec<FoodEntry>,
    pub totals: FoodTotals,
}
