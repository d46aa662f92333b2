use time::OffsetDateTime;
use uuid::Uuid;

use crate::food::dto::{CreateFoodRequest, FoodDayResponse, FoodTotals};
use crate::food::repo_types::FoodEntry;
use crate::scoring::{filter_today, sum_field};

pub(crate) fn new_entry(req: CreateFoodRequest, now: OffsetDateTime) -> Result<FoodEntry, &'static str> {
    let food_name = req.food_name.trim();
    if food_name.is_empty() {
        return Err("Please enter a food name");
    }
    Ok(FoodEntry {
        id: Uuid::new_v4(),
        food_name: food_name.to_string(),
        calories: req.calories,
        protein: req.protein,
        carbs: req.carbs,
        fats: req.fats,
        meal_type: req.meal_type,
        logged_at: now,
        created_at: now,
    })
}

pub(crate) fn day_view(all: &[FoodEntry], reference: OffsetDateTime) -> FoodDayResponse {
    let today = filter_today(all, reference);
    let totals = FoodTotals {
        calories: sum_field(today.iter().copied(), |f| u64::from(f.calories)),
        protein: sum_field(today.iter().copied(), |f| f.protein),
        carbs: sum_field(today.iter().copied(), |f| f.carbs),
        fats: sum_field(today.iter().copied(), |f| f.fats),
    };
    FoodDayResponse {
        date: reference.date(),
        entries: today.into_iter().rev().cloned().collect(),
        totals,
    }
}
