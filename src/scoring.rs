//! Daily aggregation and the composite wellness score.
//!
//! Everything here is a pure function of its inputs: entries and goals go in,
//! plain numbers come out.

use std::iter::Sum;

use serde::Serialize;
use time::{Date, OffsetDateTime};

use crate::{
    food::repo_types::FoodEntry, goals::repo_types::DailyGoals,
    metrics::repo_types::HealthMetric, water::repo_types::WaterEntry,
};

/// Anything carrying the instant it was logged at.
pub trait Logged {
    fn logged_at(&self) -> OffsetDateTime;
}

/// `round(min(actual / goal * 100, 100))`.
///
/// A non-positive or non-finite goal yields 0, as does a non-finite or
/// negative `actual`.
pub fn category_percentage(actual: f64, goal: f64) -> u8 {
    if !goal.is_finite() || goal <= 0.0 || !actual.is_finite() || actual <= 0.0 {
        return 0;
    }
    let pct = (actual / goal * 100.0).min(100.0);
    pct.round() as u8
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WellnessBreakdown {
    pub nutrition: u8,
    pub hydration: u8,
    pub fitness: u8,
    pub sleep: u8,
    pub score: u8,
}

/// Unweighted mean of the four category percentages. A category with no data
/// contributes 0, it is not skipped.
#[allow(clippy::too_many_arguments)]
pub fn wellness_score(
    calories: f64,
    calorie_goal: f64,
    water_ml: f64,
    water_goal_ml: f64,
    steps: f64,
    steps_goal: f64,
    sleep_hours: f64,
    sleep_goal_hours: f64,
) -> WellnessBreakdown {
    let nutrition = category_percentage(calories, calorie_goal);
    let hydration = category_percentage(water_ml, water_goal_ml);
    let fitness = category_percentage(steps, steps_goal);
    let sleep = category_percentage(sleep_hours, sleep_goal_hours);
    let total = nutrition as f64 + hydration as f64 + fitness as f64 + sleep as f64;
    WellnessBreakdown {
        nutrition,
        hydration,
        fitness,
        sleep,
        score: (total / 4.0).round() as u8,
    }
}

/// Calendar date at `reference`'s offset that `entry` was logged on.
fn local_date<T: Logged>(entry: &T, reference: OffsetDateTime) -> Date {
    entry.logged_at().to_offset(reference.offset()).date()
}

/// Entries logged on the same local calendar day as `reference`, in input order.
/// "Local" is whatever offset `reference` carries.
pub fn filter_today<T: Logged>(entries: &[T], reference: OffsetDateTime) -> Vec<&T> {
    let day = reference.date();
    entries
        .iter()
        .filter(|e| local_date(*e, reference) == day)
        .collect()
}

pub fn sum_field<'a, T, N, F>(entries: impl IntoIterator<Item = &'a T>, field: F) -> N
where
    T: 'a,
    N: Sum<N>,
    F: Fn(&T) -> N,
{
    entries.into_iter().map(field).sum()
}

#[derive(Debug, Clone, Serialize)]
pub struct DailySummary {
    pub date: Date,
    pub today_calories: u64,
    pub calorie_goal: u32,
    pub today_water: u64,
    pub water_goal: u32,
    pub today_steps: u32,
    pub steps_goal: u32,
    pub last_heart_rate: Option<u32>,
    pub last_sleep_hours: Option<f64>,
    pub sleep_goal: f64,
    pub breakdown: WellnessBreakdown,
}

/// Builds the dashboard view for the day containing `reference`.
///
/// Steps, sleep and heart rate come from the most recently appended health
/// metric of that day; with none, steps and sleep count as 0.
pub fn daily_summary(
    food: &[FoodEntry],
    water: &[WaterEntry],
    metrics: &[HealthMetric],
    goals: &DailyGoals,
    reference: OffsetDateTime,
) -> DailySummary {
    let today_food = filter_today(food, reference);
    let today_water = filter_today(water, reference);
    let latest = filter_today(metrics, reference).last().copied();

    // per-entry values are u32; day totals are widened so they cannot overflow
    let today_calories: u64 = sum_field(today_food.iter().copied(), |f| u64::from(f.calories));
    let today_water: u64 = sum_field(today_water.iter().copied(), |w| u64::from(w.amount_ml));
    let today_steps = latest.map(|m| m.steps).unwrap_or(0);
    let last_sleep_hours = latest.and_then(|m| m.sleep_hours);

    let breakdown = wellness_score(
        today_calories as f64,
        goals.calorie_goal as f64,
        today_water as f64,
        goals.water_goal_ml as f64,
        today_steps as f64,
        goals.steps_goal as f64,
        last_sleep_hours.unwrap_or(0.0),
        goals.sleep_goal_hours,
    );

    DailySummary {
        date: reference.date(),
        today_calories,
        calorie_goal: goals.calorie_goal,
        today_water,
        water_goal: goals.water_goal_ml,
        today_steps,
        steps_goal: goals.steps_goal,
        last_heart_rate: latest.and_then(|m| m.heart_rate),
        last_sleep_hours,
        sleep_goal: goals.sleep_goal_hours,
        breakdown,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::food::repo_types::MealType;
    use time::macros::{datetime, offset};
    use uuid::Uuid;

    fn water_at(at: OffsetDateTime, amount_ml: u32) -> WaterEntry {
        WaterEntry {
            id: Uuid::new_v4(),
            amount_ml,
            logged_at: at,
            created_at: at,
        }
    }

    fn food_at(at: OffsetDateTime, calories: u32) -> FoodEntry {
        FoodEntry {
            id: Uuid::new_v4(),
            food_name: "oats".into(),
            calories,
            protein: 5.0,
            carbs: 27.0,
            fats: 3.0,
            meal_type: MealType::Breakfast,
            logged_at: at,
            created_at: at,
        }
    }

    fn metric_at(at: OffsetDateTime, steps: u32, sleep: Option<f64>) -> HealthMetric {
        HealthMetric {
            id: Uuid::new_v4(),
            heart_rate: Some(64),
            blood_pressure_systolic: None,
            blood_pressure_diastolic: None,
            weight: None,
            height: None,
            sleep_hours: sleep,
            steps,
            logged_at: at,
            created_at: at,
        }
    }

    #[test]
    fn percentage_is_clamped_at_100() {
        assert_eq!(category_percentage(4000.0, 2000.0), 100);
        assert_eq!(category_percentage(2000.0, 2000.0), 100);
        assert_eq!(category_percentage(1000.0, 2000.0), 50);
        assert_eq!(category_percentage(0.0, 2000.0), 0);
    }

    #[test]
    fn percentage_rounds_half_up() {
        // 1/8 = 12.5%
        assert_eq!(category_percentage(1.0, 8.0), 13);
        assert_eq!(category_percentage(1.0, 3.0), 33);
    }

    #[test]
    fn percentage_is_monotone_in_actual() {
        let goal = 7.5;
        let mut prev = 0;
        for step in 0..200 {
            let pct = category_percentage(step as f64 * 0.1, goal);
            assert!(pct >= prev, "dropped at step {step}");
            prev = pct;
        }
        assert_eq!(prev, 100);
    }

    #[test]
    fn zero_goal_scores_zero() {
        assert_eq!(category_percentage(500.0, 0.0), 0);
        assert_eq!(category_percentage(500.0, -1.0), 0);
        assert_eq!(category_percentage(f64::NAN, 10.0), 0);
    }

    #[test]
    fn all_goals_met_scores_100() {
        let b = wellness_score(2000.0, 2000.0, 2000.0, 2000.0, 10000.0, 10000.0, 8.0, 8.0);
        assert_eq!(
            b,
            WellnessBreakdown {
                nutrition: 100,
                hydration: 100,
                fitness: 100,
                sleep: 100,
                score: 100
            }
        );
    }

    #[test]
    fn missing_categories_drag_score_down() {
        // no step or sleep data: those count as 0%, not as excluded
        let b = wellness_score(1000.0, 2000.0, 1000.0, 2000.0, 0.0, 10000.0, 0.0, 8.0);
        assert_eq!((b.nutrition, b.hydration, b.fitness, b.sleep), (50, 50, 0, 0));
        assert_eq!(b.score, 25);
    }

    #[test]
    fn score_mean_rounds_to_nearest() {
        // 100 + 100 + 1 + 1 = 202 / 4 = 50.5
        let b = wellness_score(2000.0, 2000.0, 2000.0, 2000.0, 100.0, 10000.0, 0.08, 8.0);
        assert_eq!(b.score, 51);
    }

    #[test]
    fn filter_today_keeps_whole_local_day() {
        let reference = datetime!(2024-03-10 12:00 +02:00);
        let logs = vec![
            water_at(datetime!(2024-03-10 00:00:00 +02:00), 1),
            water_at(datetime!(2024-03-10 23:59:59 +02:00), 2),
            water_at(datetime!(2024-03-09 23:59:59 +02:00), 3),
            water_at(datetime!(2024-03-11 00:00:00 +02:00), 4),
            // 22:30 UTC on the 9th is 00:30 on the 10th at +02:00
            water_at(datetime!(2024-03-09 22:30 UTC), 5),
            // 22:30 UTC on the 10th is already the 11th locally
            water_at(datetime!(2024-03-10 22:30 UTC), 6),
        ];
        let kept: Vec<u32> = filter_today(&logs, reference)
            .into_iter()
            .map(|w| w.amount_ml)
            .collect();
        assert_eq!(kept, vec![1, 2, 5]);
    }

    #[test]
    fn sum_field_adds_selected_values() {
        let at = datetime!(2024-03-10 08:00 UTC);
        let food = vec![food_at(at, 300), food_at(at, 450)];
        let calories: u32 = sum_field(&food, |f| f.calories);
        let protein: f64 = sum_field(&food, |f| f.protein);
        assert_eq!(calories, 750);
        assert_eq!(protein, 10.0);
        let none: u32 = sum_field(&Vec::<FoodEntry>::new(), |f| f.calories);
        assert_eq!(none, 0);
    }

    #[test]
    fn daily_summary_uses_only_the_reference_day() {
        let reference = datetime!(2024-03-10 18:00 UTC).to_offset(offset!(+01:00));
        let today = datetime!(2024-03-10 09:00 UTC);
        let yesterday = datetime!(2024-03-09 09:00 UTC);

        let food = vec![food_at(today, 1000), food_at(yesterday, 5000)];
        let water = vec![water_at(today, 500), water_at(today, 500), water_at(yesterday, 3000)];
        let metrics = vec![
            metric_at(yesterday, 20000, Some(9.0)),
            metric_at(today, 2000, Some(6.0)),
            metric_at(today, 5000, Some(4.0)),
        ];

        let s = daily_summary(&food, &water, &metrics, &DailyGoals::default(), reference);
        assert_eq!(s.today_calories, 1000);
        assert_eq!(s.today_water, 1000);
        // latest metric of the day wins
        assert_eq!(s.today_steps, 5000);
        assert_eq!(s.last_sleep_hours, Some(4.0));
        assert_eq!(s.last_heart_rate, Some(64));
        assert_eq!(
            (s.breakdown.nutrition, s.breakdown.hydration, s.breakdown.fitness, s.breakdown.sleep),
            (50, 50, 50, 50)
        );
        assert_eq!(s.breakdown.score, 50);
    }

    #[test]
    fn daily_summary_totals_do_not_overflow() {
        let at = datetime!(2024-03-10 09:00 UTC);
        let food = vec![food_at(at, u32::MAX), food_at(at, u32::MAX)];
        let water = vec![water_at(at, u32::MAX), water_at(at, u32::MAX)];
        let s = daily_summary(&food, &water, &[], &DailyGoals::default(), at);
        assert_eq!(s.today_calories, 2 * u64::from(u32::MAX));
        assert_eq!(s.today_water, 2 * u64::from(u32::MAX));
        assert_eq!(s.breakdown.nutrition, 100);
        assert_eq!(s.breakdown.hydration, 100);
        assert_eq!(s.breakdown.score, 50);
    }

    #[test]
    fn daily_summary_without_data_is_zero() {
        let s = daily_summary(&[], &[], &[], &DailyGoals::default(), datetime!(2024-01-01 00:00 UTC));
        assert_eq!(s.breakdown.score, 0);
        assert_eq!(s.today_steps, 0);
        assert_eq!(s.last_heart_rate, None);
        assert_eq!(s.calorie_goal, 2000);
    }
}
