use time::OffsetDateTime;
use uuid::Uuid;

use crate::scoring::{category_percentage, filter_today, sum_field};
use crate::water::dto::WaterDayResponse;
use crate::water::repo_types::WaterEntry;

pub const QUICK_AMOUNTS_ML: [u32; 4] = [250, 500, 750, 1000];
pub const GLASS_ML: u64 = 250;
pub const BOTTLE_ML: f64 = 500.0;

pub(crate) fn new_entry(amount_ml: u32, now: OffsetDateTime) -> WaterEntry {
    WaterEntry {
        id: Uuid::new_v4(),
        amount_ml,
        logged_at: now,
        created_at: now,
    }
}

pub(crate) fn day_view(all: &[WaterEntry], goal_ml: u32, reference: OffsetDateTime) -> WaterDayResponse {
    let today = filter_today(all, reference);
    let total_ml: u64 = sum_field(today.iter().copied(), |w| u64::from(w.amount_ml));
    WaterDayResponse {
        date: reference.date(),
        entries: today.into_iter().rev().cloned().collect(),
        total_ml,
        goal_ml,
        remaining_ml: u64::from(goal_ml).saturating_sub(total_ml),
        percentage: category_percentage(total_ml as f64, goal_ml as f64),
        glasses: total_ml / GLASS_ML,
        bottles: (total_ml as f64 / BOTTLE_ML * 10.0).round() / 10.0,
        quick_amounts: QUICK_AMOUNTS_ML,
    }
}
