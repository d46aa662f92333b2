use time::OffsetDateTime;
use uuid::Uuid;

use crate::dashboard::repo_types::WellnessScoreRecord;
use crate::food::repo_types::FoodEntry;
use crate::goals::current_goals;
use crate::metrics::repo_types::HealthMetric;
use crate::scoring::{daily_summary, DailySummary, WellnessBreakdown};
use crate::store::{Repository, FOOD_LOGS, HEALTH_METRICS, WATER_LOGS};
use crate::water::repo_types::WaterEntry;

/// Reads every collection plus the goals and summarizes the day of `reference`.
pub(crate) async fn load_summary(repo: &Repository, reference: OffsetDateTime) -> DailySummary {
    let food: Vec<FoodEntry> = repo.list(FOOD_LOGS).await;
    let water: Vec<WaterEntry> = repo.list(WATER_LOGS).await;
    let metrics: Vec<HealthMetric> = repo.list(HEALTH_METRICS).await;
    let goals = current_goals(repo).await;
    daily_summary(&food, &water, &metrics, &goals, reference)
}

pub(crate) fn snapshot(b: WellnessBreakdown, now: OffsetDateTime) -> WellnessScoreRecord {
    WellnessScoreRecord {
        id: Uuid::new_v4(),
        score: b.score,
        nutrition_score: b.nutrition,
        hydration_score: b.hydration,
        fitness_score: b.fitness,
        sleep_score: b.sleep,
        calculated_at: now,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::goals::repo_types::DailyGoals;
    use crate::store::{MemoryStore, DAILY_GOALS};
    use std::sync::Arc;
    use time::macros::datetime;

    #[tokio::test]
    async fn summary_reads_goals_and_logs_from_the_store() {
        let repo = Repository::new(Arc::new(MemoryStore::new()));
        let now = datetime!(2024-06-01 10:00 UTC);
        repo.set_singleton(
            DAILY_GOALS,
            &DailyGoals {
                water_goal_ml: 1000,
                ..DailyGoals::default()
            },
        )
        .await
        .unwrap();
        repo.append(
            WATER_LOGS,
            WaterEntry {
                id: Uuid::new_v4(),
                amount_ml: 1000,
                logged_at: now,
                created_at: now,
            },
        )
        .await
        .unwrap();

        let s = load_summary(&repo, now).await;
        assert_eq!(s.water_goal, 1000);
        assert_eq!(s.breakdown.hydration, 100);
        assert_eq!(s.breakdown.score, 25);
    }

    #[test]
    fn snapshot_copies_breakdown() {
        let b = WellnessBreakdown {
            nutrition: 10,
            hydration: 20,
            fitness: 30,
            sleep: 40,
            score: 25,
        };
        let now = datetime!(2024-06-01 10:00 UTC);
        let r = snapshot(b, now);
        assert_eq!(
            (r.score, r.nutrition_score, r.hydration_score, r.fitness_score, r.sleep_score),
            (25, 10, 20, 30, 40)
        );
        assert_eq!(r.calculated_at, now);
    }
}
