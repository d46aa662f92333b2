use time::OffsetDateTime;
use tracing::warn;
use uuid::Uuid;

use crate::metrics::dto::{CreateMetricRequest, MetricsResponse};
use crate::metrics::repo_types::HealthMetric;

pub const RECENT_LIMIT: usize = 10;

pub(crate) fn new_entry(req: CreateMetricRequest, now: OffsetDateTime) -> HealthMetric {
    let (systolic, diastolic) = match (req.blood_pressure_systolic, req.blood_pressure_diastolic) {
        (Some(s), Some(d)) => (Some(s), Some(d)),
        (None, None) => (None, None),
        (s, d) => {
            warn!(systolic = ?s, diastolic = ?d, "incomplete blood pressure reading dropped");
            (None, None)
        }
    };
    HealthMetric {
        id: Uuid::new_v4(),
        heart_rate: req.heart_rate,
        blood_pressure_systolic: systolic,
        blood_pressure_diastolic: diastolic,
        weight: req.weight,
        height: req.height,
        sleep_hours: req.sleep_hours,
        steps: req.steps,
        logged_at: now,
        created_at: now,
    }
}

pub(crate) fn recent_view(all: Vec<HealthMetric>) -> MetricsResponse {
    let recent: Vec<HealthMetric> = all.into_iter().rev().take(RECENT_LIMIT).collect();
    MetricsResponse {
        latest: recent.first().cloned(),
        recent,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    #[test]
    fn blood_pressure_is_kept_only_as_a_pair() {
        let now = datetime!(2024-05-01 07:00 UTC);
        let both = new_entry(
            CreateMetricRequest {
                blood_pressure_systolic: Some(120),
                blood_pressure_diastolic: Some(80),
                ..Default::default()
            },
            now,
        );
        assert_eq!(both.blood_pressure_systolic, Some(120));
        assert_eq!(both.blood_pressure_diastolic, Some(80));

        let half = new_entry(
            CreateMetricRequest {
                blood_pressure_systolic: Some(120),
                heart_rate: Some(70),
                ..Default::default()
            },
            now,
        );
        assert_eq!(half.blood_pressure_systolic, None);
        assert_eq!(half.blood_pressure_diastolic, None);
        assert_eq!(half.heart_rate, Some(70));
        assert_eq!(half.steps, 0);
    }

    #[test]
    fn recent_view_is_newest_first_and_capped() {
        let now = datetime!(2024-05-01 07:00 UTC);
        let all: Vec<HealthMetric> = (0..15)
            .map(|steps| {
                new_entry(
                    CreateMetricRequest {
                        steps,
                        ..Default::default()
                    },
                    now,
                )
            })
            .collect();
        let view = recent_view(all);
        assert_eq!(view.recent.len(), RECENT_LIMIT);
        assert_eq!(view.recent[0].steps, 14);
        assert_eq!(view.latest.map(|m| m.steps), Some(14));
    }

    #[test]
    fn recent_view_of_nothing() {
        let view = recent_view(Vec::new());
        assert!(view.latest.is_none());
        assert!(view.recent.is_empty());
    }
}
