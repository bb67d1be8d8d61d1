use crate::models::FuelPlanItem;

const MINUTES_PER_HOUR: f64 = 60.0;

/// Sum of `carbs_total` across the plan. Empty plans total 0.
///
/// Values are not validated; negative entries reduce the total.
pub fn calculate_total_carbs(plan: &[FuelPlanItem]) -> f64 {
    plan.iter().map(|item| item.carbs_total).sum()
}

/// Convert grams over a duration into grams per hour.
///
/// `duration_minutes` must be non-zero; zero yields an infinite or NaN rate.
pub fn calculate_carb_rate(total_carbs: f64, duration_minutes: f64) -> f64 {
    (total_carbs / duration_minutes) * MINUTES_PER_HOUR
}

/// Grams needed for a session of `duration_minutes` at `target_g_per_hour`.
pub fn calculate_required_carbs(duration_minutes: f64, target_g_per_hour: f64) -> f64 {
    (duration_minutes / MINUTES_PER_HOUR) * target_g_per_hour
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(carbs: f64) -> FuelPlanItem {
        FuelPlanItem::new(1, "Gel".to_string(), 1.0, 0, carbs)
    }

    #[test]
    fn test_total_carbs_empty() {
        assert_eq!(calculate_total_carbs(&[]), 0.0);
    }

    #[test]
    fn test_total_carbs_sums_items() {
        let plan = vec![item(30.0), item(45.0)];
        assert!((calculate_total_carbs(&plan) - 75.0).abs() < 0.001);
    }

    #[test]
    fn test_total_carbs_passes_negatives_through() {
        let plan = vec![item(30.0), item(-10.0)];
        assert!((calculate_total_carbs(&plan) - 20.0).abs() < 0.001);
    }

    #[test]
    fn test_carb_rate() {
        assert!((calculate_carb_rate(90.0, 60.0) - 90.0).abs() < 0.001);
        assert!((calculate_carb_rate(45.0, 30.0) - 90.0).abs() < 0.001);
    }

    #[test]
    fn test_carb_rate_zero_duration_unguarded() {
        assert!(calculate_carb_rate(90.0, 0.0).is_infinite());
        assert!(calculate_carb_rate(0.0, 0.0).is_nan());
    }

    #[test]
    fn test_required_carbs() {
        assert!((calculate_required_carbs(120.0, 60.0) - 120.0).abs() < 0.001);
        assert!((calculate_required_carbs(45.0, 80.0) - 60.0).abs() < 0.001);
    }
}
