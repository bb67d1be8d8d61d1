use tracing::{debug, warn};

use crate::models::{FuelPlan, FuelProduct};
use crate::planner::calculations::calculate_required_carbs;
use crate::planner::constants::*;

/// Parameters for generating a fuel plan.
#[derive(Debug, Clone)]
pub struct ScheduleConfig {
    pub duration_minutes: u32,
    pub target_carbs_per_hour: f64,
    pub interval_minutes: u32,
    pub first_intake_minutes: u32,
}

impl ScheduleConfig {
    pub fn new(duration_minutes: u32, target_carbs_per_hour: f64) -> Self {
        Self {
            duration_minutes,
            target_carbs_per_hour,
            ..Default::default()
        }
    }

    /// Intake slots: offsets strictly inside the session.
    fn slots(&self) -> impl Iterator<Item = u32> + '_ {
        let interval = self.interval_minutes.max(1);
        (0..MAX_INTAKES)
            .map(move |i| {
                self.first_intake_minutes
                    .saturating_add(interval.saturating_mul(i as u32))
            })
            .take_while(move |&t| t < self.duration_minutes)
    }
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            duration_minutes: 0,
            target_carbs_per_hour: DEFAULT_TARGET_CARBS_PER_HOUR,
            interval_minutes: DEFAULT_INTAKE_INTERVAL_MINUTES,
            first_intake_minutes: DEFAULT_FIRST_INTAKE_MINUTES,
        }
    }
}

/// Pick the product whose single serving is closest to `remaining` grams.
///
/// Ties go to the lower product id.
pub fn choose_product<'a>(products: &[&'a FuelProduct], remaining: f64) -> Option<&'a FuelProduct> {
    products.iter().copied().min_by(|a, b| {
        let da = (a.carbs_per_serving - remaining).abs();
        let db = (b.carbs_per_serving - remaining).abs();
        da.partial_cmp(&db)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then(a.id.cmp(&b.id))
    })
}

/// Generate a fuel plan that tracks the target rate across the session.
///
/// Each slot covers the time up to the next slot (or the session end). The
/// intake at a slot tops the plan up to the grams required by the end of
/// that slot, one serving at a time. Slots that are already covered are skipped.
pub fn generate_plan(products: &[FuelProduct], config: &ScheduleConfig) -> FuelPlan {
    let mut plan = FuelPlan::new();

    // Zero-carb products (water, electrolytes) never reduce the remaining requirement.
    let candidates: Vec<&FuelProduct> = products
        .iter()
        .filter(|p| p.is_valid() && p.carbs_per_serving > 0.0)
        .collect();
    if candidates.is_empty() {
        warn!("no valid fuel products; generated plan is empty");
        return plan;
    }

    if config.duration_minutes == 0 || config.target_carbs_per_hour <= 0.0 {
        return plan;
    }

    if config.interval_minutes == 0 {
        warn!("intake interval of 0 minutes treated as 1 minute");
    }

    let interval = config.interval_minutes.max(1);
    let mut planned = 0.0;

    for slot in config.slots() {
        let slot_end = slot.saturating_add(interval).min(config.duration_minutes);
        let required = calculate_required_carbs(slot_end as f64, config.target_carbs_per_hour);
        let remaining = required - planned;

        if remaining <= 0.0 {
            debug!(slot, required, planned, "slot already covered");
            continue;
        }

        let product = match choose_product(&candidates, remaining) {
            Some(p) => p,
            None => break,
        };

        debug!(
            slot,
            product = %product.name,
            carbs = product.carbs_per_serving,
            remaining,
            "scheduled intake"
        );

        planned += product.carbs_per_serving;
        plan.push(product.plan_item(1.0, slot));
    }

    plan
}
