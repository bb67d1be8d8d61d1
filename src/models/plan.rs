use serde::{Deserialize, Serialize};

use crate::models::NextIntake;
use crate::planner::calculations::calculate_total_carbs;

/// A single planned intake in a fuel plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FuelPlanItem {
    /// Catalog id of the fuel product.
    pub fuel_product_id: i64,

    /// Display name of the product.
    pub product_name: String,

    /// Number of servings.
    pub quantity: f64,

    /// Minute offset from session start at which the intake is planned.
    pub timing_minutes: u32,

    /// Total carbohydrate grams contributed by this item.
    pub carbs_total: f64,
}

impl FuelPlanItem {
    pub fn new(
        fuel_product_id: i64,
        product_name: String,
        quantity: f64,
        timing_minutes: u32,
        carbs_total: f64,
    ) -> Self {
        Self {
            fuel_product_id,
            product_name,
            quantity,
            timing_minutes,
            carbs_total,
        }
    }
}

/// Ordered sequence of planned intakes.
///
/// Order is planning order. Timings are neither unique nor monotonic.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FuelPlan {
    items: Vec<FuelPlanItem>,
}

impl FuelPlan {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_items(items: Vec<FuelPlanItem>) -> Self {
        Self { items }
    }

    pub fn push(&mut self, item: FuelPlanItem) {
        self.items.push(item);
    }

    pub fn items(&self) -> &[FuelPlanItem] {
        &self.items
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FuelPlanItem> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Total carbohydrate grams across all items.
    pub fn total_carbs(&self) -> f64 {
        calculate_total_carbs(&self.items)
    }

    /// Copy of the plan ordered by timing. Items with equal timing keep planning order.
    pub fn sorted_by_timing(&self) -> FuelPlan {
        let mut items = self.items.clone();
        items.sort_by_key(|item| item.timing_minutes);
        Self { items }
    }

    /// The earliest-timed item whose index is not in `taken`, however late it is.
    ///
    /// Equal timings resolve to the lower index.
    pub fn next_untaken(&self, taken: &[usize]) -> Option<NextIntake> {
        self.items
            .iter()
            .enumerate()
            .filter(|(i, _)| !taken.contains(i))
            .min_by_key(|(_, item)| item.timing_minutes)
            .map(|(_, item)| NextIntake::from_item(item))
    }
}

impl<'a> IntoIterator for &'a FuelPlan {
    type Item = &'a FuelPlanItem;
    type IntoIter = std::slice::Iter<'a, FuelPlanItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl From<Vec<FuelPlanItem>> for FuelPlan {
    fn from(items: Vec<FuelPlanItem>) -> Self {
        Self::from_items(items)
    }
}
