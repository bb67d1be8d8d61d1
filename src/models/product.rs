use serde::{Deserialize, Serialize};

use crate::models::FuelPlanItem;

/// A fuel product from the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FuelProduct {
    pub id: i64,

    pub name: String,

    /// Carbohydrate grams in one serving.
    pub carbs_per_serving: f64,

    /// Short serving description, e.g. "gel" or "500ml bottle".
    #[serde(default)]
    pub serving_label: String,
}

impl FuelProduct {
    /// Basic validation: named product with non-negative carbs.
    pub fn is_valid(&self) -> bool {
        !self.name.trim().is_empty()
            && self.carbs_per_serving.is_finite()
            && self.carbs_per_serving >= 0.0
    }

    /// Build a plan item for `quantity` servings at `timing_minutes`.
    pub fn plan_item(&self, quantity: f64, timing_minutes: u32) -> FuelPlanItem {
        FuelPlanItem::new(
            self.id,
            self.name.clone(),
            quantity,
            timing_minutes,
            self.carbs_per_serving * quantity,
        )
    }

    /// Canonical key for name lookups (lowercase name).
    pub fn key(&self) -> String {
        self.name.to_lowercase()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_product() -> FuelProduct {
        FuelProduct {
            id: 3,
            name: "Energy Gel".to_string(),
            carbs_per_serving: 22.0,
            serving_label: "gel".to_string(),
        }
    }

    #[test]
    fn test_plan_item() {
        let item = sample_product().plan_item(1.5, 30);
        assert_eq!(item.fuel_product_id, 3);
        assert_eq!(item.product_name, "Energy Gel");
        assert_eq!(item.timing_minutes, 30);
        assert!((item.carbs_total - 33.0).abs() < 0.001);
    }

    #[test]
    fn test_is_valid() {
        assert!(sample_product().is_valid());

        let mut negative = sample_product();
        negative.carbs_per_serving = -1.0;
        assert!(!negative.is_valid());

        let mut unnamed = sample_product();
        unnamed.name = "  ".to_string();
        assert!(!unnamed.is_valid());
    }
}
