use serde::{Deserialize, Serialize};

use crate::models::FuelPlanItem;

/// Read-only projection of the upcoming intake, used for live display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NextIntake {
    pub product_name: String,
    pub timing_minute: u32,
    pub carbs_per_serving: f64,
    pub fuel_product_id: i64,
}

impl NextIntake {
    /// Project a plan item. Non-positive quantities report the item total as one serving.
    pub fn from_item(item: &FuelPlanItem) -> Self {
        let carbs_per_serving = if item.quantity > 0.0 {
            item.carbs_total / item.quantity
        } else {
            item.carbs_total
        };

        Self {
            product_name: item.product_name.clone(),
            timing_minute: item.timing_minutes,
            carbs_per_serving,
            fuel_product_id: item.fuel_product_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_carbs_per_serving() {
        let item = FuelPlanItem::new(7, "Gel".to_string(), 2.0, 45, 50.0);
        let next = NextIntake::from_item(&item);
        assert_eq!(next.fuel_product_id, 7);
        assert_eq!(next.timing_minute, 45);
        assert!((next.carbs_per_serving - 25.0).abs() < 0.001);
    }

    #[test]
    fn test_zero_quantity_keeps_total() {
        let item = FuelPlanItem::new(7, "Gel".to_string(), 0.0, 45, 50.0);
        assert!((NextIntake::from_item(&item).carbs_per_serving - 50.0).abs() < 0.001);
    }
}
