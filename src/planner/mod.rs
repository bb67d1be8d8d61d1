pub mod calculations;
pub mod constants;
pub mod schedule;

pub use calculations::{calculate_carb_rate, calculate_required_carbs, calculate_total_carbs};
pub use constants::*;
pub use schedule::{choose_product, generate_plan, ScheduleConfig};
