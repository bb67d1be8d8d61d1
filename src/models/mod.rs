mod intake;
mod plan;
mod product;
mod session;

pub use intake::NextIntake;
pub use plan::{FuelPlan, FuelPlanItem};
pub use product::FuelProduct;
pub use session::Session;
