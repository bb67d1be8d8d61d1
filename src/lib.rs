pub mod cli;
pub mod clock;
pub mod error;
pub mod interface;
pub mod logging;
pub mod models;
pub mod planner;
pub mod state;
pub mod utils;

pub use error::{GiError, Result};
pub use models::{FuelPlan, FuelPlanItem, FuelProduct, NextIntake, Session};
