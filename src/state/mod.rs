mod manager;
mod persistence;

pub use manager::SessionManager;
pub use persistence::{load_products, load_sessions, save_sessions};
