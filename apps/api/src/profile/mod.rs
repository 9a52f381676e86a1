// Profile Store: the structured dataset, its keyword index and the CRUD surface over it.

pub mod analytics;
pub mod handlers;
pub mod path;
pub mod seed;
pub mod store;
