//! Supplier dashboard: submission status, overall score and per-category
//! rating progress.

pub mod model;
pub mod page;

pub use page::SupplierDashboard;
