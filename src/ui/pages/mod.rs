//! Application pages
//!
//! - Landing page (marketing content, or the dashboard when signed in)
//! - Dashboard
//! - Not found

mod dashboard;
mod landing;
mod not_found;

pub use dashboard::{DashboardPage, UserDashboard};
pub use landing::LandingPage;
pub use not_found::NotFoundPage;
