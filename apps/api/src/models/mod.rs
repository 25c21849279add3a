pub mod analytics;
pub mod assessment;
pub mod feedback;
pub mod user;
