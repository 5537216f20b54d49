pub mod category;
pub mod dashboard;
pub mod feedback;
pub mod status;
