pub mod feedback;
pub mod rating;
