pub mod feedback;
pub mod interview;
