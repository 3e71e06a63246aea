pub mod notes;
pub mod review;
