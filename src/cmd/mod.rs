pub mod compare;
pub mod estimate;
