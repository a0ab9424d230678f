pub mod review;
pub mod validation;
