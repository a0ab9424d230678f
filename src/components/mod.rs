pub mod field_validator;
pub mod owner_controls;
pub mod review_card;
pub mod reviews_list;
