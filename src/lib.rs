pub mod member;
pub mod summary;
