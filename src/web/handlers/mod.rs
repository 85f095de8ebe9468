pub mod categories;
pub mod hashtags;
