pub mod article;
pub mod record;
