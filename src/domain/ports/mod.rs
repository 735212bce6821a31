pub mod analysis_provider;
pub mod delivery;
pub mod news_source;
