pub mod analyze;
pub mod contract;
pub mod pipeline;
pub mod render;
