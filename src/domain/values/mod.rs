pub mod market_category;
pub mod send_window;
pub mod sentiment;
