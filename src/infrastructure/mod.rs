pub mod file_sink;
pub mod gemini;
pub mod google_news;
pub mod smtp;
