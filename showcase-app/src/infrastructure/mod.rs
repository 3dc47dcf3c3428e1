pub mod hosted;
pub mod ollama;
pub mod scraper;
pub mod security;
