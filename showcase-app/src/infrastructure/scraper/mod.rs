mod website_scraper;

pub use website_scraper::{WebsiteScraper, SCRAPER_USER_AGENT};
