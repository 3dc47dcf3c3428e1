mod client;
mod types;

pub use client::OllamaClient;
pub use types::{GenerateOptions, GenerateRequest};
