mod client;
mod sse;
mod types;

pub use client::{CompletionStream, HostedClient};
pub use sse::{SseBuffer, SseEvent};
