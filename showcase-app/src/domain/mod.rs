mod backend_status;
mod link_selection;
mod message;
mod poster;
mod report;
mod scraped_page;
mod text;
mod transcript;

pub use backend_status::BackendStatus;
pub use link_selection::{LinkSelection, SelectedLink};
pub use message::{ChatMessage, Role};
pub use poster::{ImageFormat, Palette, PosterImage, UnknownChoice, VisualStyle};
pub use report::Report;
pub use scraped_page::{ScrapedPage, NO_TITLE_PLACEHOLDER};
pub use text::truncate_chars;
pub use transcript::{DebateTranscript, Speaker, Utterance};
