use crate::domain::{ImageFormat, Palette, PosterImage, VisualStyle};
use crate::infrastructure::hosted::HostedClient;
use crate::infrastructure::security::InputSanitizer;
use crate::prompt::{poster_caption, poster_prompt};
use showcase_errors::AppError;

const IMAGE_MODEL: &str = "gpt-image-1";
const IMAGE_SIZE: &str = "1024x1024";

pub struct GeneratePoster {
    hosted: HostedClient,
}

impl GeneratePoster {
    pub fn new(hosted: HostedClient) -> Self {
        Self { hosted }
    }

    pub async fn execute(&self, city: &str, style: &str, palette: &str) -> Result<PosterImage, AppError> {
        self.hosted.ensure_credential()?;

        let city = InputSanitizer::require_text("city", city)?;
        let style: VisualStyle = style.parse()?;
        let palette: Palette = palette.parse()?;

        tracing::info!("Rendering poster for {} ({}, {})", city, style, palette);

        let bytes = self
            .hosted
            .generate_image(IMAGE_MODEL, poster_prompt(&city, style, palette), IMAGE_SIZE)
            .await?;

        let format = ImageFormat::detect(&bytes).ok_or_else(|| {
            AppError::ImageDecodeFailed("unrecognized image format".to_string())
        })?;

        Ok(PosterImage {
            bytes,
            format,
            caption: poster_caption(&city, style, palette),
        })
    }
}
