use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind}: {value}")]
pub struct UnknownChoice {
    pub kind: &'static str,
    pub value: String,
}

impl From<UnknownChoice> for showcase_errors::AppError {
    fn from(error: UnknownChoice) -> Self {
        Self::InvalidInput(error.to_string())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Palette {
    AiClean,
    AiPremiumPastel,
    AiHuman,
}

impl Palette {
    pub const ALL: [Palette; 3] = [Self::AiClean, Self::AiPremiumPastel, Self::AiHuman];

    pub fn name(&self) -> &'static str {
        match self {
            Self::AiClean => "AI Clean",
            Self::AiPremiumPastel => "AI Premium Pastel",
            Self::AiHuman => "AI Human",
        }
    }

    pub fn primary(&self) -> &'static str {
        match self {
            Self::AiClean => "#6FA8FF",
            Self::AiPremiumPastel => "#8FAADC",
            Self::AiHuman => "#9EC5FF",
        }
    }

    pub fn secondary(&self) -> &'static str {
        match self {
            Self::AiClean => "#7DE3D1",
            Self::AiPremiumPastel => "#A8E6CF",
            Self::AiHuman => "#BEEAD9",
        }
    }
}

impl fmt::Display for Palette {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Palette {
    type Err = UnknownChoice;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|p| p.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownChoice {
                kind: "palette",
                value: s.to_string(),
            })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VisualStyle {
    PopArt,
    Renaissance,
    OldSchool,
    Cartoon,
    Photorealistic,
}

impl VisualStyle {
    pub const ALL: [VisualStyle; 5] = [
        Self::PopArt,
        Self::Renaissance,
        Self::OldSchool,
        Self::Cartoon,
        Self::Photorealistic,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::PopArt => "Pop-art",
            Self::Renaissance => "Renaissance",
            Self::OldSchool => "Old-school",
            Self::Cartoon => "Cartoon",
            Self::Photorealistic => "Photorealistic",
        }
    }
}

impl fmt::Display for VisualStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for VisualStyle {
    type Err = UnknownChoice;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|v| v.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownChoice {
                kind: "visual style",
                value: s.to_string(),
            })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ImageFormat {
    Png,
    Jpeg,
    Webp,
}

impl ImageFormat {
    /// Sniffs the format from the leading magic bytes.
    pub fn detect(bytes: &[u8]) -> Option<Self> {
        if bytes.starts_with(&[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A]) {
            Some(Self::Png)
        } else if bytes.starts_with(&[0xFF, 0xD8, 0xFF]) {
            Some(Self::Jpeg)
        } else if bytes.len() >= 12 && &bytes[..4] == b"RIFF" && &bytes[8..12] == b"WEBP" {
            Some(Self::Webp)
        } else {
            None
        }
    }

    pub fn mime_type(&self) -> &'static str {
        match self {
            Self::Png => "image/png",
            Self::Jpeg => "image/jpeg",
            Self::Webp => "image/webp",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PosterImage {
    pub bytes: Vec<u8>,
    pub format: ImageFormat,
    pub caption: String,
}
