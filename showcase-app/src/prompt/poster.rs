use crate::domain::{Palette, VisualStyle};

pub fn poster_prompt(city: &str, style: VisualStyle, palette: Palette) -> String {
    format!(
        "Create a premium tourism poster for {}. \
         Use a {} visual style, clean SaaS marketing composition, \
         dominant colors close to {} and {}, \
         soft pastel atmosphere, high detail landmarks, and strong depth.",
        city,
        style,
        palette.primary(),
        palette.secondary()
    )
}

pub fn poster_caption(city: &str, style: VisualStyle, palette: Palette) -> String {
    format!(
        "### Portfolio Render\n**City:** {}  \n**Style:** {}  \n**Palette:** {}",
        city, style, palette
    )
}
