use crate::markdown::{escape_html, render_markdown};
use base64::Engine;
use showcase_app::domain::{PosterImage, Report};
use showcase_errors::AppError;

pub const CSS: &str = r#"
:root {
    --base: #faf4ed;
    --surface: #fffaf3;
    --overlay: #f2e9e1;
    --muted: #9893a5;
    --subtle: #797593;
    --text: #575279;
    --love: #b4637a;
    --gold: #ea9d34;
    --pine: #286983;
    --foam: #56949f;
}
* { box-sizing: border-box; margin: 0; padding: 0; }
body {
    font-family: 'Inter', -apple-system, sans-serif;
    background: var(--base);
    color: var(--text);
    min-height: 100vh;
}
.container { max-width: 960px; margin: 0 auto; padding: 1.5rem; }
.hero { text-align: center; padding: 3rem 0 1.5rem; }
.hero__title { font-size: clamp(2rem, 5vw, 3rem); color: var(--pine); font-weight: 800; margin-bottom: 0.75rem; }
.hero__subtitle { color: var(--subtle); font-size: 1.1rem; max-width: 560px; margin: 0 auto; }
.status { display: flex; justify-content: center; gap: 0.75rem; list-style: none; margin-top: 1.5rem; flex-wrap: wrap; }
.status__badge { padding: 0.35rem 0.75rem; border-radius: 999px; font-size: 0.85rem; display: flex; gap: 0.4rem; }
.status__badge--ok { background: #e0f0ee; color: var(--pine); }
.status__badge--off { background: #fce8ec; color: var(--love); }
.status__label { font-weight: 700; }
.status__loading { color: var(--muted); margin-top: 1.5rem; }
.demos { display: grid; grid-template-columns: repeat(auto-fit, minmax(280px, 1fr)); gap: 1.25rem; }
.demo { background: var(--surface); border: 2px solid var(--overlay); border-radius: 12px; padding: 1.25rem; }
.demo__title { color: var(--love); font-size: 1.2rem; margin-bottom: 0.4rem; }
.demo__description { color: var(--subtle); font-size: 0.95rem; margin-bottom: 1rem; }
.demo__form { display: flex; flex-direction: column; gap: 0.75rem; }
.demo__button {
    padding: 0.75rem 1.25rem; background: var(--pine); color: var(--base);
    border: none; border-radius: 8px; font-size: 1rem; font-weight: 600; cursor: pointer;
}
.demo__button:hover { opacity: 0.9; }
.field { display: flex; flex-direction: column; gap: 0.3rem; }
.field--inline { flex-direction: row; align-items: center; gap: 0.5rem; }
.field__label { font-size: 0.85rem; font-weight: 600; }
.field__input {
    padding: 0.6rem 0.8rem; border: 2px solid var(--overlay); border-radius: 8px;
    background: var(--base); color: var(--text); font-size: 0.95rem; font-family: inherit;
}
.field__input:focus { outline: none; border-color: var(--pine); }
.report {
    background: var(--surface); border: 2px solid var(--overlay);
    border-radius: 12px; padding: 1.5rem; margin: 2rem 0;
}
.report__title { color: var(--love); font-size: 1.4rem; margin-bottom: 0.25rem; }
.report__meta { color: var(--muted); font-size: 0.85rem; padding-bottom: 0.75rem; margin-bottom: 1rem; border-bottom: 2px solid var(--overlay); }
.report__content { line-height: 1.8; font-size: 1.05rem; }
.report__content p { margin-bottom: 1rem; }
.report__content strong { font-weight: 700; color: var(--love); }
.report__content h2 { font-size: 1.3rem; color: var(--pine); margin: 1rem 0 0.5rem; }
.report__content h3 { font-size: 1.15rem; color: var(--pine); margin: 1rem 0 0.5rem; }
.report__content h4 { font-size: 1.05rem; color: var(--subtle); margin: 0.75rem 0 0.5rem; }
.report__content ul { margin: 0 0 1rem 1.5rem; }
.report__content li { margin-bottom: 0.5rem; }
.report__content pre { background: var(--overlay); padding: 0.75rem; border-radius: 8px; overflow-x: auto; margin-bottom: 1rem; }
.report__content hr { border: none; border-top: 2px solid var(--overlay); margin: 1rem 0; }
.report__image { width: 100%; border-radius: 8px; margin-bottom: 1rem; }
.report__status { color: var(--gold); font-style: italic; }
.report__actions { margin-top: 1.5rem; padding-top: 1rem; border-top: 2px solid var(--overlay); }
.report__back { padding: 0.75rem 1.5rem; background: var(--pine); color: var(--base); border-radius: 8px; font-weight: 600; text-decoration: none; display: inline-block; }
.error { background: #fce8ec; border: 2px solid var(--love); border-radius: 8px; padding: 1.25rem; margin: 2rem 0; }
.error__title { color: var(--love); font-weight: 700; margin-bottom: 0.5rem; }
.error__message { color: #8b3d4d; }
.error__detail { color: var(--subtle); font-size: 0.85rem; margin-top: 0.5rem; font-family: monospace; }
.error__retry { margin-top: 1rem; padding: 0.5rem 1rem; background: var(--love); color: var(--base); border-radius: 4px; text-decoration: none; display: inline-block; }
"#;

const FAVICON: &str = "data:image/svg+xml,<svg xmlns='http://www.w3.org/2000/svg' viewBox='0 0 100 100'><text y='.9em' font-size='90'>🤖</text></svg>";

fn document(title: &str, body: &str, script: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>{title} | LLM Showcase</title>
    <link rel="icon" href="{FAVICON}">
    <style>{CSS}</style>
</head>
<body>
    <main class="container">
{body}
    </main>
    {script}
</body>
</html>"#,
        title = escape_html(title),
        FAVICON = FAVICON,
        CSS = CSS,
        body = body,
        script = script,
    )
}

fn report_card(title: &str, meta: &str, content_html: &str, content_id: &str) -> String {
    format!(
        r#"        <div class="report">
            <h1 class="report__title">{title}</h1>
            <p class="report__meta">{meta}</p>
            <div class="report__content" id="{content_id}">{content_html}</div>
            <div class="report__actions">
                <a href="/" class="report__back">Back to demos</a>
            </div>
        </div>"#,
        title = escape_html(title),
        meta = meta,
        content_html = content_html,
        content_id = content_id,
    )
}

pub fn render_report_page(report: &Report) -> String {
    let meta = format!(
        "Generated {}",
        report.generated_at.format("%Y-%m-%d %H:%M:%S UTC")
    );
    let body = report_card(&report.title, &meta, &render_markdown(&report.markdown), "report");
    document(&report.title, &body, "")
}

pub fn render_poster_page(poster: &PosterImage) -> String {
    let encoded = base64::engine::general_purpose::STANDARD.encode(&poster.bytes);
    let content = format!(
        r#"<img class="report__image" alt="Generated poster" src="data:{};base64,{}">{}"#,
        poster.format.mime_type(),
        encoded,
        render_markdown(&poster.caption)
    );
    let body = report_card("Tourism Poster", "Rendered by gpt-image-1", &content, "poster");
    document("Tourism Poster", &body, "")
}

/// The page itself is static; content arrives over `stream_url` as
/// `snapshot` events carrying rendered HTML.
pub fn render_brochure_page(company_name: &str, stream_url: &str) -> String {
    let title = format!("Brochure: {}", company_name);
    let body = report_card(
        &title,
        r#"<span class="report__status" id="brochure-status">Reading the website...</span>"#,
        "",
        "brochure",
    );
    let script = format!(
        r#"<script>
    (function() {{
        var target = document.getElementById('brochure');
        var status = document.getElementById('brochure-status');
        var source = new EventSource('{stream_url}');
        source.addEventListener('snapshot', function(e) {{
            status.textContent = 'Writing...';
            target.innerHTML = e.data;
        }});
        source.addEventListener('done', function() {{
            status.textContent = 'Done';
            source.close();
        }});
        source.addEventListener('failure', function(e) {{
            status.textContent = 'Failed';
            target.innerHTML = e.data;
            source.close();
        }});
        source.onerror = function() {{
            if (source.readyState !== EventSource.CLOSED) {{
                status.textContent = 'Connection lost';
                source.close();
            }}
        }};
    }})();
    </script>"#,
        stream_url = stream_url,
    );
    document(&title, &body, &script)
}

/// Inline error markup, shared by error pages and the brochure stream.
pub fn render_error(error: &AppError) -> String {
    format!(
        r#"<div class="error">
            <p class="error__title">Something went wrong</p>
            <p class="error__message">{}</p>
            <p class="error__detail">{}</p>
            <a href="/" class="error__retry">Try again</a>
        </div>"#,
        escape_html(error.user_message()),
        escape_html(&error.to_string())
    )
}

pub fn render_error_page(error: &AppError) -> String {
    document("Error", &render_error(error), "")
}

#[cfg(test)]
mod tests {
    use super::*;
    use showcase_app::domain::ImageFormat;

    #[test]
    fn test_report_page_renders_markdown() {
        let report = Report::new("AI Debate", "# AI Debate Transcript\n**Topic:** <tabs>".to_string());
        let page = render_report_page(&report);

        assert!(page.contains("<title>AI Debate | LLM Showcase</title>"));
        assert!(page.contains("<h2>AI Debate Transcript</h2>"));
        assert!(page.contains("<strong>Topic:</strong> &lt;tabs&gt;"));
    }

    #[test]
    fn test_poster_page_embeds_data_uri() {
        let poster = PosterImage {
            bytes: vec![0xFF, 0xD8, 0xFF],
            format: ImageFormat::Jpeg,
            caption: "### Portfolio Render\n**City:** Kyoto".to_string(),
        };
        let page = render_poster_page(&poster);

        assert!(page.contains(r#"src="data:image/jpeg;base64,/9j/""#));
        assert!(page.contains("<h4>Portfolio Render</h4>"));
    }

    #[test]
    fn test_error_page_shows_variable_name() {
        let page = render_error_page(&AppError::MissingCredential("GEMINI_API_KEY".to_string()));
        assert!(page.contains("GEMINI_API_KEY is missing"));
    }

    #[test]
    fn test_inline_styles_cover_ui_components() {
        for class in [".hero__title", ".status__badge", ".demo__form", ".field__input", ".error__message"] {
            assert!(CSS.contains(class), "missing {class}");
        }
    }
}
