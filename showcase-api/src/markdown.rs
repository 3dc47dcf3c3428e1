//! Just enough markdown for model output: headings, bullet lists, fenced
//! code, bold and inline code. Everything else is an escaped paragraph.

pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

pub fn render_markdown(text: &str) -> String {
    let mut html = String::new();
    let mut in_list = false;
    let mut in_code = false;

    for raw in text.lines() {
        if raw.trim_start().starts_with("```") {
            close_list(&mut html, &mut in_list);
            html.push_str(if in_code { "</code></pre>" } else { "<pre><code>" });
            in_code = !in_code;
            continue;
        }
        if in_code {
            html.push_str(&escape_html(raw));
            html.push('\n');
            continue;
        }

        let line = raw.trim();
        if line.is_empty() {
            close_list(&mut html, &mut in_list);
            continue;
        }

        if let Some(item) = line.strip_prefix("- ").or_else(|| line.strip_prefix("* ")) {
            if !in_list {
                html.push_str("<ul>");
                in_list = true;
            }
            html.push_str(&format!("<li>{}</li>", inline(item)));
            continue;
        }

        close_list(&mut html, &mut in_list);
        let block = if let Some(heading) = line.strip_prefix("### ") {
            format!("<h4>{}</h4>", inline(heading))
        } else if let Some(heading) = line.strip_prefix("## ") {
            format!("<h3>{}</h3>", inline(heading))
        } else if let Some(heading) = line.strip_prefix("# ") {
            format!("<h2>{}</h2>", inline(heading))
        } else if line == "---" {
            "<hr>".to_string()
        } else {
            format!("<p>{}</p>", inline(line))
        };
        html.push_str(&block);
    }

    close_list(&mut html, &mut in_list);
    if in_code {
        html.push_str("</code></pre>");
    }
    html
}

fn close_list(html: &mut String, in_list: &mut bool) {
    if *in_list {
        html.push_str("</ul>");
        *in_list = false;
    }
}

fn inline(text: &str) -> String {
    let escaped = escape_html(text);
    pair_markers(&pair_markers(&escaped, "**", "strong"), "`", "code")
}

/// Turns markers into alternating open/close tags. An unmatched trailing
/// marker is left as text.
fn pair_markers(text: &str, marker: &str, tag: &str) -> String {
    let parts: Vec<&str> = text.split(marker).collect();
    let paired = (parts.len() - 1) / 2 * 2;

    let mut result = String::with_capacity(text.len());
    for (i, part) in parts.iter().enumerate() {
        if i > 0 {
            if i > paired {
                result.push_str(marker);
            } else if i % 2 == 1 {
                result.push_str(&format!("<{}>", tag));
            } else {
                result.push_str(&format!("</{}>", tag));
            }
        }
        result.push_str(part);
    }
    result
}
