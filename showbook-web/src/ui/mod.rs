//! Server-rendered HTML pages
//!
//! Pages are plain HTML strings with inline CSS and vanilla JS. Every value
//! that came from the database or a form goes through [`escape`].

pub mod artists;
pub mod errors;
pub mod forms;
pub mod home;
pub mod shows;
pub mod venues;

use crate::flash::Flash;

const STYLE: &str = r#"
        body {
            font-family: system-ui, -apple-system, sans-serif;
            max-width: 960px;
            margin: 0 auto;
            padding: 0 20px 40px;
            line-height: 1.6;
            color: #333;
        }
        nav {
            display: flex;
            gap: 20px;
            align-items: center;
            padding: 16px 0;
            border-bottom: 2px solid #0066cc;
            margin-bottom: 20px;
        }
        nav a { color: #0066cc; text-decoration: none; font-weight: 600; }
        nav form { margin-left: auto; }
        h1 { color: #333; }
        .flash { padding: 10px 16px; border-radius: 4px; margin-bottom: 16px; }
        .flash-success { background: #e6f4ea; border: 1px solid #34a853; }
        .flash-danger { background: #fdecea; border: 1px solid #d93025; }
        .button {
            display: inline-block;
            padding: 8px 16px;
            background: #0066cc;
            color: white;
            text-decoration: none;
            border: none;
            border-radius: 4px;
            cursor: pointer;
            margin: 4px 4px 4px 0;
        }
        .button:hover { background: #0052a3; }
        .button-danger { background: #d93025; }
        .genre {
            display: inline-block;
            padding: 2px 8px;
            margin-right: 4px;
            border-radius: 10px;
            background: #eef3fb;
            font-size: 0.9em;
        }
        .item { display: flex; gap: 12px; align-items: center; margin: 8px 0; }
        .item img { width: 64px; height: 64px; object-fit: cover; border-radius: 4px; }
        .muted { color: #777; }
        label { display: block; margin-top: 12px; font-weight: 600; }
        input[type=text], input[type=tel], input[type=url], select, textarea {
            width: 100%;
            padding: 6px;
            box-sizing: border-box;
        }
"#;

/// Escape text for an HTML element body or a quoted attribute
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Wrap a page body in the shared document shell
pub fn layout(title: &str, flash: Option<&Flash>, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title} | Showbook</title>
    <style>{style}</style>
</head>
<body>
    <nav>
        <a href="/">Showbook</a>
        <a href="/venues">Venues</a>
        <a href="/artists">Artists</a>
        <a href="/shows">Shows</a>
    </nav>
    {banner}
    {body}
</body>
</html>"#,
        title = escape(title),
        style = STYLE,
        banner = flash.map(flash_banner).unwrap_or_default(),
        body = body,
    )
}

fn flash_banner(flash: &Flash) -> String {
    format!(
        r#"<div class="flash flash-{}" role="alert">{}</div>"#,
        flash.level.as_str(),
        escape(&flash.message)
    )
}

/// Search box posting `search_term` to `action`
pub(crate) fn search_form(action: &str, placeholder: &str, term: &str) -> String {
    format!(
        r#"<form method="post" action="{action}">
        <input type="text" name="search_term" placeholder="{placeholder}" value="{term}">
        <button class="button" type="submit">Search</button>
    </form>"#,
        action = action,
        placeholder = escape(placeholder),
        term = escape(term),
    )
}

pub(crate) fn genre_tags(genres: &[String]) -> String {
    genres
        .iter()
        .map(|g| format!(r#"<span class="genre">{}</span>"#, escape(g)))
        .collect()
}

/// Image tag, or nothing when no link is stored
pub(crate) fn image(link: &str, alt: &str) -> String {
    if link.is_empty() {
        String::new()
    } else {
        format!(r#"<img src="{}" alt="{}">"#, escape(link), escape(alt))
    }
}

/// Link to an external site, or nothing when no link is stored
pub(crate) fn external_link(link: &str, text: &str) -> String {
    if link.is_empty() {
        String::new()
    } else {
        format!(
            r#"<p><a href="{}" target="_blank" rel="noopener">{}</a></p>"#,
            escape(link),
            escape(text)
        )
    }
}

/// Delete button issuing `DELETE` to `url` and returning home on success
pub(crate) fn delete_button(url: &str, label: &str) -> String {
    format!(
        r#"<button class="button button-danger" id="delete-button" data-url="{url}">{label}</button>
    <script>
        document.getElementById('delete-button').addEventListener('click', async (e) => {{
            if (!confirm('Delete this listing and all of its shows?')) return;
            const response = await fetch(e.target.dataset.url, {{ method: 'DELETE' }});
            const result = await response.json();
            window.location.href = result.success ? '/' : window.location.pathname;
        }});
    </script>"#,
        url = escape(url),
        label = escape(label),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape() {
        assert_eq!(
            escape(r#"<b>"Rock" & 'Roll'</b>"#),
            "&lt;b&gt;&quot;Rock&quot; &amp; &#39;Roll&#39;&lt;/b&gt;"
        );
        assert_eq!(escape("Park Square"), "Park Square");
    }

    #[test]
    fn test_layout_renders_escaped_flash() {
        let flash = Flash::danger("Venue <x> could not be listed.");
        let html = layout("Home", Some(&flash), "<p>body</p>");
        assert!(html.contains(r#"class="flash flash-danger""#));
        assert!(html.contains("Venue &lt;x&gt; could not be listed."));
        assert!(html.contains("<p>body</p>"));
    }

    #[test]
    fn test_layout_without_flash() {
        let html = layout("Home", None, "");
        assert!(!html.contains("role=\"alert\""));
    }
}
