use storage::models::Requester;

use super::services::{FALLBACK_SHARE_TEXT, battle_card_image_url};

pub const OG_IMAGE_WIDTH: u32 = 1200;
pub const OG_IMAGE_HEIGHT: u32 = 1600;

fn escape_html(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
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

/// Public page for a contest's battle card, with OpenGraph and Twitter card
/// metadata so the image unfurls when the link is posted.
pub fn render_share_page(base_url: &str, contest_id: &str) -> String {
    let title = escape_html(&format!("Battle Card - Blitz Contest {contest_id}"));
    let description = escape_html(FALLBACK_SHARE_TEXT);
    let image_url = escape_html(&battle_card_image_url(
        base_url,
        contest_id,
        &Requester::Anonymous,
    ));
    let contest_label = escape_html(contest_id);

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title}</title>
<meta name="description" content="{description}">
<meta property="og:title" content="{title}">
<meta property="og:description" content="{description}">
<meta property="og:type" content="website">
<meta property="og:image" content="{image_url}">
<meta property="og:image:width" content="{OG_IMAGE_WIDTH}">
<meta property="og:image:height" content="{OG_IMAGE_HEIGHT}">
<meta property="og:image:alt" content="Blitz Battle Card">
<meta name="twitter:card" content="summary_large_image">
<meta name="twitter:title" content="{title}">
<meta name="twitter:description" content="{description}">
<meta name="twitter:image" content="{image_url}">
</head>
<body>
<main>
<h1>Blitz Battle Card ⚡</h1>
<p>Contest #{contest_label}</p>
<img src="{image_url}" alt="Battle Card" width="300" height="400">
<a href="/">Join the Battle</a>
</main>
</body>
</html>
"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_metadata() {
        let html = render_share_page("https://blitz.example", "c1");

        assert!(html.contains("<title>Battle Card - Blitz Contest c1</title>"));
        assert!(html.contains(
            r#"<meta property="og:image" content="https://blitz.example/api/battle-card?contestId=c1">"#
        ));
        assert!(html.contains(r#"<meta property="og:image:width" content="1200">"#));
        assert!(html.contains(r#"<meta name="twitter:card" content="summary_large_image">"#));
        assert!(html.contains("Contest #c1"));
    }

    #[test]
    fn test_contest_id_is_escaped() {
        let html = render_share_page("https://blitz.example", "<script>\"x\"");

        assert!(!html.contains("<script>"));
        assert!(html.contains("Contest #&lt;script&gt;&quot;x&quot;"));
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("a&b<c>'d'"), "a&amp;b&lt;c&gt;&#39;d&#39;");
    }
}
