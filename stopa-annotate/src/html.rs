//! Minimal HTML scraping for the result element of a web page
//!
//! Only what the annotation page needs: locate an element by id, take its
//! text content, decode entities.

use regex::{Captures, Regex};
use std::sync::OnceLock;

fn tag_regex() -> &'static Regex {
    static TAG: OnceLock<Regex> = OnceLock::new();
    TAG.get_or_init(|| {
        Regex::new(r"(?is)<(/?)([a-z][a-z0-9]*)\b[^>]*?(/?)>").expect("valid tag regex")
    })
}

fn break_regex() -> &'static Regex {
    static BREAK: OnceLock<Regex> = OnceLock::new();
    BREAK.get_or_init(|| Regex::new(r"(?i)<br\s*/?>").expect("valid break regex"))
}

fn entity_regex() -> &'static Regex {
    static ENTITY: OnceLock<Regex> = OnceLock::new();
    ENTITY.get_or_init(|| {
        Regex::new(r"&(#[0-9]{1,7}|#[xX][0-9a-fA-F]{1,6}|[a-zA-Z]+);").expect("valid entity regex")
    })
}

/// Text content of the first element whose `id` attribute equals `id`
///
/// `<br>` inside the element becomes a newline, other tags are dropped and
/// entities are decoded. Returns `None` when there is no such element or it
/// is never closed.
pub fn element_text_by_id(html: &str, id: &str) -> Option<String> {
    let open = Regex::new(&format!(
        r#"(?is)<([a-z][a-z0-9]*)\b[^>]*?\sid\s*=\s*["']{}["'][^>]*>"#,
        regex::escape(id)
    ))
    .ok()?;

    let opening = open.captures(html)?;
    let name = opening.get(1)?.as_str().to_ascii_lowercase();
    let content_start = opening.get(0)?.end();
    let content_end = matching_close(html, content_start, &name)?;

    Some(text_content(&html[content_start..content_end]))
}

/// Byte offset of the tag closing an element named `name` opened before `from`
fn matching_close(html: &str, from: usize, name: &str) -> Option<usize> {
    let mut depth = 1usize;

    for tag in tag_regex().captures_iter(&html[from..]) {
        if !tag[2].eq_ignore_ascii_case(name) {
            continue;
        }
        let closing = !tag[1].is_empty();
        let self_closing = !tag[3].is_empty();

        if closing {
            depth -= 1;
            if depth == 0 {
                return tag.get(0).map(|m| from + m.start());
            }
        } else if !self_closing {
            depth += 1;
        }
    }

    None
}

/// Strip markup from an HTML fragment and decode entities
pub fn text_content(fragment: &str) -> String {
    let with_breaks = break_regex().replace_all(fragment, "\n");
    let without_tags = tag_regex().replace_all(&with_breaks, "");
    decode_entities(&without_tags)
}

/// Decode named and numeric character references
pub fn decode_entities(text: &str) -> String {
    entity_regex()
        .replace_all(text, |caps: &Captures| {
            let body = &caps[1];
            let hex = body
                .strip_prefix("#x")
                .or_else(|| body.strip_prefix("#X"));
            let decoded = if let Some(hex) = hex {
                u32::from_str_radix(hex, 16).ok().and_then(char::from_u32)
            } else if let Some(dec) = body.strip_prefix('#') {
                dec.parse::<u32>().ok().and_then(char::from_u32)
            } else {
                named_entity(body)
            };
            decoded.map_or_else(|| caps[0].to_string(), String::from)
        })
        .into_owned()
}

fn named_entity(name: &str) -> Option<char> {
    match name {
        "amp" => Some('&'),
        "lt" => Some('<'),
        "gt" => Some('>'),
        "quot" => Some('"'),
        "apos" => Some('\''),
        "nbsp" => Some('\u{a0}'),
        "rsquo" => Some('\u{2019}'),
        "lsquo" => Some('\u{2018}'),
        "mdash" => Some('\u{2014}'),
        "ndash" => Some('\u{2013}'),
        "laquo" => Some('\u{ab}'),
        "raquo" => Some('\u{bb}'),
        "hellip" => Some('\u{2026}'),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_finds_element_by_id() {
        let html = r#"<html><body><div class="x">skip</div><div id="emph" class="res">ма́ма</div></body></html>"#;
        assert_eq!(element_text_by_id(html, "emph").as_deref(), Some("ма́ма"));
    }

    #[test]
    fn test_nested_elements_and_markup() {
        let html = r#"<div id='emph'>Ой <div><b>у</b> лу́зі</div> черво́на</div><div>after</div>"#;
        assert_eq!(
            element_text_by_id(html, "emph").as_deref(),
            Some("Ой у лу́зі черво́на")
        );
    }

    #[test]
    fn test_breaks_become_newlines() {
        let html = r#"<p id="emph">ма́ма<br>ра́ма<BR/>во́да</p>"#;
        assert_eq!(
            element_text_by_id(html, "emph").as_deref(),
            Some("ма́ма\nра́ма\nво́да")
        );
    }

    #[test]
    fn test_missing_or_unclosed_element() {
        assert_eq!(element_text_by_id("<div id=\"other\">x</div>", "emph"), None);
        assert_eq!(element_text_by_id("<div id=\"emph\">never closed", "emph"), None);
        assert_eq!(element_text_by_id("<div data-id=\"emph\">x</div>", "emph"), None);
    }

    #[test]
    fn test_decode_entities() {
        assert_eq!(
            decode_entities("&lt;a&gt; &amp; &quot;b&quot; &#1072;&#x301; &unknown;"),
            "<a> & \"b\" а\u{301} &unknown;"
        );
        assert_eq!(decode_entities("&#xD800;"), "&#xD800;");
    }
}
