//! HTML rendering of the notes page

use crate::notes::Note;

use super::Composer;

/// Keeps the submit control in sync with the input while typing
///
/// `\p{White_Space}` is the set `char::is_whitespace` and `str::trim` use,
/// JS `trim` differs (U+FEFF, U+0085)
const COMPOSER_SCRIPT: &str = r"
const input = document.getElementById('note-input');
const submit = document.getElementById('note-submit');
const blank = /^\p{White_Space}*$/u;
input.addEventListener('input', () => {
  submit.disabled = blank.test(input.value);
});
";

const STYLE: &str = r"
body { font-family: system-ui, sans-serif; max-width: 28rem; margin: 0 auto; padding: 2rem; text-align: center; }
form.composer { display: flex; gap: 0.5rem; margin-bottom: 1.5rem; }
form.composer input { flex: 1; padding: 0.5rem 1rem; }
button:disabled { opacity: 0.5; }
section.notes { margin-top: 2rem; text-align: left; }
section.notes li { display: flex; justify-content: space-between; margin-bottom: 0.5rem; }
";

/// Render the full page
pub fn render_page(notes: &[Note], composer: &Composer) -> String {
    let disabled = if composer.can_submit() { "" } else { " disabled" };

    format!(
        "<!doctype html><html lang=\"en\"><head><meta charset=\"utf-8\">\
<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\
<title>Mantir</title><style>{STYLE}</style></head><body>\
<h1>Hello World!</h1>\
<p>Welcome to Mantir</p>\
<form class=\"composer\" method=\"post\" action=\"/\">\
<input id=\"note-input\" type=\"text\" name=\"content\" value=\"{value}\" placeholder=\"Enter a note\" autocomplete=\"off\">\
<button id=\"note-submit\" type=\"submit\"{disabled}>Add Note</button>\
</form>\
<section class=\"notes\"><h2>Notes</h2><ul>{list}</ul></section>\
<script>{COMPOSER_SCRIPT}</script>\
</body></html>",
        value = escape_html(composer.input()),
        list = render_list(notes),
    )
}

/// Render a minimal error page
pub fn render_error(message: &str) -> String {
    format!(
        "<!doctype html><html lang=\"en\"><head><meta charset=\"utf-8\"><title>Mantir</title></head>\
<body><h1>Something went wrong</h1><p>{}</p></body></html>",
        escape_html(message)
    )
}

fn render_list(notes: &[Note]) -> String {
    notes
        .iter()
        .map(|note| {
            format!(
                "<li data-note-id=\"{id}\"><span>{content}</span>\
<form method=\"post\" action=\"/notes/{id}/delete\">\
<button type=\"submit\" aria-label=\"Delete note\" title=\"Delete note\">&#x2715;</button>\
</form></li>",
                id = note.id,
                content = escape_html(&note.content),
            )
        })
        .collect()
}

/// Escape text for use in HTML content and double-quoted attributes
fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());

    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            ch => escaped.push(ch),
        }
    }

    escaped
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn note(id: i64, content: &str) -> Note {
        Note {
            id,
            content: content.to_string(),
            created_at: NaiveDate::from_ymd_opt(2026, 10, 18)
                .unwrap()
                .and_hms_opt(12, 0, 0)
                .unwrap(),
        }
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(
            "&lt;b&gt;&quot;Tom&quot; &amp; &#39;Jerry&#39;&lt;/b&gt;",
            escape_html(r#"<b>"Tom" & 'Jerry'</b>"#)
        );
        assert_eq!("buy milk", escape_html("buy milk"));
    }

    #[test]
    fn test_submit_disabled_for_blank_input() {
        let page = render_page(&[], &Composer::with_input("   ".to_string()));

        assert!(page.contains("type=\"submit\" disabled>Add Note"));
    }

    #[test]
    fn test_submit_enabled_and_input_preserved() {
        let page = render_page(&[], &Composer::with_input("call \"bob\"".to_string()));

        assert!(page.contains("type=\"submit\">Add Note"));
        assert!(page.contains("value=\"call &quot;bob&quot;\""));
    }

    #[test]
    fn test_script_blank_rule_matches_server() {
        let page = render_page(&[], &Composer::default());

        assert!(page.contains(r"/^\p{White_Space}*$/u"));
        assert!(!page.contains(".trim()"));

        // same decisions as the script: U+0085 and NBSP are blank, U+FEFF is not
        let cases = [("\u{85}", false), ("\u{A0} ", false), ("\u{FEFF}", true)];
        for (input, can_submit) in cases {
            let composer = Composer::with_input(input.to_string());
            let page = render_page(&[], &composer);

            assert_eq!(can_submit, composer.can_submit());
            assert_eq!(
                can_submit,
                page.contains("type=\"submit\">Add Note"),
                "{input:?}"
            );
        }
    }

    #[test]
    fn test_list_keeps_given_order() {
        let notes = [note(2, "call bob"), note(1, "<buy> milk")];
        let page = render_page(&notes, &Composer::default());

        let call_bob = page.find("call bob").unwrap();
        let buy_milk = page.find("&lt;buy&gt; milk").unwrap();
        assert!(call_bob < buy_milk);

        assert!(page.contains("action=\"/notes/2/delete\""));
        assert!(page.contains("action=\"/notes/1/delete\""));
    }
}
