//! Placeholder substitution for stub templates.
//!
//! A placeholder is `{{`, optional spaces, an identifier of
//! `[A-Za-z0-9_]`, optional spaces, `}}`. Only identifiers present in the
//! map are replaced. Anything else, including Blade echoes such as
//! `{{ $user->name }}`, is copied through untouched. Substituted text is
//! never re-scanned.

use crate::domain::entities::PlaceholderMap;

const OPEN: &str = "{{";
const CLOSE: &str = "}}";

/// Bind `placeholders` into `template` in a single left-to-right pass.
pub fn bind(template: &str, placeholders: &PlaceholderMap) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find(OPEN) {
        out.push_str(&rest[..start]);
        let after_open = &rest[start..];

        match parse_token(after_open) {
            Some((name, consumed)) if placeholders.contains(name) => {
                out.push_str(placeholders.get(name).unwrap_or_default());
                rest = &after_open[consumed..];
            }
            // A token may still start at the next brace: `{{{ model }}}`.
            _ => {
                out.push('{');
                rest = &after_open[1..];
            }
        }
    }

    out.push_str(rest);
    out
}

/// Parse `{{ name }}` at the start of `input`, returning the name and the
/// byte length of the whole token.
fn parse_token(input: &str) -> Option<(&str, usize)> {
    let body = input.strip_prefix(OPEN)?;
    let name_start = body.len() - body.trim_start_matches(' ').len();
    let after_spaces = &body[name_start..];

    let name_len = after_spaces
        .find(|c: char| !(c.is_ascii_alphanumeric() || c == '_'))
        .unwrap_or(after_spaces.len());
    if name_len == 0 {
        return None;
    }
    let name = &after_spaces[..name_len];

    let tail = &after_spaces[name_len..];
    let trailing = tail.len() - tail.trim_start_matches(' ').len();
    if !tail[trailing..].starts_with(CLOSE) {
        return None;
    }

    let consumed = OPEN.len() + name_start + name_len + trailing + CLOSE.len();
    Some((name, consumed))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map(pairs: &[(&str, &str)]) -> PlaceholderMap {
        pairs.iter().copied().collect()
    }

    #[test]
    fn replaces_known_tokens() {
        let placeholders = map(&[("model", "User"), ("per_page", "10")]);
        let out = bind("{{ model }}::paginate({{per_page}})", &placeholders);
        assert_eq!(out, "User::paginate(10)");
    }

    #[test]
    fn unknown_tokens_stay_verbatim() {
        let placeholders = map(&[("model", "User")]);
        let out = bind("{{ model }} {{ missing }}", &placeholders);
        assert_eq!(out, "User {{ missing }}");
    }

    #[test]
    fn blade_echoes_are_not_placeholders() {
        let placeholders = map(&[("user", "SHOULD NOT APPEAR")]);
        let template = "<td>{{ $user->name }}</td> {{ session('message') }}";
        assert_eq!(bind(template, &placeholders), template);
    }

    #[test]
    fn substituted_text_is_not_rescanned() {
        let placeholders = map(&[("outer", "{{ inner }}"), ("inner", "boom")]);
        assert_eq!(bind("{{ outer }}", &placeholders), "{{ inner }}");
    }

    #[test]
    fn nested_braces_around_placeholder() {
        let placeholders = map(&[("modal_title", "$model ? 'Edit' : 'Create'")]);
        assert_eq!(
            bind("<h3>{{ {{ modal_title }} }}</h3>", &placeholders),
            "<h3>{{ $model ? 'Edit' : 'Create' }}</h3>"
        );
    }

    #[test]
    fn token_after_an_extra_opening_brace() {
        let placeholders = map(&[("model", "User")]);
        assert_eq!(bind("{{{ model }}}", &placeholders), "{User}");
        assert_eq!(bind("{{{{model}}", &placeholders), "{{User");
    }

    #[test]
    fn unused_entries_are_ignored() {
        let placeholders = map(&[("a", "1"), ("b", "2")]);
        assert_eq!(bind("plain text", &placeholders), "plain text");
    }

    #[test]
    fn unterminated_token_is_copied() {
        let placeholders = map(&[("model", "User")]);
        assert_eq!(bind("{{ model", &placeholders), "{{ model");
    }

    #[test]
    fn multibyte_text_is_preserved() {
        let placeholders = map(&[("label", "Café")]);
        assert_eq!(bind("→ {{ label }} ✓", &placeholders), "→ Café ✓");
    }
}
