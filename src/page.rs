//! Injecting rendered bundle markup into server-side page templates.

use regex::{NoExpand, Regex};

use crate::error::{BundleError, Result};

/// Template tag replaced by the bundle markup, as in `{% render_vite_bundle %}`.
pub const DEFAULT_PLACEHOLDER: &str = "render_vite_bundle";

/// Replace every `{% <placeholder> %}` tag in `template` with `markup`.
///
/// Whitespace inside the braces is tolerated. The markup is inserted verbatim.
pub fn inject_bundle(template: &str, placeholder: &str, markup: &str) -> Result<String> {
    let pattern = Regex::new(&format!(r"\{{%\s*{}\s*%\}}", regex::escape(placeholder)))
        .expect("escaped placeholder always forms a valid regex");

    if !pattern.is_match(template) {
        return Err(BundleError::PlaceholderMissing {
            placeholder: placeholder.to_string(),
        });
    }

    Ok(pattern.replace_all(template, NoExpand(markup)).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replaces_tag_with_markup() {
        let template = "<body>\n  <div id=\"root\"></div>\n  {% render_vite_bundle %}\n</body>";
        let page = inject_bundle(template, DEFAULT_PLACEHOLDER, "<script></script>").unwrap();
        assert_eq!(
            page,
            "<body>\n  <div id=\"root\"></div>\n  <script></script>\n</body>"
        );
    }

    #[test]
    fn tolerates_whitespace_and_repeats() {
        let template = "{%render_vite_bundle%}|{%   render_vite_bundle   %}";
        let page = inject_bundle(template, DEFAULT_PLACEHOLDER, "X").unwrap();
        assert_eq!(page, "X|X");
    }

    #[test]
    fn does_not_expand_dollar_signs_in_markup() {
        let page = inject_bundle(
            "{% render_vite_bundle %}",
            DEFAULT_PLACEHOLDER,
            "$1 ${name}",
        )
        .unwrap();
        assert_eq!(page, "$1 ${name}");
    }

    #[test]
    fn missing_tag_is_an_error() {
        let err = inject_bundle("<body></body>", DEFAULT_PLACEHOLDER, "X").unwrap_err();
        assert!(matches!(err, BundleError::PlaceholderMissing { .. }));
    }

    #[test]
    fn other_tags_are_left_alone() {
        let err = inject_bundle("{% load static %}", DEFAULT_PLACEHOLDER, "X").unwrap_err();
        assert!(matches!(err, BundleError::PlaceholderMissing { .. }));
    }
}
