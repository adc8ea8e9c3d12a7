use std::sync::LazyLock;

use regex::Regex;

static MARKUP_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^>]+>").expect("valid markup tag pattern"));

// Word characters are ASCII only: `[A-Za-z0-9_]`.
static NON_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^A-Za-z0-9_\s]").expect("valid non-word pattern"));

/// Strip markup tags and punctuation, then lowercase. Text enclosed by tags
/// is kept.
pub fn normalize(text: &str) -> String {
    let untagged = MARKUP_TAG.replace_all(text, "");
    let bare = NON_WORD.replace_all(&untagged, "");
    bare.to_lowercase()
}

/// Split normalized text into tokens on whitespace runs.
pub fn tokens(normalized: &str) -> impl Iterator<Item = &str> {
    normalized.split_whitespace()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_tags_but_keeps_enclosed_text() {
        assert_eq!(normalize("<b>thanks</b>"), "thanks");
        assert_eq!(
            normalize(r#"see <a href="https://x.y/?a=1">this</a> part"#),
            "see this part"
        );
    }

    #[test]
    fn removes_punctuation_and_lowercases() {
        assert_eq!(normalize("Great video! great VIDEO,"), "great video great video");
        assert_eq!(normalize("snake_case & 42"), "snake_case  42");
    }

    #[test]
    fn drops_non_ascii_letters() {
        assert_eq!(normalize("café 👍"), "caf ");
    }

    #[test]
    fn empty_angle_brackets_are_not_tags() {
        assert_eq!(normalize("a <> b"), "a  b");
    }

    #[test]
    fn tokens_skip_empty_runs() {
        let text = normalize("  one\t two\n\nthree  ");
        assert_eq!(tokens(&text).collect::<Vec<_>>(), ["one", "two", "three"]);
    }
}
