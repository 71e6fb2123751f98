pub const STOPWORDS: &[&str] = &["in", "near", "at", "the", "for", "of", "and", "a"];

#[inline]
pub fn is_stopword(word: &str) -> bool {
    STOPWORDS.contains(&word)
}

#[inline]
fn is_smart_quote(c: char) -> bool {
    matches!(
        c,
        '\u{2018}' | '\u{2019}' | '\u{201A}' | '\u{201B}' | '\u{201C}' | '\u{201D}' | '\u{201E}'
            | '\u{201F}'
    )
}

#[inline]
fn is_kept(c: char) -> bool {
    c.is_ascii_lowercase() || c.is_ascii_digit() || c.is_whitespace() || c == '-'
}

/// Canonical text form shared by listing titles, generated keywords and
/// stored search fields.
///
/// Lowercases, folds smart quotes to `'`, turns anything outside
/// `[a-z0-9-]` and whitespace into a space, then collapses and trims
/// whitespace. Applying it twice is a no-op.
pub fn normalize(text: &str) -> String {
    text.to_lowercase()
        .chars()
        .map(|c| if is_smart_quote(c) { '\'' } else { c })
        .map(|c| if is_kept(c) { c } else { ' ' })
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<&str>>()
        .join(" ")
}

pub fn tokenize(text: &str) -> Vec<String> {
    let normalized = normalize(text);
    if normalized.is_empty() {
        return Vec::new();
    }

    normalized.split(' ').map(str::to_string).collect()
}

/// Joins the non-stopword tokens back into a phrase. Tokens are expected
/// to be normalized already.
pub fn remove_stopwords(tokens: &[String]) -> String {
    tokens
        .iter()
        .filter(|word| !is_stopword(word))
        .map(String::as_str)
        .collect::<Vec<&str>>()
        .join(" ")
}
