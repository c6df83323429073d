//! Canonical display form for generated titles, plus the word helpers the
//! fallback policy and dispatch thresholds share.

pub const MAX_TITLE_WORDS: usize = 10;
pub const MAX_TITLE_CHARS: usize = 80;
/// Kept out of the trailing-punctuation set so normalization stays idempotent.
pub const ELLIPSIS: &str = "\u{2026}";

const TRUNCATED_TITLE_CHARS: usize = 77;
const TRAILING_PUNCT: [char; 6] = ['.', '!', '?', ':', ';', ','];

pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

pub fn leading_words(text: &str, n: usize) -> String {
    text.split_whitespace().take(n).collect::<Vec<_>>().join(" ")
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn strip_trailing(text: &str) -> &str {
    text.trim_end_matches(|c: char| TRAILING_PUNCT.contains(&c) || c.is_whitespace())
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Normalize a raw generated title into its bounded display form:
/// collapse whitespace, strip trailing punctuation, keep at most
/// [`MAX_TITLE_WORDS`] words and [`MAX_TITLE_CHARS`] characters, uppercase
/// the first character. Empty input stays empty.
///
/// Word truncation can expose punctuation that was mid-string before, so
/// trailing characters are stripped again after the cut; otherwise a second
/// normalization would not be a no-op. Capitalization runs before the
/// character cap for the same reason: uppercasing can grow the string
/// (`ß` becomes `SS`), and the cap has to bound the final form.
pub fn normalize_title(raw: &str) -> String {
    let collapsed = collapse_whitespace(raw);
    let stripped = strip_trailing(&collapsed);
    let truncated = leading_words(stripped, MAX_TITLE_WORDS);
    let mut title = capitalize(strip_trailing(&truncated));
    if title.chars().count() > MAX_TITLE_CHARS {
        title = title.chars().take(TRUNCATED_TITLE_CHARS).collect();
        title.push_str(ELLIPSIS);
    }
    title
}
