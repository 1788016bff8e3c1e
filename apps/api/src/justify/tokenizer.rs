/// Splits raw text into whitespace-delimited words.
///
/// A word is a maximal run of non-whitespace characters. Runs of any
/// whitespace (spaces, tabs, newlines) separate words and empty fragments are
/// discarded, so leading and trailing whitespace never produce empty words.
/// Always succeeds; `""` yields an empty vec.
pub fn tokenize(text: &str) -> Vec<&str> {
    text.split_whitespace().collect()
}
