/// A packed output row: the words assigned to it plus the length the row has
/// when its words are joined by single spaces.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Line<'a> {
    pub words: Vec<&'a str>,
    pub packed_len: usize,
}

impl Line<'_> {
    /// The row rendered with single spaces between words, no padding.
    pub fn packed(&self) -> String {
        self.words.join(" ")
    }
}

/// Greedily packs words into lines of at most `max_chars` characters.
///
/// Words are consumed left to right. A line is closed only when appending the
/// next word (with one separating space) would push it past `max_chars` and
/// the line already holds at least one word. A single word longer than
/// `max_chars` is never split: it becomes its own overflowing line, which is
/// accepted behavior rather than an error.
///
/// Flattening the output reproduces the input word sequence exactly — packing
/// never drops, duplicates, or reorders words.
pub fn pack<'a>(words: &[&'a str], max_chars: usize) -> Vec<Line<'a>> {
    let mut lines = Vec::new();
    let mut current = Line::default();

    for &word in words {
        let word_len = word.chars().count();
        let separator = usize::from(!current.words.is_empty());
        let candidate_len = current.packed_len + separator + word_len;

        if candidate_len > max_chars && !current.words.is_empty() {
            lines.push(std::mem::take(&mut current));
            current.words.push(word);
            current.packed_len = word_len;
        } else {
            current.words.push(word);
            current.packed_len = candidate_len;
        }
    }

    if !current.words.is_empty() {
        lines.push(current);
    }

    lines
}
