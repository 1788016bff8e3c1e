use crate::justify::packer::Line;

/// Pads a packed line with distributed spaces so it spans exactly `max_chars`.
///
/// The space budget (`max_chars` minus the letters) is spread over the gaps
/// between words; when it does not divide evenly, the leftmost gaps each take
/// one extra space. A single-word line is returned unchanged — there is no
/// gap to widen. For lines produced by the packer the budget always covers at
/// least one space per gap, so the result is exactly `max_chars` wide.
pub fn justify_line(line: &Line<'_>, max_chars: usize) -> String {
    if line.words.len() <= 1 {
        return line.packed();
    }

    let total_letters: usize = line.words.iter().map(|w| w.chars().count()).sum();
    let gaps = line.words.len() - 1;
    let space_budget = max_chars.saturating_sub(total_letters);
    let base = space_budget / gaps;
    let remainder = space_budget % gaps;

    let mut out = String::with_capacity(max_chars.max(total_letters + gaps));
    for (i, word) in line.words.iter().enumerate() {
        out.push_str(word);
        if i < gaps {
            let width = base + usize::from(i < remainder);
            out.push_str(&" ".repeat(width));
        }
    }
    out
}
