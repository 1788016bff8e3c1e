use crate::errors::AppError;
use crate::justify::justifier::justify_line;
use crate::justify::packer::{pack, Line};
use crate::justify::tokenizer::tokenize;

/// Output width used when the caller does not pick one. Direct callers of
/// [`justify_text`] may pass any width; the HTTP layer always uses this.
pub const DEFAULT_LINE_WIDTH: usize = 80;

/// Justifies `text` to fixed-width lines.
///
/// Pipeline: tokenize, pack greedily, fully justify every line except the
/// last, join with newlines. The last line stays packed (single spaces, no
/// padding), even when it is the only line of the text.
///
/// Empty or whitespace-only input is rejected.
pub fn justify_text(text: &str, max_chars: usize) -> Result<String, AppError> {
    let words = tokenize(text);
    if words.is_empty() {
        return Err(AppError::InvalidInput("Text is required"));
    }
    Ok(render(&pack(&words, max_chars), max_chars))
}

/// Renders packed lines: all but the last justified, the last as packed.
pub(crate) fn render(lines: &[Line<'_>], max_chars: usize) -> String {
    let rendered: Vec<String> = lines
        .iter()
        .enumerate()
        .map(|(i, line)| {
            if i + 1 < lines.len() {
                justify_line(line, max_chars)
            } else {
                line.packed()
            }
        })
        .collect();
    rendered.join("\n")
}
