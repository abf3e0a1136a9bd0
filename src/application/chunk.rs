// Sentence-aware text chunking

pub const SENTENCE_DELIMITER: &str = ". ";

/// Split `text` into ordered chunks of at most `max_chars` characters.
///
/// Text that already fits is returned untouched as a single chunk. Longer
/// text is cut at sentence boundaries (`". "`) and sentences are packed
/// greedily, so joining the chunks with a single space gives back the
/// original sentence sequence. A sentence longer than `max_chars` is never
/// cut; it becomes an oversized chunk of its own.
pub fn split_into_chunks(text: &str, max_chars: usize) -> Vec<&str> {
    if text.chars().count() <= max_chars {
        return vec![text];
    }

    let mut chunks = Vec::new();
    // Byte range and char length of the chunk being built
    let mut start = 0;
    let mut end = 0;
    let mut len = 0;

    for (piece_start, piece_end) in sentence_spans(text) {
        let piece_len = text[piece_start..piece_end].chars().count();

        if len > 0 && len + piece_len > max_chars {
            push_trimmed(&mut chunks, &text[start..end]);
            start = piece_start;
            len = 0;
        }
        end = piece_end;
        len += piece_len;
    }
    push_trimmed(&mut chunks, &text[start..end]);

    // Whitespace-only input still goes out as one request
    if chunks.is_empty() {
        chunks.push(text);
    }
    chunks
}

// Byte spans of each sentence, delimiter included (the last one has none)
fn sentence_spans(text: &str) -> Vec<(usize, usize)> {
    let mut spans = Vec::new();
    let mut start = 0;
    for (idx, delim) in text.match_indices(SENTENCE_DELIMITER) {
        let end = idx + delim.len();
        spans.push((start, end));
        start = end;
    }
    spans.push((start, text.len()));
    spans
}

fn push_trimmed<'a>(chunks: &mut Vec<&'a str>, chunk: &'a str) {
    let trimmed = chunk.trim();
    if !trimmed.is_empty() {
        chunks.push(trimmed);
    }
}
