use crate::dataset::SentenceSink;

/// Default threshold for [`cut_long_sentence`], in characters.
pub const DEFAULT_MAX_SAMPLE_LEN: usize = 200;

/// Split a sentence longer than `max_len` characters into several chunks,
/// cutting only at whitespace boundaries.
///
/// Length is measured over the sentence's non-whitespace characters.
/// Tokens are accumulated greedily and a chunk is closed as soon as the
/// running length exceeds `max_len`, so chunks can end up shorter or
/// longer than `max_len`; the guarantee is that no token is ever cut in
/// half. A sentence at or below the threshold comes back unchanged as the
/// only element.
pub fn cut_long_sentence(sent: &str, max_len: usize) -> Vec<String> {
    let no_space_len = sent.chars().filter(|c| !c.is_whitespace()).count();
    if no_space_len <= max_len {
        return vec![sent.to_string()];
    }

    let mut segments = Vec::new();
    let mut current: Vec<&str> = Vec::new();
    let mut length = 0;
    for part in sent.split_whitespace() {
        length += part.chars().count();
        current.push(part);
        if length > max_len {
            segments.push(current.join(" "));
            current.clear();
            length = 0;
        }
    }
    if !current.is_empty() {
        segments.push(current.join(" "));
    }
    segments
}

/// Append `sentence` to `sink`, split at the default threshold first when
/// `cut_long` is set.
pub(crate) fn emit<S: SentenceSink>(sink: &mut S, sentence: String, cut_long: bool) {
    if cut_long {
        for segment in cut_long_sentence(&sentence, DEFAULT_MAX_SAMPLE_LEN) {
            sink.append_sentence(segment);
        }
    } else {
        sink.append_sentence(sentence);
    }
}
