use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::debug;
use smartstring::alias::String as SmartString;

use crate::dataset::{DataSet, SentenceSink};
use crate::split;
use crate::{LoadOptions, ReaderError, Result};

/// Reader for corpora with one token per line, where a blank line marks
/// the end of a sentence:
///
/// ```text
/// 迈 N
/// 向 N
/// 充 N
///
/// （ N
/// 一 N
/// ```
///
/// The token is the first whitespace-delimited field of the line; any
/// further fields (tags) are ignored. With a splitter configured, the
/// token is additionally truncated at the first splitter character, for
/// files that glue the tag onto the first field.
#[derive(Clone, Copy, Debug, Default)]
pub struct TokenPerLineReader {
    splitter: Option<char>,
}

impl TokenPerLineReader {
    pub fn new() -> Self {
        Self { splitter: None }
    }

    pub fn with_splitter(splitter: char) -> Self {
        Self {
            splitter: Some(splitter),
        }
    }

    /// Load `path` with default options.
    pub fn load(&self, path: impl AsRef<Path>) -> Result<DataSet> {
        self.load_with(path, LoadOptions::default())
    }

    /// Load `path`; a splitter in `options` overrides the reader's own.
    pub fn load_with(&self, path: impl AsRef<Path>, options: LoadOptions) -> Result<DataSet> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| ReaderError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        let mut dataset = DataSet::new();
        self.read_into(BufReader::new(file), options, &mut dataset)?;
        debug!("read {} sentences from {}", dataset.len(), path.display());
        Ok(dataset)
    }

    /// Streaming core: reassemble sentences from `reader` into `sink`.
    ///
    /// Consecutive blank lines flush at most once; a file that ends
    /// without a trailing blank line still flushes its last sentence.
    pub fn read_into<R: BufRead, S: SentenceSink>(
        &self,
        reader: R,
        options: LoadOptions,
        sink: &mut S,
    ) -> Result<()> {
        let splitter = options.splitter.or(self.splitter);
        let mut words: Vec<SmartString> = Vec::new();
        for line in reader.lines() {
            let line = line?;
            let line = line.trim();
            if line.is_empty() {
                if words.is_empty() {
                    continue;
                }
                split::emit(sink, words.join(" "), options.cut_long_sentences);
                words.clear();
            } else {
                let field = line.split_whitespace().next().unwrap_or(line);
                let token = match splitter {
                    Some(sep) => field.split(sep).next().unwrap_or(field),
                    None => field,
                };
                words.push(token.into());
            }
        }
        if !words.is_empty() {
            split::emit(sink, words.join(" "), options.cut_long_sentences);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn read(reader: &TokenPerLineReader, input: &str, options: LoadOptions) -> Vec<String> {
        let mut out: Vec<String> = Vec::new();
        reader.read_into(input.as_bytes(), options, &mut out).unwrap();
        out
    }

    #[test]
    fn blank_line_ends_sentence() {
        let reader = TokenPerLineReader::new();
        let input = "word1 N\nword2 V\n\n（ N\n一 N\n\n";
        assert_eq!(
            read(&reader, input, LoadOptions::default()),
            vec!["word1 word2", "（ 一"]
        );
    }

    #[test]
    fn consecutive_blank_lines_flush_once() {
        let reader = TokenPerLineReader::new();
        let input = "泽 I-PER\n民 I-PER\n\n\n\n九 N\n";
        assert_eq!(
            read(&reader, input, LoadOptions::default()),
            vec!["泽 民", "九"]
        );
    }

    #[test]
    fn missing_trailing_blank_line_still_flushes() {
        let reader = TokenPerLineReader::new();
        assert_eq!(
            read(&reader, "迈 N\n向 N", LoadOptions::default()),
            vec!["迈 向"]
        );
    }

    #[test]
    fn splitter_truncates_first_field() {
        let reader = TokenPerLineReader::with_splitter('/');
        let input = "迈/N\n向/N\n\n";
        assert_eq!(read(&reader, input, LoadOptions::default()), vec!["迈 向"]);
    }

    #[test]
    fn blank_leading_lines_are_no_ops() {
        let reader = TokenPerLineReader::new();
        assert_eq!(
            read(&reader, "\n\n迈 N\n\n", LoadOptions::default()),
            vec!["迈"]
        );
    }

    #[test]
    fn long_sentence_cutting_applies_per_flush() {
        let reader = TokenPerLineReader::new();
        let mut input = String::new();
        for _ in 0..120 {
            input.push_str("团员 X\n");
        }
        input.push('\n');
        let options = LoadOptions {
            cut_long_sentences: true,
            ..LoadOptions::default()
        };
        let out = read(&reader, &input, options);
        assert!(out.len() > 1);
        let rejoined: Vec<&str> = out.iter().flat_map(|s| s.split_whitespace()).collect();
        assert_eq!(rejoined.len(), 120);
    }
}
