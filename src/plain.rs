use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::debug;

use crate::dataset::{DataSet, SentenceSink};
use crate::split;
use crate::{LoadOptions, ReaderError, Result};

/// Reader for corpora carrying one pre-segmented sentence per line.
///
/// Two line layouts are accepted. Bare tokens joined by spaces or tabs:
///
/// ```text
/// 这是 fastNLP , 一个 非常 good 的 包 .
/// ```
///
/// or `token<splitter>tag` pairs when a splitter character is configured,
/// in which case only the text before the first splitter of each part is
/// kept:
///
/// ```text
/// 也/D  在/P  團員/Na  之中/Ng  ，/COMMACATEGORY
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct PlainTextReader {
    splitter: Option<char>,
}

impl PlainTextReader {
    pub fn new() -> Self {
        Self { splitter: None }
    }

    /// Reader whose lines carry `token<splitter>tag` pairs (e.g. `也/D`).
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

    /// Streaming core: append every sentence found in `reader` to `sink`.
    ///
    /// Blank (all-whitespace) lines yield nothing. Line order is kept,
    /// and so is segment order when long sentences are cut.
    pub fn read_into<R: BufRead, S: SentenceSink>(
        &self,
        reader: R,
        options: LoadOptions,
        sink: &mut S,
    ) -> Result<()> {
        let splitter = options.splitter.or(self.splitter);
        for line in reader.lines() {
            let line = line?;
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            let sentence = match splitter {
                Some(sep) => {
                    let words: Vec<&str> = line
                        .split_whitespace()
                        .map(|part| part.split(sep).next().unwrap_or(part))
                        .collect();
                    words.join(" ")
                }
                None => line.to_string(),
            };
            split::emit(sink, sentence, options.cut_long_sentences);
        }
        Ok(())
    }
}
