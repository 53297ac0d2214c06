//! Readers for Chinese word segmentation corpora.
//!
//! Each reader turns one plain-text corpus file into an ordered
//! [`DataSet`] of raw sentence records, ready to hand to a training
//! pipeline. Three file layouts are covered: one pre-segmented sentence
//! per line ([`PlainTextReader`]), one token per line with blank-line
//! sentence boundaries ([`TokenPerLineReader`]), and tab-separated
//! dependency-parse columns ([`ConllReader`]). Sentences longer than
//! [`DEFAULT_MAX_SAMPLE_LEN`] characters can optionally be split at
//! whitespace boundaries on the way in.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

mod conll;
mod dataset;
mod plain;
mod split;
mod token_per_line;

pub use crate::conll::ConllReader;
pub use crate::dataset::{DataSet, Instance, SentenceSink};
pub use crate::plain::PlainTextReader;
pub use crate::split::{cut_long_sentence, DEFAULT_MAX_SAMPLE_LEN};
pub use crate::token_per_line::TokenPerLineReader;

/// Errors surfaced while loading a corpus file.
///
/// A reader either returns a complete collection or the first hard error;
/// there are no partial results. Blank lines, comments and samples failing
/// the annotation check are skips, not errors.
#[derive(Debug, Error)]
pub enum ReaderError {
    /// The corpus file could not be opened.
    #[error("failed to open {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// I/O or decoding failure while streaming (non-UTF-8 input surfaces
    /// here as `InvalidData`).
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// A columnar record with too few tab-separated fields.
    #[error("line {line}: record has {found} tab-separated fields, expected at least {expected}")]
    MissingFields {
        line: usize,
        found: usize,
        expected: usize,
    },
}

pub type Result<T> = std::result::Result<T, ReaderError>;

/// Per-call options shared by the line-oriented readers.
///
/// A `Some` splitter here wins over the reader's constructor-level
/// default; `None` falls back to it.
#[derive(Clone, Copy, Debug, Default)]
pub struct LoadOptions {
    /// Tag separator: keep only the text before its first occurrence in
    /// each token (e.g. `'/'` for `也/D`).
    pub splitter: Option<char>,
    /// Split sentences longer than [`DEFAULT_MAX_SAMPLE_LEN`] characters
    /// at whitespace boundaries.
    pub cut_long_sentences: bool,
}
