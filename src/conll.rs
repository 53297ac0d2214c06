use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::{debug, trace};
use smartstring::alias::String as SmartString;

use crate::dataset::{DataSet, SentenceSink};
use crate::split;
use crate::{ReaderError, Result};

/// Every record must carry the fields at indices 1, 3, 6 and 7.
const MIN_FIELDS: usize = 8;
/// Field holding the token text.
const TOKEN_FIELD: usize = 1;
/// Field gating the per-sample drop check.
const VALIDATION_FIELD: usize = 7;

/// Reader for dependency-parse-style columnar corpora: tab-separated
/// records with at least eight fields, grouped into samples by blank
/// lines, `#` starting a comment line.
///
/// ```text
/// 1	编者按	编者按	NN	NN	_	11	nmod	_	_
/// 2	：	：	PU	PU	_	11	punct	_	_
///
/// 1	这	这	DT	DT	_	3	det	_	_
/// ```
///
/// One sentence is produced per sample by joining the token fields with
/// spaces. A sample containing a record whose validation field is `"_"`
/// is dropped whole.
#[derive(Clone, Copy, Debug, Default)]
pub struct ConllReader;

impl ConllReader {
    pub fn new() -> Self {
        Self
    }

    /// Load `path` without long-sentence cutting.
    pub fn load(&self, path: impl AsRef<Path>) -> Result<DataSet> {
        self.load_with(path, false)
    }

    pub fn load_with(&self, path: impl AsRef<Path>, cut_long_sentences: bool) -> Result<DataSet> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| ReaderError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        let mut dataset = DataSet::new();
        self.read_into(BufReader::new(file), cut_long_sentences, &mut dataset)?;
        debug!("read {} sentences from {}", dataset.len(), path.display());
        Ok(dataset)
    }

    /// Streaming core. At most one sample group is held in memory; the
    /// trailing group is flushed even without a final blank line.
    pub fn read_into<R: BufRead, S: SentenceSink>(
        &self,
        reader: R,
        cut_long_sentences: bool,
        sink: &mut S,
    ) -> Result<()> {
        let mut sample: Vec<(usize, Vec<SmartString>)> = Vec::new();
        for (idx, line) in reader.lines().enumerate() {
            let line = line?;
            if line.is_empty() {
                flush_sample(&mut sample, cut_long_sentences, sink)?;
            } else if line.starts_with('#') {
                continue;
            } else {
                let fields = line.split('\t').map(SmartString::from).collect();
                sample.push((idx + 1, fields));
            }
        }
        flush_sample(&mut sample, cut_long_sentences, sink)
    }
}

fn flush_sample<S: SentenceSink>(
    sample: &mut Vec<(usize, Vec<SmartString>)>,
    cut_long_sentences: bool,
    sink: &mut S,
) -> Result<()> {
    if sample.is_empty() {
        return Ok(());
    }
    if let Some(sentence) = sentence_from_sample(sample)? {
        split::emit(sink, sentence, cut_long_sentences);
    }
    sample.clear();
    Ok(())
}

/// Join the token fields of one sample into a sentence, or `None` when a
/// record's validation field marks the whole sample as excluded.
fn sentence_from_sample(sample: &[(usize, Vec<SmartString>)]) -> Result<Option<String>> {
    let mut text: Vec<&str> = Vec::with_capacity(sample.len());
    for (line, fields) in sample {
        if fields.len() < MIN_FIELDS {
            return Err(ReaderError::MissingFields {
                line: *line,
                found: fields.len(),
                expected: MIN_FIELDS,
            });
        }
        let flag: &str = &fields[VALIDATION_FIELD];
        if flag == "_" {
            trace!("dropping sample: unannotated record at line {}", line);
            return Ok(None);
        }
        text.push(&fields[TOKEN_FIELD]);
    }
    Ok(Some(text.join(" ")))
}
