//! # Training Corpus Serialization
//!
//! Persists the labeled dataset for external model training. Each record
//! carries parallel `tokens` and `labels` arrays; the full corpus is a JSON
//! object with an `objects` array. Written corpora have literal backslash
//! characters stripped from the encoded text for byte-format parity with the
//! corpus files the training tooling consumes.

use crate::pipeline_errors::PipelineError;
use crate::tag_model::Label;
use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// One training example: parallel token and label arrays of equal length.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentenceRecord {
    /// Words of the sentence, one entry per word.
    pub tokens: Vec<String>,
    /// Label of each word, index-aligned with `tokens`.
    pub labels: Vec<Label>,
}

impl SentenceRecord {
    /// Create an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one word with its label.
    pub fn push(&mut self, token: String, label: Label) {
        self.tokens.push(token);
        self.labels.push(label);
    }

    /// Number of words in the record.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// True when the record holds no words.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

/// The persisted training corpus.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrainingCorpus {
    /// All training examples.
    pub objects: Vec<SentenceRecord>,
}

impl TrainingCorpus {
    /// Wrap a list of records as a corpus.
    pub fn new(objects: Vec<SentenceRecord>) -> Self {
        Self { objects }
    }
}

/// Encode a corpus to the persisted JSON text.
///
/// Pretty-printed, with literal backslashes stripped afterwards so escaped
/// token text never reaches the training tooling.
pub fn encode_corpus(corpus: &TrainingCorpus) -> Result<String, PipelineError> {
    let encoded = serde_json::to_string_pretty(corpus)
        .map_err(|err| PipelineError::Serialization(err.to_string()))?;
    Ok(encoded.replace('\\', ""))
}

/// Write a corpus to `path`.
pub fn write_corpus<P: AsRef<Path>>(
    corpus: &TrainingCorpus,
    path: P,
) -> Result<(), PipelineError> {
    let path = path.as_ref();
    let encoded = encode_corpus(corpus)?;

    fs::write(path, encoded)
        .map_err(|err| PipelineError::ResourceUnavailable(format!("{}: {}", path.display(), err)))?;

    info!(
        "Wrote training corpus with {} sentences to {}",
        corpus.objects.len(),
        path.display()
    );
    Ok(())
}

/// Read a corpus back from `path`.
///
/// Missing files surface as `ResourceUnavailable`, malformed JSON as
/// `DecodeFailure`; the caller may retry with a different source.
pub fn read_corpus<P: AsRef<Path>>(path: P) -> Result<TrainingCorpus, PipelineError> {
    let path = path.as_ref();

    let data = fs::read_to_string(path)
        .map_err(|err| PipelineError::ResourceUnavailable(format!("{}: {}", path.display(), err)))?;

    let corpus = serde_json::from_str(&data).map_err(|err| {
        warn!("Couldn't decode corpus at {}: {}", path.display(), err);
        PipelineError::DecodeFailure(err.to_string())
    })?;

    Ok(corpus)
}
