//! # Recipe Line Tagger
//!
//! Reconstructs structured four-field records from per-word label streams.
//! The sequence tagger itself is an injected dependency behind the
//! [`SequenceTagger`] trait; this module owns the deterministic
//! post-processing: lowercasing, field accumulation with whitespace
//! reattachment, value-run merging, and the numeric/alpha split of glued
//! combination tokens.
//!
//! ## Whitespace and merge policy
//!
//! Whitespace spans are buffered and reattached in front of the next labeled
//! word, into whichever field that word lands in. The buffer is dropped when
//! the next word is a combination token (glued tokens stay glued), when a
//! value word does not merge into an ongoing value run, when the word's tag
//! is unrecognized, and at end of line. Value words only land while the
//! previous non-whitespace word was also a value, which merges multi-token
//! numeric spans like "1 1/2" without concatenating unrelated numbers that
//! restart after an ingredient or measure.
//!
//! ## Unrecognized tags
//!
//! A span whose tag is absent or outside the closed label set contributes
//! nothing to any field; the scan skips it and continues with the rest of
//! the line.

use crate::pipeline_errors::PipelineError;
use crate::tag_model::{Label, RecipeRow};
use log::{debug, trace};

/// One labeled range of a line, produced by a sequence tagger.
///
/// Whitespace between labeled spans is surfaced as a span whose text is all
/// whitespace; its tag is ignored (a pseudo-label outside the trained set).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaggedSpan {
    /// Raw tag assigned by the tagger, `None` when it produced no tag.
    pub tag: Option<String>,
    /// The substring of the line this span covers.
    pub text: String,
}

impl TaggedSpan {
    /// A span carrying a raw tag.
    pub fn labeled(tag: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            tag: Some(tag.into()),
            text: text.into(),
        }
    }

    /// A whitespace span.
    pub fn whitespace(text: impl Into<String>) -> Self {
        Self {
            tag: None,
            text: text.into(),
        }
    }

    fn is_whitespace(&self) -> bool {
        !self.text.is_empty() && self.text.chars().all(char::is_whitespace)
    }
}

/// Token-level sequence tagger over one lowercased line.
///
/// Implementations must yield spans covering the line left to right.
/// Whitespace ranges may be included or omitted. An implementation with no
/// usable model behind it returns [`PipelineError::TaggerUnavailable`]
/// rather than silently yielding nothing.
pub trait SequenceTagger {
    /// Assign a tag to each word range of `line`.
    fn tag_line(&self, line: &str) -> Result<Vec<TaggedSpan>, PipelineError>;
}

impl<T: SequenceTagger + ?Sized> SequenceTagger for &T {
    fn tag_line(&self, line: &str) -> Result<Vec<TaggedSpan>, PipelineError> {
        (**self).tag_line(line)
    }
}

/// Reconstructs [`RecipeRow`]s from tagged recipe lines.
pub struct RecipeTagger<T: SequenceTagger> {
    tagger: T,
}

impl<T: SequenceTagger> RecipeTagger<T> {
    /// Create a tagger around an injected sequence tagger.
    pub fn new(tagger: T) -> Self {
        Self { tagger }
    }

    /// Tag a multi-line recipe text, one row per non-blank line.
    pub fn tag_text(&self, text: &str) -> Result<Vec<RecipeRow>, PipelineError> {
        let lines: Vec<&str> = text
            .lines()
            .filter(|line| !line.trim().is_empty())
            .collect();
        self.tag_lines(&lines)
    }

    /// Tag a batch of recipe lines, one row per line in input order.
    pub fn tag_lines<S: AsRef<str>>(&self, lines: &[S]) -> Result<Vec<RecipeRow>, PipelineError> {
        let mut rows = Vec::with_capacity(lines.len());
        for line in lines {
            rows.push(self.tag_line(line.as_ref())?);
        }
        debug!("Tagged {} recipe lines", rows.len());
        Ok(rows)
    }

    /// Tag one line and reconstruct its row.
    fn tag_line(&self, line: &str) -> Result<RecipeRow, PipelineError> {
        let lowered = line.to_lowercase();
        let spans = self.tagger.tag_line(&lowered)?;

        let mut row = RecipeRow::new();
        let mut previous = Label::Value;
        let mut pending_whitespace = String::new();

        for span in spans {
            if span.is_whitespace() {
                pending_whitespace.push_str(&span.text);
                continue;
            }

            let label = match span.tag.as_deref().map(str::parse::<Label>) {
                Some(Ok(label)) => label,
                _ => {
                    trace!("Skipping span with unrecognized tag {:?}", span.tag);
                    pending_whitespace.clear();
                    continue;
                }
            };

            match label {
                Label::Value => {
                    // Only an ongoing numeric run accepts further value words.
                    if previous == Label::Value {
                        if !row.value.is_empty() {
                            row.value.push_str(&pending_whitespace);
                        }
                        row.value.push_str(&span.text);
                    }
                }
                Label::Measure => {
                    row.measure.push_str(&pending_whitespace);
                    row.measure.push_str(&span.text);
                }
                Label::Ingredient => {
                    row.ingredient.push_str(&pending_whitespace);
                    row.ingredient.push_str(&span.text);
                }
                Label::Combination => {
                    // Glued tokens never absorb surrounding whitespace.
                    row.combination.push_str(&span.text);
                }
            }

            pending_whitespace.clear();
            previous = label;
        }

        if let Some((value, measure)) = split_combination(&row.combination) {
            trace!(
                "Split combination '{}' into value '{}' and measure '{}'",
                row.combination,
                value,
                measure
            );
            row.value = value;
            row.measure = measure;
        }

        Ok(row)
    }
}

/// Split a glued quantity+unit token into its numeric prefix and unit suffix.
///
/// Scans characters left to right. A single non-digit interrupting a digit
/// run is tolerated (a decimal or fraction separator); the unit text starts
/// at the first non-digit that follows another non-digit, or at a trailing
/// lone non-digit. Returns `None` for an empty token, an all-digit token, or
/// a token with no digit prefix — in those cases the row keeps its
/// combination unsplit.
pub fn split_combination(combination: &str) -> Option<(String, String)> {
    if combination.is_empty() {
        return None;
    }

    let chars: Vec<char> = combination.chars().collect();
    let mut met_not_number = false;
    let mut run_start = 0;
    let mut boundary = None;

    for (i, c) in chars.iter().enumerate() {
        if c.is_ascii_digit() {
            met_not_number = false;
        } else if met_not_number {
            boundary = Some(run_start);
            break;
        } else {
            met_not_number = true;
            run_start = i;
        }
    }

    let boundary = match boundary {
        Some(index) => index,
        // A trailing single non-digit is itself the unit ("5g").
        None if met_not_number => run_start,
        // All digits: no unit boundary.
        None => return None,
    };

    if boundary == 0 {
        return None;
    }

    let value: String = chars[..boundary].iter().collect();
    let measure: String = chars[boundary..].iter().collect();
    Some((value, measure))
}
