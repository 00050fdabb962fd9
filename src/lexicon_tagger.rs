//! # Lexicon Tagger
//!
//! A deterministic, rule-based [`SequenceTagger`] built from the measure
//! lexicon and a pair of numeric-token regexes. The trained sequence model
//! is a pluggable external dependency; this implementation stands in for it
//! in tests and lets the inference flow run without model weights.
//!
//! Classification per word, in order: measure lexicon membership, numeric
//! token ("2", "1/2", "0,25"), glued digits+unit text ("10tbsp"), otherwise
//! ingredient. Whitespace runs between words are surfaced as whitespace
//! spans so the line tagger can reattach them.

use crate::line_tagger::{SequenceTagger, TaggedSpan};
use crate::pipeline_errors::PipelineError;
use crate::tag_model::Label;
use crate::vocabulary::{FLUID_OUNCE_FAMILY, MEASURE_UNITS};
use lazy_static::lazy_static;
use regex::Regex;
use std::collections::HashSet;

lazy_static! {
    /// Numeric token grammar: digits with optional single-character
    /// fraction/decimal separators ("2", "1/2", "0,25", "1.5").
    static ref VALUE_REGEX: Regex =
        Regex::new(r"^\d+(?:[.,/]\d+)*$").expect("Value pattern should be valid");

    /// Glued numeric prefix followed by unit text ("10tbsp", "500fl.oz").
    static ref COMBINATION_REGEX: Regex =
        Regex::new(r"^\d+(?:[.,/]\d+)*[a-z][a-z.]*$").expect("Combination pattern should be valid");

    /// Word-level measure lexicon: the curated unit list plus the individual
    /// words of the multi-word fluid-ounce spellings.
    static ref MEASURE_LEXICON: HashSet<&'static str> = MEASURE_UNITS
        .iter()
        .copied()
        .chain(FLUID_OUNCE_FAMILY.iter().flat_map(|unit| unit.split_whitespace()))
        .collect();
}

/// Rule-based word classifier implementing [`SequenceTagger`].
#[derive(Debug, Default)]
pub struct LexiconTagger;

impl LexiconTagger {
    /// Create a lexicon tagger.
    pub fn new() -> Self {
        Self
    }

    fn classify(word: &str) -> Label {
        if MEASURE_LEXICON.contains(word) {
            Label::Measure
        } else if VALUE_REGEX.is_match(word) {
            Label::Value
        } else if COMBINATION_REGEX.is_match(word) {
            Label::Combination
        } else {
            Label::Ingredient
        }
    }
}

impl SequenceTagger for LexiconTagger {
    fn tag_line(&self, line: &str) -> Result<Vec<TaggedSpan>, PipelineError> {
        let mut spans = Vec::new();
        let mut rest = line;

        while !rest.is_empty() {
            let is_ws = rest
                .chars()
                .next()
                .map(char::is_whitespace)
                .unwrap_or(false);
            let run_len = rest
                .find(|c: char| c.is_whitespace() != is_ws)
                .unwrap_or(rest.len());
            let (run, tail) = rest.split_at(run_len);

            if is_ws {
                spans.push(TaggedSpan::whitespace(run));
            } else {
                spans.push(TaggedSpan::labeled(Self::classify(run).as_str(), run));
            }
            rest = tail;
        }

        Ok(spans)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classification() {
        assert_eq!(LexiconTagger::classify("cup"), Label::Measure);
        assert_eq!(LexiconTagger::classify("fl."), Label::Measure);
        assert_eq!(LexiconTagger::classify("oz"), Label::Measure);
        assert_eq!(LexiconTagger::classify("2"), Label::Value);
        assert_eq!(LexiconTagger::classify("1/2"), Label::Value);
        assert_eq!(LexiconTagger::classify("0,25"), Label::Value);
        assert_eq!(LexiconTagger::classify("10tbsp"), Label::Combination);
        assert_eq!(LexiconTagger::classify("500fl.oz"), Label::Combination);
        assert_eq!(LexiconTagger::classify("milk"), Label::Ingredient);
    }

    #[test]
    fn test_spans_cover_line_in_order() {
        let tagger = LexiconTagger::new();
        let spans = tagger.tag_line("2 cup hot milk").unwrap();

        assert_eq!(
            spans,
            vec![
                TaggedSpan::labeled("value", "2"),
                TaggedSpan::whitespace(" "),
                TaggedSpan::labeled("measure", "cup"),
                TaggedSpan::whitespace(" "),
                TaggedSpan::labeled("ingredient", "hot"),
                TaggedSpan::whitespace(" "),
                TaggedSpan::labeled("ingredient", "milk"),
            ]
        );

        let reassembled: String = spans.iter().map(|s| s.text.as_str()).collect();
        assert_eq!(reassembled, "2 cup hot milk");
    }

    #[test]
    fn test_empty_line_yields_no_spans() {
        let tagger = LexiconTagger::new();
        assert!(tagger.tag_line("").unwrap().is_empty());
    }
}
