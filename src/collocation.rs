//! # Collocation Splitting
//!
//! The sequence tagger operates at word granularity, but vocabulary entries
//! may be phrases ("cold black tea", "fl. oz"). This pass expands every
//! multi-word token into individual words, each inheriting the original
//! token's label, so the final corpus is strictly one token per word.

use crate::corpus::SentenceRecord;
use crate::tag_model::TaggedSentence;
use log::debug;
use std::collections::HashSet;

/// Split multi-word tokens into per-word records.
///
/// For each sentence, each token's text is split on interior whitespace and
/// every part is appended with the token's label, preserving relative order
/// within the sentence. Sentences of single-word tokens pass through
/// unchanged apart from the flattening into parallel arrays.
pub fn split_collocations(sentences: &HashSet<TaggedSentence>) -> Vec<SentenceRecord> {
    let records: Vec<SentenceRecord> = sentences
        .iter()
        .map(|sentence| {
            let mut record = SentenceRecord::new();
            for word in sentence.tokens() {
                for part in word.text.split_whitespace() {
                    record.push(part.to_string(), word.label);
                }
            }
            record
        })
        .collect();

    debug!(
        "Split {} sentences into {} word-level records",
        sentences.len(),
        records.len()
    );
    records
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tag_model::{Label, WordToken};

    fn sentences_of(sentence: TaggedSentence) -> HashSet<TaggedSentence> {
        [sentence].into_iter().collect()
    }

    #[test]
    fn test_single_word_tokens_pass_through() {
        let sentence = TaggedSentence::new(vec![
            WordToken::new("10", Label::Value),
            WordToken::new("tbsp", Label::Measure),
            WordToken::new("sugar", Label::Ingredient),
        ]);

        let records = split_collocations(&sentences_of(sentence));

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].tokens, vec!["10", "tbsp", "sugar"]);
        assert_eq!(
            records[0].labels,
            vec![Label::Value, Label::Measure, Label::Ingredient]
        );
    }

    #[test]
    fn test_measure_collocation_splits() {
        let sentence = TaggedSentence::new(vec![WordToken::new("fl. oz", Label::Measure)]);

        let records = split_collocations(&sentences_of(sentence));

        assert_eq!(records[0].tokens, vec!["fl.", "oz"]);
        assert_eq!(records[0].labels, vec![Label::Measure, Label::Measure]);
    }

    #[test]
    fn test_ingredient_collocation_splits_in_place() {
        let sentence = TaggedSentence::new(vec![
            WordToken::new("2", Label::Value),
            WordToken::new("cold black tea", Label::Ingredient),
        ]);

        let records = split_collocations(&sentences_of(sentence));

        assert_eq!(records[0].tokens, vec!["2", "cold", "black", "tea"]);
        assert_eq!(
            records[0].labels,
            vec![
                Label::Value,
                Label::Ingredient,
                Label::Ingredient,
                Label::Ingredient
            ]
        );
    }

    #[test]
    fn test_one_record_per_sentence() {
        let sentences: HashSet<TaggedSentence> = [
            TaggedSentence::new(vec![WordToken::new("sugar", Label::Ingredient)]),
            TaggedSentence::new(vec![WordToken::new("milk", Label::Ingredient)]),
        ]
        .into_iter()
        .collect();

        let records = split_collocations(&sentences);
        assert_eq!(records.len(), 2);
    }
}
