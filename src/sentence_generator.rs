//! # Sentence Generator
//!
//! Combines the three vocabularies into labeled training sentences under a
//! small set of templates. Two pattern regimes alternate across successive
//! ingredients so the corpus mixes bare-ingredient sentences with quantified
//! ones and with glued quantity+unit tokens; the downstream tagger then sees
//! ingredient spans both with and without preceding quantity context, and
//! sees the combination pattern distinctly from cleanly spaced tokens.

use crate::tag_model::{Label, TaggedSentence, WordToken};
use log::{info, warn};
use std::collections::HashSet;

/// Generate the deduplicated set of labeled training sentences.
///
/// Ingredients are visited in their natural set order. Two independent
/// round-robin cursors walk the measure and value pools, wrapping to the
/// start when exhausted, so both pools are reused across ingredients when
/// vocabulary sizes differ. A regime toggle alternates per ingredient:
///
/// - Regime A: `[value, ingredient]`, `[value+measure glued, ingredient]`
/// - Regime B: `[ingredient]`
///
/// and every ingredient additionally yields `[value, measure, ingredient]`.
///
/// With empty measures or values, no sentence can be formed and the result
/// is empty.
pub fn generate_sentences(
    ingredients: &HashSet<WordToken>,
    measures: &[WordToken],
    values: &[WordToken],
) -> HashSet<TaggedSentence> {
    let mut sentences: HashSet<TaggedSentence> = HashSet::new();

    if ingredients.is_empty() || measures.is_empty() || values.is_empty() {
        warn!(
            "Cannot generate sentences: {} ingredients, {} measures, {} values",
            ingredients.len(),
            measures.len(),
            values.len()
        );
        return sentences;
    }

    let mut measure_index = 0;
    let mut value_index = 0;
    let mut is_first_way = true;

    for ingredient in ingredients {
        if measure_index == measures.len() {
            measure_index = 0;
        }
        if value_index == values.len() {
            value_index = 0;
        }

        let measure = &measures[measure_index];
        let value = &values[value_index];

        measure_index += 1;
        value_index += 1;

        // Glued quantity+unit, representing an un-segmented OCR read.
        let glued = format!("{}{}", value.text, measure.text);
        let combination = WordToken::new(glued, Label::Combination);

        if is_first_way {
            // "10 sugar"
            sentences.insert(TaggedSentence::new(vec![
                value.clone(),
                ingredient.clone(),
            ]));
            // "10tbsp sugar"
            sentences.insert(TaggedSentence::new(vec![
                combination,
                ingredient.clone(),
            ]));
        } else {
            // "sugar"
            sentences.insert(TaggedSentence::new(vec![ingredient.clone()]));
        }

        // "10 tbsp sugar"
        sentences.insert(TaggedSentence::new(vec![
            value.clone(),
            measure.clone(),
            ingredient.clone(),
        ]));

        is_first_way = !is_first_way;
    }

    info!(
        "Generated {} unique sentences from {} ingredients",
        sentences.len(),
        ingredients.len()
    );
    sentences
}
