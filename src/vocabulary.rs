//! # Vocabulary Builder
//!
//! Builds the three labeled token pools the sentence generator draws from:
//! ingredient names (deduplicated, loaded from a recipe corpus), measurement
//! units (curated list with the sparse fluid-ounce family oversampled), and
//! numeric values (fractions, both decimal locale styles, small integers and
//! a generated range).
//!
//! Vocabulary loading failures are non-fatal: a missing or malformed corpus
//! yields an empty pool, which downstream sentence generation degrades to
//! zero sentences. Callers detect this through the empty result, not through
//! an error.

use crate::tag_model::{Label, WordToken};
use log::{debug, info, warn};
use rand::seq::SliceRandom;
use rand::thread_rng;
use serde::Deserialize;
use std::collections::HashSet;
use std::fs;
use std::path::Path;

/// Curated measurement unit spellings, abbreviations and plurals.
///
/// Shared with the lexicon tagger so training and inference agree on what
/// counts as a unit.
pub const MEASURE_UNITS: &[&str] = &[
    "tbsp",
    "tbsp.",
    "tablespoon",
    "tablespoons",
    "tb.",
    "tb",
    "tbl.",
    "tbl",
    "tsp",
    "tsp.",
    "teaspoon",
    "teaspoons",
    "oz",
    "oz.",
    "ounce",
    "ounces",
    "c",
    "c.",
    "cup",
    "cups",
    "qt",
    "qt.",
    "quart",
    "pt",
    "pt.",
    "pint",
    "pints",
    "ml",
    "milliliter",
    "milliliters",
    "g",
    "gram",
    "grams",
    "kg",
    "kilogram",
    "kilograms",
    "l",
    "liter",
    "liters",
    "pinch",
    "pinches",
    "gal",
    "gal.",
    "gallons",
    "lb.",
    "lb",
    "pkg.",
    "pkg",
    "package",
    "packages",
    "can",
    "cans",
    "box",
    "boxes",
    "stick",
    "sticks",
    "bag",
    "bags",
];

/// Multi-word fluid-ounce spellings, underrepresented in the curated list
/// and therefore oversampled during measure vocabulary construction.
pub const FLUID_OUNCE_FAMILY: &[&str] = &["fluid ounce", "fluid ounces", "fl. oz"];

/// Repetition count applied to the fluid-ounce family.
const FLUID_OUNCE_OVERSAMPLE: usize = 10;

/// One entry of the ingredient corpus file: a recipe's ingredient names.
#[derive(Debug, Deserialize)]
struct IngredientEntry {
    ingredients: Vec<String>,
}

/// Load raw ingredient names from a JSON corpus file.
///
/// The corpus is an array of objects each carrying an `ingredients` string
/// array; all arrays are flattened in order. A missing file or malformed
/// JSON is logged and yields an empty list rather than an error, so dataset
/// generation degrades gracefully.
pub fn load_ingredient_corpus<P: AsRef<Path>>(path: P) -> Vec<String> {
    let path = path.as_ref();

    let data = match fs::read_to_string(path) {
        Ok(data) => data,
        Err(err) => {
            warn!(
                "Ingredient corpus unavailable at {}: {}",
                path.display(),
                err
            );
            return Vec::new();
        }
    };

    let entries: Vec<IngredientEntry> = match serde_json::from_str(&data) {
        Ok(entries) => entries,
        Err(err) => {
            warn!(
                "Couldn't decode ingredient corpus at {}: {}",
                path.display(),
                err
            );
            return Vec::new();
        }
    };

    let names: Vec<String> = entries.into_iter().flat_map(|e| e.ingredients).collect();
    info!(
        "Loaded {} raw ingredient names from {}",
        names.len(),
        path.display()
    );
    names
}

/// Build the deduplicated ingredient token pool.
///
/// Deduplication is by exact, case-sensitive string match; empty names are
/// discarded.
pub fn build_ingredients(raw_names: &[String]) -> HashSet<WordToken> {
    let ingredients: HashSet<WordToken> = raw_names
        .iter()
        .filter(|name| !name.is_empty())
        .map(|name| WordToken::new(name.clone(), Label::Ingredient))
        .collect();

    debug!(
        "Built {} unique ingredient tokens from {} raw names",
        ingredients.len(),
        raw_names.len()
    );
    ingredients
}

/// Build the measure token pool.
///
/// Starts from the curated unit list, appends the fluid-ounce family
/// repeated to correct its underrepresentation, and shuffles. Order carries
/// no meaning; shuffling only avoids positional bias when the pool is later
/// paired index-wise with the value pool.
pub fn build_measures() -> Vec<WordToken> {
    let mut measures: Vec<WordToken> = MEASURE_UNITS
        .iter()
        .map(|unit| WordToken::new(*unit, Label::Measure))
        .collect();

    for unit in FLUID_OUNCE_FAMILY {
        for _ in 0..FLUID_OUNCE_OVERSAMPLE {
            measures.push(WordToken::new(*unit, Label::Measure));
        }
    }

    measures.shuffle(&mut thread_rng());
    debug!("Built {} measure tokens", measures.len());
    measures
}

/// Build the value token pool.
///
/// Curated simple fractions, comma and dot decimal variants (real-world OCR
/// text uses either locale style) and the integers 1-9, each duplicated once
/// to balance frequency against the generated range; then every multiple of
/// 25 between 10 and 1000; shuffled.
pub fn build_values() -> Vec<WordToken> {
    let curated = [
        "1/2", "1/3", "1/4", "1/5", "2/3", "3/4", "0,25", "0.25", "0,5", "1,5", "0.5", "1.5",
        "2.5", "2,5", "1", "2", "3", "4", "5", "6", "7", "8", "9",
    ];

    let mut values: Vec<String> = Vec::with_capacity(curated.len() * 2 + 40);
    for value in curated {
        values.push(value.to_string());
        values.push(value.to_string());
    }

    values.extend((10..=1000u32).filter(|n| n % 25 == 0).map(|n| n.to_string()));

    let mut tokens: Vec<WordToken> = values
        .into_iter()
        .map(|value| WordToken::new(value, Label::Value))
        .collect();

    tokens.shuffle(&mut thread_rng());
    debug!("Built {} value tokens", tokens.len());
    tokens
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_build_ingredients_deduplicates() {
        let raw = vec![
            "sugar".to_string(),
            "sugar".to_string(),
            "cold black tea".to_string(),
            "".to_string(),
        ];

        let ingredients = build_ingredients(&raw);

        assert_eq!(ingredients.len(), 2);
        let texts: HashSet<&str> = ingredients.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts.len(), ingredients.len());
        assert!(ingredients.iter().all(|t| t.label == Label::Ingredient));
    }

    #[test]
    fn test_build_ingredients_is_case_sensitive() {
        let raw = vec!["Sugar".to_string(), "sugar".to_string()];
        assert_eq!(build_ingredients(&raw).len(), 2);
    }

    #[test]
    fn test_build_measures_labels_and_oversampling() {
        let measures = build_measures();

        assert!(measures.iter().all(|t| t.label == Label::Measure));
        assert_eq!(measures.len(), MEASURE_UNITS.len() + FLUID_OUNCE_FAMILY.len() * 10);

        let fl_oz_count = measures.iter().filter(|t| t.text == "fl. oz").count();
        assert_eq!(fl_oz_count, 10);
    }

    #[test]
    fn test_build_values_labels_and_contents() {
        let values = build_values();

        assert!(values.iter().all(|t| t.label == Label::Value));

        // Curated entries appear twice.
        assert_eq!(values.iter().filter(|t| t.text == "1/2").count(), 2);
        assert_eq!(values.iter().filter(|t| t.text == "0,25").count(), 2);

        // Generated range entries appear once.
        assert_eq!(values.iter().filter(|t| t.text == "25").count(), 1);
        assert_eq!(values.iter().filter(|t| t.text == "1000").count(), 1);
        assert!(!values.iter().any(|t| t.text == "10"));

        // 23 curated entries twice, 40 multiples of 25 in 10..=1000.
        assert_eq!(values.len(), 23 * 2 + 40);
    }

    #[test]
    fn test_load_ingredient_corpus_missing_file_is_empty() {
        let names = load_ingredient_corpus("/nonexistent/ingredient_corpus.json");
        assert!(names.is_empty());
    }

    #[test]
    fn test_load_ingredient_corpus_malformed_json_is_empty() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "not json at all").unwrap();

        let names = load_ingredient_corpus(file.path());
        assert!(names.is_empty());
    }

    #[test]
    fn test_load_ingredient_corpus_flattens_entries() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"ingredients": ["sugar", "milk"]}}, {{"ingredients": ["sugar"]}}]"#
        )
        .unwrap();

        let names = load_ingredient_corpus(file.path());
        assert_eq!(names, vec!["sugar", "milk", "sugar"]);

        // Dedup happens at token construction, not at load time.
        assert_eq!(build_ingredients(&names).len(), 2);
    }
}
