//! # Tagging Data Model
//!
//! This module defines the data structures shared by the dataset-generation
//! pipeline and the recipe line tagger: the closed label set, labeled word
//! tokens, labeled sentences, and the structured per-line output record.
//!
//! ## Core Concepts
//!
//! - **Label**: one of `value`, `measure`, `ingredient`, `combination`
//! - **WordToken**: a vocabulary entry or sentence element with its label
//! - **TaggedSentence**: an ordered token sequence forming one training example
//! - **RecipeRow**: the four-field structured record built for one text line
//!
//! ## Usage
//!
//! ```rust
//! use recipe_tagger::tag_model::{Label, WordToken};
//!
//! let token = WordToken::new("tbsp", Label::Measure);
//! assert_eq!(token.label.to_string(), "measure");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Closed set of labels assigned to recipe words.
///
/// `Combination` marks an un-segmented run of digits glued to unit-of-measure
/// characters with no whitespace (e.g. "10tbsp"), which the tokenizer that
/// produced the text could not split.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Label {
    /// Numeric quantity (e.g. "2", "1/2", "0,25")
    Value,
    /// Unit of measure (e.g. "tbsp", "fl. oz")
    Measure,
    /// Ingredient name (e.g. "hot milk")
    Ingredient,
    /// Glued quantity+unit token (e.g. "10tbsp")
    Combination,
}

impl Label {
    /// All labels in the closed set.
    pub const ALL: [Label; 4] = [
        Label::Value,
        Label::Measure,
        Label::Ingredient,
        Label::Combination,
    ];

    /// The string form used in the training corpus and by sequence taggers.
    pub fn as_str(&self) -> &'static str {
        match self {
            Label::Value => "value",
            Label::Measure => "measure",
            Label::Ingredient => "ingredient",
            Label::Combination => "combination",
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a tag string falls outside the closed label set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnrecognizedTag(pub String);

impl fmt::Display for UnrecognizedTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unrecognized tag: {}", self.0)
    }
}

impl std::error::Error for UnrecognizedTag {}

impl FromStr for Label {
    type Err = UnrecognizedTag;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "value" => Ok(Label::Value),
            "measure" => Ok(Label::Measure),
            "ingredient" => Ok(Label::Ingredient),
            "combination" => Ok(Label::Combination),
            other => Err(UnrecognizedTag(other.to_string())),
        }
    }
}

/// A single labeled word or phrase.
///
/// Equality and hashing cover the (text, label) pair, so identical tokens
/// deduplicate when held in a set.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WordToken {
    /// The token text; may contain interior spaces for multi-word entries
    /// ("fl. oz", "cold black tea") until collocation splitting.
    pub text: String,
    /// The label shared by every word of the token.
    pub label: Label,
}

impl WordToken {
    /// Create a new labeled token.
    pub fn new(text: impl Into<String>, label: Label) -> Self {
        Self {
            text: text.into(),
            label,
        }
    }
}

/// One synthetic training example: an ordered sequence of labeled tokens.
///
/// Token order matters for equality, so two sentences with the same tokens in
/// a different order are distinct; set membership deduplicates accidental
/// repeat instantiations of the same template.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TaggedSentence(pub Vec<WordToken>);

impl TaggedSentence {
    /// Build a sentence from tokens in order.
    pub fn new(tokens: Vec<WordToken>) -> Self {
        Self(tokens)
    }

    /// Tokens in sentence order.
    pub fn tokens(&self) -> &[WordToken] {
        &self.0
    }
}

impl From<Vec<WordToken>> for TaggedSentence {
    fn from(tokens: Vec<WordToken>) -> Self {
        Self(tokens)
    }
}

/// Structured record reconstructed from one tagged recipe line.
///
/// Built incrementally during a single left-to-right scan of the line's
/// tagged words; the combination split may overwrite `value` and `measure`
/// afterwards. Fields with no content hold the empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeRow {
    /// Numeric quantity, possibly multi-token ("1 1/2").
    pub value: String,
    /// Unit of measure, as scanned (may carry a leading space).
    pub measure: String,
    /// Ingredient phrase, as scanned (typically carries a leading space).
    pub ingredient: String,
    /// Raw glued quantity+unit token when the line had one, otherwise empty.
    pub combination: String,
}

impl RecipeRow {
    /// Create an empty row.
    pub fn new() -> Self {
        Self::default()
    }

    /// Measure cleaned up for display: lowercased and trimmed.
    pub fn display_measure(&self) -> String {
        self.measure.to_lowercase().trim().to_string()
    }

    /// Ingredient cleaned up for display: trimmed.
    pub fn display_ingredient(&self) -> String {
        self.ingredient.trim().to_string()
    }

    /// True when no field received any content.
    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
            && self.measure.is_empty()
            && self.ingredient.is_empty()
            && self.combination.is_empty()
    }
}

impl fmt::Display for RecipeRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "value='{}' measure='{}' ingredient='{}' combination='{}'",
            self.value, self.measure, self.ingredient, self.combination
        )
    }
}
