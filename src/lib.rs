//! # Recipe Tagger
//!
//! A natural-language tagging pipeline for recipe text. Converts free-form
//! ingredient lines ("2 cup hot milk") into structured records with four
//! fields (quantity, unit of measure, ingredient name, and a raw glued
//! quantity+unit token), and generates the synthetic labeled corpus used to
//! train the external sequence-tagging model it consumes.

pub mod collocation;
pub mod corpus;
pub mod lexicon_tagger;
pub mod line_tagger;
pub mod pipeline_errors;
pub mod sentence_generator;
pub mod tag_model;
pub mod vocabulary;
