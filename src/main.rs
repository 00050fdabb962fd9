use anyhow::Result;
use log::info;
use std::env;

use recipe_tagger::collocation::split_collocations;
use recipe_tagger::corpus::{write_corpus, TrainingCorpus};
use recipe_tagger::sentence_generator::generate_sentences;
use recipe_tagger::vocabulary::{
    build_ingredients, build_measures, build_values, load_ingredient_corpus,
};

fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    info!("Starting training dataset generation");

    // Load environment variables from .env file
    dotenv::dotenv().ok();

    // Source ingredient corpus and output destination
    let corpus_path = env::var("INGREDIENT_CORPUS").expect("INGREDIENT_CORPUS must be set");
    let output_path = env::var("CORPUS_OUTPUT").expect("CORPUS_OUTPUT must be set");

    let raw_names = load_ingredient_corpus(&corpus_path);

    let ingredients = build_ingredients(&raw_names);
    let measures = build_measures();
    let values = build_values();

    info!("Ingredients: {}", ingredients.len());
    info!("Measures: {}", measures.len());
    info!("Values: {}", values.len());

    let sentences = generate_sentences(&ingredients, &measures, &values);
    let records = split_collocations(&sentences);
    let corpus = TrainingCorpus::new(records);

    write_corpus(&corpus, &output_path)?;

    info!(
        "New training corpus with {} sentences was saved to {}",
        corpus.objects.len(),
        output_path
    );

    Ok(())
}
