//! Command implementations for the spellrank CLI.

use std::time::Instant;

use log::{debug, info};

use crate::classifier::{Assumptions, Classifier, group_samples, load_training_data};
use crate::cli::args::*;
use crate::cli::output::*;
use crate::error::{Result, SpellRankError};
use crate::spelling::{CorrectionSession, CorrectorConfig, Dictionary, Word, ZipfFrequency};
use crate::storage::ClassifierStore;
use crate::storage::file::FileClassifierStore;

/// Execute a CLI command.
pub fn execute_command(args: SpellRankArgs) -> Result<()> {
    match &args.command {
        Command::Train(train_args) => train(train_args, &args),
        Command::Classify(classify_args) => classify(classify_args, &args),
        Command::Suggest(suggest_args) => suggest(suggest_args, &args),
    }
}

fn open_store(args: &SpellRankArgs) -> Result<FileClassifierStore> {
    FileClassifierStore::open(&args.store).map(|store| store.with_pretty(args.pretty))
}

/// Train the stored classifier from a sample file.
fn train(args: &TrainArgs, cli_args: &SpellRankArgs) -> Result<()> {
    let store = open_store(cli_args)?;

    let mut classifier = if !args.reset && store.exists(&cli_args.key) {
        Classifier::load_from(&store, &cli_args.key)?
    } else {
        Classifier::new()
    };

    let samples = load_training_data(&args.data_file)?;
    let sample_count = samples.len();
    let dataset = group_samples(samples);
    info!(
        "training '{}' from {} ({sample_count} samples)",
        cli_args.key,
        args.data_file.display()
    );

    classifier.train(&dataset);
    classifier.save_to(&store, &cli_args.key)?;

    output_result(
        "Classifier trained",
        &TrainingResult {
            key: cli_args.key.clone(),
            samples: sample_count,
            classes_trained: dataset.len(),
            classes_registered: classifier.len(),
        },
        cli_args,
    )
}

/// Classify features with the stored classifier.
fn classify(args: &ClassifyArgs, cli_args: &SpellRankArgs) -> Result<()> {
    let store = open_store(cli_args)?;
    let classifier = Classifier::load_from(&store, &cli_args.key)?;
    let assumptions = parse_assumptions(&args.assumptions)?;

    let prediction = classifier.classify_with(&args.features, &assumptions);
    debug!("classified {:?} as {:?}", args.features, prediction.class);

    output_result(
        "Classification",
        &ClassificationResult {
            class: prediction.class.map(str::to_string),
            probability: prediction.probability,
        },
        cli_args,
    )
}

/// Rank corrections for each word with a fresh correction session.
fn suggest(args: &SuggestArgs, cli_args: &SpellRankArgs) -> Result<()> {
    let start_time = Instant::now();

    let config = match &args.config {
        Some(path) => CorrectorConfig::from_file(path)?,
        None => CorrectorConfig::default(),
    };
    let limit = args.limit.unwrap_or(config.max_displayed);

    let store = open_store(cli_args)?;
    let classifier = Classifier::load_from(&store, &cli_args.key)?;
    let dictionary = Dictionary::load_from_file(&args.dictionary)?;
    let dictionary_words = dictionary.len();
    let frequency = ZipfFrequency::with_exponent(args.zipf_exponent)?;

    let mut session = CorrectionSession::with_config(classifier, dictionary, frequency, config)?;
    session.update(flag_words(&args.words)?);

    let mut words = Vec::with_capacity(args.words.len());
    for _ in 0..args.words.len() {
        let entry = session.next()?;
        words.push(WordSuggestions {
            word: entry.word.value.clone(),
            start: entry.word.start,
            end: entry.word.end,
            corrections: entry
                .corrections
                .iter()
                .take(limit)
                .map(|c| RankedCandidate {
                    candidate: c.candidate.clone(),
                    probability: c.probability,
                })
                .collect(),
        });
    }

    output_result(
        "Suggested corrections",
        &SuggestionResults {
            words,
            dictionary_words,
            duration_ms: start_time.elapsed().as_millis() as u64,
        },
        cli_args,
    )
}

/// Lay the words out as if separated by single spaces.
fn flag_words(words: &[String]) -> Result<Vec<Word>> {
    let mut flagged = Vec::with_capacity(words.len());
    let mut offset = 0;
    for word in words {
        if word.is_empty() {
            return Err(SpellRankError::invalid_argument("words must be non-empty"));
        }
        let end = offset + word.chars().count();
        flagged.push(Word::new(word.as_str(), offset, end));
        offset = end + 1;
    }
    Ok(flagged)
}

/// Parse `CLASS=WEIGHT` pairs.
fn parse_assumptions(pairs: &[String]) -> Result<Assumptions> {
    let mut assumptions = Assumptions::new();
    for pair in pairs {
        let (class, weight) = pair.split_once('=').ok_or_else(|| {
            SpellRankError::invalid_argument(format!("expected CLASS=WEIGHT, got '{pair}'"))
        })?;
        let weight: f64 = weight.trim().parse().map_err(|_| {
            SpellRankError::invalid_argument(format!("invalid weight in '{pair}'"))
        })?;
        assumptions.insert(class.trim().to_string(), weight);
    }
    Ok(assumptions)
}
