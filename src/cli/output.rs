//! Output formatting for CLI commands.

use serde::{Deserialize, Serialize};

use crate::cli::args::{OutputFormat, SpellRankArgs};
use crate::error::Result;

/// Result structure for training.
#[derive(Debug, Serialize, Deserialize)]
pub struct TrainingResult {
    pub key: String,
    pub samples: usize,
    pub classes_trained: usize,
    pub classes_registered: usize,
}

/// Result structure for classification.
#[derive(Debug, Serialize, Deserialize)]
pub struct ClassificationResult {
    pub class: Option<String>,
    pub probability: f64,
}

/// Corrections for one word.
#[derive(Debug, Serialize, Deserialize)]
pub struct WordSuggestions {
    pub word: String,
    pub start: usize,
    pub end: usize,
    pub corrections: Vec<RankedCandidate>,
}

/// One ranked candidate.
#[derive(Debug, Serialize, Deserialize)]
pub struct RankedCandidate {
    pub candidate: String,
    pub probability: f64,
}

/// Result structure for suggestions.
#[derive(Debug, Serialize, Deserialize)]
pub struct SuggestionResults {
    pub words: Vec<WordSuggestions>,
    pub dictionary_words: usize,
    pub duration_ms: u64,
}

/// Output a command result in the requested format.
pub fn output_result<T: Serialize>(message: &str, result: &T, args: &SpellRankArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => output_human(message, result, args),
        OutputFormat::Json => output_json(result, args),
    }
}

/// Output in human-readable format.
fn output_human<T: Serialize>(message: &str, result: &T, args: &SpellRankArgs) -> Result<()> {
    if args.verbosity() > 0 {
        println!("{message}");
        println!();
    }

    let value = serde_json::to_value(result)?;
    if let Some(words) = value.get("words").and_then(|w| w.as_array()) {
        output_suggestions_human(words);
    } else {
        output_generic_human(&value);
    }
    Ok(())
}

fn output_suggestions_human(words: &[serde_json::Value]) {
    for word in words {
        let text = word.get("word").and_then(|w| w.as_str()).unwrap_or_default();
        let corrections = word
            .get("corrections")
            .and_then(|c| c.as_array())
            .map(Vec::as_slice)
            .unwrap_or_default();

        if corrections.is_empty() {
            println!("{text}: no corrections");
            continue;
        }

        println!("{text}:");
        for (i, correction) in corrections.iter().enumerate() {
            let candidate = correction
                .get("candidate")
                .and_then(|c| c.as_str())
                .unwrap_or_default();
            let probability = correction
                .get("probability")
                .and_then(|p| p.as_f64())
                .unwrap_or_default();
            println!("  {:>2}. {candidate:<20} {probability:.6e}", i + 1);
        }
    }
}

fn output_generic_human(value: &serde_json::Value) {
    match value.as_object() {
        Some(obj) => {
            for (key, value) in obj {
                match value {
                    serde_json::Value::Null => println!("{key}: -"),
                    serde_json::Value::String(s) => println!("{key}: {s}"),
                    other => println!("{key}: {other}"),
                }
            }
        }
        None => println!("{value}"),
    }
}

/// Output in JSON format.
fn output_json<T: Serialize>(result: &T, args: &SpellRankArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };
    println!("{json}");
    Ok(())
}
