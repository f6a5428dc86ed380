//! Command implementations for the Correcto CLI.

use std::io::{self, Read};
use std::sync::Arc;

use anyhow::Context;
use tracing::info;

use crate::cli::args::*;
use crate::cli::output::*;
use crate::error::Result;
use crate::spelling::*;

/// Execute a CLI command.
pub fn execute_command(args: CorrectoArgs) -> Result<()> {
    let engine = build_engine(&args)?;

    match &args.command {
        Command::Check(check_args) => check_text(check_args.clone(), engine, &args),
        Command::Suggest(suggest_args) => suggest_word(suggest_args.clone(), &engine, &args),
        Command::Stats => show_stats(&engine, &args),
    }
}

/// Resolve the suggestion configuration from the config file and flags.
pub fn load_config(args: &CorrectoArgs) -> Result<SuggestionConfig> {
    let mut config = match &args.config {
        Some(path) => SuggestionConfig::load_from_file(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => SuggestionConfig::default(),
    };

    if let Some(max_suggestions) = args.max_suggestions {
        config.max_suggestions = max_suggestions;
    }

    Ok(config)
}

/// Load the dictionary and build the engine. A missing dictionary yields an empty engine.
pub fn build_engine(args: &CorrectoArgs) -> Result<Arc<SuggestionEngine>> {
    let config = load_config(args)?;
    let dictionary = SpellingDictionary::load_or_empty(&args.dictionary);
    let engine = SuggestionEngine::with_config(dictionary, config);

    info!(
        dictionary = %args.dictionary.display(),
        words = engine.stats().words,
        "suggestion engine ready"
    );

    Ok(Arc::new(engine))
}

/// Check text from the arguments, or from stdin when none was given.
fn check_text(args: CheckArgs, engine: Arc<SuggestionEngine>, cli_args: &CorrectoArgs) -> Result<()> {
    let text = if args.text.is_empty() {
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer)?;
        buffer
    } else {
        args.text.join(" ")
    };

    let max_suggestions = engine.config().max_suggestions;
    let checker = SpellChecker::new(engine);
    let report = checker.check(&text, max_suggestions)?;

    output_result(&report, cli_args)
}

/// Suggest corrections for a single word.
fn suggest_word(args: SuggestArgs, engine: &SuggestionEngine, cli_args: &CorrectoArgs) -> Result<()> {
    let results = SuggestionResults {
        correct: engine.is_correct(&args.word),
        tolerance: engine.adaptive_tolerance(&args.word),
        suggestions: engine.suggest_detailed(&args.word, engine.config().max_suggestions),
        word: args.word,
    };

    output_result(&results, cli_args)
}

/// Show dictionary statistics.
fn show_stats(engine: &SuggestionEngine, cli_args: &CorrectoArgs) -> Result<()> {
    let stats = DictionaryStats {
        dictionary: cli_args.dictionary.display().to_string(),
        engine: engine.stats(),
    };

    output_result(&stats, cli_args)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn dictionary_file(words: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{words}").unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_build_engine_from_file() {
        let file = dictionary_file("cat cats\ncar\n");
        let path = file.path().to_str().unwrap();
        let args = CorrectoArgs::try_parse_from(["correcto", "-d", path, "stats"]).unwrap();

        let engine = build_engine(&args).unwrap();
        assert_eq!(engine.stats().words, 3);
        assert!(engine.is_correct("CAT"));
    }

    #[test]
    fn test_build_engine_with_missing_dictionary() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.txt");
        let args = CorrectoArgs::try_parse_from([
            "correcto",
            "--dictionary",
            missing.to_str().unwrap(),
            "stats",
        ])
        .unwrap();

        let engine = build_engine(&args).unwrap();
        assert_eq!(engine.stats().words, 0);
        assert!(engine.suggest("anything", 5).is_empty());
    }

    #[test]
    fn test_max_suggestions_flag_overrides_config_file() {
        let mut config_file = NamedTempFile::new().unwrap();
        write!(config_file, r#"{{"max_suggestions": 7}}"#).unwrap();
        config_file.flush().unwrap();

        let path = config_file.path().to_str().unwrap();
        let args = CorrectoArgs::try_parse_from(["correcto", "-c", path, "stats"]).unwrap();
        assert_eq!(load_config(&args).unwrap().max_suggestions, 7);

        let args =
            CorrectoArgs::try_parse_from(["correcto", "-c", path, "-n", "2", "stats"]).unwrap();
        assert_eq!(load_config(&args).unwrap().max_suggestions, 2);
    }

    #[test]
    fn test_invalid_config_file_is_an_error() {
        let mut config_file = NamedTempFile::new().unwrap();
        write!(config_file, r#"{{"tolerance": {{"short": 5}}}}"#).unwrap();
        config_file.flush().unwrap();

        let path = config_file.path().to_str().unwrap();
        let args = CorrectoArgs::try_parse_from(["correcto", "-c", path, "stats"]).unwrap();
        let message = load_config(&args).unwrap_err().to_string();
        assert!(message.starts_with("failed to load config "));
        assert!(message.contains("Invalid configuration"));
    }
}
