//! Output formatting for CLI commands.

use std::io::{self, Write};

use serde::{Deserialize, Serialize};

use crate::cli::args::{CorrectoArgs, OutputFormat};
use crate::error::Result;
use crate::spelling::{CheckReport, EngineStats, Suggestion};

/// Result structure for the `suggest` command.
#[derive(Debug, Serialize, Deserialize)]
pub struct SuggestionResults {
    pub word: String,
    pub correct: bool,
    pub tolerance: usize,
    pub suggestions: Vec<Suggestion>,
}

/// Result structure for the `stats` command.
#[derive(Debug, Serialize, Deserialize)]
pub struct DictionaryStats {
    pub dictionary: String,
    #[serde(flatten)]
    pub engine: EngineStats,
}

/// Types that know how to render themselves for a terminal.
pub trait HumanOutput {
    /// Write the human-readable form of `self` to `out`.
    fn write_human(&self, out: &mut dyn Write) -> io::Result<()>;
}

/// Output a result in the specified format.
pub fn output_result<T: Serialize + HumanOutput>(result: &T, args: &CorrectoArgs) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_result(result, args.output_format, args.pretty, &mut out)?;
    out.flush()?;
    Ok(())
}

/// Write a result in the given format to `out`.
pub fn write_result<T: Serialize + HumanOutput>(
    result: &T,
    format: OutputFormat,
    pretty: bool,
    out: &mut dyn Write,
) -> Result<()> {
    match format {
        OutputFormat::Human => result.write_human(out)?,
        OutputFormat::Json => {
            let json = if pretty {
                serde_json::to_string_pretty(result)?
            } else {
                serde_json::to_string(result)?
            };
            writeln!(out, "{json}")?;
        }
    }
    Ok(())
}

impl HumanOutput for CheckReport {
    fn write_human(&self, out: &mut dyn Write) -> io::Result<()> {
        for token in &self.correct {
            writeln!(out, "'{}' is a Correct word.", token.text)?;
        }

        if self.all_correct() {
            writeln!(out, "Words are correct!")?;
            return Ok(());
        }

        let marked: Vec<String> = self
            .misspelled
            .iter()
            .map(|m| format!("[{}]", m.token.text))
            .collect();
        writeln!(out, "Word misspelled: {}", marked.join(" "))?;

        for misspelling in &self.misspelled {
            if misspelling.has_suggestions() {
                writeln!(out, "Suggestions for '{}':", misspelling.token.text)?;
                for suggestion in &misspelling.suggestions {
                    writeln!(out, "\t- {}", suggestion.word)?;
                }
            } else {
                writeln!(out, "No suggestions found for '{}'.", misspelling.token.text)?;
            }
        }
        Ok(())
    }
}

impl HumanOutput for SuggestionResults {
    fn write_human(&self, out: &mut dyn Write) -> io::Result<()> {
        if self.correct {
            writeln!(out, "'{}' is a Correct word.", self.word)?;
        }

        if self.suggestions.is_empty() {
            writeln!(out, "No suggestions found for '{}'.", self.word)?;
            return Ok(());
        }

        writeln!(
            out,
            "Suggestions for '{}' (tolerance {}):",
            self.word, self.tolerance
        )?;
        for (i, suggestion) in self.suggestions.iter().enumerate() {
            writeln!(
                out,
                "{:>3}. {} (distance {})",
                i + 1,
                suggestion.word,
                suggestion.distance
            )?;
        }
        Ok(())
    }
}

impl HumanOutput for DictionaryStats {
    fn write_human(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "Dictionary Statistics:")?;
        writeln!(out, "══════════════════════")?;
        writeln!(out, "Dictionary: {}", self.dictionary)?;
        writeln!(out, "Words: {}", self.engine.words)?;
        writeln!(out, "Trie nodes: {}", self.engine.trie_nodes)?;
        Ok(())
    }
}
