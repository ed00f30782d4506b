//! CLI for the dedupe URL list deduplicator.

mod commands;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use dedupe_core::config::{DedupeConfig, MEDIA_EXTENSIONS};

use commands::{run_completions, run_dedupe, run_init_config};

/// Top-level CLI. Without a subcommand, deduplicates URLs from `--urls` or stdin.
#[derive(Debug, Parser)]
#[command(name = "dedupe", version)]
#[command(
    about = "Deduplicate URL lists by scheme, host, normalized path and query parameter names",
    long_about = None
)]
#[command(args_conflicts_with_subcommands = true)]
pub struct Cli {
    /// Config file (default: $XDG_CONFIG_HOME/dedupe/config.toml if present).
    #[arg(short = 'c', long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(flatten)]
    pub dedupe: DedupeArgs,

    #[command(subcommand)]
    pub command: Option<CliCommand>,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Write a default config file to --config or the XDG config path.
    InitConfig,

    /// Print shell completions to stdout.
    Completions {
        /// Target shell.
        shell: Shell,
    },
}

/// Shorthand presets for `--mode`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Mode {
    /// Same as --regex-normalize.
    #[value(name = "r")]
    Regex,
    /// Same as --similar.
    #[value(name = "s")]
    Similar,
    /// Same as --query-strings-only.
    #[value(name = "qs")]
    QueryStrings,
    /// Exclude common image and font extensions.
    #[value(name = "ne")]
    NoMedia,
    /// Same as --lang-country-normalize.
    #[value(name = "l")]
    Lang,
}

/// Flags for the dedupe run. Each one overrides the config file.
#[derive(Debug, Default, Args)]
pub struct DedupeArgs {
    /// File containing URLs, one per line (default: stdin).
    #[arg(short = 'u', long = "urls", value_name = "FILE")]
    pub urls: Option<PathBuf>,

    /// Write surviving URLs here (default: stdout).
    #[arg(short = 'o', long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Only keep URLs that have query parameters.
    #[arg(long = "query-strings-only", visible_alias = "qs")]
    pub query_strings_only: bool,

    /// Drop URLs whose path ends in one of these extensions.
    #[arg(
        long = "no-extensions",
        visible_aliases = ["ne", "filter-extensions"],
        value_delimiter = ',',
        value_name = "EXT"
    )]
    pub no_extensions: Vec<String>,

    /// Keep only URLs whose path ends in one of these extensions (overrides --no-extensions).
    #[arg(
        long = "match-extensions",
        visible_alias = "me",
        value_delimiter = ',',
        value_name = "EXT"
    )]
    pub match_extensions: Vec<String>,

    /// Treat GUIDs and standalone integers in the path as placeholders.
    #[arg(short = 'r', long = "regex-normalize", visible_alias = "regex-parse")]
    pub regex_normalize: bool,

    /// Treat the first language/region path segment (en, fr, pt-br, ...) as a placeholder.
    #[arg(short = 'l', long = "lang-country-normalize")]
    pub lang_country_normalize: bool,

    /// Language/region codes to use instead of the built-in set.
    #[arg(long = "lang-codes", value_delimiter = ',', value_name = "CODE")]
    pub lang_codes: Vec<String>,

    /// Drop URLs whose path has integers or ends in an image/font extension.
    #[arg(short = 's', long)]
    pub similar: bool,

    /// Enable presets: r, s, qs, ne, l.
    #[arg(short = 'm', long = "mode", value_enum, value_delimiter = ',', value_name = "MODE")]
    pub modes: Vec<Mode>,
}

impl DedupeArgs {
    /// Merge these flags over values loaded from the config file.
    ///
    /// Lists replace the file's lists when given; boolean flags can only switch
    /// an option on.
    pub fn apply(&self, cfg: &mut DedupeConfig) {
        if let Some(urls) = &self.urls {
            cfg.input = Some(urls.clone());
        }
        if let Some(output) = &self.output {
            cfg.output = Some(output.clone());
        }
        if !self.no_extensions.is_empty() {
            cfg.filter_extensions = self.no_extensions.clone();
        }
        if !self.match_extensions.is_empty() {
            cfg.match_extensions = self.match_extensions.clone();
        }
        if !self.lang_codes.is_empty() {
            cfg.language_codes = Some(self.lang_codes.clone());
        }
        cfg.query_string_only |= self.query_strings_only;
        cfg.regex_normalize |= self.regex_normalize;
        cfg.lang_country_normalize |= self.lang_country_normalize;
        cfg.similar |= self.similar;

        for mode in &self.modes {
            match mode {
                Mode::Regex => cfg.regex_normalize = true,
                Mode::Similar => cfg.similar = true,
                Mode::QueryStrings => cfg.query_string_only = true,
                Mode::Lang => cfg.lang_country_normalize = true,
                Mode::NoMedia => {
                    for ext in MEDIA_EXTENSIONS {
                        if !cfg.filter_extensions.iter().any(|e| e == ext) {
                            cfg.filter_extensions.push(ext.to_string());
                        }
                    }
                }
            }
        }
    }
}

impl Cli {
    pub fn run_from_args() -> Result<()> {
        Cli::parse().run()
    }

    pub fn run(self) -> Result<()> {
        match self.command {
            Some(CliCommand::InitConfig) => run_init_config(self.config.as_deref())?,
            Some(CliCommand::Completions { shell }) => run_completions(shell)?,
            None => {
                run_dedupe(&self.dedupe, self.config.as_deref())?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests;
