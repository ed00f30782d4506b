//! Configuration: the optional on-disk file and the resolved normalizer options.
//!
//! [`DedupeConfig`] mirrors `~/.config/dedupe/config.toml` and the CLI flags.
//! Once flags are merged over it, it is frozen into a [`NormalizeConfig`],
//! which is what the normalizer and driver actually consume.

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

use crate::error::DedupeError;
use crate::normalize::BUILTIN_LANGUAGE_CODES;

/// Image and font extensions excluded by the `ne` mode preset.
pub const MEDIA_EXTENSIONS: &[&str] = &[
    "png", "jpg", "jpeg", "gif", "woff", "woff2", "ttf", "otf", "svg", "ico",
];

/// Contents of `config.toml`. Every key is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DedupeConfig {
    /// Input file; stdin when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input: Option<PathBuf>,
    /// Output file; stdout when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<PathBuf>,
    /// Drop URLs that carry no query parameters.
    pub query_string_only: bool,
    /// Drop URLs whose path ends in one of these extensions.
    pub filter_extensions: Vec<String>,
    /// Keep only URLs whose path ends in one of these extensions. Overrides
    /// `filter_extensions` when non-empty.
    pub match_extensions: Vec<String>,
    /// Replace GUIDs and standalone integers in the path with placeholders.
    pub regex_normalize: bool,
    /// Replace the first language/region path segment with a placeholder.
    pub lang_country_normalize: bool,
    /// Replacement for the built-in language/region code set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language_codes: Option<Vec<String>>,
    /// Drop paths containing integers or ending in image/font extensions.
    pub similar: bool,
}

impl DedupeConfig {
    /// Freeze into the immutable options used for one run.
    pub fn to_normalize_config(&self) -> NormalizeConfig {
        let mut cfg = NormalizeConfig::default()
            .with_query_string_only(self.query_string_only)
            .with_filter_extensions(&self.filter_extensions)
            .with_match_extensions(&self.match_extensions)
            .with_regex_normalize(self.regex_normalize)
            .with_lang_country_normalize(self.lang_country_normalize)
            .with_similar(self.similar);
        if let Some(codes) = &self.language_codes {
            cfg = cfg.with_language_codes(codes);
        }
        cfg
    }
}

/// Options the normalizer applies to every line. Built once, never mutated
/// during a run.
///
/// Extension entries are stored lowercase without a leading dot; language codes
/// are stored lowercase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizeConfig {
    query_string_only: bool,
    filter_extensions: BTreeSet<String>,
    match_extensions: BTreeSet<String>,
    regex_normalize: bool,
    lang_country_normalize: bool,
    language_codes: BTreeSet<String>,
    similar: bool,
}

impl Default for NormalizeConfig {
    fn default() -> Self {
        Self {
            query_string_only: false,
            filter_extensions: BTreeSet::new(),
            match_extensions: BTreeSet::new(),
            regex_normalize: false,
            lang_country_normalize: false,
            language_codes: BUILTIN_LANGUAGE_CODES
                .iter()
                .map(|c| c.to_string())
                .collect(),
            similar: false,
        }
    }
}

fn extension_set<S: AsRef<str>>(exts: &[S]) -> BTreeSet<String> {
    exts.iter()
        .map(|e| e.as_ref().trim().trim_start_matches('.').to_ascii_lowercase())
        .filter(|e| !e.is_empty())
        .collect()
}

impl NormalizeConfig {
    pub fn with_query_string_only(mut self, on: bool) -> Self {
        self.query_string_only = on;
        self
    }

    pub fn with_filter_extensions<S: AsRef<str>>(mut self, exts: &[S]) -> Self {
        self.filter_extensions = extension_set(exts);
        self
    }

    pub fn with_match_extensions<S: AsRef<str>>(mut self, exts: &[S]) -> Self {
        self.match_extensions = extension_set(exts);
        self
    }

    pub fn with_regex_normalize(mut self, on: bool) -> Self {
        self.regex_normalize = on;
        self
    }

    pub fn with_lang_country_normalize(mut self, on: bool) -> Self {
        self.lang_country_normalize = on;
        self
    }

    /// Replace the built-in language/region codes.
    pub fn with_language_codes<S: AsRef<str>>(mut self, codes: &[S]) -> Self {
        self.language_codes = codes
            .iter()
            .map(|c| c.as_ref().trim().to_lowercase())
            .filter(|c| !c.is_empty())
            .collect();
        self
    }

    pub fn with_similar(mut self, on: bool) -> Self {
        self.similar = on;
        self
    }

    pub fn query_string_only(&self) -> bool {
        self.query_string_only
    }

    pub fn filter_extensions(&self) -> &BTreeSet<String> {
        &self.filter_extensions
    }

    pub fn match_extensions(&self) -> &BTreeSet<String> {
        &self.match_extensions
    }

    pub fn regex_normalize(&self) -> bool {
        self.regex_normalize
    }

    pub fn lang_country_normalize(&self) -> bool {
        self.lang_country_normalize
    }

    pub fn language_codes(&self) -> &BTreeSet<String> {
        &self.language_codes
    }

    pub fn similar(&self) -> bool {
        self.similar
    }
}

/// Default config location: `$XDG_CONFIG_HOME/dedupe/config.toml`.
pub fn config_path() -> Result<PathBuf, DedupeError> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("dedupe")?;
    Ok(xdg_dirs.get_config_home().join("dedupe").join("config.toml"))
}

/// Load the config file.
///
/// An explicit `path` must exist. Without one, the XDG default is used and a
/// missing file yields [`DedupeConfig::default`].
pub fn load(path: Option<&Path>) -> Result<DedupeConfig, DedupeError> {
    match path {
        Some(p) => load_from(p),
        None => {
            let p = config_path()?;
            if !p.exists() {
                tracing::debug!("no config at {}, using defaults", p.display());
                return Ok(DedupeConfig::default());
            }
            load_from(&p)
        }
    }
}

/// Read and parse a config file at `path`.
pub fn load_from(path: &Path) -> Result<DedupeConfig, DedupeError> {
    let data = fs::read_to_string(path).map_err(|source| DedupeError::ConfigRead {
        path: path.to_path_buf(),
        source,
    })?;
    let cfg: DedupeConfig = toml::from_str(&data).map_err(|source| DedupeError::ConfigParse {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!("loaded config from {}", path.display());
    Ok(cfg)
}

/// Write a default config file to `path`. Refuses to overwrite an existing file.
pub fn write_default(path: &Path) -> Result<()> {
    if path.exists() {
        bail!("config already exists at {}", path.display());
    }
    let body = toml::to_string_pretty(&DedupeConfig::default())?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("create config dir {}", parent.display()))?;
    }
    fs::write(path, body).with_context(|| format!("write {}", path.display()))?;
    tracing::info!("created default config at {}", path.display());
    Ok(())
}
