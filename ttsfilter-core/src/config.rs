//! Configuration management for `ttsfilter-core`.
//!
//! This module defines the flat set of boolean toggles that drive the filter
//! pipeline. It handles YAML deserialization (both a bare mapping and the
//! upstream `tts_preprocessor_config:` section) and provides lookup of a
//! config file from the usual locations.
//!
//! License: MIT OR Apache-2.0

use anyhow::{Context, Result};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::errors::FilterError;
use crate::pipeline::Stage;

/// File name looked up in the working directory by [`FilterConfig::discover`].
pub const LOCAL_CONFIG_FILE: &str = "ttsfilter.yaml";

fn default_true() -> bool {
    true
}

/// Toggles for every gated pipeline stage plus the standalone utilities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FilterConfig {
    /// Keep only letters, numbers, punctuation and whitespace.
    #[serde(default = "default_true")]
    pub remove_special_char: bool,
    /// Drop text inside `[...]`.
    #[serde(default = "default_true")]
    pub ignore_brackets: bool,
    /// Drop text inside `(...)`.
    #[serde(default = "default_true")]
    pub ignore_parentheses: bool,
    /// Drop `*emphasis*` spans.
    #[serde(default = "default_true")]
    pub ignore_asterisks: bool,
    /// Drop text inside `<...>`.
    #[serde(default = "default_true")]
    pub ignore_angle_brackets: bool,
    /// Run list-marker normalization before the pipeline.
    #[serde(default)]
    pub strip_list_markers: bool,
    /// Run markdown cleanup (with expression protection) before the pipeline.
    #[serde(default)]
    pub clean_formatting: bool,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            remove_special_char: true,
            ignore_brackets: true,
            ignore_parentheses: true,
            ignore_asterisks: true,
            ignore_angle_brackets: true,
            strip_list_markers: false,
            clean_formatting: false,
        }
    }
}

/// Key of the translator settings that upstream documents keep inside the
/// preprocessor section. Translator back ends are configured elsewhere.
const TRANSLATOR_SECTION: &str = "translator_config";

#[derive(Deserialize)]
#[serde(untagged)]
enum ConfigDocument {
    Nested { tts_preprocessor_config: serde_yml::Value },
    Flat(FilterConfig),
}

fn config_error(e: serde_yml::Error) -> FilterError {
    FilterError::Config(format!("expected a mapping of known filter toggles: {}", e))
}

impl FilterConfig {
    /// A configuration with every stage and utility turned off.
    pub fn passthrough() -> Self {
        Self {
            remove_special_char: false,
            ignore_brackets: false,
            ignore_parentheses: false,
            ignore_asterisks: false,
            ignore_angle_brackets: false,
            strip_list_markers: false,
            clean_formatting: false,
        }
    }

    /// Parses a YAML document, accepting either a bare mapping of toggles or
    /// a document carrying a `tts_preprocessor_config` section.
    pub fn from_yaml_str(text: &str) -> Result<Self, FilterError> {
        if text.trim().is_empty() {
            return Ok(Self::default());
        }
        match serde_yml::from_str::<ConfigDocument>(text).map_err(config_error)? {
            ConfigDocument::Flat(config) => Ok(config),
            ConfigDocument::Nested {
                tts_preprocessor_config: mut section,
            } => {
                if section.is_null() {
                    return Ok(Self::default());
                }
                if let Some(map) = section.as_mapping_mut() {
                    if map.remove(TRANSLATOR_SECTION).is_some() {
                        debug!("Ignoring '{}' in tts_preprocessor_config.", TRANSLATOR_SECTION);
                    }
                }
                serde_yml::from_value(section).map_err(config_error)
            }
        }
    }

    /// Loads the filter configuration from a YAML file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading filter config from: {}", path.display());
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config = Self::from_yaml_str(&text)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        debug!("Loaded filter config: {:?}", config);
        Ok(config)
    }

    /// Loads the first config file found in [`config_candidate_paths`], if any.
    pub fn discover() -> Result<Option<(PathBuf, Self)>> {
        for path in config_candidate_paths() {
            if path.is_file() {
                let config = Self::load_from_file(&path)?;
                return Ok(Some((path, config)));
            }
        }
        debug!("No filter config file found; using defaults.");
        Ok(None)
    }

    /// Whether the given gated stage should run. Translation is governed by
    /// the presence of a translator, so it always reports `true` here.
    pub fn is_stage_enabled(&self, stage: Stage) -> bool {
        match stage {
            Stage::Asterisks => self.ignore_asterisks,
            Stage::Brackets => self.ignore_brackets,
            Stage::Parentheses => self.ignore_parentheses,
            Stage::AngleBrackets => self.ignore_angle_brackets,
            Stage::SpecialCharacters => self.remove_special_char,
            Stage::Translation => true,
        }
    }

    pub fn set_stage_enabled(&mut self, stage: Stage, enabled: bool) {
        match stage {
            Stage::Asterisks => self.ignore_asterisks = enabled,
            Stage::Brackets => self.ignore_brackets = enabled,
            Stage::Parentheses => self.ignore_parentheses = enabled,
            Stage::AngleBrackets => self.ignore_angle_brackets = enabled,
            Stage::SpecialCharacters => self.remove_special_char = enabled,
            Stage::Translation => {
                debug!("Translation is enabled by supplying a translator; toggle ignored.");
            }
        }
    }
}

/// Locations probed for a config file, in priority order.
pub fn config_candidate_paths() -> Vec<PathBuf> {
    let candidates = vec![
        Some(PathBuf::from(LOCAL_CONFIG_FILE)),
        dirs::config_dir().map(|p| p.join("ttsfilter").join("config.yaml")),
    ];
    candidates.into_iter().flatten().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_enable_every_gated_stage() {
        let config = FilterConfig::default();
        for stage in Stage::GATED {
            assert!(config.is_stage_enabled(stage), "{stage} should be on");
        }
        assert!(!config.strip_list_markers);
        assert!(!config.clean_formatting);
    }

    #[test]
    fn missing_keys_take_defaults() {
        let config = FilterConfig::from_yaml_str("ignore_brackets: false\n").unwrap();
        assert!(!config.ignore_brackets);
        assert!(config.ignore_parentheses);
        assert!(config.remove_special_char);
    }

    #[test]
    fn nested_upstream_section_is_accepted() {
        let yaml = r#"
tts_preprocessor_config:
  remove_special_char: false
  ignore_asterisks: false
other_section:
  anything: 1
"#;
        let config = FilterConfig::from_yaml_str(yaml).unwrap();
        assert!(!config.remove_special_char);
        assert!(!config.ignore_asterisks);
        assert!(config.ignore_angle_brackets);
    }

    #[test]
    fn translator_settings_in_upstream_section_are_ignored() {
        let yaml = r#"
tts_preprocessor_config:
  remove_special_char: true
  ignore_brackets: false
  translator_config:
    translate_audio: false
    translate_provider: deeplx
    deeplx:
      deeplx_target_lang: JA
"#;
        let config = FilterConfig::from_yaml_str(yaml).unwrap();
        assert!(!config.ignore_brackets);
        assert!(config.remove_special_char);
    }

    #[test]
    fn unknown_toggle_inside_upstream_section_is_rejected() {
        let yaml = "tts_preprocessor_config:\n  ignore_bracket: true\n";
        let err = FilterConfig::from_yaml_str(yaml).unwrap_err();
        assert!(matches!(err, FilterError::Config(_)));
    }

    #[test]
    fn empty_upstream_section_is_default() {
        let config = FilterConfig::from_yaml_str("tts_preprocessor_config:\n").unwrap();
        assert_eq!(config, FilterConfig::default());
    }

    #[test]
    fn unknown_toggle_is_rejected() {
        let err = FilterConfig::from_yaml_str("ignore_bracket: true\n").unwrap_err();
        assert!(matches!(err, FilterError::Config(_)));
    }

    #[test]
    fn empty_document_is_default() {
        assert_eq!(FilterConfig::from_yaml_str("  \n").unwrap(), FilterConfig::default());
    }

    #[test]
    fn stage_toggles_round_trip() {
        let mut config = FilterConfig::default();
        config.set_stage_enabled(Stage::Parentheses, false);
        assert!(!config.ignore_parentheses);
        assert!(!config.is_stage_enabled(Stage::Parentheses));
        config.set_stage_enabled(Stage::Translation, false);
        assert!(config.is_stage_enabled(Stage::Translation));
    }
}
