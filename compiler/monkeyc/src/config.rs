//! Command-line configuration shared by the REPL and `lex` commands.

use crate::diagnostics::ColorMode;
use crate::{CliError, Result};

/// Prompt printed before each REPL line.
pub const PROMPT: &str = ">> ";

/// Environment variable overriding the default prompt.
pub const PROMPT_ENV: &str = "MONKEY_PROMPT";

/// Options parsed from `--flag` arguments.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CliConfig {
    pub prompt: String,
    /// Print tokens with their byte spans (`Let("let") @ 0..3`).
    pub show_spans: bool,
    pub color: ColorMode,
}

impl Default for CliConfig {
    fn default() -> Self {
        CliConfig {
            prompt: PROMPT.to_string(),
            show_spans: false,
            color: ColorMode::Auto,
        }
    }
}

impl CliConfig {
    /// Parse flags, consulting `MONKEY_PROMPT` for the prompt.
    pub fn from_args(args: &[String]) -> Result<Self> {
        Self::from_args_and_env(args, std::env::var(PROMPT_ENV).ok())
    }

    /// Parse flags with an explicit prompt override in place of the
    /// environment. `--prompt=` wins over `env_prompt`.
    pub fn from_args_and_env(args: &[String], env_prompt: Option<String>) -> Result<Self> {
        let mut config = CliConfig::default();
        if let Some(prompt) = env_prompt {
            config.prompt = prompt;
        }

        for arg in args {
            if let Some(prompt) = arg.strip_prefix("--prompt=") {
                config.prompt = prompt.to_string();
            } else if let Some(color) = arg.strip_prefix("--color=") {
                config.color =
                    ColorMode::parse(color).ok_or_else(|| CliError::InvalidColor(color.to_string()))?;
            } else if arg == "--spans" {
                config.show_spans = true;
            } else {
                return Err(CliError::UnknownFlag(arg.clone()));
            }
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn defaults() {
        let config = CliConfig::from_args_and_env(&[], None).unwrap_or_default();
        assert_eq!(config.prompt, ">> ");
        assert!(!config.show_spans);
        assert_eq!(config.color, ColorMode::Auto);
    }

    #[test]
    fn all_flags() {
        let config =
            CliConfig::from_args_and_env(&args(&["--prompt=$ ", "--spans", "--color=never"]), None);
        assert_eq!(
            config.ok(),
            Some(CliConfig {
                prompt: "$ ".to_string(),
                show_spans: true,
                color: ColorMode::Never,
            })
        );
    }

    #[test]
    fn env_prompt_applies_without_flag() {
        let config = CliConfig::from_args_and_env(&[], Some("monkey> ".to_string()));
        assert_eq!(config.ok().map(|c| c.prompt), Some("monkey> ".to_string()));
    }

    #[test]
    fn prompt_flag_beats_env() {
        let config =
            CliConfig::from_args_and_env(&args(&["--prompt=> "]), Some("monkey> ".to_string()));
        assert_eq!(config.ok().map(|c| c.prompt), Some("> ".to_string()));
    }

    #[test]
    fn unknown_flag_is_an_error() {
        let err = CliConfig::from_args_and_env(&args(&["--verbose"]), None);
        assert!(matches!(err, Err(CliError::UnknownFlag(flag)) if flag == "--verbose"));
    }

    #[test]
    fn bad_color_is_an_error() {
        let err = CliConfig::from_args_and_env(&args(&["--color=rainbow"]), None);
        assert!(matches!(err, Err(CliError::InvalidColor(value)) if value == "rainbow"));
    }
}
