//! Command-line interface parsing and validation
//!
//! This module handles CLI argument parsing using clap and validates
//! user inputs for correctness.

use crate::constants::MAX_PLACEHOLDER_LENGTH;
use crate::types::Config;
use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "keyscope")]
#[command(version = "0.0.1")]
#[command(about = "Browse and search asset keys from the comfort of your terminal", long_about = None)]
pub struct Cli {
    /// Path to a JSON file containing asset keys
    pub file: Option<String>,

    /// Dialog title
    #[arg(short = 't', long, value_name = "TEXT")]
    pub title: Option<String>,

    /// Placeholder shown in the empty search input
    #[arg(short = 'p', long, value_name = "TEXT")]
    pub placeholder: Option<String>,

    /// Hide the search input
    #[arg(long)]
    pub no_search: bool,

    /// Open the dialog immediately
    #[arg(short = 'o', long)]
    pub open: bool,

    /// Enable logging to specified file
    #[arg(short = 'l', long, value_name = "PATH")]
    pub log_file: Option<String>,
}

impl Cli {
    /// Validate CLI arguments
    pub fn validate(&self) -> Result<(), String> {
        if let Some(title) = &self.title
            && title.trim().is_empty()
        {
            return Err("Title must not be empty".to_string());
        }
        if let Some(placeholder) = &self.placeholder
            && placeholder.chars().count() > MAX_PLACEHOLDER_LENGTH
        {
            return Err(format!(
                "Placeholder too long (maximum {} characters)",
                MAX_PLACEHOLDER_LENGTH
            ));
        }
        Ok(())
    }

    /// CLI flags win over the config file for this session only
    pub fn apply_overrides(&self, mut config: Config) -> Config {
        if let Some(title) = &self.title {
            config.title = title.clone();
        }
        if let Some(placeholder) = &self.placeholder {
            config.placeholder = placeholder.clone();
        }
        if self.no_search {
            config.show_search = false;
        }
        config
    }
}
