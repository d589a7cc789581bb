//! CLI command definitions using clap.
//!
//! - tasks: show today's visible tasks
//! - remember: add a task from `prompt[:answer[:stage]]`
//! - review: grade a task by index
//! - forget: delete a task by index

use clap::{Parser, Subcommand};
use eyre::{Context, Result};
use std::path::PathBuf;

/// srs - spaced repetition that never shows more than a few reviews at once
#[derive(Parser, Debug)]
#[command(name = "srs")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Optional config file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Task store file, overriding the config
    #[arg(short, long, global = true)]
    pub store: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Check if verbose mode is enabled
    pub fn is_verbose(&self) -> bool {
        self.verbose
    }
}

/// Main subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List today's tasks
    Tasks {
        /// Only show tasks in this category
        category: Option<String>,
    },

    /// Add something to remember
    Remember {
        /// Category label
        category: String,

        /// `prompt[:answer[:stage]]`, may span several words
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,
    },

    /// Review one of today's tasks
    Review {
        /// Position in today's list
        index: usize,

        /// 0 resets, positive advances, negative regresses
        #[arg(default_value_t = 1, allow_negative_numbers = true)]
        grade: i32,
    },

    /// Stop reviewing one of today's tasks
    Forget {
        /// Position in today's list
        index: usize,
    },
}

/// Parsed `prompt[:answer[:stage]]` text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RememberInput {
    pub prompt: String,
    pub answer: String,
    pub stage: u32,
}

impl RememberInput {
    /// Split on every colon and keep the first three parts. Missing answer is
    /// empty, a missing or empty stage is 0, anything past the stage is dropped.
    pub fn parse(words: &[String]) -> Result<Self> {
        let text = words.join(" ");
        let mut parts = text.split(':');
        let prompt = parts.next().unwrap_or_default().trim().to_string();
        let answer = parts.next().unwrap_or_default().trim().to_string();
        let stage = match parts.next().map(str::trim) {
            None | Some("") => 0,
            Some(s) => s.parse().with_context(|| format!("Invalid stage '{}'", s))?,
        };

        if prompt.is_empty() {
            eyre::bail!("Prompt must not be empty");
        }

        Ok(Self { prompt, answer, stage })
    }
}
