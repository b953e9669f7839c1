// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! CLI argument definitions using Clap

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::config::Settings;

/// Copysmith - marketing content generator
#[derive(Parser, Debug)]
#[command(name = "copysmith")]
#[command(version, about = "Marketing content generator backed by Gemini")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Settings file path (defaults to ~/.copysmith/settings.json)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// Extra filter directive implied by `-v`.
    ///
    /// Returns `None` when `RUST_LOG` is set, so an explicit filter is never overridden.
    pub fn log_directive(&self, rust_log_set: bool) -> Option<&'static str> {
        if rust_log_set {
            return None;
        }
        match self.verbose {
            0 => None,
            1 => Some("copysmith=debug"),
            _ => Some("copysmith=trace"),
        }
    }
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the HTTP server (default when no command given)
    Serve(ServeArgs),

    /// Print the prompt a brief would produce, without calling the model
    Prompt(PromptArgs),
}

/// Arguments for the serve command
#[derive(Args, Debug, Default)]
pub struct ServeArgs {
    /// Interface to bind
    #[arg(long)]
    pub host: Option<String>,

    /// Port to listen on
    #[arg(short, long)]
    pub port: Option<u16>,

    /// History document path
    #[arg(long)]
    pub history_file: Option<PathBuf>,
}

impl ServeArgs {
    /// Apply command-line overrides on top of loaded settings
    pub fn apply(&self, settings: &mut Settings) {
        if let Some(ref host) = self.host {
            settings.server.host = host.clone();
        }
        if let Some(port) = self.port {
            settings.server.port = port;
        }
        if let Some(ref path) = self.history_file {
            settings.history.path = path.clone();
        }
    }
}

/// Arguments for the prompt command
#[derive(Args, Debug)]
pub struct PromptArgs {
    /// JSON file containing the brief
    pub brief: PathBuf,
}
