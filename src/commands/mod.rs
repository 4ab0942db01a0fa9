use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub mod decode;
pub mod relocate;
pub mod splice;

#[derive(Parser, Debug)]
#[command(
    name = "pagefix",
    version,
    about = "One-shot patch utilities for the trimpro dashboard source tree"
)]
pub struct Cli {
    /// Enable debug-level logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Replace the bundle edit page header link with a plain back button
    Splice {
        /// Page file to patch in place
        #[arg(long, default_value = splice::BUNDLE_EDIT_PAGE)]
        file: PathBuf,
    },
    /// Normalize line endings and copy the client edit page into the deploy tree
    Relocate {
        /// Source page file
        #[arg(long, default_value = relocate::CLIENT_EDIT_PAGE)]
        source: PathBuf,
        /// Destination path in the deploy tree
        #[arg(long, default_value = relocate::DEPLOYED_CLIENT_EDIT_PAGE)]
        dest: PathBuf,
    },
    /// Decode the staged base64 payload over the deployed client edit page
    Decode {
        /// Staged payload file
        #[arg(long, default_value = decode::PAYLOAD_FILE)]
        input: PathBuf,
        /// Destination path in the deploy tree
        #[arg(long, default_value = relocate::DEPLOYED_CLIENT_EDIT_PAGE)]
        dest: PathBuf,
    },
}

pub fn run(cli: &Cli) -> Result<()> {
    match &cli.command {
        Command::Splice { file } => splice::run(file),
        Command::Relocate { source, dest } => relocate::run(source, dest),
        Command::Decode { input, dest } => decode::run(input, dest),
    }
}
