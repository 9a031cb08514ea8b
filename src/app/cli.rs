use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Replace files in a project with same-named files from generated code"
)]
pub struct Cli {
    /// Use a predefined set of options from presets.toml
    #[arg(long)]
    pub preset: Option<String>,

    /// Read presets from this file instead of ~/.config/codegen_sync/presets.toml
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Root of the project whose files get replaced
    #[arg(long)]
    pub target_root: Option<PathBuf>,

    /// Subdirectories of the target root to scan (e.g., 'src')
    #[arg(long, num_args = 1..)]
    pub target_subdir: Option<Vec<String>>,

    /// Root of the generated code tree
    #[arg(long)]
    pub source_root: Option<PathBuf>,

    /// Subdirectories of the source root to search, in priority order
    #[arg(long, num_args = 1..)]
    pub source_subdir: Option<Vec<String>>,

    /// Patterns for target file names to leave alone
    #[arg(long, num_args = 1..)]
    pub exclude: Option<Vec<String>>,

    /// Report matches without writing anything
    #[arg(long)]
    pub dry_run: bool,

    /// Report failed copies and continue with the next file
    #[arg(long)]
    pub keep_going: bool,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}
