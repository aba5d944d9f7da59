//! Development tasks: `cargo run -p xtask -- <task>`.

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "xtask", about = "mvn-color development tasks")]
struct Xtask {
    #[command(subcommand)]
    task: Task,
}

#[derive(Subcommand)]
enum Task {
    /// Render the mvn-color man page
    Man {
        /// Output directory
        #[arg(default_value = "target/man")]
        out_dir: PathBuf,
    },
}

fn main() -> Result<()> {
    match Xtask::parse().task {
        Task::Man { out_dir } => man(&out_dir),
    }
}

fn man(out_dir: &Path) -> Result<()> {
    fs::create_dir_all(out_dir)
        .with_context(|| format!("Failed to create {}", out_dir.display()))?;

    let command = mvn_color::Cli::command();
    let mut page = Vec::new();
    clap_mangen::Man::new(command).render(&mut page)?;

    let path = out_dir.join("mvn-color.1");
    fs::write(&path, page).with_context(|| format!("Failed to write {}", path.display()))?;
    println!("Wrote {}", path.display());
    Ok(())
}
