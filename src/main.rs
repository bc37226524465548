//! copywith-fixer: convert scratch-object update() blocks to copyWith().

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use copywith_fixer::fileio::{self, FixOutcome, DEFAULT_SOURCE_PATH};
use copywith_fixer::{config, RewriteOptions};

#[derive(Parser)]
#[command(name = "copywith-fixer")]
#[command(about = "Rewrite legacy update() blocks into state.copyWith() calls")]
struct Cli {
    /// Source file to rewrite in place.
    #[arg(value_name = "PATH", default_value = DEFAULT_SOURCE_PATH)]
    path: PathBuf,
    /// JSON file overriding the block markers.
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,
    /// Report what would change without writing anything.
    #[arg(long)]
    dry_run: bool,
    /// Like --dry-run, but fail if any block would be converted.
    #[arg(long)]
    check: bool,
    /// Keep blocks with unparsed or duplicate assignments unchanged.
    #[arg(long)]
    strict: bool,
    /// Print the report as JSON on stdout.
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    copywith_fixer::init_tracing();
    let cli = Cli::parse();

    let markers = config::resolve_markers(cli.config.as_deref())?;
    let options = RewriteOptions { strict: cli.strict };
    let dry_run = cli.dry_run || cli.check;

    let outcome = fileio::fix_file(&cli.path, &markers, &options, dry_run)
        .with_context(|| format!("could not fix {}", cli.path.display()))?;

    if cli.json {
        println!("{}", outcome.report.to_json()?);
    } else {
        print_summary(&cli.path, &outcome, dry_run);
    }

    if cli.check && outcome.report.blocks_converted > 0 {
        bail!(
            "{} legacy block(s) in {} still need converting",
            outcome.report.blocks_converted,
            cli.path.display()
        );
    }
    Ok(())
}

fn print_summary(path: &std::path::Path, outcome: &FixOutcome, dry_run: bool) {
    let report = &outcome.report;

    println!("File: {}", path.display());
    if dry_run {
        println!("Dry run, nothing written.");
    }
    println!("Blocks converted: {}", report.blocks_converted);
    if report.blocks_unchanged + report.blocks_rejected + report.blocks_malformed > 0 {
        println!(
            "Blocks kept as is: {} no-op, {} rejected, {} malformed",
            report.blocks_unchanged, report.blocks_rejected, report.blocks_malformed
        );
    }
    if report.lines_skipped > 0 {
        println!("Body lines dropped (not simple assignments): {}", report.lines_skipped);
    }

    println!();
    println!("Validation:");
    println!("  copyWith calls: {}", report.builder_calls);
    println!("  legacy blocks remaining: {}", report.legacy_remaining);

    if !dry_run {
        if report.is_complete() {
            println!("All legacy blocks converted.");
        } else {
            println!("Warning: {} legacy block(s) remain.", report.legacy_remaining);
        }
    }

    if let Some(backup) = &outcome.backup {
        println!("Backup: {}", backup.display());
    }
}
