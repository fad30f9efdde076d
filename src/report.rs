//! Human and JSON rendering of a run.

use std::path::Path;

use color_eyre::eyre::Result;
use serde::Serialize;

use reportprune_core::{FileDescriptor, FileKind, ScanOutcome, ScanStats, ScanWarning};
use reportprune_ops::{DeletionError, ExecutionResult, SkippedFile};
use reportprune_plan::RetentionPlan;

const RULE_WIDTH: usize = 60;

/// Print the run as human-readable text on stdout.
pub fn print_text(outcome: &ScanOutcome, plan: &RetentionPlan, result: &ExecutionResult, verbose: bool) {
    let dry_run = result.mode.is_dry_run();

    println!();
    println!("{}", "─".repeat(RULE_WIDTH));
    println!(" Report cleanup: {}", outcome.root.display());
    println!(
        " Mode: {}",
        if dry_run {
            "DRY RUN (no files will be deleted)"
        } else {
            "LIVE (files will be deleted)"
        }
    );
    println!("{}", "─".repeat(RULE_WIDTH));
    println!();

    match &plan.keep {
        None => println!(" No report files found"),
        Some(kept) if plan.delete_reports.is_empty() => {
            println!(" Only one report file found: {}", kept.name);
            println!("   No report cleanup needed");
        }
        Some(kept) => {
            println!(" Keeping most recent report:");
            println!("   File: {}", kept.name);
            if let Some(date) = kept.date {
                println!("   Date: {}", date.format("%Y-%m-%d (%A)"));
            }
        }
    }

    // Files acted on, in execution order
    let handled: Vec<&FileDescriptor> = if dry_run {
        result.skipped.iter().map(|s| &s.file).collect()
    } else {
        result.deleted.iter().collect()
    };
    let verb = if dry_run { "Would delete" } else { "Deleted" };

    let reports: Vec<&FileDescriptor> =
        handled.iter().copied().filter(|f| f.kind == FileKind::Report).collect();
    if !reports.is_empty() {
        println!();
        println!(" {verb} {} older report(s):", reports.len());
        for file in reports {
            println!("   - {}", describe(file));
        }
    }

    let images: Vec<&FileDescriptor> =
        handled.iter().copied().filter(|f| f.kind == FileKind::Image).collect();
    println!();
    if images.is_empty() && plan.delete_images.is_empty() {
        println!(" No image files found");
    } else if !images.is_empty() {
        println!(" {verb} {} image file(s):", images.len());
        for file in images {
            println!("   - {}", describe(file));
        }
    }

    if !result.errors.is_empty() {
        println!();
        println!(" Failed to delete {} file(s):", result.errors.len());
        for err in &result.errors {
            println!("   ✗ {} ({})", err, err.kind);
        }
    }

    if verbose && !plan.ambiguous.is_empty() {
        println!();
        println!(" Skipped {} file(s) with an ambiguous date:", plan.ambiguous.len());
        for file in &plan.ambiguous {
            println!(
                "   ? {}: {}",
                file.name,
                file.ambiguity.as_deref().unwrap_or_default()
            );
        }
    }

    if !outcome.warnings.is_empty() {
        println!();
        println!(
            " {} warning(s) during scan, results may be partial",
            outcome.warnings.len()
        );
        if verbose {
            for warning in &outcome.warnings {
                println!("   ! {warning}");
            }
        }
    }

    println!();
    println!("{}", "─".repeat(RULE_WIDTH));
    if dry_run {
        println!(
            " Dry run complete: {} ({} would be freed)",
            result.summary(),
            format_size(result.bytes_skipped())
        );
    } else {
        println!(
            " Cleanup complete: {} ({} freed)",
            result.summary(),
            format_size(result.bytes_freed())
        );
    }
    if let Some(kept) = &result.kept {
        println!(" Latest report: {}", kept.name);
        println!(" Location: {}", kept.path.display());
    }
    println!();
}

/// Machine-readable form of a run.
#[derive(Serialize)]
struct JsonReport<'a> {
    root: &'a Path,
    dry_run: bool,
    kept: Option<&'a FileDescriptor>,
    deleted: &'a [FileDescriptor],
    skipped: &'a [SkippedFile],
    errors: &'a [DeletionError],
    ambiguous: &'a [FileDescriptor],
    warnings: &'a [ScanWarning],
    stats: &'a ScanStats,
}

/// Print the run as a JSON document on stdout.
pub fn print_json(outcome: &ScanOutcome, plan: &RetentionPlan, result: &ExecutionResult) -> Result<()> {
    let report = JsonReport {
        root: &outcome.root,
        dry_run: result.mode.is_dry_run(),
        kept: result.kept.as_ref(),
        deleted: &result.deleted,
        skipped: &result.skipped,
        errors: &result.errors,
        ambiguous: &plan.ambiguous,
        warnings: &outcome.warnings,
        stats: &outcome.stats,
    };
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

/// One-line description: name, parsed date (if any) and size.
fn describe(file: &FileDescriptor) -> String {
    match file.date {
        Some(date) => format!(
            "{} (Date: {}, {})",
            file.name,
            date.format("%Y-%m-%d"),
            format_size(file.size)
        ),
        None => format!("{} ({})", file.name, format_size(file.size)),
    }
}

/// Format size in human-readable form.
fn format_size(bytes: u64) -> String {
    humansize::format_size(bytes, humansize::BINARY)
}
