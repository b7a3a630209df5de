use std::env;

use anyhow::{bail, Result};
use twin_source::{Comparison, DiffOptions, FoldState, PairSummary, SourceOptions};

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 3 {
        println!("Usage: compare_dirs <base_dir> <target_dir> [slug]");
        println!("Lists matched files with line counts, or prints the diff for one slug");
        return Ok(());
    }

    let comparison = Comparison::load(&args[1], &args[2], &SourceOptions::default())?;

    if let Some(slug) = args.get(3) {
        let Some(index) = comparison.find(slug) else {
            bail!("No file with slug {:?}", slug);
        };
        if let Some(diff) = comparison.diff(index) {
            print!("{}", diff.render_plain(&DiffOptions::default(), &FoldState::new()));
        }
        return Ok(());
    }

    let summaries = comparison.summaries();
    for summary in &summaries {
        println!(
            "{:<9} {:<24} +{:<5} -{:<5} {}",
            summary.kind.to_string(),
            summary.slug,
            summary.stats.added,
            summary.stats.removed,
            summary.path
        );
    }

    let totals = PairSummary::totals(&summaries);
    println!();
    println!(
        "{} pairs, {} added lines, {} removed lines",
        comparison.len(),
        totals.added,
        totals.removed
    );

    Ok(())
}
