use std::env;
use std::fs;

use anyhow::Result;
use twin_diff::{DiffOptions, FileDiff, FoldState};

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();

    let (old_text, new_text) = if args.len() >= 3 {
        (fs::read_to_string(&args[1])?, fs::read_to_string(&args[2])?)
    } else {
        println!("Usage: simple_diff <old_file> <new_file> [context]");
        println!("No files given, diffing two built-in samples\n");
        (sample(false), sample(true))
    };

    let context = args
        .get(3)
        .and_then(|c| c.parse().ok())
        .unwrap_or(twin_diff::DEFAULT_CONTEXT);
    let options = DiffOptions::default().context(context);

    let diff = FileDiff::new(&old_text, &new_text);
    let stats = diff.stats();

    print!("{}", diff.render_plain(&options, &FoldState::new()));

    println!();
    println!("Statistics:");
    println!("  Chunks: {}", diff.chunks().len());
    println!("  Added lines: {}", stats.added);
    println!("  Removed lines: {}", stats.removed);
    println!("  Unchanged lines: {}", stats.unchanged);

    Ok(())
}

fn sample(modified: bool) -> String {
    let mut text = String::new();
    for i in 1..=30 {
        if modified && i % 12 == 0 {
            text.push_str(&format!("line {} was changed\n", i));
        } else {
            text.push_str(&format!("line {}\n", i));
        }
    }
    text
}
