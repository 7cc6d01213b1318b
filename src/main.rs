use anyhow::Result;
use clap::Parser;
use linegrep::search::{SearchOptions, search_files};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    author,
    version,
    about = "A line-oriented text search tool for local files"
)]
struct Cli {
    /// Pattern to search for
    pattern: String,

    /// Files to search; with --recursive the first entry is the walk root
    /// (defaults to the current directory)
    files: Vec<PathBuf>,

    /// Ignore letter case when matching
    #[arg(short = 'i', long)]
    ignore_case: bool,

    /// Show 1-based line numbers
    #[arg(short = 'n', long)]
    line_number: bool,

    /// Print only the total number of matching lines
    #[arg(short = 'c', long)]
    count: bool,

    /// Search files under the root directory recursively
    #[arg(short = 'r', long)]
    recursive: bool,

    /// Match the pattern only as a whole word
    #[arg(short = 'w', long)]
    word_regexp: bool,

    /// Select lines that do not match the pattern
    #[arg(short = 'v', long)]
    invert_match: bool,

    /// Wrap the matched span in color markers
    #[arg(long)]
    highlight: bool,

    /// Number of context lines to show around each match
    #[arg(short = 'C', long, default_value = "0")]
    context: usize,

    /// Only search files matching this pattern (repeatable)
    #[arg(long)]
    include: Vec<String>,

    /// Skip files matching this pattern (repeatable)
    #[arg(long)]
    exclude: Vec<String>,

    /// Ignore gitignore files during recursive search
    #[arg(long)]
    no_ignore: bool,

    /// Emit results as JSON instead of text lines
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    linegrep::telemetry::init()?;
    let cli = Cli::parse();

    let options = SearchOptions {
        case_insensitive: cli.ignore_case,
        whole_word: cli.word_regexp,
        invert: cli.invert_match,
        count_only: cli.count,
        line_numbers: cli.line_number,
        highlight: cli.highlight,
        context_lines: cli.context,
        recursive: cli.recursive,
        respect_gitignore: !cli.no_ignore,
        include_globs: cli.include.clone(),
        exclude_globs: cli.exclude.clone(),
        ..SearchOptions::default()
    };

    let results = search_files(&cli.pattern, &cli.files, &options)?;

    if cli.count {
        println!("Total matching lines: {}", results.matched_line_count);
    } else if cli.json {
        println!("{}", serde_json::to_string_pretty(&results.lines)?);
    } else {
        for line in &results.lines {
            println!("{}", line.render(cli.line_number));
        }
    }

    Ok(())
}
