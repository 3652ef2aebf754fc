use std::path::PathBuf;
use std::time::Instant;

use anyhow::Result;
use clap::Parser;

use songmatch::{matcher, scanner};

#[derive(Parser, Debug)]
#[command(
    name = "songmatch",
    version,
    about = "Find likely duplicate songs by filename similarity"
)]
struct Cli {
    /// Music library directory to scan
    directory: PathBuf,

    /// Minimum number of shared filename words for a pair to be reported
    #[arg(allow_negative_numbers = true)]
    min_common_words: i64,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("songmatch=warn")),
        )
        .init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            err.print()?;
            std::process::exit(if err.use_stderr() { 1 } else { 0 });
        }
    };

    if !cli.directory.is_dir() {
        anyhow::bail!("directory not found: {}", cli.directory.display());
    }

    println!("▶ Scanning music library: {}", cli.directory.display());
    println!("▶ Minimum common words: {}", cli.min_common_words);

    let paths = scanner::collect_media_files(&cli.directory)?;
    println!("Found {} music file(s).", paths.len());

    if paths.len() < 2 {
        println!("Not enough files to compare.");
        return Ok(());
    }

    println!("▶ Comparing {} files pairwise…", paths.len());
    let files = benchmark("computing signatures", || {
        matcher::compute_signatures(paths)
    });

    let mut found = 0;
    for m in matcher::find_matches(&files, cli.min_common_words) {
        found += 1;
        println!("\n=== Match {} ===", m.index);
        println!("Common word count: {}", m.common.len());
        println!("File 1: {}", m.first.display());
        println!("File 2: {}", m.second.display());
        println!("Common words: {}", m.common.join(", "));
        println!("{}", "-".repeat(40));
    }

    println!("\n=== Summary ===");
    println!("Total files: {}", files.len());
    println!("Matches found: {}", found);
    println!("Done.");

    Ok(())
}

/// Run `f()`, print how long it took (with `label`), and return its result.
fn benchmark<T, F: FnOnce() -> T>(label: &str, f: F) -> T {
    let start = Instant::now();
    let result = f();
    println!("⏱ {} took {:.2?}", label, start.elapsed());
    result
}
