use clap::{Parser, ValueEnum};
use seizu::prelude::*;
use std::fs;
use std::path::PathBuf;
use std::time::Instant;

/// Which artifacts to write.
#[derive(Debug, Clone, Copy, PartialEq, ValueEnum)]
enum Format {
    Diagram,
    Markdown,
    Html,
    All,
}

impl Format {
    fn wants(self, other: Format) -> bool {
        self == Format::All || self == other
    }
}

/// A schema-tolerant normalizer and document generator for voice-agent exports
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to the agent export JSON file
    export_path: String,

    /// Directory to write the artifacts into
    #[arg(short, long, default_value = ".")]
    out: PathBuf,

    /// Base name for the generated files
    #[arg(short, long, default_value = "agent")]
    name: String,

    /// Which artifact(s) to generate
    #[arg(short, long, value_enum, default_value = "all")]
    format: Format,
}

fn main() {
    let cli = Cli::parse();
    let total_start = Instant::now();

    // --- 1. File Loading ---
    let load_start = Instant::now();
    let raw = fs::read_to_string(&cli.export_path).unwrap_or_else(|e| {
        exit_with_error(&format!(
            "Failed to read export file '{}': {}",
            &cli.export_path, e
        ))
    });
    let load_duration = load_start.elapsed();

    // --- 2. Normalization ---
    println!("\nNormalizing agent export...");
    let normalize_start = Instant::now();
    let doc = normalize(&raw)
        .unwrap_or_else(|e| exit_with_error(&format!("Normalization failed: {}", e)));
    let normalize_duration = normalize_start.elapsed();

    println!(
        "Normalized '{}': {} nodes, {} tools, {} settings",
        doc.name,
        doc.nodes.len(),
        doc.tools.len(),
        doc.settings.len()
    );

    // --- 3. Generation ---
    let generate_start = Instant::now();
    if let Err(e) = fs::create_dir_all(&cli.out) {
        exit_with_error(&format!(
            "Could not create output directory '{}': {}",
            cli.out.display(),
            e
        ));
    }

    let mut written = Vec::new();
    if cli.format.wants(Format::Diagram) {
        written.push(write_artifact(&cli, "mmd", to_diagram(&doc)));
    }
    if cli.format.wants(Format::Markdown) {
        written.push(write_artifact(&cli, "md", to_markdown(&doc)));
    }
    if cli.format.wants(Format::Html) {
        written.push(write_artifact(&cli, "html", to_html(&doc, None)));
    }
    let generate_duration = generate_start.elapsed();

    // --- 4. Summary ---
    println!("\nArtifacts written:");
    for path in &written {
        println!("  -> {}", path.display());
    }

    println!("\n--- Performance Summary ---");
    println!("File Loading:    {:?}", load_duration);
    println!("Normalization:   {:?}", normalize_duration);
    println!("Generation:      {:?}", generate_duration);
    println!("---------------------------");
    println!("Total Execution: {:?}", total_start.elapsed());
    println!();
}

fn write_artifact(cli: &Cli, extension: &str, content: String) -> PathBuf {
    let path = cli.out.join(format!("{}.{}", cli.name, extension));
    fs::write(&path, content).unwrap_or_else(|e| {
        exit_with_error(&format!("Could not write '{}': {}", path.display(), e))
    });
    path
}

fn exit_with_error(message: &str) -> ! {
    eprintln!("\nError: {}", message);
    std::process::exit(1);
}
