use anyhow::Result;
use magic_strings::config::{ExtractionConfig, ScoreMergePolicy};
use magic_strings::program::MemoryProgram;
use magic_strings::report::{build_report, method_names, save_report};
use magic_strings::extract_magic_strings;
use std::path::PathBuf;
use env_logger::Builder;
use log::LevelFilter;
use std::io::Write;

fn print_usage(program: &str) {
    println!("Magic Strings v{}", magic_strings::VERSION);
    println!("\nUsage:");
    println!("  {} <PROGRAM_JSON> [--output PATH] [--config PATH] [--parallel] [--merge max|last] [--strings]", program);
    println!("  {} --version", program);
    println!("\nOptions:");
    println!("  --output, -o PATH    Save the report to the specified file path");
    println!("  --config, -c PATH    Load extraction settings from a JSON file");
    println!("  --parallel, -p       Harvest classes on all cores");
    println!("  --merge, -m POLICY   Score merge policy for repeated candidates (max or last)");
    println!("  --strings            Include every recorded string in the report");
    println!("  --version, -v        Show version information");
}

// Simple CLI without clap
fn main() -> Result<()> {
    Builder::new()
        .format(|buf, record| {
            writeln!(
                buf,
                "{} [{}] - {}",
                buf.timestamp_seconds(),
                record.level(),
                record.args()
            )
        })
        .filter(None, LevelFilter::Info)
        .parse_default_env()
        .init();

    let args: Vec<String> = std::env::args().collect();

    if args.len() > 1 && (args[1] == "--version" || args[1] == "-v") {
        println!("Magic Strings v{}", magic_strings::VERSION);
        return Ok(());
    }

    if args.len() < 2 || args[1] == "--help" || args[1] == "-h" {
        print_usage(&args[0]);
        return Ok(());
    }

    let program_path = PathBuf::from(&args[1]);

    let mut output_path = None;
    let mut config_path = None;
    let mut parallel = false;
    let mut merge = None;
    let mut include_strings = false;

    let mut i = 2;
    while i < args.len() {
        match args[i].as_str() {
            "--output" | "-o" => {
                if i + 1 < args.len() {
                    output_path = Some(PathBuf::from(&args[i + 1]));
                    i += 2;
                } else {
                    println!("Error: Missing value for --output");
                    return Ok(());
                }
            },
            "--config" | "-c" => {
                if i + 1 < args.len() {
                    config_path = Some(PathBuf::from(&args[i + 1]));
                    i += 2;
                } else {
                    println!("Error: Missing value for --config");
                    return Ok(());
                }
            },
            "--merge" | "-m" => {
                if i + 1 < args.len() {
                    merge = Some(args[i + 1].parse::<ScoreMergePolicy>()?);
                    i += 2;
                } else {
                    println!("Error: Missing value for --merge");
                    return Ok(());
                }
            },
            "--parallel" | "-p" => {
                parallel = true;
                i += 1;
            },
            "--strings" => {
                include_strings = true;
                i += 1;
            },
            _ => {
                println!("Unknown argument: {}", args[i]);
                i += 1;
            }
        }
    }

    // Command-line flags override the config file
    let mut config = match &config_path {
        Some(path) => ExtractionConfig::from_file(path)?,
        None => ExtractionConfig::default(),
    };
    if parallel {
        config.parallel = true;
    }
    if let Some(policy) = merge {
        config.score_merge = policy;
    }

    let program = MemoryProgram::from_file(&program_path)?;
    eprintln!(
        "Extracting magic strings from {} ({} classes, {} methods)",
        program_path.display(),
        program.classes.len(),
        program.method_count()
    );

    let result = extract_magic_strings(&program, config)?;
    let report = build_report(&result, &method_names(&program), include_strings)?;

    match output_path {
        Some(path) => {
            save_report(&report, &path)?;
            println!(
                "Found {} candidates for {} methods",
                report.filtered_candidates.len(),
                result.method_candidates().len()
            );
            println!("Saved to: {}", path.display());
        },
        None => println!("{}", serde_json::to_string_pretty(&report)?),
    }

    Ok(())
}
