//! Selector Forge - recover function signatures from 4-byte selectors
//!
//! A small CLI that brute-forces candidate signatures built from a grammar
//! and reports the one whose hash starts with the target selector.

use indicatif::{ProgressBar, ProgressStyle};
use selector_forge::{
    grammar::{preset_names, PRESETS},
    match_all,
    types::SearchConfig,
    ForgeError, Grammar, HashAlgorithm, Result, SearchOutcome, SelectorSearch, Target,
};
use std::env;
use std::path::PathBuf;
use std::process;
use tracing_subscriber::EnvFilter;

/// Exit code when a match is found
const EXIT_FOUND: i32 = 0;
/// Exit code when the search space is exhausted
const EXIT_NOT_FOUND: i32 = 1;

/// Default preset when neither a grammar file nor a preset is given
const DEFAULT_PRESET: &str = "portal";

#[derive(Debug)]
enum Command {
    Help,
    Presets,
    Search { target: String },
    Match { targets: Vec<String> },
}

#[derive(Debug)]
struct Cli {
    command: Command,
    grammar: Option<PathBuf>,
    preset: Option<String>,
    algorithm: Option<HashAlgorithm>,
    parallel: bool,
    progress: bool,
    json: bool,
}

impl Cli {
    fn parse(args: &[String]) -> Result<Self> {
        let mut cli = Cli {
            command: Command::Help,
            grammar: None,
            preset: None,
            algorithm: None,
            parallel: false,
            progress: false,
            json: false,
        };
        let mut positional = Vec::new();
        let mut iter = args.iter();

        while let Some(arg) = iter.next() {
            match arg.as_str() {
                "-h" | "--help" => return Ok(cli),
                "-g" | "--grammar" => cli.grammar = Some(PathBuf::from(value_for(arg, iter.next())?)),
                "-p" | "--preset" => cli.preset = Some(value_for(arg, iter.next())?.to_string()),
                "-a" | "--algorithm" => cli.algorithm = Some(value_for(arg, iter.next())?.parse()?),
                "--parallel" => cli.parallel = true,
                "--progress" => cli.progress = true,
                "--json" => cli.json = true,
                flag if flag.starts_with('-') && flag.len() > 1 => {
                    return Err(ForgeError::cli(format!("unknown option '{}'", flag)));
                }
                value => positional.push(value.to_string()),
            }
        }

        if cli.grammar.is_some() && cli.preset.is_some() {
            return Err(ForgeError::cli("--grammar and --preset are mutually exclusive"));
        }

        cli.command = match positional.split_first() {
            None => Command::Help,
            Some((first, rest)) if first == "presets" && rest.is_empty() => Command::Presets,
            Some((first, rest)) if first == "match" => {
                if rest.is_empty() {
                    return Err(ForgeError::cli("match needs at least one target"));
                }
                Command::Match { targets: rest.to_vec() }
            }
            Some((first, [])) => Command::Search { target: first.clone() },
            Some(_) => {
                return Err(ForgeError::cli(format!(
                    "expected a single target, got {} arguments",
                    positional.len()
                )));
            }
        };

        Ok(cli)
    }
}

fn value_for<'a>(flag: &str, value: Option<&'a String>) -> Result<&'a str> {
    value
        .map(String::as_str)
        .ok_or_else(|| ForgeError::cli(format!("{} requires a value", flag)))
}

fn main() {
    // Initialize the library
    if let Err(e) = selector_forge::init() {
        eprintln!("❌ Failed to initialize: {}", e);
        process::exit(e.exit_code());
    }
    init_tracing();

    let args: Vec<String> = env::args().skip(1).collect();
    let code = match Cli::parse(&args).and_then(run) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}", e.user_message());
            e.exit_code()
        }
    };
    process::exit(code);
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

/// Dispatch a parsed command, returning the process exit code
fn run(cli: Cli) -> Result<i32> {
    match &cli.command {
        Command::Help => {
            print_help();
            Ok(EXIT_FOUND)
        }
        Command::Presets => {
            print_presets();
            Ok(EXIT_FOUND)
        }
        Command::Search { target } => {
            // Fail fast on a malformed target before touching the grammar
            let target = Target::parse(target)?;
            let config = build_config(&cli)?;
            if cli.progress && config.parallel {
                return Err(ForgeError::cli("--progress is only available for sequential searches"));
            }
            let grammar = load_grammar(&cli, &config)?;
            run_search(&cli, grammar, target, config)
        }
        Command::Match { targets } => {
            let targets = targets
                .iter()
                .map(|t| Target::parse(t))
                .collect::<Result<Vec<_>>>()?;
            let config = build_config(&cli)?;
            let grammar = load_grammar(&cli, &config)?;
            run_match(&cli, &grammar, &targets, config.algorithm)
        }
    }
}

/// Environment defaults overridden by command line flags
fn build_config(cli: &Cli) -> Result<SearchConfig> {
    let mut config = SearchConfig::from_env()?;
    if let Some(algorithm) = cli.algorithm {
        config.algorithm = algorithm;
    }
    if cli.parallel {
        config.parallel = true;
    }
    Ok(config)
}

fn load_grammar(cli: &Cli, config: &SearchConfig) -> Result<Grammar> {
    if let Some(path) = &cli.grammar {
        return Grammar::from_file(path);
    }
    if let Some(preset) = &cli.preset {
        return Grammar::preset(preset);
    }
    match &config.grammar_path {
        Some(path) => Grammar::from_file(path),
        None => Grammar::preset(DEFAULT_PRESET),
    }
}

fn run_search(cli: &Cli, grammar: Grammar, target: Target, config: SearchConfig) -> Result<i32> {
    let total = grammar.candidate_count();
    if !cli.json {
        println!("🔍 Selector Forge - searching for {}", target);
        println!("═══════════════════════════════════════════");
        println!("   Candidates: {} ({})", total, config.algorithm);
        println!();
    }

    let search = SelectorSearch::new(grammar, target, config);
    let report = if cli.progress {
        let bar = ProgressBar::new(total);
        bar.set_style(
            ProgressStyle::with_template("{spinner} [{elapsed_precise}] {bar:40} {pos}/{len} {msg} ({per_sec})")
                .map_err(|e| ForgeError::internal(format!("Invalid progress template: {}", e)))?
                .progress_chars("=>-"),
        );
        let report = search.run_with_progress(|p| {
            bar.set_position(p.tried);
            bar.set_message(format!("{:.1}%", p.percent()));
        });
        bar.finish_and_clear();
        report
    } else {
        search.run()
    };

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        match &report.outcome {
            SearchOutcome::Found(record) => {
                println!("✅ MATCH FOUND: {} -> {}", record.candidate, record.target);
                println!("   Digest: {}", record.digest);
                println!("   Position: {} of {}", record.position + 1, report.candidate_count);
            }
            SearchOutcome::NotFound { candidates_tried } => {
                println!(
                    "❌ No match found after {} candidates (search exhausted)",
                    candidates_tried
                );
            }
        }
        println!("   ⏱️  {}ms", report.elapsed_ms);
    }

    Ok(if report.outcome.is_found() {
        EXIT_FOUND
    } else {
        EXIT_NOT_FOUND
    })
}

fn run_match(cli: &Cli, grammar: &Grammar, targets: &[Target], algorithm: HashAlgorithm) -> Result<i32> {
    let matches = match_all(grammar.candidates(), &algorithm, targets);
    let unresolved: Vec<&Target> = targets
        .iter()
        .filter(|t| !matches.iter().any(|m| &m.target == *t))
        .collect();

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&matches)?);
    } else {
        println!("🔍 Matching {} selectors against {} candidates", targets.len(), grammar.candidate_count());
        println!();
        for record in &matches {
            println!("✅ MATCH: {} -> {}", record.target, record.candidate);
        }
        for target in &unresolved {
            println!("❌ {} - no match", target);
        }
    }

    Ok(if unresolved.is_empty() {
        EXIT_FOUND
    } else {
        EXIT_NOT_FOUND
    })
}

fn print_presets() {
    println!("Built-in grammars:");
    for preset in PRESETS {
        let grammar = Grammar::from_preset(preset);
        let count = grammar.map(|g| g.candidate_count()).unwrap_or(0);
        println!("    {:<8} {} ({} candidates)", preset.name, preset.description, count);
    }
}

/// Print help information
fn print_help() {
    println!("🔍 Selector Forge - recover function signatures from selectors");
    println!("═══════════════════════════════════════════════════════════");
    println!();
    println!("USAGE:");
    println!("    selector-forge <TARGET> [OPTIONS]");
    println!("    selector-forge match <TARGET>... [OPTIONS]");
    println!("    selector-forge presets");
    println!();
    println!("OPTIONS:");
    println!("    -g, --grammar <FILE>     JSON grammar file");
    println!("    -p, --preset <NAME>      Built-in grammar ({})", preset_names().join(", "));
    println!("    -a, --algorithm <NAME>   keccak256 | sha3-256 (default: keccak256)");
    println!("        --parallel           Spread the search across all cores");
    println!("        --progress           Show a progress bar (sequential only)");
    println!("        --json               Print results as JSON");
    println!("    -h, --help               Show this help");
    println!();
    println!("EXAMPLES:");
    println!("    selector-forge 0xef7ec2e7");
    println!("    selector-forge 2f71b237 --preset router");
    println!("    selector-forge match 0x8da5cb5b 0xa9059cbb --grammar grammar.json");
    println!();
    println!("ENVIRONMENT VARIABLES:");
    println!("    SELECTOR_FORGE_ALGORITHM   Default hash algorithm");
    println!("    SELECTOR_FORGE_PARALLEL    Search in parallel by default (true/false)");
    println!("    SELECTOR_FORGE_GRAMMAR     Default grammar file");
    println!("    RUST_LOG                   Log filter (default: warn)");
    println!();
    println!("EXIT CODES:");
    println!("    0  match found    1  search exhausted    2  invalid target    3  other error");
}
