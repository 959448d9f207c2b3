use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use std::time::Instant;

// Every failure exits 1: usage, missing input, load, config, empty batch, write
const EXIT_SUCCESS: i32 = 0;
const EXIT_FAILURE: i32 = 1;

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum Format {
    /// Human-readable table and rating distribution
    Table,
    /// Scored and rejected clients as JSON
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "credit-rater")]
#[command(about = "Score client credit risk and assign rating bands", long_about = None)]
#[command(version)]
struct Cli {
    /// Client CSV: id,name,country,clientType,age,income,employment,industry,debt
    input: PathBuf,

    /// Path to config file (defaults to ~/.config/credit-rater/config.yaml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Directory for the ratings report (overrides the config file)
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Print how each factor moved every client's score
    #[arg(long)]
    explain: bool,

    /// Terminal output format
    #[arg(long, value_enum, default_value_t = Format::Table)]
    format: Format,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // --help and --version print to stdout and succeed
            let code = if e.use_stderr() { EXIT_FAILURE } else { EXIT_SUCCESS };
            let _ = e.print();
            std::process::exit(code);
        }
    };

    if let Err(e) = credit_rater::telemetry::init(cli.verbose) {
        eprintln!("Failed to initialize logging: {}", e);
    }

    let start_time = Instant::now();

    if !cli.input.exists() {
        eprintln!("File not found: {}", cli.input.display());
        std::process::exit(EXIT_FAILURE);
    }

    // Load config
    let config = match credit_rater::config::load_config(cli.config.clone()) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Config error: {:#}", e);
            std::process::exit(EXIT_FAILURE);
        }
    };

    // Validate scoring config at startup
    let scoring = config.scoring.clone().unwrap_or_default();
    if let Err(errors) = credit_rater::scoring::validate_scoring(&scoring) {
        eprintln!("Scoring config errors:");
        for error in errors {
            eprintln!("  - {}", error);
        }
        std::process::exit(EXIT_FAILURE);
    }

    let clients = match credit_rater::load_clients(&cli.input) {
        Ok(clients) => clients,
        Err(e) => {
            eprintln!("Failed to load client data: {}", e);
            std::process::exit(EXIT_FAILURE);
        }
    };

    tracing::debug!(count = clients.len(), path = %cli.input.display(), "loaded clients");

    let pipeline =
        credit_rater::Pipeline::new(scoring.weight_table()).with_engine(scoring.engine());

    let outcome = match pipeline.run(clients) {
        Ok(outcome) => outcome,
        Err(e) => {
            eprintln!("{}.", e);
            std::process::exit(EXIT_FAILURE);
        }
    };

    let use_colors = credit_rater::output::should_use_colors();

    match cli.format {
        Format::Table => {
            println!(
                "{}",
                credit_rater::output::format_scored_table(&outcome.results, use_colors)
            );
            println!();
            print!("{}", credit_rater::output::format_summary(&outcome, use_colors));
        }
        Format::Json => match credit_rater::output::format_json(&outcome) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("Failed to serialize results: {}", e);
                std::process::exit(EXIT_FAILURE);
            }
        },
    }

    if cli.explain {
        for result in &outcome.results {
            let breakdown = pipeline.engine().explain(&result.client, pipeline.weights());
            eprintln!();
            eprintln!(
                "{}",
                credit_rater::output::format_breakdown(&result.client, &breakdown, use_colors)
            );
        }
    }

    if cli.verbose && !outcome.rejected.is_empty() {
        eprintln!();
        eprintln!("Rejected:");
        eprintln!("{}", credit_rater::output::format_rejections(&outcome.rejected));
    }

    // Write report
    let output_dir = cli
        .output_dir
        .or(config.output_dir)
        .unwrap_or_else(|| PathBuf::from(credit_rater::report::DEFAULT_OUTPUT_DIR));
    let filename = credit_rater::report::report_filename(chrono::Local::now().naive_local());

    let path = match credit_rater::report::write_report(&output_dir, &filename, &outcome.results) {
        Ok(path) => path,
        Err(e) => {
            eprintln!("{:#}", e);
            std::process::exit(EXIT_FAILURE);
        }
    };

    if cli.verbose {
        eprintln!();
        eprintln!(
            "Total: {} clients in {:?}",
            outcome.results.len() + outcome.rejected.len(),
            start_time.elapsed()
        );
    }

    // JSON output keeps stdout machine-readable
    if cli.format == Format::Json {
        eprintln!("Credit scoring complete. Output written to {}", path.display());
    } else {
        println!("Credit scoring complete. Output written to {}", path.display());
    }

    std::process::exit(EXIT_SUCCESS);
}
