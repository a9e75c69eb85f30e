use anyhow::Result;
use clap::{Parser, Subcommand};
use sigcheck::report::CollectingObserver;
use sigcheck::Config;
use std::fs;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "sigcheck")]
#[command(about = "JDiff API signature compliance checker")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check an expected API description against an observed one
    Check {
        /// Expected API description (JDiff XML)
        #[arg(value_name = "EXPECTED")]
        expected: PathBuf,

        /// Observed API description to check against
        #[arg(value_name = "OBSERVED")]
        observed: PathBuf,

        /// Classes to skip (known unloadable), repeatable
        #[arg(long = "skip-class", value_name = "NAME")]
        skip_classes: Vec<String>,

        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
    },

    /// Parse an API description and show its contents
    Dump {
        /// Input API description (JDiff XML)
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Show per-member detail
        #[arg(short, long)]
        detailed: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match &cli.command {
        Commands::Check {
            expected,
            observed,
            skip_classes,
            verbose,
        } => check_apis(expected, observed, skip_classes, *verbose),
        Commands::Dump { input, detailed } => dump_api(input, *detailed),
    }
}

fn check_apis(
    expected: &PathBuf,
    observed: &PathBuf,
    skip_classes: &[String],
    verbose: bool,
) -> Result<()> {
    if verbose {
        println!(
            "Checking {} against {}...",
            expected.display(),
            observed.display()
        );
    }

    let observed_xml = fs::File::open(observed)?;
    let runtime = sigcheck::mirror(std::io::BufReader::new(observed_xml))?;

    let mut config = Config::new();
    for name in skip_classes {
        config = config.skip_class(name);
    }

    let mut observer = CollectingObserver::new();
    sigcheck::check_file(expected, &runtime, &config, &mut observer)?;

    for failure in &observer.failures {
        println!("{}", failure);
    }

    if observer.is_clean() {
        if verbose {
            println!("API surface is compliant");
        }
        Ok(())
    } else {
        println!("{} finding(s)", observer.failures.len());
        std::process::exit(1);
    }
}

fn dump_api(input: &PathBuf, detailed: bool) -> Result<()> {
    let file = fs::File::open(input)?;
    let classes = sigcheck::load_api(std::io::BufReader::new(file))?;

    for class in &classes {
        println!(
            "{} ({:?}, {} fields, {} methods, {} constructors)",
            class.absolute_name(),
            class.kind,
            class.fields.len(),
            class.methods.len(),
            class.constructors.len()
        );
        if detailed {
            for field in &class.fields {
                println!("  field  {}", field.to_readable_string(&class.absolute_name()));
            }
            for ctor in &class.constructors {
                println!("  ctor   {}", ctor.to_readable_string(&class.absolute_name()));
            }
            for method in &class.methods {
                println!("  method {}", method.to_readable_string(&class.absolute_name()));
            }
        }
    }
    println!("{} classes", classes.len());

    Ok(())
}
