//! medassist - Main CLI Entry Point

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use medassist::bundle::ModelBundle;
use medassist::cli::{Args, Commands, Config, Verbosity};
use medassist::repl::ReplSession;
use medassist::report::EvaluationReport;
use medassist::Predictor;

fn main() -> Result<()> {
    let args = Args::parse();

    let config = Config::load(args.config.clone())
        .context("Failed to load configuration")?;
    let bundle_path = config.bundle_path(args.bundle.as_ref());

    match &args.command {
        Some(Commands::Start) => {
            let predictor = load_predictor(&bundle_path, args.verbosity())?;
            run_repl(predictor, &config, &args)?;
        }
        Some(Commands::Predict { symptoms }) => {
            let predictor = load_predictor(&bundle_path, args.verbosity())?;
            run_predict(&predictor, symptoms, args.verbosity())?;
        }
        Some(Commands::Symptoms { filter }) => {
            let predictor = load_predictor(&bundle_path, args.verbosity())?;
            list_symptoms(&predictor, filter.as_deref());
        }
        Some(Commands::Report { top }) => {
            let predictor = load_predictor(&bundle_path, args.verbosity())?;
            run_report(&predictor, top.unwrap_or(config.report.top_k));
        }
        Some(Commands::Check) => {
            run_check(&bundle_path);
        }
        Some(Commands::Config) => {
            show_config(&config, &bundle_path, &args);
        }
        None => {
            // No subcommand - show usage
            println!("medassist - Smart Medical Assistant");
            println!("\nUsage:");
            println!("  medassist start                        Interactive session");
            println!("  medassist predict -s <s1,s2,...>       One-shot prediction");
            println!("  medassist symptoms [filter]            List known symptoms");
            println!("  medassist report                       Model evaluation report");
            println!("  medassist check                        Verify the model bundle");
            println!("  medassist config                       Show configuration");
            println!("\nExample:");
            println!("  medassist predict --symptoms \"headache,nausea\"");
            println!();
        }
    }

    Ok(())
}

/// Load the bundle once at startup and wrap it in a predictor.
///
/// A missing or corrupt bundle is fatal: the error propagates out of main
/// before any request is served.
fn load_predictor(bundle_path: &PathBuf, verbosity: Verbosity) -> Result<Predictor> {
    let spinner = if verbosity.show_progress() {
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.cyan} {msg}")
                .unwrap(),
        );
        pb.set_message(format!("Loading model bundle {:?}...", bundle_path));
        pb.enable_steady_tick(std::time::Duration::from_millis(100));
        Some(pb)
    } else {
        None
    };

    let bundle = ModelBundle::load(bundle_path)
        .with_context(|| format!("Failed to load model bundle from {:?}", bundle_path))?;

    if let Some(pb) = spinner {
        pb.finish_and_clear();
    }

    if verbosity.show_detail() {
        println!(
            "{}",
            format!(
                "Bundle loaded: {} symptoms, {} diseases",
                bundle.n_features(),
                bundle.encoder.n_classes()
            )
            .dimmed()
        );
    }

    Ok(Predictor::new(bundle))
}

/// Run the interactive session
fn run_repl(predictor: Predictor, config: &Config, args: &Args) -> Result<()> {
    let verbose = args.verbosity().show_detail();
    let mut session = ReplSession::new(predictor, config.report.top_k, verbose)?;
    session.run(env!("CARGO_PKG_VERSION"))
}

/// Run a one-shot prediction from the command line
fn run_predict(predictor: &Predictor, symptoms: &[String], verbosity: Verbosity) -> Result<()> {
    let selected: Vec<String> = symptoms
        .iter()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect();

    if verbosity.show_detail() {
        let (_, unknown) = predictor.partition_known(&selected);
        if !unknown.is_empty() {
            eprintln!(
                "{}",
                format!("Ignoring unknown symptoms: {}", unknown.join(", ")).dimmed()
            );
        }
    }

    match predictor.predict(&selected) {
        Ok(prediction) => {
            println!(
                "{} {}",
                "Predicted Disease:".bold().green(),
                prediction.disease
            );
            println!(
                "{} {}",
                "Recommended Doctor:".bold().cyan(),
                prediction.specialist
            );
            Ok(())
        }
        Err(e) if e.is_input_error() => {
            eprintln!("{}", "Please select at least one symptom.".yellow());
            std::process::exit(1);
        }
        Err(e) => Err(e).context("Prediction failed"),
    }
}

/// List the bundle's symptom vocabulary
fn list_symptoms(predictor: &Predictor, filter: Option<&str>) {
    let names: Vec<&String> = predictor
        .feature_names()
        .iter()
        .filter(|name| filter.map_or(true, |f| name.contains(f)))
        .collect();

    if names.is_empty() {
        println!("No symptoms match that filter.");
        return;
    }

    println!("Known symptoms ({}):", names.len());
    for name in names {
        println!("  {}", name);
    }
}

/// Print the evaluation report
fn run_report(predictor: &Predictor, top_k: usize) {
    let report = EvaluationReport::build(predictor.bundle(), top_k);

    println!("{}", "Model Evaluation".bold().cyan());
    println!();
    println!(
        "Top {} important symptoms:",
        report.top_features.len()
    );
    for (i, feature) in report.top_features.iter().enumerate() {
        println!("  {:>2}. {:<28} {:.4}", i + 1, feature.name, feature.score);
    }

    match &report.metrics {
        Some(metrics) => {
            println!();
            println!("Held-out metrics over {} samples:", metrics.samples);
            println!("  Accuracy:  {:.4}", metrics.accuracy);
            println!("  Precision: {:.4}", metrics.precision);
            println!("  Recall:    {:.4}", metrics.recall);
            println!("  F1-score:  {:.4}", metrics.f1);
        }
        None => {
            println!();
            println!(
                "{}",
                "Held-out metrics unavailable: the bundle does not carry test labels.".yellow()
            );
        }
    }
}

/// Check bundle health and exit with a matching status code
fn run_check(bundle_path: &PathBuf) {
    println!("Checking model bundle {:?}...\n", bundle_path);

    let mut healthy = true;

    if bundle_path.exists() {
        println!("  {} bundle file present", "PASS".green());
    } else {
        println!("  {} bundle file missing", "FAIL".red());
        healthy = false;
    }

    if healthy {
        match ModelBundle::load(bundle_path) {
            Ok(bundle) => {
                println!("  {} bundle parses and is internally consistent", "PASS".green());
                println!(
                    "  {} {} symptoms, {} diseases, holdout labels: {}",
                    "INFO".cyan(),
                    bundle.n_features(),
                    bundle.encoder.n_classes(),
                    if bundle.holdout.is_some() { "yes" } else { "no" }
                );
            }
            Err(e) => {
                println!("  {} {}", "FAIL".red(), e);
                healthy = false;
            }
        }
    }

    println!();
    if healthy {
        println!("{}", "Bundle is healthy.".green());
    } else {
        println!("{}", "Bundle is not usable. Fix the artifact and retry.".red());
        std::process::exit(1);
    }
}

/// Display effective configuration
fn show_config(config: &Config, bundle_path: &PathBuf, args: &Args) {
    println!("medassist configuration\n");

    println!("Bundle:");
    println!("  Path:  {:?}", bundle_path);
    println!();

    println!("Report:");
    println!("  Top K: {}", config.report.top_k);
    println!();

    println!("Verbosity: {}", args.verbosity().as_str());
    println!();
}
