//! Command-line interface for the fuzzy tip advisor.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use tracing_subscriber::EnvFilter;

use fuzzy_tip::advisor::TipAdvisor;
use fuzzy_tip::pdf::{self, RenderOutcome};
use fuzzy_tip::plot;
use fuzzy_tip::report::{self, CASE_STUDIES};
use fuzzy_tip::surface::ControlSurface;

/// Fuzzy tip advisor CLI
#[derive(Parser)]
#[command(name = "fuzzy-tip")]
#[command(about = "Fuzzy-inference tip advisor: service and food ratings in, gratuity percentage out")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Suppress informational logging
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Recommend a tip for one service/food rating pair
    Evaluate {
        /// Service quality rating, 0-10
        service: f64,
        /// Food quality rating, 0-10
        food: f64,
        /// Emit the result as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print the sampled results table and the case studies
    Report {
        /// Grid step for the results table
        #[arg(long, default_value_t = 2, value_parser = clap::value_parser!(u8).range(1..=10))]
        step: u8,
        /// Emit grid rows as JSON instead of a table
        #[arg(long)]
        json: bool,
        /// Also write the full markdown report to this path
        #[arg(long)]
        markdown: Option<PathBuf>,
    },
    /// Write membership-function and control-surface charts as SVG
    Plot {
        /// Output directory for the chart files
        #[arg(long, default_value = "images")]
        out_dir: PathBuf,
    },
    /// Render a markdown report to PDF (HTML fallback without wkhtmltopdf)
    Render {
        /// Markdown input file
        input: PathBuf,
        /// Output PDF path (defaults to the input with a .pdf extension)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli);
    if cli.no_color {
        colored::control::set_override(false);
    }

    let advisor = TipAdvisor::new().context("failed to build the tip model")?;

    match cli.command {
        Commands::Evaluate {
            service,
            food,
            json,
        } => evaluate(&advisor, service, food, json),
        Commands::Report {
            step,
            json,
            markdown,
        } => run_report(&advisor, step as usize, json, markdown),
        Commands::Plot { out_dir } => run_plot(&advisor, &out_dir),
        Commands::Render { input, output } => {
            let output = output.unwrap_or_else(|| input.with_extension("pdf"));
            match pdf::render(&input, &output)? {
                RenderOutcome::Pdf(path) => {
                    println!("{} {}", "PDF written:".green(), path.display());
                }
                RenderOutcome::HtmlFallback(path) => {
                    println!(
                        "{} {}",
                        "PDF converter unavailable, HTML written:".yellow(),
                        path.display()
                    );
                }
            }
            Ok(())
        }
    }
}

fn evaluate(advisor: &TipAdvisor, service: f64, food: f64, json: bool) -> Result<()> {
    let tip = advisor.evaluate(service, food)?;
    if json {
        println!(
            "{}",
            serde_json::json!({ "service": service, "food": food, "tip": tip })
        );
    } else {
        println!("{} {:.1}%", "Recommended tip:".bold(), tip);
        println!("  {}", report::analysis(tip).dimmed());
    }
    Ok(())
}

fn run_report(
    advisor: &TipAdvisor,
    step: usize,
    json: bool,
    markdown: Option<PathBuf>,
) -> Result<()> {
    let rows = report::results_grid(advisor, step)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
    } else {
        report::render_table(&rows).printstd();
        println!();
        println!("{}", "Case studies".bold());
        for case in CASE_STUDIES {
            let tip = advisor.evaluate(case.service, case.food)?;
            println!(
                "  {} (service {:.1}, food {:.1})",
                case.description, case.service, case.food
            );
            println!(
                "    {} {:.1}% - {}",
                "tip".green(),
                tip,
                report::analysis(tip)
            );
        }
    }
    if let Some(path) = markdown {
        fs::write(&path, report::markdown_report(advisor)?)
            .with_context(|| format!("failed to write {}", path.display()))?;
        println!("{} {}", "Markdown report written:".green(), path.display());
    }
    Ok(())
}

fn run_plot(advisor: &TipAdvisor, out_dir: &PathBuf) -> Result<()> {
    fs::create_dir_all(out_dir)
        .with_context(|| format!("failed to create {}", out_dir.display()))?;

    for var in [advisor.service(), advisor.food(), advisor.tip()] {
        let path = out_dir.join(format!("membership_{}.svg", var.name()));
        plot::plot_memberships(var, &path)?;
        println!("{} {}", "Chart written:".green(), path.display());
    }

    let surface = ControlSurface::sample(advisor, 1)?;
    let path = out_dir.join("control_surface.svg");
    plot::plot_surface(&surface, &path)?;
    println!("{} {}", "Chart written:".green(), path.display());
    Ok(())
}

fn init_tracing(cli: &Cli) {
    let default = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "error"
    } else {
        "info"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}
