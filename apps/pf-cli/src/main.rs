use clap::{Parser, Subcommand};
use pf_app::{AppError, AppResult, project_service, run_service};
use pf_results::BatchReport;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "pf-cli")]
#[command(about = "PyroFlow CLI - Plastic pyrolysis batch simulation tool", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate project file syntax and structure
    Validate {
        /// Path to the project YAML or JSON file
        project_path: PathBuf,
    },
    /// List batches in a project
    Batches {
        /// Path to the project YAML or JSON file
        project_path: PathBuf,
    },
    /// Run a batch and print its report
    Run {
        /// Path to the project YAML or JSON file
        project_path: PathBuf,
        /// Batch ID to simulate
        batch_id: String,
        /// Write the report CSV (file name optional)
        #[arg(
            short,
            long,
            num_args = 0..=1,
            default_missing_value = "pyrolysis_simulation_result.csv"
        )]
        output: Option<PathBuf>,
        /// Print the report as JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Run the temperature sensitivity sweep for a batch
    Sweep {
        /// Path to the project YAML or JSON file
        project_path: PathBuf,
        /// Batch ID to sweep
        batch_id: String,
        /// Output CSV file path (optional, defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> AppResult<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Validate { project_path } => cmd_validate(&project_path),
        Commands::Batches { project_path } => cmd_batches(&project_path),
        Commands::Run {
            project_path,
            batch_id,
            output,
            json,
        } => cmd_run(&project_path, &batch_id, output.as_deref(), json),
        Commands::Sweep {
            project_path,
            batch_id,
            output,
        } => cmd_sweep(&project_path, &batch_id, output.as_deref()),
    }
}

fn cmd_validate(project_path: &Path) -> AppResult<()> {
    println!("Validating project: {}", project_path.display());
    let project = project_service::load_project(project_path)?;
    project_service::validate_project(&project)?;
    println!("✓ Project is valid");
    Ok(())
}

fn cmd_batches(project_path: &Path) -> AppResult<()> {
    let project = project_service::load_project(project_path)?;
    let batches = project_service::list_batches(&project);

    if batches.is_empty() {
        println!("No batches found in project");
    } else {
        println!("Batches in project:");
        for batch in batches {
            let recycle = if batch.has_recycle { ", recycle" } else { "" };
            println!(
                "  {} - {} ({}, {} C, {}{})",
                batch.id, batch.name, batch.feedstock, batch.temperature_c, batch.sequence, recycle
            );
        }
    }
    Ok(())
}

fn cmd_run(
    project_path: &Path,
    batch_id: &str,
    output: Option<&Path>,
    json: bool,
) -> AppResult<()> {
    println!("Running batch simulation: {}", batch_id);

    let project = project_service::load_project(project_path)?;
    let report = run_service::run_batch(&project, batch_id)?;

    println!("✓ Simulation completed: {}", batch_id);

    if json {
        let rendered = serde_json::to_string_pretty(&report)
            .map_err(|e| AppError::Results(e.to_string()))?;
        println!("{}", rendered);
    } else {
        print_report(&report);
    }

    if let Some(path) = output {
        let csv = pf_results::render_batch_csv(&report);
        std::fs::write(path, csv)?;
        println!("✓ Report written to {}", path.display());
    }

    Ok(())
}

fn cmd_sweep(project_path: &Path, batch_id: &str, output: Option<&Path>) -> AppResult<()> {
    let project = project_service::load_project(project_path)?;
    let records = run_service::run_sweep(&project, batch_id)?;

    let csv = pf_results::render_sweep_csv(&records);

    if let Some(path) = output {
        std::fs::write(path, csv)?;
        println!(
            "✓ Exported {} sweep points to {}",
            records.len(),
            path.display()
        );
    } else {
        print!("{}", csv);
    }

    Ok(())
}

fn print_report(report: &BatchReport) {
    println!("\nYields:");
    println!("  Oil:  {:>7.2} %", report.yields.oil_pct);
    println!("  Wax:  {:>7.2} %", report.yields.wax_pct);
    println!("  Char: {:>7.2} %", report.yields.char_pct);
    println!("  NCG:  {:>7.2} %", report.yields.ncg_pct);

    println!("\nProduct streams:");
    println!("  Oil:  {:>11.2} kg", report.streams.oil_kg);
    println!("  Wax:  {:>11.2} kg", report.streams.wax_kg);
    println!("  Char: {:>11.2} kg", report.streams.char_kg);
    println!("  NCG:  {:>11.2} kg", report.streams.ncg_kg);

    println!("\nDistillate volumes:");
    println!("  Total:   {:>11.2} L", report.oil.total_l);
    println!("  C5-C10:  {:>11.2} L", report.oil.light_l);
    println!("  C11-C17: {:>11.2} L", report.oil.mid_l);
    println!("  C18-C24: {:>11.2} L", report.oil.heavy_l);

    println!("\nEconomics:");
    println!("  Revenue: {:>13.2} ₹", report.economics.revenue);
    println!("  Cost:    {:>13.2} ₹", report.economics.total_cost);
    println!("  Profit:  {:>13.2} ₹", report.economics.profit);
    println!("  ROI:     {:>13.2} %", report.economics.roi_pct);
}
