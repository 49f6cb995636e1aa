use std::path::{Path, PathBuf};

use calendar::{chrono::NaiveDate, to_gregorian, to_jalali, JalaliDate};
use clap::{Parser, Subcommand};
use env::Env;
use eyre::Context;
use log::info;
use model::{assignment::AssignmentRecord, person::Person, program::Program};
use report::{measurements::MeasurementSheet, template::template_path, ProgramReport};
use serde::{de::DeserializeOwned, Deserialize, Serialize};

#[derive(Parser)]
#[command(name = "report-cli")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Program reports and jalali dates", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Build the printable report of a program
    Report {
        /// JSON file with the program, the person and the assignments
        #[arg(short, long)]
        program: PathBuf,
    },
    /// Body measurement history of a person
    Sizes {
        /// JSON file with the programs of one person
        #[arg(short, long)]
        programs: PathBuf,
    },
    /// Convert a gregorian date (YYYY-MM-DD)
    ToJalali { date: NaiveDate },
    /// Convert a jalali date (Y/M/D)
    ToGregorian { date: JalaliDate },
}

#[derive(Deserialize)]
struct ReportInput {
    program: Program,
    person: Person,
    /// Overrides the program date when present. Blank means no date.
    #[serde(default)]
    shamsi_date: Option<String>,
    #[serde(default)]
    records: Vec<AssignmentRecord>,
}

#[derive(Serialize)]
struct ReportOutput {
    template_path: PathBuf,
    #[serde(flatten)]
    report: ProgramReport,
}

async fn read_json<T: DeserializeOwned>(path: &Path) -> eyre::Result<T> {
    let content = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_str(&content).with_context(|| format!("Failed to parse {}", path.display()))
}

fn print_json<T: Serialize>(value: &T) -> eyre::Result<()> {
    let json = serde_json::to_string_pretty(value).context("Failed to serialize output")?;
    println!("{}", json);
    Ok(())
}

async fn print_report(env: &Env, path: &Path) -> eyre::Result<()> {
    let mut input: ReportInput = read_json(path).await?;
    if let Some(date) = &input.shamsi_date {
        input
            .program
            .set_date_from_text(date)
            .context("Invalid program date")?;
    }
    info!(
        "Building report of program {} with {} assignments",
        input.program.id,
        input.records.len()
    );
    let report = ProgramReport::build(
        env.coach_name()?,
        &input.program,
        &input.person,
        &input.records,
    )
    .context("Failed to build report")?;
    let output = ReportOutput {
        template_path: template_path(env.report_template_dir(), report.variant_count),
        report,
    };
    print_json(&output)
}

async fn print_sizes(path: &Path) -> eyre::Result<()> {
    let programs: Vec<Program> = read_json(path).await?;
    info!("Building measurement sheet of {} programs", programs.len());
    let sheet = MeasurementSheet::new(&programs).context("Failed to build measurement sheet")?;
    print_json(&sheet)
}

#[tokio::main]
async fn main() -> eyre::Result<()> {
    let env = Env::load();
    pretty_env_logger::formatted_builder()
        .parse_filters(env.rust_log())
        .init();
    color_eyre::install()?;

    match Cli::parse().command {
        Command::Report { program } => print_report(&env, &program).await?,
        Command::Sizes { programs } => print_sizes(&programs).await?,
        Command::ToJalali { date } => {
            let jalali = to_jalali(date).context("Failed to convert date")?;
            println!("{}", jalali);
        }
        Command::ToGregorian { date } => {
            let gregorian = to_gregorian(date).context("Failed to convert date")?;
            println!("{}", gregorian);
        }
    }
    Ok(())
}
