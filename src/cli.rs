use crate::error::AppError;
use crate::scenarios::{rank_scenarios, RankedScenario, ScenarioImporter};
use crate::scoring;
use crate::scoring::domain::{AnswerSet, AnswerSheet};
use crate::scoring::views::Assessment;
use crate::server;
use chrono::Local;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "Concurso Advisor",
    about = "Score the competitive advantage of civil-service job postings",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Score one answer-sheet JSON file and print the full report
    Assess(AssessArgs),
    /// Score a CSV of posting scenarios and print them ranked by index
    Compare(CompareArgs),
}

#[derive(Args, Debug, Default)]
pub struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

#[derive(Args, Debug)]
struct AssessArgs {
    /// Answer-sheet JSON file
    #[arg(long)]
    input: PathBuf,
    /// Include the per-factor point breakdown in the output
    #[arg(long)]
    components: bool,
}

#[derive(Args, Debug)]
struct CompareArgs {
    /// Scenario CSV file (one posting per row)
    #[arg(long)]
    input: PathBuf,
}

pub async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Assess(args) => run_assess(args),
        Command::Compare(args) => run_compare(args),
    }
}

fn run_assess(args: AssessArgs) -> Result<(), AppError> {
    let raw = std::fs::read_to_string(&args.input)?;
    let sheet: AnswerSheet = serde_json::from_str(&raw)?;
    let answers = sheet.validate()?;
    let assessment = scoring::compute(&answers);

    render_assessment(&answers, &assessment, args.components);
    Ok(())
}

fn run_compare(args: CompareArgs) -> Result<(), AppError> {
    let scenarios = ScenarioImporter::from_path(&args.input)?;
    let ranked = rank_scenarios(scenarios);
    render_ranking(&ranked);
    Ok(())
}

fn render_assessment(answers: &AnswerSet, assessment: &Assessment, show_components: bool) {
    println!("Posting assessment ({})", Local::now().date_naive());
    println!(
        "Remuneration: {} gross + {} benefits over a {} week ({} per hour)",
        format_currency(answers.gross_salary),
        format_currency(answers.fixed_benefits),
        answers.weekly_workload.label(),
        format_currency(assessment.hourly_rate)
    );

    println!(
        "\nAdvantage index: {} / 100 ({})",
        assessment.index, assessment.classification_label
    );
    println!(
        "Blocks: posting {} | profile {} | personal context {}",
        assessment.block_a, assessment.block_b, assessment.block_c
    );

    if assessment.alerts.is_empty() {
        println!("\nAlerts: none");
    } else {
        println!("\nAlerts");
        for alert in &assessment.alerts {
            println!("- [{}] {}", alert.label, alert.detail);
        }
    }

    if assessment.insights.strengths.is_empty() {
        println!("\nStrengths: none identified");
    } else {
        println!("\nStrengths");
        for item in &assessment.insights.strengths {
            println!("- {item}");
        }
    }

    println!("\nWeaknesses");
    for item in &assessment.insights.weaknesses {
        println!("- {item}");
    }

    println!("\nAttention points");
    for item in &assessment.insights.attention_points {
        println!("- {item}");
    }

    println!("\nStrategic read");
    println!("{}", assessment.insights.narrative);

    if show_components {
        println!("\nPoint breakdown");
        for component in &assessment.components {
            println!("- {:>3} | {}", component.points, component.notes);
        }
    }
}

fn render_ranking(ranked: &[RankedScenario]) {
    if ranked.is_empty() {
        println!("No scenarios to compare");
        return;
    }

    println!("Scenario ranking ({})", Local::now().date_naive());
    for (position, scenario) in ranked.iter().enumerate() {
        println!(
            "{}. {} | index {} ({}) | blocks {}/{}/{}",
            position + 1,
            scenario.label,
            scenario.assessment.index,
            scenario.assessment.classification_label,
            scenario.assessment.block_a,
            scenario.assessment.block_b,
            scenario.assessment.block_c
        );
        for alert in &scenario.assessment.alerts {
            println!("   ! {}", alert.label);
        }
    }
}

/// Fixed-locale (pt-BR) currency rendering: dot for thousands, comma for
/// cents.
fn format_currency(value: f64) -> String {
    let cents = (value * 100.0).round() as i64;
    let whole = (cents / 100).abs();
    let fraction = (cents % 100).abs();

    let digits = whole.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (offset, digit) in digits.chars().enumerate() {
        if offset > 0 && (digits.len() - offset) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(digit);
    }

    let sign = if cents < 0 { "-" } else { "" };
    format!("R$ {sign}{grouped},{fraction:02}")
}
