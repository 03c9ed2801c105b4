use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};

mod filter;
mod ingest;
mod models;
mod normalize;
mod report;
mod series;
mod stats;

use models::{ActivityRecord, ChartPolicy, FilterCriteria};

#[derive(Parser)]
#[command(name = "retro-celula")]
#[command(about = "Weekly célula activity report analyzer", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct ViewArgs {
    /// CSV export of the weekly report form
    #[arg(long)]
    csv: PathBuf,
    /// Only reports from this célula
    #[arg(long)]
    group: Option<String>,
    /// Only reports from this equipe
    #[arg(long)]
    team: Option<String>,
    /// Inclusive start day (YYYY-MM-DD)
    #[arg(long)]
    from: Option<NaiveDate>,
    /// Inclusive end day (YYYY-MM-DD)
    #[arg(long)]
    to: Option<NaiveDate>,
}

impl ViewArgs {
    fn criteria(&self) -> FilterCriteria {
        FilterCriteria {
            group: self.group.clone(),
            team: self.team.clone(),
            start_day: self.from,
            end_day: self.to,
        }
    }

    fn load_filtered(&self) -> anyhow::Result<Vec<ActivityRecord>> {
        let rows = ingest::read_rows(&self.csv)?;
        let records = normalize::normalize(&rows);
        Ok(filter::apply(&records, &self.criteria()))
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Print summary statistics for the filtered reports
    Stats {
        #[command(flatten)]
        view: ViewArgs,
        #[arg(long)]
        json: bool,
    },
    /// Print the chart series for the filtered reports
    Series {
        #[command(flatten)]
        view: ViewArgs,
        #[arg(long)]
        json: bool,
    },
    /// Write a markdown report with summary and series
    Report {
        #[command(flatten)]
        view: ViewArgs,
        #[arg(long, default_value = "report.md")]
        out: PathBuf,
    },
    /// List distinct células and equipes present in an export
    Groups {
        #[arg(long)]
        csv: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Stats { view, json } => {
            let records = view.load_filtered()?;
            match stats::summarize(&records) {
                None => println!("No reports match the selected filters."),
                Some(summary) if json => {
                    println!("{}", serde_json::to_string_pretty(&summary)?);
                }
                Some(summary) => {
                    println!("Meetings: {}", summary.meetings);
                    println!("Total attendance: {}", summary.total_attendance);
                    println!("Mean attendance: {:.1}", summary.mean_attendance);
                    println!(
                        "Max / min attendance: {} / {}",
                        summary.max_attendance, summary.min_attendance
                    );
                    println!("Conversions: {}", summary.total_conversions);
                    println!("Arena attendance: {}", summary.total_arena);
                    println!("Sunday attendance: {}", summary.total_sunday);
                    println!("Offering: R$ {:.2}", summary.total_offering);
                }
            }
        }
        Commands::Series { view, json } => {
            let records = view.load_filtered()?;
            let points = series::build_series(&records, &ChartPolicy::default());
            if json {
                println!("{}", serde_json::to_string_pretty(&points)?);
            } else if points.is_empty() {
                println!("No points to chart.");
            } else {
                for point in &points {
                    println!(
                        "{}: attendance {}, conversions {}, arena {}, sunday {}",
                        point.label, point.attendance, point.conversions, point.arena, point.sunday
                    );
                }
            }
        }
        Commands::Report { view, out } => {
            let records = view.load_filtered()?;
            let summary = stats::summarize(&records);
            let points = series::build_series(&records, &ChartPolicy::default());
            let report = report::build_report(&view.criteria(), summary.as_ref(), &points);
            std::fs::write(&out, report)?;
            println!("Report written to {}.", out.display());
        }
        Commands::Groups { csv } => {
            let rows = ingest::read_rows(&csv)?;
            let records = normalize::normalize(&rows);
            println!("Células:");
            for group in filter::distinct_groups(&records) {
                println!("- {group}");
            }
            println!();
            println!("Equipes:");
            for team in filter::distinct_teams(&records) {
                println!("- {team}");
            }
        }
    }

    Ok(())
}
