//! CLI entrypoint for the FrankenGL presence harness.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use frankengl_abi::gl::{self, GlEntry};
use frankengl_core::Shape;
use frankengl_core::config::{TraceLevel, set_trace_level};
use frankengl_harness::presence::descriptor_rows;
use frankengl_harness::structured_log::{LogEmitter, LogEntry, LogLevel, Outcome};
use frankengl_harness::{PresenceReport, ReportError};

/// Binding presence tooling for FrankenGL.
#[derive(Debug, Parser)]
#[command(name = "frankengl-harness")]
#[command(about = "Bind the OpenGL table on this host and report what resolved")]
struct Cli {
    /// Bind-pass trace level (`off`, `summary`, `symbols`); overrides FRANKENGL_BIND_TRACE.
    #[arg(long, global = true)]
    trace: Option<String>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ReportFormat {
    /// Two-column `[+]` / `[ ]` listing.
    Columns,
    /// Pretty JSON presence report.
    Json,
    /// One structured log record per entry point.
    Jsonl,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Bind with the platform strategy and print the presence report.
    Report {
        #[arg(long, value_enum, default_value = "columns")]
        format: ReportFormat,
        /// Output path (if omitted, prints to stdout).
        #[arg(long)]
        output: Option<PathBuf>,
        /// Run identifier embedded in JSONL trace ids.
        #[arg(long, default_value = "local")]
        run_id: String,
    },
    /// Exit non-zero unless every listed entry point resolved.
    Check {
        /// Entry point symbols the application needs (e.g. `glClipControl`).
        #[arg(long, required = true, num_args = 1..)]
        require: Vec<String>,
        /// Optional JSONL log of each requirement.
        #[arg(long)]
        log: Option<PathBuf>,
    },
    /// Print the descriptor table as JSON.
    Descriptors {
        /// Only list entry points of this marshalling shape.
        #[arg(long, value_parser = parse_shape)]
        shape: Option<Shape>,
    },
    /// Diff two saved JSON presence reports.
    Compare {
        left: PathBuf,
        right: PathBuf,
        /// Print the diff as JSON instead of `+`/`-`/`<`/`>` lines.
        #[arg(long)]
        json: bool,
    },
}

fn parse_shape(s: &str) -> Result<Shape, String> {
    Shape::ALL
        .into_iter()
        .find(|shape| shape.as_str() == s)
        .ok_or_else(|| {
            let names: Vec<&str> = Shape::ALL.iter().map(|shape| shape.as_str()).collect();
            format!("unknown shape '{s}', expected one of: {}", names.join(", "))
        })
}

fn bind_platform() -> PresenceReport {
    let summary = gl::bind_all();
    eprintln!(
        "{}: {}/{} entry points bound with {} (generation {})",
        summary.table,
        summary.bound,
        summary.total(),
        summary.strategy,
        summary.generation
    );
    PresenceReport::from_binding(summary.table, summary.strategy, &gl::binding_report())
}

fn write_output(output: Option<PathBuf>, text: &str) -> Result<(), Box<dyn std::error::Error>> {
    match output {
        Some(path) => {
            std::fs::write(&path, text)?;
            eprintln!("Wrote {}", path.display());
        }
        None => print!("{text}"),
    }
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    if let Some(level) = &cli.trace {
        set_trace_level(TraceLevel::from_str_loose(level));
    }

    match cli.command {
        Command::Report {
            format,
            output,
            run_id,
        } => match format {
            ReportFormat::Columns => {
                bind_platform();
                write_output(output, &gl::binding_report().render_columns())?;
            }
            ReportFormat::Json => {
                let report = bind_platform();
                write_output(output, &(report.to_json()? + "\n"))?;
            }
            ReportFormat::Jsonl => {
                let report = bind_platform();
                let mut emitter = match &output {
                    Some(path) => LogEmitter::to_file(path, &report.table, &run_id)?,
                    None => LogEmitter::to_stdout(&report.table, &run_id),
                };
                report.emit_jsonl(&mut emitter)?;
            }
        },
        Command::Check { require, log } => {
            let report = bind_platform();
            if let Some(path) = &log {
                let mut emitter = LogEmitter::to_file(path, &report.table, "check")?;
                for name in &require {
                    let bound = report.status_of(name).unwrap_or(false);
                    emitter.emit_entry(
                        LogEntry::new(
                            "",
                            if bound { LogLevel::Info } else { LogLevel::Error },
                            "require_check",
                        )
                        .with_symbol(name, bound)
                        .with_strategy(&report.strategy)
                        .with_generation(report.generation)
                        .with_outcome(Outcome::from_ok(bound)),
                    )?;
                }
                emitter.flush()?;
            }
            match report.require(&require) {
                Ok(()) => println!("all {} required entry points bound", require.len()),
                Err(err @ ReportError::Missing(_)) => {
                    eprintln!("FAIL: {err}");
                    std::process::exit(1);
                }
                Err(err) => {
                    eprintln!("ERROR: {err}");
                    std::process::exit(2);
                }
            }
        }
        Command::Descriptors { shape } => {
            let rows = descriptor_rows(&GlEntry::DESCRIPTORS, shape.map(Shape::as_str));
            println!("{}", serde_json::to_string_pretty(&rows)?);
        }
        Command::Compare { left, right, json } => {
            let left_report = PresenceReport::load(&left)?;
            let right_report = PresenceReport::load(&right)?;
            let diff = left_report.compare(&right_report)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&diff)?);
            } else {
                print!("{}", diff.render());
            }
            if !diff.is_empty() {
                eprintln!(
                    "{} and {} differ ({} gained, {} lost)",
                    left.display(),
                    right.display(),
                    diff.gained.len(),
                    diff.lost.len()
                );
                std::process::exit(1);
            }
        }
    }

    Ok(())
}
