mod cli;

use clap::Parser;
use leadscore::config;
use leadscore::error::LeadscoreError;
use leadscore::report::{self, OutputFormat};
use leadscore::types::config::LeadscoreConfig;
use leadscore::{export, input, score_all_leads, score_lead, telemetry};
use std::path::Path;
use tracing::warn;

pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const WARNINGS: i32 = 1;
    pub const RUNTIME_FAILURE: i32 = 3;
}

fn output_format(flag: Option<cli::ReportFormat>, cfg: &LeadscoreConfig) -> OutputFormat {
    flag.map(OutputFormat::from)
        .or_else(|| cfg.report_format())
        .unwrap_or(OutputFormat::Md)
}

fn run() -> Result<i32, LeadscoreError> {
    let cli = cli::Cli::parse();
    let cwd = std::env::current_dir()?;
    let cfg = config::load_config(&cwd, cli.config.as_deref())?.unwrap_or_default();
    telemetry::init(cli.verbose, cli.quiet, cfg.log_level())?;

    match cli.command {
        cli::Commands::Score(cmd) => {
            let record = input::load_single(&cmd.path)?;
            let result = score_lead(&record);
            let rendered = report::render_lead(
                &result,
                output_format(cmd.format, &cfg),
                cfg.show_signals(),
            )?;
            println!("{rendered}");
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Report(cmd) => {
            let mut loaded = input::load_records(&cmd.path)?;
            let records_read = loaded.records.len();
            let mut degraded = !loaded.skipped.is_empty();
            if degraded {
                eprintln!(
                    "warning: skipped {} unreadable document(s) under {}",
                    loaded.skipped.len(),
                    cmd.path.display()
                );
            }
            if let Some(max_records) = cfg.max_records() {
                if loaded.records.len() > max_records {
                    warn!(
                        loaded = loaded.records.len(),
                        max_records, "truncating lead batch to input.max_records"
                    );
                    eprintln!(
                        "warning: scoring first {max_records} of {} leads (input.max_records)",
                        loaded.records.len()
                    );
                    loaded.records.truncate(max_records);
                    degraded = true;
                }
            }

            let aggregate = score_all_leads(&loaded.records);
            let rendered = report::render_report(&aggregate, output_format(cmd.format, &cfg))?;
            println!("{rendered}");

            if cmd.export {
                let dir = cwd.join(Path::new(cfg.export_dir()));
                let path =
                    export::write_snapshot(&dir, &aggregate, &loaded.sha256, records_read)?;
                eprintln!("snapshot: {}", path.display());
            }

            if degraded {
                Ok(exit_code::WARNINGS)
            } else {
                Ok(exit_code::SUCCESS)
            }
        }
    }
}

fn main() {
    match run() {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
        }
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(exit_code::RUNTIME_FAILURE);
        }
    }
}
