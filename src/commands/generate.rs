use crate::cli::{Cli, Commands, SizePreset};
use crate::domain::models::{AppendReport, JsonOut, PlanItem};
use crate::services::appender::{append_fixture, AppendError};
use crate::services::inspect::check_fixture;
use crate::services::output::{print_one, print_out};
use crate::services::template::{fixture_len, Preset, PRESETS};

pub fn handle(cli: &Cli) -> anyhow::Result<()> {
    match &cli.command {
        Commands::Generate { preset } => {
            let mut reports = Vec::new();
            for p in selected_presets(*preset) {
                let target = cli.out_dir.join(p.file_name);
                // Each preset invocation is independent: a missing target
                // directory is reported and the remaining presets still run.
                match append_fixture(&target, p.reps) {
                    Ok(report) => {
                        if !cli.json {
                            println!("appended {} blocks to {}", report.reps, report.path);
                        }
                        reports.push(report);
                    }
                    Err(AppendError::TargetNotFound(missing)) => {
                        if !cli.json {
                            println!("error: file '{}' not found", missing.display());
                        }
                        reports.push(AppendReport::not_found(&missing, p.reps));
                    }
                    Err(err) => return Err(err.into()),
                }
            }
            if cli.json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&JsonOut {
                        ok: true,
                        data: reports
                    })?
                );
            }
        }
        Commands::Append { path, reps } => match append_fixture(path, *reps) {
            Ok(report) => {
                print_one(cli.json, report, |r| {
                    format!("appended {} blocks to {}", r.reps, r.path)
                })?;
            }
            Err(AppendError::TargetNotFound(missing)) => {
                let report = AppendReport::not_found(&missing, *reps);
                print_one(cli.json, report, |r| {
                    format!("error: file '{}' not found", r.path)
                })?;
            }
            Err(err) => return Err(err.into()),
        },
        Commands::Plan { preset } => {
            let items: Vec<PlanItem> = selected_presets(*preset)
                .into_iter()
                .map(|p| PlanItem {
                    preset: p.label.to_string(),
                    file: p.file_name.to_string(),
                    reps: p.reps,
                    bytes: fixture_len(p.reps),
                })
                .collect();
            print_out(cli.json, &items, |i| {
                format!("{}\t{}\t{} reps\t{} bytes", i.preset, i.file, i.reps, i.bytes)
            })?;
        }
        Commands::Check { path } => {
            let report = check_fixture(path)?;
            print_one(cli.json, report, |r| {
                format!(
                    "{}\t{} runs\t{} blocks\tsequential: {}",
                    r.path, r.runs, r.blocks, r.sequential
                )
            })?;
        }
    }
    Ok(())
}

fn selected_presets(preset: SizePreset) -> Vec<&'static Preset> {
    PRESETS
        .iter()
        .filter(|p| match preset {
            SizePreset::All => true,
            SizePreset::OneMb => p.label == "1mb",
            SizePreset::TenMb => p.label == "10mb",
            SizePreset::HundredMb => p.label == "100mb",
            SizePreset::OneGb => p.label == "1gb",
        })
        .collect()
}
