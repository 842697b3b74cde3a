//! CLI command implementations

use anyhow::{Context, Result};
use std::io::{BufRead, Write};
use std::path::PathBuf;

use crate::cli::args::{ConfigCommand, SummarizeArgs};
use crate::cli::interactive;
use crate::config::Settings;
use crate::llm::{build_prompt, complete};
use crate::model::ModelId;
use crate::storage;
use crate::usage::{
    count_tokens, estimate_cost, format_report, price_for, UsageReport, SIMULATION_NOTICE,
};

/// Everything a summarize run needs, fixed before any work starts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub model: ModelId,
    pub simulate: bool,
    pub patient_id: String,
}

/// How a summarize run ended.
#[derive(Debug, Clone, PartialEq)]
pub enum SummaryOutcome {
    /// The record did not exist; nothing was written.
    InputMissing { input: PathBuf },
    /// The summary was written to `output`.
    Saved {
        output: PathBuf,
        report: Option<UsageReport>,
    },
}

/// Fill in whatever the flags left out by asking on the console.
pub fn resolve_run_config(
    args: &SummarizeArgs,
    input: &mut impl BufRead,
    out: &mut impl Write,
) -> Result<RunConfig> {
    let model = match args.model.as_deref() {
        Some(name) => name.parse::<ModelId>()?,
        None => interactive::select_model(input, out)?,
    };

    let simulate = match args.simulation_flag() {
        Some(flag) => flag,
        None => interactive::confirm_simulation(input, out)?,
    };

    let patient_id = match args.patient_id.as_deref() {
        Some(id) => interactive::validate_patient_id(id)?.to_string(),
        None => interactive::read_patient_id(input, out)?,
    };

    Ok(RunConfig {
        model,
        simulate,
        patient_id,
    })
}

/// Resolve the run from flags and stdin, then summarize.
pub async fn summarize(settings: &Settings, args: SummarizeArgs) -> Result<()> {
    let run = {
        let stdin = std::io::stdin();
        let mut input = stdin.lock();
        let mut stdout = std::io::stdout();
        resolve_run_config(&args, &mut input, &mut stdout)?
    };

    summarize_record(settings, &run, &mut std::io::stdout()).await?;
    Ok(())
}

/// Load the record, get a summary, save it and report usage.
pub async fn summarize_record(
    settings: &Settings,
    run: &RunConfig,
    out: &mut impl Write,
) -> Result<SummaryOutcome> {
    let input = storage::input_path(&settings.general.records_dir, &run.patient_id);
    let output = storage::output_path(&settings.general.output_dir, &run.patient_id);

    if !input.exists() {
        writeln!(out, "Error: File '{}' not found.", input.display())?;
        return Ok(SummaryOutcome::InputMissing { input });
    }

    if !run.simulate {
        estimate_cost(0, 0, run.model)?;
    }

    writeln!(out, "Reading file and generating summary...")?;
    out.flush()?;

    let record = storage::load_record(&input)?;
    let prompt = build_prompt(&record);
    let input_tokens = if run.simulate {
        0
    } else {
        count_tokens(&record, run.model)?
    };

    let summary = complete(settings, &prompt, run.model, run.simulate)
        .await
        .context("Failed to generate summary")?;

    let output_tokens = if run.simulate {
        0
    } else {
        count_tokens(&summary, run.model)?
    };

    storage::save_summary(&summary, &output)
        .with_context(|| format!("Failed to write summary to {}", output.display()))?;
    writeln!(out, "Summary saved to '{}'", output.display())?;

    let report = if run.simulate {
        writeln!(out, "{}", SIMULATION_NOTICE)?;
        None
    } else {
        let report = UsageReport::new(input_tokens, output_tokens, run.model)?;
        writeln!(out, "{}", format_report(&report))?;
        Some(report)
    };

    Ok(SummaryOutcome::Saved { output, report })
}

/// List supported models in menu order
pub fn list_models() -> Result<()> {
    println!(
        "{:<4} {:<16} {:<14} {:<14}",
        "#", "Model", "Input/1K", "Output/1K"
    );
    println!("{}", "-".repeat(50));

    for (idx, model) in ModelId::ALL.iter().enumerate() {
        match price_for(*model) {
            Some(price) => println!(
                "{:<4} {:<16} ${:<13} ${:<13}",
                idx + 1,
                model,
                price.input,
                price.output
            ),
            None => println!("{:<4} {:<16} {:<14} {:<14}", idx + 1, model, "unpriced", "unpriced"),
        }
    }

    Ok(())
}

/// Handle config subcommands
pub fn config_command(settings: &Settings, cmd: ConfigCommand) -> Result<()> {
    match cmd {
        ConfigCommand::Show => {
            let mut shown = settings.clone();
            if !shown.llm.api_key.is_empty() {
                shown.llm.api_key = "********".to_string();
            }
            let toml = toml::to_string_pretty(&shown)?;
            println!("{}", toml);
        }
        ConfigCommand::Path => {
            let path = Settings::config_path()?;
            println!("{}", path.display());
        }
        ConfigCommand::Init { force } => {
            let path = Settings::config_path()?;
            if path.exists() && !force {
                anyhow::bail!(
                    "Config file already exists at {}. Use --force to overwrite.",
                    path.display()
                );
            }
            Settings::write_default(&path)?;
            println!("Configuration initialized at: {}", path.display());
        }
    }

    Ok(())
}
