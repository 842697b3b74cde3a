//! Console prompts for values not given on the command line

use anyhow::{bail, Context, Result};
use std::io::{BufRead, Write};

use crate::model::ModelId;

/// Read one line, or `None` once the input is closed.
fn read_answer(input: &mut impl BufRead) -> Result<Option<String>> {
    let mut line = String::new();
    let read = input
        .read_line(&mut line)
        .context("Failed to read from console")?;
    if read == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

/// Map a menu answer to a model. An empty answer picks the first entry.
pub fn parse_model_choice(answer: &str) -> Option<ModelId> {
    let answer = answer.trim();
    if answer.is_empty() {
        return Some(ModelId::default());
    }
    let index: usize = answer.parse().ok()?;
    index
        .checked_sub(1)
        .and_then(|i| ModelId::ALL.get(i).copied())
}

/// Numbered model menu. Re-asks until the answer is valid.
pub fn select_model(input: &mut impl BufRead, out: &mut impl Write) -> Result<ModelId> {
    writeln!(out, "Select GPT model:")?;
    for (idx, model) in ModelId::ALL.iter().enumerate() {
        writeln!(out, "  {}. {}", idx + 1, model)?;
    }

    loop {
        write!(out, "Enter the number of the desired model (default: 1): ")?;
        out.flush()?;

        let Some(answer) = read_answer(input)? else {
            bail!("Input closed before a model was selected");
        };
        if let Some(model) = parse_model_choice(&answer) {
            return Ok(model);
        }
        writeln!(out, "Invalid input. Please enter a valid number.")?;
    }
}

/// `y`/`Y` enables simulation; anything else, including no answer, does not.
pub fn confirm_simulation(input: &mut impl BufRead, out: &mut impl Write) -> Result<bool> {
    write!(out, "Run in simulation mode? (y/N): ")?;
    out.flush()?;

    let answer = read_answer(input)?.unwrap_or_default();
    Ok(answer.eq_ignore_ascii_case("y"))
}

/// Check a patient identifier before it becomes part of a file name.
pub fn validate_patient_id(id: &str) -> Result<&str> {
    let id = id.trim();
    if id.is_empty() {
        bail!("Patient ID must not be empty");
    }
    if id == "." || id == ".." || id.contains(['/', '\\']) {
        bail!("Patient ID '{}' must not contain path separators", id);
    }
    Ok(id)
}

/// Ask for the patient identifier. Re-asks on empty or path-like answers.
pub fn read_patient_id(input: &mut impl BufRead, out: &mut impl Write) -> Result<String> {
    loop {
        write!(out, "Enter patient ID number (Teudat Zehut): ")?;
        out.flush()?;

        let Some(answer) = read_answer(input)? else {
            bail!("Input closed before a patient ID was entered");
        };
        match validate_patient_id(&answer) {
            Ok(id) => return Ok(id.to_string()),
            Err(e) => writeln!(out, "{}", e)?,
        }
    }
}
