use std::io;

use thiserror::Error;
use tracing::debug;

use crate::config::{ConfigError, SweepSpec};

use super::Combo;

/// Failure while rendering or writing a batch.
#[derive(Debug, Error)]
pub enum EmitError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("write command batch: {0}")]
    Io(#[from] io::Error),
}

/// Render the full batch in output order. An empty string is a blank
/// separator line: one after each (dataset, duration) group's loads, one
/// more after all CC variants at a PFC level.
///
/// Validation runs first; an invalid spec produces no lines at all.
pub fn render_lines(spec: &SweepSpec) -> Result<Vec<String>, ConfigError> {
    spec.validate()?;
    let mut lines = Vec::new();
    for &pfc in &spec.pfc_variants {
        for &cc in &spec.cc_variants {
            if pfc == 0 && cc == 0 {
                continue;
            }
            for (dataset, duration) in spec.datasets.iter().zip(spec.durations.iter()) {
                for &load in &spec.loads {
                    let combo = Combo {
                        pfc,
                        cc,
                        dataset,
                        duration,
                        load,
                    };
                    lines.push(combo.command_line(spec));
                }
                lines.push(String::new());
            }
        }
        lines.push(String::new());
    }
    Ok(lines)
}

/// Write the batch to `out`, one newline-terminated line per entry.
pub fn emit(spec: &SweepSpec, out: &mut impl io::Write) -> Result<(), EmitError> {
    let lines = render_lines(spec)?;
    for line in &lines {
        writeln!(out, "{line}")?;
    }
    let commands = lines.iter().filter(|l| !l.is_empty()).count();
    debug!(commands, total_lines = lines.len(), "emitted command batch");
    Ok(())
}
