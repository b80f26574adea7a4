use serde::{Deserialize, Serialize};
use std::io::{BufRead, Write};
use std::str::FromStr;

use crate::app::labels::Locale;
use crate::core::checksum::{self, Computation};
use crate::utils::error::{KeyError, Result};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = KeyError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(KeyError::ConfigError {
                field: "format".to_string(),
                reason: format!("unknown format '{}', expected text or json", other),
            }),
        }
    }
}

pub fn render_text<W: Write>(out: &mut W, locale: Locale, result: &Computation) -> Result<()> {
    let t = locale.labels();
    writeln!(out, "{}: {}", t.account, result.account)?;
    writeln!(out, "{}: {}", t.key_ccp, result.ccp_key)?;
    writeln!(out, "{}: {}", t.key_rip, result.rip_key)?;
    writeln!(out, "{}: {}", t.full_rip, result.identifier)?;
    Ok(())
}

pub fn render_json<W: Write>(out: &mut W, result: &Computation) -> Result<()> {
    let json = serde_json::to_string_pretty(result)?;
    writeln!(out, "{}", json)?;
    Ok(())
}

pub fn render<W: Write>(
    out: &mut W,
    locale: Locale,
    format: OutputFormat,
    result: &Computation,
) -> Result<()> {
    match format {
        OutputFormat::Text => render_text(out, locale, result),
        OutputFormat::Json => render_json(out, result),
    }
}

/// Localized hint for rejected input. Anything that is not an input
/// error falls back to the raw error text.
pub fn error_hint(locale: Locale, error: &KeyError) -> String {
    let t = locale.labels();
    match error {
        KeyError::EmptyInput => t.hint_empty.to_string(),
        KeyError::TooManyDigits { .. } => t.hint_too_long.to_string(),
        KeyError::InvalidCharacter { .. } => t.hint_digits_only.to_string(),
        other => other.to_string(),
    }
}

/// Line-oriented session: one account number per line, keys recomputed
/// on every entry. A blank line shows the no-result placeholder, "q" or
/// "quit" or end of input ends the session. Rejected entries print a
/// hint and the session continues.
pub fn run_interactive<R, W>(
    input: R,
    out: &mut W,
    locale: Locale,
    format: OutputFormat,
) -> Result<()>
where
    R: BufRead,
    W: Write,
{
    let t = locale.labels();
    writeln!(out, "{}", t.title)?;
    writeln!(out, "{}", t.notice)?;
    writeln!(out, "{}:", t.prompt)?;

    for line in input.lines() {
        let line = line?;
        let entry = line.trim();
        if entry == "q" || entry == "quit" {
            break;
        }
        if entry.is_empty() {
            writeln!(out, "{}", t.no_result)?;
            continue;
        }
        match checksum::compute(entry) {
            Ok(result) => render(out, locale, format, &result)?,
            Err(e) if e.is_input_error() => {
                tracing::debug!("Rejected entry: {}", e);
                writeln!(out, "⚠️  {}", error_hint(locale, &e))?;
            }
            Err(e) => return Err(e),
        }
    }
    Ok(())
}
