//! Line-oriented host for the appointment form.
//!
//! Stands in for the browser page: mounts one form, feeds it edits and
//! submissions read from input, and prints prompts, errors and markup.
//!
//! Commands:
//! - `set <field> <value…>`: change one field (value may be empty; `time`,
//!   `specialty` and `date` only accept what their controls would offer)
//! - `submit`: validate and hand off the draft
//! - `show`: print the rendered form
//! - `options`: list the valid time slots and specialties
//! - `help`, `quit`

use std::io::{self, BufRead, Write};

use chrono::NaiveDate;

use crate::appointment::{AppointmentForm, FocusHost, SubmissionHandler};
use crate::clock::{Clock, DATE_FORMAT};
use crate::models::{AppointmentDraft, ChoiceError, DayPeriod, DraftField, Specialty, TimeSlot};

const HELP: &str = "\
Comandos:
  set <campo> <valor>   campos: name, date, time, rut, specialty
  submit                agendar la cita
  show                  mostrar el formulario
  options               turnos y especialidades disponibles
  quit                  salir";

// ═══════════════════════════════════════════
// Commands
// ═══════════════════════════════════════════

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Set(DraftField, String),
    Submit,
    Show,
    Options,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CommandError {
    #[error("Unknown command: {0}")]
    UnknownCommand(String),
    #[error("Missing field name after 'set'")]
    MissingFieldName,
    #[error(transparent)]
    UnknownField(#[from] ChoiceError),
    #[error(transparent)]
    InvalidChoice(ChoiceError),
    #[error("Invalid date (expected YYYY-MM-DD): {0}")]
    InvalidDate(String),
}

/// Parse one input line. Blank lines yield `None`.
///
/// The command word and field name are separated by any whitespace. The
/// value is everything after the single separator following the field
/// name, kept as given.
pub fn parse_command(line: &str) -> Option<Result<Command, CommandError>> {
    let line = line.strip_suffix('\r').unwrap_or(line);
    if line.trim().is_empty() {
        return None;
    }

    let line = line.trim_start();
    let (word, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
    let command = match word {
        "set" => parse_set(rest.trim_start()),
        "submit" => Ok(Command::Submit),
        "show" => Ok(Command::Show),
        "options" => Ok(Command::Options),
        "help" => Ok(Command::Help),
        "quit" | "exit" => Ok(Command::Quit),
        other => Err(CommandError::UnknownCommand(other.into())),
    };
    Some(command)
}

fn parse_set(rest: &str) -> Result<Command, CommandError> {
    if rest.trim().is_empty() {
        return Err(CommandError::MissingFieldName);
    }
    let (field, value) = rest.split_once(char::is_whitespace).unwrap_or((rest, ""));
    let field: DraftField = field.parse()?;
    let value = control_value(field, value)?;
    Ok(Command::Set(field, value))
}

/// Value as the matching control would produce it. Closed-choice fields
/// only take their tokens and the date only takes a calendar date; an
/// empty value clears any field.
fn control_value(field: DraftField, value: &str) -> Result<String, CommandError> {
    if value.is_empty() {
        return Ok(String::new());
    }
    match field {
        DraftField::Time => value
            .parse::<TimeSlot>()
            .map(|slot| slot.as_str().to_string())
            .map_err(CommandError::InvalidChoice),
        DraftField::Specialty => value
            .parse::<Specialty>()
            .map(|s| s.as_str().to_string())
            .map_err(CommandError::InvalidChoice),
        DraftField::Date => NaiveDate::parse_from_str(value, DATE_FORMAT)
            .map(|d| d.format(DATE_FORMAT).to_string())
            .map_err(|_| CommandError::InvalidDate(value.to_string())),
        DraftField::Name | DraftField::Rut => Ok(value.to_string()),
    }
}

// ═══════════════════════════════════════════
// Focus
// ═══════════════════════════════════════════

/// Records the focus request so the session can print it as a prompt.
#[derive(Debug, Default)]
struct PromptFocus {
    pending: Option<DraftField>,
}

impl FocusHost for PromptFocus {
    fn focus(&mut self, field: DraftField) {
        self.pending = Some(field);
    }
}

// ═══════════════════════════════════════════
// Session loop
// ═══════════════════════════════════════════

/// Mount `form` and process commands from `input` until EOF or `quit`.
pub fn run_session<H, C, R, W>(
    form: &mut AppointmentForm<H, C>,
    input: R,
    output: &mut W,
) -> io::Result<()>
where
    H: SubmissionHandler,
    C: Clock,
    R: BufRead,
    W: Write,
{
    let mut focus = PromptFocus::default();
    form.mount(&mut focus);
    if let Some(field) = focus.pending.take() {
        writeln!(output, "» {}:", field.label())?;
    }

    for line in input.lines() {
        let line = line?;
        let command = match parse_command(&line) {
            None => continue,
            Some(Ok(command)) => command,
            Some(Err(e)) => {
                tracing::debug!("Ignoring input: {e}");
                writeln!(output, "{e}")?;
                continue;
            }
        };

        match command {
            Command::Set(field, value) => form.change_field(field, value),
            Command::Submit => match form.submit() {
                Ok(()) => {
                    if let Some(e) = form.handler_mut().take_error() {
                        tracing::error!("Submitted appointment was not recorded: {e}");
                        return Err(e);
                    }
                    writeln!(output, "Cita agendada.")?
                }
                Err(e) => writeln!(output, "Error: {e}")?,
            },
            Command::Show => writeln!(output, "{}", form.render())?,
            Command::Options => write_options(output)?,
            Command::Help => writeln!(output, "{HELP}")?,
            Command::Quit => break,
        }
        output.flush()?;
    }

    Ok(())
}

fn write_options<W: Write>(output: &mut W) -> io::Result<()> {
    for period in DayPeriod::ALL {
        let slots: Vec<&str> = period.slots().map(|s| s.as_str()).collect();
        writeln!(output, "{}: {}", period.label(), slots.join(", "))?;
    }
    let specialties: Vec<&str> = Specialty::ALL.iter().map(|s| s.as_str()).collect();
    writeln!(output, "Especialidades: {}", specialties.join(", "))
}

// ═══════════════════════════════════════════
// JSON hand-off
// ═══════════════════════════════════════════

/// Submission handler that writes each accepted draft as one JSON line.
///
/// A failed write is kept until `take_error` so the host does not confirm
/// an appointment that was never recorded.
pub struct JsonLines<W> {
    out: W,
    error: Option<io::Error>,
}

impl<W: Write> JsonLines<W> {
    pub fn new(out: W) -> Self {
        Self { out, error: None }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_draft(&mut self, draft: &AppointmentDraft) -> io::Result<()> {
        let json = serde_json::to_string(draft)?;
        writeln!(self.out, "{json}")?;
        self.out.flush()
    }
}

impl<W: Write> SubmissionHandler for JsonLines<W> {
    fn on_submit(&mut self, draft: AppointmentDraft) {
        if let Err(e) = self.write_draft(&draft) {
            tracing::warn!("Failed to write submitted appointment: {e}");
            self.error = Some(e);
        }
    }

    fn take_error(&mut self) -> Option<io::Error> {
        self.error.take()
    }
}

// ═══════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════
