//! Interactive symptom-checking session over a line-based terminal.

use casebook_core::constants::{EMPTY_LOG_MESSAGE, NO_DEFINITION_MESSAGE, NO_SYMPTOMS_MESSAGE};
use casebook_core::symptoms::glossary;
use casebook_core::{CheckerSession, Symptom};
use std::io::{self, BufRead, Write};

const HELP: &str = "\
Commands:
  add <symptom>      add a symptom (a bare line does the same)
  remove <symptom>   remove a symptom
  list               show entered symptoms
  results            show possible conditions
  log                show the symptom log with recording times
  define <symptom>   show what a symptom means
  known              list the symptoms the checker knows
  help               show this help
  quit               finish (an empty line also finishes)";

/// One line of user input.
#[derive(Debug, PartialEq, Eq)]
pub enum SessionCommand {
    Add(String),
    Remove(String),
    List,
    Results,
    Log,
    Define(String),
    Known,
    Help,
    Quit,
}

impl SessionCommand {
    pub fn parse(line: &str) -> Self {
        let line = line.trim();
        if line.is_empty() {
            return SessionCommand::Quit;
        }

        let (head, rest) = match line.split_once(char::is_whitespace) {
            Some((head, rest)) => (head, rest.trim()),
            None => (line, ""),
        };

        match head.to_lowercase().as_str() {
            "add" => SessionCommand::Add(rest.to_string()),
            "remove" | "rm" => SessionCommand::Remove(rest.to_string()),
            "define" => SessionCommand::Define(rest.to_string()),
            "list" if rest.is_empty() => SessionCommand::List,
            "results" if rest.is_empty() => SessionCommand::Results,
            "log" if rest.is_empty() => SessionCommand::Log,
            "known" if rest.is_empty() => SessionCommand::Known,
            "help" if rest.is_empty() => SessionCommand::Help,
            "quit" | "exit" if rest.is_empty() => SessionCommand::Quit,
            _ => SessionCommand::Add(line.to_string()),
        }
    }
}

/// Runs a session until `quit`, an empty line or end of input, then prints the summary.
///
/// With `strict` set, only symptoms from [`glossary::KNOWN_SYMPTOMS`] are accepted.
pub fn run<R: BufRead, W: Write>(
    input: R,
    out: &mut W,
    mut session: CheckerSession,
    strict: bool,
) -> io::Result<CheckerSession> {
    writeln!(out, "Welcome to Symptom Checker")?;
    writeln!(
        out,
        "Please enter your symptoms (press Enter when done, 'help' for commands):\n"
    )?;

    for line in input.lines() {
        let line = line?;
        match SessionCommand::parse(&line) {
            SessionCommand::Quit => break,
            SessionCommand::Add(text) => {
                let symptom = match Symptom::new(&text) {
                    Ok(symptom) => symptom,
                    Err(_) => {
                        writeln!(out, "Please enter a valid symptom.")?;
                        continue;
                    }
                };
                if strict && !glossary::is_known(symptom.as_str()) {
                    writeln!(out, "Please select a valid symptom from the list.")?;
                    continue;
                }
                if !session.add(symptom) {
                    tracing::debug!("duplicate symptom entered");
                }
                writeln!(out, "Got it. Any other symptoms? If you are done press enter")?;
                writeln!(out, "{}\n", session.report())?;
            }
            SessionCommand::Remove(text) => {
                if text.trim().is_empty() {
                    writeln!(out, "Please select a symptom to remove.")?;
                } else if session.remove(&text) {
                    writeln!(out, "{}\n", session.report())?;
                } else {
                    writeln!(out, "Symptom not found.")?;
                }
            }
            SessionCommand::List => {
                if session.entered().is_empty() {
                    writeln!(out, "No symptoms entered yet.")?;
                } else {
                    writeln!(out, "{}", session.entered())?;
                }
            }
            SessionCommand::Results => writeln!(out, "{}", session.report())?,
            SessionCommand::Log => {
                let log = session
                    .log()
                    .and_then(|log| log.render_timestamped())
                    .unwrap_or_else(|| EMPTY_LOG_MESSAGE.to_string());
                writeln!(out, "{log}")?;
            }
            SessionCommand::Define(text) => match Symptom::new(&text) {
                Ok(symptom) => {
                    let definition =
                        glossary::definition(symptom.as_str()).unwrap_or(NO_DEFINITION_MESSAGE);
                    writeln!(out, "{}: {}", symptom, definition)?;
                }
                Err(_) => writeln!(out, "Please select a symptom from the list.")?,
            },
            SessionCommand::Known => {
                writeln!(out, "{}", glossary::KNOWN_SYMPTOMS.join(", "))?;
            }
            SessionCommand::Help => writeln!(out, "{HELP}")?,
        }
    }

    writeln!(out, "\nResults")?;
    if session.entered().is_empty() {
        writeln!(out, "{NO_SYMPTOMS_MESSAGE}")?;
    } else {
        writeln!(out, "{}", session.report())?;
    }
    if session.log().is_some() {
        writeln!(out, "\nSymptom Log:")?;
        write_log(out, &session)?;
    }
    writeln!(out, "\nThanks for using the Symptom Checker")?;

    Ok(session)
}

fn write_log<W: Write>(out: &mut W, session: &CheckerSession) -> io::Result<()> {
    let log = session
        .render_log()
        .unwrap_or_else(|| EMPTY_LOG_MESSAGE.to_string());
    writeln!(out, "{log}")
}
