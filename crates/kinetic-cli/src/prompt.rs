//! Terminal prompts.

use std::io::{BufRead, IsTerminal, Write};

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use eyre::{Result, WrapErr};

/// Print `label` and read one line from stdin.
pub fn line(label: &str) -> Result<String> {
    let mut stdout = std::io::stdout();
    write!(stdout, "{label}")?;
    stdout.flush()?;
    read_line()
}

fn read_line() -> Result<String> {
    let mut line = String::new();
    std::io::stdin()
        .lock()
        .read_line(&mut line)
        .wrap_err("failed to read from stdin")?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

/// Print `label` and read a secret without echoing it. Piped input is read
/// as a plain line.
pub fn password(label: &str) -> Result<String> {
    let mut stdout = std::io::stdout();
    write!(stdout, "{label}")?;
    stdout.flush()?;

    if !std::io::stdin().is_terminal() {
        return read_line();
    }

    enable_raw_mode()?;
    let result = read_hidden();
    disable_raw_mode()?;
    writeln!(stdout)?;
    result
}

fn read_hidden() -> Result<String> {
    let mut secret = String::new();
    loop {
        if let Event::Key(key) = event::read()? {
            match apply_key(&mut secret, key) {
                KeyStep::Continue => {}
                KeyStep::Submit => return Ok(secret),
                KeyStep::Cancel => return Err(eyre::eyre!("password entry cancelled")),
            }
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
enum KeyStep {
    Continue,
    Submit,
    Cancel,
}

fn apply_key(secret: &mut String, key: KeyEvent) -> KeyStep {
    if key.kind != KeyEventKind::Press {
        return KeyStep::Continue;
    }
    match key.code {
        KeyCode::Enter => KeyStep::Submit,
        KeyCode::Esc => KeyStep::Cancel,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => KeyStep::Cancel,
        KeyCode::Backspace => {
            secret.pop();
            KeyStep::Continue
        }
        KeyCode::Char(c) => {
            secret.push(c);
            KeyStep::Continue
        }
        _ => KeyStep::Continue,
    }
}
