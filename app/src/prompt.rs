//! Interactive password challenge for the mutating commands.

use std::io::{self, BufRead, IsTerminal, Write};

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::terminal;

use phonedir_config::AuthConfig;
use phonedir_core::{AuthRequest, Authorizer, PasswordChallenge, Sha256Secret};
use tracing::{debug, warn};

/// Build the authorizer used by `add` and `update`.
///
/// The secret comes from `--password` when given, then from the configured
/// environment variable, and is otherwise read from stdin.
pub fn authorizer(auth: &AuthConfig, password: Option<String>) -> impl Authorizer {
    if auth.uses_legacy_password() {
        warn!("Using the default directory password; run `phonedir passwd` to change it");
    }

    let env_var = auth.password_env.clone();
    PasswordChallenge::new(
        Sha256Secret::from_hex(&auth.password_sha256),
        move |request: &AuthRequest<'_>| {
            if let Some(secret) = &password {
                return Some(secret.clone());
            }
            if let Some(secret) = env_var.as_deref().and_then(|var| std::env::var(var).ok()) {
                debug!("Password taken from environment");
                return Some(secret);
            }
            let label = format!(
                "Password required to {} {}: ",
                request.action.as_str(),
                request.contact_name
            );
            read_secret(&label).ok().flatten()
        },
    )
}

/// Prompt for a secret. Typed characters are echoed as `*` on a terminal;
/// piped input is read as a plain line. `None` when the user cancels.
pub fn read_secret(label: &str) -> io::Result<Option<String>> {
    if !io::stdin().is_terminal() {
        return read_line(label);
    }

    let mut stderr = io::stderr();
    write!(stderr, "{label}")?;
    stderr.flush()?;

    terminal::enable_raw_mode()?;
    let secret = read_masked(&mut stderr);
    terminal::disable_raw_mode()?;
    writeln!(stderr)?;
    secret
}

fn read_masked<W: Write>(out: &mut W) -> io::Result<Option<String>> {
    let mut secret = String::new();
    loop {
        let Event::Key(key) = event::read()? else {
            continue;
        };
        match apply_key(&mut secret, key) {
            KeyStep::Typed => write!(out, "*")?,
            KeyStep::Erased => write!(out, "\x08 \x08")?,
            KeyStep::Ignored => {}
            KeyStep::Done => return Ok(Some(secret)),
            KeyStep::Cancelled => return Ok(None),
        }
        out.flush()?;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum KeyStep {
    Typed,
    Erased,
    Ignored,
    Done,
    Cancelled,
}

fn apply_key(secret: &mut String, key: KeyEvent) -> KeyStep {
    if key.kind == KeyEventKind::Release {
        return KeyStep::Ignored;
    }
    match key.code {
        KeyCode::Enter => KeyStep::Done,
        KeyCode::Esc => KeyStep::Cancelled,
        KeyCode::Char('c' | 'd') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            KeyStep::Cancelled
        }
        KeyCode::Backspace => {
            if secret.pop().is_some() {
                KeyStep::Erased
            } else {
                KeyStep::Ignored
            }
        }
        KeyCode::Char(c) => {
            secret.push(c);
            KeyStep::Typed
        }
        _ => KeyStep::Ignored,
    }
}

/// Prompt on stderr and read one line from stdin. `None` on end of input.
fn read_line(label: &str) -> io::Result<Option<String>> {
    let mut stderr = io::stderr();
    write!(stderr, "{label}")?;
    stderr.flush()?;

    let mut line = String::new();
    if io::stdin().lock().read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}
