//! REPL input parsing.

use palette_core::palette::PaletteId;
use palette_core::ui::UiEvent;

/// Slash commands offered for completion and hints.
pub const COMMANDS: &[&str] = &[
    "/signin", "/dismiss", "/toggle", "/submit", "/logout", "/theme", "/create", "/delete",
    "/select", "/rmcolor", "/reload", "/help",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Event(UiEvent),
    Reload,
    Help,
    Quit,
}

/// Parses one REPL line. `Err` carries a usage message for the user.
pub fn parse(line: &str) -> Result<Command, String> {
    let line = line.trim();
    if line == "quit" || line == "exit" {
        return Ok(Command::Quit);
    }

    let (head, rest) = match line.split_once(char::is_whitespace) {
        Some((head, rest)) => (head, rest.trim()),
        None => (line, ""),
    };

    let event = match head {
        "/help" => return Ok(Command::Help),
        "/reload" => return Ok(Command::Reload),
        "/signin" => UiEvent::OpenAuthPopup,
        "/dismiss" => UiEvent::DismissAuthPopup,
        "/toggle" => UiEvent::ToggleAuthMode,
        "/logout" => UiEvent::Logout,
        "/delete" => UiEvent::DeletePalette,
        "/submit" => {
            // Missing fields are passed through blank; the auth flow warns about them.
            let mut parts = rest.split_whitespace();
            UiEvent::SubmitAuth {
                username: parts.next().unwrap_or_default().to_string(),
                password: parts.next().unwrap_or_default().to_string(),
            }
        }
        "/theme" => UiEvent::ChangeTheme {
            theme: rest.to_string(),
        },
        "/create" => UiEvent::CreatePalette {
            name: rest.to_string(),
        },
        "/select" => UiEvent::SelectPalette {
            id: parse_id(rest, "/select <palette-id>")?,
        },
        "/rmcolor" => {
            let usage = "/rmcolor <palette-id> <color-id>";
            let mut parts = rest.split_whitespace();
            let palette_id = parse_id(parts.next().unwrap_or_default(), usage)?;
            let color_id = parse_id(parts.next().unwrap_or_default(), usage)?;
            UiEvent::DeleteColor {
                palette_id,
                color_id,
            }
        }
        other => return Err(format!("Unknown command: {} (try /help)", other)),
    };
    Ok(Command::Event(event))
}

fn parse_id(raw: &str, usage: &str) -> Result<PaletteId, String> {
    raw.trim()
        .parse()
        .map_err(|_| format!("Usage: {}", usage))
}

pub fn help() -> &'static str {
    "\
/signin                      open the sign-in popup
/toggle                      switch between sign in and register
/submit <user> <password>    submit the popup
/dismiss                     close the popup
/logout                      sign out
/theme <name>                change the theme
/create <name>               save a new palette
/select <palette-id>         show another palette's colors
/delete                      delete the selected palette
/rmcolor <palette-id> <id>   delete a saved color
/reload                      reload the page
quit                         exit"
}
