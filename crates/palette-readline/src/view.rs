//! Terminal rendering of the page.

use async_trait::async_trait;
use colored::Colorize;
use palette_core::alert::{Alert, AlertStyle};
use palette_core::auth::{AuthLabels, AuthMode};
use palette_core::palette::{NO_PALETTES_LABEL, Palette, PaletteId};
use palette_core::ui::{AlertSurface, AuthView, IdentityIndicator, PaletteView, ThemeView};
use std::io::{self, BufRead, Write};

/// Prints every view update to stdout.
///
/// Controls disabled by the access gate are only reflected in the output; the REPL keeps
/// accepting input so the sign-in commands stay reachable.
#[derive(Debug, Default)]
pub struct TerminalView;

impl AlertSurface for TerminalView {
    fn display(&self, alert: &Alert) {
        match alert.style() {
            AlertStyle::Success => println!("{}", format!("✔ {}", alert.message).bright_green()),
            AlertStyle::Error => println!("{}", format!("✖ {}", alert.message).bright_red()),
        }
    }

    fn hide(&self) {}
}

impl IdentityIndicator for TerminalView {
    fn show_signed_in(&self, username: &str) {
        println!("{}", format!("Signed in as {}", username).bright_magenta());
    }

    fn show_signed_out(&self) {
        println!("{}", "Not signed in".bright_black());
    }
}

impl AuthView for TerminalView {
    fn apply_labels(&self, mode: AuthMode, labels: AuthLabels) {
        tracing::debug!(%mode, "[Terminal] Auth labels updated");
        println!(
            "{} {}",
            format!("[{}]", labels.title).bright_magenta().bold(),
            format!("/submit to {}, /toggle: {}", labels.action, labels.toggle_hint).bright_black()
        );
    }

    fn set_popup_visible(&self, visible: bool) {
        if visible {
            println!("{}", "Sign-in popup open. Use /submit <user> <password>.".bright_black());
        }
    }

    fn clear_fields(&self) {}

    fn warn(&self, message: &str) {
        println!("{}", message.yellow().bold());
    }
}

#[async_trait]
impl PaletteView for TerminalView {
    fn render_placeholder(&self) {
        println!("{}", NO_PALETTES_LABEL.bright_black());
    }

    fn render_options(&self, palettes: &[Palette], selected: PaletteId) {
        println!("{}", "Palettes:".bright_magenta().bold());
        for palette in palettes {
            let line = format!("{:>4}  {}", palette.id, palette.name);
            if palette.id == selected {
                println!("{} {}", "▶".bright_magenta(), line.bold());
            } else {
                println!("  {}", line);
            }
        }
    }

    fn clear_colors(&self) {}

    fn render_colors(&self, palette: &Palette) {
        if palette.colors.is_empty() {
            println!("{}", format!("{} has no saved colors", palette.name).bright_black());
            return;
        }
        println!("{}", format!("Colors in {}:", palette.name).bright_magenta().bold());
        for color in &palette.colors {
            println!(
                "{:>6}  {:<16} {:<8} {}   {}",
                color.id,
                color.name.bold(),
                color.hex,
                color.rgb_label(),
                format!("/rmcolor {} {}", palette.id, color.id).bright_black()
            );
        }
    }

    fn clear_name_input(&self) {}

    fn disable_controls(&self) {
        println!("{}", "Palette controls are disabled.".bright_black());
    }

    fn show_sign_in_prompt(&self) {
        println!("{}", "Sign in required".bright_magenta().bold());
        println!("You must be signed in to use the Palette page. Type /signin to continue.");
    }

    async fn confirm(&self, prompt: &str) -> bool {
        let prompt = prompt.to_string();
        let answer = tokio::task::spawn_blocking(move || -> io::Result<String> {
            print!("{} {} ", prompt.yellow(), "[y/N]".bright_black());
            io::stdout().flush()?;
            let mut line = String::new();
            io::stdin().lock().read_line(&mut line)?;
            Ok(line)
        })
        .await;

        match answer {
            Ok(Ok(line)) => matches!(line.trim().to_lowercase().as_str(), "y" | "yes"),
            Ok(Err(e)) => {
                tracing::warn!(error = %e, "[Terminal] Could not read confirmation");
                false
            }
            Err(e) => {
                tracing::warn!(error = %e, "[Terminal] Confirmation task failed");
                false
            }
        }
    }
}

impl ThemeView for TerminalView {
    fn apply_theme(&self, theme: &str) {
        println!("{}", format!("Theme: {}", theme).bright_black());
    }
}
