//! Terminal rendering of the conversation.

use colored::Colorize;
use holiday_core::ChatMessage;

pub const TITLE: &str = "Holiday.AI 🧳";
pub const PAGE_ICON: &str = "🌍";

/// Title block printed once at startup.
pub fn render_title() -> String {
    format!(
        "{} {}\n{}",
        PAGE_ICON,
        TITLE.bright_magenta().bold(),
        "Ask about flights, hotels, rental cars, destinations or travel tips. Type 'quit' to exit."
            .bright_black()
    )
}

/// One chat bubble: a role label followed by the indented content.
pub fn render_message(message: &ChatMessage) -> String {
    let label = match message {
        ChatMessage::Ai { .. } => "AI".bright_blue().bold(),
        ChatMessage::Human { .. } => "Human".green().bold(),
    };

    let body = message
        .content()
        .lines()
        .map(|line| {
            let line = format!("  {}", line);
            match message {
                ChatMessage::Ai { .. } => line.bright_blue().to_string(),
                ChatMessage::Human { .. } => line.green().to_string(),
            }
        })
        .collect::<Vec<_>>()
        .join("\n");

    if body.is_empty() {
        format!("{}", label)
    } else {
        format!("{}\n{}", label, body)
    }
}

/// Error banner for a failed exchange.
pub fn render_banner(banner: &str) -> String {
    format!("⚠ {}", banner).red().bold().to_string()
}
