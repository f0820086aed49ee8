mod helper;
mod logging;
mod render;

use anyhow::Result;
use colored::Colorize;
use rustyline::Editor;
use rustyline::error::ReadlineError;

use holiday_core::ChatMessage;
use holiday_infrastructure::ConfigService;
use holiday_interaction::{ChatSession, OpenAIChatGateway};

use crate::helper::ChatHelper;
use crate::render::{render_banner, render_message, render_title};

/// Entry point of the Holiday.AI chat.
///
/// 1. Installs file logging, loads `.env`, resolves the gateway configuration
/// 2. Shows the title and the seeded greeting
/// 3. Reads one line at a time; each line is answered before the next prompt,
///    so a session never has more than one request in flight
#[tokio::main]
async fn main() -> Result<()> {
    let _log_guard = logging::init_logging();

    tracing::info!("Starting Holiday.AI");
    ConfigService::load_dotenv();

    let config = ConfigService::new()?.resolve()?;
    let gateway = OpenAIChatGateway::new(config)?;
    let mut session = ChatSession::new(gateway);

    // ===== Chat surface =====
    let mut rl = Editor::new()?;
    rl.set_helper(Some(ChatHelper));

    println!("{}", render_title());
    println!();
    for message in session.transcript() {
        println!("{}", render_message(message));
        println!();
    }

    if !session.gateway().config().has_credential() {
        println!("{}", render_banner("API key for OpenAI is not set."));
        println!();
    }

    // ===== Main loop =====
    loop {
        match rl.readline(">> ") {
            Ok(line) => {
                let query = match classify_input(&line) {
                    InputAction::Quit => {
                        println!("{}", "Safe travels!".bright_green());
                        break;
                    }
                    InputAction::Skip => continue,
                    InputAction::Submit(query) => query,
                };

                let _ = rl.add_history_entry(query);

                println!();
                println!("{}", render_message(&ChatMessage::human(query)));
                println!();
                println!("{}", "Holiday.AI is thinking...".bright_black());

                let reply = session.submit(query).await;

                if let Some(banner) = &reply.banner {
                    println!("{}", render_banner(banner));
                }
                println!("{}", render_message(&ChatMessage::ai(reply.content)));
                println!();
            }
            Err(ReadlineError::Interrupted) => {
                println!("{}", "CTRL-C detected. Type 'quit' to exit.".yellow());
            }
            Err(ReadlineError::Eof) => {
                println!("{}", "CTRL-D detected. Exiting...".bright_green());
                break;
            }
            Err(err) => {
                tracing::error!("Readline failure: {:?}", err);
                eprintln!("{}", format!("Error: {:?}", err).red());
                break;
            }
        }
    }

    tracing::info!(
        "Session ended with {} messages",
        session.transcript().len()
    );

    Ok(())
}

/// What the loop does with one line of input.
#[derive(Debug, PartialEq, Eq)]
enum InputAction<'a> {
    Quit,
    Skip,
    Submit(&'a str),
}

/// Only an empty line is skipped. Whitespace-only text is still a query and
/// is sent as typed; trimming only applies to the quit/exit words.
fn classify_input(line: &str) -> InputAction<'_> {
    match line.trim() {
        "quit" | "exit" => InputAction::Quit,
        _ if line.is_empty() => InputAction::Skip,
        _ => InputAction::Submit(line),
    }
}
