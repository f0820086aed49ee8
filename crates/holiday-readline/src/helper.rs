use std::borrow::Cow::{self, Owned};

use colored::Colorize;
use rustyline::completion::Completer;
use rustyline::highlight::Highlighter;
use rustyline::hint::{Hint, Hinter};
use rustyline::validate::Validator;
use rustyline::{Context, Helper};

pub const INPUT_PLACEHOLDER: &str = "Type your message here...";

/// Greyed-out text shown while the input line is empty.
///
/// It has no completion, so accepting a hint never inserts it.
pub struct Placeholder(&'static str);

impl Hint for Placeholder {
    fn display(&self) -> &str {
        self.0
    }

    fn completion(&self) -> Option<&str> {
        None
    }
}

/// rustyline helper for the chat input box.
///
/// Plain free text only: no commands, so no completion.
#[derive(Clone, Default)]
pub struct ChatHelper;

impl Helper for ChatHelper {}

impl Completer for ChatHelper {
    type Candidate = String;
}

impl Hinter for ChatHelper {
    type Hint = Placeholder;

    fn hint(&self, line: &str, _pos: usize, _ctx: &Context<'_>) -> Option<Placeholder> {
        line.is_empty().then_some(Placeholder(INPUT_PLACEHOLDER))
    }
}

impl Highlighter for ChatHelper {
    fn highlight_hint<'h>(&self, hint: &'h str) -> Cow<'h, str> {
        Owned(hint.bright_black().italic().to_string())
    }
}

impl Validator for ChatHelper {}
