//! Line commands read from stdin.

use zipdom::Event;
use zipwidgets::dom::{SEARCH_FORM_ID, SEARCH_INPUT_ID, button_id, suggestion_item_id};

pub const HELP: &str = "\
commands:
  type <text>      set the search input to <text> (empty clears it)
  select <n>       click suggestion row <n> (0-based)
  toggle <id>      click the toggle button of section <id>
  click <id>       click the element with id <id>
  outside          click outside every element
  submit           submit the search form
  show             print the page
  help             print this help
  quit             exit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// An event to dispatch to the page.
    Dispatch(Event),
    Show,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("unknown command: {0}")]
    Unknown(String),
    #[error("`{0}` needs an argument")]
    MissingArgument(&'static str),
    #[error("not a row number: {0}")]
    BadIndex(String),
}

/// Parse one input line. Blank lines yield `None`.
pub fn parse(line: &str) -> Result<Option<Command>, ParseError> {
    let line = line.trim_end_matches(['\r', '\n']);
    if line.trim().is_empty() {
        return Ok(None);
    }

    let (word, rest) = match line.trim_start().split_once(' ') {
        Some((word, rest)) => (word, rest),
        None => (line.trim(), ""),
    };

    let command = match word {
        // The argument is the raw text after the first space; inner spaces are kept.
        "type" => Command::Dispatch(Event::input(SEARCH_INPUT_ID, rest)),
        "select" => {
            let arg = required("select", rest)?;
            let index = arg
                .parse()
                .map_err(|_| ParseError::BadIndex(arg.to_string()))?;
            Command::Dispatch(Event::click(suggestion_item_id(index)))
        }
        "toggle" => Command::Dispatch(Event::click(button_id(required("toggle", rest)?))),
        "click" => Command::Dispatch(Event::click(required("click", rest)?)),
        "outside" => Command::Dispatch(Event::click_nowhere()),
        "submit" => Command::Dispatch(Event::submit(SEARCH_FORM_ID)),
        "show" => Command::Show,
        "help" | "?" => Command::Help,
        "quit" | "exit" => Command::Quit,
        other => return Err(ParseError::Unknown(other.to_string())),
    };
    Ok(Some(command))
}

fn required<'a>(command: &'static str, rest: &'a str) -> Result<&'a str, ParseError> {
    let arg = rest.trim();
    if arg.is_empty() {
        Err(ParseError::MissingArgument(command))
    } else {
        Ok(arg)
    }
}
