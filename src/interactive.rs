//! Line based session that keeps the map and the user location between commands.

use std::str::FromStr;

use anyhow::Result;
use thiserror::Error;
use tokio::io::{self, AsyncBufReadExt, AsyncWriteExt, BufReader};

use wte_core::{marker::MarkerEvent, search::PLACEHOLDER};

use crate::app::App;

const HELP: &str = "\
Commands:
  type <TEXT>      list suggestions for a partial address
  pick <N>         search around suggestion (N)
  search <ADDRESS> search around an address
  choose           choose a random restaurant near you
  hover <N>        show the bubble of marker [N]
  click <N>        show the bubble of marker [N]
  out <N>          hide the bubble of marker [N]
  clear            clear the search box
  help             show this help
  quit             end the session";

#[derive(Debug, Clone, PartialEq, Eq)]
enum Command {
    Type(String),
    Pick(usize),
    Search(String),
    Choose,
    Marker(usize, MarkerEvent),
    Clear,
    Help,
    Quit,
}

#[derive(Debug, Error, PartialEq, Eq)]
enum ParseCommandError {
    #[error("Unknown command '{0}', type 'help' for a list of commands")]
    Unknown(String),
    #[error("'{0}' requires an argument")]
    MissingArgument(&'static str),
    #[error("'{0}' is not a number")]
    InvalidNumber(String),
}

fn parse_number(arg: &str) -> Result<usize, ParseCommandError> {
    arg.parse()
        .map_err(|_| ParseCommandError::InvalidNumber(arg.to_string()))
}

impl FromStr for Command {
    type Err = ParseCommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (name, arg) = s.split_once(char::is_whitespace).unwrap_or((s, ""));
        let arg = arg.trim();
        let required = |name: &'static str| {
            if arg.is_empty() {
                Err(ParseCommandError::MissingArgument(name))
            } else {
                Ok(arg)
            }
        };
        let cmd = match name {
            // Typing nothing dismisses the suggestions
            "type" => Self::Type(arg.to_string()),
            "pick" => Self::Pick(parse_number(required("pick")?)?),
            "search" => Self::Search(required("search")?.to_string()),
            "choose" => Self::Choose,
            "hover" => Self::Marker(parse_number(required("hover")?)?, MarkerEvent::MouseOver),
            "click" => Self::Marker(parse_number(required("click")?)?, MarkerEvent::Click),
            "out" => Self::Marker(parse_number(required("out")?)?, MarkerEvent::MouseOut),
            "clear" => Self::Clear,
            "help" | "?" => Self::Help,
            "quit" | "exit" => Self::Quit,
            _ => return Err(ParseCommandError::Unknown(name.to_string())),
        };
        Ok(cmd)
    }
}

async fn prompt(app: &App) -> Result<()> {
    let value = app.value();
    let prompt = if value.is_empty() {
        format!("[{PLACEHOLDER}] > ")
    } else {
        format!("[{value}] > ")
    };
    let mut stdout = io::stdout();
    stdout.write_all(prompt.as_bytes()).await?;
    stdout.flush().await?;
    Ok(())
}

pub async fn run(app: &App) -> Result<()> {
    println!("{HELP}");
    let mut lines = BufReader::new(io::stdin()).lines();
    loop {
        prompt(app).await?;
        let Some(line) = lines.next_line().await? else {
            break;
        };
        if line.trim().is_empty() {
            continue;
        }
        let cmd = match line.parse::<Command>() {
            Ok(cmd) => cmd,
            Err(err) => {
                println!("{err}");
                continue;
            }
        };
        let res = match cmd {
            Command::Type(text) => {
                app.suggest(&text).await;
                Ok(())
            }
            Command::Pick(number) => app.pick(number).await,
            Command::Search(address) => app.search(&address).await,
            Command::Choose => app.choose_for_me().await,
            Command::Marker(number, event) => app.marker_event(number, event),
            Command::Clear => {
                app.clear();
                Ok(())
            }
            Command::Help => {
                println!("{HELP}");
                Ok(())
            }
            Command::Quit => break,
        };
        if let Err(err) = res {
            println!("{err}");
        }
    }
    Ok(())
}
