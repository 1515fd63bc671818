//! Line-oriented front end: parses commands and applies them to a
//! `TodoClient`.
//!
//! Item numbers refer to the list as last fetched, which is what the last
//! render showed.

use std::str::FromStr;

use thiserror::Error;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use todo_core::{view, TodoClient, TodoError, TodoItem, Transport, ValidationError};

pub const HELP: &str = "\
commands:
  list             re-fetch and show the list
  title <text>     set the form title
  desc <text>      set the form description
  submit           create, or update the item being edited
  edit <n>         edit item n
  cancel           leave edit mode
  delete <n>       delete item n
  show             redraw the screen
  help             this text
  quit             exit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    List,
    Title(String),
    Desc(String),
    Submit,
    Edit(usize),
    Cancel,
    Delete(usize),
    Show,
    Help,
    Quit,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("unknown command {0:?}, try `help`")]
    Unknown(String),

    #[error("`{0}` needs an item number")]
    MissingIndex(&'static str),

    #[error("{0:?} is not an item number")]
    BadIndex(String),
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim_start();
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line.trim_end(), ""),
        };
        match word {
            "list" | "ls" => Ok(Command::List),
            "title" => Ok(Command::Title(rest.to_string())),
            "desc" | "description" => Ok(Command::Desc(rest.to_string())),
            "submit" => Ok(Command::Submit),
            "edit" => parse_index("edit", rest).map(Command::Edit),
            "cancel" => Ok(Command::Cancel),
            "delete" | "rm" => parse_index("delete", rest).map(Command::Delete),
            "show" | "" => Ok(Command::Show),
            "help" | "?" => Ok(Command::Help),
            "quit" | "exit" | "q" => Ok(Command::Quit),
            other => Err(CommandError::Unknown(other.to_string())),
        }
    }
}

fn parse_index(command: &'static str, arg: &str) -> Result<usize, CommandError> {
    if arg.is_empty() {
        return Err(CommandError::MissingIndex(command));
    }
    match arg.parse::<usize>() {
        Ok(n) if n >= 1 => Ok(n),
        _ => Err(CommandError::BadIndex(arg.to_string())),
    }
}

#[derive(Debug, Error)]
pub enum ReplError {
    #[error(transparent)]
    Command(#[from] CommandError),

    #[error(transparent)]
    Todo(#[from] TodoError),

    #[error(transparent)]
    Invalid(#[from] ValidationError),

    #[error("no item {0} in the list")]
    NoSuchItem(usize),
}

#[derive(Debug, PartialEq, Eq)]
pub enum Outcome {
    /// State may have changed, redraw.
    Render,
    Help,
    Quit,
}

pub async fn apply<T: Transport>(client: &TodoClient<T>, command: Command) -> Result<Outcome, ReplError> {
    match command {
        Command::List => client.list_todos().await?,
        Command::Title(text) => client.set_title(&text).await?,
        Command::Desc(text) => client.set_description(&text).await?,
        Command::Submit => client.submit().await?,
        Command::Edit(n) => {
            let item = item_at(client, n).await?;
            client.start_edit(&item).await;
        }
        Command::Cancel => client.cancel_edit().await,
        Command::Delete(n) => {
            let item = item_at(client, n).await?;
            client.delete_todo(&item.id).await?;
        }
        Command::Show => {}
        Command::Help => return Ok(Outcome::Help),
        Command::Quit => return Ok(Outcome::Quit),
    }
    Ok(Outcome::Render)
}

/// The item shown as number `n` (1-based) in the last render.
async fn item_at<T: Transport>(client: &TodoClient<T>, n: usize) -> Result<TodoItem, ReplError> {
    let index = n.checked_sub(1).ok_or(ReplError::NoSuchItem(n))?;
    client
        .todos()
        .await
        .into_iter()
        .nth(index)
        .ok_or(ReplError::NoSuchItem(n))
}

/// Read commands until `quit` or end of input. Failures are printed as
/// notifications and the loop carries on.
pub async fn run<T, R>(client: &TodoClient<T>, input: R) -> std::io::Result<()>
where
    T: Transport,
    R: AsyncBufRead + Unpin,
{
    let mut lines = input.lines();
    while let Some(line) = lines.next_line().await? {
        let result = match line.parse::<Command>() {
            Ok(command) => apply(client, command).await,
            Err(e) => Err(e.into()),
        };
        match result {
            Ok(Outcome::Render) => print!("{}", view::render(&client.snapshot().await)),
            Ok(Outcome::Help) => println!("{HELP}"),
            Ok(Outcome::Quit) => break,
            Err(e) => {
                // A re-fetch failure after a mutation still changed the form.
                if matches!(e, ReplError::Todo(_)) {
                    print!("{}", view::render(&client.snapshot().await));
                }
                eprintln!("! {e}");
            }
        }
    }
    Ok(())
}
