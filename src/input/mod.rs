//! Terminal commands, the user-action side of the storefront.

use std::io;
use std::str::FromStr;

use tokio::io::{AsyncBufRead, AsyncBufReadExt};

use crate::domain::ProductId;
use crate::error::InputError;

pub const HELP: &str = "\
Commands:
  catalog         list the products
  add <id>        add product <id> to the cart
  remove <index>  remove the cart entry at <index>
  cart            open or close the cart
  checkout        finish the purchase
  help            show this text
  quit            leave the store";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Catalog,
    Add(ProductId),
    Remove(usize),
    ToggleCart,
    Checkout,
    Help,
    Quit,
}

impl Command {
    /// Parses one input line. Blank lines yield `None`.
    pub fn parse(line: &str) -> Result<Option<Self>, InputError> {
        let mut words = line.split_whitespace();
        let Some(word) = words.next() else {
            return Ok(None);
        };

        let command = match word.to_ascii_lowercase().as_str() {
            "catalog" | "list" => Command::Catalog,
            "add" => Command::Add(number(words.next(), "add", "a product id")?),
            "remove" | "rm" => Command::Remove(number(words.next(), "remove", "a cart position")?),
            "cart" => Command::ToggleCart,
            "checkout" => Command::Checkout,
            "help" | "?" => Command::Help,
            "quit" | "exit" => Command::Quit,
            _ => return Err(InputError::UnknownCommand(word.to_string())),
        };
        Ok(Some(command))
    }
}

/// Reads the next input line into `buf`, returning `None` at end of input.
/// Invalid UTF-8 is replaced rather than rejected, so a garbled line parses
/// as an unknown command instead of ending the session.
pub async fn read_line<R>(reader: &mut R, buf: &mut Vec<u8>) -> io::Result<Option<String>>
where
    R: AsyncBufRead + Unpin,
{
    buf.clear();
    if reader.read_until(b'\n', buf).await? == 0 {
        return Ok(None);
    }
    Ok(Some(String::from_utf8_lossy(buf).into_owned()))
}

fn number<T: FromStr>(
    word: Option<&str>,
    command: &'static str,
    argument: &'static str,
) -> Result<T, InputError> {
    let word = word.ok_or(InputError::MissingArgument { command, argument })?;
    word.parse().map_err(|_| InputError::InvalidNumber(word.to_string()))
}
