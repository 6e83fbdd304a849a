//! Keyboard commands.
//!
//! ```text
//! play <tile>   discard a tile, e.g. `play 5p`
//! act <kind>    answer a claim prompt, e.g. `act PONG`
//! skip          same as `act SKIP`
//! quit          leave the table
//! ```

use tilewire::prelude::{ActionKind, Intent, Tile};

#[derive(Debug, PartialEq, Eq)]
pub enum Command {
    Intent(Intent),
    Quit,
    Help,
}

/// Parses one input line. Blank lines parse to `None`.
pub fn parse(line: &str) -> Option<Result<Command, String>> {
    let mut words = line.split_whitespace();
    let verb = words.next()?;
    let arg = words.next();

    let command = match (verb.to_ascii_lowercase().as_str(), arg) {
        ("play" | "p", Some(tile)) => Ok(Command::Intent(Intent::TilePlayed(Tile::from(tile)))),
        ("act" | "a", Some(kind)) => Ok(Command::Intent(Intent::ActionChosen(ActionKind::new(
            kind.to_ascii_uppercase(),
        )))),
        ("skip" | "s", None) => Ok(Command::Intent(Intent::ActionChosen(ActionKind::skip()))),
        ("quit" | "q", None) => Ok(Command::Quit),
        ("help" | "h" | "?", None) => Ok(Command::Help),
        ("play" | "p", None) => Err("usage: play <tile>".to_string()),
        ("act" | "a", None) => Err("usage: act <kind>".to_string()),
        _ => Err(format!("unknown command: {}", line.trim())),
    };
    Some(command)
}

pub const HELP: &str = "commands: play <tile> | act <kind> | skip | quit";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_play() {
        assert_eq!(
            parse("play 5p"),
            Some(Ok(Command::Intent(Intent::TilePlayed(Tile::from("5p")))))
        );
        assert_eq!(
            parse("  p   E "),
            Some(Ok(Command::Intent(Intent::TilePlayed(Tile::from("E")))))
        );
    }

    #[test]
    fn test_parse_act_uppercases_kind() {
        assert_eq!(
            parse("act pong"),
            Some(Ok(Command::Intent(Intent::ActionChosen(ActionKind::from(
                "PONG"
            )))))
        );
    }

    #[test]
    fn test_parse_skip_and_quit() {
        assert_eq!(
            parse("skip"),
            Some(Ok(Command::Intent(Intent::ActionChosen(ActionKind::skip()))))
        );
        assert_eq!(parse("QUIT"), Some(Ok(Command::Quit)));
    }

    #[test]
    fn test_parse_blank_and_bad_lines() {
        assert_eq!(parse("   "), None);
        assert!(matches!(parse("play"), Some(Err(_))));
        assert!(matches!(parse("dance"), Some(Err(_))));
    }
}
