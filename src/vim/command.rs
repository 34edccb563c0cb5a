use thiserror::Error;

/// Commands accepted in `:` mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Next,
    Prev,
    Submit,
    Theme,
    Help,
    Quit,
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum CommandError {
    #[error("Unknown command: {0}")]
    Unknown(String),
}

pub fn parse_command(input: &str) -> Result<Command, CommandError> {
    let name = input.split_whitespace().next().unwrap_or("").to_lowercase();

    match name.as_str() {
        "next" | "n" => Ok(Command::Next),
        "prev" | "previous" | "p" | "back" => Ok(Command::Prev),
        "submit" | "w" | "send" => Ok(Command::Submit),
        "theme" | "t" => Ok(Command::Theme),
        "help" | "h" | "?" => Ok(Command::Help),
        "q" | "quit" | "exit" => Ok(Command::Quit),
        "" => Err(CommandError::Unknown("empty command".to_string())),
        other => Err(CommandError::Unknown(other.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aliases() {
        assert_eq!(parse_command("n"), Ok(Command::Next));
        assert_eq!(parse_command("  back "), Ok(Command::Prev));
        assert_eq!(parse_command("W"), Ok(Command::Submit));
        assert_eq!(parse_command("theme dark"), Ok(Command::Theme));
    }

    #[test]
    fn unknown_and_empty() {
        assert_eq!(
            parse_command("frobnicate"),
            Err(CommandError::Unknown("frobnicate".to_string()))
        );
        assert!(parse_command("   ").is_err());
    }
}
