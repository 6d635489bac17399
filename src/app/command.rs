use std::str::FromStr;

use anyhow::anyhow;

use crate::tracker::Category;

/// A single line of user input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Switch(Category),
    /// Print every category with its total.
    List,
    Pause,
    Resume,
    Reset,
    Quit,
}

impl FromStr for Command {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let command = match s.to_ascii_lowercase().as_str() {
            "l" | "list" => Command::List,
            "p" | "pause" => Command::Pause,
            "r" | "resume" => Command::Resume,
            "reset" => Command::Reset,
            "q" | "quit" | "exit" => Command::Quit,
            _ => Command::Switch(s.parse().map_err(|_| {
                anyhow!("Unknown command {s:?}. Use G, O, D, list, pause, resume, reset or quit")
            })?),
        };
        Ok(command)
    }
}

#[cfg(test)]
mod command_tests {
    use crate::tracker::Category;

    use super::Command;

    #[test]
    fn parses_commands() {
        assert_eq!("l".parse::<Command>().unwrap(), Command::List);
        assert_eq!("LIST".parse::<Command>().unwrap(), Command::List);
        assert_eq!("pause".parse::<Command>().unwrap(), Command::Pause);
        assert_eq!("r".parse::<Command>().unwrap(), Command::Resume);
        assert_eq!("reset".parse::<Command>().unwrap(), Command::Reset);
        assert_eq!(" q ".parse::<Command>().unwrap(), Command::Quit);
    }

    #[test]
    fn category_input_switches() {
        assert_eq!(
            "g".parse::<Command>().unwrap(),
            Command::Switch(Category::Meditation)
        );
        assert_eq!(
            "Office".parse::<Command>().unwrap(),
            Command::Switch(Category::Office)
        );
        assert_eq!("D".parse::<Command>().unwrap(), Command::Switch(Category::Idle));
    }

    #[test]
    fn unknown_input_is_an_error() {
        let error = "gym".parse::<Command>().unwrap_err();
        assert!(error.to_string().contains("gym"));
    }
}
