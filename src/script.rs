use crate::error::{CommandError, ParseError, Result};
use crate::simulation::AntGame;
use std::fmt;
use std::fs;
use std::str::FromStr;

/// One line of a command script
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ScriptCommand {
    Deploy { ant_type: String, location: String },
    Remove { location: String },
    Boost { boost: String, location: String },
    Turn,
}

impl FromStr for ScriptCommand {
    type Err = ParseError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split_whitespace().collect();
        match parts.as_slice() {
            ["deploy", ant_type, location] => Ok(ScriptCommand::Deploy {
                ant_type: ant_type.to_string(),
                location: location.to_string(),
            }),
            ["remove", location] => Ok(ScriptCommand::Remove {
                location: location.to_string(),
            }),
            ["boost", boost, location] => Ok(ScriptCommand::Boost {
                boost: boost.to_string(),
                location: location.to_string(),
            }),
            ["turn"] => Ok(ScriptCommand::Turn),
            _ => Err(ParseError::InvalidCommand(s.trim().to_string())),
        }
    }
}

impl fmt::Display for ScriptCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScriptCommand::Deploy { ant_type, location } => write!(f, "deploy {ant_type} {location}"),
            ScriptCommand::Remove { location } => write!(f, "remove {location}"),
            ScriptCommand::Boost { boost, location } => write!(f, "boost {boost} {location}"),
            ScriptCommand::Turn => f.write_str("turn"),
        }
    }
}

impl ScriptCommand {
    /// Run a player command against the game; `Turn` is left to the caller
    pub fn apply(&self, game: &mut AntGame) -> std::result::Result<(), CommandError> {
        match self {
            ScriptCommand::Deploy { ant_type, location } => game.deploy_ant(ant_type, location),
            ScriptCommand::Remove { location } => game.remove_ant(location),
            ScriptCommand::Boost { boost, location } => game.boost_ant(boost, location),
            ScriptCommand::Turn => Ok(()),
        }
    }
}

/// Parse a script from a file path
pub fn read_script(path: &str) -> Result<Vec<ScriptCommand>> {
    let src = fs::read_to_string(path)?;
    parse_script(&src)
}

/// Parse a script held in memory; blank lines and `#` comments are skipped
pub fn parse_script(src: &str) -> Result<Vec<ScriptCommand>> {
    src.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::parse)
        .collect()
}
