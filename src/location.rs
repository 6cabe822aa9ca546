use crate::error::CommandError;
use std::fmt;
use std::str::FromStr;

/// `"tunnel,step"` address of a tunnel cell
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Location {
    pub tunnel: usize,
    pub step: usize,
}

impl Location {
    pub const fn new(tunnel: usize, step: usize) -> Self {
        Self { tunnel, step }
    }
}

impl FromStr for Location {
    type Err = CommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (tunnel, step) = s.split_once(',').ok_or(CommandError::IllegalLocation)?;
        let parse = |part: &str| part.trim().parse::<usize>().map_err(|_| CommandError::IllegalLocation);
        Ok(Self::new(parse(tunnel)?, parse(step)?))
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.tunnel, self.step)
    }
}
