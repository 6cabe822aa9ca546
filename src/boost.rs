use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Named enhancement delivered to a single ant
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Boost {
    /// Extends a thrower's range
    FlyingLeaf,
    /// Next hit leaves the bee stuck for a turn
    StickyLeaf,
    /// Next hit leaves the bee too cold to sting
    IcyLeaf,
    /// Thrower sprays its own place, itself included
    BugSpray,
    /// Granted name with no built-in effect
    Other(String),
}

impl Boost {
    /// Boosts a colony starts with, paired with their initial count
    pub const STARTING: [(Boost, u32); 4] = [
        (Boost::FlyingLeaf, 1),
        (Boost::StickyLeaf, 1),
        (Boost::IcyLeaf, 1),
        (Boost::BugSpray, 0),
    ];

    /// Inventory key for this boost
    pub fn as_str(&self) -> &str {
        match self {
            Boost::FlyingLeaf => "FlyingLeaf",
            Boost::StickyLeaf => "StickyLeaf",
            Boost::IcyLeaf => "IcyLeaf",
            Boost::BugSpray => "BugSpray",
            Boost::Other(name) => name,
        }
    }
}

impl From<&str> for Boost {
    fn from(name: &str) -> Self {
        match name {
            "FlyingLeaf" => Boost::FlyingLeaf,
            "StickyLeaf" => Boost::StickyLeaf,
            "IcyLeaf" => Boost::IcyLeaf,
            "BugSpray" => Boost::BugSpray,
            other => Boost::Other(other.to_string()),
        }
    }
}

impl FromStr for Boost {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Boost::from(s))
    }
}

impl fmt::Display for Boost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether applying a boost spends one from the inventory
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BoostPolicy {
    #[default]
    Consume,
    Retain,
}
