use crate::boost::Boost;
use crate::error::CommandError;
use crate::world::place::PlaceId;
use std::fmt;
use std::str::FromStr;

/// Handle to an insect owned by the `World` arena
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct InsectId(pub u32);

/// Closed set of ant variants that can be deployed
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AntKind {
    Grower,
    Thrower,
    Eater,
    Scuba,
    Guard,
}

impl FromStr for AntKind {
    type Err = CommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "grower" => Ok(AntKind::Grower),
            "thrower" => Ok(AntKind::Thrower),
            "eater" => Ok(AntKind::Eater),
            "scuba" => Ok(AntKind::Scuba),
            "guard" => Ok(AntKind::Guard),
            _ => Err(CommandError::UnknownAntType(s.to_string())),
        }
    }
}

impl AntKind {
    pub const ALL: [AntKind; 5] = [
        AntKind::Grower,
        AntKind::Thrower,
        AntKind::Eater,
        AntKind::Scuba,
        AntKind::Guard,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            AntKind::Grower => "Grower",
            AntKind::Thrower => "Thrower",
            AntKind::Eater => "Eater",
            AntKind::Scuba => "Scuba",
            AntKind::Guard => "Guard",
        }
    }

    pub const fn food_cost(self) -> u32 {
        match self {
            AntKind::Grower => 1,
            AntKind::Thrower | AntKind::Eater | AntKind::Guard => 4,
            AntKind::Scuba => 5,
        }
    }

    pub const fn armor(self) -> u32 {
        match self {
            AntKind::Eater | AntKind::Guard => 2,
            _ => 1,
        }
    }

    pub const fn damage(self) -> u32 {
        match self {
            AntKind::Thrower | AntKind::Scuba => 1,
            _ => 0,
        }
    }

    /// Occupies the guard slot rather than the normal one
    #[inline]
    pub const fn is_guard(self) -> bool {
        matches!(self, AntKind::Guard)
    }

    /// Survives on water places
    #[inline]
    pub const fn is_aquatic(self) -> bool {
        matches!(self, AntKind::Scuba)
    }

    /// Attacks the closest bee with leaves
    #[inline]
    pub const fn throws(self) -> bool {
        matches!(self, AntKind::Thrower | AntKind::Scuba)
    }
}

/// Temporary effect left on a bee by a boosted leaf; lasts one bee action
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BeeStatus {
    /// Cannot advance
    Stuck,
    /// Cannot sting
    Cold,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AntState {
    pub kind: AntKind,
    pub boost: Option<Boost>,
    /// Bee being digested by an eater
    pub meal: Option<InsectId>,
    pub turns_eating: u32,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BeeState {
    /// Hive the bee was manufactured in
    pub origin: PlaceId,
    pub status: Option<BeeStatus>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Role {
    Ant(AntState),
    Bee(BeeState),
}

/// An ant or a bee. The place back-reference is written only by `World`.
#[derive(Clone, Debug)]
pub struct Insect {
    pub id: InsectId,
    pub armor: u32,
    pub damage: u32,
    pub role: Role,
    pub(super) place: Option<PlaceId>,
}

impl Insect {
    pub fn ant(id: InsectId, kind: AntKind) -> Self {
        Self {
            id,
            armor: kind.armor(),
            damage: kind.damage(),
            role: Role::Ant(AntState {
                kind,
                boost: None,
                meal: None,
                turns_eating: 0,
            }),
            place: None,
        }
    }

    pub fn bee(id: InsectId, armor: u32, damage: u32, origin: PlaceId) -> Self {
        Self {
            id,
            armor,
            damage,
            role: Role::Bee(BeeState { origin, status: None }),
            place: None,
        }
    }

    /// Place currently holding this insect
    #[inline]
    pub fn place(&self) -> Option<PlaceId> {
        self.place
    }

    #[inline]
    pub fn is_ant(&self) -> bool {
        matches!(self.role, Role::Ant(_))
    }

    #[inline]
    pub fn is_bee(&self) -> bool {
        matches!(self.role, Role::Bee(_))
    }

    pub fn ant_kind(&self) -> Option<AntKind> {
        match &self.role {
            Role::Ant(state) => Some(state.kind),
            Role::Bee(_) => None,
        }
    }

    #[inline]
    pub fn is_guard(&self) -> bool {
        self.ant_kind().is_some_and(AntKind::is_guard)
    }

    #[inline]
    pub fn is_aquatic(&self) -> bool {
        self.ant_kind().is_some_and(AntKind::is_aquatic)
    }

    /// Cost to deploy; bees cost nothing
    pub fn food_cost(&self) -> u32 {
        self.ant_kind().map_or(0, AntKind::food_cost)
    }

    pub fn ant_state(&self) -> Option<&AntState> {
        match &self.role {
            Role::Ant(state) => Some(state),
            Role::Bee(_) => None,
        }
    }

    pub fn ant_state_mut(&mut self) -> Option<&mut AntState> {
        match &mut self.role {
            Role::Ant(state) => Some(state),
            Role::Bee(_) => None,
        }
    }

    pub fn bee_state_mut(&mut self) -> Option<&mut BeeState> {
        match &mut self.role {
            Role::Bee(state) => Some(state),
            Role::Ant(_) => None,
        }
    }

    pub fn boost(&self) -> Option<&Boost> {
        self.ant_state().and_then(|state| state.boost.as_ref())
    }

    /// Hand a boost to an ant; ignored for bees
    pub fn set_boost(&mut self, boost: Boost) {
        if let Some(state) = self.ant_state_mut() {
            state.boost = Some(boost);
        }
    }

    pub fn status(&self) -> Option<BeeStatus> {
        match &self.role {
            Role::Bee(state) => state.status,
            Role::Ant(_) => None,
        }
    }

    pub fn set_status(&mut self, status: Option<BeeStatus>) {
        if let Some(state) = self.bee_state_mut() {
            state.status = status;
        }
    }

    pub fn name(&self) -> &'static str {
        self.ant_kind().map_or("Bee", AntKind::as_str)
    }
}

impl fmt::Display for Insect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}#{}({})", self.name(), self.id.0, self.armor)
    }
}
