use crate::world::insect::InsectId;

/// Handle to a place owned by the `World` arena
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PlaceId(pub u32);

/// Graph node: two ant slots, an ordered bee list and the tunnel links
#[derive(Clone, Debug)]
pub struct Place {
    name: String,
    water: bool,
    exit: Option<PlaceId>,      // toward the queen
    entrance: Option<PlaceId>,  // toward the hive
    pub(super) ant: Option<InsectId>,
    pub(super) guard: Option<InsectId>,
    pub(super) bees: Vec<InsectId>, // arrival order
}

impl Place {
    /// Create a place with a fixed exit and no entrance yet
    pub fn new(name: impl Into<String>, water: bool, exit: Option<PlaceId>) -> Self {
        Self {
            name: name.into(),
            water,
            exit,
            entrance: None,
            ant: None,
            guard: None,
            bees: Vec::new(),
        }
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn is_water(&self) -> bool {
        self.water
    }

    #[inline]
    pub fn exit(&self) -> Option<PlaceId> {
        self.exit
    }

    #[inline]
    pub fn entrance(&self) -> Option<PlaceId> {
        self.entrance
    }

    #[inline]
    pub fn set_entrance(&mut self, entrance: PlaceId) {
        self.entrance = Some(entrance);
    }

    /// The ant bees interact with: the guard if present, otherwise the normal ant
    #[inline]
    pub fn ant(&self) -> Option<InsectId> {
        self.guard.or(self.ant)
    }

    /// The normal ant, whether or not a guard shadows it
    #[inline]
    pub fn guarded_ant(&self) -> Option<InsectId> {
        self.ant
    }

    #[inline]
    pub fn guard(&self) -> Option<InsectId> {
        self.guard
    }

    #[inline]
    pub fn bees(&self) -> &[InsectId] {
        &self.bees
    }

    #[inline]
    pub fn has_bees(&self) -> bool {
        !self.bees.is_empty()
    }
}
