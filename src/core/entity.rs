//! Character identification.
//!
//! Every card placed into a team gets a unique `CharacterId`. IDs are
//! handed out by the roster builder in creation order and are never reused,
//! so a defeated card's ID stays dead for the rest of the session.
//!
//! ```
//! use card_brawl::core::CharacterId;
//!
//! let mut next = CharacterId::FIRST;
//! let a = next.bump();
//! let b = next.bump();
//! assert_ne!(a, b);
//! assert_eq!(a.raw() + 1, b.raw());
//! ```

use serde::{Deserialize, Serialize};

/// Unique identifier for a character card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CharacterId(pub u32);

impl CharacterId {
    /// The first ID handed out in a session.
    pub const FIRST: Self = Self(0);

    /// Create a character ID from a raw value.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Return the current ID and advance this counter to the next one.
    pub fn bump(&mut self) -> Self {
        let current = *self;
        self.0 += 1;
        current
    }
}

impl std::fmt::Display for CharacterId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Character({})", self.0)
    }
}
