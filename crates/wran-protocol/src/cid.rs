//! Connection identifiers.
//!
//! A CID is a 16-bit value addressing one logical connection between the base
//! station and a subscriber station. A handful of values are reserved:
//!
//! | value              | meaning          |
//! |--------------------|------------------|
//! | `0x0000`           | initial ranging  |
//! | `0xFF00..=0xFFFD`  | multicast        |
//! | `0xFFFE`           | padding          |
//! | `0xFFFF`           | broadcast        |
//!
//! Every other value is an ordinary unicast CID.

use std::fmt;

use wran_core::constants::{
    BROADCAST_CID, CID_UNINITIALIZED, INITIAL_RANGING_CID, MULTICAST_CID_FIRST,
    MULTICAST_CID_LAST, PADDING_CID,
};

/// Category of a connection, as partitioned by the CID space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CidType {
    /// The broadcast connection.
    Broadcast,
    /// The initial ranging connection.
    InitialRanging,
    /// Per-station basic management connection.
    Basic,
    /// Per-station primary management connection.
    Primary,
    /// Transport or secondary management connection.
    Transport,
    /// Multicast polling connection.
    Multicast,
    /// Padding.
    Padding,
}

impl CidType {
    /// Returns a lowercase name for logs and errors.
    pub fn as_str(&self) -> &'static str {
        match self {
            CidType::Broadcast => "broadcast",
            CidType::InitialRanging => "initial ranging",
            CidType::Basic => "basic",
            CidType::Primary => "primary",
            CidType::Transport => "transport",
            CidType::Multicast => "multicast",
            CidType::Padding => "padding",
        }
    }
}

/// A 16-bit connection identifier.
///
/// Equality and hashing only consider the numeric value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cid(u16);

impl Cid {
    /// Creates a CID from its raw value.
    pub const fn new(identifier: u16) -> Self {
        Self(identifier)
    }

    /// Returns the raw value.
    pub const fn identifier(&self) -> u16 {
        self.0
    }

    /// The broadcast CID.
    pub const fn broadcast() -> Self {
        Self(BROADCAST_CID)
    }

    /// The padding CID.
    pub const fn padding() -> Self {
        Self(PADDING_CID)
    }

    /// The initial ranging CID.
    pub const fn initial_ranging() -> Self {
        Self(INITIAL_RANGING_CID)
    }

    /// Returns true for values in `0xFF00..=0xFFFD`.
    pub fn is_multicast(&self) -> bool {
        (MULTICAST_CID_FIRST..=MULTICAST_CID_LAST).contains(&self.0)
    }

    /// Returns true for the broadcast CID.
    pub fn is_broadcast(&self) -> bool {
        *self == Self::broadcast()
    }

    /// Returns true for the padding CID.
    pub fn is_padding(&self) -> bool {
        *self == Self::padding()
    }

    /// Returns true for the initial ranging CID.
    pub fn is_initial_ranging(&self) -> bool {
        *self == Self::initial_ranging()
    }

    /// Returns true for values outside every reserved range.
    pub fn is_unicast(&self) -> bool {
        !(self.is_multicast()
            || self.is_broadcast()
            || self.is_padding()
            || self.is_initial_ranging())
    }

    /// Returns false while the CID still holds the "not assigned" sentinel.
    pub fn is_initialized(&self) -> bool {
        self.0 != CID_UNINITIALIZED
    }
}

impl Default for Cid {
    /// Returns the "not assigned" sentinel.
    fn default() -> Self {
        Self(CID_UNINITIALIZED)
    }
}

impl From<u16> for Cid {
    fn from(identifier: u16) -> Self {
        Self(identifier)
    }
}

impl From<Cid> for u16 {
    fn from(cid: Cid) -> Self {
        cid.0
    }
}

impl fmt::Display for Cid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
