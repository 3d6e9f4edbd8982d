#![warn(missing_docs)]

//! wran-core: foundational types shared by every layer.
//!
//! This crate provides the minimal set of utilities the MAC crates build on:
//! - Protocol constants (reserved CID values, default partition sizes)
//! - Configuration types
//! - Error handling
//! - Station addressing
//! - Simulated time
//!
//! Protocol value types live in `wran-protocol`, the per-station records in
//! `wran-station` and the base-station registry in `wran-bs`.

/// Protocol constants shared across layers.
pub mod constants {
    /// CID of the initial ranging connection.
    pub const INITIAL_RANGING_CID: u16 = 0x0000;
    /// CID addressing every station in the cell.
    pub const BROADCAST_CID: u16 = 0xFFFF;
    /// CID used for padding bursts.
    pub const PADDING_CID: u16 = 0xFFFE;
    /// First CID of the multicast range.
    pub const MULTICAST_CID_FIRST: u16 = 0xFF00;
    /// Last CID of the multicast range (inclusive).
    pub const MULTICAST_CID_LAST: u16 = 0xFFFD;
    /// Last CID usable for transport and secondary management connections.
    pub const TRANSPORT_CID_LAST: u16 = 0xFEFF;
    /// Value held by a CID that has not been assigned yet.
    ///
    /// 0 would match the initial ranging CID and 0xFFFF the broadcast CID, so the
    /// sentinel sits inside the ordinary unicast range.
    pub const CID_UNINITIALIZED: u16 = 60000;
    /// Default size `m` of the basic and primary CID ranges.
    ///
    /// Basic CIDs occupy `1..=m`, primary CIDs `m+1..=2m`.
    pub const DEFAULT_CID_M: u16 = 0x5500;
}

/// Configuration options for the base-station MAC.
pub mod config;
/// Error types and results.
pub mod error;
/// Hardware addressing of subscriber stations.
pub mod mac_address;
/// Simulated time source.
pub mod time;

pub use mac_address::MacAddress;
