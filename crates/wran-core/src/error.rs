//! Error types shared by the registry and allocation layers.
//!
//! The bookkeeping records never fail; only the components that enforce
//! base-station wide rules (CID allocation, the station registry, code
//! conversions) report errors.

use std::result;

use crate::mac_address::MacAddress;

/// Convenience alias used across the workspace.
pub type Result<T> = result::Result<T, ErrorKind>;

/// Enum with all possible errors that could occur in the MAC bookkeeping layer.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ErrorKind {
    /// Every CID of the named category has already been handed out.
    #[error("no {0} CID left to allocate")]
    CidSpaceExhausted(&'static str),
    /// The configuration cannot be used as given.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    /// A record for this station already exists.
    #[error("station {0} is already known")]
    DuplicateStation(MacAddress),
    /// No record exists for this station.
    #[error("station {0} is not known")]
    UnknownStation(MacAddress),
    /// No station owns a connection with this CID.
    #[error("no connection with CID {0}")]
    UnknownConnection(u16),
    /// The registry already holds the configured maximum of stations.
    #[error("station limit of {0} reached")]
    StationLimitReached(usize),
    /// Byte is not a known ranging status code.
    #[error("invalid ranging status code {0}")]
    InvalidRangingStatus(u8),
    /// Byte is not a known modulation type code.
    #[error("invalid modulation type code {0}")]
    InvalidModulationType(u8),
}
