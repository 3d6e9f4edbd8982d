#![warn(missing_docs)]

//! wran-protocol: connection identifiers and protocol value types.

/// Bandwidth request values received from subscriber stations.
pub mod bandwidth_request;
/// Connection identifiers and their reserved ranges.
pub mod cid;
/// Per-base-station CID allocation.
pub mod cid_factory;
/// Dynamic service addition bookkeeping values.
pub mod dsa;
/// PHY modulation classification.
pub mod modulation;
/// Ranging status reported in RNG-RSP.
pub mod ranging;
/// QoS scheduling classes and flow direction.
pub mod scheduling;

pub use bandwidth_request::{BandwidthRequest, RequestKind};
pub use cid::{Cid, CidType};
pub use cid_factory::CidFactory;
pub use dsa::DsaResponse;
pub use modulation::ModulationType;
pub use ranging::RangingStatus;
pub use scheduling::{Direction, FlowFilter, SchedulingType};
