//! Structured events emitted by the base-station bookkeeping layer.
//!
//! Records never log or signal anything themselves; the registry and the
//! bandwidth manager describe what they did with a `MacEvent` and hand it to
//! the configured observer.

use std::time::Duration;

use wran_core::MacAddress;
use wran_protocol::{Cid, RequestKind};

/// Events that can occur while stations and their flows are managed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MacEvent {
    /// A record was created for a newly observed station.
    StationCreated(MacAddress),
    /// A station record and all its flows were removed.
    StationRemoved(MacAddress),
    /// Basic and primary CIDs were assigned to a station.
    ManagementCidsAssigned {
        /// Station the CIDs belong to.
        mac_address: MacAddress,
        /// Basic management CID.
        basic: Cid,
        /// Primary management CID.
        primary: Cid,
    },
    /// A transport CID was handed out.
    TransportCidAllocated(Cid),
    /// A bandwidth request was applied to a flow.
    BandwidthRequested {
        /// Connection of the flow.
        cid: Cid,
        /// Incremental or aggregate.
        kind: RequestKind,
        /// Requested bytes.
        bytes: u32,
        /// Simulated time of the request.
        at: Duration,
    },
    /// Flow `sfid` was granted `bytes` bytes at time `at`.
    FlowGranted {
        /// Service flow identifier.
        sfid: u32,
        /// Connection of the flow.
        cid: Cid,
        /// Granted bytes.
        bytes: u32,
        /// Simulated time of the grant.
        at: Duration,
    },
}
