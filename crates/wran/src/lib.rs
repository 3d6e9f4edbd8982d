#![warn(missing_docs)]

//! Wran: a small public API facade for the workspace.
//!
//! This crate re-exports the types a base-station MAC needs to keep the
//! books on its subscriber stations:
//!
//! - Registry and bandwidth accounting (`SsManager`, `BandwidthManager`)
//! - Station and flow records (`SsRecord`, `ServiceFlow`, `ServiceFlowRecord`)
//! - Connection identifiers (`Cid`, `CidFactory`)
//!
//! Example
//! ```
//! use wran::prelude::*;
//!
//! let mut manager = SsManager::new(Config::default()).unwrap();
//! let mut bandwidth = BandwidthManager::new(manager.config());
//!
//! let mac = MacAddress::new([0x02, 0, 0, 0, 0, 1]);
//! manager.create_record(mac).unwrap();
//! manager.allocate_management_connections(&mac).unwrap();
//!
//! let cid = manager.allocate_transport_cid().unwrap();
//! manager
//!     .record_mut(&mac)
//!     .unwrap()
//!     .add_service_flow(ServiceFlow::new(1, Direction::Uplink, SchedulingType::Be).with_cid(cid));
//!
//! let request = BandwidthRequest::incremental(cid, 256);
//! bandwidth.process_bandwidth_request(&mut manager, &request).unwrap();
//! assert_eq!(manager.mac_address(cid), Some(mac));
//! ```

// Base station: registry, bandwidth accounting and events
pub use wran_bs::{
    BandwidthManager, ChannelObserver, MacEvent, MacObserver, NoOpObserver, SsManager,
};
// Core config, errors and addresses
pub use wran_core::{
    config::Config,
    error::{ErrorKind, Result},
    time::{Clock, SimClock, SystemClock},
    MacAddress,
};
// Protocol: identifiers and value types
pub use wran_protocol::{
    BandwidthRequest, Cid, CidFactory, CidType, Direction, DsaResponse, FlowFilter,
    ModulationType, RangingStatus, RequestKind, SchedulingType,
};
// Station: per-station and per-flow records
pub use wran_station::{QosParameters, ServiceFlow, ServiceFlowRecord, SsRecord};

/// Convenience prelude with the most commonly used items.
pub mod prelude {
    pub use crate::{
        BandwidthManager, BandwidthRequest, Cid, Config, Direction, FlowFilter, MacAddress,
        MacEvent, RangingStatus, SchedulingType, ServiceFlow, SsManager, SsRecord,
    };
}
