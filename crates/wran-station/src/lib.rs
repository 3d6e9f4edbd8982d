#![warn(missing_docs)]

//! wran-station: per-station and per-flow MAC bookkeeping records.

/// Admitted service flows and their QoS parameters.
pub mod service_flow;
/// Grant, usage and backlog accounting of a service flow.
pub mod service_flow_record;
/// Session state of a subscriber station.
pub mod ss_record;

pub use service_flow::{QosParameters, ServiceFlow};
pub use service_flow_record::ServiceFlowRecord;
pub use ss_record::SsRecord;
