#![warn(missing_docs)]

//! wran-bs: base-station registry of subscriber stations and bandwidth bookkeeping.

/// Bandwidth request and grant accounting across all flows.
pub mod bandwidth_manager;
/// Events describing registry and bandwidth changes.
pub mod event_types;
/// Observation of bookkeeping events.
pub mod observer;
/// Registry of the subscriber stations of one base station.
pub mod ss_manager;

pub use bandwidth_manager::BandwidthManager;
pub use event_types::MacEvent;
pub use observer::{ChannelObserver, MacObserver, NoOpObserver};
pub use ss_manager::SsManager;
