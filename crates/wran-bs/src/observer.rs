//! Observation of bookkeeping events.
//!
//! This module provides a trait for receiving the [`MacEvent`]s produced by
//! the registry and the bandwidth manager. Useful for tracing output,
//! statistics collection and test assertions.

use crossbeam_channel::Sender;

use crate::event_types::MacEvent;

/// Trait for observing bookkeeping events.
///
/// # Examples
/// ```
/// use wran_bs::{event_types::MacEvent, observer::MacObserver};
///
/// struct PrintingObserver;
///
/// impl MacObserver for PrintingObserver {
///     fn on_event(&mut self, event: &MacEvent) {
///         println!("{:?}", event);
///     }
/// }
/// ```
pub trait MacObserver: Send {
    /// Called once for every event, in the order the events happen.
    fn on_event(&mut self, event: &MacEvent);
}

/// No-op observer that discards every event.
///
/// This is the default observer when none is specified.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpObserver;

impl MacObserver for NoOpObserver {
    fn on_event(&mut self, _event: &MacEvent) {}
}

/// Observer forwarding every event over a crossbeam channel.
#[derive(Debug, Clone)]
pub struct ChannelObserver(Sender<MacEvent>);

impl ChannelObserver {
    /// Creates an observer sending into `sender`.
    pub fn new(sender: Sender<MacEvent>) -> Self {
        Self(sender)
    }
}

impl MacObserver for ChannelObserver {
    fn on_event(&mut self, event: &MacEvent) {
        if self.0.send(event.clone()).is_err() {
            tracing::trace!("Event receiver dropped, discarding {:?}", event);
        }
    }
}

#[cfg(test)]
mod tests {
    use crossbeam_channel::unbounded;
    use wran_core::MacAddress;
    use wran_protocol::Cid;

    use super::*;

    struct CountingObserver {
        events: usize,
    }

    impl MacObserver for CountingObserver {
        fn on_event(&mut self, _event: &MacEvent) {
            self.events += 1;
        }
    }

    #[test]
    fn test_counting_observer() {
        let mut observer = CountingObserver { events: 0 };
        observer.on_event(&MacEvent::TransportCidAllocated(Cid::new(0xAA01)));
        observer.on_event(&MacEvent::StationCreated(MacAddress::default()));
        assert_eq!(observer.events, 2);
    }

    #[test]
    fn test_channel_observer_forwards_in_order() {
        let (sender, receiver) = unbounded();
        let mut observer = ChannelObserver::new(sender);

        let first = MacEvent::StationCreated(MacAddress::new([1, 2, 3, 4, 5, 6]));
        let second = MacEvent::TransportCidAllocated(Cid::new(0xAA02));
        observer.on_event(&first);
        observer.on_event(&second);

        assert_eq!(receiver.try_recv().unwrap(), first);
        assert_eq!(receiver.try_recv().unwrap(), second);
        assert!(receiver.try_recv().is_err());
    }

    #[test]
    fn test_channel_observer_survives_dropped_receiver() {
        let (sender, receiver) = unbounded();
        drop(receiver);
        let mut observer = ChannelObserver::new(sender);
        observer.on_event(&MacEvent::TransportCidAllocated(Cid::new(0xAA03)));
    }
}
