use std::{fmt, sync::Arc};

use tracing::{trace, warn};
use wran_core::{
    config::Config,
    error::{ErrorKind, Result},
    time::{Clock, SystemClock},
};
use wran_protocol::{BandwidthRequest, Cid, FlowFilter, RequestKind};
use wran_station::ServiceFlow;

use crate::{event_types::MacEvent, ss_manager::SsManager};

/// Applies bandwidth requests and grants to the flow records of a base station.
///
/// The manager only keeps the books. Which flow gets how much of a frame is
/// decided by the uplink scheduler, which reports its decisions back through
/// [`BandwidthManager::record_grant`]. Requests and grants are stamped with
/// the manager's [`Clock`].
#[derive(Clone)]
pub struct BandwidthManager {
    /// Size in symbols of one bandwidth request opportunity
    bw_req_opp_size: u8,
    /// Requests applied so far
    requests_processed: u64,
    /// Grants recorded so far
    grants_recorded: u64,
    clock: Arc<dyn Clock>,
}

impl fmt::Debug for BandwidthManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BandwidthManager")
            .field("bw_req_opp_size", &self.bw_req_opp_size)
            .field("requests_processed", &self.requests_processed)
            .field("grants_recorded", &self.grants_recorded)
            .field("now", &self.clock.now())
            .finish()
    }
}

impl BandwidthManager {
    /// Creates a manager stamping events with the time elapsed since its creation.
    pub fn new(config: &Config) -> Self {
        Self::with_clock(config, Arc::new(SystemClock::default()))
    }

    /// Creates a manager driven by the given clock, usually the simulator's.
    pub fn with_clock(config: &Config, clock: Arc<dyn Clock>) -> Self {
        Self {
            bw_req_opp_size: config.bw_req_opp_size,
            requests_processed: 0,
            grants_recorded: 0,
            clock,
        }
    }

    /// Returns the size in symbols of one bandwidth request opportunity.
    pub fn bw_req_opp_size(&self) -> u8 {
        self.bw_req_opp_size
    }

    /// Returns the number of requests applied so far.
    pub fn requests_processed(&self) -> u64 {
        self.requests_processed
    }

    /// Returns the number of grants recorded so far.
    pub fn grants_recorded(&self) -> u64 {
        self.grants_recorded
    }

    /// Applies a bandwidth request to the flow carried on `request.cid`.
    ///
    /// An incremental request adds to the requested bandwidth while an
    /// aggregate one replaces it. Either way the bytes join the backlog.
    pub fn process_bandwidth_request(
        &mut self,
        manager: &mut SsManager,
        request: &BandwidthRequest,
    ) -> Result<()> {
        let now = self.clock.now();
        let flow = flow_mut(manager, request.cid)?;
        let sfid = flow.sfid();
        let record = flow.record_mut();
        match request.kind {
            RequestKind::Incremental => record.update_requested_bandwidth(request.bytes),
            RequestKind::Aggregate => record.set_requested_bandwidth(request.bytes),
        }
        record.update_backlogged(request.bytes);

        trace!(
            "Flow {} on CID {} now requests {} bytes",
            sfid,
            request.cid,
            record.requested_bandwidth()
        );

        self.requests_processed += 1;
        manager.emit(MacEvent::BandwidthRequested {
            cid: request.cid,
            kind: request.kind,
            bytes: request.bytes,
            at: now,
        });
        Ok(())
    }

    /// Records that the scheduler granted `bytes` to the flow carried on `cid`.
    ///
    /// The grant is provisional until the scheduler commits the frame.
    pub fn record_grant(&mut self, manager: &mut SsManager, cid: Cid, bytes: u32) -> Result<()> {
        let now = self.clock.now();
        let flow = flow_mut(manager, cid)?;
        let sfid = flow.sfid();
        let record = flow.record_mut();
        record.set_last_grant_time(now);
        record.set_grant_time_stamp(now);
        record.update_granted_bandwidth_temp(bytes);
        record.update_bw_since_last_expiry(bytes);

        trace!("Granted {} bytes to flow {} on CID {}", bytes, sfid, cid);

        self.grants_recorded += 1;
        manager.emit(MacEvent::FlowGranted { sfid, cid, bytes, at: now });
        Ok(())
    }

    /// Returns the sum of the grant sizes of every flow of every station.
    pub fn allocation_per_frame(&self, manager: &SsManager) -> u64 {
        manager
            .records()
            .iter()
            .flat_map(|r| r.service_flows(FlowFilter::All))
            .map(|sf| u64::from(sf.record().grant_size()))
            .sum()
    }
}

fn flow_mut(manager: &mut SsManager, cid: Cid) -> Result<&mut ServiceFlow> {
    let flow = manager.record_by_cid_mut(cid).and_then(|r| r.service_flow_by_cid_mut(cid));
    match flow {
        Some(flow) => Ok(flow),
        None => {
            warn!("No service flow on CID {}", cid);
            Err(ErrorKind::UnknownConnection(cid.identifier()))
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use wran_core::{time::SimClock, MacAddress};
    use wran_protocol::{Direction, SchedulingType};

    use super::*;

    struct Fixture {
        manager: SsManager,
        bandwidth: BandwidthManager,
        clock: Arc<SimClock>,
        cid: Cid,
    }

    fn setup() -> Fixture {
        let config = Config::default();
        let clock = Arc::new(SimClock::new());
        let mut manager = SsManager::new(config.clone()).unwrap();
        let bandwidth = BandwidthManager::with_clock(&config, clock.clone());
        let mac = MacAddress::new([0x02, 0, 0, 0, 0, 1]);
        manager.create_record(mac).unwrap();
        manager.allocate_management_connections(&mac).unwrap();
        let cid = manager.allocate_transport_cid().unwrap();
        let sf = ServiceFlow::new(7, Direction::Uplink, SchedulingType::Rtps).with_cid(cid);
        manager.record_mut(&mac).unwrap().add_service_flow(sf);
        Fixture { manager, bandwidth, clock, cid }
    }

    fn flow(manager: &SsManager, cid: Cid) -> &ServiceFlow {
        manager.record_by_cid(cid).and_then(|r| r.service_flow_by_cid(cid)).unwrap()
    }

    #[test]
    fn test_incremental_requests_accumulate() {
        let Fixture { mut manager, mut bandwidth, cid, .. } = setup();
        let first = BandwidthRequest::incremental(cid, 100);
        let second = BandwidthRequest::incremental(cid, 50);
        bandwidth.process_bandwidth_request(&mut manager, &first).unwrap();
        bandwidth.process_bandwidth_request(&mut manager, &second).unwrap();

        let record = flow(&manager, cid).record();
        assert_eq!(record.requested_bandwidth(), 150);
        assert_eq!(record.backlogged(), 150);
        assert_eq!(bandwidth.requests_processed(), 2);
    }

    #[test]
    fn test_aggregate_request_replaces() {
        let Fixture { mut manager, mut bandwidth, cid, .. } = setup();
        let incremental = BandwidthRequest::incremental(cid, 300);
        let aggregate = BandwidthRequest::aggregate(cid, 80);
        bandwidth.process_bandwidth_request(&mut manager, &incremental).unwrap();
        bandwidth.process_bandwidth_request(&mut manager, &aggregate).unwrap();

        let record = flow(&manager, cid).record();
        assert_eq!(record.requested_bandwidth(), 80);
        assert_eq!(record.backlogged(), 380);
    }

    #[test]
    fn test_request_on_unknown_connection() {
        let Fixture { mut manager, mut bandwidth, .. } = setup();
        let request = BandwidthRequest::incremental(Cid::new(0xBEEF), 1);
        let err = bandwidth.process_bandwidth_request(&mut manager, &request).unwrap_err();
        assert_eq!(err, ErrorKind::UnknownConnection(0xBEEF));
        assert_eq!(bandwidth.requests_processed(), 0);
    }

    #[test]
    fn test_request_on_management_cid_is_rejected() {
        let Fixture { mut manager, mut bandwidth, cid, .. } = setup();
        let basic = manager.record_by_cid(cid).unwrap().basic_cid();
        let request = BandwidthRequest::incremental(basic, 1);
        assert!(bandwidth.process_bandwidth_request(&mut manager, &request).is_err());
    }

    #[test]
    fn test_record_grant_uses_clock() {
        let Fixture { mut manager, mut bandwidth, clock, cid } = setup();
        clock.set(Duration::from_millis(5));
        bandwidth.record_grant(&mut manager, cid, 100).unwrap();
        clock.advance(Duration::from_millis(10));
        bandwidth.record_grant(&mut manager, cid, 50).unwrap();

        let record = flow(&manager, cid).record();
        assert_eq!(record.granted_bandwidth_temp(), 150);
        assert_eq!(record.granted_bandwidth(), 0);
        assert_eq!(record.bw_since_last_expiry(), 150);
        assert_eq!(record.last_grant_time(), Duration::from_millis(15));
        assert_eq!(record.grant_time_stamp(), Duration::from_millis(15));
        assert_eq!(bandwidth.grants_recorded(), 2);
    }

    #[test]
    fn test_allocation_per_frame() {
        let Fixture { mut manager, bandwidth, cid, .. } = setup();
        assert_eq!(bandwidth.allocation_per_frame(&manager), 0);

        let record = manager.record_by_cid_mut(cid).unwrap();
        record.service_flow_by_cid_mut(cid).unwrap().record_mut().set_grant_size(120);
        record.add_service_flow({
            let mut sf = ServiceFlow::new(8, Direction::Uplink, SchedulingType::Ugs);
            sf.record_mut().set_grant_size(30);
            sf
        });

        assert_eq!(bandwidth.allocation_per_frame(&manager), 150);
    }
}
