use std::fmt;

use tracing::{debug, warn};
use wran_core::{
    config::Config,
    error::{ErrorKind, Result},
    MacAddress,
};
use wran_protocol::{Cid, CidFactory, CidType};
use wran_station::SsRecord;

use crate::{
    event_types::MacEvent,
    observer::{MacObserver, NoOpObserver},
};

/// Registry of the subscriber stations known to one base station.
///
/// Owns every [`SsRecord`] (in creation order) and the CID factory, so the
/// basic and primary CIDs it assigns are unique across its stations.
pub struct SsManager {
    config: Config,
    records: Vec<SsRecord>,
    cid_factory: CidFactory,
    observer: Box<dyn MacObserver>,
}

impl fmt::Debug for SsManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SsManager")
            .field("config", &self.config)
            .field("records", &self.records)
            .field("cid_factory", &self.cid_factory)
            .field("observer", &"<observer>")
            .finish()
    }
}

impl SsManager {
    /// Creates an empty registry.
    pub fn new(config: Config) -> Result<Self> {
        Self::new_with_observer(config, None)
    }

    /// Creates an empty registry reporting to a custom observer.
    pub fn new_with_observer(
        config: Config,
        observer: Option<Box<dyn MacObserver>>,
    ) -> Result<Self> {
        let cid_factory = CidFactory::from_config(&config)?;
        let observer = observer.unwrap_or_else(|| Box::new(NoOpObserver));

        Ok(SsManager { config, records: Vec::new(), cid_factory, observer })
    }

    /// Returns the configuration the registry was created with.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Returns the CID factory of the base station.
    pub fn cid_factory(&self) -> &CidFactory {
        &self.cid_factory
    }

    /// Creates the record of a newly observed station.
    pub fn create_record(&mut self, mac_address: MacAddress) -> Result<&mut SsRecord> {
        if self.is_in_record(&mac_address) {
            return Err(ErrorKind::DuplicateStation(mac_address));
        }
        if self.config.max_stations != 0 && self.records.len() >= self.config.max_stations {
            warn!(
                "Refusing station {}: limit of {} reached",
                mac_address, self.config.max_stations
            );
            return Err(ErrorKind::StationLimitReached(self.config.max_stations));
        }

        debug!("Creating record for station {}", mac_address);
        self.emit(MacEvent::StationCreated(mac_address));

        let index = self.records.len();
        self.records.push(SsRecord::new(mac_address));
        Ok(&mut self.records[index])
    }

    /// Returns the record of a station by hardware address.
    pub fn record(&self, mac_address: &MacAddress) -> Option<&SsRecord> {
        self.records.iter().find(|r| r.mac_address() == *mac_address)
    }

    /// Returns the record of a station by hardware address for modification.
    pub fn record_mut(&mut self, mac_address: &MacAddress) -> Option<&mut SsRecord> {
        self.records.iter_mut().find(|r| r.mac_address() == *mac_address)
    }

    /// Returns the record of the station owning `cid` (basic, primary or transport).
    pub fn record_by_cid(&self, cid: Cid) -> Option<&SsRecord> {
        self.records.iter().find(|r| r.owns_cid(cid))
    }

    /// Returns the record of the station owning `cid` for modification.
    pub fn record_by_cid_mut(&mut self, cid: Cid) -> Option<&mut SsRecord> {
        self.records.iter_mut().find(|r| r.owns_cid(cid))
    }

    /// Returns every record in creation order.
    pub fn records(&self) -> &[SsRecord] {
        &self.records
    }

    /// Returns every record in creation order for modification.
    pub fn records_mut(&mut self) -> impl Iterator<Item = &mut SsRecord> {
        self.records.iter_mut()
    }

    /// Returns true if a record exists for the station.
    pub fn is_in_record(&self, mac_address: &MacAddress) -> bool {
        self.record(mac_address).is_some()
    }

    /// Returns true if the station is known and its ranging succeeded.
    pub fn is_registered(&self, mac_address: &MacAddress) -> bool {
        self.record(mac_address).is_some_and(|r| r.is_registered())
    }

    /// Returns the hardware address of the station owning `cid`.
    pub fn mac_address(&self, cid: Cid) -> Option<MacAddress> {
        self.record_by_cid(cid).map(|r| r.mac_address())
    }

    /// Returns the number of known stations.
    pub fn ss_count(&self) -> usize {
        self.records.len()
    }

    /// Returns the number of stations whose ranging succeeded.
    pub fn registered_ss_count(&self) -> usize {
        self.records.iter().filter(|r| r.is_registered()).count()
    }

    /// Assigns basic and primary CIDs to a station.
    ///
    /// Only the CIDs the station does not hold yet are allocated, and nothing
    /// is allocated unless every missing one can be.
    pub fn allocate_management_connections(
        &mut self,
        mac_address: &MacAddress,
    ) -> Result<(Cid, Cid)> {
        let index = self
            .records
            .iter()
            .position(|r| r.mac_address() == *mac_address)
            .ok_or(ErrorKind::UnknownStation(*mac_address))?;

        let record = &self.records[index];
        let (basic, primary) = (record.basic_cid(), record.primary_cid());
        if basic.is_initialized() && primary.is_initialized() {
            return Ok((basic, primary));
        }

        for (cid, cid_type) in [(basic, CidType::Basic), (primary, CidType::Primary)] {
            if !cid.is_initialized() && self.cid_factory.remaining(cid_type) == 0 {
                warn!(
                    "Cannot assign management CIDs to {}: {} range used up",
                    mac_address,
                    cid_type.as_str()
                );
                return Err(ErrorKind::CidSpaceExhausted(cid_type.as_str()));
            }
        }

        let basic = if basic.is_initialized() { basic } else { self.cid_factory.allocate_basic()? };
        let primary =
            if primary.is_initialized() { primary } else { self.cid_factory.allocate_primary()? };

        let record = &mut self.records[index];
        record.set_basic_cid(basic);
        record.set_primary_cid(primary);

        debug!("Station {} assigned basic CID {} and primary CID {}", mac_address, basic, primary);
        self.emit(MacEvent::ManagementCidsAssigned { mac_address: *mac_address, basic, primary });
        Ok((basic, primary))
    }

    /// Allocates a CID for a new transport connection.
    pub fn allocate_transport_cid(&mut self) -> Result<Cid> {
        let cid = self.cid_factory.allocate_transport_or_secondary()?;
        self.emit(MacEvent::TransportCidAllocated(cid));
        Ok(cid)
    }

    /// Removes the station owning `cid` and returns its record.
    ///
    /// Dropping the returned record drops all of its service flows.
    pub fn delete_record(&mut self, cid: Cid) -> Option<SsRecord> {
        let index = self.records.iter().position(|r| r.owns_cid(cid))?;
        Some(self.remove_at(index))
    }

    /// Removes a station by hardware address and returns its record.
    pub fn delete_record_by_mac(&mut self, mac_address: &MacAddress) -> Option<SsRecord> {
        let index = self.records.iter().position(|r| r.mac_address() == *mac_address)?;
        Some(self.remove_at(index))
    }

    /// Returns a copy of every record for passes that aggregate across stations.
    pub fn snapshot(&self) -> Vec<SsRecord> {
        self.records.clone()
    }

    pub(crate) fn emit(&mut self, event: MacEvent) {
        self.observer.on_event(&event);
    }

    fn remove_at(&mut self, index: usize) -> SsRecord {
        let record = self.records.remove(index);
        debug!(
            "Removing station {} with {} service flow(s)",
            record.mac_address(),
            record.service_flow_count()
        );
        self.emit(MacEvent::StationRemoved(record.mac_address()));
        record
    }
}

#[cfg(test)]
mod tests {
    use wran_protocol::{Direction, RangingStatus, SchedulingType};
    use wran_station::ServiceFlow;

    use super::*;

    fn mac(last: u8) -> MacAddress {
        MacAddress::new([0x02, 0, 0, 0, 0, last])
    }

    fn manager() -> SsManager {
        SsManager::new(Config::default()).unwrap()
    }

    fn flow(sfid: u32, scheduling_type: SchedulingType) -> ServiceFlow {
        ServiceFlow::new(sfid, Direction::Uplink, scheduling_type)
    }

    #[test]
    fn test_create_and_lookup() {
        let mut manager = manager();
        manager.create_record(mac(1)).unwrap();
        manager.create_record(mac(2)).unwrap();

        assert_eq!(manager.ss_count(), 2);
        assert!(manager.is_in_record(&mac(1)));
        assert!(!manager.is_in_record(&mac(3)));
        let order: Vec<MacAddress> = manager.records().iter().map(|r| r.mac_address()).collect();
        assert_eq!(order, vec![mac(1), mac(2)]);
    }

    #[test]
    fn test_duplicate_station_rejected() {
        let mut manager = manager();
        manager.create_record(mac(1)).unwrap();
        assert_eq!(
            manager.create_record(mac(1)).unwrap_err(),
            ErrorKind::DuplicateStation(mac(1))
        );
        assert_eq!(manager.ss_count(), 1);
    }

    #[test]
    fn test_station_limit() {
        let config = Config { max_stations: 1, ..Config::default() };
        let mut manager = SsManager::new(config).unwrap();
        manager.create_record(mac(1)).unwrap();
        assert_eq!(
            manager.create_record(mac(2)).unwrap_err(),
            ErrorKind::StationLimitReached(1)
        );
    }

    #[test]
    fn test_invalid_partition_rejected() {
        let config = Config { cid_m: 0, ..Config::default() };
        assert!(matches!(SsManager::new(config), Err(ErrorKind::InvalidConfig(_))));
    }

    #[test]
    fn test_management_cids_are_unique() {
        let mut manager = manager();
        for i in 1..=3 {
            manager.create_record(mac(i)).unwrap();
        }
        let mut seen = Vec::new();
        for i in 1..=3 {
            let (basic, primary) = manager.allocate_management_connections(&mac(i)).unwrap();
            assert!(manager.cid_factory().is_basic(basic));
            assert!(manager.cid_factory().is_primary(primary));
            seen.push(basic);
            seen.push(primary);
        }
        let mut deduped = seen.clone();
        deduped.sort();
        deduped.dedup();
        assert_eq!(deduped.len(), seen.len());
    }

    #[test]
    fn test_management_cids_are_kept() {
        let mut manager = manager();
        manager.create_record(mac(1)).unwrap();
        let first = manager.allocate_management_connections(&mac(1)).unwrap();
        let second = manager.allocate_management_connections(&mac(1)).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_management_cids_for_unknown_station() {
        let mut manager = manager();
        assert_eq!(
            manager.allocate_management_connections(&mac(9)).unwrap_err(),
            ErrorKind::UnknownStation(mac(9))
        );
    }

    #[test]
    fn test_only_missing_management_cid_is_allocated() {
        let mut manager = manager();
        manager.create_record(mac(1)).unwrap().set_basic_cid(Cid::new(40));
        let basic_left = manager.cid_factory().remaining(CidType::Basic);

        let (basic, primary) = manager.allocate_management_connections(&mac(1)).unwrap();

        assert_eq!(basic, Cid::new(40));
        assert!(manager.cid_factory().is_primary(primary));
        assert_eq!(manager.cid_factory().remaining(CidType::Basic), basic_left);
    }

    #[test]
    fn test_exhausted_primary_range_keeps_basic_cids() {
        let config = Config { cid_m: 1, ..Config::default() };
        let mut manager = SsManager::new(config).unwrap();
        manager.create_record(mac(1)).unwrap().set_basic_cid(Cid::new(1));
        manager.create_record(mac(2)).unwrap();

        // mac(1) takes the only primary CID
        manager.allocate_management_connections(&mac(1)).unwrap();
        assert_eq!(
            manager.allocate_management_connections(&mac(2)).unwrap_err(),
            ErrorKind::CidSpaceExhausted("primary")
        );

        assert_eq!(manager.cid_factory().remaining(CidType::Basic), 1);
        let record = manager.record(&mac(2)).unwrap();
        assert!(!record.basic_cid().is_initialized());
        assert!(!record.primary_cid().is_initialized());
    }

    #[test]
    fn test_lookup_by_cid() {
        let mut manager = manager();
        manager.create_record(mac(1)).unwrap();
        manager.create_record(mac(2)).unwrap();
        let (basic, primary) = manager.allocate_management_connections(&mac(2)).unwrap();
        let transport = manager.allocate_transport_cid().unwrap();
        manager
            .record_mut(&mac(1))
            .unwrap()
            .add_service_flow(flow(1, SchedulingType::Be).with_cid(transport));

        assert_eq!(manager.mac_address(basic), Some(mac(2)));
        assert_eq!(manager.mac_address(primary), Some(mac(2)));
        assert_eq!(manager.mac_address(transport), Some(mac(1)));
        assert_eq!(manager.mac_address(Cid::new(1234)), None);
    }

    #[test]
    fn test_registered_count() {
        let mut manager = manager();
        manager.create_record(mac(1)).unwrap().set_ranging_status(RangingStatus::Success);
        manager.create_record(mac(2)).unwrap().set_ranging_status(RangingStatus::Continue);

        assert_eq!(manager.registered_ss_count(), 1);
        assert!(manager.is_registered(&mac(1)));
        assert!(!manager.is_registered(&mac(2)));
        assert!(!manager.is_registered(&mac(3)));
    }

    #[test]
    fn test_delete_record_by_cid() {
        let mut manager = manager();
        manager.create_record(mac(1)).unwrap();
        manager.create_record(mac(2)).unwrap();
        let (basic, _) = manager.allocate_management_connections(&mac(1)).unwrap();

        let removed = manager.delete_record(basic).unwrap();
        assert_eq!(removed.mac_address(), mac(1));
        assert_eq!(manager.ss_count(), 1);
        assert!(manager.delete_record(basic).is_none());
        assert!(manager.delete_record_by_mac(&mac(2)).is_some());
        assert_eq!(manager.ss_count(), 0);
    }

    #[test]
    fn test_unassigned_cid_matches_no_station() {
        let mut manager = manager();
        manager.create_record(mac(1)).unwrap();
        manager.create_record(mac(2)).unwrap();

        assert!(manager.record_by_cid(Cid::default()).is_none());
        assert!(manager.record_by_cid_mut(Cid::default()).is_none());
        assert_eq!(manager.mac_address(Cid::default()), None);
        assert!(manager.delete_record(Cid::default()).is_none());
        assert_eq!(manager.ss_count(), 2);
    }

    #[test]
    fn test_snapshot_is_detached() {
        let mut manager = manager();
        manager.create_record(mac(1)).unwrap();
        let snapshot = manager.snapshot();

        manager.record_mut(&mac(1)).unwrap().set_poll_me_bit(true);

        assert!(!snapshot[0].poll_me_bit());
        assert!(manager.record(&mac(1)).unwrap().poll_me_bit());
    }
}
