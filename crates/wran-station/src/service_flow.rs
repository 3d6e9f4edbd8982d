use wran_protocol::{Cid, Direction, ModulationType, SchedulingType};

use crate::service_flow_record::ServiceFlowRecord;

/// QoS parameter set negotiated for a service flow.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QosParameters {
    /// Traffic priority (0..=7).
    pub traffic_priority: u8,
    /// Maximum sustained traffic rate in bits per second.
    pub max_sustained_traffic_rate: u32,
    /// Maximum traffic burst in bytes.
    pub max_traffic_burst: u32,
    /// Minimum reserved traffic rate in bits per second.
    pub min_reserved_traffic_rate: u32,
    /// Minimum tolerable traffic rate in bits per second.
    pub min_tolerable_traffic_rate: u32,
    /// Tolerated jitter in milliseconds.
    pub tolerated_jitter: u32,
    /// Maximum latency in milliseconds.
    pub maximum_latency: u32,
    /// Interval between unsolicited grants (UGS) in milliseconds.
    pub unsolicited_grant_interval: u16,
    /// Interval between unicast polls (rtPS) in milliseconds.
    pub unsolicited_polling_interval: u16,
}

/// An admitted service flow and its bookkeeping record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceFlow {
    sfid: u32,
    direction: Direction,
    scheduling_type: SchedulingType,
    cid: Option<Cid>,
    is_enabled: bool,
    is_multicast: bool,
    modulation_type: ModulationType,
    qos: QosParameters,
    record: ServiceFlowRecord,
}

impl ServiceFlow {
    /// Creates a disabled flow without a transport connection.
    pub fn new(sfid: u32, direction: Direction, scheduling_type: SchedulingType) -> Self {
        Self {
            sfid,
            direction,
            scheduling_type,
            cid: None,
            is_enabled: false,
            is_multicast: false,
            modulation_type: ModulationType::Qpsk12,
            qos: QosParameters::default(),
            record: ServiceFlowRecord::new(),
        }
    }

    /// Attaches the transport connection (builder style).
    pub fn with_cid(mut self, cid: Cid) -> Self {
        self.cid = Some(cid);
        self
    }

    /// Replaces the QoS parameter set (builder style).
    pub fn with_qos(mut self, qos: QosParameters) -> Self {
        self.qos = qos;
        self
    }

    /// Returns the service flow identifier.
    pub fn sfid(&self) -> u32 {
        self.sfid
    }

    /// Sets the service flow identifier.
    pub fn set_sfid(&mut self, sfid: u32) {
        self.sfid = sfid;
    }

    /// Returns the flow direction.
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Returns the QoS scheduling class.
    pub fn scheduling_type(&self) -> SchedulingType {
        self.scheduling_type
    }

    /// Returns the transport CID, once one is attached.
    pub fn cid(&self) -> Option<Cid> {
        self.cid
    }

    /// Attaches the transport connection.
    pub fn set_cid(&mut self, cid: Cid) {
        self.cid = Some(cid);
    }

    /// Returns whether the flow is active.
    pub fn is_enabled(&self) -> bool {
        self.is_enabled
    }

    /// Activates or deactivates the flow.
    pub fn set_is_enabled(&mut self, is_enabled: bool) {
        self.is_enabled = is_enabled;
    }

    /// Returns whether the flow is carried on a multicast connection.
    pub fn is_multicast(&self) -> bool {
        self.is_multicast
    }

    /// Marks the flow as multicast.
    pub fn set_is_multicast(&mut self, is_multicast: bool) {
        self.is_multicast = is_multicast;
    }

    /// Returns the modulation used for the flow.
    pub fn modulation_type(&self) -> ModulationType {
        self.modulation_type
    }

    /// Sets the modulation used for the flow.
    pub fn set_modulation_type(&mut self, modulation_type: ModulationType) {
        self.modulation_type = modulation_type;
    }

    /// Returns the QoS parameter set.
    pub fn qos(&self) -> &QosParameters {
        &self.qos
    }

    /// Returns the QoS parameter set for modification.
    pub fn qos_mut(&mut self) -> &mut QosParameters {
        &mut self.qos
    }

    /// Returns the bookkeeping record.
    pub fn record(&self) -> &ServiceFlowRecord {
        &self.record
    }

    /// Returns the bookkeeping record for modification.
    pub fn record_mut(&mut self) -> &mut ServiceFlowRecord {
        &mut self.record
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_flow_defaults() {
        let flow = ServiceFlow::new(7, Direction::Uplink, SchedulingType::Rtps);
        assert_eq!(flow.sfid(), 7);
        assert_eq!(flow.direction(), Direction::Uplink);
        assert_eq!(flow.scheduling_type(), SchedulingType::Rtps);
        assert_eq!(flow.cid(), None);
        assert!(!flow.is_enabled());
        assert_eq!(flow.modulation_type(), ModulationType::Qpsk12);
        assert_eq!(flow.record(), &ServiceFlowRecord::new());
    }

    #[test]
    fn test_builder() {
        let qos = QosParameters { unsolicited_grant_interval: 20, ..QosParameters::default() };
        let flow = ServiceFlow::new(1, Direction::Uplink, SchedulingType::Ugs)
            .with_cid(Cid::new(0xAA01))
            .with_qos(qos.clone());
        assert_eq!(flow.cid(), Some(Cid::new(0xAA01)));
        assert_eq!(flow.qos(), &qos);
    }

    #[test]
    fn test_record_is_mutable_through_flow() {
        let mut flow = ServiceFlow::new(1, Direction::Downlink, SchedulingType::Be);
        flow.record_mut().update_bytes_sent(1500);
        assert_eq!(flow.record().bytes_sent(), 1500);
    }
}
