//! Base-station side state of one subscriber station.
//!
//! The record accumulates everything learnt about a station during network
//! entry: its management CIDs, ranging progress, DSA transaction state and the
//! service flows admitted for it. It only stores state. Deciding transitions
//! and signalling them to the station is up to the MAC layer driving it.

use std::net::Ipv4Addr;

use wran_core::MacAddress;
use wran_protocol::{Cid, DsaResponse, FlowFilter, ModulationType, RangingStatus, SchedulingType};

use crate::service_flow::ServiceFlow;

/// Session state of one subscriber station known to a base station.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SsRecord {
    mac_address: MacAddress,
    ip_address: Option<Ipv4Addr>,
    basic_cid: Cid,
    primary_cid: Cid,
    ranging_correction_retries: u8,
    invited_ranging_retries: u8,
    modulation_type: ModulationType,
    ranging_status: RangingStatus,
    poll_for_ranging: bool,
    service_flows_allocated: bool,
    poll_me_bit: bool,
    sf_transaction_id: u16,
    dsa_rsp_retries: u8,
    dsa_rsp: DsaResponse,
    service_flows: Vec<ServiceFlow>,
    is_broadcast_ss: bool,
}

impl SsRecord {
    /// Creates the record of a newly observed station.
    pub fn new(mac_address: MacAddress) -> Self {
        Self { mac_address, ..Self::default() }
    }

    /// Creates the record of a station whose network address is already known.
    pub fn with_ip_address(mac_address: MacAddress, ip_address: Ipv4Addr) -> Self {
        Self { mac_address, ip_address: Some(ip_address), ..Self::default() }
    }

    /// Returns the hardware address.
    pub fn mac_address(&self) -> MacAddress {
        self.mac_address
    }

    /// Sets the hardware address.
    pub fn set_mac_address(&mut self, mac_address: MacAddress) {
        self.mac_address = mac_address;
    }

    /// Returns the network address, once assigned.
    pub fn ip_address(&self) -> Option<Ipv4Addr> {
        self.ip_address
    }

    /// Sets the network address.
    pub fn set_ip_address(&mut self, ip_address: Ipv4Addr) {
        self.ip_address = Some(ip_address);
    }

    /// Returns the basic management CID.
    pub fn basic_cid(&self) -> Cid {
        self.basic_cid
    }

    /// Sets the basic management CID.
    pub fn set_basic_cid(&mut self, basic_cid: Cid) {
        self.basic_cid = basic_cid;
    }

    /// Returns the primary management CID.
    pub fn primary_cid(&self) -> Cid {
        self.primary_cid
    }

    /// Sets the primary management CID.
    pub fn set_primary_cid(&mut self, primary_cid: Cid) {
        self.primary_cid = primary_cid;
    }

    /// Returns the number of ranging corrections sent since the last reset.
    pub fn ranging_correction_retries(&self) -> u8 {
        self.ranging_correction_retries
    }

    /// Counts one more ranging correction.
    pub fn increment_ranging_correction_retries(&mut self) {
        self.ranging_correction_retries = self.ranging_correction_retries.saturating_add(1);
    }

    /// Zeroes the ranging correction count.
    pub fn reset_ranging_correction_retries(&mut self) {
        self.ranging_correction_retries = 0;
    }

    /// Returns the number of invited ranging attempts since the last reset.
    pub fn invited_ranging_retries(&self) -> u8 {
        self.invited_ranging_retries
    }

    /// Counts one more invited ranging attempt.
    pub fn increment_invited_ranging_retries(&mut self) {
        self.invited_ranging_retries = self.invited_ranging_retries.saturating_add(1);
    }

    /// Zeroes the invited ranging count.
    pub fn reset_invited_ranging_retries(&mut self) {
        self.invited_ranging_retries = 0;
    }

    /// Returns the modulation last reported for the station.
    pub fn modulation_type(&self) -> ModulationType {
        self.modulation_type
    }

    /// Stores the modulation reported for the station.
    pub fn set_modulation_type(&mut self, modulation_type: ModulationType) {
        self.modulation_type = modulation_type;
    }

    /// Returns the current ranging status.
    pub fn ranging_status(&self) -> RangingStatus {
        self.ranging_status
    }

    /// Stores the current ranging status.
    pub fn set_ranging_status(&mut self, ranging_status: RangingStatus) {
        self.ranging_status = ranging_status;
    }

    /// Returns true once ranging has succeeded.
    pub fn is_registered(&self) -> bool {
        self.ranging_status.is_success()
    }

    /// Requests an invited ranging opportunity for the station.
    pub fn enable_poll_for_ranging(&mut self) {
        self.poll_for_ranging = true;
    }

    /// Withdraws the invited ranging request.
    pub fn disable_poll_for_ranging(&mut self) {
        self.poll_for_ranging = false;
    }

    /// Returns whether the station is to be polled for ranging.
    pub fn poll_for_ranging(&self) -> bool {
        self.poll_for_ranging
    }

    /// Returns whether the station's service flows have been set up.
    pub fn service_flows_allocated(&self) -> bool {
        self.service_flows_allocated
    }

    /// Records whether the station's service flows have been set up.
    pub fn set_service_flows_allocated(&mut self, allocated: bool) {
        self.service_flows_allocated = allocated;
    }

    /// Returns the poll-me bit last seen from the station.
    pub fn poll_me_bit(&self) -> bool {
        self.poll_me_bit
    }

    /// Stores the poll-me bit seen from the station.
    pub fn set_poll_me_bit(&mut self, poll_me_bit: bool) {
        self.poll_me_bit = poll_me_bit;
    }

    /// Takes ownership of an admitted flow, appending it after the existing ones.
    pub fn add_service_flow(&mut self, service_flow: ServiceFlow) {
        self.service_flows.push(service_flow);
    }

    /// Returns the flows passing `filter`, in admission order.
    pub fn service_flows(&self, filter: FlowFilter) -> impl Iterator<Item = &ServiceFlow> {
        self.service_flows.iter().filter(move |sf| filter.matches(sf.scheduling_type()))
    }

    /// Returns the flows passing `filter` for modification, in admission order.
    pub fn service_flows_mut(
        &mut self,
        filter: FlowFilter,
    ) -> impl Iterator<Item = &mut ServiceFlow> {
        self.service_flows.iter_mut().filter(move |sf| filter.matches(sf.scheduling_type()))
    }

    /// Returns the number of flows owned by the station.
    pub fn service_flow_count(&self) -> usize {
        self.service_flows.len()
    }

    /// Returns the flow carried on transport connection `cid`.
    pub fn service_flow_by_cid(&self, cid: Cid) -> Option<&ServiceFlow> {
        self.service_flows.iter().find(|sf| sf.cid() == Some(cid))
    }

    /// Returns the flow carried on transport connection `cid` for modification.
    pub fn service_flow_by_cid_mut(&mut self, cid: Cid) -> Option<&mut ServiceFlow> {
        self.service_flows.iter_mut().find(|sf| sf.cid() == Some(cid))
    }

    /// Returns true if `cid` is the station's basic, primary or a transport CID.
    ///
    /// The "not assigned" sentinel is owned by no station.
    pub fn owns_cid(&self, cid: Cid) -> bool {
        if !cid.is_initialized() {
            return false;
        }
        self.basic_cid == cid || self.primary_cid == cid || self.service_flow_by_cid(cid).is_some()
    }

    /// Returns true if at least one flow is of the given class.
    pub fn has_flow_of_type(&self, scheduling_type: SchedulingType) -> bool {
        self.service_flows.iter().any(|sf| sf.scheduling_type() == scheduling_type)
    }

    /// Returns true if the station has an UGS flow.
    pub fn has_service_flow_ugs(&self) -> bool {
        self.has_flow_of_type(SchedulingType::Ugs)
    }

    /// Returns true if the station has an rtPS flow.
    pub fn has_service_flow_rtps(&self) -> bool {
        self.has_flow_of_type(SchedulingType::Rtps)
    }

    /// Returns true if the station has an nrtPS flow.
    pub fn has_service_flow_nrtps(&self) -> bool {
        self.has_flow_of_type(SchedulingType::Nrtps)
    }

    /// Returns true if the station has a BE flow.
    pub fn has_service_flow_be(&self) -> bool {
        self.has_flow_of_type(SchedulingType::Be)
    }

    /// Returns the transaction id of the ongoing DSA exchange.
    pub fn sf_transaction_id(&self) -> u16 {
        self.sf_transaction_id
    }

    /// Sets the transaction id of the ongoing DSA exchange.
    pub fn set_sf_transaction_id(&mut self, sf_transaction_id: u16) {
        self.sf_transaction_id = sf_transaction_id;
    }

    /// Returns the number of DSA-RSP transmissions so far.
    pub fn dsa_rsp_retries(&self) -> u8 {
        self.dsa_rsp_retries
    }

    /// Counts one more DSA-RSP transmission.
    pub fn increment_dsa_rsp_retries(&mut self) {
        self.dsa_rsp_retries = self.dsa_rsp_retries.saturating_add(1);
    }

    /// Overwrites the DSA-RSP transmission count.
    pub fn set_dsa_rsp_retries(&mut self, dsa_rsp_retries: u8) {
        self.dsa_rsp_retries = dsa_rsp_retries;
    }

    /// Returns the last DSA-RSP sent to the station.
    pub fn dsa_rsp(&self) -> &DsaResponse {
        &self.dsa_rsp
    }

    /// Stores the DSA-RSP sent to the station.
    pub fn set_dsa_rsp(&mut self, dsa_rsp: DsaResponse) {
        self.dsa_rsp = dsa_rsp;
    }

    /// Returns whether the record stands for the broadcast station.
    pub fn is_broadcast_ss(&self) -> bool {
        self.is_broadcast_ss
    }

    /// Marks the record as the broadcast station.
    pub fn set_is_broadcast_ss(&mut self, is_broadcast_ss: bool) {
        self.is_broadcast_ss = is_broadcast_ss;
    }
}
