//! Per-service-flow bandwidth and backlog accounting.
//!
//! The bandwidth scheduler reads and writes this record once per frame. Every
//! counter supports two kinds of writes:
//!
//! - `set_*` overwrites the value, for quantities recomputed from scratch;
//! - `update_*` adds a delta, for accumulation across packets or frames.
//!
//! Timestamps are only ever set. The `*_temp` fields hold the scheduler's
//! provisional values for the frame being built; folding them into the
//! committed fields is the scheduler's job, not the record's.

use std::time::Duration;

/// Grant, usage and backlog bookkeeping of one service flow.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ServiceFlowRecord {
    grant_size: u32,
    grant_time_stamp: Duration,
    dl_time_stamp: Duration,
    pkts_sent: u32,
    pkts_rcvd: u32,
    bytes_sent: u32,
    bytes_rcvd: u32,
    requested_bandwidth: u32,
    granted_bandwidth: u32,
    granted_bandwidth_temp: u32,
    backlogged: u32,
    backlogged_temp: u32,
    bw_since_last_expiry: u32,
    last_grant_time: Duration,
}

impl ServiceFlowRecord {
    /// Creates a record with every counter at zero and every timestamp at the zero instant.
    pub fn new() -> Self {
        Self::default()
    }

    /// Restores the freshly created state.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Sets the size of the allocation granted per grant interval.
    pub fn set_grant_size(&mut self, grant_size: u32) {
        self.grant_size = grant_size;
    }

    /// Returns the size of the allocation granted per grant interval.
    pub fn grant_size(&self) -> u32 {
        self.grant_size
    }

    /// Sets the time of the last uplink grant or polling opportunity.
    pub fn set_grant_time_stamp(&mut self, time: Duration) {
        self.grant_time_stamp = time;
    }

    /// Returns the time of the last uplink grant or polling opportunity.
    pub fn grant_time_stamp(&self) -> Duration {
        self.grant_time_stamp
    }

    /// Sets the time of the last downlink transmission.
    pub fn set_dl_time_stamp(&mut self, time: Duration) {
        self.dl_time_stamp = time;
    }

    /// Returns the time of the last downlink transmission.
    pub fn dl_time_stamp(&self) -> Duration {
        self.dl_time_stamp
    }

    /// Overwrites the sent packet count.
    pub fn set_pkts_sent(&mut self, pkts_sent: u32) {
        self.pkts_sent = pkts_sent;
    }

    /// Adds to the sent packet count.
    pub fn update_pkts_sent(&mut self, pkts_sent: u32) {
        self.pkts_sent = self.pkts_sent.saturating_add(pkts_sent);
    }

    /// Returns the sent packet count.
    pub fn pkts_sent(&self) -> u32 {
        self.pkts_sent
    }

    /// Overwrites the received packet count.
    pub fn set_pkts_rcvd(&mut self, pkts_rcvd: u32) {
        self.pkts_rcvd = pkts_rcvd;
    }

    /// Adds to the received packet count.
    pub fn update_pkts_rcvd(&mut self, pkts_rcvd: u32) {
        self.pkts_rcvd = self.pkts_rcvd.saturating_add(pkts_rcvd);
    }

    /// Returns the received packet count.
    pub fn pkts_rcvd(&self) -> u32 {
        self.pkts_rcvd
    }

    /// Overwrites the sent byte count.
    pub fn set_bytes_sent(&mut self, bytes_sent: u32) {
        self.bytes_sent = bytes_sent;
    }

    /// Adds to the sent byte count.
    pub fn update_bytes_sent(&mut self, bytes_sent: u32) {
        self.bytes_sent = self.bytes_sent.saturating_add(bytes_sent);
    }

    /// Returns the sent byte count.
    pub fn bytes_sent(&self) -> u32 {
        self.bytes_sent
    }

    /// Overwrites the received byte count.
    pub fn set_bytes_rcvd(&mut self, bytes_rcvd: u32) {
        self.bytes_rcvd = bytes_rcvd;
    }

    /// Adds to the received byte count.
    pub fn update_bytes_rcvd(&mut self, bytes_rcvd: u32) {
        self.bytes_rcvd = self.bytes_rcvd.saturating_add(bytes_rcvd);
    }

    /// Returns the received byte count.
    pub fn bytes_rcvd(&self) -> u32 {
        self.bytes_rcvd
    }

    /// Overwrites the requested bandwidth (aggregate request).
    pub fn set_requested_bandwidth(&mut self, requested_bandwidth: u32) {
        self.requested_bandwidth = requested_bandwidth;
    }

    /// Adds to the requested bandwidth (incremental request).
    pub fn update_requested_bandwidth(&mut self, requested_bandwidth: u32) {
        self.requested_bandwidth = self.requested_bandwidth.saturating_add(requested_bandwidth);
    }

    /// Returns the requested bandwidth.
    pub fn requested_bandwidth(&self) -> u32 {
        self.requested_bandwidth
    }

    /// Overwrites the committed granted bandwidth.
    pub fn set_granted_bandwidth(&mut self, granted_bandwidth: u32) {
        self.granted_bandwidth = granted_bandwidth;
    }

    /// Adds to the committed granted bandwidth.
    pub fn update_granted_bandwidth(&mut self, granted_bandwidth: u32) {
        self.granted_bandwidth = self.granted_bandwidth.saturating_add(granted_bandwidth);
    }

    /// Returns the committed granted bandwidth.
    pub fn granted_bandwidth(&self) -> u32 {
        self.granted_bandwidth
    }

    /// Overwrites the provisional granted bandwidth.
    pub fn set_granted_bandwidth_temp(&mut self, granted_bandwidth_temp: u32) {
        self.granted_bandwidth_temp = granted_bandwidth_temp;
    }

    /// Adds to the provisional granted bandwidth.
    pub fn update_granted_bandwidth_temp(&mut self, granted_bandwidth_temp: u32) {
        self.granted_bandwidth_temp =
            self.granted_bandwidth_temp.saturating_add(granted_bandwidth_temp);
    }

    /// Returns the provisional granted bandwidth.
    pub fn granted_bandwidth_temp(&self) -> u32 {
        self.granted_bandwidth_temp
    }

    /// Sets the time of the last grant.
    pub fn set_last_grant_time(&mut self, time: Duration) {
        self.last_grant_time = time;
    }

    /// Returns the time of the last grant.
    pub fn last_grant_time(&self) -> Duration {
        self.last_grant_time
    }

    /// Overwrites the committed backlog.
    pub fn set_backlogged(&mut self, backlogged: u32) {
        self.backlogged = backlogged;
    }

    /// Adds to the committed backlog.
    pub fn update_backlogged(&mut self, backlogged: u32) {
        self.backlogged = self.backlogged.saturating_add(backlogged);
    }

    /// Returns the committed backlog.
    pub fn backlogged(&self) -> u32 {
        self.backlogged
    }

    /// Overwrites the provisional backlog.
    pub fn set_backlogged_temp(&mut self, backlogged_temp: u32) {
        self.backlogged_temp = backlogged_temp;
    }

    /// Adds to the provisional backlog.
    pub fn update_backlogged_temp(&mut self, backlogged_temp: u32) {
        self.backlogged_temp = self.backlogged_temp.saturating_add(backlogged_temp);
    }

    /// Returns the provisional backlog.
    pub fn backlogged_temp(&self) -> u32 {
        self.backlogged_temp
    }

    /// Overwrites the bandwidth granted since the last expiry window.
    pub fn set_bw_since_last_expiry(&mut self, bw_since_last_expiry: u32) {
        self.bw_since_last_expiry = bw_since_last_expiry;
    }

    /// Adds to the bandwidth granted since the last expiry window.
    pub fn update_bw_since_last_expiry(&mut self, bw_since_last_expiry: u32) {
        self.bw_since_last_expiry = self.bw_since_last_expiry.saturating_add(bw_since_last_expiry);
    }

    /// Returns the bandwidth granted since the last expiry window.
    pub fn bw_since_last_expiry(&self) -> u32 {
        self.bw_since_last_expiry
    }
}
