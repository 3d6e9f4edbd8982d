//! CID allocation for one base station.
//!
//! The unicast space is split by a parameter `m`:
//!
//! - basic: `1..=m`
//! - primary: `m+1..=2m`
//! - transport and secondary management: `2m+1..=0xFEFF`
//! - multicast polling: `0xFF00..=0xFFFD`
//!
//! Each category hands out values in increasing order and never reuses one,
//! which keeps basic and primary CIDs unique across the stations of a cell.
//! The "not assigned" sentinel is skipped wherever a range covers it.

use wran_core::{
    config::Config,
    constants::{CID_UNINITIALIZED, MULTICAST_CID_FIRST, MULTICAST_CID_LAST, TRANSPORT_CID_LAST},
    error::{ErrorKind, Result},
};

use crate::cid::{Cid, CidType};

#[derive(Debug, Clone)]
struct CidRange {
    next: u32,
    last: u32,
}

impl CidRange {
    fn new(first: u16, last: u16) -> Self {
        Self { next: first as u32, last: last as u32 }
    }

    fn allocate(&mut self) -> Option<Cid> {
        if self.next == CID_UNINITIALIZED as u32 {
            self.next += 1;
        }
        if self.next > self.last {
            return None;
        }
        let cid = Cid::new(self.next as u16);
        self.next += 1;
        Some(cid)
    }

    fn remaining(&self) -> u32 {
        let span = (self.last + 1).saturating_sub(self.next);
        let skips_sentinel =
            (self.next..=self.last).contains(&(CID_UNINITIALIZED as u32)) as u32;
        span - skips_sentinel
    }
}

/// Allocates connection identifiers from the partitioned CID space.
#[derive(Debug, Clone)]
pub struct CidFactory {
    m: u16,
    basic: CidRange,
    primary: CidRange,
    transport: CidRange,
    multicast: CidRange,
}

impl CidFactory {
    /// Creates a factory for partition size `m`.
    ///
    /// `m` must be at least 1 and leave room for transport CIDs below `0xFEFF`.
    pub fn new(m: u16) -> Result<Self> {
        if m == 0 || 2 * (m as u32) >= TRANSPORT_CID_LAST as u32 {
            return Err(ErrorKind::InvalidConfig(format!(
                "CID partition size {m} must be in 1..{}",
                TRANSPORT_CID_LAST / 2 + 1
            )));
        }
        Ok(Self {
            m,
            basic: CidRange::new(1, m),
            primary: CidRange::new(m + 1, 2 * m),
            transport: CidRange::new(2 * m + 1, TRANSPORT_CID_LAST),
            multicast: CidRange::new(MULTICAST_CID_FIRST, MULTICAST_CID_LAST),
        })
    }

    /// Creates a factory using `config.cid_m`.
    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(config.cid_m)
    }

    /// Returns the partition size `m`.
    pub fn m(&self) -> u16 {
        self.m
    }

    /// Allocates the next basic CID.
    pub fn allocate_basic(&mut self) -> Result<Cid> {
        self.basic.allocate().ok_or(ErrorKind::CidSpaceExhausted(CidType::Basic.as_str()))
    }

    /// Allocates the next primary CID.
    pub fn allocate_primary(&mut self) -> Result<Cid> {
        self.primary.allocate().ok_or(ErrorKind::CidSpaceExhausted(CidType::Primary.as_str()))
    }

    /// Allocates the next transport or secondary management CID.
    pub fn allocate_transport_or_secondary(&mut self) -> Result<Cid> {
        self.transport.allocate().ok_or(ErrorKind::CidSpaceExhausted(CidType::Transport.as_str()))
    }

    /// Allocates the next multicast polling CID.
    pub fn allocate_multicast(&mut self) -> Result<Cid> {
        self.multicast.allocate().ok_or(ErrorKind::CidSpaceExhausted(CidType::Multicast.as_str()))
    }

    /// Allocates a CID of the given category.
    ///
    /// Singleton categories always yield their canonical value.
    pub fn allocate(&mut self, cid_type: CidType) -> Result<Cid> {
        match cid_type {
            CidType::Basic => self.allocate_basic(),
            CidType::Primary => self.allocate_primary(),
            CidType::Transport => self.allocate_transport_or_secondary(),
            CidType::Multicast => self.allocate_multicast(),
            CidType::Broadcast => Ok(Cid::broadcast()),
            CidType::Padding => Ok(Cid::padding()),
            CidType::InitialRanging => Ok(Cid::initial_ranging()),
        }
    }

    /// Returns how many CIDs of the category can still be allocated.
    pub fn remaining(&self, cid_type: CidType) -> u32 {
        match cid_type {
            CidType::Basic => self.basic.remaining(),
            CidType::Primary => self.primary.remaining(),
            CidType::Transport => self.transport.remaining(),
            CidType::Multicast => self.multicast.remaining(),
            CidType::Broadcast | CidType::Padding | CidType::InitialRanging => 1,
        }
    }

    /// Maps any CID to the category whose range contains it.
    pub fn classify(&self, cid: Cid) -> CidType {
        if cid.is_initial_ranging() {
            CidType::InitialRanging
        } else if cid.is_broadcast() {
            CidType::Broadcast
        } else if cid.is_padding() {
            CidType::Padding
        } else if cid.is_multicast() {
            CidType::Multicast
        } else {
            self.classify_unicast(cid.identifier())
        }
    }

    /// Returns true if `cid` lies in the basic range.
    pub fn is_basic(&self, cid: Cid) -> bool {
        self.classify(cid) == CidType::Basic
    }

    /// Returns true if `cid` lies in the primary range.
    pub fn is_primary(&self, cid: Cid) -> bool {
        self.classify(cid) == CidType::Primary
    }

    /// Returns true if `cid` lies in the transport range.
    pub fn is_transport(&self, cid: Cid) -> bool {
        self.classify(cid) == CidType::Transport
    }

    fn classify_unicast(&self, value: u16) -> CidType {
        let m = self.m as u32;
        match value as u32 {
            v if v <= m => CidType::Basic,
            v if v <= 2 * m => CidType::Primary,
            _ => CidType::Transport,
        }
    }
}
