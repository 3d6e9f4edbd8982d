use std::convert::TryFrom;

use wran_core::error::ErrorKind;

/// Ranging status of a subscriber station, as carried in RNG-RSP.
///
/// Only the current value is stored with a station; transitions are decided by
/// the ranging procedure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RangingStatus {
    /// No ranging in progress, or the previous ranging has timed out
    #[default]
    Expired,

    /// Base station asked for further ranging corrections
    Continue,

    /// Ranging was refused; management CIDs are withdrawn
    Abort,

    /// Ranging completed; the station may register
    Success,
}

impl RangingStatus {
    /// Returns true if ranging completed successfully
    pub fn is_success(&self) -> bool {
        matches!(self, RangingStatus::Success)
    }

    /// Returns true while the base station expects more ranging corrections
    pub fn is_pending(&self) -> bool {
        matches!(self, RangingStatus::Continue)
    }

    /// Returns true once ranging reached a final outcome
    pub fn is_terminal(&self) -> bool {
        matches!(self, RangingStatus::Abort | RangingStatus::Success)
    }
}

impl From<RangingStatus> for u8 {
    fn from(status: RangingStatus) -> Self {
        status as u8
    }
}

impl TryFrom<u8> for RangingStatus {
    type Error = ErrorKind;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(RangingStatus::Expired),
            1 => Ok(RangingStatus::Continue),
            2 => Ok(RangingStatus::Abort),
            3 => Ok(RangingStatus::Success),
            _ => Err(ErrorKind::InvalidRangingStatus(value)),
        }
    }
}
