use crate::cid::Cid;

/// Content of the last DSA-RSP sent to a station.
///
/// Kept so that a retransmission repeats the first response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DsaResponse {
    /// Transaction the response belongs to.
    pub transaction_id: u16,
    /// Confirmation code (0 = OK).
    pub confirmation_code: u8,
    /// Identifier of the admitted service flow.
    pub sfid: u32,
    /// Transport CID assigned to the flow.
    pub cid: Cid,
}

impl DsaResponse {
    /// Creates a successful response for a flow.
    pub fn accepted(transaction_id: u16, sfid: u32, cid: Cid) -> Self {
        Self { transaction_id, confirmation_code: 0, sfid, cid }
    }

    /// Returns true if the confirmation code reports success.
    pub fn is_accepted(&self) -> bool {
        self.confirmation_code == 0
    }
}
