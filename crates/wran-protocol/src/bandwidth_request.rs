use crate::cid::Cid;

/// How the byte count of a bandwidth request is to be applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestKind {
    /// Adds to the bandwidth already requested for the connection.
    Incremental,
    /// Replaces the bandwidth requested for the connection.
    Aggregate,
}

/// A decoded bandwidth request for one connection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BandwidthRequest {
    /// Incremental or aggregate semantics.
    pub kind: RequestKind,
    /// Connection the bandwidth is requested for.
    pub cid: Cid,
    /// Requested bytes.
    pub bytes: u32,
}

impl BandwidthRequest {
    /// Creates an incremental request.
    pub fn incremental(cid: Cid, bytes: u32) -> Self {
        Self { kind: RequestKind::Incremental, cid, bytes }
    }

    /// Creates an aggregate request.
    pub fn aggregate(cid: Cid, bytes: u32) -> Self {
        Self { kind: RequestKind::Aggregate, cid, bytes }
    }
}
