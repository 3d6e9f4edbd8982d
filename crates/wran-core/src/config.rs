use std::default::Default;

use crate::constants::DEFAULT_CID_M;

#[derive(Clone, Debug, PartialEq, Eq)]
/// Configuration options to tune the base-station MAC bookkeeping.
pub struct Config {
    /// Size `m` of the basic and primary CID ranges.
    pub cid_m: u16,
    /// Max number of subscriber station records kept at once (0 = unlimited).
    pub max_stations: usize,
    /// Number of retries allowed on contention ranging requests.
    pub max_ranging_correction_retries: u8,
    /// Number of retries allowed on invited ranging opportunities.
    pub max_invited_ranging_retries: u8,
    /// Number of DSA-RSP retransmissions before a flow setup is abandoned.
    pub max_dsa_rsp_retries: u8,
    /// Bandwidth request opportunity size in symbols.
    pub bw_req_opp_size: u8,
    /// Ranging request opportunity size in symbols.
    pub rang_req_opp_size: u8,
}

impl Config {
    /// Returns true once `retries` contention ranging corrections used up the allowance.
    pub fn ranging_correction_exhausted(&self, retries: u8) -> bool {
        retries >= self.max_ranging_correction_retries
    }

    /// Returns true once `retries` invited ranging attempts used up the allowance.
    pub fn invited_ranging_exhausted(&self, retries: u8) -> bool {
        retries >= self.max_invited_ranging_retries
    }

    /// Returns true once `retries` DSA-RSP retransmissions used up the allowance.
    pub fn dsa_rsp_exhausted(&self, retries: u8) -> bool {
        retries >= self.max_dsa_rsp_retries
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            cid_m: DEFAULT_CID_M,
            max_stations: 0, // Unlimited
            max_ranging_correction_retries: 16,
            max_invited_ranging_retries: 16,
            max_dsa_rsp_retries: 100,
            bw_req_opp_size: 2, // 1 (preamble) + 1 (bandwidth request header)
            rang_req_opp_size: 8,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_limits() {
        let config = Config::default();
        assert_eq!(config.cid_m, 0x5500);
        assert_eq!(config.max_stations, 0);
        assert_eq!(config.max_dsa_rsp_retries, 100);
        assert_eq!(config.bw_req_opp_size, 2);
    }

    #[test]
    fn test_retry_exhaustion() {
        let config = Config { max_ranging_correction_retries: 3, ..Config::default() };

        assert!(!config.ranging_correction_exhausted(2));
        assert!(config.ranging_correction_exhausted(3));
        assert!(config.ranging_correction_exhausted(4));
        assert!(!config.invited_ranging_exhausted(15));
        assert!(config.invited_ranging_exhausted(16));
        assert!(!config.dsa_rsp_exhausted(99));
        assert!(config.dsa_rsp_exhausted(100));
    }
}
