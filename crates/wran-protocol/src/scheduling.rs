use std::fmt;

/// QoS scheduling class of a service flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SchedulingType {
    /// Unsolicited Grant Service: fixed-size grants at a fixed interval.
    Ugs,
    /// Real-Time Polling Service: periodic unicast request opportunities.
    Rtps,
    /// Non-Real-Time Polling Service: served after UGS and rtPS.
    Nrtps,
    /// Best Effort: served with whatever bandwidth is left.
    Be,
}

impl SchedulingType {
    /// All classes, in service priority order.
    pub const VARIANTS: [SchedulingType; 4] =
        [SchedulingType::Ugs, SchedulingType::Rtps, SchedulingType::Nrtps, SchedulingType::Be];

    /// Returns the conventional short name of the class.
    pub fn as_str(&self) -> &'static str {
        match self {
            SchedulingType::Ugs => "UGS",
            SchedulingType::Rtps => "rtPS",
            SchedulingType::Nrtps => "nrtPS",
            SchedulingType::Be => "BE",
        }
    }

    /// Returns true for the classes that obtain bandwidth by request (rtPS, nrtPS, BE).
    pub fn requests_bandwidth(&self) -> bool {
        !matches!(self, SchedulingType::Ugs)
    }
}

impl fmt::Display for SchedulingType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Selector for service flow queries.
///
/// `All` only exists for queries; a flow always carries a concrete class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FlowFilter {
    /// Every flow.
    #[default]
    All,
    /// Flows of one scheduling class.
    Only(SchedulingType),
}

impl FlowFilter {
    /// Returns true if a flow of class `scheduling_type` passes the filter.
    pub fn matches(&self, scheduling_type: SchedulingType) -> bool {
        match self {
            FlowFilter::All => true,
            FlowFilter::Only(wanted) => *wanted == scheduling_type,
        }
    }
}

impl From<SchedulingType> for FlowFilter {
    fn from(scheduling_type: SchedulingType) -> Self {
        FlowFilter::Only(scheduling_type)
    }
}

/// Direction of a service flow relative to the base station.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Direction {
    /// Base station to subscriber station.
    #[default]
    Downlink,
    /// Subscriber station to base station.
    Uplink,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names() {
        let names: Vec<&str> = SchedulingType::VARIANTS.iter().map(|t| t.as_str()).collect();
        assert_eq!(names, vec!["UGS", "rtPS", "nrtPS", "BE"]);
    }

    #[test]
    fn test_filter_matches() {
        assert!(FlowFilter::All.matches(SchedulingType::Nrtps));
        assert!(FlowFilter::from(SchedulingType::Be).matches(SchedulingType::Be));
        assert!(!FlowFilter::Only(SchedulingType::Be).matches(SchedulingType::Ugs));
    }

    #[test]
    fn test_requests_bandwidth() {
        assert!(!SchedulingType::Ugs.requests_bandwidth());
        assert!(SchedulingType::Rtps.requests_bandwidth());
        assert!(SchedulingType::Be.requests_bandwidth());
    }
}
