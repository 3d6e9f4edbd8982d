use std::convert::TryFrom;

use wran_core::error::ErrorKind;

/// Modulation and coding classification reported by the PHY.
///
/// The MAC only stores this value; its meaning belongs to the PHY.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[allow(non_camel_case_types)]
pub enum ModulationType {
    /// BPSK, rate 1/2.
    #[default]
    Bpsk12,
    /// QPSK, rate 1/2.
    Qpsk12,
    /// QPSK, rate 3/4.
    Qpsk34,
    /// 16-QAM, rate 1/2.
    Qam16_12,
    /// 16-QAM, rate 3/4.
    Qam16_34,
    /// 64-QAM, rate 2/3.
    Qam64_23,
    /// 64-QAM, rate 3/4.
    Qam64_34,
}

impl From<ModulationType> for u8 {
    fn from(modulation: ModulationType) -> Self {
        modulation as u8
    }
}

impl TryFrom<u8> for ModulationType {
    type Error = ErrorKind;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(ModulationType::Bpsk12),
            1 => Ok(ModulationType::Qpsk12),
            2 => Ok(ModulationType::Qpsk34),
            3 => Ok(ModulationType::Qam16_12),
            4 => Ok(ModulationType::Qam16_34),
            5 => Ok(ModulationType::Qam64_23),
            6 => Ok(ModulationType::Qam64_34),
            _ => Err(ErrorKind::InvalidModulationType(value)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes() {
        assert_eq!(u8::from(ModulationType::Bpsk12), 0);
        assert_eq!(u8::from(ModulationType::Qam64_34), 6);
        assert_eq!(ModulationType::try_from(3), Ok(ModulationType::Qam16_12));
        assert_eq!(ModulationType::try_from(7), Err(ErrorKind::InvalidModulationType(7)));
    }
}
