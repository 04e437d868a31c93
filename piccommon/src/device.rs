use crate::instruction_sets::*;
use miette::Diagnostic;
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub enum DeviceFamily {
    /// 12-bit instruction words.
    Baseline,
    /// 14-bit instruction words.
    #[default]
    Midrange,
    /// 14-bit instruction words with the PIC16F1 extensions.
    EnhancedMidrange,
    /// 16-bit instruction words.
    Pic18,
}

/// Part numbers recognised on top of the family names.
const KNOWN_PARTS: &[(&str, DeviceFamily)] = &[
    ("pic10f200", DeviceFamily::Baseline),
    ("pic10f206", DeviceFamily::Baseline),
    ("pic12f508", DeviceFamily::Baseline),
    ("pic12f509", DeviceFamily::Baseline),
    ("pic16f54", DeviceFamily::Baseline),
    ("pic16f57", DeviceFamily::Baseline),
    ("pic12f675", DeviceFamily::Midrange),
    ("pic12f683", DeviceFamily::Midrange),
    ("pic16f84a", DeviceFamily::Midrange),
    ("pic16f628a", DeviceFamily::Midrange),
    ("pic16f690", DeviceFamily::Midrange),
    ("pic16f877", DeviceFamily::Midrange),
    ("pic16f877a", DeviceFamily::Midrange),
    ("pic16f887", DeviceFamily::Midrange),
    ("pic12f1822", DeviceFamily::EnhancedMidrange),
    ("pic16f1827", DeviceFamily::EnhancedMidrange),
    ("pic16f1847", DeviceFamily::EnhancedMidrange),
    ("pic16f1938", DeviceFamily::EnhancedMidrange),
    ("pic18f452", DeviceFamily::Pic18),
    ("pic18f2550", DeviceFamily::Pic18),
    ("pic18f4520", DeviceFamily::Pic18),
    ("pic18f4550", DeviceFamily::Pic18),
];

impl DeviceFamily {
    pub const ALL: [Self; 4] = [
        Self::Baseline,
        Self::Midrange,
        Self::EnhancedMidrange,
        Self::Pic18,
    ];

    pub fn instruction_set(self) -> &'static [&'static str] {
        match self {
            Self::Baseline => BASELINE_INSTRUCTIONS,
            Self::Midrange => MIDRANGE_INSTRUCTIONS,
            Self::EnhancedMidrange => ENHANCED_MIDRANGE_INSTRUCTIONS,
            Self::Pic18 => PIC18_INSTRUCTIONS,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Baseline => "baseline",
            Self::Midrange => "midrange",
            Self::EnhancedMidrange => "enhanced",
            Self::Pic18 => "pic18",
        }
    }

    fn from_family_name(name: &str) -> Option<Self> {
        Some(match name {
            "baseline" | "pic12" => Self::Baseline,
            "midrange" | "pic16" => Self::Midrange,
            "enhanced" | "pic16e" => Self::EnhancedMidrange,
            "pic18" => Self::Pic18,
            _ => return None,
        })
    }
}

impl Display for DeviceFamily {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DeviceFamily {
    type Err = UnsupportedDeviceFamily;

    fn from_str(selector: &str) -> Result<Self, Self::Err> {
        let lowered = selector.trim().to_lowercase();
        Self::from_family_name(&lowered)
            .or_else(|| {
                KNOWN_PARTS
                    .iter()
                    .find(|(part, _)| *part == lowered)
                    .map(|(_, family)| *family)
            })
            .ok_or_else(|| UnsupportedDeviceFamily::new(selector))
    }
}

#[derive(Debug, Error, Diagnostic)]
#[error("'{}' is not implemented", .selector)]
#[diagnostic(
    code(piccommon::device::unsupported),
    help("try one of `baseline`, `midrange`, `enhanced`, `pic18` or a part number such as `PIC16F877`")
)]
pub struct UnsupportedDeviceFamily {
    selector: String,
}

impl UnsupportedDeviceFamily {
    pub fn new(selector: impl Into<String>) -> Self {
        Self {
            selector: selector.into(),
        }
    }

    pub fn selector(&self) -> &str {
        &self.selector
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_family_names() {
        for family in DeviceFamily::ALL {
            assert_eq!(family.name().parse::<DeviceFamily>().ok(), Some(family));
        }
        assert_eq!("PIC16".parse::<DeviceFamily>().ok(), Some(DeviceFamily::Midrange));
    }

    #[test]
    fn test_part_numbers() {
        assert_eq!(
            "PIC16F887".parse::<DeviceFamily>().ok(),
            Some(DeviceFamily::Midrange)
        );
        assert_eq!(
            "pic16f877a".parse::<DeviceFamily>().ok(),
            Some(DeviceFamily::Midrange)
        );
        assert_eq!(
            "PIC18F4550".parse::<DeviceFamily>().ok(),
            Some(DeviceFamily::Pic18)
        );
        assert_eq!(
            "PIC10F200".parse::<DeviceFamily>().ok(),
            Some(DeviceFamily::Baseline)
        );
    }

    #[test]
    fn test_unsupported_selector() {
        let error = "PIC32MX250".parse::<DeviceFamily>().unwrap_err();
        assert_eq!(error.selector(), "PIC32MX250");
        assert_eq!(error.to_string(), "'PIC32MX250' is not implemented");
    }

    #[test]
    fn test_instruction_sets_differ() {
        assert!(DeviceFamily::Midrange.instruction_set().contains(&"return"));
        assert!(!DeviceFamily::Baseline.instruction_set().contains(&"return"));
        assert!(DeviceFamily::Baseline.instruction_set().contains(&"tris"));
        assert!(DeviceFamily::EnhancedMidrange.instruction_set().contains(&"movlb"));
        assert!(DeviceFamily::Pic18.instruction_set().contains(&"movff"));
    }
}
