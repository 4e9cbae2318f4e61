//! Client-side normalization of a sample against its clear channel

use crate::ColorSample;

/// Red, green and blue scaled to 0..=255 relative to the clear channel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
pub struct NormalizedRgb {
    /// Red, 0..=255
    pub red: u8,
    /// Green, 0..=255
    pub green: u8,
    /// Blue, 0..=255
    pub blue: u8,
}

impl NormalizedRgb {
    /// Normalize `sample`. Returns `None` for a zero clear reading (no light).
    pub fn from_sample(sample: &ColorSample) -> Option<Self> {
        if sample.clear == 0 {
            return None;
        }
        let clear = u32::from(sample.clear);
        let scale = |value: u16| (u32::from(value) * 255 / clear).min(255) as u8;
        Some(Self {
            red: scale(sample.red),
            green: scale(sample.green),
            blue: scale(sample.blue),
        })
    }
}
