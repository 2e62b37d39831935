use constants::viewport::*;
use serde::Serialize;

/// Discrete viewport size class; applied uniformly to every base scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ScaleTier {
    Mobile,
    Tablet,
    #[default]
    Desktop,
}

impl ScaleTier {
    pub fn from_width(width: f32) -> Self {
        if width < MOBILE_MAX_WIDTH {
            Self::Mobile
        } else if width < TABLET_MAX_WIDTH {
            Self::Tablet
        } else {
            Self::Desktop
        }
    }

    pub fn factor(&self) -> f32 {
        match self {
            Self::Mobile => MOBILE_SCALE_FACTOR,
            Self::Tablet => TABLET_SCALE_FACTOR,
            Self::Desktop => DESKTOP_SCALE_FACTOR,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn widths_map_onto_three_tiers() {
        assert_eq!(ScaleTier::from_width(375.0), ScaleTier::Mobile);
        assert_eq!(ScaleTier::from_width(640.0), ScaleTier::Tablet);
        assert_eq!(ScaleTier::from_width(1023.0), ScaleTier::Tablet);
        assert_eq!(ScaleTier::from_width(1024.0), ScaleTier::Desktop);
        assert_eq!(ScaleTier::Mobile.factor(), 0.6);
        assert_eq!(ScaleTier::default().factor(), 1.0);
    }
}
