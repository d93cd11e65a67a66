use serde::Serialize;

pub const TABLET_MIN_WIDTH: u32 = 768;
pub const DESKTOP_MIN_WIDTH: u32 = 1024;

const REDUCED_COUNT_FACTOR: f64 = 0.3;
const REDUCED_DURATION_FACTOR: f64 = 0.5;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DeviceClass {
    Mobile,
    Tablet,
    Desktop,
}

impl DeviceClass {
    pub fn from_width(width: u32) -> Self {
        if width < TABLET_MIN_WIDTH {
            Self::Mobile
        } else if width < DESKTOP_MIN_WIDTH {
            Self::Tablet
        } else {
            Self::Desktop
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    Portrait,
    Landscape,
}

impl Orientation {
    pub fn from_size(width: u32, height: u32) -> Self {
        if width > height {
            Self::Landscape
        } else {
            Self::Portrait
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MotionPolicy {
    pub low_end_cores: u32,
    pub mobile_low_end_reduces_motion: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CapabilityInputs {
    pub width: u32,
    pub height: u32,
    pub hardware_concurrency: Option<u32>,
    pub prefers_reduced_motion: bool,
}

impl CapabilityInputs {
    pub fn fallback() -> Self {
        Self {
            width: 1280,
            height: 720,
            hardware_concurrency: None,
            prefers_reduced_motion: false,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CapabilityState {
    pub class: DeviceClass,
    pub screen_width: u32,
    pub screen_height: u32,
    pub orientation: Orientation,
    pub reduced_motion: bool,
}

impl CapabilityState {
    pub fn classify(inputs: CapabilityInputs, policy: MotionPolicy) -> Self {
        let class = DeviceClass::from_width(inputs.width);
        let low_end = inputs
            .hardware_concurrency
            .is_some_and(|cores| cores <= policy.low_end_cores);
        let constrained =
            policy.mobile_low_end_reduces_motion && class == DeviceClass::Mobile && low_end;

        Self {
            class,
            screen_width: inputs.width,
            screen_height: inputs.height,
            orientation: Orientation::from_size(inputs.width, inputs.height),
            reduced_motion: constrained || inputs.prefers_reduced_motion,
        }
    }

    pub fn is_mobile(&self) -> bool {
        self.class == DeviceClass::Mobile
    }

    pub fn is_tablet(&self) -> bool {
        self.class == DeviceClass::Tablet
    }

    #[cfg(test)]
    pub fn is_desktop(&self) -> bool {
        self.class == DeviceClass::Desktop
    }

    pub fn pick<T>(&self, mobile: T, tablet: T, desktop: T) -> T {
        if self.is_mobile() {
            mobile
        } else if self.is_tablet() {
            tablet
        } else {
            desktop
        }
    }

    pub fn scaled_count(&self, count: usize) -> usize {
        if self.reduced_motion {
            (count as f64 * REDUCED_COUNT_FACTOR).floor() as usize
        } else {
            count
        }
    }

    pub fn scaled_duration(&self, seconds: f64) -> f64 {
        if self.reduced_motion {
            seconds * REDUCED_DURATION_FACTOR
        } else {
            seconds
        }
    }
}

impl Default for CapabilityState {
    fn default() -> Self {
        Self::classify(
            CapabilityInputs::fallback(),
            MotionPolicy {
                low_end_cores: 0,
                mobile_low_end_reduces_motion: false,
            },
        )
    }
}
