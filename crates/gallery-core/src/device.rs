//! Coarse device classification and the render settings chosen for each class.

use crate::constants::*;

const MOBILE_UA_MARKERS: [&str; 8] = [
    "android",
    "webos",
    "iphone",
    "ipad",
    "ipod",
    "blackberry",
    "iemobile",
    "opera mini",
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeviceClass {
    LowPowerMobile,
    CapableMobile,
    Desktop,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DeviceCapabilities {
    pub is_mobile: bool,
    pub is_low_power: bool,
    pub is_high_end: bool,
    pub device_pixel_ratio: f64,
}

impl DeviceCapabilities {
    pub fn detect(user_agent: &str, device_pixel_ratio: f64) -> Self {
        let ua = user_agent.to_ascii_lowercase();
        let is_mobile = MOBILE_UA_MARKERS.iter().any(|m| ua.contains(m));
        Self {
            is_mobile,
            is_low_power: is_mobile && device_pixel_ratio < HIGH_DENSITY_DPR,
            is_high_end: !is_mobile && device_pixel_ratio >= HIGH_DENSITY_DPR,
            device_pixel_ratio,
        }
    }

    pub fn class(&self) -> DeviceClass {
        if self.is_low_power {
            DeviceClass::LowPowerMobile
        } else if self.is_mobile {
            DeviceClass::CapableMobile
        } else {
            DeviceClass::Desktop
        }
    }

    pub fn profile(&self) -> RenderProfile {
        let dpr = self.device_pixel_ratio.max(0.1);
        match self.class() {
            DeviceClass::LowPowerMobile => RenderProfile {
                pixel_ratio: 1.0,
                render_scale: LOW_POWER_RENDER_SCALE,
                shadows: false,
                shadow_map_size: 0,
            },
            DeviceClass::CapableMobile => RenderProfile {
                pixel_ratio: dpr.min(MOBILE_PIXEL_RATIO_CAP),
                render_scale: 1.0,
                shadows: true,
                shadow_map_size: SHADOW_MAP_MOBILE,
            },
            DeviceClass::Desktop => RenderProfile {
                pixel_ratio: dpr,
                render_scale: 1.0,
                shadows: true,
                shadow_map_size: if self.is_high_end {
                    SHADOW_MAP_HIGH_END
                } else {
                    SHADOW_MAP_DESKTOP
                },
            },
        }
    }
}

/// Render settings applied to the canvas and renderer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RenderProfile {
    /// Backing pixels per CSS pixel.
    pub pixel_ratio: f64,
    /// Fraction of the viewport actually rendered.
    pub render_scale: f64,
    pub shadows: bool,
    /// Edge length of the shadow map; 0 when shadows are off.
    pub shadow_map_size: u32,
}

impl Default for RenderProfile {
    fn default() -> Self {
        Self {
            pixel_ratio: 1.0,
            render_scale: 1.0,
            shadows: true,
            shadow_map_size: SHADOW_MAP_DESKTOP,
        }
    }
}

impl RenderProfile {
    /// Backing-store size for a surface of `css_width` x `css_height` CSS pixels.
    pub fn backing_size(&self, css_width: f64, css_height: f64) -> (u32, u32) {
        let k = self.pixel_ratio * self.render_scale;
        let w = (css_width * k) as u32;
        let h = (css_height * k) as u32;
        (w.max(1), h.max(1))
    }
}
