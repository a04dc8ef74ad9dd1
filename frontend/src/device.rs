use wasm_bindgen::JsValue;
use web_sys::js_sys::Reflect;

/// Viewports narrower than this get the light version of the page.
pub const MOBILE_BREAKPOINT: f64 = 768.0;

/// What the current device can do. Every capability branch on the page is a
/// plain check against one of these.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DeviceCapabilities {
    pub touch: bool,
    pub reduced_motion: bool,
    pub viewport_width: f64,
}

impl Default for DeviceCapabilities {
    // Assume the most limited device until we can look
    fn default() -> Self {
        Self {
            touch: true,
            reduced_motion: false,
            viewport_width: 1024.0,
        }
    }
}

impl DeviceCapabilities {
    pub fn detect() -> Self {
        let Some(window) = web_sys::window() else {
            return Self::default();
        };

        let touch = Reflect::has(&window, &JsValue::from_str("ontouchstart")).unwrap_or(false)
            || window.navigator().max_touch_points() > 0;
        let reduced_motion = window
            .match_media("(prefers-reduced-motion: reduce)")
            .ok()
            .flatten()
            .map(|query| query.matches())
            .unwrap_or(false);
        let viewport_width = window
            .inner_width()
            .ok()
            .and_then(|w| w.as_f64())
            .unwrap_or(Self::default().viewport_width);

        Self {
            touch,
            reduced_motion,
            viewport_width,
        }
    }

    pub fn with_width(mut self, viewport_width: f64) -> Self {
        self.viewport_width = viewport_width;
        self
    }

    pub fn is_mobile(&self) -> bool {
        self.viewport_width < MOBILE_BREAKPOINT
    }

    pub fn custom_cursor_enabled(&self) -> bool {
        !self.touch && !self.reduced_motion
    }

    /// Pointer-driven effects (scene light, card tilt, hover glow).
    pub fn pointer_effects_enabled(&self) -> bool {
        !self.touch
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn desktop() -> DeviceCapabilities {
        DeviceCapabilities {
            touch: false,
            reduced_motion: false,
            viewport_width: 1440.0,
        }
    }

    #[test]
    fn breakpoint_is_exclusive() {
        assert!(desktop().with_width(767.0).is_mobile());
        assert!(!desktop().with_width(768.0).is_mobile());
    }

    #[test]
    fn touch_disables_cursor_and_pointer_effects() {
        let phone = DeviceCapabilities { touch: true, ..desktop() };
        assert!(!phone.custom_cursor_enabled());
        assert!(!phone.pointer_effects_enabled());
        assert!(desktop().custom_cursor_enabled());
    }

    #[test]
    fn reduced_motion_only_drops_the_cursor() {
        let calm = DeviceCapabilities { reduced_motion: true, ..desktop() };
        assert!(!calm.custom_cursor_enabled());
        assert!(calm.pointer_effects_enabled());
    }

    #[test]
    fn default_assumes_touch() {
        assert!(!DeviceCapabilities::default().custom_cursor_enabled());
    }
}
