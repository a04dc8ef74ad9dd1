use web_sys::HtmlElement;

use super::engine::RevealSurface;
use super::style::VisualState;

const ANIMATED_PROPERTIES: [&str; 3] = ["opacity", "transform", "width"];
/// Holds the `y` and `scale` last written, so measuring can undo them.
const SHIFT_ATTRIBUTE: &str = "data-reveal-shift";

/// Top edge of the box before a `translate(_, y) scale(s)` transform with a
/// centred origin. `height` is the transformed height.
pub fn untransformed_top(top: f64, height: f64, y: f64, scale: f64) -> f64 {
    if scale <= f64::EPSILON {
        return top - y;
    }
    top - y - (height / scale) * (1.0 - scale) / 2.0
}

fn parse_shift(raw: &str) -> Option<(f64, f64)> {
    let (y, scale) = raw.split_once(' ')?;
    Some((y.parse().ok()?, scale.parse().ok()?))
}

/// A live element driven through its inline style.
#[derive(Clone, PartialEq)]
pub struct DomSurface {
    element: HtmlElement,
}

impl DomSurface {
    pub fn new(element: HtmlElement) -> Self {
        Self { element }
    }
}

impl RevealSurface for DomSurface {
    fn viewport_top(&self) -> Option<f64> {
        if !self.element.is_connected() {
            return None;
        }
        let rect = self.element.get_bounding_client_rect();
        let shift = self
            .element
            .get_attribute(SHIFT_ATTRIBUTE)
            .and_then(|raw| parse_shift(&raw));
        Some(match shift {
            Some((y, scale)) => untransformed_top(rect.top(), rect.height(), y, scale),
            None => rect.top(),
        })
    }

    // Style writes can fail on exotic elements; the element just keeps its
    // current look in that case.
    fn apply(&self, state: &VisualState) {
        let style = self.element.style();
        let _ = style.set_property("opacity", &format!("{:.3}", state.opacity));
        let _ = style.set_property("transform", &state.transform());
        let _ = self
            .element
            .set_attribute(SHIFT_ATTRIBUTE, &format!("{} {}", state.y, state.scale));
        if let Some(width) = state.width_pct {
            let _ = style.set_property("width", &format!("{:.2}%", width));
        }
    }

    fn clear(&self) {
        let style = self.element.style();
        for property in ANIMATED_PROPERTIES {
            let _ = style.remove_property(property);
        }
        let _ = self.element.remove_attribute(SHIFT_ATTRIBUTE);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn translation_is_undone() {
        assert_eq!(untransformed_top(550.0, 100.0, 50.0, 1.0), 500.0);
    }

    #[test]
    fn centred_scale_is_undone() {
        // a 200px box at 0.9 shows 180px and moves down 10px
        let top = untransformed_top(450.0, 180.0, 40.0, 0.9);
        assert!((top - 400.0).abs() < 1e-9);
    }

    #[test]
    fn shift_attribute_round_trips() {
        assert_eq!(parse_shift("40 0.95"), Some((40.0, 0.95)));
        assert_eq!(parse_shift("garbage"), None);
    }
}
