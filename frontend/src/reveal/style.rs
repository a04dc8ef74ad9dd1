/// The animatable subset of an element's inline style.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisualState {
    pub opacity: f64,
    pub x: f64, // px
    pub y: f64, // px
    pub scale: f64,
    /// Width in percent of the parent. `None` leaves the width alone.
    pub width_pct: Option<f64>,
}

impl Default for VisualState {
    fn default() -> Self {
        Self::RESTING
    }
}

impl VisualState {
    /// What the stylesheet shows with no inline overrides.
    pub const RESTING: VisualState = VisualState {
        opacity: 1.0,
        x: 0.0,
        y: 0.0,
        scale: 1.0,
        width_pct: None,
    };

    pub fn hidden() -> Self {
        Self::RESTING.with_opacity(0.0)
    }

    pub const fn with_opacity(mut self, opacity: f64) -> Self {
        self.opacity = opacity;
        self
    }

    pub const fn with_x(mut self, x: f64) -> Self {
        self.x = x;
        self
    }

    pub const fn with_y(mut self, y: f64) -> Self {
        self.y = y;
        self
    }

    pub const fn with_scale(mut self, scale: f64) -> Self {
        self.scale = scale;
        self
    }

    pub const fn with_width(mut self, pct: f64) -> Self {
        self.width_pct = Some(pct);
        self
    }

    pub fn lerp(&self, to: &VisualState, t: f64) -> VisualState {
        let mix = |a: f64, b: f64| a + (b - a) * t;
        VisualState {
            opacity: mix(self.opacity, to.opacity),
            x: mix(self.x, to.x),
            y: mix(self.y, to.y),
            scale: mix(self.scale, to.scale),
            width_pct: match (self.width_pct, to.width_pct) {
                (Some(a), Some(b)) => Some(mix(a, b)),
                (a, b) => b.or(a),
            },
        }
    }

    pub fn transform(&self) -> String {
        format!("translate({:.2}px, {:.2}px) scale({:.4})", self.x, self.y, self.scale)
    }
}

/// Easing curves. `PowerNOut` is `1 - (1 - t)^(N + 1)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Ease {
    #[default]
    Power1Out,
    Power2Out,
    Power3Out,
}

impl Ease {
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        let inv = 1.0 - t;
        match self {
            Ease::Power1Out => 1.0 - inv * inv,
            Ease::Power2Out => 1.0 - inv.powi(3),
            Ease::Power3Out => 1.0 - inv.powi(4),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn eases_hit_both_ends() {
        for ease in [Ease::Power1Out, Ease::Power2Out, Ease::Power3Out] {
            assert!(ease.apply(0.0).abs() < 1e-9, "{:?}", ease);
            assert!((ease.apply(1.0) - 1.0).abs() < 1e-9, "{:?}", ease);
        }
    }

    #[test]
    fn out_curves_run_ahead_of_linear() {
        assert!(Ease::Power2Out.apply(0.3) > 0.3);
        assert!(Ease::Power3Out.apply(0.3) > Ease::Power2Out.apply(0.3));
    }

    #[test]
    fn lerp_interpolates_every_channel() {
        let from = VisualState::hidden().with_y(40.0).with_scale(0.95).with_width(0.0);
        let to = VisualState::RESTING.with_width(80.0);
        let mid = from.lerp(&to, 0.5);
        assert_eq!(mid.opacity, 0.5);
        assert_eq!(mid.y, 20.0);
        assert!((mid.scale - 0.975).abs() < 1e-9);
        assert_eq!(mid.width_pct, Some(40.0));
        assert_eq!(from.lerp(&to, 1.0), to);
    }

    #[test]
    fn transform_is_css() {
        let state = VisualState::RESTING.with_x(-30.0);
        assert_eq!(state.transform(), "translate(-30.00px, 0.00px) scale(1.0000)");
    }
}
