use std::f64::consts::{PI, TAU};

use rand::Rng;

use crate::device::DeviceCapabilities;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vec3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vec3 {
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    pub fn rotate_x(self, angle: f64) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self::new(self.x, self.y * cos - self.z * sin, self.y * sin + self.z * cos)
    }

    pub fn rotate_y(self, angle: f64) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self::new(self.x * cos + self.z * sin, self.y, -self.x * sin + self.z * cos)
    }

    pub fn scale(self, factor: f64) -> Self {
        Self::new(self.x * factor, self.y * factor, self.z * factor)
    }

    pub fn add(self, other: Vec3) -> Self {
        Self::new(self.x + other.x, self.y + other.y, self.z + other.z)
    }

    pub fn length(self) -> f64 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projected {
    pub x: f64,
    pub y: f64,
    /// Screen pixels covered by one world unit at this depth.
    pub pixels_per_unit: f64,
}

/// Perspective camera on the z axis looking toward -z.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub z: f64,
    pub fov_deg: f64,
}

impl Default for Camera {
    fn default() -> Self {
        Self { z: 5.0, fov_deg: 75.0 }
    }
}

const NEAR: f64 = 0.1;

impl Camera {
    pub fn project(&self, point: Vec3, width: f64, height: f64) -> Option<Projected> {
        let depth = self.z - point.z;
        if depth <= NEAR || width <= 0.0 || height <= 0.0 {
            return None;
        }
        let focal = 1.0 / (self.fov_deg.to_radians() / 2.0).tan();
        let aspect = width / height;
        let ndc_x = point.x * focal / depth / aspect;
        let ndc_y = point.y * focal / depth;
        Some(Projected {
            x: (ndc_x + 1.0) / 2.0 * width,
            y: (1.0 - ndc_y) / 2.0 * height,
            pixels_per_unit: focal / depth * height / 2.0,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeKind {
    Sphere,
    Torus,
    Cube,
}

/// Points on the surface (or edges, for the cube) of a unit-scale shape.
pub fn sample_shape(kind: ShapeKind) -> Vec<Vec3> {
    match kind {
        ShapeKind::Sphere => {
            let radius = 0.5;
            let (rings, segments) = (12, 16);
            let mut points = Vec::with_capacity(rings * segments);
            for ring in 1..rings {
                let theta = PI * ring as f64 / rings as f64;
                for segment in 0..segments {
                    let phi = TAU * segment as f64 / segments as f64;
                    points.push(Vec3::new(
                        radius * theta.sin() * phi.cos(),
                        radius * theta.cos(),
                        radius * theta.sin() * phi.sin(),
                    ));
                }
            }
            points.push(Vec3::new(0.0, radius, 0.0));
            points.push(Vec3::new(0.0, -radius, 0.0));
            points
        }
        ShapeKind::Torus => {
            let (major, minor) = (0.4, 0.15);
            let (rings, tube) = (24, 10);
            let mut points = Vec::with_capacity(rings * tube);
            for ring in 0..rings {
                let u = TAU * ring as f64 / rings as f64;
                for step in 0..tube {
                    let v = TAU * step as f64 / tube as f64;
                    let r = major + minor * v.cos();
                    points.push(Vec3::new(r * u.cos(), r * u.sin(), minor * v.sin()));
                }
            }
            points
        }
        ShapeKind::Cube => {
            let half = 0.3;
            let corners: Vec<Vec3> = (0..8)
                .map(|i| {
                    let pick = |bit: usize| if i & bit == 0 { -half } else { half };
                    Vec3::new(pick(1), pick(2), pick(4))
                })
                .collect();
            let per_edge = 6;
            let mut points = Vec::new();
            for a in 0..8usize {
                for bit in [1usize, 2, 4] {
                    let b = a | bit;
                    if b == a {
                        continue;
                    }
                    let (from, to) = (corners[a], corners[b]);
                    for step in 0..=per_edge {
                        let t = step as f64 / per_edge as f64;
                        points.push(Vec3::new(
                            from.x + (to.x - from.x) * t,
                            from.y + (to.y - from.y) * t,
                            from.z + (to.z - from.z) * t,
                        ));
                    }
                }
            }
            points
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FloatingShape {
    pub kind: ShapeKind,
    pub position: Vec3,
    pub color: &'static str,
    pub scale: f64,
}

const DESKTOP_SHAPES: [FloatingShape; 5] = [
    FloatingShape { kind: ShapeKind::Sphere, position: Vec3::new(-3.0, 2.0, -2.0), color: "#ff3399", scale: 1.0 },
    FloatingShape { kind: ShapeKind::Torus, position: Vec3::new(3.0, -1.0, -3.0), color: "#00d4ff", scale: 1.0 },
    FloatingShape { kind: ShapeKind::Cube, position: Vec3::new(-2.0, -2.0, -4.0), color: "#9966ff", scale: 1.0 },
    FloatingShape { kind: ShapeKind::Sphere, position: Vec3::new(2.0, 2.0, -5.0), color: "#00ff88", scale: 0.8 },
    FloatingShape { kind: ShapeKind::Torus, position: Vec3::new(0.0, -3.0, -3.0), color: "#ff9900", scale: 0.7 },
];

/// The large dim sphere behind everything else.
pub const CORE_SPHERE: FloatingShape = FloatingShape {
    kind: ShapeKind::Sphere,
    position: Vec3::new(0.0, 0.0, -6.0),
    color: "#5a1a48",
    scale: 3.0,
};

pub const PARTICLE_COUNT: usize = 1000;
pub const PARTICLE_SPREAD: f64 = 15.0;

/// How much of the scene a device gets.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneLayout {
    pub particle_count: usize,
    pub particle_size: f64, // world units
    pub shapes: Vec<FloatingShape>,
    pub float_speed: f64,
    pub float_intensity: f64,
    pub pointer_light: bool,
}

impl SceneLayout {
    pub fn for_device(device: &DeviceCapabilities) -> Self {
        if device.is_mobile() {
            let mut shapes: Vec<FloatingShape> = DESKTOP_SHAPES[..2].to_vec();
            for shape in shapes.iter_mut() {
                shape.scale *= 0.7;
            }
            shapes.push(CORE_SPHERE);
            SceneLayout {
                particle_count: 400 / 3,
                particle_size: 0.03,
                shapes,
                float_speed: 1.0,
                float_intensity: 1.0,
                pointer_light: false,
            }
        } else {
            let mut shapes = DESKTOP_SHAPES.to_vec();
            shapes.push(CORE_SPHERE);
            SceneLayout {
                particle_count: PARTICLE_COUNT,
                particle_size: 0.02,
                shapes,
                float_speed: 2.0,
                float_intensity: 2.0,
                pointer_light: device.pointer_effects_enabled(),
            }
        }
    }
}

/// Uniform points in a cube of side `spread` centred on the origin.
pub fn particle_field<R: Rng>(count: usize, spread: f64, rng: &mut R) -> Vec<Vec3> {
    (0..count)
        .map(|_| {
            Vec3::new(
                (rng.gen::<f64>() - 0.5) * spread,
                (rng.gen::<f64>() - 0.5) * spread,
                (rng.gen::<f64>() - 0.5) * spread,
            )
        })
        .collect()
}

/// (x, y) rotation of the particle field at `t` seconds.
pub fn particle_rotation(t: f64) -> (f64, f64) {
    ((t * 0.01).sin() * 0.1, t * 0.02)
}

/// (x, y) rotation of a floating shape at `t` seconds.
pub fn shape_rotation(t: f64) -> (f64, f64) {
    (t * 0.2, t * 0.3)
}

/// Vertical bob of a floating shape; `phase` keeps shapes out of sync.
pub fn float_offset(t: f64, speed: f64, intensity: f64, phase: f64) -> f64 {
    (t * speed * 0.5 + phase).sin() * intensity * 0.1
}

/// A light that trails the pointer.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PointerLight {
    pub x: f64,
    pub y: f64,
}

impl PointerLight {
    pub const FOLLOW: f64 = 0.1;
    pub const RANGE: f64 = 5.0;

    /// Maps a pointer position in client px to world units in `[-RANGE, RANGE]`.
    pub fn target(client_x: f64, client_y: f64, width: f64, height: f64) -> (f64, f64) {
        if width <= 0.0 || height <= 0.0 {
            return (0.0, 0.0);
        }
        let x = (client_x / width) * 2.0 - 1.0;
        let y = -(client_y / height) * 2.0 + 1.0;
        (x * Self::RANGE, y * Self::RANGE)
    }

    pub fn follow(&mut self, target: (f64, f64)) {
        self.x += (target.0 - self.x) * Self::FOLLOW;
        self.y += (target.1 - self.y) * Self::FOLLOW;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    fn device(width: f64, touch: bool) -> DeviceCapabilities {
        DeviceCapabilities {
            touch,
            reduced_motion: false,
            viewport_width: width,
        }
    }

    #[test]
    fn origin_projects_to_screen_centre() {
        let p = Camera::default().project(Vec3::new(0.0, 0.0, 0.0), 800.0, 600.0).unwrap();
        assert!((p.x - 400.0).abs() < 1e-9);
        assert!((p.y - 300.0).abs() < 1e-9);
    }

    #[test]
    fn points_behind_the_camera_are_dropped() {
        let camera = Camera::default();
        assert!(camera.project(Vec3::new(0.0, 0.0, 5.0), 800.0, 600.0).is_none());
        assert!(camera.project(Vec3::new(0.0, 0.0, 9.0), 800.0, 600.0).is_none());
        assert!(camera.project(Vec3::new(0.0, 0.0, 0.0), 0.0, 600.0).is_none());
    }

    #[test]
    fn farther_points_are_smaller_and_up_is_up() {
        let camera = Camera::default();
        let near = camera.project(Vec3::new(0.0, 1.0, 0.0), 800.0, 600.0).unwrap();
        let far = camera.project(Vec3::new(0.0, 1.0, -5.0), 800.0, 600.0).unwrap();
        assert!(near.pixels_per_unit > far.pixels_per_unit);
        assert!(near.y < 300.0);
    }

    #[test]
    fn desktop_and_mobile_layouts() {
        let desktop = SceneLayout::for_device(&device(1440.0, false));
        assert_eq!(desktop.particle_count, 1000);
        assert_eq!(desktop.shapes.len(), 6);
        assert!(desktop.pointer_light);

        let mobile = SceneLayout::for_device(&device(390.0, true));
        assert_eq!(mobile.particle_count, 133);
        assert_eq!(mobile.shapes.len(), 3);
        assert!((mobile.shapes[0].scale - 0.7).abs() < 1e-9);
        assert!(!mobile.pointer_light);
    }

    #[test]
    fn touch_desktop_has_no_pointer_light() {
        assert!(!SceneLayout::for_device(&device(1440.0, true)).pointer_light);
    }

    #[test]
    fn particles_stay_inside_the_cube() {
        let mut rng = SmallRng::seed_from_u64(7);
        let field = particle_field(500, PARTICLE_SPREAD, &mut rng);
        assert_eq!(field.len(), 500);
        let half = PARTICLE_SPREAD / 2.0;
        assert!(field
            .iter()
            .all(|p| p.x.abs() <= half && p.y.abs() <= half && p.z.abs() <= half));
    }

    #[test]
    fn sphere_points_sit_on_the_radius() {
        let points = sample_shape(ShapeKind::Sphere);
        assert!(!points.is_empty());
        assert!(points.iter().all(|p| (p.length() - 0.5).abs() < 1e-9));
    }

    #[test]
    fn torus_points_sit_on_the_tube() {
        for p in sample_shape(ShapeKind::Torus) {
            let ring = (p.x * p.x + p.y * p.y).sqrt() - 0.4;
            let tube = (ring * ring + p.z * p.z).sqrt();
            assert!((tube - 0.15).abs() < 1e-9);
        }
    }

    #[test]
    fn cube_covers_twelve_edges() {
        assert_eq!(sample_shape(ShapeKind::Cube).len(), 12 * 7);
    }

    #[test]
    fn rotation_preserves_length() {
        let p = Vec3::new(1.0, 2.0, 3.0);
        let r = p.rotate_x(0.7).rotate_y(1.3);
        assert!((p.length() - r.length()).abs() < 1e-9);
    }

    #[test]
    fn pointer_light_eases_toward_target() {
        let target = PointerLight::target(800.0, 0.0, 800.0, 600.0);
        assert_eq!(target, (5.0, 5.0));
        let mut light = PointerLight::default();
        light.follow(target);
        assert!((light.x - 0.5).abs() < 1e-9);
        for _ in 0..200 {
            light.follow(target);
        }
        assert!((light.x - 5.0).abs() < 1e-6);
        assert!((light.y - 5.0).abs() < 1e-6);
    }
}
