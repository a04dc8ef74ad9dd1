pub mod geometry;

use std::cell::{Cell, RefCell};
use std::f64::consts::TAU;
use std::rc::Rc;

use log::{info, warn};
use rand::rngs::SmallRng;
use rand::SeedableRng;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent};
use yew::prelude::*;
use yew_hooks::{use_event_with_window, use_window_size};

use crate::device::DeviceCapabilities;
use geometry::{
    float_offset, particle_field, particle_rotation, sample_shape, shape_rotation, Camera,
    FloatingShape, PointerLight, SceneLayout, Vec3, PARTICLE_SPREAD,
};

const PARTICLE_COLOR: &str = "#ff3399";
const LIGHT_COLOR: &str = "#ff3399";

struct SceneRenderer {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    camera: Camera,
    layout: SceneLayout,
    particles: Vec<Vec3>,
    shapes: Vec<(FloatingShape, Vec<Vec3>)>,
    light: PointerLight,
}

impl SceneRenderer {
    fn new(canvas: HtmlCanvasElement, layout: SceneLayout, seed: u64) -> Option<Self> {
        let ctx = canvas
            .get_context("2d")
            .ok()
            .flatten()?
            .dyn_into::<CanvasRenderingContext2d>()
            .ok()?;
        let mut rng = SmallRng::seed_from_u64(seed);
        let particles = particle_field(layout.particle_count, PARTICLE_SPREAD, &mut rng);
        let shapes = layout
            .shapes
            .iter()
            .map(|shape| (*shape, sample_shape(shape.kind)))
            .collect();
        Some(Self {
            canvas,
            ctx,
            camera: Camera::default(),
            layout,
            particles,
            shapes,
            light: PointerLight::default(),
        })
    }

    /// Keeps the backing store in step with the element size. Returns the
    /// drawable size in device pixels.
    fn fit(&self) -> (f64, f64) {
        let ratio = web_sys::window()
            .map(|w| w.device_pixel_ratio())
            .unwrap_or(1.0)
            .min(2.0);
        let width = (self.canvas.client_width() as f64 * ratio).round() as u32;
        let height = (self.canvas.client_height() as f64 * ratio).round() as u32;
        if self.canvas.width() != width {
            self.canvas.set_width(width);
        }
        if self.canvas.height() != height {
            self.canvas.set_height(height);
        }
        (width as f64, height as f64)
    }

    fn draw(&mut self, t: f64, pointer: Option<(f64, f64)>) {
        let (width, height) = self.fit();
        self.ctx.clear_rect(0.0, 0.0, width, height);
        if width == 0.0 || height == 0.0 {
            return;
        }

        if self.layout.pointer_light {
            if let Some((x, y)) = pointer {
                let (client_w, client_h) = (
                    self.canvas.client_width() as f64,
                    self.canvas.client_height() as f64,
                );
                self.light.follow(PointerLight::target(x, y, client_w, client_h));
            }
            self.draw_light(width, height);
        }

        let (rx, ry) = particle_rotation(t);
        self.ctx.set_fill_style_str(PARTICLE_COLOR);
        for point in &self.particles {
            let Some(p) = self.camera.project(point.rotate_x(rx).rotate_y(ry), width, height) else {
                continue;
            };
            let size = (self.layout.particle_size * p.pixels_per_unit).max(0.5);
            self.ctx.set_global_alpha(0.8);
            self.ctx.fill_rect(p.x - size / 2.0, p.y - size / 2.0, size, size);
        }

        let (sx, sy) = shape_rotation(t);
        for (index, (shape, points)) in self.shapes.iter().enumerate() {
            let bob = float_offset(
                t,
                self.layout.float_speed,
                self.layout.float_intensity,
                index as f64 * 1.3,
            );
            let centre = shape.position.add(Vec3::new(0.0, bob, 0.0));
            self.ctx.set_fill_style_str(shape.color);
            self.ctx.set_global_alpha(0.7);
            for point in points {
                let world = point.scale(shape.scale).rotate_x(sx).rotate_y(sy).add(centre);
                if let Some(p) = self.camera.project(world, width, height) {
                    let size = (0.025 * p.pixels_per_unit).max(1.0);
                    self.ctx.fill_rect(p.x - size / 2.0, p.y - size / 2.0, size, size);
                }
            }
        }
        self.ctx.set_global_alpha(1.0);
    }

    fn draw_light(&self, width: f64, height: f64) {
        let Some(p) = self
            .camera
            .project(Vec3::new(self.light.x, self.light.y, 2.0), width, height)
        else {
            return;
        };
        self.ctx.set_fill_style_str(LIGHT_COLOR);
        for ring in 1..=6 {
            let radius = ring as f64 * 0.25 * p.pixels_per_unit;
            self.ctx.set_global_alpha(0.03);
            self.ctx.begin_path();
            if self.ctx.arc(p.x, p.y, radius, 0.0, TAU).is_ok() {
                self.ctx.fill();
            }
        }
    }
}

/// Drives `renderer` from animation frames until `running` is cleared.
fn start_loop(
    mut renderer: SceneRenderer,
    running: Rc<Cell<bool>>,
    pointer: Rc<RefCell<Option<(f64, f64)>>>,
) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let slot: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));
    let next = slot.clone();
    let frame_window = window.clone();

    *slot.borrow_mut() = Some(Closure::wrap(Box::new(move |timestamp: f64| {
        if !running.get() {
            let _ = next.borrow_mut().take();
            return;
        }
        renderer.draw(timestamp / 1000.0, *pointer.borrow());
        if let Some(callback) = next.borrow().as_ref() {
            let _ = frame_window.request_animation_frame(callback.as_ref().unchecked_ref());
        }
    }) as Box<dyn FnMut(f64)>));

    if let Some(callback) = slot.borrow().as_ref() {
        if window
            .request_animation_frame(callback.as_ref().unchecked_ref())
            .is_err()
        {
            warn!("Animation frames unavailable, scene stays still");
        }
    };
}

/// Particle field and floating shapes behind the hero.
#[function_component(HeroScene)]
pub fn hero_scene() -> Html {
    let canvas_ref = use_node_ref();
    let (window_width, _) = use_window_size();
    let layout = SceneLayout::for_device(&DeviceCapabilities::detect().with_width(window_width));
    let pointer = use_mut_ref(|| None::<(f64, f64)>);

    {
        let pointer = pointer.clone();
        let tracking = layout.pointer_light;
        use_event_with_window("mousemove", move |e: MouseEvent| {
            if tracking {
                *pointer.borrow_mut() = Some((e.client_x() as f64, e.client_y() as f64));
            }
        });
    }

    {
        let canvas_ref = canvas_ref.clone();
        let pointer = pointer.clone();
        use_effect_with_deps(
            move |layout: &SceneLayout| {
                let running = Rc::new(Cell::new(true));
                let seed = web_sys::js_sys::Date::now() as u64;
                match canvas_ref
                    .cast::<HtmlCanvasElement>()
                    .and_then(|canvas| SceneRenderer::new(canvas, layout.clone(), seed))
                {
                    Some(renderer) => {
                        info!(
                            "Scene started with {} particles and {} shapes",
                            layout.particle_count,
                            layout.shapes.len()
                        );
                        start_loop(renderer, running.clone(), pointer);
                    }
                    None => warn!("No 2d canvas context, scene disabled"),
                }
                move || running.set(false)
            },
            layout,
        );
    }

    html! {
        <canvas ref={canvas_ref} class="hero-scene" aria-hidden="true"></canvas>
    }
}
