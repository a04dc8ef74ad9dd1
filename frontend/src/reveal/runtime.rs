use std::cell::{Cell, RefCell};
use std::rc::Rc;

use log::{info, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, Window};

use super::dom::DomSurface;
use super::engine::{RevealEngine, RevealHandle, RevealOptions};
use crate::device::DeviceCapabilities;

thread_local! {
    static RUNTIME: RefCell<Option<Rc<RevealRuntime>>> = RefCell::new(None);
}

/// Owns the reveal engine for the page plus the one scroll/resize listener
/// and the animation frame loop that feed it.
pub struct RevealRuntime {
    window: Window,
    engine: RefCell<RevealEngine<DomSurface>>,
    reduced_motion: bool,
    frame_pending: Cell<bool>,
    on_frame: RefCell<Option<Closure<dyn FnMut(f64)>>>,
    on_viewport_change: RefCell<Option<Closure<dyn FnMut()>>>,
}

/// Sets up the page's reveal runtime. Must run before the first render;
/// later calls are no-ops. Returns whether reveals are available at all.
pub fn install() -> bool {
    RUNTIME.with(|slot| {
        if slot.borrow().is_some() {
            return true;
        }
        let Some(window) = web_sys::window() else {
            warn!("No window, reveal animations disabled");
            return false;
        };

        let reduced_motion = DeviceCapabilities::detect().reduced_motion;
        let runtime = Rc::new(RevealRuntime {
            window,
            engine: RefCell::new(RevealEngine::new()),
            reduced_motion,
            frame_pending: Cell::new(false),
            on_frame: RefCell::new(None),
            on_viewport_change: RefCell::new(None),
        });
        runtime.attach();
        info!("Reveal runtime installed (reduced motion: {})", reduced_motion);
        *slot.borrow_mut() = Some(runtime);
        true
    })
}

/// Runs `f` against the installed runtime, or does nothing when reveals are unavailable.
pub fn with_runtime<R>(f: impl FnOnce(&Rc<RevealRuntime>) -> R) -> Option<R> {
    let runtime = RUNTIME.with(|slot| slot.borrow().clone())?;
    Some(f(&runtime))
}

impl RevealRuntime {
    fn attach(self: &Rc<Self>) {
        let weak = Rc::downgrade(self);
        let on_frame = Closure::wrap(Box::new(move |timestamp: f64| {
            if let Some(runtime) = weak.upgrade() {
                runtime.frame(timestamp);
            }
        }) as Box<dyn FnMut(f64)>);
        *self.on_frame.borrow_mut() = Some(on_frame);

        let weak = Rc::downgrade(self);
        let on_viewport_change = Closure::wrap(Box::new(move || {
            if let Some(runtime) = weak.upgrade() {
                runtime.refresh();
            }
        }) as Box<dyn FnMut()>);
        for event in ["scroll", "resize"] {
            if self
                .window
                .add_event_listener_with_callback(event, on_viewport_change.as_ref().unchecked_ref())
                .is_err()
            {
                warn!("Could not listen for {} events", event);
            }
        }
        *self.on_viewport_change.borrow_mut() = Some(on_viewport_change);
    }

    fn now(&self) -> f64 {
        self.window.performance().map(|p| p.now()).unwrap_or(0.0)
    }

    fn viewport_height(&self) -> f64 {
        self.window
            .inner_height()
            .ok()
            .and_then(|h| h.as_f64())
            .unwrap_or(0.0)
    }

    pub fn register(self: &Rc<Self>, trigger: HtmlElement, targets: Vec<HtmlElement>, options: RevealOptions) -> RevealHandle {
        let options = if self.reduced_motion { options.snapped() } else { options };
        let handle = self.engine.borrow_mut().register(
            DomSurface::new(trigger),
            targets.into_iter().map(DomSurface::new).collect(),
            options,
        );
        self.refresh();
        handle
    }

    pub fn unregister(&self, handle: RevealHandle) {
        self.engine.borrow_mut().unregister(handle);
    }

    pub fn refresh(self: &Rc<Self>) {
        let (height, now) = (self.viewport_height(), self.now());
        self.engine.borrow_mut().refresh(height, now);
        self.schedule_frame();
    }

    fn schedule_frame(&self) {
        if self.frame_pending.get() || !self.engine.borrow().is_animating() {
            return;
        }
        let requested = self
            .on_frame
            .borrow()
            .as_ref()
            .map(|cb| self.window.request_animation_frame(cb.as_ref().unchecked_ref()).is_ok())
            .unwrap_or(false);
        if requested {
            self.frame_pending.set(true);
        } else {
            // No frames: jump to the end so nothing stays half-shown
            self.engine.borrow_mut().tick(f64::MAX);
        }
    }

    fn frame(&self, timestamp: f64) {
        self.frame_pending.set(false);
        let moving = self.engine.borrow_mut().tick(timestamp);
        if moving {
            self.schedule_frame();
        }
    }
}
