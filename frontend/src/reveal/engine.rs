use std::collections::BTreeMap;

use super::style::{Ease, VisualState};

/// What the engine needs from an element.
pub trait RevealSurface {
    /// Distance from the top of the viewport to the top of the element, in px.
    /// `None` once the element is detached from the document.
    fn viewport_top(&self) -> Option<f64>;
    fn apply(&self, state: &VisualState);
    /// Drops every inline override so the stylesheet's resting state shows.
    fn clear(&self);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Policy {
    /// Plays forward the first time the trigger enters, never reverses.
    PlayOnce,
    /// Plays forward on enter, backward when the trigger scrolls back out below the line.
    Toggle,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RevealOptions {
    pub from: VisualState,
    pub to: VisualState,
    pub duration_ms: f64,
    pub delay_ms: f64,
    /// Extra delay per batch index.
    pub stagger_ms: f64,
    /// Trigger line as a fraction of the viewport height, measured from the top.
    pub start: f64,
    pub policy: Policy,
    pub ease: Ease,
    /// Odd batch items start from the mirrored x offset.
    pub mirror_x: bool,
    /// Animate in on the first evaluation even when already past the line.
    pub entrance: bool,
}

impl Default for RevealOptions {
    fn default() -> Self {
        Self {
            from: VisualState::hidden(),
            to: VisualState::RESTING,
            duration_ms: 800.0,
            delay_ms: 0.0,
            stagger_ms: 0.0,
            start: 0.8,
            policy: Policy::Toggle,
            ease: Ease::Power1Out,
            mirror_x: false,
            entrance: false,
        }
    }
}

impl RevealOptions {
    /// Fade in while rising `offset` px, the effect most sections use.
    pub fn fade_up(offset: f64) -> Self {
        Self {
            from: VisualState::hidden().with_y(offset),
            ..Self::default()
        }
    }

    pub fn from_state(mut self, from: VisualState) -> Self {
        self.from = from;
        self
    }

    pub fn to_state(mut self, to: VisualState) -> Self {
        self.to = to;
        self
    }

    pub fn duration(mut self, ms: f64) -> Self {
        self.duration_ms = ms;
        self
    }

    pub fn delay(mut self, ms: f64) -> Self {
        self.delay_ms = ms;
        self
    }

    pub fn stagger(mut self, ms: f64) -> Self {
        self.stagger_ms = ms;
        self
    }

    pub fn start(mut self, fraction: f64) -> Self {
        self.start = fraction;
        self
    }

    pub fn policy(mut self, policy: Policy) -> Self {
        self.policy = policy;
        self
    }

    pub fn ease(mut self, ease: Ease) -> Self {
        self.ease = ease;
        self
    }

    pub fn mirror_x(mut self) -> Self {
        self.mirror_x = true;
        self
    }

    pub fn entrance(mut self) -> Self {
        self.entrance = true;
        self
    }

    /// Same end states, no motion. Used when the user prefers reduced motion.
    pub fn snapped(mut self) -> Self {
        self.duration_ms = 0.0;
        self.delay_ms = 0.0;
        self.stagger_ms = 0.0;
        self
    }

    pub fn offset_for(&self, index: usize) -> f64 {
        self.delay_ms + index as f64 * self.stagger_ms
    }

    fn from_for(&self, index: usize) -> VisualState {
        if self.mirror_x && index % 2 == 1 {
            self.from.with_x(-self.from.x)
        } else {
            self.from
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RevealHandle(u64);

#[cfg(test)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Hidden,
    /// Triggered, waiting out its delay.
    Scheduled,
    Revealing,
    Revealed,
    Hiding,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Motion {
    Still,
    Forward { begins_at: f64, from_progress: f64 },
    Backward { begins_at: f64, from_progress: f64 },
}

struct Target<S> {
    surface: S,
    offset_ms: f64,
    progress: f64,
    motion: Motion,
    started: bool,
}

struct Group<S> {
    trigger: S,
    targets: Vec<Target<S>>,
    options: RevealOptions,
    // None until the first evaluation
    inside: Option<bool>,
    played: bool,
}

impl<S: RevealSurface> Group<S> {
    fn paint(options: &RevealOptions, index: usize, target: &Target<S>) {
        let eased = options.ease.apply(target.progress);
        let state = options.from_for(index).lerp(&options.to, eased);
        target.surface.apply(&state);
    }

    fn play_forward(&mut self, now: f64) {
        for target in self.targets.iter_mut() {
            target.motion = Motion::Forward {
                begins_at: now + target.offset_ms,
                from_progress: target.progress,
            };
            target.started = false;
        }
        self.played = true;
    }

    fn play_backward(&mut self, now: f64) {
        for target in self.targets.iter_mut() {
            target.motion = Motion::Backward {
                begins_at: now,
                from_progress: target.progress,
            };
            target.started = false;
        }
    }

    fn snap(&mut self, progress: f64) {
        for (index, target) in self.targets.iter_mut().enumerate() {
            target.progress = progress;
            target.motion = Motion::Still;
            Self::paint(&self.options, index, target);
        }
    }
}

/// Scroll-triggered reveal bookkeeping, independent of the DOM.
///
/// The engine never reads a clock; callers pass `now` in milliseconds on
/// whatever monotonic clock they use for animation frames.
pub struct RevealEngine<S> {
    next_id: u64,
    groups: BTreeMap<RevealHandle, Group<S>>,
}

impl<S: RevealSurface + PartialEq> Default for RevealEngine<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: RevealSurface + PartialEq> RevealEngine<S> {
    pub fn new() -> Self {
        Self {
            next_id: 1,
            groups: BTreeMap::new(),
        }
    }

    /// Registers `targets` to animate when `trigger` crosses its start line.
    ///
    /// Registering a trigger and targets that are already registered updates
    /// the options in place and hands back the existing handle.
    pub fn register(&mut self, trigger: S, targets: Vec<S>, options: RevealOptions) -> RevealHandle {
        let existing = self.groups.iter_mut().find(|(_, group)| {
            group.trigger == trigger
                && group.targets.len() == targets.len()
                && group
                    .targets
                    .iter()
                    .zip(targets.iter())
                    .all(|(known, candidate)| known.surface == *candidate)
        });
        if let Some((handle, group)) = existing {
            for (index, target) in group.targets.iter_mut().enumerate() {
                target.offset_ms = options.offset_for(index);
            }
            group.options = options;
            return *handle;
        }

        let handle = RevealHandle(self.next_id);
        self.next_id += 1;
        let targets = targets
            .into_iter()
            .enumerate()
            .map(|(index, surface)| Target {
                surface,
                offset_ms: options.offset_for(index),
                progress: 0.0,
                motion: Motion::Still,
                started: false,
            })
            .collect();
        self.groups.insert(
            handle,
            Group {
                trigger,
                targets,
                options,
                inside: None,
                played: false,
            },
        );
        handle
    }

    /// Cancels anything in flight and puts the targets back to their resting
    /// state. Unknown or already removed handles return `false`.
    pub fn unregister(&mut self, handle: RevealHandle) -> bool {
        match self.groups.remove(&handle) {
            Some(group) => {
                for target in group.targets.iter() {
                    target.surface.clear();
                }
                true
            }
            None => false,
        }
    }

    /// Re-checks every trigger against the line and starts or reverses
    /// transitions. Call on scroll, resize and right after registering.
    pub fn refresh(&mut self, viewport_height: f64, now: f64) {
        for group in self.groups.values_mut() {
            let Some(top) = group.trigger.viewport_top() else {
                continue;
            };
            let inside = top <= group.options.start * viewport_height;

            match group.inside {
                None if group.options.entrance => {
                    group.snap(0.0);
                    if inside {
                        group.play_forward(now);
                    }
                }
                None if inside => {
                    group.snap(1.0);
                    group.played = true;
                }
                None => group.snap(0.0),
                Some(was) if was == inside => {}
                Some(_) if inside => {
                    if !(group.options.policy == Policy::PlayOnce && group.played) {
                        group.play_forward(now);
                    }
                }
                Some(_) => {
                    if group.options.policy == Policy::Toggle {
                        group.play_backward(now);
                    }
                }
            }
            group.inside = Some(inside);
        }
    }

    /// Advances every transition to `now`. Returns whether anything is
    /// still moving or waiting to move.
    pub fn tick(&mut self, now: f64) -> bool {
        let mut moving = false;
        for group in self.groups.values_mut() {
            let Group { options, targets, .. } = group;
            for (index, target) in targets.iter_mut().enumerate() {
                let (begins_at, from_progress, direction) = match target.motion {
                    Motion::Still => continue,
                    Motion::Forward { begins_at, from_progress } => (begins_at, from_progress, 1.0),
                    Motion::Backward { begins_at, from_progress } => (begins_at, from_progress, -1.0),
                };
                if now < begins_at {
                    moving = true;
                    continue;
                }
                target.started = true;
                let step = if options.duration_ms <= 0.0 {
                    1.0
                } else {
                    (now - begins_at) / options.duration_ms
                };
                target.progress = (from_progress + direction * step).clamp(0.0, 1.0);
                let done = if direction > 0.0 {
                    target.progress >= 1.0
                } else {
                    target.progress <= 0.0
                };
                if done {
                    target.motion = Motion::Still;
                } else {
                    moving = true;
                }
                Group::paint(options, index, target);
            }
        }
        moving
    }

    pub fn is_animating(&self) -> bool {
        self.groups
            .values()
            .flat_map(|group| group.targets.iter())
            .any(|target| target.motion != Motion::Still)
    }
}

/// Inspection helpers for tests.
#[cfg(test)]
impl<S: RevealSurface + PartialEq> RevealEngine<S> {
    pub fn register_one(&mut self, target: S, options: RevealOptions) -> RevealHandle
    where
        S: Clone,
    {
        self.register(target.clone(), vec![target], options)
    }

    pub fn unregister_all(&mut self) {
        let handles: Vec<RevealHandle> = self.groups.keys().copied().collect();
        for handle in handles {
            self.unregister(handle);
        }
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn phase(&self, handle: RevealHandle, index: usize) -> Option<Phase> {
        let target = self.groups.get(&handle)?.targets.get(index)?;
        Some(match target.motion {
            Motion::Forward { .. } if !target.started => Phase::Scheduled,
            Motion::Forward { .. } => Phase::Revealing,
            Motion::Backward { .. } => Phase::Hiding,
            Motion::Still if target.progress >= 1.0 => Phase::Revealed,
            Motion::Still => Phase::Hidden,
        })
    }

    pub fn progress(&self, handle: RevealHandle, index: usize) -> Option<f64> {
        self.groups
            .get(&handle)?
            .targets
            .get(index)
            .map(|target| target.progress)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    #[derive(Debug, Clone, PartialEq)]
    enum Painted {
        State(VisualState),
        Cleared,
    }

    #[derive(Clone)]
    struct FakeSurface {
        id: u32,
        top: Rc<Cell<Option<f64>>>,
        painted: Rc<RefCell<Vec<Painted>>>,
    }

    impl PartialEq for FakeSurface {
        fn eq(&self, other: &Self) -> bool {
            self.id == other.id
        }
    }

    impl FakeSurface {
        fn at(id: u32, top: f64) -> Self {
            Self {
                id,
                top: Rc::new(Cell::new(Some(top))),
                painted: Rc::new(RefCell::new(Vec::new())),
            }
        }

        fn scroll_to(&self, top: f64) {
            self.top.set(Some(top));
        }

        fn last(&self) -> Option<Painted> {
            self.painted.borrow().last().cloned()
        }

        fn paint_count(&self) -> usize {
            self.painted.borrow().len()
        }
    }

    impl RevealSurface for FakeSurface {
        fn viewport_top(&self) -> Option<f64> {
            self.top.get()
        }

        fn apply(&self, state: &VisualState) {
            self.painted.borrow_mut().push(Painted::State(*state));
        }

        fn clear(&self) {
            self.painted.borrow_mut().push(Painted::Cleared);
        }
    }

    const VIEWPORT: f64 = 1000.0; // trigger line at 800 with the default start

    fn fade() -> RevealOptions {
        RevealOptions::fade_up(50.0).duration(800.0)
    }

    #[test]
    fn above_the_fold_is_revealed_on_first_evaluation() {
        let mut engine = RevealEngine::new();
        let el = FakeSurface::at(1, 100.0);
        let handle = engine.register_one(el.clone(), fade());
        engine.refresh(VIEWPORT, 0.0);

        assert_eq!(engine.phase(handle, 0), Some(Phase::Revealed));
        assert_eq!(el.last(), Some(Painted::State(VisualState::RESTING)));
        assert!(!engine.is_animating());
    }

    #[test]
    fn below_the_fold_starts_hidden_then_plays_on_enter() {
        let mut engine = RevealEngine::new();
        let el = FakeSurface::at(1, 1500.0);
        let handle = engine.register_one(el.clone(), fade());
        engine.refresh(VIEWPORT, 0.0);
        assert_eq!(engine.phase(handle, 0), Some(Phase::Hidden));
        assert_eq!(el.last(), Some(Painted::State(VisualState::hidden().with_y(50.0))));

        el.scroll_to(790.0);
        engine.refresh(VIEWPORT, 1000.0);
        assert_eq!(engine.phase(handle, 0), Some(Phase::Scheduled));

        assert!(engine.tick(1400.0));
        assert_eq!(engine.phase(handle, 0), Some(Phase::Revealing));
        assert_eq!(engine.progress(handle, 0), Some(0.5));

        assert!(!engine.tick(1800.0));
        assert_eq!(engine.phase(handle, 0), Some(Phase::Revealed));
        assert_eq!(el.last(), Some(Painted::State(VisualState::RESTING)));
    }

    #[test]
    fn toggle_reverses_when_scrolled_back_up() {
        let mut engine = RevealEngine::new();
        let el = FakeSurface::at(1, 100.0);
        let handle = engine.register_one(el.clone(), fade());
        engine.refresh(VIEWPORT, 0.0);

        el.scroll_to(900.0);
        engine.refresh(VIEWPORT, 100.0);
        assert_eq!(engine.phase(handle, 0), Some(Phase::Hiding));
        engine.tick(500.0);
        assert_eq!(engine.progress(handle, 0), Some(0.5));
        engine.tick(900.0);
        assert_eq!(engine.phase(handle, 0), Some(Phase::Hidden));
        assert_eq!(el.last(), Some(Painted::State(VisualState::hidden().with_y(50.0))));
    }

    #[test]
    fn play_once_never_reverses_or_replays() {
        let mut engine = RevealEngine::new();
        let el = FakeSurface::at(1, 1500.0);
        let handle = engine.register_one(el.clone(), fade().policy(Policy::PlayOnce));
        engine.refresh(VIEWPORT, 0.0);

        el.scroll_to(500.0);
        engine.refresh(VIEWPORT, 0.0);
        engine.tick(800.0);
        assert_eq!(engine.phase(handle, 0), Some(Phase::Revealed));

        el.scroll_to(1500.0);
        engine.refresh(VIEWPORT, 1000.0);
        assert_eq!(engine.phase(handle, 0), Some(Phase::Revealed));
        assert!(!engine.is_animating());

        el.scroll_to(500.0);
        engine.refresh(VIEWPORT, 2000.0);
        assert!(!engine.is_animating());
    }

    #[test]
    fn unregister_mid_flight_restores_resting_state() {
        let mut engine = RevealEngine::new();
        let el = FakeSurface::at(1, 1500.0);
        let handle = engine.register_one(el.clone(), fade());
        engine.refresh(VIEWPORT, 0.0);
        el.scroll_to(100.0);
        engine.refresh(VIEWPORT, 0.0);
        engine.tick(300.0);
        assert_eq!(engine.phase(handle, 0), Some(Phase::Revealing));

        assert!(engine.unregister(handle));
        assert_eq!(el.last(), Some(Painted::Cleared));
        assert_eq!(engine.phase(handle, 0), None);

        let painted = el.paint_count();
        assert!(!engine.tick(500.0));
        assert!(!engine.unregister(handle));
        assert_eq!(el.paint_count(), painted);
    }

    #[test]
    fn staggered_batch_starts_in_order() {
        let mut engine = RevealEngine::new();
        let grid = FakeSurface::at(0, 1500.0);
        let cards: Vec<FakeSurface> = (1..=4).map(|id| FakeSurface::at(id, 1500.0)).collect();
        let handle = engine.register(grid.clone(), cards.clone(), fade().duration(600.0).stagger(150.0));
        engine.refresh(VIEWPORT, 0.0);

        grid.scroll_to(700.0);
        engine.refresh(VIEWPORT, 1000.0);

        let started = |engine: &RevealEngine<FakeSurface>, i: usize| {
            matches!(engine.phase(handle, i), Some(Phase::Revealing) | Some(Phase::Revealed))
        };
        let mut now = 1000.0;
        while now <= 2200.0 {
            engine.tick(now);
            for i in 1..cards.len() {
                if started(&engine, i) {
                    assert!(started(&engine, i - 1), "card {} started before card {} at {}", i, i - 1, now);
                }
            }
            now += 25.0;
        }
        for i in 0..cards.len() {
            assert_eq!(engine.phase(handle, i), Some(Phase::Revealed));
        }
    }

    #[test]
    fn batch_offsets_follow_index() {
        let options = fade().delay(100.0).stagger(150.0);
        assert_eq!(options.offset_for(0), 100.0);
        assert_eq!(options.offset_for(3), 550.0);
    }

    #[test]
    fn mirrored_batches_alternate_sides() {
        let mut engine = RevealEngine::new();
        let trigger = FakeSurface::at(0, 1500.0);
        let left = FakeSurface::at(1, 1500.0);
        let right = FakeSurface::at(2, 1500.0);
        let from = VisualState::hidden().with_x(-30.0);
        engine.register(trigger, vec![left.clone(), right.clone()], RevealOptions::default().from_state(from).mirror_x());
        engine.refresh(VIEWPORT, 0.0);

        assert_eq!(left.last(), Some(Painted::State(from)));
        assert_eq!(right.last(), Some(Painted::State(from.with_x(30.0))));
    }

    #[test]
    fn detached_trigger_is_ignored() {
        let mut engine = RevealEngine::new();
        let el = FakeSurface::at(1, 100.0);
        el.top.set(None);
        let handle = engine.register_one(el.clone(), fade());
        engine.refresh(VIEWPORT, 0.0);
        engine.tick(1000.0);
        assert_eq!(el.paint_count(), 0);
        assert_eq!(engine.phase(handle, 0), Some(Phase::Hidden));
    }

    #[test]
    fn re_registering_is_idempotent() {
        let mut engine = RevealEngine::new();
        let el = FakeSurface::at(1, 100.0);
        let first = engine.register_one(el.clone(), fade());
        let second = engine.register_one(el.clone(), fade().duration(300.0));
        assert_eq!(first, second);
        assert_eq!(engine.len(), 1);
    }

    #[test]
    fn entrance_plays_even_when_already_visible() {
        let mut engine = RevealEngine::new();
        let title = FakeSurface::at(1, 100.0);
        let handle = engine.register_one(title.clone(), fade().entrance().delay(200.0));
        engine.refresh(VIEWPORT, 0.0);
        assert_eq!(engine.phase(handle, 0), Some(Phase::Scheduled));
        assert_eq!(title.last(), Some(Painted::State(VisualState::hidden().with_y(50.0))));

        engine.tick(1000.0);
        assert_eq!(engine.phase(handle, 0), Some(Phase::Revealed));
    }

    #[test]
    fn zero_duration_snaps_on_next_tick() {
        let mut engine = RevealEngine::new();
        let el = FakeSurface::at(1, 1500.0);
        let handle = engine.register_one(el.clone(), fade().snapped());
        engine.refresh(VIEWPORT, 0.0);
        el.scroll_to(0.0);
        engine.refresh(VIEWPORT, 10.0);
        assert!(!engine.tick(10.0));
        assert_eq!(engine.phase(handle, 0), Some(Phase::Revealed));
    }

    #[test]
    fn unregister_all_clears_every_target() {
        let mut engine = RevealEngine::new();
        let a = FakeSurface::at(1, 100.0);
        let b = FakeSurface::at(2, 1500.0);
        engine.register_one(a.clone(), fade());
        engine.register_one(b.clone(), fade());
        engine.refresh(VIEWPORT, 0.0);
        engine.unregister_all();
        assert!(engine.is_empty());
        assert_eq!(a.last(), Some(Painted::Cleared));
        assert_eq!(b.last(), Some(Painted::Cleared));
    }
}
