//! The effect controller: per-element state, the per-move algorithm, and
//! the binding lifecycle.
//!
//! Everything here is host-agnostic. A browser supplies a [`Host`] (pointer
//! events, element discovery, touch detection) and a [`MagnetTarget`] per
//! element (layout reads, class and transform writes).

use std::cell::RefCell;
use std::rc::Rc;

use glam::Vec2;
use smallvec::SmallVec;

use crate::config::{ElementOverrides, MagnetConfig, MagnetHooks, MagnetOptions};
use crate::constants::{MAGNETIZED_CLASS, MARKER_ATTR};
use crate::geometry::Rect;
use crate::smoothing::SmoothedPosition;

/// Element-side collaborator: layout reads and visual mutations.
pub trait MagnetTarget {
    /// Live layout box in viewport coordinates.
    fn bounding_rect(&self) -> Rect;
    fn attribute(&self, name: &str) -> Option<String>;
    fn add_class(&self, class: &str);
    fn remove_class(&self, class: &str);
    fn set_translation(&self, offset: Vec2);
    /// Drop the applied translation, leaving the element's own styling.
    fn clear_translation(&self);
}

/// Environment-side collaborator: pointer subscription, discovery and
/// capability queries.
pub trait Host {
    type Target: MagnetTarget + Clone + PartialEq + 'static;
    type Listener;

    /// Point-in-time query; callers do not re-evaluate it later.
    fn is_touch_primary(&self) -> bool;
    /// All elements carrying `marker`, in document order.
    fn discover(&self, marker: &str) -> Vec<Self::Target>;
    /// Subscribe `handler` to pointer moves at document scope. The handler
    /// receives viewport coordinates.
    fn listen(&self, handler: Box<dyn FnMut(Vec2)>) -> Self::Listener;
    fn unlisten(&self, listener: Self::Listener);

    /// A bound controller is being dropped without `destroy`. Its
    /// subscription must keep running, so by default the handle is leaked.
    fn abandon(&self, listener: Self::Listener) {
        std::mem::forget(listener);
    }
}

/// Values handed to hooks: the desired offset before smoothing and the
/// proximity used for the range test.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct MagneticSample {
    pub delta_x: f32,
    pub delta_y: f32,
    pub distance: f32,
}

/// Footprint of the trigger zone.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct MagnetizedArea {
    pub width: f32,
    pub height: f32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Crossing {
    Enter,
    Exit,
}

/// Result of one pointer move.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MoveOutcome {
    pub sample: MagneticSample,
    pub in_range: bool,
    pub crossing: Option<Crossing>,
    /// Offset written to the element after smoothing and clamping.
    pub offset: Vec2,
}

impl MagnetHooks {
    /// Fire hooks for `outcome`: enter before update, exit alone.
    pub fn fire(&self, outcome: &MoveOutcome) {
        if outcome.crossing == Some(Crossing::Enter) {
            self.enter(&outcome.sample);
        }
        if outcome.in_range {
            self.update(&outcome.sample);
        }
        if outcome.crossing == Some(Crossing::Exit) {
            self.exit(&outcome.sample);
        }
    }
}

/// Per-element effect state.
pub struct Magnet<T> {
    target: T,
    config: MagnetConfig,
    hooks: MagnetHooks,
    position: SmoothedPosition,
    engaged: bool,
}

impl<T: MagnetTarget> Magnet<T> {
    pub fn new(target: T, config: MagnetConfig, hooks: MagnetHooks) -> Self {
        Self {
            target,
            config,
            hooks,
            position: SmoothedPosition::default(),
            engaged: false,
        }
    }

    pub fn target(&self) -> &T {
        &self.target
    }

    pub fn config(&self) -> &MagnetConfig {
        &self.config
    }

    pub fn hooks(&self) -> &MagnetHooks {
        &self.hooks
    }

    pub fn position(&self) -> Vec2 {
        self.position.get()
    }

    pub fn is_engaged(&self) -> bool {
        self.engaged
    }

    /// Desired pull and proximity for a pointer position, without touching
    /// any state.
    pub fn sample(&self, rect: &Rect, pointer: Vec2) -> MagneticSample {
        let delta = (pointer - rect.center()) * self.config.attraction;
        MagneticSample {
            delta_x: delta.x,
            delta_y: delta.y,
            distance: self.config.metric.proximity(rect, pointer),
        }
    }

    /// Advance one pointer move: smooth, clamp, write the transform and
    /// toggle the active class on crossings. Hooks are left to the caller
    /// so they can run without this state borrowed.
    pub fn magnetize(&mut self, pointer: Vec2) -> MoveOutcome {
        let rect = self.target.bounding_rect();
        let sample = self.sample(&rect, pointer);
        let in_range = sample.distance < self.config.trigger_distance;

        let goal = if in_range {
            Vec2::new(sample.delta_x, sample.delta_y)
        } else {
            Vec2::ZERO
        };
        self.position.approach(goal, self.config.smoothing);
        let offset = self
            .position
            .clamp(self.config.max_offset_x, self.config.max_offset_y);
        self.target.set_translation(offset);

        let crossing = match (in_range, self.engaged) {
            (true, false) => {
                self.engaged = true;
                self.target.add_class(&self.config.active_class);
                log::debug!("[magnet] enter d={:.1}", sample.distance);
                Some(Crossing::Enter)
            }
            (false, true) => {
                self.engaged = false;
                self.target.remove_class(&self.config.active_class);
                log::debug!("[magnet] exit d={:.1}", sample.distance);
                Some(Crossing::Exit)
            }
            _ => None,
        };

        MoveOutcome {
            sample,
            in_range,
            crossing,
            offset,
        }
    }

    pub fn magnetized_area(&self) -> MagnetizedArea {
        let rect = self.target.bounding_rect();
        let pad = 2.0 * self.config.trigger_distance;
        MagnetizedArea {
            width: rect.width + pad,
            height: rect.height + pad,
        }
    }

    /// Undo every visual change and return to the origin, disengaged.
    pub fn release(&mut self) {
        self.target.remove_class(MAGNETIZED_CLASS);
        self.target.remove_class(&self.config.active_class);
        self.target.clear_translation();
        self.engaged = false;
        self.position.reset();
    }
}

/// Identity set of bound elements, owned by a [`Magnetizer`] and shared with
/// the controllers it produced.
#[derive(Debug)]
pub struct Registry<T> {
    bound: SmallVec<[T; 8]>,
}

impl<T> Default for Registry<T> {
    fn default() -> Self {
        Self {
            bound: SmallVec::new(),
        }
    }
}

impl<T: PartialEq> Registry<T> {
    pub fn contains(&self, target: &T) -> bool {
        self.bound.iter().any(|t| t == target)
    }

    /// Returns false if `target` was already present.
    pub fn insert(&mut self, target: T) -> bool {
        if self.contains(&target) {
            return false;
        }
        self.bound.push(target);
        true
    }

    pub fn remove(&mut self, target: &T) -> bool {
        match self.bound.iter().position(|t| t == target) {
            Some(i) => {
                self.bound.swap_remove(i);
                true
            }
            None => false,
        }
    }

    pub fn len(&self) -> usize {
        self.bound.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bound.is_empty()
    }
}

/// Registry handle shared by every scope that binds into the same document.
pub type SharedRegistry<T> = Rc<RefCell<Registry<T>>>;

/// Binds elements through a registry that keeps binding idempotent.
pub struct Magnetizer<H: Host> {
    host: Rc<H>,
    registry: SharedRegistry<H::Target>,
}

impl<H: Host> Magnetizer<H> {
    /// Scope with a registry of its own.
    pub fn new(host: H) -> Self {
        Self::with_registry(host, Rc::new(RefCell::new(Registry::default())))
    }

    /// Scope that shares `registry` with other scopes, so an element bound
    /// through any of them is never bound again through another.
    pub fn with_registry(host: H, registry: SharedRegistry<H::Target>) -> Self {
        Self {
            host: Rc::new(host),
            registry,
        }
    }

    pub fn registry(&self) -> SharedRegistry<H::Target> {
        self.registry.clone()
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn is_bound(&self, target: &H::Target) -> bool {
        self.registry.borrow().contains(target)
    }

    pub fn bound_count(&self) -> usize {
        self.registry.borrow().len()
    }

    /// Attach the effect to one element.
    ///
    /// Returns `None` without side effects when the element is already
    /// bound, and `None` after undoing its registration when touch
    /// suppression applies.
    pub fn bind(&self, target: H::Target, options: &MagnetOptions) -> Option<MagneticButton<H>> {
        if !self.registry.borrow_mut().insert(target.clone()) {
            log::debug!("[magnet] already bound; skipping");
            return None;
        }

        let overrides = ElementOverrides::read(&target);
        let mut config = MagnetConfig::resolve(&overrides, options);
        if let Err(e) = config.validate() {
            log::warn!("[magnet] {}; using sanitized settings", e);
            config = config.sanitized();
        }

        if config.disable_on_touch && self.host.is_touch_primary() {
            self.registry.borrow_mut().remove(&target);
            log::debug!("[magnet] touch-primary device; effect disabled");
            return None;
        }

        let magnet = Rc::new(RefCell::new(Magnet::new(
            target.clone(),
            config,
            options.hooks.clone(),
        )));
        let state = magnet.clone();
        let listener = self.host.listen(Box::new(move |pointer: Vec2| {
            let (outcome, hooks) = {
                let mut m = state.borrow_mut();
                (m.magnetize(pointer), m.hooks().clone())
            };
            hooks.fire(&outcome);
        }));
        target.add_class(MAGNETIZED_CLASS);
        log::debug!("[magnet] bound ({} total)", self.bound_count());

        Some(MagneticButton {
            host: self.host.clone(),
            registry: self.registry.clone(),
            magnet: Some(magnet),
            listener: Some(listener),
        })
    }

    /// Bind every marked element that is not bound yet, sharing `options`.
    pub fn bind_all(&self, options: &MagnetOptions) -> Vec<MagneticButton<H>> {
        let found = self.host.discover(MARKER_ATTR);
        let total = found.len();
        let bound: Vec<_> = found
            .into_iter()
            .filter_map(|target| self.bind(target, options))
            .collect();
        log::info!("[magnet] bound {} of {} marked elements", bound.len(), total);
        bound
    }
}

/// Handle to one bound element.
///
/// Dropping the handle does not unbind; call [`MagneticButton::destroy`].
pub struct MagneticButton<H: Host> {
    host: Rc<H>,
    registry: SharedRegistry<H::Target>,
    magnet: Option<Rc<RefCell<Magnet<H::Target>>>>,
    listener: Option<H::Listener>,
}

impl<H: Host> MagneticButton<H> {
    pub fn is_bound(&self) -> bool {
        self.magnet.is_some()
    }

    pub fn is_engaged(&self) -> bool {
        self.magnet
            .as_ref()
            .map(|m| m.borrow().is_engaged())
            .unwrap_or(false)
    }

    /// Current smoothed offset; the origin once destroyed.
    pub fn position(&self) -> Vec2 {
        self.magnet
            .as_ref()
            .map(|m| m.borrow().position())
            .unwrap_or(Vec2::ZERO)
    }

    pub fn config(&self) -> Option<MagnetConfig> {
        self.magnet.as_ref().map(|m| m.borrow().config().clone())
    }

    /// Trigger-zone footprint, zero-area once destroyed.
    pub fn magnetized_area(&self) -> MagnetizedArea {
        self.magnet
            .as_ref()
            .map(|m| m.borrow().magnetized_area())
            .unwrap_or_default()
    }

    /// Detach the listener, undo all visual changes and free the element
    /// for re-binding. Safe to call repeatedly.
    pub fn destroy(&mut self) {
        if let Some(listener) = self.listener.take() {
            self.host.unlisten(listener);
        }
        if let Some(magnet) = self.magnet.take() {
            let mut m = magnet.borrow_mut();
            m.release();
            self.registry.borrow_mut().remove(m.target());
            log::debug!("[magnet] destroyed");
        }
    }
}

impl<H: Host> Drop for MagneticButton<H> {
    fn drop(&mut self) {
        if let Some(listener) = self.listener.take() {
            self.host.abandon(listener);
        }
    }
}
