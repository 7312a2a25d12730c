//! Effect configuration and how it is layered.
//!
//! A controller's settings come from three places, lowest priority first:
//! the built-in defaults, numeric override attributes on the element, and
//! the explicit [`MagnetOptions`] passed to `bind`. An option left as `None`
//! never overwrites a lower layer.

use std::fmt;
use std::rc::Rc;

use thiserror::Error;

use crate::constants::*;
use crate::controller::{MagnetTarget, MagneticSample};
use crate::geometry::DistanceMetric;

pub type Hook = Rc<dyn Fn(&MagneticSample)>;

/// Notification hooks fired from the pointer-move handler.
#[derive(Clone, Default)]
pub struct MagnetHooks {
    pub on_enter: Option<Hook>,
    pub on_exit: Option<Hook>,
    /// Fired on every in-range move, including the one that entered.
    pub on_update: Option<Hook>,
}

impl MagnetHooks {
    #[inline]
    pub(crate) fn enter(&self, sample: &MagneticSample) {
        if let Some(f) = &self.on_enter {
            f(sample);
        }
    }

    #[inline]
    pub(crate) fn exit(&self, sample: &MagneticSample) {
        if let Some(f) = &self.on_exit {
            f(sample);
        }
    }

    #[inline]
    pub(crate) fn update(&self, sample: &MagneticSample) {
        if let Some(f) = &self.on_update {
            f(sample);
        }
    }
}

impl fmt::Debug for MagnetHooks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MagnetHooks")
            .field("on_enter", &self.on_enter.is_some())
            .field("on_exit", &self.on_exit.is_some())
            .field("on_update", &self.on_update.is_some())
            .finish()
    }
}

/// Resolved settings for one bound element.
#[derive(Clone, Debug, PartialEq)]
pub struct MagnetConfig {
    pub active_class: String,
    /// Share of the raw pointer offset the element is pulled by. Higher
    /// values pull harder: 1.0 follows the pointer fully, 0.0 never moves.
    pub attraction: f32,
    pub trigger_distance: f32,
    /// Lerp weight applied on each move. Higher values settle faster.
    pub smoothing: f32,
    pub disable_on_touch: bool,
    pub max_offset_x: Option<f32>,
    pub max_offset_y: Option<f32>,
    pub metric: DistanceMetric,
}

impl Default for MagnetConfig {
    fn default() -> Self {
        Self {
            active_class: DEFAULT_ACTIVE_CLASS.to_string(),
            attraction: DEFAULT_ATTRACTION,
            trigger_distance: DEFAULT_TRIGGER_DISTANCE,
            smoothing: DEFAULT_SMOOTHING,
            disable_on_touch: DEFAULT_DISABLE_ON_TOUCH,
            max_offset_x: None,
            max_offset_y: None,
            metric: DistanceMetric::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("attraction must be in [0, 1], got {0}")]
    InvalidAttraction(f32),
    #[error("smoothing must be in [0, 1], got {0}")]
    InvalidSmoothing(f32),
    #[error("trigger distance must be finite and non-negative, got {0}")]
    InvalidTriggerDistance(f32),
    #[error("max offset must be non-negative, got {0}")]
    InvalidMaxOffset(f32),
    #[error("active class must not be empty")]
    EmptyActiveClass,
}

#[inline]
fn unit(v: f32) -> bool {
    (0.0..=1.0).contains(&v)
}

impl MagnetConfig {
    /// Layer element overrides and explicit options over the defaults.
    pub fn resolve(overrides: &ElementOverrides, options: &MagnetOptions) -> Self {
        let mut cfg = Self::default();
        overrides.apply(&mut cfg);
        options.apply(&mut cfg);
        cfg
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !unit(self.attraction) {
            return Err(ConfigError::InvalidAttraction(self.attraction));
        }
        if !unit(self.smoothing) {
            return Err(ConfigError::InvalidSmoothing(self.smoothing));
        }
        if !self.trigger_distance.is_finite() || self.trigger_distance < 0.0 {
            return Err(ConfigError::InvalidTriggerDistance(self.trigger_distance));
        }
        for m in [self.max_offset_x, self.max_offset_y].into_iter().flatten() {
            if m.is_nan() || m < 0.0 {
                return Err(ConfigError::InvalidMaxOffset(m));
            }
        }
        if self.active_class.trim().is_empty() {
            return Err(ConfigError::EmptyActiveClass);
        }
        Ok(())
    }

    /// Pull every field back into its valid range.
    pub fn sanitized(mut self) -> Self {
        let unit_or = |v: f32, fallback: f32| if v.is_nan() { fallback } else { v.clamp(0.0, 1.0) };
        self.attraction = unit_or(self.attraction, DEFAULT_ATTRACTION);
        self.smoothing = unit_or(self.smoothing, DEFAULT_SMOOTHING);
        if !self.trigger_distance.is_finite() {
            self.trigger_distance = DEFAULT_TRIGGER_DISTANCE;
        }
        self.trigger_distance = self.trigger_distance.max(0.0);
        // a negative bound reads as "no movement on this axis" rather than unbounded
        self.max_offset_x = self.max_offset_x.map(|m| if m.is_nan() { 0.0 } else { m.max(0.0) });
        self.max_offset_y = self.max_offset_y.map(|m| if m.is_nan() { 0.0 } else { m.max(0.0) });
        if self.active_class.trim().is_empty() {
            self.active_class = DEFAULT_ACTIVE_CLASS.to_string();
        }
        self
    }
}

/// Caller-supplied settings. `None` means "not specified".
#[derive(Clone, Debug, Default)]
pub struct MagnetOptions {
    pub active_class: Option<String>,
    pub attraction: Option<f32>,
    pub trigger_distance: Option<f32>,
    pub smoothing: Option<f32>,
    pub disable_on_touch: Option<bool>,
    pub max_offset_x: Option<f32>,
    pub max_offset_y: Option<f32>,
    pub metric: Option<DistanceMetric>,
    pub hooks: MagnetHooks,
}

impl MagnetOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_active_class(mut self, class: impl Into<String>) -> Self {
        self.active_class = Some(class.into());
        self
    }

    pub fn with_attraction(mut self, attraction: f32) -> Self {
        self.attraction = Some(attraction);
        self
    }

    pub fn with_trigger_distance(mut self, px: f32) -> Self {
        self.trigger_distance = Some(px);
        self
    }

    pub fn with_smoothing(mut self, smoothing: f32) -> Self {
        self.smoothing = Some(smoothing);
        self
    }

    pub fn with_disable_on_touch(mut self, disable: bool) -> Self {
        self.disable_on_touch = Some(disable);
        self
    }

    pub fn with_max_offset(mut self, x: Option<f32>, y: Option<f32>) -> Self {
        self.max_offset_x = x;
        self.max_offset_y = y;
        self
    }

    pub fn with_metric(mut self, metric: DistanceMetric) -> Self {
        self.metric = Some(metric);
        self
    }

    pub fn on_enter(mut self, f: impl Fn(&MagneticSample) + 'static) -> Self {
        self.hooks.on_enter = Some(Rc::new(f));
        self
    }

    pub fn on_exit(mut self, f: impl Fn(&MagneticSample) + 'static) -> Self {
        self.hooks.on_exit = Some(Rc::new(f));
        self
    }

    pub fn on_update(mut self, f: impl Fn(&MagneticSample) + 'static) -> Self {
        self.hooks.on_update = Some(Rc::new(f));
        self
    }

    fn apply(&self, cfg: &mut MagnetConfig) {
        if let Some(c) = &self.active_class {
            cfg.active_class = c.clone();
        }
        if let Some(v) = self.attraction {
            cfg.attraction = v;
        }
        if let Some(v) = self.trigger_distance {
            cfg.trigger_distance = v;
        }
        if let Some(v) = self.smoothing {
            cfg.smoothing = v;
        }
        if let Some(v) = self.disable_on_touch {
            cfg.disable_on_touch = v;
        }
        if self.max_offset_x.is_some() {
            cfg.max_offset_x = self.max_offset_x;
        }
        if self.max_offset_y.is_some() {
            cfg.max_offset_y = self.max_offset_y;
        }
        if let Some(m) = self.metric {
            cfg.metric = m;
        }
    }
}

/// Numeric settings read from an element's attributes at bind time.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ElementOverrides {
    pub trigger_distance: Option<f32>,
    pub attraction: Option<f32>,
    pub smoothing: Option<f32>,
    pub max_offset_x: Option<f32>,
    pub max_offset_y: Option<f32>,
}

impl ElementOverrides {
    pub fn read<T: MagnetTarget + ?Sized>(target: &T) -> Self {
        let num = |name: &str| target.attribute(name).as_deref().and_then(parse_float);
        Self {
            trigger_distance: num(DISTANCE_ATTR),
            attraction: num(ATTRACTION_ATTR),
            smoothing: num(FRACTION_ATTR).or_else(|| num(SPEED_ATTR)),
            max_offset_x: num(MAX_OFFSET_X_ATTR),
            max_offset_y: num(MAX_OFFSET_Y_ATTR),
        }
    }

    fn apply(&self, cfg: &mut MagnetConfig) {
        if let Some(v) = self.trigger_distance {
            cfg.trigger_distance = v;
        }
        if let Some(v) = self.attraction {
            cfg.attraction = v;
        }
        if let Some(v) = self.smoothing {
            cfg.smoothing = v;
        }
        if self.max_offset_x.is_some() {
            cfg.max_offset_x = self.max_offset_x;
        }
        if self.max_offset_y.is_some() {
            cfg.max_offset_y = self.max_offset_y;
        }
    }
}

/// Max-offset value coming from JS. `Infinity` is the JS spelling of "no
/// bound" and `NaN` carries no value, so both leave the bound unspecified.
pub fn max_offset_from_js(v: f64) -> Option<f32> {
    Some(v as f32).filter(|m| m.is_finite())
}

/// Lenient number parsing in the manner of JavaScript's `parseFloat`: the
/// longest leading decimal literal wins (`"150px"` is 150) and anything
/// without one, or anything non-finite, is `None`.
pub fn parse_float(s: &str) -> Option<f32> {
    let s = s.trim_start();
    let b = s.as_bytes();
    let mut i = 0;
    if i < b.len() && (b[i] == b'+' || b[i] == b'-') {
        i += 1;
    }
    let int_start = i;
    while i < b.len() && b[i].is_ascii_digit() {
        i += 1;
    }
    let mut digits = i - int_start;
    if i < b.len() && b[i] == b'.' {
        let frac_start = i + 1;
        let mut j = frac_start;
        while j < b.len() && b[j].is_ascii_digit() {
            j += 1;
        }
        digits += j - frac_start;
        if digits > 0 {
            i = j;
        }
    }
    if digits == 0 {
        return None;
    }
    if i < b.len() && (b[i] == b'e' || b[i] == b'E') {
        let mut j = i + 1;
        if j < b.len() && (b[j] == b'+' || b[j] == b'-') {
            j += 1;
        }
        let exp_start = j;
        while j < b.len() && b[j].is_ascii_digit() {
            j += 1;
        }
        if j > exp_start {
            i = j;
        }
    }
    s[..i].parse::<f32>().ok().filter(|v| v.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_float_leniency() {
        assert_eq!(parse_float("50"), Some(50.0));
        assert_eq!(parse_float("  0.8"), Some(0.8));
        assert_eq!(parse_float("150px"), Some(150.0));
        assert_eq!(parse_float(".5"), Some(0.5));
        assert_eq!(parse_float("-2.5e1x"), Some(-25.0));
        assert_eq!(parse_float("3e"), Some(3.0));
        assert_eq!(parse_float("7."), Some(7.0));
        assert_eq!(parse_float(""), None);
        assert_eq!(parse_float("abc"), None);
        assert_eq!(parse_float("-"), None);
        assert_eq!(parse_float("."), None);
        assert_eq!(parse_float("1e999"), None);
    }

    #[test]
    fn non_finite_js_max_offset_is_unbounded() {
        assert_eq!(max_offset_from_js(12.0), Some(12.0));
        assert_eq!(max_offset_from_js(f64::INFINITY), None);
        assert_eq!(max_offset_from_js(f64::NEG_INFINITY), None);
        assert_eq!(max_offset_from_js(f64::NAN), None);

        // an unspecified bound keeps the attribute value instead of freezing the axis
        let overrides = ElementOverrides {
            max_offset_x: Some(9.0),
            ..Default::default()
        };
        let options = MagnetOptions::new().with_max_offset(max_offset_from_js(f64::NAN), None);
        let c = MagnetConfig::resolve(&overrides, &options);
        assert_eq!(c.max_offset_x, Some(9.0));
        assert!(c.validate().is_ok());
    }

    #[test]
    fn defaults_match_documented_values() {
        let c = MagnetConfig::default();
        assert_eq!(c.active_class, "magnetizing");
        assert_eq!(c.attraction, 0.3);
        assert_eq!(c.trigger_distance, 50.0);
        assert_eq!(c.smoothing, 0.1);
        assert!(c.disable_on_touch);
        assert_eq!(c.max_offset_x, None);
        assert_eq!(c.max_offset_y, None);
        assert_eq!(c.metric, DistanceMetric::Edge);
        assert!(c.validate().is_ok());
    }

    #[test]
    fn options_beat_overrides_beat_defaults() {
        let overrides = ElementOverrides {
            trigger_distance: Some(80.0),
            attraction: Some(0.8),
            ..Default::default()
        };
        let options = MagnetOptions::new().with_attraction(0.5);
        let c = MagnetConfig::resolve(&overrides, &options);
        assert_eq!(c.trigger_distance, 80.0);
        assert_eq!(c.attraction, 0.5);
        assert_eq!(c.smoothing, DEFAULT_SMOOTHING);
    }

    #[test]
    fn unspecified_option_keeps_override() {
        let overrides = ElementOverrides {
            max_offset_x: Some(12.0),
            ..Default::default()
        };
        let c = MagnetConfig::resolve(&overrides, &MagnetOptions::new().with_max_offset(None, Some(4.0)));
        assert_eq!(c.max_offset_x, Some(12.0));
        assert_eq!(c.max_offset_y, Some(4.0));
    }

    #[test]
    fn validate_and_sanitize() {
        let bad = MagnetConfig {
            attraction: 1.5,
            smoothing: -0.2,
            trigger_distance: -10.0,
            max_offset_x: Some(-3.0),
            active_class: " ".into(),
            ..Default::default()
        };
        assert_eq!(bad.validate(), Err(ConfigError::InvalidAttraction(1.5)));
        let fixed = bad.sanitized();
        assert!(fixed.validate().is_ok());
        assert_eq!(fixed.attraction, 1.0);
        assert_eq!(fixed.smoothing, 0.0);
        assert_eq!(fixed.trigger_distance, 0.0);
        assert_eq!(fixed.max_offset_x, Some(0.0));
        assert_eq!(fixed.active_class, DEFAULT_ACTIVE_CLASS);
    }

    #[test]
    fn hooks_debug_reports_presence() {
        let o = MagnetOptions::new().on_enter(|_| {});
        let s = format!("{:?}", o.hooks);
        assert!(s.contains("on_enter: true"));
        assert!(s.contains("on_exit: false"));
    }
}
