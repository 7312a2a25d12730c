// DOM names and JS option keys used by the web frontend.

// Events and styles
pub const POINTER_EVENT: &str = "pointermove"; // subscribed on window, not the element
pub const TRANSFORM_PROPERTY: &str = "transform";

// Keys of the JS options object
pub const OPT_ACTIVE_CLASS: &str = "activeClass";
pub const OPT_ATTRACTION: &str = "attraction";
pub const OPT_DISTANCE: &str = "distance";
pub const OPT_FRACTION: &str = "fraction";
pub const OPT_SPEED: &str = "speed"; // alias of fraction
pub const OPT_DISABLE_ON_TOUCH: &str = "disableOnTouch";
pub const OPT_MAX_OFFSET_X: &str = "maxOffsetX";
pub const OPT_MAX_OFFSET_Y: &str = "maxOffsetY";
pub const OPT_METRIC: &str = "metric";
pub const OPT_ON_ENTER: &str = "onEnter";
pub const OPT_ON_EXIT: &str = "onExit";
pub const OPT_ON_UPDATE: &str = "onUpdate";

// Keys of the sample object handed to hooks
pub const SAMPLE_DELTA_X: &str = "deltaX";
pub const SAMPLE_DELTA_Y: &str = "deltaY";
pub const SAMPLE_DISTANCE: &str = "distance";
