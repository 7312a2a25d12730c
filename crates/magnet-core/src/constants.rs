// Shared tuning constants and DOM names used by every host.

// Classes
pub const MAGNETIZED_CLASS: &str = "is-magnetized"; // present for as long as an element is bound
pub const DEFAULT_ACTIVE_CLASS: &str = "magnetizing"; // present while the pointer is in range

// Defaults
pub const DEFAULT_ATTRACTION: f32 = 0.3; // share of the raw pointer offset the element follows
pub const DEFAULT_TRIGGER_DISTANCE: f32 = 50.0; // px
pub const DEFAULT_SMOOTHING: f32 = 0.1; // lerp weight per pointer move
pub const DEFAULT_DISABLE_ON_TOUCH: bool = true;

// Marker and override attributes
pub const MARKER_ATTR: &str = "data-magnetic";
pub const DISTANCE_ATTR: &str = "data-distance";
pub const ATTRACTION_ATTR: &str = "data-attraction";
pub const FRACTION_ATTR: &str = "data-fraction";
pub const SPEED_ATTR: &str = "data-speed"; // older alias of data-fraction
pub const MAX_OFFSET_X_ATTR: &str = "data-max-offset-x";
pub const MAX_OFFSET_Y_ATTR: &str = "data-max-offset-y";

// Touch-primary environments: coarse pointer and no hover
pub const TOUCH_PRIMARY_QUERY: &str = "(hover: none) and (pointer: coarse)";
