/// Panel timing, defaults and color tuning constants.
///
/// These constants express intended behavior (timer periods, default slider
/// positions, color offsets) and keep magic numbers out of the controller.
// Loading overlay
pub const LOADING_TICK_MS: i32 = 200;
pub const LOADING_STEP_MAX: f64 = 20.0; // each tick advances by random() * this
pub const LOADING_DONE: f64 = 100.0;
pub const READY_DELAY_MS: i32 = 1000;

// Toast notification
pub const NOTIFICATION_MS: i32 = 3000;

// Cosmetic particle counter
pub const INITIAL_PARTICLES: u32 = 500;
pub const PARTICLES_STEP: u32 = 100;

// Slider defaults (also the values written by reset)
pub const DEFAULT_SIZE: f64 = 5.0;
pub const DEFAULT_SPEED: f64 = 1.0;
pub const DEFAULT_ATTRACTION: f64 = 1.0;

// Packed RGB color math
pub const COLOR_MAX: u32 = 0xFF_FF_FF;
pub const GRADIENT_OFFSET: u32 = 0x33_33_33;
pub const RAINBOW_OFFSET: u32 = 0x88_88_88;
pub const RAINBOW_HUE_PER_SEC: f64 = 0.1; // one full hue cycle every 10 s

// DOM element ids and selectors
pub const CANVAS_ID: &str = "canvas";
pub const LOADING_SCREEN_ID: &str = "loading-screen";
pub const PROGRESS_ID: &str = "progress";
pub const PARTICLE_COUNT_ID: &str = "particle-count";
pub const COLOR_MODE_LABEL_ID: &str = "color-mode";
pub const EFFECT_MODE_LABEL_ID: &str = "effect-mode";
pub const PANEL_TOGGLE_ID: &str = "panel-toggle";
pub const PANEL_CONTENT_ID: &str = "panel-content";
pub const NOTIFICATION_ID: &str = "notification";
pub const NOTIFICATION_TEXT_ID: &str = "notification-text";
pub const COLORS_BTN_ID: &str = "colors-btn";
pub const RESET_BTN_ID: &str = "reset-btn";
pub const CLEAR_BTN_ID: &str = "clear-btn";
pub const ADD_BTN_ID: &str = "add-btn";
pub const COLOR_BTN_SELECTOR: &str = ".color-btn";
pub const EFFECT_BTN_SELECTOR: &str = ".effect-btn";

// CSS state classes
pub const ACTIVE_CLASS: &str = "active";
pub const COLLAPSED_CLASS: &str = "collapsed";
pub const HIDDEN_CLASS: &str = "hidden";
pub const SHOW_CLASS: &str = "show";
pub const CHEVRON_UP_CLASS: &str = "fa-chevron-up";
pub const CHEVRON_DOWN_CLASS: &str = "fa-chevron-down";

