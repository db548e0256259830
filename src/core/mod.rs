pub mod color;
pub mod controller;
pub mod handle;
pub mod loading;
pub mod state;
pub mod toast;

pub use controller::Controller;
pub use handle::{CursorConfig, EffectHandle, PanelView};
pub use loading::LoadingBar;
pub use state::*;
pub use toast::Toast;
