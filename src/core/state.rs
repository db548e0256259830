//! Panel-side state types.
//!
//! Nothing here touches the DOM or the effect library, so the whole module is
//! usable from host-side tests.

use crate::constants::{DEFAULT_ATTRACTION, DEFAULT_SIZE, DEFAULT_SPEED, INITIAL_PARTICLES};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum PanelError {
    #[error("unknown color mode `{0}`")]
    UnknownColorMode(String),
    #[error("unknown effect `{0}`")]
    UnknownEffect(String),
    #[error("invalid {slider} value `{raw}`")]
    InvalidSliderValue { slider: SliderKind, raw: String },
}

/// Button group in the panel whose members are mutually exclusive.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SelectionGroup {
    ColorMode,
    Effect,
}

/// A value picked from a [`SelectionGroup`] by clicking one of its buttons.
///
/// The `tag` is what the button carries in its data attribute, the `label`
/// is what the status line shows once the value is active.
pub trait Choice: Copy + FromStr<Err = PanelError> {
    const GROUP: SelectionGroup;
    fn tag(self) -> &'static str;
    fn label(self) -> &'static str;
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorMode {
    #[default]
    Random,
    Gradient,
    Mono,
    Rainbow,
}

impl Choice for ColorMode {
    const GROUP: SelectionGroup = SelectionGroup::ColorMode;

    fn tag(self) -> &'static str {
        match self {
            ColorMode::Random => "random",
            ColorMode::Gradient => "gradient",
            ColorMode::Mono => "mono",
            ColorMode::Rainbow => "rainbow",
        }
    }

    fn label(self) -> &'static str {
        match self {
            ColorMode::Random => "Random",
            ColorMode::Gradient => "Gradient",
            ColorMode::Mono => "Mono",
            ColorMode::Rainbow => "Rainbow",
        }
    }
}

impl FromStr for ColorMode {
    type Err = PanelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "random" => Ok(ColorMode::Random),
            "gradient" => Ok(ColorMode::Gradient),
            "mono" => Ok(ColorMode::Mono),
            "rainbow" => Ok(ColorMode::Rainbow),
            other => Err(PanelError::UnknownColorMode(other.to_string())),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Effect {
    #[default]
    Attraction,
    Repulsion,
    Swirl,
    Chaos,
}

impl Choice for Effect {
    const GROUP: SelectionGroup = SelectionGroup::Effect;

    fn tag(self) -> &'static str {
        match self {
            Effect::Attraction => "attraction",
            Effect::Repulsion => "repulsion",
            Effect::Swirl => "swirl",
            Effect::Chaos => "chaos",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Effect::Attraction => "Attraction",
            Effect::Repulsion => "Repulsion",
            Effect::Swirl => "Swirl",
            Effect::Chaos => "Chaos",
        }
    }
}

impl FromStr for Effect {
    type Err = PanelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "attraction" => Ok(Effect::Attraction),
            "repulsion" => Ok(Effect::Repulsion),
            "swirl" => Ok(Effect::Swirl),
            "chaos" => Ok(Effect::Chaos),
            other => Err(PanelError::UnknownEffect(other.to_string())),
        }
    }
}

/// Optional sub-effects the library may expose as `particles.<name>.active`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubEffect {
    Swirl,
    Chaos,
}

impl SubEffect {
    pub const ALL: [SubEffect; 2] = [SubEffect::Swirl, SubEffect::Chaos];

    pub fn property(self) -> &'static str {
        match self {
            SubEffect::Swirl => "swirlEffect",
            SubEffect::Chaos => "chaosEffect",
        }
    }

    pub fn for_effect(effect: Effect) -> Option<SubEffect> {
        match effect {
            Effect::Swirl => Some(SubEffect::Swirl),
            Effect::Chaos => Some(SubEffect::Chaos),
            Effect::Attraction | Effect::Repulsion => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SliderKind {
    Size,
    Speed,
    Attraction,
}

impl SliderKind {
    pub const ALL: [SliderKind; 3] = [SliderKind::Size, SliderKind::Speed, SliderKind::Attraction];

    pub fn input_id(self) -> &'static str {
        match self {
            SliderKind::Size => "particle-size",
            SliderKind::Speed => "particle-speed",
            SliderKind::Attraction => "attraction-strength",
        }
    }

    pub fn label_id(self) -> &'static str {
        match self {
            SliderKind::Size => "size-value",
            SliderKind::Speed => "speed-value",
            SliderKind::Attraction => "attraction-value",
        }
    }

    pub fn default_value(self) -> f64 {
        match self {
            SliderKind::Size => DEFAULT_SIZE,
            SliderKind::Speed => DEFAULT_SPEED,
            SliderKind::Attraction => DEFAULT_ATTRACTION,
        }
    }

    /// Parse the raw `value` string of a range input.
    pub fn parse(self, raw: &str) -> Result<f64, PanelError> {
        raw.trim()
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .ok_or_else(|| PanelError::InvalidSliderValue {
                slider: self,
                raw: raw.to_string(),
            })
    }
}

impl fmt::Display for SliderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SliderKind::Size => "size",
            SliderKind::Speed => "speed",
            SliderKind::Attraction => "attraction",
        })
    }
}

/// What the panel currently has selected.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UiState {
    pub effect: Effect,
    pub color_mode: ColorMode,
    pub particles_count: u32,
    pub panel_collapsed: bool,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            effect: Effect::default(),
            color_mode: ColorMode::default(),
            particles_count: INITIAL_PARTICLES,
            panel_collapsed: false,
        }
    }
}
