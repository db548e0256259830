// Host-side tests for parsing, color math and the loading bar.

use cursor_panel::constants::{COLOR_MAX, RAINBOW_OFFSET};
use cursor_panel::core::color::{gradient_partner, rainbow_pair, random_color};
use cursor_panel::core::{
    Choice, ColorMode, CursorConfig, Effect, LoadingBar, PanelError, SliderKind, UiState,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn choice_tags_round_trip_through_from_str() {
    for mode in [
        ColorMode::Random,
        ColorMode::Gradient,
        ColorMode::Mono,
        ColorMode::Rainbow,
    ] {
        assert_eq!(mode.tag().parse::<ColorMode>(), Ok(mode));
    }
    for effect in [
        Effect::Attraction,
        Effect::Repulsion,
        Effect::Swirl,
        Effect::Chaos,
    ] {
        assert_eq!(effect.tag().parse::<Effect>(), Ok(effect));
    }
}

#[test]
fn unknown_tags_are_errors() {
    assert_eq!(
        "Random".parse::<ColorMode>(),
        Err(PanelError::UnknownColorMode("Random".into()))
    );
    assert!(matches!(
        "".parse::<Effect>(),
        Err(PanelError::UnknownEffect(_))
    ));
}

#[test]
fn slider_parse_accepts_numbers_and_rejects_garbage() {
    assert_eq!(SliderKind::Size.parse("7"), Ok(7.0));
    assert_eq!(SliderKind::Speed.parse(" 0.5 "), Ok(0.5));
    assert_eq!(SliderKind::Attraction.parse("-2"), Ok(-2.0));
    let err = SliderKind::Size.parse("abc").unwrap_err();
    assert_eq!(err.to_string(), "invalid size value `abc`");
    assert!(SliderKind::Speed.parse("NaN").is_err());
}

#[test]
fn defaults_match_initial_config() {
    let state = UiState::default();
    assert_eq!(state.particles_count, 500);
    assert_eq!(state.color_mode, ColorMode::Random);
    assert_eq!(state.effect, Effect::Attraction);
    assert!(!state.panel_collapsed);

    let config = CursorConfig::default();
    assert_eq!(config.count, 500);
    assert_eq!(config.size, SliderKind::Size.default_value());
    assert_eq!(config.speed, SliderKind::Speed.default_value());
    assert_eq!(
        config.attraction_intensity,
        SliderKind::Attraction.default_value()
    );
}

#[test]
fn random_colors_stay_in_range() {
    let mut rng = StdRng::seed_from_u64(1);
    for _ in 0..1000 {
        assert!(random_color(&mut rng) < COLOR_MAX);
    }
}

#[test]
fn gradient_partner_wraps() {
    assert_eq!(gradient_partner(0), 0x333333);
    assert_eq!(gradient_partner(0xFFFFFE), (0xFFFFFE + 0x333333) % COLOR_MAX);
}

#[test]
fn rainbow_cycles_every_ten_seconds() {
    let (a, b) = rainbow_pair(0.0);
    assert_eq!(a, 0);
    assert_eq!(b, RAINBOW_OFFSET);
    assert_eq!(rainbow_pair(2.5), rainbow_pair(12.5));
    assert_ne!(rainbow_pair(2.5), rainbow_pair(2.6));
}

#[test]
fn loading_bar_clamps_at_full() {
    let mut bar = LoadingBar::new();
    assert!(!bar.advance(40.0));
    assert_eq!(bar.width_css(), "40%");
    assert!(!bar.advance(55.5));
    assert!(bar.advance(20.0));
    assert_eq!(bar.value(), 100.0);
    assert_eq!(bar.width_css(), "100%");
}

#[test]
fn loading_bar_random_ticks_eventually_finish() {
    let mut bar = LoadingBar::new();
    let mut rng = StdRng::seed_from_u64(3);
    let mut ticks = 0;
    while !bar.advance_random(&mut rng) {
        ticks += 1;
        assert!(ticks < 10_000);
    }
    assert!(bar.is_done());
}
