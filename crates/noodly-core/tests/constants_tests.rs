// Installation defaults and the small value types around them.

use noodly_core::*;
use std::time::Duration;

#[test]
#[allow(clippy::assertions_on_constants)]
fn defaults_are_sane() {
    assert!(DEFAULT_APPENDAGES > 0);
    assert!(DEFAULT_LEDS_PER_APPENDAGE > 0);
    assert!(DEFAULT_ANIMATION_SLOWDOWN >= 1);
    assert!(DEFAULT_PIXEL_REPEAT >= 1);
    assert!(!DEFAULT_TICK.is_zero());
    assert!(DEFAULT_IDLE_THRESHOLD > DEFAULT_TICK);
    assert!(!DEFAULT_RETRIGGER);
    assert!(Settings::default().validate().is_ok());
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn ambient_wave_fits_in_a_byte() {
    assert!(AMBIENT_WAVE_FLOOR >= 0.0);
    assert!(AMBIENT_WAVE_FLOOR + 2.0 * AMBIENT_WAVE_SCALE <= 255.0);
}

#[test]
fn palette_runs_violet_to_red() {
    assert_eq!(DEFAULT_SWEEP_PALETTE.len(), 6);
    assert_eq!(DEFAULT_SWEEP_PALETTE[0].packed(), 0x1000FF);
    assert_eq!(DEFAULT_SWEEP_PALETTE[5], Rgb::new(0xff, 0, 0));
    let params = AnimationParams::default();
    assert_eq!(params.sweep_width(), 18);
}

#[test]
fn rgb_packs_and_unpacks() {
    let c = Rgb::from_packed(0x12_34_56);
    assert_eq!(c, Rgb::new(0x12, 0x34, 0x56));
    assert_eq!(u32::from(c), 0x123456);
    assert_eq!(Rgb::from(0xff_ab_cd_ef), Rgb::new(0xab, 0xcd, 0xef));
    let frame = [Rgb::new(1, 2, 3), Rgb::new(4, 5, 6)];
    let bytes: &[u8] = bytemuck::cast_slice(&frame);
    assert_eq!(bytes, &[1, 2, 3, 4, 5, 6]);
}

#[test]
fn eye_sequence_settles_on_white() {
    let seq = EyeSequence::default();
    assert_eq!(seq.len(), 8);
    assert_eq!(seq.resting_color(), Rgb::WHITE);
    let tail = &seq.steps()[6..];
    for step in tail {
        assert_eq!(step.color, Rgb::WHITE);
        assert_eq!(step.morph_ticks, 0);
        assert_eq!(step.hold_ticks, u8::MAX);
    }
    assert_eq!(seq.steps()[5].morph(), Duration::from_millis(2500));
    // Five half-second colours, the 2.5 s fade, three long holds.
    assert_eq!(
        seq.total_duration(),
        Duration::from_millis(5 * 500 + 2500 + 3 * 255 * 250)
    );
}

#[test]
fn empty_eye_sequence_rests_on_default() {
    let seq = EyeSequence::new([]);
    assert!(seq.is_empty());
    assert_eq!(seq.resting_color(), EYE_RESTING_COLOR);
    assert_eq!(seq.total_duration(), Duration::ZERO);
}

#[test]
fn settings_report_frame_period_and_directions() {
    let settings = Settings {
        directions: vec![Direction::Reverse],
        ..Settings::default()
    };
    assert_eq!(settings.frame_period(), Duration::from_millis(20));
    assert_eq!(settings.direction(0), Direction::Reverse);
    assert_eq!(settings.direction(11), Direction::Forward);
}

#[test]
fn cascade_is_checked_against_channels_and_inputs() {
    let settings = Settings {
        cascade: Some(Cascade {
            input: 10_000,
            primary: 0,
        }),
        ..Settings::default()
    };
    assert_eq!(
        settings.validate_for_hardware(12, 12),
        Err(ConfigError::CascadeOutOfRange {
            role: "input",
            index: 10_000,
            available: 12
        })
    );
    let settings = Settings {
        cascade: Some(Cascade {
            input: 11,
            primary: 3,
        }),
        ..Settings::default()
    };
    assert_eq!(settings.validate_for_hardware(4, 12), Ok(()));
    assert_eq!(Settings::default().validate_for_hardware(12, 0), Ok(()));
}
