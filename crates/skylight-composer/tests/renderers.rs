//! Renderer behavior for the simple modes

use rand::SeedableRng;
use rand::rngs::SmallRng;
use skylight_composer::color::{BLACK, GREEN, RED, WHITE, hue_color};
use skylight_composer::math8::step_toward;
use skylight_composer::mode::{
    ChristmasMode, LightSwipeMode, MeteorsMode, Mode, ModeConfig, RainbowMode,
    StaticColorMode,
};
use skylight_composer::{FrameBuffer, ModeId, ModeSlot, RenderContext, Rgb};

fn render<M: Mode, const N: usize>(
    mode: &mut M,
    frame: &mut FrameBuffer<N>,
    tick: u32,
    color: Rgb,
    rng: &mut SmallRng,
) {
    let mut ctx = RenderContext { tick, color, rng };
    mode.render(frame, &mut ctx);
}

fn rng() -> SmallRng {
    SmallRng::seed_from_u64(42)
}

// -----------------------------------------------------------------------------
// Static
// -----------------------------------------------------------------------------

#[test]
fn static_fills_on_first_render() {
    let mut rng = rng();
    let mut frame = FrameBuffer::<16>::new();
    let mut mode = StaticColorMode::new(RED, 5);

    render(&mut mode, &mut frame, 0, RED, &mut rng);

    assert!(frame.pixels().iter().all(|&p| p == RED));
}

#[test]
fn static_leaves_frame_alone_when_unchanged() {
    let mut rng = rng();
    let mut frame = FrameBuffer::<16>::new();
    let mut mode = StaticColorMode::new(RED, 5);
    render(&mut mode, &mut frame, 0, RED, &mut rng);

    frame[3] = WHITE;
    render(&mut mode, &mut frame, 1, RED, &mut rng);

    assert_eq!(frame[3], WHITE);
}

#[test]
fn static_steps_each_channel() {
    let mut rng = rng();
    let mut frame = FrameBuffer::<4>::new();
    let mut mode = StaticColorMode::new(Rgb { r: 10, g: 200, b: 3 }, 5);

    render(&mut mode, &mut frame, 0, Rgb { r: 12, g: 100, b: 0 }, &mut rng);

    assert_eq!(mode.color(), Rgb { r: 12, g: 195, b: 0 });
    assert_eq!(frame[0], mode.color());
}

// -----------------------------------------------------------------------------
// Rainbow
// -----------------------------------------------------------------------------

#[test]
fn rainbow_spreads_hue_across_strip() {
    let mut rng = rng();
    let mut frame = FrameBuffer::<32>::new();
    let mut mode = RainbowMode::new();

    render(&mut mode, &mut frame, 0, RED, &mut rng);

    assert_eq!(mode.phase(), 65472);
    assert_eq!(frame[0], hue_color(255));
    assert_eq!(frame[1], hue_color(7));
    assert_eq!(frame[16], hue_color(127));
}

#[test]
fn rainbow_phase_wraps_downward() {
    let mut rng = rng();
    let mut frame = FrameBuffer::<32>::new();
    let mut mode = RainbowMode::new();

    for tick in 0..8 {
        render(&mut mode, &mut frame, tick, RED, &mut rng);
    }

    assert_eq!(mode.phase(), 65024);
    assert_eq!(frame[0], hue_color(254));
}

// -----------------------------------------------------------------------------
// Christmas
// -----------------------------------------------------------------------------

#[test]
fn christmas_blocks_mirror_around_seam() {
    let mut rng = rng();
    let mut frame = FrameBuffer::<32>::new();
    let mut mode = ChristmasMode::new(5);

    render(&mut mode, &mut frame, 0, RED, &mut rng);

    for offset in 0..=16isize {
        let (right, left) = (5 + offset, 5 - offset);
        assert_eq!(frame.get_wrapped(right), frame.get_wrapped(left));
    }
    assert_eq!(frame[5], RED);
    assert_eq!(frame[8], RED);
    assert_eq!(frame[9], GREEN);
    assert_eq!(frame[1], GREEN);
    assert_eq!(frame[13], WHITE);
    // Offset 8 on the low side folds past index 0
    assert_eq!(frame[29], WHITE);
}

#[test]
fn christmas_phase_advances_every_25_ticks() {
    let mut rng = rng();
    let mut frame = FrameBuffer::<32>::new();
    let mut mode = ChristmasMode::new(0);

    for tick in 0..25 {
        render(&mut mode, &mut frame, tick, RED, &mut rng);
    }
    assert_eq!(mode.phase(), 0);

    render(&mut mode, &mut frame, 25, RED, &mut rng);
    assert_eq!(mode.phase(), 1);
    assert_eq!(mode.color_at(3), GREEN);
    assert_eq!(frame[3], GREEN);
}

// -----------------------------------------------------------------------------
// Light swipe
// -----------------------------------------------------------------------------

#[test]
fn light_swipe_head_is_white() {
    let mut rng = rng();
    let mut frame = FrameBuffer::<8>::new();
    let mut mode = LightSwipeMode::new(5, &mut rng);
    let target = mode.target();

    render(&mut mode, &mut frame, 0, RED, &mut rng);
    assert_eq!(frame[0], WHITE);
    assert!(frame.pixels()[1..].iter().all(|&p| p == BLACK));
    assert_eq!(mode.head(), 1);

    render(&mut mode, &mut frame, 1, RED, &mut rng);
    assert_eq!(frame[1], WHITE);
    let behind = frame[0];
    let channels = [
        (behind.r, target.r),
        (behind.g, target.g),
        (behind.b, target.b),
    ];
    for (channel, wanted) in channels {
        assert_eq!(channel, step_toward(255, wanted, 5));
    }
}

#[test]
fn light_swipe_rotates_colors_at_end() {
    let mut rng = rng();
    let mut frame = FrameBuffer::<8>::new();
    let mut mode = LightSwipeMode::new(5, &mut rng);
    let first = mode.target();

    for tick in 0..8 {
        render(&mut mode, &mut frame, tick, RED, &mut rng);
    }

    assert_eq!(mode.head(), 0);
    assert_eq!(mode.previous(), first);
    assert_eq!(frame[7], WHITE);
}

// -----------------------------------------------------------------------------
// Meteors
// -----------------------------------------------------------------------------

#[test]
fn meteors_start_at_origin() {
    let mut rng = rng();
    let mode = MeteorsMode::new(&mut rng);

    for meteor in mode.meteors() {
        assert_eq!(meteor.position, 0);
        assert!((1..=2).contains(&meteor.speed));
        assert_ne!(meteor.color, BLACK);
    }
}

#[test]
fn meteors_relaunch_after_strip_end() {
    let mut rng = rng();
    let mut frame = FrameBuffer::<8>::new();
    let mut mode = MeteorsMode::new(&mut rng);
    let mut relaunched = [false; 2];

    for tick in 0..64 {
        let before = *mode.meteors();
        render(&mut mode, &mut frame, tick, RED, &mut rng);
        for (i, (old, new)) in before.iter().zip(mode.meteors()).enumerate() {
            assert!(new.position < 8);
            assert!((1..=2).contains(&new.speed));
            if old.position == 7 && new.position == 0 {
                relaunched[i] = true;
            }
        }
    }

    assert_eq!(relaunched, [true, true]);
}

#[test]
fn meteors_trail_decays() {
    let mut rng = rng();
    let mut frame = FrameBuffer::<8>::new();
    let mut mode = MeteorsMode::new(&mut rng);

    render(&mut mode, &mut frame, 0, RED, &mut rng);
    let painted = frame[0];
    assert_ne!(painted, BLACK);

    // Nothing is added at 0 again until a relaunch, so the pixel only fades
    render(&mut mode, &mut frame, 1, RED, &mut rng);
    let faded = frame[0];
    assert!(faded.r <= painted.r);
    assert!(faded.g <= painted.g);
    assert!(faded.b <= painted.b);
    assert_ne!(faded, painted);
}

// -----------------------------------------------------------------------------
// Mode ids
// -----------------------------------------------------------------------------

#[test]
fn mode_names_round_trip() {
    for mode in ModeId::ALL {
        assert_eq!(ModeId::parse_from_str(mode.as_str()), Some(mode));
        assert_eq!(ModeId::from_raw(mode.as_raw()), Some(mode));
    }
    assert_eq!(ModeId::LightSwipe.as_str(), "light_swipe");
}

#[test]
fn unknown_mode_values_are_rejected() {
    assert_eq!(ModeId::from_raw(0), None);
    assert_eq!(ModeId::from_raw(7), None);
    assert_eq!(ModeId::from_raw(0xFF), None);
    assert_eq!(ModeId::parse_from_str("Rainbow"), None);
    assert_eq!(ModeId::parse_from_str(""), None);
}

#[test]
fn fresh_slot_matches_requested_mode() {
    let mut rng = rng();
    let config = ModeConfig::default();

    for mode in ModeId::ALL {
        let slot = mode.to_mode_slot(GREEN, &config, &mut rng);
        assert_eq!(slot.mode_id(), mode);
    }
    assert_eq!(ModeSlot::default().mode_id(), ModeId::Rainbow);
}
