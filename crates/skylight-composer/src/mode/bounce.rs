//! Bounce simulation
//!
//! A small pool of light segments moving around the strip. Segments that
//! meet face-on reverse and speed up; a segment catching up with another
//! slows down to its pace. A segment that cannot speed up any further fades
//! out and frees its slot, and a timer respawns free slots on the side with
//! fewer participants.
//!
//! Speed is measured in render ticks per step, so a smaller value is faster.

use super::{Mode, RenderContext};
use crate::color::{self, BLACK, Rgb, random_bright_color};
use crate::frame::FrameBuffer;
use crate::math8::is_step;
use crate::random::RandomSource;

/// Size of the segment pool
pub const SEGMENT_COUNT: usize = 5;
/// Positions remembered per segment, head included
pub const TRAIL_LENGTH: usize = 5;
/// Speed of a freshly spawned segment
pub const BASE_SPEED: u8 = 4;
/// Fastest allowed speed
pub const MIN_SPEED: u8 = 2;
/// Render ticks between respawn attempts (2 s at 5 ms per tick)
pub const RESPAWN_TICKS: u32 = 400;

const FADE_STEP: u8 = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
}

impl Direction {
    pub const fn reversed(self) -> Self {
        match self {
            Self::Forward => Self::Backward,
            Self::Backward => Self::Forward,
        }
    }

    pub const fn delta(self) -> isize {
        match self {
            Self::Forward => 1,
            Self::Backward => -1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment {
    pub enabled: bool,
    pub fade_out: bool,
    pub direction: Direction,
    /// Ticks between steps
    pub speed: u8,
    /// Trail positions, `trail[0]` is the head
    pub trail: [usize; TRAIL_LENGTH],
    pub color: Rgb,
}

impl Default for Segment {
    fn default() -> Self {
        Self::disabled()
    }
}

impl Segment {
    pub const fn disabled() -> Self {
        Self {
            enabled: false,
            fade_out: false,
            direction: Direction::Forward,
            speed: BASE_SPEED,
            trail: [0; TRAIL_LENGTH],
            color: BLACK,
        }
    }

    /// A live segment collapsed onto `head`
    pub const fn new(
        direction: Direction,
        head: usize,
        speed: u8,
        color: Rgb,
    ) -> Self {
        Self {
            enabled: true,
            fade_out: false,
            direction,
            speed,
            trail: [head; TRAIL_LENGTH],
            color,
        }
    }

    pub const fn head(&self) -> usize {
        self.trail[0]
    }

    pub const fn tail(&self) -> usize {
        self.trail[TRAIL_LENGTH - 1]
    }

    /// Position one step ahead of `from` in this segment's direction
    #[allow(clippy::cast_possible_wrap)]
    fn ahead<const N: usize>(&self, from: usize) -> usize {
        FrameBuffer::<N>::wrap(from as isize + self.direction.delta())
    }

    fn advance<const N: usize>(&mut self) {
        let next = self.ahead::<N>(self.head());
        self.trail.copy_within(0..TRAIL_LENGTH - 1, 1);
        self.trail[0] = next;
    }

    /// Speed up one notch, or start fading once at the floor
    fn bump(&mut self) {
        if self.speed > MIN_SPEED {
            self.speed -= 1;
        } else {
            self.fade_out = true;
        }
    }

    const fn is_participant(&self) -> bool {
        self.enabled && !self.fade_out
    }
}

#[derive(Debug, Clone)]
pub struct BounceMode {
    segments: [Segment; SEGMENT_COUNT],
    /// Render ticks until the next respawn attempt
    respawn_in: u32,
}

impl Default for BounceMode {
    fn default() -> Self {
        Self::new()
    }
}

impl BounceMode {
    /// Empty pool; the first segment spawns on the first tick
    pub const fn new() -> Self {
        Self {
            segments: [Segment::disabled(); SEGMENT_COUNT],
            respawn_in: 0,
        }
    }

    /// Pool pre-filled with `segments`, next respawn a full interval away
    pub fn with_segments(segments: &[Segment]) -> Self {
        let mut mode = Self::new();
        for (slot, segment) in mode.segments.iter_mut().zip(segments) {
            *slot = *segment;
        }
        mode.respawn_in = RESPAWN_TICKS - 1;
        mode
    }

    pub fn segments(&self) -> &[Segment; SEGMENT_COUNT] {
        &self.segments
    }

    pub fn enabled_count(&self) -> usize {
        self.segments.iter().filter(|s| s.enabled).count()
    }

    /// Count live, non-fading segments as (forward, backward)
    pub fn participants(&self) -> (usize, usize) {
        self.segments
            .iter()
            .filter(|s| s.is_participant())
            .fold((0, 0), |(fwd, bwd), s| match s.direction {
                Direction::Forward => (fwd + 1, bwd),
                Direction::Backward => (fwd, bwd + 1),
            })
    }

    fn advance<const N: usize>(&mut self, tick: u32) -> [bool; SEGMENT_COUNT] {
        let mut moved = [false; SEGMENT_COUNT];
        for (segment, moved) in self.segments.iter_mut().zip(moved.iter_mut()) {
            if segment.enabled && is_step(tick, u32::from(segment.speed)) {
                segment.advance::<N>();
                *moved = true;
            }
        }
        moved
    }

    /// Paint every trail slot once; distinct segments blend additively
    #[allow(clippy::cast_possible_wrap)]
    fn paint<const N: usize>(&self, frame: &mut FrameBuffer<N>) {
        frame.clear();
        for segment in self.segments.iter().filter(|s| s.enabled) {
            for (i, &position) in segment.trail.iter().enumerate() {
                if segment.trail[..i].contains(&position) {
                    continue;
                }
                frame.add_wrapped(position as isize, segment.color);
            }
        }
    }

    /// Pairs of live segments where at least one moved this tick
    fn candidate_pairs(
        &self,
        moved: &[bool; SEGMENT_COUNT],
    ) -> impl Iterator<Item = (usize, usize)> + use<'_> {
        let moved = *moved;
        (0..SEGMENT_COUNT)
            .flat_map(|a| (a + 1..SEGMENT_COUNT).map(move |b| (a, b)))
            .filter(move |&(a, b)| {
                self.segments[a].enabled
                    && self.segments[b].enabled
                    && (moved[a] || moved[b])
            })
    }

    fn resolve_face_on<const N: usize>(
        &mut self,
        moved: &[bool; SEGMENT_COUNT],
    ) {
        // A segment hit from both sides still reverses only once
        let mut hit = [false; SEGMENT_COUNT];
        for (a, b) in self.candidate_pairs(moved) {
            let (sa, sb) = (&self.segments[a], &self.segments[b]);
            if sa.direction == sb.direction {
                continue;
            }
            let (forward, backward) = if sa.direction == Direction::Forward {
                (sa, sb)
            } else {
                (sb, sa)
            };
            let contact = backward.head() == forward.head()
                || backward.head() == forward.ahead::<N>(forward.head());
            if contact {
                log::debug!(
                    "bounce: face-on collision {} <-> {} at {}",
                    a,
                    b,
                    forward.head()
                );
                hit[a] = true;
                hit[b] = true;
            }
        }

        for (segment, _) in
            self.segments.iter_mut().zip(hit).filter(|(_, hit)| *hit)
        {
            segment.bump();
            segment.direction = segment.direction.reversed();
        }
    }

    fn resolve_rear<const N: usize>(&mut self, moved: &[bool; SEGMENT_COUNT]) {
        let mut pace = [None; SEGMENT_COUNT];
        for (a, b) in self.candidate_pairs(moved) {
            let (sa, sb) = (&self.segments[a], &self.segments[b]);
            if sa.direction != sb.direction || sa.speed == sb.speed {
                continue;
            }
            let (chaser, leader) =
                if sa.speed < sb.speed { (a, b) } else { (b, a) };
            let (sc, sl) = (&self.segments[chaser], &self.segments[leader]);
            let contact = sc.head() == sl.tail()
                || sc.ahead::<N>(sc.head()) == sl.tail();
            if contact {
                log::debug!("bounce: rear collision {} -> {}", chaser, leader);
                // Slowest leader wins when one chaser touches several
                let speed = sl.speed;
                let slowest = pace[chaser].map_or(speed, |p: u8| p.max(speed));
                pace[chaser] = Some(slowest);
            }
        }

        for (segment, pace) in self.segments.iter_mut().zip(pace) {
            if let Some(speed) = pace {
                segment.speed = speed;
            }
        }
    }

    fn fade_and_retire(&mut self) {
        for (index, segment) in self.segments.iter_mut().enumerate() {
            if !segment.enabled || !segment.fade_out {
                continue;
            }
            segment.color = color::fade_by(segment.color, FADE_STEP);
            if color::is_black(segment.color) {
                *segment = Segment::disabled();
                log::debug!("bounce: segment {} retired", index);
            }
        }
    }

    fn respawn<const N: usize, R: RandomSource>(&mut self, rng: &mut R) {
        if self.respawn_in > 0 {
            self.respawn_in -= 1;
            return;
        }
        self.respawn_in = RESPAWN_TICKS - 1;

        let Some(slot) = self.segments.iter().position(|s| !s.enabled) else {
            return;
        };

        let (forward, backward) = self.participants();
        let direction = match forward.cmp(&backward) {
            core::cmp::Ordering::Less => Direction::Forward,
            core::cmp::Ordering::Greater => Direction::Backward,
            core::cmp::Ordering::Equal => {
                if rng.next_bool() {
                    Direction::Forward
                } else {
                    Direction::Backward
                }
            }
        };
        let start = match direction {
            Direction::Forward => 0,
            Direction::Backward => N - 1,
        };

        let color = random_bright_color(rng);
        self.segments[slot] = Segment::new(direction, start, BASE_SPEED, color);
        log::debug!(
            "bounce: segment {} spawned {:?} at {}",
            slot,
            direction,
            start
        );
    }
}

impl Mode for BounceMode {
    fn render<const N: usize, R: RandomSource>(
        &mut self,
        frame: &mut FrameBuffer<N>,
        ctx: &mut RenderContext<'_, R>,
    ) {
        if N == 0 {
            return;
        }

        let moved = self.advance::<N>(ctx.tick);
        self.paint(frame);
        self.resolve_face_on::<N>(&moved);
        self.resolve_rear::<N>(&moved);
        self.fade_and_retire();
        self.respawn::<N, R>(ctx.rng);
    }
}
