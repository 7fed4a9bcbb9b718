/// Move `current` toward `target` by at most `step`, never overshooting.
///
/// A zero step is treated as one so the value always converges.
#[inline]
pub fn step_toward(current: u8, target: u8, step: u8) -> u8 {
    let step = step.max(1);
    if current < target {
        current.saturating_add(step).min(target)
    } else {
        current.saturating_sub(step).max(target)
    }
}

/// Whether `tick` falls on a step of an animation advancing every `every` ticks
#[inline]
pub fn is_step(tick: u32, every: u32) -> bool {
    every <= 1 || tick.is_multiple_of(every)
}
