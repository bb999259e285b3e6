#![cfg(test)]

use axistick::{AxisRange, TickSet, compute_ticks, defaults};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;


fn rng() -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(0x7ac5_ea11)
}

fn plan(min: f64, max: f64, length: i32) -> TickSet {
    let range = AxisRange::new(min, max).expect("Should be a valid range");
    compute_ticks(range, length, defaults::TICK_MARK_STEP_HINT).expect("Should plan ticks")
}

fn labels(ticks: &TickSet) -> Vec<&str> {
    ticks.labels().collect()
}

fn positions(ticks: &TickSet) -> Vec<i32> {
    ticks.positions().collect()
}

/// Assert that a tick set satisfies the layout invariants:
/// positions within the tick space, strictly ascending positions and values.
macro_rules! assert_tick_layout {
    ($ticks:expr) => {{
        let ticks = &$ticks;
        let space = ticks.space();
        let lo = space.margin();
        let hi = space.margin() + space.tick_space();
        for t in ticks.iter() {
            assert!(
                t.position >= lo && t.position <= hi,
                "Tick {:?} out of [{}, {}]",
                t,
                lo,
                hi
            );
        }
        for w in ticks.ticks().windows(2) {
            assert!(
                w[0].position < w[1].position && w[0].value < w[1].value,
                "Ticks not strictly ascending: {:?} / {:?}",
                w[0],
                w[1]
            );
        }
    }};
}

pub(crate) use assert_tick_layout;
