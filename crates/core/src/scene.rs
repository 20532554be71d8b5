//! Initial task set: a sky full of stars plus the ship.

use crate::blink::Blink;
use crate::rng::SimpleRng;
use crate::sprite::Sprite;
use crate::task::Task;
use crate::types::{
    DEFAULT_FIRE_COLUMNS_SPEED, DEFAULT_FIRE_ROWS_SPEED, DEFAULT_STARS_MAX, DEFAULT_STARS_MIN,
    STARS_LIMIT,
};
use crate::vehicle::Vehicle;

/// Tunables for scene generation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SceneSettings {
    pub stars_min: u32,
    pub stars_max: u32,
    /// Projectile velocity as (rows, columns) per tick.
    pub fire_velocity: (f64, f64),
}

impl Default for SceneSettings {
    fn default() -> Self {
        Self {
            stars_min: DEFAULT_STARS_MIN,
            stars_max: DEFAULT_STARS_MAX,
            fire_velocity: (DEFAULT_FIRE_ROWS_SPEED, DEFAULT_FIRE_COLUMNS_SPEED),
        }
    }
}

/// Scatter stars strictly inside the border of a `height` x `width` grid.
///
/// Returns no stars when the grid has no interior.
pub fn populate_sky(rng: &mut SimpleRng, height: i32, width: i32, count: u32) -> Vec<Blink> {
    if height < 3 || width < 3 {
        return Vec::new();
    }

    (0..count)
        .map(|_| {
            let row = rng.range_inclusive(1, height - 2);
            let column = rng.range_inclusive(1, width - 2);
            Blink::random(rng, row, column)
        })
        .collect()
}

/// Stars followed by the centred ship.
///
/// The star count is drawn from `[stars_min, stars_max]`, with both bounds
/// held to [`STARS_LIMIT`].
pub fn build_scene(
    rng: &mut SimpleRng,
    height: i32,
    width: i32,
    frames: [Sprite; 2],
    settings: &SceneSettings,
) -> Vec<Task> {
    let count = rng.count_inclusive(
        settings.stars_min.min(STARS_LIMIT),
        settings.stars_max.min(STARS_LIMIT),
    );
    let mut tasks: Vec<Task> = populate_sky(rng, height, width, count)
        .into_iter()
        .map(Task::from)
        .collect();

    let (rows_speed, columns_speed) = settings.fire_velocity;
    tasks.push(
        Vehicle::centered(height, width, frames)
            .with_fire_velocity(rows_speed, columns_speed)
            .into(),
    );
    tasks
}
