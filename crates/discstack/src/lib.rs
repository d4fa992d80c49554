use std::time::Duration;

pub mod disc;
pub mod geometry;
pub mod gesture;
pub mod stack;

pub use disc::{Disc, DiscStack, format_score};
pub use geometry::{Circle, OrbitGeometry, Point, Size};
pub use gesture::{GestureOutcome, GestureSession, PullDirection};
pub use stack::{DiscFrame, OrbitStack, Phase};

pub const CENTER_DISC_RATIO: f64 = 0.15; // centre disc radius per unit of the short side
pub const ORBIT_RADIUS_FACTOR: f64 = 2.15; // orbit path radius per centre radius
pub const BASE_ANGULAR_SPACING: f64 = 30.0; // degrees, half the gap between two full discs
pub const REST_ANGLE: f64 = 90.0; // 6 o'clock
pub const COMMIT_THRESHOLD: f64 = 0.333;
pub const HIDE_THRESHOLD: f64 = 0.01;
pub const PLACEHOLDER_SCORE: f64 = 1.0;
pub const PLACEHOLDER_COUNT: usize = 7;
pub const DEFAULT_SETTLE: Duration = Duration::from_millis(300);

/// Linear blend that is exact at both ends.
pub(crate) fn lerp(from: f64, to: f64, t: f64) -> f64 {
    from * (1.0 - t) + to * t
}
