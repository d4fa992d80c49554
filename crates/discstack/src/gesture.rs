use crate::disc::{DiscStack, score_percent};
use crate::geometry::{OrbitGeometry, Point};
use crate::{COMMIT_THRESHOLD, REST_ANGLE, lerp};
use strum::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "snake_case")]
pub enum PullDirection {
    /// Peel the active disc off the centre stack down to 6 o'clock.
    PullDown,
    /// Push the disc resting at 6 o'clock back onto the centre stack.
    PullUp,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "snake_case")]
pub enum GestureOutcome {
    Commit,
    Cancel,
}

impl GestureOutcome {
    pub fn from_progress(progress: f64) -> Self {
        if progress < COMMIT_THRESHOLD {
            Self::Cancel
        } else {
            Self::Commit
        }
    }

    pub fn target_progress(&self) -> f64 {
        match self {
            Self::Commit => 1.0,
            Self::Cancel => 0.0,
        }
    }
}

/// Where a disc travels during the gesture. Values at progress 0 are the
/// pre-gesture resting pose, values at progress 1 are the committed pose.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Participant {
    pub index: usize,
    pub score_percent: f64,
    pub from_angle: f64,
    pub to_angle: f64,
    pub from_scale: f64,
    pub to_scale: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    pub index: usize,
    pub center: Point,
    pub scale: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GestureSession {
    direction: PullDirection,
    dragged: usize,
    reference: usize,
    reference_max_score: f64,
    participants: Vec<Participant>,
    progress: f64,
    release: Option<GestureOutcome>,
}

impl GestureSession {
    /// Starts a session if `touch` lands on a disc that can move, `None` otherwise.
    pub fn begin(stack: &DiscStack, geometry: &OrbitGeometry, touch: Point) -> Option<Self> {
        let active = stack.active_index();
        let direction = Self::resolve_direction(stack, geometry, touch)?;
        let (dragged, reference) = match direction {
            PullDirection::PullDown => (active, active - 1),
            PullDirection::PullUp => (active + 1, active + 1),
        };
        Some(Self::plan(stack, geometry, direction, dragged, reference))
    }

    fn resolve_direction(
        stack: &DiscStack,
        geometry: &OrbitGeometry,
        touch: Point,
    ) -> Option<PullDirection> {
        let active = stack.active_index();
        if active > 0 && geometry.center_circle().contains(touch) {
            return Some(PullDirection::PullDown);
        }

        let next = stack.get(active + 1)?;
        geometry
            .orbit_circle(next.angle_degrees, next.resting_scale())
            .contains(touch)
            .then_some(PullDirection::PullUp)
    }

    fn plan(
        stack: &DiscStack,
        geometry: &OrbitGeometry,
        direction: PullDirection,
        dragged: usize,
        reference: usize,
    ) -> Self {
        let discs = stack.discs();
        let reference_max_score = discs[reference].score;
        let mut participants = Vec::with_capacity(discs.len() - dragged);

        // pushed back into the centre, where it becomes the reference
        if direction == PullDirection::PullUp {
            let disc = &discs[dragged];
            participants.push(Participant {
                index: dragged,
                score_percent: 1.0,
                from_angle: disc.angle_degrees,
                to_angle: REST_ANGLE,
                from_scale: disc.resting_scale(),
                to_scale: 1.0,
            });
        }

        let orbit_start = match direction {
            PullDirection::PullDown => dragged,
            PullDirection::PullUp => dragged + 1,
        };

        let mut angle = REST_ANGLE;
        let mut previous_pct = None;
        for (index, disc) in discs.iter().enumerate().skip(orbit_start) {
            let pct = score_percent(disc.score, reference_max_score);
            if let Some(prev) = previous_pct {
                angle -= geometry.base_angular_spacing * (pct + prev);
            }
            previous_pct = Some(pct);

            let from_scale = if index == dragged {
                1.0
            } else {
                disc.resting_scale()
            };
            participants.push(Participant {
                index,
                score_percent: pct,
                from_angle: disc.angle_degrees,
                to_angle: angle,
                from_scale,
                to_scale: pct,
            });
        }

        Self {
            direction,
            dragged,
            reference,
            reference_max_score,
            participants,
            progress: 0.0,
            release: None,
        }
    }

    pub fn direction(&self) -> PullDirection {
        self.direction
    }

    pub fn dragged_index(&self) -> usize {
        self.dragged
    }

    /// Disc left on top of the centre stack once the gesture commits.
    pub fn reference_index(&self) -> usize {
        self.reference
    }

    pub fn reference_max_score(&self) -> f64 {
        self.reference_max_score
    }

    pub fn participants(&self) -> &[Participant] {
        &self.participants
    }

    pub fn progress(&self) -> f64 {
        self.progress
    }

    pub fn outcome(&self) -> Option<GestureOutcome> {
        self.release
    }

    pub fn is_released(&self) -> bool {
        self.release.is_some()
    }

    /// Normalises a vertical drag into progress along the direction of travel.
    pub fn progress_for(&self, translation: f64, orbit_path_radius: f64) -> f64 {
        let travel = match self.direction {
            PullDirection::PullDown => translation,
            PullDirection::PullUp => -translation,
        };
        if orbit_path_radius <= 0.0 || !travel.is_finite() {
            return 0.0;
        }
        (travel / orbit_path_radius).clamp(0.0, 1.0)
    }

    pub fn track(&mut self, translation: f64, orbit_path_radius: f64) {
        self.progress = self.progress_for(translation, orbit_path_radius);
    }

    pub fn set_progress(&mut self, progress: f64) {
        self.progress = progress.clamp(0.0, 1.0);
    }

    pub(crate) fn release(&mut self, outcome: GestureOutcome) {
        self.release = Some(outcome);
    }

    /// Moves progress toward the released outcome by `step`. Returns true once
    /// the target is reached.
    pub(crate) fn settle(&mut self, step: f64) -> bool {
        let Some(outcome) = self.release else {
            return false;
        };
        let target = outcome.target_progress();
        self.progress = if target > self.progress {
            (self.progress + step).min(target)
        } else {
            (self.progress - step).max(target)
        };
        self.progress == target
    }

    /// Pose of every participating disc at the current progress.
    pub fn poses(&self, geometry: &OrbitGeometry) -> Vec<Pose> {
        let t = self.progress;
        self.participants
            .iter()
            .map(|p| {
                let scale = lerp(p.from_scale, p.to_scale, t);
                let center = if p.index == self.dragged {
                    self.dragged_center(geometry, p, t)
                } else {
                    geometry.point_on_orbit(lerp(p.from_angle, p.to_angle, t))
                };
                Pose {
                    index: p.index,
                    center,
                    scale,
                }
            })
            .collect()
    }

    // the dragged disc runs straight between the centre and its orbit slot
    fn dragged_center(&self, geometry: &OrbitGeometry, p: &Participant, t: f64) -> Point {
        let (start, end) = match self.direction {
            PullDirection::PullDown => (geometry.center, geometry.point_on_orbit(p.to_angle)),
            PullDirection::PullUp => (geometry.point_on_orbit(p.from_angle), geometry.center),
        };
        Point::new(lerp(start.x, end.x, t), lerp(start.y, end.y, t))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Size;

    const EPS: f64 = 1e-9;

    fn geometry() -> OrbitGeometry {
        OrbitGeometry::compute(Size::new(1000.0, 1000.0))
    }

    #[test]
    fn test_commit_threshold_is_strict() {
        assert_eq!(GestureOutcome::from_progress(0.333), GestureOutcome::Commit);
        assert_eq!(GestureOutcome::from_progress(0.332999), GestureOutcome::Cancel);
        assert_eq!(GestureOutcome::from_progress(0.0), GestureOutcome::Cancel);
        assert_eq!(GestureOutcome::from_progress(1.0), GestureOutcome::Commit);
    }

    #[test]
    fn test_touch_outside_centre_is_rejected() {
        let stack = DiscStack::from_scores(&[3.0, 2.0, 1.0]);
        let geo = geometry();
        assert!(GestureSession::begin(&stack, &geo, Point::new(10.0, 10.0)).is_none());
        assert!(GestureSession::begin(&stack, &geo, Point::new(500.0, 660.0)).is_none());
    }

    #[test]
    fn test_single_disc_cannot_move() {
        let stack = DiscStack::from_scores(&[5.0]);
        assert!(GestureSession::begin(&stack, &geometry(), Point::new(500.0, 500.0)).is_none());
    }

    #[test]
    fn test_pull_down_plan() {
        let stack = DiscStack::from_scores(&[100.0, 50.0]);
        let session = GestureSession::begin(&stack, &geometry(), Point::new(520.0, 480.0))
            .expect("centre touch starts a pull");

        assert_eq!(session.direction(), PullDirection::PullDown);
        assert_eq!(session.dragged_index(), 1);
        assert_eq!(session.reference_index(), 0);
        assert_eq!(session.reference_max_score(), 100.0);

        let [p] = session.participants() else {
            panic!("expected one participant");
        };
        assert_eq!(p.index, 1);
        assert_eq!(p.score_percent, 0.5);
        assert_eq!(p.to_angle, REST_ANGLE);
        assert_eq!((p.from_scale, p.to_scale), (1.0, 0.5));
    }

    #[test]
    fn test_spacing_walk_between_full_discs_is_sixty_degrees() {
        let mut stack = DiscStack::from_scores(&[10.0, 10.0, 10.0, 10.0]);
        stack.set_active(1);
        let session = GestureSession::begin(&stack, &geometry(), Point::new(500.0, 500.0))
            .expect("centre touch starts a pull");

        let angles: Vec<f64> = session.participants().iter().map(|p| p.to_angle).collect();
        assert_eq!(angles, vec![90.0, 30.0, -30.0]);
    }

    #[test]
    fn test_spacing_shrinks_with_score() {
        let mut stack = DiscStack::from_scores(&[100.0, 100.0, 50.0, 10.0]);
        stack.set_active(1);
        let session = GestureSession::begin(&stack, &geometry(), Point::new(500.0, 500.0))
            .expect("centre touch starts a pull");

        let angles: Vec<f64> = session.participants().iter().map(|p| p.to_angle).collect();
        // 30 * (0.5 + 1.0) = 45, then 30 * (0.1 + 0.5) = 18
        assert!((angles[0] - 90.0).abs() < EPS);
        assert!((angles[1] - 45.0).abs() < EPS);
        assert!((angles[2] - 27.0).abs() < EPS);
    }

    #[test]
    fn test_progress_clamps_and_follows_direction() {
        let stack = DiscStack::from_scores(&[2.0, 1.0]);
        let geo = geometry();
        let mut session = GestureSession::begin(&stack, &geo, Point::new(500.0, 500.0))
            .expect("centre touch starts a pull");

        let r = geo.orbit_path_radius;
        session.track(r / 2.0, r);
        assert!((session.progress() - 0.5).abs() < EPS);
        session.track(-40.0, r);
        assert_eq!(session.progress(), 0.0);
        session.track(r * 3.0, r);
        assert_eq!(session.progress(), 1.0);
        for travel in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            session.track(travel, r);
            assert_eq!(session.progress(), 0.0);
        }
    }

    #[test]
    fn test_dragged_disc_runs_straight_down() {
        let stack = DiscStack::from_scores(&[2.0, 1.0]);
        let geo = geometry();
        let mut session = GestureSession::begin(&stack, &geo, Point::new(500.0, 500.0))
            .expect("centre touch starts a pull");

        session.set_progress(0.5);
        let pose = session.poses(&geo)[0];
        assert!((pose.center.x - 500.0).abs() < EPS);
        assert!((pose.center.y - (500.0 + geo.orbit_path_radius / 2.0)).abs() < EPS);
        assert!((pose.scale - 0.75).abs() < EPS);
    }

    #[test]
    fn test_settle_reaches_target() {
        let stack = DiscStack::from_scores(&[2.0, 1.0]);
        let mut session = GestureSession::begin(&stack, &geometry(), Point::new(500.0, 500.0))
            .expect("centre touch starts a pull");

        session.set_progress(0.25);
        assert!(!session.settle(0.1), "unreleased sessions do not settle");

        session.release(GestureOutcome::Cancel);
        assert!(!session.settle(0.2));
        assert!((session.progress() - 0.05).abs() < EPS);
        assert!(session.settle(0.2));
        assert_eq!(session.progress(), 0.0);
    }
}
