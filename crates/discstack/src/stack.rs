use crate::disc::{Disc, DiscStack};
use crate::geometry::{OrbitGeometry, Point, Size};
use crate::gesture::{GestureOutcome, GestureSession};
use crate::{DEFAULT_SETTLE, HIDE_THRESHOLD};
use std::time::Duration;

#[derive(Debug, Clone, PartialEq)]
pub enum Phase {
    Resting,
    /// A touch owns the widget. The session stays here through its settle
    /// animation until the outcome is applied.
    Dragging(GestureSession),
}

/// What the host draws for one disc.
#[derive(Debug, Clone, PartialEq)]
pub struct DiscFrame<'a> {
    pub center: Point,
    pub radius: f64,
    pub scale: f64,
    pub visible: bool,
    pub label: &'a str,
}

/// The widget's state machine. All stack mutation goes through here.
#[derive(Debug, Clone)]
pub struct OrbitStack {
    stack: DiscStack,
    size: Option<Size>,
    geometry: OrbitGeometry,
    phase: Phase,
    settle: Duration,
}

impl OrbitStack {
    pub fn new(scores: &[f64]) -> Self {
        let mut orbit = Self {
            stack: DiscStack::from_scores(&[]),
            size: None,
            geometry: OrbitGeometry::default(),
            phase: Phase::Resting,
            settle: DEFAULT_SETTLE,
        };
        orbit.set_scores(scores);
        orbit
    }

    pub fn with_settle(mut self, settle: Duration) -> Self {
        self.settle = settle;
        self
    }

    pub fn set_settle(&mut self, settle: Duration) {
        self.settle = settle;
    }

    /// Rebuilds the stack from scratch, dropping any gesture in flight.
    pub fn set_scores(&mut self, scores: &[f64]) {
        if matches!(self.phase, Phase::Dragging(_)) {
            log::debug!("Discarding gesture for new scores");
        }
        self.stack = DiscStack::from_scores(scores);
        self.phase = Phase::Resting;
        log::info!("Built stack of {} discs", self.stack.len());
    }

    /// Recomputes geometry when the size actually changed. Returns whether a
    /// redraw is needed.
    pub fn on_container_resized(&mut self, size: Size) -> bool {
        if self.size == Some(size) {
            return false;
        }
        self.size = Some(size);
        self.geometry = OrbitGeometry::compute(size);
        log::debug!("Orbit geometry for {size:?}: {:?}", self.geometry);
        true
    }

    pub fn on_gesture_begin(&mut self, touch: Point) -> bool {
        if matches!(self.phase, Phase::Dragging(_)) {
            log::trace!("Ignoring touch at {touch:?} while dragging");
            return false;
        }
        if self.size.is_none() {
            log::trace!("Ignoring touch at {touch:?} before first layout");
            return false;
        }

        match GestureSession::begin(&self.stack, &self.geometry, touch) {
            Some(session) => {
                log::debug!(
                    "Begin {} of disc {} (reference {})",
                    session.direction(),
                    session.dragged_index(),
                    session.reference_max_score()
                );
                self.phase = Phase::Dragging(session);
                true
            }
            None => {
                log::trace!("No disc to move at {touch:?}");
                false
            }
        }
    }

    pub fn on_gesture_changed(&mut self, translation: f64) -> bool {
        let radius = self.geometry.orbit_path_radius;
        match &mut self.phase {
            Phase::Dragging(session) if !session.is_released() => {
                session.track(translation, radius);
                true
            }
            _ => false,
        }
    }

    /// Decides the outcome from the final translation. With a zero settle
    /// duration the outcome is applied at once, otherwise `tick` plays it out.
    pub fn on_gesture_ended(&mut self, translation: f64) -> Option<GestureOutcome> {
        let radius = self.geometry.orbit_path_radius;
        let Phase::Dragging(session) = &mut self.phase else {
            return None;
        };
        if session.is_released() {
            return None;
        }

        session.track(translation, radius);
        let outcome = GestureOutcome::from_progress(session.progress());
        session.release(outcome);
        log::debug!("Released at {:.3}: {outcome}", session.progress());

        if self.settle.is_zero() {
            self.resolve();
        }
        Some(outcome)
    }

    /// Advances the settle animation. Returns true when nothing is left to animate.
    pub fn tick(&mut self, elapsed: Duration) -> bool {
        let step = if self.settle.is_zero() {
            1.0
        } else {
            elapsed.as_secs_f64() / self.settle.as_secs_f64()
        };

        let settled = match &mut self.phase {
            Phase::Dragging(session) if session.is_released() => session.settle(step),
            _ => return true,
        };
        if settled {
            self.resolve();
        }
        settled
    }

    fn resolve(&mut self) {
        let Phase::Dragging(session) = std::mem::replace(&mut self.phase, Phase::Resting) else {
            return;
        };
        match session.outcome() {
            Some(GestureOutcome::Commit) => self.commit(&session),
            _ => log::debug!("Cancelled {}", session.direction()),
        }
    }

    fn commit(&mut self, session: &GestureSession) {
        let reference = session.reference_index();
        let discs = self.stack.discs_mut();

        discs[reference].score_percent = Some(1.0);
        discs[reference].visible = true;

        for p in session.participants() {
            let disc = &mut discs[p.index];
            disc.score_percent = Some(p.score_percent);
            disc.angle_degrees = p.to_angle;
            disc.visible = p.score_percent >= HIDE_THRESHOLD;
        }

        self.stack.set_active(reference);
        log::debug!(
            "Committed {}, active disc is now {}",
            session.direction(),
            reference
        );
    }

    pub fn render(&self) -> Vec<DiscFrame<'_>> {
        let mut frames: Vec<DiscFrame<'_>> = self
            .stack
            .discs()
            .iter()
            .enumerate()
            .map(|(i, disc)| self.resting_frame(i, disc))
            .collect();

        if let Phase::Dragging(session) = &self.phase {
            for pose in session.poses(&self.geometry) {
                let disc = &self.stack.discs()[pose.index];
                let frame = &mut frames[pose.index];
                frame.center = pose.center;
                frame.scale = pose.scale;
                frame.radius = self.geometry.center_disc_radius * pose.scale;
                frame.visible = disc.visible || pose.scale >= HIDE_THRESHOLD;
            }
        }
        frames
    }

    fn resting_frame<'a>(&self, index: usize, disc: &'a Disc) -> DiscFrame<'a> {
        let (center, scale, visible) = if self.stack.is_orbiting(index) {
            (
                self.geometry.point_on_orbit(disc.angle_degrees),
                disc.resting_scale(),
                disc.visible,
            )
        } else {
            (self.geometry.center, 1.0, true)
        };
        DiscFrame {
            center,
            radius: self.geometry.center_disc_radius * scale,
            scale,
            visible,
            label: &disc.label,
        }
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.phase, Phase::Dragging(_))
    }

    pub fn session(&self) -> Option<&GestureSession> {
        match &self.phase {
            Phase::Dragging(session) => Some(session),
            Phase::Resting => None,
        }
    }

    pub fn active_index(&self) -> usize {
        self.stack.active_index()
    }

    pub fn disc_stack(&self) -> &DiscStack {
        &self.stack
    }

    pub fn discs(&self) -> &[Disc] {
        self.stack.discs()
    }

    pub fn geometry(&self) -> OrbitGeometry {
        self.geometry
    }
}
