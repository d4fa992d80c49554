use crate::{BASE_ANGULAR_SPACING, CENTER_DISC_RATIO, ORBIT_RADIUS_FACTOR};

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance_to(&self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn center(&self) -> Point {
        Point::new(self.width / 2.0, self.height / 2.0)
    }

    pub fn short_side(&self) -> f64 {
        self.width.min(self.height)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    pub center: Point,
    pub radius: f64,
}

impl Circle {
    pub fn new(center: Point, radius: f64) -> Self {
        Self { center, radius }
    }

    pub fn contains(&self, point: Point) -> bool {
        self.center.distance_to(point) <= self.radius
    }
}

/// Resting geometry of the widget, derived from the container's bounding box.
///
/// The container is treated as square: the shorter side governs both radii, and
/// the whole figure is centred in the box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitGeometry {
    pub center: Point,
    pub center_disc_radius: f64,
    pub orbit_path_radius: f64,
    pub base_angular_spacing: f64,
}

impl OrbitGeometry {
    pub fn compute(size: Size) -> Self {
        let center_disc_radius = size.short_side() * CENTER_DISC_RATIO;
        Self {
            center: size.center(),
            center_disc_radius,
            orbit_path_radius: center_disc_radius * ORBIT_RADIUS_FACTOR,
            base_angular_spacing: BASE_ANGULAR_SPACING,
        }
    }

    /// Screen position at `degrees` on the orbit path. 0° is 3 o'clock and angles
    /// grow clockwise because screen Y points down, so 90° is straight below.
    pub fn point_on_orbit(&self, degrees: f64) -> Point {
        point_on_circle(self.center, self.orbit_path_radius, degrees)
    }

    pub fn center_circle(&self) -> Circle {
        Circle::new(self.center, self.center_disc_radius)
    }

    pub fn orbit_circle(&self, degrees: f64, scale: f64) -> Circle {
        Circle::new(self.point_on_orbit(degrees), self.center_disc_radius * scale)
    }
}

impl Default for OrbitGeometry {
    fn default() -> Self {
        Self::compute(Size::default())
    }
}

pub fn point_on_circle(center: Point, radius: f64, degrees: f64) -> Point {
    let angle = degrees.to_radians();
    Point::new(
        center.x + radius * angle.cos(),
        center.y + radius * angle.sin(),
    )
}
