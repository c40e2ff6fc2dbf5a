use std::f64::consts::PI;

use uom::si::{
    area::square_meter,
    f64::{Area, Length},
    length::{centimeter, meter},
};

use super::GeometryError;

/// Cross-section of a pod traveling through a cylindrical tube.
///
/// The pod's inlet sits concentrically inside the tube; the annulus between
/// the inlet and the tube wall is the bypass that displaced air flows through.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Geometry {
    tube_radius: Length,
    inlet_radius: Length,
}

impl Geometry {
    /// Creates a geometry from the tube and inlet radii.
    ///
    /// # Errors
    ///
    /// Returns a [`GeometryError`] if either radius is not positive and
    /// finite, or if the inlet leaves no bypass area around it.
    pub fn new(tube_radius: Length, inlet_radius: Length) -> Result<Self, GeometryError> {
        let tube_meters = tube_radius.get::<meter>();
        if !tube_meters.is_finite() || tube_meters <= 0.0 {
            return Err(GeometryError::TubeRadius {
                meters: tube_meters,
            });
        }

        let inlet_meters = inlet_radius.get::<meter>();
        if !inlet_meters.is_finite() || inlet_meters <= 0.0 {
            return Err(GeometryError::InletRadius {
                meters: inlet_meters,
            });
        }

        let geometry = Self {
            tube_radius,
            inlet_radius,
        };

        // Radii a few ulps apart can still square to the same area.
        let bypass = geometry.bypass_area().get::<square_meter>();
        if inlet_meters >= tube_meters || bypass <= 0.0 || !geometry.area_ratio().is_finite() {
            return Err(GeometryError::NoBypass {
                tube_meters,
                inlet_meters,
            });
        }

        Ok(geometry)
    }

    #[must_use]
    pub fn tube_radius(&self) -> Length {
        self.tube_radius
    }

    #[must_use]
    pub fn inlet_radius(&self) -> Length {
        self.inlet_radius
    }

    /// Returns the full tube cross-section, `π·r_tube²`.
    #[must_use]
    pub fn tube_area(&self) -> Area {
        PI * self.tube_radius * self.tube_radius
    }

    /// Returns the pod inlet cross-section, `π·r_inlet²`.
    #[must_use]
    pub fn inlet_area(&self) -> Area {
        PI * self.inlet_radius * self.inlet_radius
    }

    /// Returns the annular bypass area, `π·(r_tube² − r_inlet²)`.
    #[must_use]
    pub fn bypass_area(&self) -> Area {
        self.tube_area() - self.inlet_area()
    }

    /// Returns the area ratio `tube_area / bypass_area` the bypass must pass.
    ///
    /// Always greater than one for a valid geometry.
    #[must_use]
    pub fn area_ratio(&self) -> f64 {
        (self.tube_area() / self.bypass_area()).value
    }
}

/// 111.5 cm tube with a 73.7 cm inlet.
impl Default for Geometry {
    fn default() -> Self {
        Self {
            tube_radius: Length::new::<centimeter>(111.5),
            inlet_radius: Length::new::<centimeter>(73.7),
        }
    }
}
