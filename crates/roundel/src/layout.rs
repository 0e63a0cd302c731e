//! Radial layout: partitioning a ring into equal, independently hit-testable
//! sectors.

use crate::geometry::{self, Point};
use thiserror::Error;

/// Angle at which sector 0 is centered by default: 12 o'clock in the y-up
/// convention.
pub const DEFAULT_TOP_ANGLE: f64 = 90.0;

/// One pressable wedge of the wheel. Angle bounds are each normalized to
/// `[0, 360)`; `start_angle > end_angle` marks a sector straddling the
/// 0°/360° seam.
#[derive(Debug, Clone, PartialEq)]
pub struct Sector {
    pub index: usize,
    pub start_angle: f64,
    pub end_angle: f64,
    pub inner_radius: f64,
    pub outer_radius: f64,
}

impl Sector {
    /// True if `angle` lies on this sector's arc, both edges inclusive.
    pub fn contains_angle(&self, angle: f64) -> bool {
        geometry::angle_contains(angle, self.start_angle, self.end_angle)
    }

    pub fn contains_point(&self, center: Point, point: Point) -> bool {
        geometry::point_in_arc(
            point,
            center,
            self.inner_radius,
            self.outer_radius,
            self.start_angle,
            self.end_angle,
        )
    }

    /// Angular midpoint, correct even when the arc wraps through 0°.
    pub fn mid_angle(&self) -> f64 {
        let half_span = geometry::angle_span(self.start_angle, self.end_angle) / 2.0;
        geometry::normalize_angle(self.start_angle + half_span)
    }

    pub fn mid_radius(&self) -> f64 {
        (self.inner_radius + self.outer_radius) / 2.0
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum LayoutError {
    #[error("layout needs at least one sector")]
    NoSectors,
    #[error("radii must be non-negative (inner {inner}, outer {outer})")]
    NegativeRadii { inner: f64, outer: f64 },
    #[error("inner radius {inner} exceeds outer radius {outer}")]
    InvalidRadii { inner: f64, outer: f64 },
}

/// An immutable ordered set of sectors sharing one center and one radius
/// band. Rebuilt, never patched, when sector count or radii change; only the
/// shared center may move (container resize).
#[derive(Debug, Clone, PartialEq)]
pub struct Layout {
    center: Point,
    sectors: Vec<Sector>,
}

impl Layout {
    /// Partition the ring `[inner_radius, outer_radius]` into `sector_count`
    /// equal wedges. Sector 0 is centered on `top_angle` and indices grow
    /// clockwise from there, the reading order of a note or menu wheel.
    pub fn build(
        sector_count: usize,
        center: Point,
        inner_radius: f64,
        outer_radius: f64,
        top_angle: f64,
    ) -> Result<Self, LayoutError> {
        if sector_count == 0 {
            return Err(LayoutError::NoSectors);
        }
        if inner_radius < 0.0 || outer_radius < 0.0 {
            return Err(LayoutError::NegativeRadii {
                inner: inner_radius,
                outer: outer_radius,
            });
        }
        if inner_radius > outer_radius {
            return Err(LayoutError::InvalidRadii {
                inner: inner_radius,
                outer: outer_radius,
            });
        }

        let angle_per_sector = 360.0 / sector_count as f64;
        let half = angle_per_sector / 2.0;

        let sectors = (0..sector_count)
            .map(|i| {
                // clockwise from the top: subtract, never add
                let center_angle = top_angle - i as f64 * angle_per_sector;
                Sector {
                    index: i,
                    start_angle: geometry::normalize_angle(center_angle - half),
                    end_angle: geometry::normalize_angle(center_angle + half),
                    inner_radius,
                    outer_radius,
                }
            })
            .collect();

        Ok(Self { center, sectors })
    }

    pub fn center(&self) -> Point {
        self.center
    }

    /// Reposition the wheel. Angle and radius bounds stay untouched; a size
    /// change requires a rebuild.
    pub fn set_center(&mut self, center: Point) {
        self.center = center;
    }

    pub fn sectors(&self) -> &[Sector] {
        &self.sectors
    }

    pub fn sector_count(&self) -> usize {
        self.sectors.len()
    }

    pub fn get(&self, index: usize) -> Option<&Sector> {
        self.sectors.get(index)
    }

    /// Hit-test a point against the wheel.
    ///
    /// The shared ring band is tested once before any angle math. Sectors
    /// are then scanned in index order and the first containing arc wins,
    /// which makes boundary hits deterministic: the lower-indexed sector of
    /// an adjacent pair claims their shared edge, and sector 0 claims the
    /// edge it shares with the last sector.
    pub fn sector_at(&self, point: Point) -> Option<&Sector> {
        let first = self.sectors.first()?;
        if !geometry::point_in_ring(point, self.center, first.inner_radius, first.outer_radius) {
            return None;
        }

        // a lone sector owns the whole ring; its collapsed start == end arc
        // would otherwise read as zero width
        if self.sectors.len() == 1 {
            return self.sectors.first();
        }

        let (_, angle) = geometry::cartesian_to_polar(self.center, point);
        self.sectors.iter().find(|s| s.contains_angle(angle))
    }

    /// Closed outline of sector `index` for a rendering layer.
    pub fn sector_outline(&self, index: usize, segments: Option<usize>) -> Option<Vec<Point>> {
        let s = self.sectors.get(index)?;
        Some(geometry::sector_outline_points(
            self.center,
            s.inner_radius,
            s.outer_radius,
            s.start_angle,
            s.end_angle,
            segments,
        ))
    }

    /// Cartesian midpoint of sector `index`, useful for label placement and
    /// synthetic input in tests.
    pub fn sector_midpoint(&self, index: usize) -> Option<Point> {
        let s = self.sectors.get(index)?;
        Some(geometry::polar_to_cartesian(
            self.center,
            s.mid_radius(),
            s.mid_angle(),
        ))
    }
}
