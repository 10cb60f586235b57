use std::fmt;

use serde::{Deserialize, Serialize};

use super::{Direction, SplineSurface};

/// Summary of a surface's parameterisation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SurfaceInfo {
    pub domain_u: (f64, f64),
    pub domain_v: (f64, f64),
    pub degree_u: usize,
    pub degree_v: usize,
    pub point_count_u: usize,
    pub point_count_v: usize,
}

impl SurfaceInfo {
    pub fn from_surface<S: SplineSurface + ?Sized>(surface: &S) -> Self {
        Self {
            domain_u: surface.domain(Direction::U),
            domain_v: surface.domain(Direction::V),
            degree_u: surface.degree(Direction::U),
            degree_v: surface.degree(Direction::V),
            point_count_u: surface.point_count(Direction::U),
            point_count_v: surface.point_count(Direction::V),
        }
    }

    pub fn degree(&self, dir: Direction) -> usize {
        match dir {
            Direction::U => self.degree_u,
            Direction::V => self.degree_v,
        }
    }

    pub fn point_count(&self, dir: Direction) -> usize {
        match dir {
            Direction::U => self.point_count_u,
            Direction::V => self.point_count_v,
        }
    }

    /// Total number of control points in the net.
    pub fn total_points(&self) -> usize {
        self.point_count_u * self.point_count_v
    }
}

impl fmt::Display for SurfaceInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Range in U: {:?}", self.domain_u)?;
        writeln!(f, "Range in V: {:?}", self.domain_v)?;
        writeln!(f, "Degree in U = {}", self.degree_u)?;
        writeln!(f, "Degree in V = {}", self.degree_v)?;
        writeln!(f, "CP count in U = {}", self.point_count_u)?;
        write!(f, "CP count in V = {}", self.point_count_v)
    }
}
