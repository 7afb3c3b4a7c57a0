use std::ops::Index;

use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};

/// A landmark position. Normalized image coordinates in the reference
/// pipeline, but nothing here assumes a unit.
pub type Point2D = Vec2;

/// The landmarks of a single face for one frame, in detector order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LandmarkSet {
    points: Vec<Point2D>,
}

impl LandmarkSet {
    pub fn new(points: Vec<Point2D>) -> Self {
        Self { points }
    }

    /// Drops the depth component; the classifier only reasons in 2D.
    pub fn from_projected(points: impl IntoIterator<Item = Vec3>) -> Self {
        Self {
            points: points.into_iter().map(|p| p.truncate()).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<Point2D> {
        self.points.get(index).copied()
    }

    pub fn points(&self) -> &[Point2D] {
        &self.points
    }

    pub fn iter(&self) -> impl Iterator<Item = Point2D> + '_ {
        self.points.iter().copied()
    }
}

impl From<Vec<Point2D>> for LandmarkSet {
    fn from(points: Vec<Point2D>) -> Self {
        Self::new(points)
    }
}

impl FromIterator<Point2D> for LandmarkSet {
    fn from_iter<T: IntoIterator<Item = Point2D>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl Index<usize> for LandmarkSet {
    type Output = Point2D;

    fn index(&self, index: usize) -> &Self::Output {
        &self.points[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn projection_drops_depth() {
        let set = LandmarkSet::from_projected([Vec3::new(0.25, 0.5, -0.1), Vec3::new(1.0, 0.0, 3.0)]);
        assert_eq!(set.len(), 2);
        assert_eq!(set[0], Vec2::new(0.25, 0.5));
        assert_eq!(set.get(1), Some(Vec2::new(1.0, 0.0)));
        assert_eq!(set.get(2), None);
    }

    #[test]
    fn serializes_as_plain_point_list() {
        let set = LandmarkSet::new(vec![Vec2::new(0.5, 0.25)]);
        let json = serde_json::to_string(&set).unwrap();
        assert_eq!(json, "[[0.5,0.25]]");
        let back: LandmarkSet = serde_json::from_str(&json).unwrap();
        assert_eq!(back, set);
    }
}
