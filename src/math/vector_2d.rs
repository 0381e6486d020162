use super::{Vector2, TOLERANCE};

/// Z component of the 3D cross product of two XY vectors.
#[must_use]
pub fn cross_2d(a: &Vector2, b: &Vector2) -> f64 {
    a.x * b.y - a.y * b.x
}

/// Returns the left-pointing normal of a direction vector.
#[must_use]
pub fn left_normal(dir: &Vector2) -> Vector2 {
    Vector2::new(-dir.y, dir.x)
}

/// Which way a path turns when passing through a kink.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnDirection {
    /// Counter-clockwise turn: the interior of the corner is on the left.
    Left,
    /// Clockwise turn: the interior of the corner is on the right.
    Right,
}

impl TurnDirection {
    /// Classifies the turn from the incoming tangent to the outgoing tangent.
    ///
    /// Returns `None` when the tangents are parallel or antiparallel.
    #[must_use]
    pub fn between(incoming: &Vector2, outgoing: &Vector2) -> Option<Self> {
        let cross = cross_2d(incoming, outgoing);
        if cross > TOLERANCE {
            Some(Self::Left)
        } else if cross < -TOLERANCE {
            Some(Self::Right)
        } else {
            None
        }
    }

    /// `+1.0` for a left turn, `-1.0` for a right turn.
    #[must_use]
    pub fn sign(self) -> f64 {
        match self {
            Self::Left => 1.0,
            Self::Right => -1.0,
        }
    }

    /// Unit normal of `dir` pointing to the inside of the turn.
    #[must_use]
    pub fn inward_normal(self, dir: &Vector2) -> Vector2 {
        left_normal(dir) * self.sign()
    }
}
