//! Block faces and horizontal facing directions.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One of the six faces of a block.
///
/// Ordinals follow the legacy numbering shared with the save format:
/// Down=0, Up=1, North=2, South=3, West=4, East=5.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Face {
    /// The bottom face (-Y).
    Down,
    /// The top face (+Y).
    Up,
    /// The north face (-Z).
    North,
    /// The south face (+Z).
    South,
    /// The west face (-X).
    West,
    /// The east face (+X).
    East,
}

impl Face {
    /// Legacy ordinal of this face (0..=5).
    #[inline]
    pub fn ordinal(self) -> u8 {
        self as u8
    }

    /// Whether this face is one of the four horizontal directions.
    pub fn is_horizontal(self) -> bool {
        matches!(self, Face::North | Face::South | Face::West | Face::East)
    }
}

/// Error returned when a vertical face is used where a horizontal facing
/// is required.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("face {0:?} is not a horizontal facing")]
pub struct FacingError(pub Face);

/// Facing direction for blocks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Facing {
    /// Towards -Z.
    North,
    /// Towards +Z.
    South,
    /// Towards -X.
    West,
    /// Towards +X.
    East,
}

impl Facing {
    /// The four horizontal directions in legacy ordinal order.
    pub const ALL: [Facing; 4] = [Facing::North, Facing::South, Facing::West, Facing::East];

    /// The equivalent block face.
    pub fn face(self) -> Face {
        match self {
            Facing::North => Face::North,
            Facing::South => Face::South,
            Facing::West => Face::West,
            Facing::East => Face::East,
        }
    }

    /// Legacy ordinal of this facing (2..=5).
    #[inline]
    pub fn ordinal(self) -> u8 {
        self.face().ordinal()
    }

    /// Get the opposite facing
    pub fn opposite(self) -> Self {
        match self {
            Facing::North => Facing::South,
            Facing::South => Facing::North,
            Facing::West => Facing::East,
            Facing::East => Facing::West,
        }
    }

    /// Get the (x, z) offset vector for this facing
    pub fn offset(self) -> (i32, i32) {
        match self {
            Facing::North => (0, -1),
            Facing::South => (0, 1),
            Facing::West => (-1, 0),
            Facing::East => (1, 0),
        }
    }

    /// Get facing from player yaw angle
    pub fn from_yaw(yaw: f32) -> Self {
        // Normalize yaw to 0-360
        let yaw = yaw.rem_euclid(std::f32::consts::TAU);
        let degrees = yaw.to_degrees();

        if !(45.0..315.0).contains(&degrees) {
            Facing::South
        } else if (45.0..135.0).contains(&degrees) {
            Facing::West
        } else if (135.0..225.0).contains(&degrees) {
            Facing::North
        } else {
            Facing::East
        }
    }
}

impl TryFrom<Face> for Facing {
    type Error = FacingError;

    fn try_from(face: Face) -> Result<Self, FacingError> {
        match face {
            Face::North => Ok(Facing::North),
            Face::South => Ok(Facing::South),
            Face::West => Ok(Facing::West),
            Face::East => Ok(Facing::East),
            vertical => Err(FacingError(vertical)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn face_ordinals_match_legacy_numbering() {
        assert_eq!(Face::Down.ordinal(), 0);
        assert_eq!(Face::Up.ordinal(), 1);
        assert_eq!(Face::North.ordinal(), 2);
        assert_eq!(Face::South.ordinal(), 3);
        assert_eq!(Face::West.ordinal(), 4);
        assert_eq!(Face::East.ordinal(), 5);
    }

    #[test]
    fn vertical_faces_are_not_facings() {
        assert_eq!(Facing::try_from(Face::Down), Err(FacingError(Face::Down)));
        assert_eq!(Facing::try_from(Face::Up), Err(FacingError(Face::Up)));
        for facing in Facing::ALL {
            assert_eq!(Facing::try_from(facing.face()), Ok(facing));
        }
    }

    #[test]
    fn opposite_round_trips() {
        for facing in Facing::ALL {
            assert_ne!(facing.opposite(), facing);
            assert_eq!(facing.opposite().opposite(), facing);
        }
    }

    #[test]
    fn facing_from_yaw_quadrants() {
        assert_eq!(Facing::from_yaw(0.0), Facing::South);
        assert_eq!(Facing::from_yaw(std::f32::consts::PI), Facing::North);
        assert_eq!(Facing::from_yaw(std::f32::consts::FRAC_PI_2), Facing::West);
        assert_eq!(
            Facing::from_yaw(3.0 * std::f32::consts::FRAC_PI_2),
            Facing::East
        );
    }
}
