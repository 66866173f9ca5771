//! Matrix geometries of the two supported keyboard families.

use serde::Serialize;
use std::fmt;

/// Matrix coordinate as (row, col).
pub type MatrixPosition = (usize, usize);

/// Wired positions without a physical switch.
const WIRED_SENTINELS: [MatrixPosition; 2] = [(2, 2), (3, 2)];

/// Wireless positions without a physical switch.
#[rustfmt::skip]
const WIRELESS_SENTINELS: [MatrixPosition; 10] = [
    (2, 6),
    (3, 0), (3, 1), (3, 2), (3, 6),
    (6, 6),
    (7, 0), (7, 1), (7, 2), (7, 6),
];

/// Physical key matrix of a supported keyboard family.
///
/// # Layout
///
/// - `Wired`: 4 rows x 12 columns, both halves side by side
/// - `Wireless`: 8 rows x 7 columns, left half in rows 0-3 and the mirrored
///   right half in rows 4-7 (col 0 = outermost key)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Geometry {
    /// 4 x 12 matrix
    Wired,
    /// 8 x 7 matrix
    Wireless,
}

impl Geometry {
    /// Both geometries, in classification order.
    pub const ALL: [Self; 2] = [Self::Wired, Self::Wireless];

    /// Number of matrix rows.
    #[must_use]
    pub const fn rows(self) -> usize {
        match self {
            Self::Wired => 4,
            Self::Wireless => 8,
        }
    }

    /// Number of cells per row (the row width used for flat indices).
    #[must_use]
    pub const fn cols(self) -> usize {
        match self {
            Self::Wired => 12,
            Self::Wireless => 7,
        }
    }

    /// Total number of matrix cells, sentinels included.
    #[must_use]
    pub const fn cell_count(self) -> usize {
        self.rows() * self.cols()
    }

    /// Positions that never carry a key and always hold the empty marker.
    #[must_use]
    pub const fn sentinels(self) -> &'static [MatrixPosition] {
        match self {
            Self::Wired => &WIRED_SENTINELS,
            Self::Wireless => &WIRELESS_SENTINELS,
        }
    }

    /// Returns true if `position` has no physical key in this geometry.
    #[must_use]
    pub fn is_sentinel(self, position: MatrixPosition) -> bool {
        self.sentinels().contains(&position)
    }

    /// Row-major flat index of a cell.
    ///
    /// Columns past the row width are not rejected; they simply spill into
    /// the index range of the next row.
    #[must_use]
    pub const fn flat_index(self, row: usize, col: usize) -> usize {
        row * self.cols() + col
    }

    /// Converts a flat index back to a matrix position.
    ///
    /// Uses truncating division, so negative indices never resolve.
    /// Returns `None` when the position falls outside the matrix.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn position_of(self, index: i64) -> Option<MatrixPosition> {
        let width = self.cols() as i64;
        let (row, col) = (index / width, index % width);
        if row < 0 || col < 0 {
            return None;
        }

        let (row, col) = (row as usize, col as usize);
        (row < self.rows() && col < self.cols()).then_some((row, col))
    }

    /// Lowercase name used in messages and JSON output.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Wired => "wired",
            Self::Wireless => "wireless",
        }
    }
}

impl fmt::Display for Geometry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Outcome of classifying a configuration's layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum KeyboardKind {
    /// Layer 0 is a 4 x 12 matrix
    Wired,
    /// Layer 0 is an 8 x 7 matrix
    Wireless,
    /// Any other shape, or no layers at all
    Unknown,
}

impl KeyboardKind {
    /// The matrix geometry for a recognised kind.
    #[must_use]
    pub const fn geometry(self) -> Option<Geometry> {
        match self {
            Self::Wired => Some(Geometry::Wired),
            Self::Wireless => Some(Geometry::Wireless),
            Self::Unknown => None,
        }
    }
}

impl From<Geometry> for KeyboardKind {
    fn from(geometry: Geometry) -> Self {
        match geometry {
            Geometry::Wired => Self::Wired,
            Geometry::Wireless => Self::Wireless,
        }
    }
}

impl fmt::Display for KeyboardKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.geometry() {
            Some(geometry) => geometry.fmt(f),
            None => f.write_str("unknown"),
        }
    }
}

/// Direction of a layout conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    /// 8 x 7 source, 4 x 12 destination
    WirelessToWired,
    /// 4 x 12 source, 8 x 7 destination
    WiredToWireless,
}

impl Direction {
    /// Picks the direction that turns `source` into `target`.
    ///
    /// Returns `None` when both geometries are the same.
    #[must_use]
    pub const fn between(source: Geometry, target: Geometry) -> Option<Self> {
        match (source, target) {
            (Geometry::Wireless, Geometry::Wired) => Some(Self::WirelessToWired),
            (Geometry::Wired, Geometry::Wireless) => Some(Self::WiredToWireless),
            _ => None,
        }
    }

    /// Geometry the source layout is read in.
    #[must_use]
    pub const fn source(self) -> Geometry {
        match self {
            Self::WirelessToWired => Geometry::Wireless,
            Self::WiredToWireless => Geometry::Wired,
        }
    }

    /// Geometry of the produced layout.
    #[must_use]
    pub const fn target(self) -> Geometry {
        match self {
            Self::WirelessToWired => Geometry::Wired,
            Self::WiredToWireless => Geometry::Wireless,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} to {}", self.source(), self.target())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_geometry_dimensions() {
        assert_eq!(Geometry::Wired.rows(), 4);
        assert_eq!(Geometry::Wired.cols(), 12);
        assert_eq!(Geometry::Wireless.rows(), 8);
        assert_eq!(Geometry::Wireless.cols(), 7);
        assert_eq!(Geometry::Wired.cell_count(), 48);
        assert_eq!(Geometry::Wireless.cell_count(), 56);
    }

    #[test]
    fn test_both_geometries_have_46_keys() {
        for geometry in Geometry::ALL {
            assert_eq!(geometry.cell_count() - geometry.sentinels().len(), 46);
        }
    }

    #[test]
    fn test_sentinels_inside_matrix() {
        for geometry in Geometry::ALL {
            for &(row, col) in geometry.sentinels() {
                assert!(row < geometry.rows() && col < geometry.cols());
            }
        }
    }

    #[test]
    fn test_is_sentinel() {
        assert!(Geometry::Wired.is_sentinel((3, 2)));
        assert!(!Geometry::Wired.is_sentinel((3, 3)));
        assert!(Geometry::Wireless.is_sentinel((7, 6)));
        assert!(!Geometry::Wireless.is_sentinel((0, 6)));
    }

    #[test]
    fn test_flat_index_and_back() {
        assert_eq!(Geometry::Wired.flat_index(2, 5), 29);
        assert_eq!(Geometry::Wired.position_of(29), Some((2, 5)));
        assert_eq!(Geometry::Wireless.flat_index(2, 5), 19);
        assert_eq!(Geometry::Wireless.position_of(19), Some((2, 5)));
    }

    #[test]
    fn test_position_of_out_of_range() {
        assert_eq!(Geometry::Wired.position_of(48), None);
        assert_eq!(Geometry::Wireless.position_of(56), None);
        assert_eq!(Geometry::Wireless.position_of(55), Some((7, 6)));
    }

    #[test]
    fn test_position_of_negative() {
        assert_eq!(Geometry::Wired.position_of(-1), None);
        assert_eq!(Geometry::Wired.position_of(-12), None);
        assert_eq!(Geometry::Wireless.position_of(-100), None);
    }

    #[test]
    fn test_direction_between() {
        assert_eq!(
            Direction::between(Geometry::Wireless, Geometry::Wired),
            Some(Direction::WirelessToWired)
        );
        assert_eq!(
            Direction::between(Geometry::Wired, Geometry::Wireless),
            Some(Direction::WiredToWireless)
        );
        assert_eq!(Direction::between(Geometry::Wired, Geometry::Wired), None);
    }

    #[test]
    fn test_direction_endpoints() {
        let direction = Direction::WirelessToWired;
        assert_eq!(direction.source(), Geometry::Wireless);
        assert_eq!(direction.target(), Geometry::Wired);
        assert_eq!(direction.to_string(), "wireless to wired");
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(KeyboardKind::Wired.to_string(), "wired");
        assert_eq!(KeyboardKind::Unknown.to_string(), "unknown");
        assert_eq!(KeyboardKind::from(Geometry::Wireless), KeyboardKind::Wireless);
    }
}
