//! # Axis Mapping
//!
//! The samplers produce points in a native `(u, v, w)` frame: `u` and `v`
//! span the curve's plane and `w` is constant. An [`AxisPermutation`] decides
//! which world axis each of the three lands on.
//!
//! ## Example
//!
//! ```rust
//! use glam::DVec3;
//! use stroke_geometry::AxisPermutation;
//!
//! let axes: AxisPermutation = "XZY".parse().unwrap();
//! // u -> X, v -> Z, w -> Y
//! assert_eq!(axes.map(1.0, 2.0, 3.0), DVec3::new(1.0, 3.0, 2.0));
//! assert_eq!(axes.unmap(DVec3::new(1.0, 3.0, 2.0)), (1.0, 2.0, 3.0));
//! ```

use std::fmt;
use std::str::FromStr;

use config::constants::DEFAULT_AXIS_CODE;
use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::error::{GeometryError, GeometryResult};

// =============================================================================
// AXIS
// =============================================================================

/// One of the three world axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    /// All axes in component order.
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    /// Component index of this axis in a `DVec3`.
    #[inline]
    pub fn index(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
        }
    }

    /// Unit vector along this axis.
    #[inline]
    pub fn unit(self) -> DVec3 {
        match self {
            Axis::X => DVec3::X,
            Axis::Y => DVec3::Y,
            Axis::Z => DVec3::Z,
        }
    }

    /// Upper-case letter naming this axis.
    #[inline]
    pub fn letter(self) -> char {
        match self {
            Axis::X => 'X',
            Axis::Y => 'Y',
            Axis::Z => 'Z',
        }
    }

    /// Parses a single axis letter, case-insensitively.
    pub fn from_letter(letter: char) -> GeometryResult<Self> {
        match letter.to_ascii_uppercase() {
            'X' => Ok(Axis::X),
            'Y' => Ok(Axis::Y),
            'Z' => Ok(Axis::Z),
            other => Err(GeometryError::invalid_argument(format!(
                "axis must be one of X, Y, Z, got '{other}'"
            ))),
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

// =============================================================================
// AXIS PERMUTATION
// =============================================================================

/// Placement of the sampler's `(u, v, w)` onto world axes.
///
/// Always a bijection: construction rejects codes that repeat an axis.
/// Serialized as its three-letter code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct AxisPermutation {
    slots: [Axis; 3],
}

impl AxisPermutation {
    /// Identity mapping: u -> X, v -> Y, w -> Z.
    pub const XYZ: AxisPermutation = AxisPermutation {
        slots: [Axis::X, Axis::Y, Axis::Z],
    };

    /// Upright XZ-plane mapping: u -> X, v -> Z, w -> Y.
    pub const XZY: AxisPermutation = AxisPermutation {
        slots: [Axis::X, Axis::Z, Axis::Y],
    };

    /// Builds a permutation from the axes receiving `u`, `v` and `w`.
    ///
    /// Fails with `InvalidArgument` when an axis is used twice.
    pub fn new(u: Axis, v: Axis, w: Axis) -> GeometryResult<Self> {
        if u == v || u == w || v == w {
            return Err(GeometryError::invalid_argument(format!(
                "axis permutation must use each of X, Y, Z once, got {u}{v}{w}"
            )));
        }
        Ok(Self { slots: [u, v, w] })
    }

    /// Axis receiving `u`.
    #[inline]
    pub fn u(&self) -> Axis {
        self.slots[0]
    }

    /// Axis receiving `v`.
    #[inline]
    pub fn v(&self) -> Axis {
        self.slots[1]
    }

    /// Axis receiving the constant `w`.
    #[inline]
    pub fn w(&self) -> Axis {
        self.slots[2]
    }

    /// Places `u`, `v` and `w` onto their world axes.
    pub fn map(&self, u: f64, v: f64, w: f64) -> DVec3 {
        let mut out = [0.0; 3];
        out[self.slots[0].index()] = u;
        out[self.slots[1].index()] = v;
        out[self.slots[2].index()] = w;
        DVec3::from_array(out)
    }

    /// Reads a world point back into sampler-native `(u, v, w)`.
    pub fn unmap(&self, point: DVec3) -> (f64, f64, f64) {
        let p = point.to_array();
        (
            p[self.slots[0].index()],
            p[self.slots[1].index()],
            p[self.slots[2].index()],
        )
    }

    /// Three-letter code, e.g. `"XZY"`.
    pub fn code(&self) -> String {
        self.slots.iter().map(|axis| axis.letter()).collect()
    }
}

impl Default for AxisPermutation {
    fn default() -> Self {
        DEFAULT_AXIS_CODE.parse().unwrap_or(Self::XZY)
    }
}

impl FromStr for AxisPermutation {
    type Err = GeometryError;

    fn from_str(code: &str) -> Result<Self, Self::Err> {
        let letters: Vec<char> = code.trim().chars().collect();
        if letters.len() != 3 {
            return Err(GeometryError::invalid_argument(format!(
                "axis code must have exactly 3 letters, got '{code}'"
            )));
        }
        let axes = letters
            .iter()
            .map(|&letter| Axis::from_letter(letter))
            .collect::<GeometryResult<Vec<_>>>()
            .map_err(|_| {
                GeometryError::invalid_argument(format!(
                    "axis code may only contain X, Y, Z, got '{code}'"
                ))
            })?;
        Self::new(axes[0], axes[1], axes[2]).map_err(|_| {
            GeometryError::invalid_argument(format!(
                "axis code must not repeat an axis, got '{code}'"
            ))
        })
    }
}

impl TryFrom<String> for AxisPermutation {
    type Error = GeometryError;

    fn try_from(code: String) -> Result<Self, Self::Error> {
        code.parse()
    }
}

impl From<AxisPermutation> for String {
    fn from(axes: AxisPermutation) -> Self {
        axes.code()
    }
}

impl fmt::Display for AxisPermutation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.code())
    }
}
