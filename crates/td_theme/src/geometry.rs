//! Screen-space coordinates used by theme layouts.

use serde::de::{self, Deserializer, SeqAccess, Visitor};
use serde::ser::{SerializeTuple, Serializer};
use serde::{Deserialize, Serialize};

/// A 2D screen position in pixels.
///
/// Serialized as a two-element array `[x, y]`. Whole numbers are written
/// back as integers so a re-serialized theme keeps the shape of the file it
/// was read from.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Position {
    /// X coordinate.
    pub x: f32,
    /// Y coordinate.
    pub y: f32,
}

impl Position {
    /// Origin.
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    /// Create a new position.
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl From<(f32, f32)> for Position {
    fn from((x, y): (f32, f32)) -> Self {
        Self { x, y }
    }
}

impl std::ops::Add for Position {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
        }
    }
}

impl std::ops::Sub for Position {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
        }
    }
}

impl std::ops::Mul<f32> for Position {
    type Output = Self;

    fn mul(self, rhs: f32) -> Self::Output {
        Self {
            x: self.x * rhs,
            y: self.y * rhs,
        }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Serde support for `f32` values that are usually whole numbers.
///
/// Whole numbers are written as integers, everything else as floats.
/// Whole numbers beyond `f32`'s exact integer range are rejected on input,
/// since they could not be written back unchanged.
pub mod compact_f32 {
    use serde::de::{self, Unexpected};
    use serde::{Deserialize, Deserializer, Serializer};

    /// Largest magnitude that is written back as an integer.
    const MAX_EXACT_INT: f32 = 16_777_216.0;

    /// Narrow a JSON number to `f32`.
    ///
    /// Returns `None` for non-finite results and for whole numbers larger
    /// in magnitude than 2^24.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn from_f64(value: f64) -> Option<f32> {
        let narrowed = value as f32;
        if !narrowed.is_finite() {
            return None;
        }
        if value.fract() == 0.0 && value.abs() > f64::from(MAX_EXACT_INT) {
            return None;
        }
        Some(narrowed)
    }

    /// Serialize, dropping the fractional part when it is zero.
    pub fn serialize<S>(value: &f32, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        if value.fract() == 0.0 && value.abs() <= MAX_EXACT_INT {
            #[allow(clippy::cast_possible_truncation)]
            let whole = *value as i64;
            serializer.serialize_i64(whole)
        } else {
            serializer.serialize_f32(*value)
        }
    }

    /// Deserialize from any JSON number [`from_f64`] accepts.
    pub fn deserialize<'de, D>(deserializer: D) -> Result<f32, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = f64::deserialize(deserializer)?;
        from_f64(value).ok_or_else(|| {
            de::Error::invalid_value(
                Unexpected::Float(value),
                &"a number exactly representable as f32",
            )
        })
    }
}

/// Adapter so a tuple element goes through [`compact_f32`].
struct Compact(f32);

impl Serialize for Compact {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        compact_f32::serialize(&self.0, serializer)
    }
}

impl Serialize for Position {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut seq = serializer.serialize_tuple(2)?;
        seq.serialize_element(&Compact(self.x))?;
        seq.serialize_element(&Compact(self.y))?;
        seq.end()
    }
}

/// Tuple element read through [`compact_f32`].
struct Coordinate(f32);

impl<'de> Deserialize<'de> for Coordinate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        compact_f32::deserialize(deserializer).map(Coordinate)
    }
}

struct PositionVisitor;

impl<'de> Visitor<'de> for PositionVisitor {
    type Value = Position;

    fn expecting(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("a two-element numeric array [x, y]")
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Position, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let Coordinate(x) = seq
            .next_element()?
            .ok_or_else(|| de::Error::invalid_length(0, &self))?;
        let Coordinate(y) = seq
            .next_element()?
            .ok_or_else(|| de::Error::invalid_length(1, &self))?;
        if seq.next_element::<de::IgnoredAny>()?.is_some() {
            return Err(de::Error::invalid_length(3, &self));
        }
        Ok(Position { x, y })
    }
}

impl<'de> Deserialize<'de> for Position {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_seq(PositionVisitor)
    }
}
