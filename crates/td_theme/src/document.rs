//! Raw theme document with path-based queries.
//!
//! Engine code addresses theme values with `/`-separated paths:
//!
//! - `buttons/upgrade/position` walks nested objects.
//! - `tower-buttons[2]/tower` indexes into an array.
//! - `tower-buttons[]/tower` takes the index from the caller, which lets a
//!   loop over `array_len("tower-buttons")` reuse one path string.
//!
//! Missing keys and out-of-range indices report [`ThemeError::MissingKey`];
//! values of the wrong shape report [`ThemeError::MalformedValue`].

use serde_json::Value;

use crate::color::{Color, ColorSpec};
use crate::data::FontSize;
use crate::error::{Result, ThemeError};
use crate::geometry::{compact_f32, Position};

/// How a path segment selects an array element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Index {
    /// Plain object key.
    None,
    /// `name[N]`.
    Fixed(usize),
    /// `name[]`, resolved from the caller's index.
    Caller,
}

/// One `/`-separated component of a theme path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Segment<'a> {
    name: &'a str,
    index: Index,
}

fn parse_segment<'a>(part: &'a str, path: &str) -> Result<Segment<'a>> {
    let Some(open) = part.find('[') else {
        if part.is_empty() || part.contains(']') {
            return Err(ThemeError::InvalidPath(path.to_string()));
        }
        return Ok(Segment {
            name: part,
            index: Index::None,
        });
    };

    let name = &part[..open];
    let inner = part[open + 1..]
        .strip_suffix(']')
        .ok_or_else(|| ThemeError::InvalidPath(path.to_string()))?;
    if name.is_empty() {
        return Err(ThemeError::InvalidPath(path.to_string()));
    }

    let index = if inner.is_empty() {
        Index::Caller
    } else {
        inner
            .parse()
            .map(Index::Fixed)
            .map_err(|_| ThemeError::InvalidPath(path.to_string()))?
    };

    Ok(Segment { name, index })
}

fn parse_path(path: &str) -> Result<Vec<Segment<'_>>> {
    if path.is_empty() {
        return Err(ThemeError::InvalidPath(path.to_string()));
    }
    path.split('/').map(|part| parse_segment(part, path)).collect()
}

/// Describe a JSON value's type for error messages.
fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// A parsed theme file, queried by path.
///
/// The root is always a JSON object.
#[derive(Debug, Clone, PartialEq)]
pub struct ThemeDocument {
    root: Value,
}

impl ThemeDocument {
    /// Wrap a parsed JSON value.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::MalformedValue`] if the root is not an object.
    pub fn from_value(root: Value) -> Result<Self> {
        if !root.is_object() {
            return Err(ThemeError::malformed("<root>", "an object"));
        }
        Ok(Self { root })
    }

    /// The underlying JSON value.
    #[must_use]
    pub fn root(&self) -> &Value {
        &self.root
    }

    /// Consume the document, returning its JSON value.
    #[must_use]
    pub fn into_value(self) -> Value {
        self.root
    }

    /// Look up the value at `path`.
    ///
    /// `idx` fills in any `[]` segment.
    ///
    /// # Errors
    ///
    /// - [`ThemeError::InvalidPath`] if the path cannot be parsed, or uses
    ///   `[]` without an index.
    /// - [`ThemeError::MissingKey`] if a key or index does not exist.
    /// - [`ThemeError::MalformedValue`] if an intermediate value is not an
    ///   object or array as the path requires.
    pub fn value(&self, path: &str, idx: Option<usize>) -> Result<&Value> {
        let segments = parse_path(path)?;
        let mut current = &self.root;
        let mut walked = String::new();

        for segment in segments {
            if !walked.is_empty() {
                walked.push('/');
            }
            walked.push_str(segment.name);

            let object = current
                .as_object()
                .ok_or_else(|| ThemeError::malformed(parent_of(&walked), "an object"))?;
            current = object
                .get(segment.name)
                .ok_or_else(|| ThemeError::missing(walked.clone()))?;

            let index = match segment.index {
                Index::None => continue,
                Index::Fixed(i) => i,
                Index::Caller => idx.ok_or_else(|| ThemeError::InvalidPath(path.to_string()))?,
            };

            let array = current
                .as_array()
                .ok_or_else(|| ThemeError::malformed(walked.clone(), "an array"))?;
            walked.push_str(&format!("[{index}]"));
            current = array
                .get(index)
                .ok_or_else(|| ThemeError::missing(walked.clone()))?;
        }

        Ok(current)
    }

    /// Check whether `path` resolves to a value.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::InvalidPath`] for unparseable paths; missing or
    /// mistyped data yields `Ok(false)`.
    pub fn key_exists(&self, path: &str, idx: Option<usize>) -> Result<bool> {
        match self.value(path, idx) {
            Ok(_) => Ok(true),
            Err(ThemeError::MissingKey { .. } | ThemeError::MalformedValue { .. }) => Ok(false),
            Err(e) => Err(e),
        }
    }

    /// Read a `[x, y]` position.
    ///
    /// Coordinates follow [`compact_f32::from_f64`], so whole numbers beyond
    /// 2^24 are malformed.
    pub fn position(&self, path: &str, idx: Option<usize>) -> Result<Position> {
        let value = self.value(path, idx)?;
        let malformed = || {
            ThemeError::malformed(
                display_path(path, idx),
                "a two-element numeric array [x, y]",
            )
        };

        let coordinate = |v: &Value| v.as_f64().and_then(compact_f32::from_f64);
        match value.as_array().map(Vec::as_slice) {
            Some([x, y]) => match (coordinate(x), coordinate(y)) {
                (Some(x), Some(y)) => Ok(Position::new(x, y)),
                _ => Err(malformed()),
            },
            _ => Err(malformed()),
        }
    }

    /// Read an integer.
    pub fn int(&self, path: &str, idx: Option<usize>) -> Result<i64> {
        let value = self.value(path, idx)?;
        value.as_i64().ok_or_else(|| {
            ThemeError::malformed(
                display_path(path, idx),
                format!("an integer, found {}", kind(value)),
            )
        })
    }

    /// Read a number. Integers are accepted.
    pub fn float(&self, path: &str, idx: Option<usize>) -> Result<f32> {
        let value = self.value(path, idx)?;
        match value.as_f64() {
            Some(v) => compact_f32::from_f64(v).ok_or_else(|| {
                ThemeError::malformed(display_path(path, idx), "a number f32 can hold exactly")
            }),
            None => Err(ThemeError::malformed(
                display_path(path, idx),
                format!("a number, found {}", kind(value)),
            )),
        }
    }

    /// Read a string.
    pub fn string(&self, path: &str, idx: Option<usize>) -> Result<&str> {
        let value = self.value(path, idx)?;
        value.as_str().ok_or_else(|| {
            ThemeError::malformed(
                display_path(path, idx),
                format!("a string, found {}", kind(value)),
            )
        })
    }

    /// Read a positive integer font size.
    pub fn font_size(&self, path: &str, idx: Option<usize>) -> Result<FontSize> {
        let value = self.value(path, idx)?;
        value
            .as_u64()
            .and_then(|v| u32::try_from(v).ok())
            .and_then(FontSize::new)
            .ok_or_else(|| {
                ThemeError::malformed(display_path(path, idx), "a positive integer font size")
            })
    }

    /// Read a color given by name or as an `[r, g, b]` array.
    pub fn color(&self, path: &str, idx: Option<usize>) -> Result<Color> {
        let value = self.value(path, idx)?;
        let spec: ColorSpec = serde_json::from_value(value.clone()).map_err(|_| {
            ThemeError::malformed(display_path(path, idx), "a color name or [r, g, b] array")
        })?;
        spec.resolve().map_err(|e| match e {
            ThemeError::MalformedValue { expected, .. } => {
                ThemeError::malformed(display_path(path, idx), expected)
            }
            other => other,
        })
    }

    /// Length of the array at `path`.
    pub fn array_len(&self, path: &str, idx: Option<usize>) -> Result<usize> {
        let value = self.value(path, idx)?;
        value.as_array().map(Vec::len).ok_or_else(|| {
            ThemeError::malformed(
                display_path(path, idx),
                format!("an array, found {}", kind(value)),
            )
        })
    }

    /// Keys of the object at `path`, in document order.
    pub fn object_keys(&self, path: &str, idx: Option<usize>) -> Result<Vec<&str>> {
        let value = self.value(path, idx)?;
        value
            .as_object()
            .map(|obj| obj.keys().map(String::as_str).collect())
            .ok_or_else(|| {
                ThemeError::malformed(
                    display_path(path, idx),
                    format!("an object, found {}", kind(value)),
                )
            })
    }
}

/// `path` with any `[]` replaced by the caller's index.
fn display_path(path: &str, idx: Option<usize>) -> String {
    match idx {
        Some(i) => path.replace("[]", &format!("[{i}]")),
        None => path.to_string(),
    }
}

/// Everything before the last `/`, or `<root>`.
fn parent_of(walked: &str) -> String {
    match walked.rfind('/') {
        Some(pos) => walked[..pos].to_string(),
        None => "<root>".to_string(),
    }
}
