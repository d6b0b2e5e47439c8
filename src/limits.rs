use crate::profile::{MAX_CITY_CHARS, MAX_NAME_CHARS};

/// Field length limits enforced by validation.
///
/// Limits count Unicode code points, not bytes. The defaults are the BR Code maxima for the
/// merchant name (25) and merchant city (15).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct FieldLimits {
    /// Maximum receiver name length in code points.
    pub max_name_chars: usize,
    /// Maximum receiver city length in code points.
    pub max_city_chars: usize,
}

impl FieldLimits {
    /// The BR Code limits.
    pub const STANDARD: Self = Self {
        max_name_chars: MAX_NAME_CHARS,
        max_city_chars: MAX_CITY_CHARS,
    };
}

impl Default for FieldLimits {
    fn default() -> Self {
        Self::STANDARD
    }
}

/// How the builder treats an empty description.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DescriptionMode {
    /// Leave merchant account child `02` out entirely.
    #[default]
    Omit,
    /// Always emit child `02`, as `0200` when empty.
    ///
    /// Reproduces payloads issued by older Pix generators byte for byte.
    EmitEmpty,
}

/// Options for [`crate::encode_with`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EncodeOptions {
    /// Validation limits.
    pub limits: FieldLimits,
    /// Empty description handling.
    pub description: DescriptionMode,
}

impl EncodeOptions {
    /// Options that reproduce legacy payloads (empty description emitted).
    #[must_use]
    pub const fn legacy() -> Self {
        Self {
            limits: FieldLimits::STANDARD,
            description: DescriptionMode::EmitEmpty,
        }
    }
}
