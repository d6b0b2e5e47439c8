use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use crate::scalar::Amount;
use crate::{ErrorCode, PixError};

/// A two-digit EMV field tag in `0..=99`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Tag(u8);

impl Tag {
    /// Largest tag representable in two decimal digits.
    pub const MAX: u8 = 99;

    /// Construct a tag.
    ///
    /// # Errors
    ///
    /// Returns `InvalidTag` if `id > 99`.
    pub const fn new(id: u8) -> Result<Self, PixError> {
        if id > Self::MAX {
            return Err(PixError::encode(ErrorCode::InvalidTag, 0));
        }
        Ok(Self(id))
    }

    /// Profile constants only; out-of-range ids fail const evaluation.
    pub(crate) const fn from_const(id: u8) -> Self {
        assert!(id <= Self::MAX, "tag out of range");
        Self(id)
    }

    /// Return the numeric tag.
    #[inline]
    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for Tag {
    type Error = PixError;

    fn try_from(id: u8) -> Result<Self, Self::Error> {
        Self::new(id)
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}", self.0)
    }
}

/// Content of a TLV field.
#[derive(Debug, Clone, PartialEq)]
pub enum TlvValue {
    /// Text emitted verbatim.
    Text(String),
    /// A decimal emitted with exactly two fraction digits.
    Decimal(Amount),
    /// A nested template, serialized recursively.
    Branch(TlvMap),
}

impl TlvValue {
    /// Construct a text value.
    #[inline]
    #[must_use]
    pub fn text(s: impl Into<String>) -> Self {
        Self::Text(s.into())
    }

    /// Construct a decimal value.
    #[inline]
    #[must_use]
    pub fn decimal(value: impl Into<Amount>) -> Self {
        Self::Decimal(value.into())
    }

    /// Return the nested template if this is a branch.
    #[inline]
    #[must_use]
    pub const fn as_branch(&self) -> Option<&TlvMap> {
        match self {
            Self::Branch(m) => Some(m),
            _ => None,
        }
    }

    /// Return the text if this is a text leaf.
    #[inline]
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl From<&str> for TlvValue {
    fn from(s: &str) -> Self {
        Self::Text(s.into())
    }
}

impl From<String> for TlvValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<Amount> for TlvValue {
    fn from(a: Amount) -> Self {
        Self::Decimal(a)
    }
}

impl From<TlvMap> for TlvValue {
    fn from(m: TlvMap) -> Self {
        Self::Branch(m)
    }
}

/// A template: tag-unique fields kept in insertion order.
///
/// Iteration follows insertion order. The serializer sorts by tag explicitly, so construction order
/// never affects the encoded output.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TlvMap {
    entries: Vec<(Tag, TlvValue)>,
}

impl TlvMap {
    /// Construct an empty template.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Build a template from entries.
    ///
    /// # Errors
    ///
    /// Returns `DuplicateTag` if a tag appears more than once.
    pub fn from_entries(entries: Vec<(Tag, TlvValue)>) -> Result<Self, PixError> {
        for (i, (tag, _)) in entries.iter().enumerate() {
            if entries[..i].iter().any(|(prev, _)| prev == tag) {
                return Err(PixError::encode(ErrorCode::DuplicateTag, 0));
            }
        }
        Ok(Self { entries })
    }

    /// Insert a field, returning the previous value stored under `tag`.
    pub fn insert(&mut self, tag: Tag, value: impl Into<TlvValue>) -> Option<TlvValue> {
        let value = value.into();
        match self.entries.iter_mut().find(|(t, _)| *t == tag) {
            Some((_, slot)) => Some(core::mem::replace(slot, value)),
            None => {
                self.entries.push((tag, value));
                None
            }
        }
    }

    /// Look up a field by tag.
    #[must_use]
    pub fn get(&self, tag: Tag) -> Option<&TlvValue> {
        self.entries.iter().find(|(t, _)| *t == tag).map(|(_, v)| v)
    }

    /// Returns `true` iff a field with `tag` is present.
    #[must_use]
    pub fn contains(&self, tag: Tag) -> bool {
        self.get(tag).is_some()
    }

    /// Number of fields.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the template has no fields.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over fields in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (Tag, &TlvValue)> {
        self.entries.iter().map(|(t, v)| (*t, v))
    }

    /// Fields ordered by ascending tag.
    #[must_use]
    pub fn sorted(&self) -> Vec<(Tag, &TlvValue)> {
        let mut out: Vec<(Tag, &TlvValue)> = self.iter().collect();
        out.sort_unstable_by_key(|(t, _)| *t);
        out
    }
}
