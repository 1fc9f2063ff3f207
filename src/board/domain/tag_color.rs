//! Deterministic tag colours and the per-session colour cache.

use std::collections::HashMap;
use std::fmt;

/// Saturation shared by every tag colour, in percent.
pub const TAG_SATURATION: u8 = 65;

/// Lightness shared by every tag colour, in percent.
pub const TAG_LIGHTNESS: u8 = 60;

const WORD: i64 = 1 << 32;
const HALF_WORD: i64 = 1 << 31;

/// Colour of a tag chip, expressed as an HSL hue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TagColor {
    hue: u16,
}

impl TagColor {
    /// Derives the colour for a tag name.
    ///
    /// The hue is a 31-multiplier rolling hash over the UTF-16 code units of
    /// the name, reduced into `0..360`. Only the shifted term wraps to 32
    /// bits; the running sum is kept exact, matching the hues computed by
    /// the JavaScript front end.
    #[must_use]
    pub fn for_name(name: &str) -> Self {
        let hash = name.encode_utf16().fold(0_i64, |hash, unit| {
            let shifted = to_int32(hash).wrapping_shl(5);
            i64::from(unit) + i64::from(shifted) - hash
        });
        let hue = u16::try_from(hash.rem_euclid(360)).unwrap_or_default();
        Self { hue }
    }

    /// Returns the hue in degrees, `0..360`.
    #[must_use]
    pub const fn hue(self) -> u16 {
        self.hue
    }
}

impl fmt::Display for TagColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "hsl({}, {TAG_SATURATION}%, {TAG_LIGHTNESS}%)",
            self.hue
        )
    }
}

fn to_int32(value: i64) -> i32 {
    let low = value.rem_euclid(WORD);
    let signed = if low >= HALF_WORD { low - WORD } else { low };
    i32::try_from(signed).unwrap_or_default()
}

/// Process-lifetime cache of tag colours. Never persisted.
#[derive(Debug, Clone, Default)]
pub struct TagColorRegistry {
    colors: HashMap<String, TagColor>,
}

impl TagColorRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the cached colour for `name`, computing and caching it first
    /// if needed.
    pub fn get_or_create(&mut self, name: &str) -> TagColor {
        if let Some(color) = self.colors.get(name) {
            return *color;
        }
        let color = TagColor::for_name(name);
        self.colors.insert(name.to_owned(), color);
        color
    }

    /// Returns the cached colour for `name` without creating one.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<TagColor> {
        self.colors.get(name).copied()
    }

    /// Returns the number of cached colours.
    #[must_use]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Returns `true` if nothing is cached.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}
