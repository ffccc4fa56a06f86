//! The [`Note`] record and the small value types it is built from.

use chrono::{DateTime, Local};
use derive_more::{Display, From, FromStr};
use getset::{CopyGetters, Getters};
use rand::Rng;
use serde::{Deserialize, Serialize};
use strum::{EnumIter, EnumString, IntoEnumIterator};

/// Content given to every freshly created note.
pub const DEFAULT_CONTENT: &str = "New Note";

/// Identifies a note for its whole lifetime.
///
/// The value is the wall-clock time of creation in milliseconds since the Unix epoch, bumped
/// forward when needed so that no two notes in a store ever share one.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    Display,
    From,
    FromStr,
)]
#[serde(transparent)]
pub struct NoteId(i64);

impl NoteId {
    pub fn as_millis(self) -> i64 {
        self.0
    }

    /// The smallest id strictly greater than this one.
    pub(crate) fn next(self) -> Self {
        Self(self.0.saturating_add(1))
    }
}

/// A colour token, usually `#rrggbb`.
///
/// Tokens are stored verbatim; [`Color::rgb`] is the only place they are interpreted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[serde(transparent)]
pub struct Color(String);

impl Color {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// A uniformly random `#rrggbb` colour.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let value: u32 = rng.random_range(0..=0x00FF_FFFF);
        Self(format!("#{value:06x}"))
    }

    /// Parse user input: either a [`Swatch`] name or a hex colour.
    pub fn from_user_input(input: &str) -> Option<Self> {
        if let Ok(swatch) = input.parse::<Swatch>() {
            return Some(swatch.into());
        }

        let color = Self::new(input.trim());
        color.rgb().map(|_| color)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The red, green and blue channels of a `#rrggbb` or `#rgb` token.
    pub fn rgb(&self) -> Option<(u8, u8, u8)> {
        let hex = self.0.strip_prefix('#')?;
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }

        match hex.len() {
            6 => Some((
                channel(hex.get(0..2)?)?,
                channel(hex.get(2..4)?)?,
                channel(hex.get(4..6)?)?,
            )),
            // Shorthand: each digit is doubled, so `f` becomes `ff`
            3 => Some((
                channel(hex.get(0..1)?)? * 17,
                channel(hex.get(1..2)?)? * 17,
                channel(hex.get(2..3)?)? * 17,
            )),
            _ => None,
        }
    }
}

fn channel(digits: &str) -> Option<u8> {
    u8::from_str_radix(digits, 16).ok()
}

impl From<Swatch> for Color {
    fn from(swatch: Swatch) -> Self {
        Self::new(swatch.token())
    }
}

/// Preset colours offered by the colour picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, EnumString, strum::Display)]
#[strum(ascii_case_insensitive, serialize_all = "lowercase")]
pub enum Swatch {
    Yellow,
    Orange,
    Red,
    Green,
    Teal,
    Blue,
    Purple,
    Pink,
}

impl Swatch {
    pub fn token(self) -> &'static str {
        match self {
            Swatch::Yellow => "#fff475",
            Swatch::Orange => "#fbbc04",
            Swatch::Red => "#f28b82",
            Swatch::Green => "#ccff90",
            Swatch::Teal => "#a7ffeb",
            Swatch::Blue => "#cbf0f8",
            Swatch::Purple => "#d7aefb",
            Swatch::Pink => "#fdcfe8",
        }
    }

    pub fn all() -> impl Iterator<Item = Swatch> {
        Self::iter()
    }
}

/// A single sticky note.
///
/// Notes are owned by a [`NoteStore`](crate::NoteStore) and only ever mutated through it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters, CopyGetters)]
pub struct Note {
    #[getset(get_copy = "pub")]
    pub(crate) id: NoteId,
    #[getset(get = "pub")]
    pub(crate) content: String,
    #[getset(get = "pub")]
    pub(crate) color: Color,
    /// Human readable creation date
    #[getset(get = "pub")]
    pub(crate) date: String,
    #[getset(get_copy = "pub")]
    pub(crate) starred: bool,
}

impl Note {
    pub(crate) fn new(id: NoteId, color: Color, created: &DateTime<Local>) -> Self {
        Self {
            id,
            content: DEFAULT_CONTENT.to_string(),
            color,
            date: format_date(created),
            starred: false,
        }
    }
}

/// Long-form US date, e.g. `October 18, 2026`.
pub(crate) fn format_date(date: &DateTime<Local>) -> String {
    date.format("%B %-d, %Y").to_string()
}

#[cfg(test)]
mod test {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn test_random_color_format() {
        let mut rng = rand::rng();

        for _ in 0..64 {
            let color = Color::random(&mut rng);
            let token = color.as_str();

            assert_eq!(token.len(), 7);
            assert!(token.starts_with('#'));
            assert!(color.rgb().is_some(), "{token} should parse");
            assert_eq!(token, token.to_lowercase());
        }
    }

    #[test]
    fn test_rgb() {
        assert_eq!(Color::new("#ff8000").rgb(), Some((255, 128, 0)));
        assert_eq!(Color::new("#FFF").rgb(), Some((255, 255, 255)));
        assert_eq!(Color::new("#0a0").rgb(), Some((0, 170, 0)));
        assert_eq!(Color::new("ff8000").rgb(), None);
        assert_eq!(Color::new("#ff80").rgb(), None);
        assert_eq!(Color::new("#+f+f+f").rgb(), None);
        assert_eq!(Color::new("tomato").rgb(), None);
    }

    #[test]
    fn test_from_user_input() {
        assert_eq!(
            Color::from_user_input("Teal"),
            Some(Color::new(Swatch::Teal.token()))
        );
        assert_eq!(
            Color::from_user_input(" #123456 "),
            Some(Color::new("#123456"))
        );
        assert_eq!(Color::from_user_input("not a colour"), None);
    }

    #[test]
    fn test_swatches_are_valid_colors() {
        assert_eq!(Swatch::all().count(), 8);

        for swatch in Swatch::all() {
            assert!(Color::from(swatch).rgb().is_some(), "{swatch}");
            assert_eq!(swatch.to_string().parse::<Swatch>().unwrap(), swatch);
        }
    }

    #[test]
    fn test_new_note() {
        let created = Local.with_ymd_and_hms(2026, 10, 18, 9, 30, 0).unwrap();
        let note = Note::new(NoteId::from(42), Color::new("#abcdef"), &created);

        assert_eq!(note.id(), NoteId::from(42));
        assert_eq!(note.content(), DEFAULT_CONTENT);
        assert_eq!(note.date(), "October 18, 2026");
        assert!(!note.starred());
    }

    #[test]
    fn test_serialized_shape() {
        let created = Local.with_ymd_and_hms(2024, 3, 5, 12, 0, 0).unwrap();
        let note = Note::new(NoteId::from(1709640000000), Color::new("#fff475"), &created);

        let value = serde_json::to_value(&note).unwrap();

        assert_eq!(
            value,
            serde_json::json!({
                "id": 1709640000000_i64,
                "content": "New Note",
                "color": "#fff475",
                "date": "March 5, 2024",
                "starred": false,
            })
        );
    }
}
