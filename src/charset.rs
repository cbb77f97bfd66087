// Copyright (c) 2026 rezky_nightky

use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::error::{RainError, Result};

pub const DEFAULT_GLYPHS: &str = "アァカ嗨路比醬サタナハAマヤャPLラワガザダバパQvrobmlJNイィキシチニヒミリヰギジヂビピウゥクスツヌフムユュルグズブヅプエェケセテネヘメレヱゲゼデベペオォコソトノホモヨョロヲゴゾドボポヴッンабвгдежзийклмнопрстуフхцчшщъыьэюяΑΒΓΔΕΖΗΘΙΚΛΜΝΞΟΠΡΣΤΥΦΧΨΩ가나다라마바사아자차카타파하";

pub const PRESETS: &[(&str, &str)] = &[
    ("default", "Mixed katakana, kanji, latin, cyrillic, greek and hangul"),
    ("katakana", "Halfwidth katakana"),
    ("latin", "Latin letters and digits"),
    ("digits", "Digits only"),
    ("binary", "0 and 1 (alias: 01)"),
    ("hex", "0-9 and A-F"),
    ("greek", "Greek capitals"),
    ("cyrillic", "Cyrillic letters"),
    ("hangul", "Hangul syllables"),
];

/// An ordered, non-empty, immutable set of glyphs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GlyphSet(Vec<char>);

impl GlyphSet {
    pub fn from_chars(chars: Vec<char>) -> Result<Self> {
        if chars.is_empty() {
            return Err(RainError::EmptyGlyphSet);
        }
        Ok(Self(chars))
    }

    pub fn parse(s: &str) -> Result<Self> {
        Self::from_chars(s.chars().filter(|c| !c.is_control()).collect())
    }

    pub fn preset(name: &str) -> Result<Self> {
        let mut out: Vec<char> = Vec::new();
        match name.trim().to_ascii_lowercase().as_str() {
            "default" => out.extend(DEFAULT_GLYPHS.chars()),
            "katakana" => push_range(&mut out, 0xFF66, 0xFF9D),
            "latin" => {
                push_range(&mut out, 0x41, 0x5A);
                push_range(&mut out, 0x61, 0x7A);
                push_range(&mut out, 0x30, 0x39);
            }
            "digits" => push_range(&mut out, 0x30, 0x39),
            "binary" | "01" => push_range(&mut out, 0x30, 0x31),
            "hex" => {
                push_range(&mut out, 0x30, 0x39);
                push_range(&mut out, 0x41, 0x46);
            }
            "greek" => {
                push_range(&mut out, 0x0391, 0x03A1);
                push_range(&mut out, 0x03A3, 0x03A9);
            }
            "cyrillic" => push_range(&mut out, 0x0410, 0x044F),
            "hangul" => out.extend("가나다라마바사아자차카타파하".chars()),
            _ => return Err(RainError::UnknownPreset(name.to_string())),
        }
        Self::from_chars(out)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn as_slice(&self) -> &[char] {
        &self.0
    }
}

impl Default for GlyphSet {
    fn default() -> Self {
        Self(DEFAULT_GLYPHS.chars().collect())
    }
}

fn push_range(out: &mut Vec<char>, start: u32, end: u32) {
    out.extend((start..=end).filter_map(char::from_u32));
}

/// The glyph set plus the one random generator every column draws from.
pub struct GlyphSource {
    glyphs: GlyphSet,
    rng: StdRng,
}

impl GlyphSource {
    pub fn new(glyphs: GlyphSet, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => StdRng::from_os_rng(),
        };
        Self { glyphs, rng }
    }

    pub fn glyph(&mut self) -> char {
        let set = self.glyphs.as_slice();
        set[self.rng.random_range(0..set.len())]
    }

    /// Uniform integer in `[0, n)`; `n <= 0` yields 0.
    pub fn below(&mut self, n: i32) -> i32 {
        if n <= 0 {
            return 0;
        }
        self.rng.random_range(0..n)
    }

    /// Uniform integer in `[lo, hi]`.
    pub fn between(&mut self, lo: i32, hi: i32) -> i32 {
        if hi <= lo {
            return lo;
        }
        self.rng.random_range(lo..=hi)
    }

    pub fn glyphs(&self) -> &GlyphSet {
        &self.glyphs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_glyph_set_is_rejected() {
        assert!(matches!(GlyphSet::parse(""), Err(RainError::EmptyGlyphSet)));
        assert!(matches!(
            GlyphSet::parse("\n\t"),
            Err(RainError::EmptyGlyphSet)
        ));
    }

    #[test]
    fn parse_keeps_order_of_multibyte_chars() {
        let set = GlyphSet::parse("アa1").unwrap();
        assert_eq!(set.as_slice(), &['ア', 'a', '1']);
    }

    #[test]
    fn binary_preset_has_only_0_and_1() {
        let set = GlyphSet::preset("binary").unwrap();
        assert_eq!(set.as_slice(), &['0', '1']);
    }

    #[test]
    fn every_listed_preset_resolves() {
        for (name, _) in PRESETS {
            let set = GlyphSet::preset(name).unwrap();
            assert!(set.len() >= 2, "{name}");
        }
        assert!(matches!(
            GlyphSet::preset("klingon"),
            Err(RainError::UnknownPreset(_))
        ));
    }

    #[test]
    fn source_only_yields_glyphs_from_the_set() {
        let mut src = GlyphSource::new(GlyphSet::parse("xyz").unwrap(), Some(7));
        for _ in 0..200 {
            assert!("xyz".contains(src.glyph()));
        }
    }

    #[test]
    fn below_and_between_stay_in_range() {
        let mut src = GlyphSource::new(GlyphSet::default(), Some(1));
        assert_eq!(src.below(0), 0);
        assert_eq!(src.between(4, 4), 4);
        for _ in 0..500 {
            let v = src.below(5);
            assert!((0..5).contains(&v));
            let w = src.between(1, 3);
            assert!((1..=3).contains(&w));
        }
    }
}
