//! Stickerless cube colors and the enumeration of the unique color schemes.

use std::fmt;
use std::str::FromStr;

mod schemes;

pub use schemes::{ColorScheme, UNIQUE_COLOR_SCHEMES, generate_codes, unique_color_schemes};

/// One of the six stickerless colors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Color {
    White,
    Yellow,
    Green,
    Blue,
    Orange,
    Red,
}

impl Color {
    /// Basic colors in face order: up, down, front, back, left, right.
    pub const BASIC: [Color; 6] = [
        Color::White,
        Color::Yellow,
        Color::Green,
        Color::Blue,
        Color::Orange,
        Color::Red,
    ];

    pub fn letter(self) -> char {
        match self {
            Color::White => 'W',
            Color::Yellow => 'Y',
            Color::Green => 'G',
            Color::Blue => 'B',
            Color::Orange => 'O',
            Color::Red => 'R',
        }
    }

    /// Fill name used in the generated stylesheet.
    pub fn name(self) -> &'static str {
        match self {
            Color::White => "white",
            Color::Yellow => "yellow",
            Color::Green => "green",
            Color::Blue => "blue",
            Color::Orange => "orange",
            Color::Red => "red",
        }
    }

    pub fn from_letter(c: char) -> Option<Color> {
        Color::BASIC.into_iter().find(|col| col.letter() == c)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// Color name for a single-letter color code, e.g. `'W'` -> `"white"`.
pub fn color_name(letter: char) -> Option<&'static str> {
    Color::from_letter(letter).map(Color::name)
}

/// Cube face positions, in the order used by scheme codes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Face {
    Up,
    Down,
    Front,
    Back,
    Left,
    Right,
}

impl Face {
    pub const ALL: [Face; 6] = [
        Face::Up,
        Face::Down,
        Face::Front,
        Face::Back,
        Face::Left,
        Face::Right,
    ];

    /// Stylesheet class that templates put on the stickers of this face.
    pub fn css_class(self) -> &'static str {
        match self {
            Face::Up => "col_up",
            Face::Down => "col_down",
            Face::Front => "col_front",
            Face::Back => "col_back",
            Face::Left => "col_left",
            Face::Right => "col_right",
        }
    }
}

/// Six colors in face order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SchemeCode(pub [Color; 6]);

impl SchemeCode {
    pub fn colors(&self) -> [Color; 6] {
        self.0
    }

    pub fn color_of(&self, face: Face) -> Color {
        self.0[face as usize]
    }
}

impl fmt::Display for SchemeCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in self.0 {
            write!(f, "{c}")?;
        }
        Ok(())
    }
}

/// Error produced when parsing a scheme code such as `WYGBOR`.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum CodeError {
    #[error("scheme code {0:?} must have exactly 6 letters")]
    Length(String),
    #[error("unknown color letter {letter:?} in scheme code {code:?}")]
    UnknownLetter { code: String, letter: char },
    #[error("color {letter:?} appears more than once in scheme code {code:?}")]
    Repeated { code: String, letter: char },
}

impl FromStr for SchemeCode {
    type Err = CodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let letters: Vec<char> = s.trim().chars().map(|c| c.to_ascii_uppercase()).collect();
        let Ok(letters) = <[char; 6]>::try_from(letters) else {
            return Err(CodeError::Length(s.to_string()));
        };
        let mut out = [Color::White; 6];
        for (i, letter) in letters.into_iter().enumerate() {
            let color = Color::from_letter(letter).ok_or_else(|| CodeError::UnknownLetter {
                code: s.to_string(),
                letter,
            })?;
            if out[..i].contains(&color) {
                return Err(CodeError::Repeated {
                    code: s.to_string(),
                    letter,
                });
            }
            out[i] = color;
        }
        Ok(SchemeCode(out))
    }
}

/// Reference coloring, `WYGBOR`.
pub const BASIC_CODE: SchemeCode = SchemeCode(Color::BASIC);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_names() {
        let names: Vec<_> = "WYGBOR".chars().filter_map(color_name).collect();
        assert_eq!(
            names,
            ["white", "yellow", "green", "blue", "orange", "red"]
        );
        assert_eq!(color_name('X'), None);
    }

    #[test]
    fn test_parse_code() {
        let code: SchemeCode = "wbygro".parse().unwrap();
        assert_eq!(code.to_string(), "WBYGRO");
        assert_eq!(code.color_of(Face::Down), Color::Blue);
        assert_eq!(code.color_of(Face::Right), Color::Orange);
        assert_eq!(BASIC_CODE.to_string(), "WYGBOR");
    }

    #[test]
    fn test_parse_code_errors() {
        assert_eq!(
            "WYGBO".parse::<SchemeCode>(),
            Err(CodeError::Length("WYGBO".to_string()))
        );
        assert_eq!(
            "WYGBOX".parse::<SchemeCode>(),
            Err(CodeError::UnknownLetter {
                code: "WYGBOX".to_string(),
                letter: 'X'
            })
        );
        assert_eq!(
            "WYGBOW".parse::<SchemeCode>(),
            Err(CodeError::Repeated {
                code: "WYGBOW".to_string(),
                letter: 'W'
            })
        );
    }
}
