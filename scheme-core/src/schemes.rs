use std::fmt;
use std::sync::LazyLock;

use crate::{BASIC_CODE, Color, Face, SchemeCode};

/// Descriptions for the schemes that have a common name. Every other scheme
/// has none.
const DESCRIPTIONS: [(usize, &str); 2] = [(1, "standard"), (14, "Japanese")];

/// All 30 unique color schemes, numbered from 1.
pub static UNIQUE_COLOR_SCHEMES: LazyLock<Vec<ColorScheme>> = LazyLock::new(unique_color_schemes);

/// A numbered assignment of the six colors to the six faces.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ColorScheme {
    pub index: usize,
    pub code: SchemeCode,
    pub description: Option<String>,
}

impl ColorScheme {
    pub fn new(index: usize, code: SchemeCode) -> Self {
        Self {
            index,
            code,
            description: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn code_string(&self) -> String {
        self.code.to_string()
    }

    pub fn face_colors(&self) -> impl Iterator<Item = (Face, Color)> + '_ {
        Face::ALL.into_iter().map(|face| (face, self.code.color_of(face)))
    }
}

impl fmt::Display for ColorScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02} {}", self.index, self.code)?;
        if let Some(d) = &self.description {
            write!(f, " ({d})")?;
        }
        Ok(())
    }
}

/// Enumerate the color schemes that differ up to rotation of the cube.
///
/// Up is fixed to the first basic color. Each remaining color is tried on
/// down; front takes the first color left over, back each of the other
/// three, and the last two go on left/right in both orders.
pub fn generate_codes() -> Vec<SchemeCode> {
    let [up, rest @ ..] = BASIC_CODE.colors();
    let mut out = Vec::with_capacity(30);
    for down in rest {
        let side: Vec<Color> = rest.iter().copied().filter(|&c| c != down).collect();
        let (front, around) = (side[0], &side[1..]);
        for &back in around {
            let lr: Vec<Color> = around.iter().copied().filter(|&c| c != back).collect();
            let (left, right) = (lr[0], lr[1]);
            out.push(SchemeCode([up, down, front, back, left, right]));
            out.push(SchemeCode([up, down, front, back, right, left]));
        }
    }
    out
}

/// Number the enumerated codes and attach the known descriptions.
pub fn unique_color_schemes() -> Vec<ColorScheme> {
    generate_codes()
        .into_iter()
        .enumerate()
        .map(|(i, code)| {
            let scheme = ColorScheme::new(i + 1, code);
            match DESCRIPTIONS.iter().find(|(k, _)| *k == i + 1) {
                Some((_, d)) => scheme.with_description(*d),
                None => scheme,
            }
        })
        .collect()
}
