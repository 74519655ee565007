//! # Move Symbols
//!
//! The closed set of base symbols a move can be written with, grouped into
//! the syntactic families that decide how a move's layer range is derived.
//!
//! | Family   | Symbols                          | Canonical face             |
//! |----------|----------------------------------|----------------------------|
//! | single   | `U F R B L D`                    | itself                     |
//! | wide     | `Uw Fw Rw Bw Lw Dw`, `u f r b l d` | the face letter          |
//! | slice    | `M N E S`                        | `L R D F`                  |
//! | rotation | `x y z`                          | `R U F`                    |
//! | pause    | `.`                              | none                       |

use config::constants::PAUSE_SYMBOL;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// =============================================================================
// FACE
// =============================================================================

/// One of the six canonical faces of a cube.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Face {
    U,
    F,
    R,
    B,
    L,
    D,
}

impl Face {
    /// All faces in notation order.
    pub const ALL: [Face; 6] = [Face::U, Face::F, Face::R, Face::B, Face::L, Face::D];

    /// Upper-case letter naming the face.
    pub fn letter(self) -> char {
        match self {
            Face::U => 'U',
            Face::F => 'F',
            Face::R => 'R',
            Face::B => 'B',
            Face::L => 'L',
            Face::D => 'D',
        }
    }

    /// Face named by an upper-case letter.
    ///
    /// # Example
    ///
    /// ```rust
    /// use alg_ast::Face;
    ///
    /// assert_eq!(Face::from_letter('R'), Some(Face::R));
    /// assert_eq!(Face::from_letter('r'), None);
    /// ```
    pub fn from_letter(letter: char) -> Option<Face> {
        Face::ALL.into_iter().find(|face| face.letter() == letter)
    }
}

// =============================================================================
// WIDE STYLE, SLICE, AXIS
// =============================================================================

/// The two spellings of a wide move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WideStyle {
    /// `Rw`
    Suffixed,
    /// `r`
    Lowercase,
}

/// Whole-slice symbols.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slice {
    M,
    N,
    E,
    S,
}

impl Slice {
    const ALL: [Slice; 4] = [Slice::M, Slice::N, Slice::E, Slice::S];

    /// Face whose turning direction the slice follows.
    pub fn face(self) -> Face {
        match self {
            Slice::M => Face::L,
            Slice::N => Face::R,
            Slice::E => Face::D,
            Slice::S => Face::F,
        }
    }

    fn letter(self) -> char {
        match self {
            Slice::M => 'M',
            Slice::N => 'N',
            Slice::E => 'E',
            Slice::S => 'S',
        }
    }
}

/// Whole-puzzle rotation axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    /// Face whose turning direction the rotation follows.
    pub fn face(self) -> Face {
        match self {
            Axis::X => Face::R,
            Axis::Y => Face::U,
            Axis::Z => Face::F,
        }
    }

    fn letter(self) -> char {
        match self {
            Axis::X => 'x',
            Axis::Y => 'y',
            Axis::Z => 'z',
        }
    }
}

// =============================================================================
// BASE
// =============================================================================

/// Syntactic family of a base symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Family {
    Single,
    Wide,
    Slice,
    Rotation,
    Pause,
}

/// The symbol a move is written with.
///
/// Serializes to and from its notation text (`"Rw"`, `"r"`, `"M"`, `"x"`, `"."`).
///
/// # Example
///
/// ```rust
/// use alg_ast::{Base, Face, Family, WideStyle};
///
/// let base: Base = "r".parse().unwrap();
/// assert_eq!(base, Base::Wide(Face::R, WideStyle::Lowercase));
/// assert_eq!(base.family(), Family::Wide);
/// assert_eq!(base.face(), Some(Face::R));
/// assert_eq!(base.to_string(), "r");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum Base {
    Single(Face),
    Wide(Face, WideStyle),
    Slice(Slice),
    Rotation(Axis),
    Pause,
}

impl Base {
    /// Syntactic family of this symbol.
    pub fn family(self) -> Family {
        match self {
            Base::Single(_) => Family::Single,
            Base::Wide(..) => Family::Wide,
            Base::Slice(_) => Family::Slice,
            Base::Rotation(_) => Family::Rotation,
            Base::Pause => Family::Pause,
        }
    }

    /// Canonical face this symbol turns in the direction of, or `None` for a pause.
    pub fn face(self) -> Option<Face> {
        match self {
            Base::Single(face) | Base::Wide(face, _) => Some(face),
            Base::Slice(slice) => Some(slice.face()),
            Base::Rotation(axis) => Some(axis.face()),
            Base::Pause => None,
        }
    }

    /// Same spelling with a different face letter.
    ///
    /// Only single and wide symbols name a face directly; every other
    /// symbol is returned unchanged.
    pub fn with_face(self, face: Face) -> Base {
        match self {
            Base::Single(_) => Base::Single(face),
            Base::Wide(_, style) => Base::Wide(face, style),
            other => other,
        }
    }
}

impl fmt::Display for Base {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Base::Single(face) => write!(f, "{}", face.letter()),
            Base::Wide(face, WideStyle::Suffixed) => write!(f, "{}w", face.letter()),
            Base::Wide(face, WideStyle::Lowercase) => {
                write!(f, "{}", face.letter().to_ascii_lowercase())
            }
            Base::Slice(slice) => write!(f, "{}", slice.letter()),
            Base::Rotation(axis) => write!(f, "{}", axis.letter()),
            Base::Pause => f.write_str(PAUSE_SYMBOL),
        }
    }
}

/// Error returned when text does not name any move symbol.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownSymbol(pub String);

impl fmt::Display for UnknownSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown move symbol '{}'", self.0)
    }
}

impl std::error::Error for UnknownSymbol {}

impl FromStr for Base {
    type Err = UnknownSymbol;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == PAUSE_SYMBOL {
            return Ok(Base::Pause);
        }

        let mut chars = s.chars();
        let (first, rest) = match (chars.next(), chars.as_str()) {
            (Some(first), rest) => (first, rest),
            (None, _) => return Err(UnknownSymbol(s.to_string())),
        };

        let base = match rest {
            "" => Face::from_letter(first)
                .map(Base::Single)
                .or_else(|| {
                    Face::from_letter(first.to_ascii_uppercase())
                        .filter(|_| first.is_ascii_lowercase())
                        .map(|face| Base::Wide(face, WideStyle::Lowercase))
                })
                .or_else(|| Slice::ALL.into_iter().find(|sl| sl.letter() == first).map(Base::Slice))
                .or_else(|| Axis::ALL.into_iter().find(|ax| ax.letter() == first).map(Base::Rotation)),
            "w" => Face::from_letter(first).map(|face| Base::Wide(face, WideStyle::Suffixed)),
            _ => None,
        };

        base.ok_or_else(|| UnknownSymbol(s.to_string()))
    }
}

impl From<Base> for String {
    fn from(base: Base) -> Self {
        base.to_string()
    }
}

impl TryFrom<String> for Base {
    type Error = UnknownSymbol;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

// =============================================================================
// TESTS
// =============================================================================
