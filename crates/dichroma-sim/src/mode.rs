//! Simulation modes.
//!
//! [`Deficiency`] is the closed set of renderings the simulator offers.
//! Mode names parse case-insensitively, either spelled out or by their
//! short clinical alias:
//!
//! | Mode | Aliases |
//! |------|---------|
//! | `normal` | `none` |
//! | `deuteranopia` | `deutan` |
//! | `protanopia` | `protan` |
//! | `tritanopia` | `tritan` |
//! | `grayscale` | `greyscale`, `gray`, `grey` |
//!
//! # Example
//!
//! ```rust
//! use dichroma_sim::Deficiency;
//!
//! let mode: Deficiency = "Deutan".parse().unwrap();
//! assert_eq!(mode, Deficiency::Deuteranopia);
//! assert!("achromatopsia".parse::<Deficiency>().is_err());
//! ```

use std::fmt;
use std::str::FromStr;

use crate::SimError;

/// Type of color vision to simulate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Deficiency {
    /// Unmodified vision; filtering is skipped entirely.
    #[default]
    Normal,
    /// Green-blind red-green dichromacy.
    Deuteranopia,
    /// Red-blind red-green dichromacy.
    Protanopia,
    /// Blue-yellow dichromacy.
    Tritanopia,
    /// Perceptual luminance only.
    Grayscale,
}

impl Deficiency {
    /// Every mode, in menu order.
    pub const ALL: [Deficiency; 5] = [
        Deficiency::Normal,
        Deficiency::Deuteranopia,
        Deficiency::Protanopia,
        Deficiency::Tritanopia,
        Deficiency::Grayscale,
    ];

    /// Display name.
    pub fn name(&self) -> &'static str {
        match self {
            Deficiency::Normal => "Normal",
            Deficiency::Deuteranopia => "Deuteranopia",
            Deficiency::Protanopia => "Protanopia",
            Deficiency::Tritanopia => "Tritanopia",
            Deficiency::Grayscale => "Grayscale",
        }
    }

    /// Short identifier, also accepted by [`FromStr`].
    pub fn id(&self) -> &'static str {
        match self {
            Deficiency::Normal => "normal",
            Deficiency::Deuteranopia => "deutan",
            Deficiency::Protanopia => "protan",
            Deficiency::Tritanopia => "tritan",
            Deficiency::Grayscale => "grayscale",
        }
    }

    /// One line description with prevalence.
    pub fn description(&self) -> &'static str {
        match self {
            Deficiency::Normal => "Normal vision, no simulation",
            Deficiency::Deuteranopia => "Deuteranopia (Common): confuses red and green",
            Deficiency::Protanopia => "Protanopia (Rare): confuses red and green, reds look dark",
            Deficiency::Tritanopia => "Tritanopia (Very Rare): confuses blue and yellow",
            Deficiency::Grayscale => "Grayscale: perceptual luminance without hue",
        }
    }

    /// Returns `true` for deuteranopia and protanopia.
    pub fn is_red_green(&self) -> bool {
        matches!(self, Deficiency::Deuteranopia | Deficiency::Protanopia)
    }

    /// Returns `true` if this mode leaves rasters untouched.
    pub fn is_normal(&self) -> bool {
        matches!(self, Deficiency::Normal)
    }
}

impl fmt::Display for Deficiency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Deficiency {
    type Err = SimError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "normal" | "none" => Ok(Deficiency::Normal),
            "deuteranopia" | "deutan" => Ok(Deficiency::Deuteranopia),
            "protanopia" | "protan" => Ok(Deficiency::Protanopia),
            "tritanopia" | "tritan" => Ok(Deficiency::Tritanopia),
            "grayscale" | "greyscale" | "gray" | "grey" => Ok(Deficiency::Grayscale),
            _ => Err(SimError::InvalidMode(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_names_and_aliases() {
        assert_eq!("normal".parse::<Deficiency>().unwrap(), Deficiency::Normal);
        assert_eq!("NONE".parse::<Deficiency>().unwrap(), Deficiency::Normal);
        assert_eq!("Deuteranopia".parse::<Deficiency>().unwrap(), Deficiency::Deuteranopia);
        assert_eq!("protan".parse::<Deficiency>().unwrap(), Deficiency::Protanopia);
        assert_eq!(" tritan ".parse::<Deficiency>().unwrap(), Deficiency::Tritanopia);
        assert_eq!("grey".parse::<Deficiency>().unwrap(), Deficiency::Grayscale);
    }

    #[test]
    fn test_parse_invalid() {
        let err = "sepia".parse::<Deficiency>().unwrap_err();
        assert!(matches!(err, SimError::InvalidMode(ref m) if m == "sepia"));
        assert!(err.to_string().contains("sepia"));
        assert!("".parse::<Deficiency>().is_err());
    }

    #[test]
    fn test_id_roundtrip() {
        for mode in Deficiency::ALL {
            assert_eq!(mode.id().parse::<Deficiency>().unwrap(), mode);
            assert_eq!(mode.name().parse::<Deficiency>().unwrap(), mode);
        }
    }

    #[test]
    fn test_classification() {
        assert!(Deficiency::Deuteranopia.is_red_green());
        assert!(Deficiency::Protanopia.is_red_green());
        assert!(!Deficiency::Tritanopia.is_red_green());
        assert!(Deficiency::default().is_normal());
        assert!(Deficiency::Tritanopia.description().contains("Very Rare"));
    }
}
