//! Aspect records and the body catalogue.
//!
//! Aspect records come from an external astronomical layer; the kernel makes
//! no assumption about how they were computed. Body names are kept as opaque
//! strings and resolved through [`Body::from_name`]. A name that does not
//! resolve is simply unmapped.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{KernelError, KernelResult};

/// Major aspect types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum AspectType {
    /// 0°
    Conjunction,
    /// 180°
    Opposition,
    /// 120°
    Trine,
    /// 90°
    Square,
    /// 60°
    Sextile,
}

impl AspectType {
    /// All aspect types in canonical order.
    pub const ALL: [AspectType; 5] = [
        AspectType::Conjunction,
        AspectType::Opposition,
        AspectType::Trine,
        AspectType::Square,
        AspectType::Sextile,
    ];

    /// Position in [`AspectType::ALL`].
    #[inline]
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// Exact angle in degrees.
    #[inline]
    pub fn exact_angle(&self) -> f64 {
        match self {
            AspectType::Conjunction => 0.0,
            AspectType::Opposition => 180.0,
            AspectType::Trine => 120.0,
            AspectType::Square => 90.0,
            AspectType::Sextile => 60.0,
        }
    }

    /// Hard aspects feed transit stress.
    #[inline]
    pub fn is_hard(&self) -> bool {
        matches!(
            self,
            AspectType::Conjunction | AspectType::Opposition | AspectType::Square
        )
    }

    /// Canonical name.
    pub fn name(&self) -> &'static str {
        match self {
            AspectType::Conjunction => "Conjunction",
            AspectType::Opposition => "Opposition",
            AspectType::Trine => "Trine",
            AspectType::Square => "Square",
            AspectType::Sextile => "Sextile",
        }
    }
}

impl fmt::Display for AspectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for AspectType {
    type Err = KernelError;

    fn from_str(s: &str) -> KernelResult<Self> {
        AspectType::ALL
            .into_iter()
            .find(|a| a.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| KernelError::config_invalid("aspect_type", format!("unknown aspect '{}'", s)))
    }
}

/// Speed class of a body; slower classes act for longer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BodyClass {
    /// Sun, Moon, Mercury, Venus, Mars.
    Personal,
    /// Jupiter, Saturn.
    Social,
    /// Uranus, Neptune, Pluto.
    Outer,
}

/// Bodies the kernel knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Body {
    Sun,
    Moon,
    Mercury,
    Venus,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
    Pluto,
}

impl Body {
    /// All bodies, fastest first.
    pub const ALL: [Body; 10] = [
        Body::Sun,
        Body::Moon,
        Body::Mercury,
        Body::Venus,
        Body::Mars,
        Body::Jupiter,
        Body::Saturn,
        Body::Uranus,
        Body::Neptune,
        Body::Pluto,
    ];

    /// Resolve a body name (case-insensitive). Unknown names yield `None`.
    pub fn from_name(name: &str) -> Option<Body> {
        let name = name.trim();
        Body::ALL
            .into_iter()
            .find(|b| b.name().eq_ignore_ascii_case(name))
    }

    /// Canonical name.
    pub fn name(&self) -> &'static str {
        match self {
            Body::Sun => "Sun",
            Body::Moon => "Moon",
            Body::Mercury => "Mercury",
            Body::Venus => "Venus",
            Body::Mars => "Mars",
            Body::Jupiter => "Jupiter",
            Body::Saturn => "Saturn",
            Body::Uranus => "Uranus",
            Body::Neptune => "Neptune",
            Body::Pluto => "Pluto",
        }
    }

    /// Speed class.
    pub fn class(&self) -> BodyClass {
        match self {
            Body::Sun | Body::Moon | Body::Mercury | Body::Venus | Body::Mars => {
                BodyClass::Personal
            }
            Body::Jupiter | Body::Saturn => BodyClass::Social,
            Body::Uranus | Body::Neptune | Body::Pluto => BodyClass::Outer,
        }
    }
}

impl fmt::Display for Body {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One aspect between two bodies, as reported by the astronomical layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AspectRecord {
    /// First body name.
    pub body_a: String,
    /// Second body name.
    pub body_b: String,
    /// Aspect type.
    pub aspect: AspectType,
    /// Exact angle of the aspect in degrees.
    pub exact_angle: f64,
    /// Measured angular separation in degrees.
    pub separation: f64,
}

impl AspectRecord {
    /// Build a record using the aspect type's canonical exact angle.
    pub fn new(
        body_a: impl Into<String>,
        body_b: impl Into<String>,
        aspect: AspectType,
        separation: f64,
    ) -> Self {
        Self {
            body_a: body_a.into(),
            body_b: body_b.into(),
            aspect,
            exact_angle: aspect.exact_angle(),
            separation,
        }
    }

    /// Deviation from exactness in degrees.
    ///
    /// Conjunctions wrap around: a separation of 358° is 2° from exact.
    pub fn deviation(&self) -> f64 {
        if self.aspect == AspectType::Conjunction {
            self.separation.min(360.0 - self.separation).abs()
        } else {
            (self.separation - self.exact_angle).abs()
        }
    }

    /// Resolved bodies (`None` for names the kernel does not map).
    pub fn bodies(&self) -> (Option<Body>, Option<Body>) {
        (Body::from_name(&self.body_a), Body::from_name(&self.body_b))
    }
}
