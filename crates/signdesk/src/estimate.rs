//! Rough order of magnitude (ROM) pricing for common sign types.
//!
//! The rate card is versioned in source, like the document catalog: rates
//! change rarely and go through review when they do. Estimates produced here
//! are internal ballpark numbers only; final pricing must be approved by the
//! senior estimator.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

/// Shop labor rate in dollars per hour.
pub const LABOR_RATE: f64 = 85.0;

/// Multiplier applied to material plus labor (40% markup).
pub const MARKUP: f64 = 1.4;

/// Sign types the rate card covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum SignType {
    /// Standard ADA room identification sign.
    AdaSign,
    /// Cast aluminum dimensional letters.
    CastAluminum,
    /// Acrylic plaque.
    AcrylicPlaque,
    /// Cut vinyl graphics.
    VinylGraphics,
}

impl SignType {
    /// All sign types, in rate card order.
    pub const ALL: &'static [Self] = &[
        Self::AdaSign,
        Self::CastAluminum,
        Self::AcrylicPlaque,
        Self::VinylGraphics,
    ];

    /// The stable identifier used in config, CLI, and JSON output.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::AdaSign => "ada-sign",
            Self::CastAluminum => "cast-aluminum",
            Self::AcrylicPlaque => "acrylic-plaque",
            Self::VinylGraphics => "vinyl-graphics",
        }
    }

    /// The rate card entry for this sign type.
    #[must_use]
    pub const fn rate(self) -> Rate {
        match self {
            Self::AdaSign => Rate {
                base: 35.0,
                unit: RateUnit::Piece,
            },
            Self::CastAluminum => Rate {
                base: 120.0,
                unit: RateUnit::LetterHeightFoot,
            },
            Self::AcrylicPlaque => Rate {
                base: 45.0,
                unit: RateUnit::SquareFoot,
            },
            Self::VinylGraphics => Rate {
                base: 15.0,
                unit: RateUnit::SquareFoot,
            },
        }
    }
}

impl fmt::Display for SignType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SignType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| {
                let known: Vec<_> = Self::ALL.iter().map(|kind| kind.as_str()).collect();
                format!("unknown sign type '{s}' (expected one of: {})", known.join(", "))
            })
    }
}

/// How a material rate is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum RateUnit {
    /// Dollars per square foot of sign face.
    SquareFoot,
    /// Dollars per foot of letter height.
    LetterHeightFoot,
    /// Dollars per piece.
    Piece,
}

/// A material rate from the rate card.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Rate {
    /// Base dollar amount, applied per [`RateUnit`].
    pub base: f64,
    /// Unit of pricing.
    pub unit: RateUnit,
}

/// Inputs for one estimate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Job {
    /// What is being made.
    pub sign_type: SignType,
    /// Number of signs.
    pub quantity: u32,
    /// Width in inches.
    pub width_in: f64,
    /// Height in inches (letter height for dimensional letters).
    pub height_in: f64,
    /// Total installation hours for the job.
    pub install_hours: f64,
}

impl Default for Job {
    fn default() -> Self {
        Self {
            sign_type: SignType::AdaSign,
            quantity: 1,
            width_in: 8.0,
            height_in: 8.0,
            install_hours: 0.5,
        }
    }
}

impl Job {
    /// Price this job against the rate card.
    ///
    /// Material cost depends on the sign type's rate unit: per square foot of
    /// face area, per foot of letter height, or per piece. Labor is billed at
    /// [`LABOR_RATE`], and [`MARKUP`] is applied to the subtotal.
    #[must_use]
    pub fn estimate(&self) -> Estimate {
        let Rate { base, unit } = self.sign_type.rate();
        let quantity = f64::from(self.quantity);

        let material = match unit {
            RateUnit::SquareFoot => {
                let sqft = self.width_in * self.height_in / 144.0;
                base * sqft * quantity
            }
            RateUnit::LetterHeightFoot => base * (self.height_in / 12.0) * quantity,
            RateUnit::Piece => base * quantity,
        };

        let labor = self.install_hours * LABOR_RATE;
        let subtotal = material + labor;

        Estimate {
            material,
            labor,
            subtotal,
            total: subtotal * MARKUP,
        }
    }
}

/// Cost breakdown for one job, all amounts in dollars.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Estimate {
    /// Material cost before markup.
    pub material: f64,
    /// Labor cost before markup.
    pub labor: f64,
    /// Material plus labor.
    pub subtotal: f64,
    /// Subtotal with markup applied.
    pub total: f64,
}
