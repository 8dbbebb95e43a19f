use core::fmt;
use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::*;

/// How done the pizza is, ordered from raw to burnt.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum CookQuality {
    Undercooked,
    /// Only the tint changes, the status text is left as it was
    Warming,
    JustRight,
    Crispy,
    Overbaked,
}

impl CookQuality {
    /// Status text published while in this band, if the band sets one.
    pub const fn status_text(self) -> Option<&'static str> {
        use CookQuality::*;
        match self {
            Undercooked => Some("No cooked...😑"),
            Warming => None,
            JustRight => Some("About right!🤤"),
            Crispy => Some("Crispy!😎"),
            Overbaked => Some("OVERBAKED!...🤮"),
        }
    }

    /// Pizza tint published while in this band, if the band sets one.
    pub const fn color(self) -> Option<Rgba> {
        use CookQuality::*;
        match self {
            Undercooked => None,
            Warming => Some(Rgba::WARMING),
            JustRight => Some(Rgba::GOLDEN),
            Crispy => Some(Rgba::CRISPY),
            Overbaked => Some(Rgba::BURNT),
        }
    }
}

/// Band boundaries, in elapsed seconds:
///
/// - `..=low` undercooked
/// - `low+1..=mid` warming
/// - `mid+1..high` just right
/// - `high..max` crispy
/// - `max..` overbaked
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawThresholds", into = "RawThresholds")]
pub struct CookThresholds {
    low: Seconds,
    mid: Seconds,
    high: Seconds,
    max: Seconds,
}

impl CookThresholds {
    pub const STANDARD: CookThresholds = CookThresholds::new_unchecked(3, 6, 9, 12);
    pub const QUICK: CookThresholds = CookThresholds::new_unchecked(2, 4, 6, 8);

    const fn new_unchecked(low: Seconds, mid: Seconds, high: Seconds, max: Seconds) -> Self {
        Self {
            low,
            mid,
            high,
            max,
        }
    }

    pub fn new(low: Seconds, mid: Seconds, high: Seconds, max: Seconds) -> Result<Self> {
        if low < mid && mid < high && high < max {
            Ok(Self::new_unchecked(low, mid, high, max))
        } else {
            Err(BakeError::UnorderedThresholds {
                low,
                mid,
                high,
                max,
            })
        }
    }

    pub const fn low(&self) -> Seconds {
        self.low
    }

    pub const fn mid(&self) -> Seconds {
        self.mid
    }

    pub const fn high(&self) -> Seconds {
        self.high
    }

    pub const fn max(&self) -> Seconds {
        self.max
    }

    pub const fn classify(&self, elapsed: Seconds) -> CookQuality {
        use CookQuality::*;
        if elapsed <= self.low {
            Undercooked
        } else if elapsed <= self.mid {
            Warming
        } else if elapsed < self.high {
            JustRight
        } else if elapsed < self.max {
            Crispy
        } else {
            Overbaked
        }
    }
}

impl Default for CookThresholds {
    fn default() -> Self {
        Self::STANDARD
    }
}

impl fmt::Display for CookThresholds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{},{},{}", self.low, self.mid, self.high, self.max)
    }
}

/// Accepts `standard`, `quick` or four comma separated boundaries like `3,6,9,12`.
impl FromStr for CookThresholds {
    type Err = BakeError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "standard" => return Ok(Self::STANDARD),
            "quick" => return Ok(Self::QUICK),
            _ => {}
        }

        let malformed = || BakeError::MalformedThresholds(s.to_string());
        let bounds = s
            .split(',')
            .map(|part| part.trim().parse::<Seconds>().map_err(|_| malformed()))
            .collect::<Result<Vec<_>>>()?;

        match bounds[..] {
            [low, mid, high, max] => Self::new(low, mid, high, max),
            _ => Err(malformed()),
        }
    }
}

#[derive(Copy, Clone, Debug, Serialize, Deserialize)]
struct RawThresholds {
    low: Seconds,
    mid: Seconds,
    high: Seconds,
    max: Seconds,
}

impl TryFrom<RawThresholds> for CookThresholds {
    type Error = BakeError;

    fn try_from(raw: RawThresholds) -> Result<Self> {
        Self::new(raw.low, raw.mid, raw.high, raw.max)
    }
}

impl From<CookThresholds> for RawThresholds {
    fn from(thresholds: CookThresholds) -> Self {
        Self {
            low: thresholds.low,
            mid: thresholds.mid,
            high: thresholds.high,
            max: thresholds.max,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use CookQuality::*;

    #[test]
    fn standard_table_band_edges() {
        let table = CookThresholds::STANDARD;
        let bands: Vec<_> = (0..=13).map(|secs| table.classify(secs)).collect();

        assert_eq!(
            bands,
            [
                Undercooked,
                Undercooked,
                Undercooked,
                Undercooked,
                Warming,
                Warming,
                Warming,
                JustRight,
                JustRight,
                Crispy,
                Crispy,
                Crispy,
                Overbaked,
                Overbaked,
            ]
        );
    }

    #[test]
    fn quick_table_band_edges() {
        let table = CookThresholds::QUICK;

        assert_eq!(table.classify(2), Undercooked);
        assert_eq!(table.classify(3), Warming);
        assert_eq!(table.classify(4), Warming);
        assert_eq!(table.classify(5), JustRight);
        assert_eq!(table.classify(6), Crispy);
        assert_eq!(table.classify(7), Crispy);
        assert_eq!(table.classify(8), Overbaked);
        assert_eq!(table.classify(30), Overbaked);
    }

    #[test]
    fn warming_changes_color_only() {
        assert_eq!(Warming.status_text(), None);
        assert_eq!(Warming.color(), Some(Rgba::WARMING));
        assert_eq!(Undercooked.color(), None);
        assert!(Undercooked.status_text().is_some());
    }

    #[test]
    fn unordered_thresholds_are_rejected() {
        let err = CookThresholds::new(3, 3, 9, 12).unwrap_err();
        assert!(matches!(
            err,
            BakeError::UnorderedThresholds {
                low: 3,
                mid: 3,
                high: 9,
                max: 12
            }
        ));
    }

    #[test]
    fn parses_named_and_explicit_tables() {
        assert_eq!("standard".parse::<CookThresholds>().unwrap(), CookThresholds::STANDARD);
        assert_eq!("quick".parse::<CookThresholds>().unwrap(), CookThresholds::QUICK);
        assert_eq!(
            " 1, 2 ,5,7".parse::<CookThresholds>().unwrap(),
            CookThresholds::new(1, 2, 5, 7).unwrap()
        );
        assert_eq!(CookThresholds::QUICK.to_string(), "2,4,6,8");
    }

    #[test]
    fn rejects_malformed_tables() {
        assert!(matches!(
            "1,2,3".parse::<CookThresholds>(),
            Err(BakeError::MalformedThresholds(_))
        ));
        assert!(matches!(
            "1,2,x,4".parse::<CookThresholds>(),
            Err(BakeError::MalformedThresholds(_))
        ));
        assert!(matches!(
            "4,3,2,1".parse::<CookThresholds>(),
            Err(BakeError::UnorderedThresholds { .. })
        ));
    }
}
