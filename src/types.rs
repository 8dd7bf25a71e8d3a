//==============================================================================
// Ratings
//==============================================================================

/// Suffix appended to every rating cell (`4.5` is written as `4.5 / 5`)
pub const RATING_SUFFIX: &str = " / 5";

/// Background color band for a rating cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RatingColor {
    /// rating < 2
    Red,
    /// 2 <= rating < 3
    Orange,
    /// rating == 3
    Yellow,
    /// rating > 3
    Green,
}

impl RatingColor {
    /// Classify a rating. Checks run in order, so 2.0 is orange and 3.0 is yellow.
    pub fn for_rating(rating: f64) -> Self {
        if rating < 2.0 {
            RatingColor::Red
        } else if rating < 3.0 {
            RatingColor::Orange
        } else if rating == 3.0 {
            RatingColor::Yellow
        } else {
            RatingColor::Green
        }
    }
}

/// A rating as written in the input file
///
/// The raw text is kept so the sheet shows exactly what the user typed
/// (`4.50 / 5`, not `4.5 / 5`). An empty field is an unrated entry.
#[derive(Debug, Clone, PartialEq)]
pub struct Rating {
    raw: String,
    value: Option<f64>,
}

impl Rating {
    /// Parse a trimmed rating field
    ///
    /// Returns `None` when the field is non-empty but not a finite number.
    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Some(Self::unrated());
        }

        match raw.parse::<f64>() {
            Ok(value) if value.is_finite() => Some(Self {
                raw: raw.to_string(),
                value: Some(value),
            }),
            _ => None,
        }
    }

    /// An entry with an empty rating field
    pub fn unrated() -> Self {
        Self {
            raw: String::new(),
            value: None,
        }
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn value(&self) -> Option<f64> {
        self.value
    }

    pub fn color(&self) -> Option<RatingColor> {
        self.value.map(RatingColor::for_rating)
    }

    /// Text written into the rating cell
    pub fn cell_text(&self) -> String {
        format!("{}{}", self.raw, RATING_SUFFIX)
    }
}

//==============================================================================
// Records
//==============================================================================

/// One `title ;;; rating ;;; release date` line
#[derive(Debug, Clone, PartialEq)]
pub struct MovieRecord {
    pub title: String,
    pub rating: Rating,
    pub release_date: String,
}

impl MovieRecord {
    pub fn new(title: impl Into<String>, rating: Rating, release_date: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            rating,
            release_date: release_date.into(),
        }
    }
}
