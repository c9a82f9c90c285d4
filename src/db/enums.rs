use serde::{Deserialize, Serialize};

/// Genre labels offered by the venue and artist forms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Genre {
    Alternative,
    Blues,
    Classical,
    Country,
    Electronic,
    Folk,
    Funk,
    HipHop,
    HeavyMetal,
    Instrumental,
    Jazz,
    MusicalTheatre,
    Pop,
    Punk,
    RnB,
    Reggae,
    RockNRoll,
    Soul,
    Other,
}

impl Genre {
    pub const ALL: [Genre; 19] = [
        Self::Alternative,
        Self::Blues,
        Self::Classical,
        Self::Country,
        Self::Electronic,
        Self::Folk,
        Self::Funk,
        Self::HipHop,
        Self::HeavyMetal,
        Self::Instrumental,
        Self::Jazz,
        Self::MusicalTheatre,
        Self::Pop,
        Self::Punk,
        Self::RnB,
        Self::Reggae,
        Self::RockNRoll,
        Self::Soul,
        Self::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Alternative => "Alternative",
            Self::Blues => "Blues",
            Self::Classical => "Classical",
            Self::Country => "Country",
            Self::Electronic => "Electronic",
            Self::Folk => "Folk",
            Self::Funk => "Funk",
            Self::HipHop => "Hip-Hop",
            Self::HeavyMetal => "Heavy Metal",
            Self::Instrumental => "Instrumental",
            Self::Jazz => "Jazz",
            Self::MusicalTheatre => "Musical Theatre",
            Self::Pop => "Pop",
            Self::Punk => "Punk",
            Self::RnB => "R&B",
            Self::Reggae => "Reggae",
            Self::RockNRoll => "Rock n Roll",
            Self::Soul => "Soul",
            Self::Other => "Other",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|genre| genre.as_str() == s)
    }
}

impl From<Genre> for String {
    fn from(genre: Genre) -> String {
        genre.as_str().to_string()
    }
}

/// Two-letter codes accepted in the `state` field.
pub const US_STATES: [&str; 51] = [
    "AL", "AK", "AZ", "AR", "CA", "CO", "CT", "DE", "DC", "FL", "GA", "HI", "ID", "IL", "IN", "IA",
    "KS", "KY", "LA", "ME", "MT", "NE", "NV", "NH", "NJ", "NM", "NY", "NC", "ND", "OH", "OK", "OR",
    "MD", "MA", "MI", "MN", "MS", "MO", "PA", "RI", "SC", "SD", "TN", "TX", "UT", "VT", "VA", "WA",
    "WV", "WI", "WY",
];

pub fn is_us_state(code: &str) -> bool {
    US_STATES.contains(&code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_genre_labels_round_trip() {
        for genre in Genre::ALL {
            assert_eq!(Genre::from_str(genre.as_str()), Some(genre));
        }
        assert_eq!(Genre::from_str("R&B"), Some(Genre::RnB));
        assert_eq!(Genre::from_str("jazz"), None);
    }

    #[test]
    fn test_us_states() {
        assert!(is_us_state("CA"));
        assert!(is_us_state("DC"));
        assert!(!is_us_state("ca"));
        assert!(!is_us_state("XX"));
    }
}
