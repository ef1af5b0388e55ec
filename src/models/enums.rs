use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Destinations shown in the gallery
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Destination {
    Kashi,
    Varanasi,
    Nepal,
    Ayodhya,
    Allahabad,
    Gaya,
}

impl Destination {
    /// All destinations, in the order the gallery seed cycles through them
    pub const ALL: [Destination; 6] = [
        Destination::Kashi,
        Destination::Varanasi,
        Destination::Nepal,
        Destination::Ayodhya,
        Destination::Allahabad,
        Destination::Gaya,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Destination::Kashi => "Kashi",
            Destination::Varanasi => "Varanasi",
            Destination::Nepal => "Nepal",
            Destination::Ayodhya => "Ayodhya",
            Destination::Allahabad => "Allahabad",
            Destination::Gaya => "Gaya",
        }
    }
}

impl fmt::Display for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Destination {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Destination::ALL
            .iter()
            .find(|destination| destination.as_str().eq_ignore_ascii_case(s))
            .copied()
            .ok_or_else(|| format!("Invalid destination: {}", s))
    }
}

/// Gallery photo categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GalleryCategory {
    Temples,
    Ghats,
    Rituals,
    Buddhist,
}

impl GalleryCategory {
    /// All categories, in the order the gallery seed cycles through them
    pub const ALL: [GalleryCategory; 4] = [
        GalleryCategory::Temples,
        GalleryCategory::Ghats,
        GalleryCategory::Rituals,
        GalleryCategory::Buddhist,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            GalleryCategory::Temples => "Temples",
            GalleryCategory::Ghats => "Ghats",
            GalleryCategory::Rituals => "Rituals",
            GalleryCategory::Buddhist => "Buddhist",
        }
    }
}

impl fmt::Display for GalleryCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GalleryCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        GalleryCategory::ALL
            .iter()
            .find(|category| category.as_str().eq_ignore_ascii_case(s))
            .copied()
            .ok_or_else(|| format!("Invalid gallery category: {}", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_destination_string_conversion() {
        assert_eq!(Destination::Kashi.to_string(), "Kashi");
        assert_eq!(Destination::Allahabad.to_string(), "Allahabad");

        assert_eq!("gaya".parse::<Destination>().unwrap(), Destination::Gaya);
        assert_eq!("NEPAL".parse::<Destination>().unwrap(), Destination::Nepal);

        assert!("Paris".parse::<Destination>().is_err());
    }

    #[test]
    fn test_category_string_conversion() {
        assert_eq!(GalleryCategory::Ghats.to_string(), "Ghats");
        assert_eq!(
            "buddhist".parse::<GalleryCategory>().unwrap(),
            GalleryCategory::Buddhist
        );
        assert!("Beaches".parse::<GalleryCategory>().is_err());
    }

    #[test]
    fn test_serde_serialization() {
        let json = serde_json::to_string(&Destination::Varanasi).unwrap();
        assert_eq!(json, "\"Varanasi\"");

        let deserialized: GalleryCategory = serde_json::from_str("\"Rituals\"").unwrap();
        assert_eq!(deserialized, GalleryCategory::Rituals);
    }
}
