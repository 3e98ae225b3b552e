use serde::{Deserialize, Serialize};

/// Image licenses known to the image service; the API sends the numeric id
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImageLicense {
    CcBy,
    CcBySa,
    Cc0,
    AllRightsReserved,
    /// Id the dashboard does not know yet
    Other(i32),
}

impl ImageLicense {
    pub fn id(&self) -> i32 {
        match self {
            ImageLicense::CcBy => 1,
            ImageLicense::CcBySa => 2,
            ImageLicense::Cc0 => 3,
            ImageLicense::AllRightsReserved => 4,
            ImageLicense::Other(id) => *id,
        }
    }

    pub fn from_id(id: i32) -> Self {
        match id {
            1 => ImageLicense::CcBy,
            2 => ImageLicense::CcBySa,
            3 => ImageLicense::Cc0,
            4 => ImageLicense::AllRightsReserved,
            other => ImageLicense::Other(other),
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ImageLicense::CcBy => "CC BY",
            ImageLicense::CcBySa => "CC BY-SA",
            ImageLicense::Cc0 => "CC0",
            ImageLicense::AllRightsReserved => "All rights reserved",
            ImageLicense::Other(_) => "Other",
        }
    }
}

impl Serialize for ImageLicense {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i32(self.id())
    }
}

impl<'de> Deserialize<'de> for ImageLicense {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        i32::deserialize(deserializer).map(ImageLicense::from_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids() {
        assert_eq!(ImageLicense::from_id(1), ImageLicense::CcBy);
        assert_eq!(ImageLicense::from_id(3).display_name(), "CC0");
        assert_eq!(ImageLicense::from_id(42), ImageLicense::Other(42));
        assert_eq!(ImageLicense::Other(42).id(), 42);
        assert_eq!(serde_json::to_string(&ImageLicense::CcBySa).unwrap(), "2");
    }
}
