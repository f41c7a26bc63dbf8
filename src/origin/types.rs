use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Reference data describing where a coffee species comes from and how it tastes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OriginRecord {
    pub id: Option<i64>,
    pub species: String,
    pub common_name: String,
    pub scientific_name: String,
    pub country: String,
    pub region: String,
    pub latitude: f64,
    pub longitude: f64,
    pub description: String,
    pub taste_profile: String,
    pub caffeine_level: String,
    pub altitude: String,
    pub image_url: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl OriginRecord {
    /// A record with only the key and location filled in.
    pub fn new(
        species: impl Into<String>,
        country: impl Into<String>,
        latitude: f64,
        longitude: f64,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: None,
            species: species.into(),
            common_name: String::new(),
            scientific_name: String::new(),
            country: country.into(),
            region: String::new(),
            latitude,
            longitude,
            description: String::new(),
            taste_profile: String::new(),
            caffeine_level: String::new(),
            altitude: String::new(),
            image_url: String::new(),
            created_at: now,
            updated_at: now,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureCollection {
    #[serde(rename = "type")]
    pub kind: String,
    pub features: Vec<GeoFeature>,
}

impl FeatureCollection {
    pub fn new(features: Vec<GeoFeature>) -> Self {
        Self {
            kind: "FeatureCollection".to_string(),
            features,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeoFeature {
    #[serde(rename = "type")]
    pub kind: String,
    pub geometry: PointGeometry,
    pub properties: FeatureProperties,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointGeometry {
    #[serde(rename = "type")]
    pub kind: String,
    /// `[longitude, latitude]`
    pub coordinates: [f64; 2],
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureProperties {
    pub species: String,
    pub common_name: String,
    pub country: String,
    pub region: String,
    pub description: String,
    pub taste_profile: String,
    pub caffeine_level: String,
    pub image_url: String,
}

impl From<&OriginRecord> for GeoFeature {
    fn from(record: &OriginRecord) -> Self {
        Self {
            kind: "Feature".to_string(),
            geometry: PointGeometry {
                kind: "Point".to_string(),
                coordinates: [record.longitude, record.latitude],
            },
            properties: FeatureProperties {
                species: record.species.clone(),
                common_name: record.common_name.clone(),
                country: record.country.clone(),
                region: record.region.clone(),
                description: record.description.clone(),
                taste_profile: record.taste_profile.clone(),
                caffeine_level: record.caffeine_level.clone(),
                image_url: record.image_url.clone(),
            },
        }
    }
}
