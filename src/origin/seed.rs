use super::OriginRecord;

struct SeedRow {
    species: &'static str,
    common_name: &'static str,
    scientific_name: &'static str,
    country: &'static str,
    region: &'static str,
    latitude: f64,
    longitude: f64,
    description: &'static str,
    taste_profile: &'static str,
    caffeine_level: &'static str,
    altitude: &'static str,
    image_url: &'static str,
}

const SEED_ROWS: [SeedRow; 4] = [
    SeedRow {
        species: "arabica",
        common_name: "Arabica Coffee",
        scientific_name: "Coffea arabica",
        country: "Ethiopia",
        region: "Kaffa Province",
        latitude: 7.0,
        longitude: 36.0,
        description: "Arabica coffee is considered the most superior species of coffee. It originated in the highlands of Ethiopia and is known for its smooth, complex flavor profile with notes of fruit, berries, and wine-like acidity.",
        taste_profile: "Sweet, soft, fruity with notes of berries, chocolate, and caramel. Complex acidity ranging from citrus to wine-like.",
        caffeine_level: "Low to Medium (1.2-1.5%)",
        altitude: "1000-2000m",
        image_url: "https://images.unsplash.com/photo-1514432324607-a09d9b4aefdd?w=800&q=80",
    },
    SeedRow {
        species: "robusta",
        common_name: "Robusta Coffee",
        scientific_name: "Coffea canephora",
        country: "Vietnam",
        region: "Central Highlands",
        latitude: 12.0,
        longitude: 108.0,
        description: "Robusta coffee is known for its strong, bold flavor and high caffeine content. Originally from central and western sub-Saharan Africa, it is now primarily grown in Vietnam and Indonesia.",
        taste_profile: "Strong, bold, earthy with notes of dark chocolate, nuts, and grain. Low acidity with a heavy body.",
        caffeine_level: "High (2.2-2.7%)",
        altitude: "200-800m",
        image_url: "https://images.unsplash.com/photo-1559056199-641a0ac8b55e?w=800&q=80",
    },
    SeedRow {
        species: "liberica",
        common_name: "Liberica Coffee",
        scientific_name: "Coffea liberica",
        country: "Philippines",
        region: "Batangas",
        latitude: 13.75,
        longitude: 121.0,
        description: "Liberica coffee has large, irregular-shaped beans with a unique aroma. Originally from Liberia, West Africa, it is now primarily grown in the Philippines and Malaysia. Known locally as 'Kapeng Barako'.",
        taste_profile: "Bold, smoky, woody with floral and fruity notes. Unique aroma described as jackfruit-like.",
        caffeine_level: "Medium (1.2-1.5%)",
        altitude: "200-400m",
        image_url: "https://images.unsplash.com/photo-1447933601403-0c6688de566e?w=800&q=80",
    },
    SeedRow {
        species: "excelsa",
        common_name: "Excelsa Coffee",
        scientific_name: "Coffea excelsa (Coffea liberica var. dewevrei)",
        country: "Philippines",
        region: "Southeast Asia",
        latitude: 7.5,
        longitude: 124.0,
        description: "Excelsa coffee is a rare variety often classified as a variant of Liberica. It has a distinctive tart, fruity, and mysterious flavor profile. Primarily grown in Southeast Asia.",
        taste_profile: "Tart, fruity, complex with dark roast notes. Has a wine-like, popcorn, or fruity aftertaste.",
        caffeine_level: "Low to Medium (1.0-1.4%)",
        altitude: "300-600m",
        image_url: "https://images.unsplash.com/photo-1611854779393-1b2da9d400fe?w=800&q=80",
    },
];

/// The built-in species table inserted into an empty store.
pub fn default_origins() -> Vec<OriginRecord> {
    SEED_ROWS
        .iter()
        .map(|row| OriginRecord {
            common_name: row.common_name.to_string(),
            scientific_name: row.scientific_name.to_string(),
            region: row.region.to_string(),
            description: row.description.to_string(),
            taste_profile: row.taste_profile.to_string(),
            caffeine_level: row.caffeine_level.to_string(),
            altitude: row.altitude.to_string(),
            image_url: row.image_url.to_string(),
            ..OriginRecord::new(row.species, row.country, row.latitude, row.longitude)
        })
        .collect()
}
