use beanspect_rust::origin::{OriginRecord, OriginStorage, OriginStore};
use pretty_assertions::assert_eq;

mod common;
use common::{
    mocks::MockOriginStore,
    test_utils::{create_seeded_storage, create_temp_dir},
};

#[tokio::test]
async fn test_seeded_file_database() {
    let (_temp_dir, storage) = create_seeded_storage().await.unwrap();

    let arabica = storage.find_by_species("arabica").await.unwrap().unwrap();
    assert_eq!(arabica.country, "Ethiopia");
    assert_eq!(arabica.region, "Kaffa Province");
    assert_eq!(arabica.scientific_name, "Coffea arabica");

    let liberica = storage.find_by_species("liberica").await.unwrap().unwrap();
    assert_eq!(liberica.latitude, 13.75);
    assert_eq!(liberica.longitude, 121.0);

    assert!(storage
        .find_by_species("unknown-species")
        .await
        .unwrap()
        .is_none());
}

#[tokio::test]
async fn test_reopen_does_not_reseed() {
    let temp_dir = create_temp_dir();
    let db_path = temp_dir.path().join("origins.db");
    let db_path = db_path.to_string_lossy().to_string();

    {
        let storage = OriginStorage::new(&db_path).await.unwrap();
        storage.migrate().await.unwrap();
        assert_eq!(storage.seed().await.unwrap(), 4);
    }

    let storage = OriginStorage::new(&db_path).await.unwrap();
    storage.migrate().await.unwrap();
    assert_eq!(storage.seed().await.unwrap(), 0);
    assert_eq!(storage.count().await.unwrap(), 4);
    assert_eq!(storage.list_all().await.unwrap().len(), 4);
}

#[tokio::test]
async fn test_seed_skips_non_empty_store() {
    let storage = OriginStorage::new(":memory:").await.unwrap();
    storage.migrate().await.unwrap();
    storage
        .insert(&OriginRecord::new("geisha", "Panama", 8.8, -82.4))
        .await
        .unwrap();

    assert_eq!(storage.seed().await.unwrap(), 0);
    let all = storage.list_all().await.unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].species, "geisha");
}

#[tokio::test]
async fn test_record_round_trips_through_storage() {
    let storage = OriginStorage::new(":memory:").await.unwrap();
    storage.migrate().await.unwrap();

    let mut record = OriginRecord::new("stenophylla", "Sierra Leone", 8.5, -11.8);
    record.common_name = "Stenophylla Coffee".to_string();
    record.taste_profile = "Floral, sweet, arabica-like".to_string();
    let inserted = storage.insert(&record).await.unwrap();

    let found = storage
        .find_by_species("stenophylla")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(found.id, inserted.id);
    assert_eq!(found.common_name, "Stenophylla Coffee");
    assert_eq!(found.taste_profile, "Floral, sweet, arabica-like");
    assert_eq!(found.created_at, record.created_at);
}

#[tokio::test]
async fn test_geo_features_from_storage() {
    let (_temp_dir, storage) = create_seeded_storage().await.unwrap();

    let features = storage.list_as_geo_features().await.unwrap();
    assert_eq!(features.len(), 4);
    assert_eq!(features[0].properties.species, "arabica");
    assert_eq!(features[0].geometry.coordinates, [36.0, 7.0]);
    assert_eq!(features[1].geometry.coordinates, [108.0, 12.0]);
}

#[tokio::test]
async fn test_geo_feature_projection_single_record() {
    let store =
        MockOriginStore::with_origins(vec![OriginRecord::new("arabica", "Ethiopia", 7.0, 36.0)]);

    let features = store.list_as_geo_features().await.unwrap();
    assert_eq!(features.len(), 1);
    assert_eq!(features[0].kind, "Feature");
    assert_eq!(features[0].geometry.kind, "Point");
    assert_eq!(features[0].geometry.coordinates, [36.0, 7.0]);
}
