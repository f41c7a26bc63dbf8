use super::{OriginRecord, OriginStore, seed};
use crate::{Error, Result};
use async_trait::async_trait;
use libsql::{Builder, Connection, Database, Row, Value};
use tracing::{debug, error, info, warn};

const SELECT_COLUMNS: &str = "id, species, common_name, scientific_name, country, region, \
     latitude, longitude, description, taste_profile, caffeine_level, altitude, image_url, \
     created_at, updated_at";

struct Handle {
    _db: Database,
    conn: Connection,
}

/// libSQL-backed origin table. When the database cannot be opened the storage
/// stays disconnected and every query reports `StoreUnavailable`.
pub struct OriginStorage {
    handle: Option<Handle>,
}

impl OriginStorage {
    pub async fn new(db_path: &str) -> Result<Self> {
        let mut storage = Self::disconnected();

        match storage.init_database(db_path).await {
            Ok(()) => {
                info!("Origin database opened: {}", db_path);
            }
            Err(e) => {
                warn!(
                    "Origin database unavailable, continuing without origin data: {}",
                    e
                );
            }
        }

        Ok(storage)
    }

    /// Storage with no backing database.
    pub fn disconnected() -> Self {
        Self { handle: None }
    }

    pub fn is_connected(&self) -> bool {
        self.handle.is_some()
    }

    async fn init_database(&mut self, db_path: &str) -> Result<()> {
        let db = Builder::new_local(db_path).build().await?;
        // A single shared connection keeps `:memory:` databases alive across calls.
        let conn = db.connect()?;
        conn.query("SELECT 1", ()).await?;

        self.handle = Some(Handle { _db: db, conn });
        Ok(())
    }

    fn conn(&self) -> Result<&Connection> {
        self.handle
            .as_ref()
            .map(|handle| &handle.conn)
            .ok_or_else(|| Error::store_unavailable("database is not connected"))
    }

    /// Creates the `species_origins` table if it does not exist.
    pub async fn migrate(&self) -> Result<()> {
        info!("Running database migrations...");
        let conn = self.conn()?;
        conn.execute(
            r#"
            CREATE TABLE IF NOT EXISTS species_origins (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                species TEXT NOT NULL UNIQUE,
                common_name TEXT NOT NULL DEFAULT '',
                scientific_name TEXT NOT NULL DEFAULT '',
                country TEXT NOT NULL,
                region TEXT NOT NULL DEFAULT '',
                latitude REAL NOT NULL,
                longitude REAL NOT NULL,
                description TEXT NOT NULL DEFAULT '',
                taste_profile TEXT NOT NULL DEFAULT '',
                caffeine_level TEXT NOT NULL DEFAULT '',
                altitude TEXT NOT NULL DEFAULT '',
                image_url TEXT NOT NULL DEFAULT '',
                created_at DATETIME NOT NULL,
                updated_at DATETIME NOT NULL
            )
            "#,
            (),
        )
        .await?;
        info!("Database migrations completed");
        Ok(())
    }

    /// Inserts the built-in species table unless the store already holds data.
    /// Returns the number of records inserted.
    pub async fn seed(&self) -> Result<usize> {
        let count = self.count().await?;
        if count > 0 {
            info!(count, "Species origins data already exists, skipping seed");
            return Ok(0);
        }

        let origins = seed::default_origins();
        for origin in &origins {
            if let Err(e) = self.insert(origin).await {
                error!(species = %origin.species, "Failed to seed species: {}", e);
                return Err(e);
            }
            debug!(species = %origin.species, "Seeded species origin");
        }

        info!(count = origins.len(), "Species origins data seeded successfully");
        Ok(origins.len())
    }

    /// Inserts a record and returns it with its assigned id. Species keys are unique.
    pub async fn insert(&self, origin: &OriginRecord) -> Result<OriginRecord> {
        let conn = self.conn()?;
        let params: Vec<Value> = vec![
            origin.species.clone().into(),
            origin.common_name.clone().into(),
            origin.scientific_name.clone().into(),
            origin.country.clone().into(),
            origin.region.clone().into(),
            origin.latitude.into(),
            origin.longitude.into(),
            origin.description.clone().into(),
            origin.taste_profile.clone().into(),
            origin.caffeine_level.clone().into(),
            origin.altitude.clone().into(),
            origin.image_url.clone().into(),
            origin.created_at.to_rfc3339().into(),
            origin.updated_at.to_rfc3339().into(),
        ];
        conn.execute(
            "INSERT INTO species_origins (species, common_name, scientific_name, country, region, \
             latitude, longitude, description, taste_profile, caffeine_level, altitude, image_url, \
             created_at, updated_at) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
            params,
        )
        .await?;

        let mut inserted = origin.clone();
        inserted.id = Some(conn.last_insert_rowid());
        Ok(inserted)
    }

    pub async fn count(&self) -> Result<u64> {
        let conn = self.conn()?;
        let mut rows = conn
            .query("SELECT COUNT(*) FROM species_origins", ())
            .await?;
        let count: i64 = match rows.next().await? {
            Some(row) => row.get(0)?,
            None => 0,
        };
        Ok(count as u64)
    }

    async fn find_in_db(&self, species: &str) -> Result<Option<OriginRecord>> {
        let conn = self.conn()?;
        let mut rows = conn
            .query(
                &format!("SELECT {SELECT_COLUMNS} FROM species_origins WHERE species = ?"),
                [species],
            )
            .await?;

        match rows.next().await? {
            Some(row) => Ok(Some(row_to_origin(&row)?)),
            None => Ok(None),
        }
    }

    async fn list_from_db(&self) -> Result<Vec<OriginRecord>> {
        let conn = self.conn()?;
        let mut rows = conn
            .query(
                &format!("SELECT {SELECT_COLUMNS} FROM species_origins ORDER BY id ASC"),
                (),
            )
            .await?;

        let mut origins = Vec::new();
        while let Some(row) = rows.next().await? {
            origins.push(row_to_origin(&row)?);
        }
        Ok(origins)
    }
}

#[async_trait]
impl OriginStore for OriginStorage {
    async fn find_by_species(&self, species: &str) -> Result<Option<OriginRecord>> {
        let origin = self.find_in_db(species).await.map_err(unavailable)?;
        debug!(species, found = origin.is_some(), "Origin lookup");
        Ok(origin)
    }

    async fn list_all(&self) -> Result<Vec<OriginRecord>> {
        let origins = self.list_from_db().await.map_err(unavailable)?;
        debug!("Retrieved {} species origins", origins.len());
        Ok(origins)
    }

    async fn is_available(&self) -> bool {
        match self.conn() {
            Ok(conn) => conn.query("SELECT 1", ()).await.is_ok(),
            Err(_) => false,
        }
    }
}

fn unavailable(e: Error) -> Error {
    match e {
        Error::Database(e) => Error::store_unavailable(e.to_string()),
        other => other,
    }
}

fn row_to_origin(row: &Row) -> Result<OriginRecord> {
    Ok(OriginRecord {
        id: Some(row.get(0)?),
        species: row.get(1)?,
        common_name: row.get(2)?,
        scientific_name: row.get(3)?,
        country: row.get(4)?,
        region: row.get(5)?,
        latitude: row.get(6)?,
        longitude: row.get(7)?,
        description: row.get(8)?,
        taste_profile: row.get(9)?,
        caffeine_level: row.get(10)?,
        altitude: row.get(11)?,
        image_url: row.get(12)?,
        created_at: parse_timestamp(row.get(13)?)?,
        updated_at: parse_timestamp(row.get(14)?)?,
    })
}

fn parse_timestamp(value: String) -> Result<chrono::DateTime<chrono::Utc>> {
    Ok(chrono::DateTime::parse_from_rfc3339(&value)
        .map_err(|e| Error::internal(format!("Failed to parse timestamp: {e}")))?
        .with_timezone(&chrono::Utc))
}
