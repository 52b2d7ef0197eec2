use super::{CatalogError, OccupationCatalog, OccupationRow};
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

/// Where occupation rows come from. The matcher never depends on this; it
/// takes plain row slices so caching stays an infrastructure concern.
pub trait CatalogSource: Send + Sync {
    fn load(&self) -> Result<OccupationCatalog, CatalogError>;
}

impl<S: CatalogSource + ?Sized> CatalogSource for Box<S> {
    fn load(&self) -> Result<OccupationCatalog, CatalogError> {
        (**self).load()
    }
}

/// Source backed by a delimited text file on disk.
pub struct FileCatalogSource {
    path: PathBuf,
}

impl FileCatalogSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl CatalogSource for FileCatalogSource {
    fn load(&self) -> Result<OccupationCatalog, CatalogError> {
        OccupationCatalog::from_path(&self.path)
    }
}

/// Source holding rows in memory, for bundled defaults and tests.
pub struct StaticCatalogSource {
    rows: Vec<OccupationRow>,
}

impl StaticCatalogSource {
    pub fn new(rows: Vec<OccupationRow>) -> Self {
        Self { rows }
    }

    pub fn from_csv(raw: &str) -> Result<Self, CatalogError> {
        let catalog = OccupationCatalog::from_reader(raw.as_bytes())?;
        Ok(Self {
            rows: catalog.rows().to_vec(),
        })
    }
}

impl CatalogSource for StaticCatalogSource {
    fn load(&self) -> Result<OccupationCatalog, CatalogError> {
        Ok(OccupationCatalog::from_rows(self.rows.clone()))
    }
}

/// Load-once, read-many cache over a catalog source.
///
/// The catalog never changes between explicit reloads, so callers share one
/// `Arc` snapshot and invalidation is always deliberate.
pub struct CachedCatalog<S> {
    source: S,
    cached: Mutex<Option<Arc<OccupationCatalog>>>,
}

impl<S: CatalogSource> CachedCatalog<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            cached: Mutex::new(None),
        }
    }

    /// Current snapshot, loading from the source on first use.
    pub fn get(&self) -> Result<Arc<OccupationCatalog>, CatalogError> {
        let mut guard = self.cached.lock().expect("catalog mutex poisoned");
        if let Some(catalog) = guard.as_ref() {
            return Ok(Arc::clone(catalog));
        }

        let catalog = Arc::new(self.source.load()?);
        *guard = Some(Arc::clone(&catalog));
        Ok(catalog)
    }

    /// Drop the cached snapshot and fetch a fresh one.
    pub fn reload(&self) -> Result<Arc<OccupationCatalog>, CatalogError> {
        let catalog = Arc::new(self.source.load()?);
        let mut guard = self.cached.lock().expect("catalog mutex poisoned");
        *guard = Some(Arc::clone(&catalog));
        Ok(catalog)
    }

    /// Forget the cached snapshot; the next `get` reloads.
    pub fn invalidate(&self) {
        let mut guard = self.cached.lock().expect("catalog mutex poisoned");
        *guard = None;
    }
}
