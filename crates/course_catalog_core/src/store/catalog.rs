//! The four platform tables, loaded together at startup.

use crate::config::DatasetsConfig;
use crate::error::CatalogError;
use crate::store::table::Table;
use crate::types::Platform;

/// All catalog tables. Built once; read-only afterwards, so it can be shared
/// across request handlers behind an `Arc` without locking.
#[derive(Debug, Clone)]
pub struct DatasetStore {
    udemy: Table,
    coursera_clean: Table,
    coursera_original: Table,
    edx: Table,
}

impl DatasetStore {
    /// Load every dataset. The first failure aborts the whole load: a
    /// partially loaded store is never returned.
    pub fn load(config: &DatasetsConfig) -> Result<Self, CatalogError> {
        let load = |platform: Platform| -> Result<Table, CatalogError> {
            let source = config.source(platform);
            tracing::debug!(%platform, path = %source.path.display(), "Loading dataset");
            let table = Table::load(platform, &source)?;
            tracing::info!(
                %platform,
                rows = table.len(),
                columns = table.columns().len(),
                "Dataset loaded"
            );
            Ok(table)
        };

        Ok(Self {
            udemy: load(Platform::Udemy)?,
            coursera_clean: load(Platform::CourseraClean)?,
            coursera_original: load(Platform::CourseraOriginal)?,
            edx: load(Platform::Edx)?,
        })
    }

    /// Assemble a store from already-built tables. Each table must belong to
    /// the slot it is passed in.
    pub fn from_tables(
        udemy: Table,
        coursera_clean: Table,
        coursera_original: Table,
        edx: Table,
    ) -> Result<Self, CatalogError> {
        let store = Self {
            udemy,
            coursera_clean,
            coursera_original,
            edx,
        };
        for platform in Platform::ALL {
            let actual = store.table(platform).platform();
            if actual != platform {
                return Err(CatalogError::InvalidInput(format!(
                    "{actual} table passed in the {platform} slot"
                )));
            }
        }
        Ok(store)
    }

    pub fn table(&self, platform: Platform) -> &Table {
        match platform {
            Platform::Udemy => &self.udemy,
            Platform::CourseraClean => &self.coursera_clean,
            Platform::CourseraOriginal => &self.coursera_original,
            Platform::Edx => &self.edx,
        }
    }

    /// Row count per platform, in `Platform::ALL` order.
    pub fn sizes(&self) -> Vec<(Platform, usize)> {
        Platform::ALL
            .iter()
            .map(|&p| (p, self.table(p).len()))
            .collect()
    }
}
