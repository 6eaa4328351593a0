//! Table registry.
//!
//! Resolves the [`BraceTable`] for a [`FileType`] through an ordered chain
//! of [`TableResolver`]s and memoizes the answer:
//!
//! 1. [`ExplicitTables`]: tables registered for a specific file type
//! 2. [`LanguageTables`]: the built-in table of the file type's language
//! 3. custom resolvers added through the builder, in order
//! 4. the registry's default table
//!
//! The memo is populated on first lookup and never invalidated. Concurrent
//! first lookups of the same file type may both resolve, but only the first
//! published table is kept, so every caller sees the same `Arc`.

use std::fmt;
use std::sync::Arc;

use brace_ir::Language;
use parking_lot::RwLock;
use rustc_hash::FxHashMap;

use crate::classifier::Classifier;
use crate::file_type::FileType;
use crate::table::BraceTable;

/// One link of the resolution chain.
pub trait TableResolver: Send + Sync {
    /// Name used in logs.
    fn name(&self) -> &str;

    /// The table for `file_type`, or `None` to defer to the next resolver.
    fn resolve(&self, file_type: &FileType) -> Option<Arc<BraceTable>>;
}

/// Tables registered for specific file types.
#[derive(Debug, Default)]
pub struct ExplicitTables {
    tables: FxHashMap<FileType, Arc<BraceTable>>,
}

impl ExplicitTables {
    pub fn insert(&mut self, file_type: FileType, table: Arc<BraceTable>) {
        self.tables.insert(file_type, table);
    }
}

impl TableResolver for ExplicitTables {
    fn name(&self) -> &str {
        "explicit"
    }

    fn resolve(&self, file_type: &FileType) -> Option<Arc<BraceTable>> {
        self.tables.get(file_type).cloned()
    }
}

/// Built-in tables keyed by language.
#[derive(Debug)]
pub struct LanguageTables {
    tables: FxHashMap<Language, Arc<BraceTable>>,
}

impl LanguageTables {
    pub fn builtin() -> Self {
        let tables = Language::ALL
            .into_iter()
            .filter_map(|language| {
                BraceTable::builtin(language).map(|table| (language, Arc::new(table)))
            })
            .collect();
        LanguageTables { tables }
    }
}

impl TableResolver for LanguageTables {
    fn name(&self) -> &str {
        "language"
    }

    fn resolve(&self, file_type: &FileType) -> Option<Arc<BraceTable>> {
        self.tables.get(&file_type.language()?).cloned()
    }
}

/// Resolver chain plus memo.
pub struct TableRegistry {
    resolvers: Vec<Box<dyn TableResolver>>,
    default: Arc<BraceTable>,
    cache: RwLock<FxHashMap<FileType, Arc<BraceTable>>>,
}

impl TableRegistry {
    /// Registry with the built-in tables and the host default.
    pub fn new() -> Self {
        Self::builder().build()
    }

    pub fn builder() -> TableRegistryBuilder {
        TableRegistryBuilder::default()
    }

    /// The table of last resort.
    pub fn default_table(&self) -> &Arc<BraceTable> {
        &self.default
    }

    /// The table for `file_type`, resolving and memoizing it on first use.
    pub fn table_for(&self, file_type: &FileType) -> Arc<BraceTable> {
        // Fast path: already resolved
        if let Some(table) = self.cache.read().get(file_type) {
            return Arc::clone(table);
        }

        // Slow path: resolve outside the lock, then publish
        let resolved = self.resolve(file_type);
        let mut cache = self.cache.write();
        let table = cache.entry(file_type.clone()).or_insert_with(|| {
            tracing::debug!(%file_type, table = resolved.name(), "bracket table cached");
            resolved
        });
        Arc::clone(table)
    }

    /// Classifier over the table for `file_type`.
    pub fn classifier(&self, file_type: &FileType) -> Classifier {
        Classifier::new(self.table_for(file_type), Arc::clone(&self.default))
    }

    /// Number of memoized file types.
    pub fn cached_len(&self) -> usize {
        self.cache.read().len()
    }

    fn resolve(&self, file_type: &FileType) -> Arc<BraceTable> {
        for resolver in &self.resolvers {
            if let Some(table) = resolver.resolve(file_type) {
                tracing::trace!(%file_type, resolver = resolver.name(), "bracket table resolved");
                return table;
            }
        }
        tracing::trace!(%file_type, "falling back to the default bracket table");
        Arc::clone(&self.default)
    }
}

impl Default for TableRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for TableRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.resolvers.iter().map(|r| r.name()).collect();
        f.debug_struct("TableRegistry")
            .field("resolvers", &names)
            .field("default", &self.default.name())
            .field("cached", &self.cached_len())
            .finish()
    }
}

/// Builder for [`TableRegistry`].
#[derive(Default)]
pub struct TableRegistryBuilder {
    explicit: ExplicitTables,
    custom: Vec<Box<dyn TableResolver>>,
    default: Option<BraceTable>,
}

impl TableRegistryBuilder {
    /// Use `table` for `file_type`, ahead of any built-in table.
    #[must_use]
    pub fn register(mut self, file_type: FileType, table: BraceTable) -> Self {
        self.explicit.insert(file_type, Arc::new(table));
        self
    }

    /// Append a resolver after the built-in language tables.
    #[must_use]
    pub fn resolver(mut self, resolver: impl TableResolver + 'static) -> Self {
        self.custom.push(Box::new(resolver));
        self
    }

    /// Replace the host default table.
    #[must_use]
    pub fn default_table(mut self, table: BraceTable) -> Self {
        self.default = Some(table);
        self
    }

    pub fn build(self) -> TableRegistry {
        let mut resolvers: Vec<Box<dyn TableResolver>> = Vec::with_capacity(2 + self.custom.len());
        resolvers.push(Box::new(self.explicit));
        resolvers.push(Box::new(LanguageTables::builtin()));
        resolvers.extend(self.custom);

        TableRegistry {
            resolvers,
            default: Arc::new(self.default.unwrap_or_else(BraceTable::host_default)),
            cache: RwLock::new(FxHashMap::default()),
        }
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "test assertions use unwrap/expect for clarity"
)]
mod tests;
