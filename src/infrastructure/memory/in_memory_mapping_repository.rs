//! Process-local implementation of [`MappingRepository`].

use std::collections::HashMap;

use async_trait::async_trait;
use parking_lot::Mutex;
use tracing::{debug, info};

use crate::domain::entities::UrlMapping;
use crate::domain::repositories::{MappingRepository, ShortenOutcome};
use crate::utils::code_generator::{CodeGenerator, RandomCodeGenerator};

/// Both indexes live behind one lock so that duplicate detection and
/// insertion happen as a single step.
#[derive(Debug, Default)]
struct Tables {
    by_code: HashMap<String, UrlMapping>,
    by_url: HashMap<String, String>,
}

/// In-memory mapping store guarded by a single mutex.
///
/// Every operation holds the lock for its whole duration and never across an
/// `.await`, so concurrent `shorten` calls for the same URL cannot both miss
/// the duplicate check, and concurrent `resolve` calls never lose a click.
///
/// The store starts empty and lives for the lifetime of the process.
pub struct InMemoryMappingRepository<G: CodeGenerator = RandomCodeGenerator> {
    tables: Mutex<Tables>,
    generator: G,
}

impl InMemoryMappingRepository<RandomCodeGenerator> {
    /// Creates an empty store using random 6-character codes.
    pub fn new() -> Self {
        Self::with_generator(RandomCodeGenerator)
    }
}

impl Default for InMemoryMappingRepository<RandomCodeGenerator> {
    fn default() -> Self {
        Self::new()
    }
}

impl<G: CodeGenerator> InMemoryMappingRepository<G> {
    /// Creates an empty store drawing candidate codes from `generator`.
    pub fn with_generator(generator: G) -> Self {
        Self {
            tables: Mutex::new(Tables::default()),
            generator,
        }
    }

    /// Draws candidates until one is not already a key.
    ///
    /// No attempt cap: with 62^6 codes the loop ends almost immediately for
    /// any realistic store size.
    fn allocate_code(&self, tables: &Tables) -> String {
        let mut attempts = 1u32;
        loop {
            let candidate = self.generator.generate();
            if !tables.by_code.contains_key(&candidate) {
                if attempts > 1 {
                    debug!(attempts, "Short code allocated after collision");
                }
                return candidate;
            }
            attempts += 1;
        }
    }
}

#[async_trait]
impl<G: CodeGenerator> MappingRepository for InMemoryMappingRepository<G> {
    async fn shorten(&self, long_url: &str) -> ShortenOutcome {
        let mut tables = self.tables.lock();

        if let Some(existing) = tables
            .by_url
            .get(long_url)
            .and_then(|code| tables.by_code.get(code))
        {
            debug!(code = %existing.short_code, "Reusing existing mapping");
            return ShortenOutcome {
                mapping: existing.clone(),
                created: false,
            };
        }

        let code = self.allocate_code(&tables);
        let mapping = UrlMapping::new(long_url.to_string(), code.clone());

        tables.by_url.insert(long_url.to_string(), code.clone());
        tables.by_code.insert(code.clone(), mapping.clone());

        info!(code = %code, "Created short link");

        ShortenOutcome {
            mapping,
            created: true,
        }
    }

    async fn resolve(&self, short_code: &str) -> Option<UrlMapping> {
        let mut tables = self.tables.lock();
        let mapping = tables.by_code.get_mut(short_code)?;
        mapping.record_click();
        Some(mapping.clone())
    }

    async fn stats(&self, short_code: &str) -> Option<UrlMapping> {
        self.tables.lock().by_code.get(short_code).cloned()
    }

    async fn len(&self) -> usize {
        self.tables.lock().by_code.len()
    }
}
