//! Acadia Console - the assembled records client
//!
//! Binds every entity manager to one shared query cache and one HTTP
//! client, and adds the pieces the shell needs:
//! - `Console` — eight managers, one cache, one backend
//! - sidebar navigation metadata (`Screen`, `NAV_SECTIONS`)
//! - `DashboardSummary` aggregation
//! - the `acadia` CLI binary
//!
//! # Example
//!
//! ```rust,no_run
//! use acadia_console::{Console, ConsoleConfig};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ConsoleConfig::new("http://localhost:4000".parse()?)?;
//! let mut console = Console::new(config)?;
//!
//! console.courses.set_search("cs2");
//! let view = console.courses.visible_records().await;
//! println!("{} matching courses", view.rows.len());
//! # Ok(())
//! # }
//! ```

#![warn(unreachable_pub)]
#![allow(missing_docs)]

mod dashboard;
mod nav;

pub use dashboard::DashboardSummary;
pub use nav::{NavSection, Screen, NAV_SECTIONS};

use acadia_cache::{CacheConfig, QueryCache, RecordCache};
use acadia_gateway::{ClientConfig, ConfigError, RestClient, RestGateway};
use acadia_manager::EntityManager;
use acadia_model::{
    Admin, Course, CourseAssignment, Department, Lecturer, Program, Resource, School, Student,
};
use std::sync::Arc;
use url::Url;

/// Everything the console needs to start: where the backend is, plus
/// cache tuning.
#[derive(Debug, Clone)]
pub struct ConsoleConfig {
    /// HTTP client settings.
    pub client: ClientConfig,
    /// Query/record cache settings.
    pub cache: CacheConfig,
}

impl ConsoleConfig {
    /// Configuration pointing at the given backend.
    pub fn new(base_url: Url) -> Result<Self, ConfigError> {
        Ok(Self {
            client: ClientConfig::new(base_url)?,
            cache: CacheConfig::default(),
        })
    }

    /// Configuration from `ACADIA_API_URL`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            client: ClientConfig::from_env()?,
            cache: CacheConfig::default(),
        })
    }

    /// With cache tuning.
    #[must_use]
    pub fn with_cache(mut self, cache: CacheConfig) -> Self {
        self.cache = cache;
        self
    }
}

/// The assembled console: one manager per entity over one shared cache.
///
/// Managers are public fields; the shell routes the active screen's
/// interactions straight to the matching manager.
#[derive(Debug)]
pub struct Console {
    pub schools: EntityManager<School>,
    pub departments: EntityManager<Department>,
    pub programs: EntityManager<Program>,
    pub courses: EntityManager<Course>,
    pub admins: EntityManager<Admin>,
    pub lecturers: EntityManager<Lecturer>,
    pub students: EntityManager<Student>,
    pub assignments: EntityManager<CourseAssignment>,
    cache: QueryCache,
    active: Screen,
}

fn manager<E: Resource>(
    cache: &QueryCache,
    records: &RecordCache,
    client: &RestClient,
) -> EntityManager<E> {
    EntityManager::new(
        cache.clone(),
        records.clone(),
        Arc::new(RestGateway::<E>::new(client.clone())),
    )
}

impl Console {
    /// Build the console and all its managers.
    pub fn new(config: ConsoleConfig) -> Result<Self, ConfigError> {
        let client = RestClient::new(&config.client)?;
        let cache = QueryCache::new(config.cache.clone());
        let records = RecordCache::new(&config.cache);
        tracing::info!(base_url = %config.client.base_url, "console ready");
        Ok(Self {
            schools: manager(&cache, &records, &client),
            departments: manager(&cache, &records, &client),
            programs: manager(&cache, &records, &client),
            courses: manager(&cache, &records, &client),
            admins: manager(&cache, &records, &client),
            lecturers: manager(&cache, &records, &client),
            students: manager(&cache, &records, &client),
            assignments: manager(&cache, &records, &client),
            cache,
            active: Screen::Dashboard,
        })
    }

    /// Switch the active screen.
    pub fn navigate(&mut self, screen: Screen) {
        tracing::debug!(from = %self.active, to = %screen, "navigate");
        self.active = screen;
    }

    /// Currently active screen.
    #[must_use]
    pub fn active_screen(&self) -> Screen {
        self.active
    }

    /// The shared query cache (all managers hold clones of it).
    #[must_use]
    pub fn cache(&self) -> &QueryCache {
        &self.cache
    }
}
