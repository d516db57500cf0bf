//! Libris Library Management Core
//!
//! In-process service layer for a desktop library application: catalog,
//! members, inventory and loans, persisted to per-entity flat files. The
//! presentation layer calls the service functions and subscribes to the
//! event bus for refresh; it never mutates the collections directly.

pub mod config;
pub mod error;
pub mod events;
pub mod models;
pub mod repository;
pub mod services;

pub use config::AppConfig;
pub use error::{AppError, AppResult, ErrorCode};

use events::EventBus;
use repository::Repository;

/// Application state owned by the single logic thread
pub struct AppState {
    pub config: AppConfig,
    pub repository: Repository,
    pub events: EventBus,
}

impl AppState {
    /// Build the state and load every collection from disk. A load failure
    /// is unrecoverable; the caller must abort startup.
    pub fn init(config: AppConfig) -> AppResult<Self> {
        let mut repository = Repository::new(&config.storage);
        repository.load_all()?;
        Ok(Self {
            config,
            repository,
            events: EventBus::new(),
        })
    }

    /// Write every collection back to disk (shutdown or explicit save)
    pub fn save(&self) -> AppResult<()> {
        self.repository.save_all()
    }
}
