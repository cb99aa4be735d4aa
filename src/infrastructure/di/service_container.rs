//! Service container for dependency injection
//!
//! Wires up all services with their dependencies.

use std::sync::Arc;

use crate::application::services::NavService;
use crate::config::Settings;
use crate::infrastructure::traits::{
    Editor, EnvironmentEditor, FileSystem, RealFileSystem,
};

/// Container holding all application services.
pub struct ServiceContainer {
    /// Application settings
    pub settings: Arc<Settings>,

    /// Filesystem abstraction
    pub fs: Arc<dyn FileSystem>,

    /// Editor abstraction
    pub editor: Arc<dyn Editor>,

    /// Navigation rendering service
    pub nav: NavService,
}

impl ServiceContainer {
    /// Create a new service container with real implementations.
    pub fn new(settings: Settings) -> Self {
        Self::with_deps(
            settings,
            Arc::new(RealFileSystem),
            Arc::new(EnvironmentEditor),
        )
    }

    /// Create a service container with custom dependencies (for testing).
    pub fn with_deps(
        settings: Settings,
        fs: Arc<dyn FileSystem>,
        editor: Arc<dyn Editor>,
    ) -> Self {
        let settings = Arc::new(settings);
        let nav = NavService::new(Arc::clone(&fs), settings.renderer());

        Self {
            settings,
            fs,
            editor,
            nav,
        }
    }
}
