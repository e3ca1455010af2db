//! One-shot initialization of the content catalog.
//!
//! Concurrent first callers attach to a single in-flight build via a shared
//! future. Once the build succeeds the catalog is stored in a `OnceLock` and every
//! later read is lock-free.

use crate::content::{self, ContentSource, ContentStructure, Platform};
use crate::error::LoadError;
use crate::search::SearchIndex;
use futures::FutureExt;
use futures::future::{BoxFuture, Shared};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, OnceLock};
use tokio::sync::Mutex;

/// Type alias for the shared catalog build future.
type SharedBuild = Shared<BoxFuture<'static, Result<Arc<Catalog>, LoadError>>>;

/// The loaded corpus together with one search index per platform.
#[derive(Debug)]
pub struct Catalog {
    content: ContentStructure,
    web: SearchIndex,
    native: SearchIndex,
}

impl Catalog {
    /// Builds both platform indices from a fully loaded structure.
    pub fn build(content: ContentStructure) -> Self {
        let web = SearchIndex::build(&content, Platform::Web);
        let native = SearchIndex::build(&content, Platform::Native);
        Self {
            content,
            web,
            native,
        }
    }

    pub const fn content(&self) -> &ContentStructure {
        &self.content
    }

    pub const fn index(&self, platform: Platform) -> &SearchIndex {
        match platform {
            Platform::Web => &self.web,
            Platform::Native => &self.native,
        }
    }
}

/// Observable lifecycle phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Uninitialized,
    Initializing,
    Ready,
}

/// Coordinates the single catalog build for a content source.
pub(crate) struct Lifecycle {
    source: ContentSource,

    /// Set exactly once, when a build succeeds
    ready: OnceLock<Arc<Catalog>>,

    /// Build currently running (awaited by every concurrent caller)
    in_flight: Mutex<Option<SharedBuild>>,

    /// Number of builds started, for diagnostics
    builds: Arc<AtomicUsize>,
}

impl std::fmt::Debug for Lifecycle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Lifecycle")
            .field("source", &self.source)
            .field("ready", &self.ready.get().is_some())
            .field("builds", &self.builds.load(Ordering::Relaxed))
            .finish()
    }
}

impl Lifecycle {
    pub(crate) fn new(source: ContentSource) -> Self {
        Self {
            source,
            ready: OnceLock::new(),
            in_flight: Mutex::new(None),
            builds: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// The catalog, if a build has completed.
    pub(crate) fn ready(&self) -> Option<&Arc<Catalog>> {
        self.ready.get()
    }

    pub(crate) async fn phase(&self) -> Phase {
        if self.ready.get().is_some() {
            return Phase::Ready;
        }
        if self.in_flight.lock().await.is_some() {
            Phase::Initializing
        } else {
            Phase::Uninitialized
        }
    }

    pub(crate) fn build_count(&self) -> usize {
        self.builds.load(Ordering::Acquire)
    }

    /// Loads and indexes the content, or joins a build that is already running.
    ///
    /// A failed build leaves the lifecycle uninitialized so a later call can retry.
    pub(crate) async fn initialize(&self) -> Result<Arc<Catalog>, LoadError> {
        if let Some(catalog) = self.ready.get() {
            return Ok(catalog.clone());
        }

        let build = {
            let mut in_flight = self.in_flight.lock().await;

            // A build may have finished while we waited for the lock
            if let Some(catalog) = self.ready.get() {
                return Ok(catalog.clone());
            }

            if let Some(build) = in_flight.as_ref() {
                tracing::debug!("Awaiting in-flight content build");
                build.clone()
            } else {
                let build = self.start_build();
                *in_flight = Some(build.clone());
                build
            }
        };

        let result = build.clone().await;

        if let Ok(catalog) = &result {
            // Every waiter receives a clone of the same Arc, so losing this race is harmless
            let _ = self.ready.set(catalog.clone());
        }

        {
            let mut in_flight = self.in_flight.lock().await;
            if in_flight.as_ref().is_some_and(|current| current.ptr_eq(&build)) {
                *in_flight = None;
            }
        }

        result
    }

    fn start_build(&self) -> SharedBuild {
        let source = self.source.clone();
        let builds = self.builds.clone();

        tracing::info!("Starting content index build");

        let build: BoxFuture<'static, Result<Arc<Catalog>, LoadError>> = Box::pin(async move {
            builds.fetch_add(1, Ordering::AcqRel);
            let start = std::time::Instant::now();

            let content = content::load(&source).await.inspect_err(|e| {
                tracing::error!("Failed to load content: {}", e);
            })?;
            let catalog = Catalog::build(content);

            tracing::info!(
                "Content index ready: {} web, {} native components in {:?}",
                catalog.content.component_count(Platform::Web),
                catalog.content.component_count(Platform::Native),
                start.elapsed()
            );

            Ok(Arc::new(catalog))
        });

        build.shared()
    }
}
