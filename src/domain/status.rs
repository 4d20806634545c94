// src/domain/status.rs

use crate::domain::{normalize, NormalizedItem};
use crate::listings::{FallbackProvider, ListingSource};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, RwLock};
use std::thread::JoinHandle;

/// Where the project grid is in its one-shot lifecycle.
///
/// `Loaded` and `Failed` are terminal: once left, `Loading` is never seen
/// again for the same coordinator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProjectsState {
    Loading,
    Loaded(Vec<NormalizedItem>),
    Failed {
        items: Vec<NormalizedItem>,
        reason: String,
    },
}

impl ProjectsState {
    pub fn is_loading(&self) -> bool {
        matches!(self, ProjectsState::Loading)
    }

    pub fn items(&self) -> &[NormalizedItem] {
        match self {
            ProjectsState::Loading => &[],
            ProjectsState::Loaded(items) => items,
            ProjectsState::Failed { items, .. } => items,
        }
    }

    /// True when the grid is showing the hand-curated fallback set.
    pub fn fallback_notice(&self) -> bool {
        matches!(self, ProjectsState::Failed { .. })
    }
}

/// Runs the listing call and settles on a terminal state. Never fails:
/// any listing error turns into the fallback set.
pub fn resolve(source: &dyn ListingSource, fallback: &FallbackProvider, owner: &str) -> ProjectsState {
    match source.fetch_listing(owner) {
        Ok(records) => {
            let items = normalize(&records);
            tracing::info!(fetched = records.len(), shown = items.len(), "projects loaded");
            ProjectsState::Loaded(items)
        }
        Err(e) => {
            tracing::warn!(error = %e, "listing unavailable, using fallback projects");
            ProjectsState::Failed {
                items: normalize(&fallback.fallback_listing()),
                reason: e.to_string(),
            }
        }
    }
}

struct ProjectsTask {
    handle: Option<JoinHandle<()>>,
    cancelled: Arc<AtomicBool>,
}

/// Owns the projects lifecycle for the lifetime of the site.
///
/// `mount` starts exactly one background fetch; request handlers read
/// snapshots. Dropping the coordinator cancels the task, and a result that
/// arrives afterwards is thrown away.
pub struct ProjectsCoordinator {
    owner: String,
    source: Arc<dyn ListingSource>,
    fallback: Arc<FallbackProvider>,
    state: Arc<RwLock<ProjectsState>>,
    task: Mutex<Option<ProjectsTask>>,
}

impl ProjectsCoordinator {
    pub fn new(
        owner: impl Into<String>,
        source: Arc<dyn ListingSource>,
        fallback: FallbackProvider,
    ) -> Self {
        Self {
            owner: owner.into(),
            source,
            fallback: Arc::new(fallback),
            state: Arc::new(RwLock::new(ProjectsState::Loading)),
            task: Mutex::new(None),
        }
    }

    /// Starts the fetch. Calling it again is a no-op.
    pub fn mount(&self) {
        let mut slot = match self.task.lock() {
            Ok(slot) => slot,
            Err(poisoned) => poisoned.into_inner(),
        };
        if slot.is_some() {
            return;
        }

        let cancelled = Arc::new(AtomicBool::new(false));
        let source = Arc::clone(&self.source);
        let fallback = Arc::clone(&self.fallback);
        let state = Arc::clone(&self.state);
        let owner = self.owner.clone();
        let flag = Arc::clone(&cancelled);

        tracing::debug!(owner = %owner, "mounting projects coordinator");

        let handle = std::thread::spawn(move || {
            let outcome = resolve(source.as_ref(), &fallback, &owner);
            if flag.load(Ordering::Acquire) {
                tracing::debug!("projects task cancelled, discarding result");
                return;
            }
            settle(&state, outcome);
        });

        *slot = Some(ProjectsTask {
            handle: Some(handle),
            cancelled,
        });
    }

    pub fn snapshot(&self) -> ProjectsState {
        match self.state.read() {
            Ok(state) => state.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    /// Blocks until the background fetch has settled. Returns immediately
    /// if the coordinator was never mounted or was already joined.
    pub fn join(&self) {
        let handle = match self.task.lock() {
            Ok(mut slot) => slot.as_mut().and_then(|t| t.handle.take()),
            Err(poisoned) => poisoned.into_inner().as_mut().and_then(|t| t.handle.take()),
        };

        if let Some(handle) = handle {
            if handle.join().is_err() {
                tracing::error!("projects task panicked");
            }
        }
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }
}

impl Drop for ProjectsCoordinator {
    fn drop(&mut self) {
        let slot = match self.task.get_mut() {
            Ok(slot) => slot,
            Err(poisoned) => poisoned.into_inner(),
        };
        if let Some(task) = slot {
            task.cancelled.store(true, Ordering::Release);
        }
    }
}

/// Only `Loading` may be replaced.
fn settle(state: &RwLock<ProjectsState>, outcome: ProjectsState) {
    let mut guard = match state.write() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(),
    };
    if guard.is_loading() {
        *guard = outcome;
    } else {
        tracing::warn!("projects state already settled, ignoring late result");
    }
}
