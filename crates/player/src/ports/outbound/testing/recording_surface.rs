//! Recording map surface
//!
//! Keeps the set of live markers per surface so tests can assert on what a
//! real widget would be showing, and can click markers the way a user would.

use std::cell::RefCell;
use std::collections::{BTreeMap, HashMap};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use microaventure_domain::AdventureId;

use crate::ports::outbound::{
    MapSurface, MapSurfaceFactory, MapViewOptions, MarkerClickHandler, MarkerHandle, MarkerSpec,
};

/// Everything observed on one surface
#[derive(Debug, Default)]
pub struct SurfaceLog {
    pub options: Option<MapViewOptions>,
    pub live_markers: BTreeMap<u64, MarkerSpec>,
    pub added: usize,
    pub removed: usize,
    pub dispose_calls: usize,
    /// Removals of handles that were not live
    pub unknown_removals: usize,
}

impl SurfaceLog {
    pub fn is_disposed(&self) -> bool {
        self.dispose_calls > 0
    }

    pub fn shows(&self, id: &AdventureId) -> bool {
        self.live_markers.values().any(|m| &m.adventure_id == id)
    }

    pub fn live_ids(&self) -> Vec<AdventureId> {
        self.live_markers
            .values()
            .map(|m| m.adventure_id.clone())
            .collect()
    }
}

/// A surface that records calls into a shared log
pub struct RecordingSurface {
    log: Arc<Mutex<SurfaceLog>>,
    next_handle: u64,
}

impl RecordingSurface {
    pub fn new(log: Arc<Mutex<SurfaceLog>>) -> Self {
        Self {
            log,
            next_handle: 0,
        }
    }

    fn with_log<R>(&self, f: impl FnOnce(&mut SurfaceLog) -> R) -> R {
        f(&mut lock_log(&self.log))
    }
}

impl MapSurface for RecordingSurface {
    fn add_marker(&mut self, marker: &MarkerSpec) -> MarkerHandle {
        self.next_handle += 1;
        let handle = self.next_handle;
        self.with_log(|log| {
            log.added += 1;
            log.live_markers.insert(handle, marker.clone());
        });
        MarkerHandle(handle)
    }

    fn remove_marker(&mut self, handle: MarkerHandle) {
        self.with_log(|log| {
            if log.live_markers.remove(&handle.0).is_some() {
                log.removed += 1;
            } else {
                log.unknown_removals += 1;
            }
        });
    }

    fn dispose(&mut self) {
        self.with_log(|log| log.dispose_calls += 1);
    }
}

static NEXT_FACTORY_ID: AtomicU64 = AtomicU64::new(1);

type SurfaceHandlers = Vec<(Arc<Mutex<SurfaceLog>>, MarkerClickHandler)>;

thread_local! {
    // Click handlers are `Rc`, so they stay on the thread that mounted the
    // surface, keyed by factory id.
    static CLICK_HANDLERS: RefCell<HashMap<u64, SurfaceHandlers>> = RefCell::new(HashMap::new());
}

fn lock_log(log: &Mutex<SurfaceLog>) -> std::sync::MutexGuard<'_, SurfaceLog> {
    match log.lock() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(),
    }
}

/// Factory handing out recording surfaces; keeps every log it created
pub struct RecordingSurfaceFactory {
    id: u64,
    surfaces: Mutex<Vec<Arc<Mutex<SurfaceLog>>>>,
}

impl Default for RecordingSurfaceFactory {
    fn default() -> Self {
        Self {
            id: NEXT_FACTORY_ID.fetch_add(1, Ordering::Relaxed),
            surfaces: Mutex::new(Vec::new()),
        }
    }
}

impl RecordingSurfaceFactory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Click the marker for `id` on every live surface showing it.
    ///
    /// Returns how many click handlers fired.
    pub fn click(&self, id: &AdventureId) -> usize {
        let handlers: Vec<MarkerClickHandler> = CLICK_HANDLERS.with(|all| {
            all.borrow()
                .get(&self.id)
                .map(|entries| {
                    entries
                        .iter()
                        .filter(|(log, _)| {
                            let log = lock_log(log);
                            !log.is_disposed() && log.shows(id)
                        })
                        .map(|(_, handler)| handler.clone())
                        .collect()
                })
                .unwrap_or_default()
        });

        for handler in &handlers {
            handler(id.clone());
        }
        handlers.len()
    }

    /// Logs of every surface created so far, oldest first
    pub fn surfaces(&self) -> Vec<Arc<Mutex<SurfaceLog>>> {
        match self.surfaces.lock() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    pub fn created(&self) -> usize {
        self.surfaces().len()
    }

    /// Surfaces created and not yet disposed
    pub fn live(&self) -> usize {
        self.surfaces()
            .iter()
            .filter(|log| !lock_log(log).is_disposed())
            .count()
    }
}

impl MapSurfaceFactory for RecordingSurfaceFactory {
    fn create(
        &self,
        options: &MapViewOptions,
        on_marker_click: MarkerClickHandler,
    ) -> Box<dyn MapSurface> {
        let log = Arc::new(Mutex::new(SurfaceLog {
            options: Some(options.clone()),
            ..SurfaceLog::default()
        }));
        if let Ok(mut surfaces) = self.surfaces.lock() {
            surfaces.push(log.clone());
        }
        CLICK_HANDLERS.with(|all| {
            all.borrow_mut()
                .entry(self.id)
                .or_default()
                .push((log.clone(), on_marker_click));
        });
        Box::new(RecordingSurface::new(log))
    }
}

impl Drop for RecordingSurfaceFactory {
    fn drop(&mut self) {
        let _ = CLICK_HANDLERS.try_with(|all| all.borrow_mut().remove(&self.id));
    }
}
