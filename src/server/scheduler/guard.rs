//! Skip-if-busy guard for alliance sync passes.

use std::{
    collections::HashSet,
    sync::{Arc, Mutex, MutexGuard},
};

/// Set of alliances with a sync pass in flight, shared by the scheduler and the HTTP layer.
#[derive(Clone, Default, Debug)]
pub struct InFlight {
    alliances: Arc<Mutex<HashSet<i32>>>,
}

impl InFlight {
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks an alliance as busy.
    ///
    /// Returns `None` if a pass for the alliance is already running. The alliance is released
    /// when the returned guard is dropped.
    pub fn try_acquire(&self, alliance_id: i32) -> Option<InFlightGuard> {
        if self.lock().insert(alliance_id) {
            Some(InFlightGuard {
                in_flight: self.clone(),
                alliance_id,
            })
        } else {
            None
        }
    }

    pub fn is_busy(&self, alliance_id: i32) -> bool {
        self.lock().contains(&alliance_id)
    }

    fn lock(&self) -> MutexGuard<'_, HashSet<i32>> {
        // The set stays consistent even if a holder panicked
        self.alliances
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

/// Releases its alliance on drop.
#[derive(Debug)]
pub struct InFlightGuard {
    in_flight: InFlight,
    alliance_id: i32,
}

impl Drop for InFlightGuard {
    fn drop(&mut self) {
        self.in_flight.lock().remove(&self.alliance_id);
    }
}
