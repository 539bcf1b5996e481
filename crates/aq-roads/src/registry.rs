//! Validated road catalog and its builder.
//!
//! # Ordering
//!
//! Catalog order is insertion order and is significant: the severity mapper
//! preserves it, and both the critical ranking and the rerouting engine break
//! ties by it.
//!
//! # Sharing
//!
//! A built [`RoadRegistry`] is immutable.  [`SharedRoadRegistry`] lets a
//! serving layer hand the same catalog to concurrent evaluations and refresh
//! it by swapping in a whole new registry; no evaluation ever observes a
//! half-updated catalog.

use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

use crate::{RoadError, RoadResult, RoadSegment};

// ── RoadRegistry ──────────────────────────────────────────────────────────────

/// Ordered, read-only catalog of road segments with id lookup.
///
/// Do not construct directly; use [`RoadRegistryBuilder`] or
/// [`RoadRegistry::new`].
#[derive(Clone, Debug, Default)]
pub struct RoadRegistry {
    roads: Vec<RoadSegment>,
    by_id: HashMap<String, usize>,
}

impl RoadRegistry {
    /// Validate `roads` and build a registry in the given order.
    ///
    /// Fails if any road has a non-positive (or non-finite) length or if two
    /// roads share an id.
    pub fn new(roads: Vec<RoadSegment>) -> RoadResult<Self> {
        let mut by_id = HashMap::with_capacity(roads.len());
        for (i, road) in roads.iter().enumerate() {
            if !(road.length_km > 0.0 && road.length_km.is_finite()) {
                return Err(RoadError::NonPositiveLength {
                    id:        road.id.clone(),
                    length_km: road.length_km,
                });
            }
            if by_id.insert(road.id.clone(), i).is_some() {
                return Err(RoadError::DuplicateId(road.id.clone()));
            }
        }
        Ok(Self { roads, by_id })
    }

    /// A catalog with no roads.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.roads.len()
    }

    pub fn is_empty(&self) -> bool {
        self.roads.is_empty()
    }

    /// Look up a road by id.
    pub fn get(&self, id: &str) -> Option<&RoadSegment> {
        self.by_id.get(id).map(|&i| &self.roads[i])
    }

    pub fn contains(&self, id: &str) -> bool {
        self.by_id.contains_key(id)
    }

    /// All roads in catalog order.
    pub fn roads(&self) -> &[RoadSegment] {
        &self.roads
    }

    pub fn iter(&self) -> impl Iterator<Item = &RoadSegment> + '_ {
        self.roads.iter()
    }
}

// ── RoadRegistryBuilder ───────────────────────────────────────────────────────

/// Accumulate roads, then call [`build`](Self::build) to validate.
///
/// # Example
///
/// ```
/// use aq_core::GeoPoint;
/// use aq_roads::{RoadRegistryBuilder, RoadSegment};
///
/// let mut b = RoadRegistryBuilder::new();
/// b.add_road(RoadSegment::new("1", "Ring Road", GeoPoint::new(28.57, 77.22), 8.0, "AIIMS"));
/// b.add_road(RoadSegment::new("2", "ITO", GeoPoint::new(28.63, 77.25), 2.0, "Delhi Gate"));
/// let registry = b.build().unwrap();
/// assert_eq!(registry.len(), 2);
/// assert_eq!(registry.get("2").unwrap().name, "ITO");
/// ```
#[derive(Default)]
pub struct RoadRegistryBuilder {
    roads: Vec<RoadSegment>,
}

impl RoadRegistryBuilder {
    pub fn new() -> Self {
        Self { roads: Vec::new() }
    }

    pub fn with_capacity(roads: usize) -> Self {
        Self { roads: Vec::with_capacity(roads) }
    }

    /// Append a road; validation is deferred to `build`.
    pub fn add_road(&mut self, road: RoadSegment) -> &mut Self {
        self.roads.push(road);
        self
    }

    /// Consume the builder and produce a validated [`RoadRegistry`].
    pub fn build(self) -> RoadResult<RoadRegistry> {
        RoadRegistry::new(self.roads)
    }
}

// ── SharedRoadRegistry ────────────────────────────────────────────────────────

/// Thread-safe handle to the current catalog.
///
/// Readers take an `Arc` snapshot and evaluate against it without holding
/// the lock; writers replace the whole catalog.
pub struct SharedRoadRegistry {
    current: RwLock<Arc<RoadRegistry>>,
}

impl SharedRoadRegistry {
    pub fn new(registry: RoadRegistry) -> Self {
        Self { current: RwLock::new(Arc::new(registry)) }
    }

    /// The catalog as of now.  Later replacements do not affect it.
    pub fn snapshot(&self) -> Arc<RoadRegistry> {
        // Only whole `Arc`s are ever written, so a poisoned lock still holds a
        // complete registry.
        let guard = self.current.read().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(&*guard)
    }

    /// Swap in `registry`, returning the previous catalog.
    pub fn replace(&self, registry: RoadRegistry) -> Arc<RoadRegistry> {
        let mut guard = self.current.write().unwrap_or_else(PoisonError::into_inner);
        std::mem::replace(&mut *guard, Arc::new(registry))
    }
}
