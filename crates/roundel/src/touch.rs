//! Multi-touch gesture engine: converts a stream of raw contact events into
//! deduplicated per-sector activation decisions, one independent track per
//! concurrent contact.

use crate::geometry::Point;
use crate::layout::Layout;
use derive_more::{Display, From, Into};
use std::collections::HashMap;

/// Identifier of one live pointer/touch contact. Opaque to the engine:
/// unique among concurrently live contacts, reusable after release.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, From, Into)]
pub struct ContactId(u64);

impl ContactId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }
}

/// A press or release decision for one sector. Always per-contact: two
/// contacts holding the same sector produce two independent pairs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectorEvent {
    Activate(usize),
    Deactivate(usize),
}

impl SectorEvent {
    pub fn sector(&self) -> usize {
        match self {
            Self::Activate(i) | Self::Deactivate(i) => *i,
        }
    }
}

/// Owns the layout and the per-contact binding map.
///
/// A map entry exists only for contacts whose down event landed on a sector;
/// a contact that started in dead space is never tracked, and its later
/// moves are ignored. The entry's value is the sector the contact currently
/// holds, or `None` while it is slid into dead space (sliding back onto the
/// wheel re-activates). Operations on one contact never read or mutate
/// another contact's entry.
#[derive(Debug)]
pub struct TouchTracker {
    layout: Layout,
    bindings: HashMap<ContactId, Option<usize>>,
}

impl TouchTracker {
    pub fn new(layout: Layout) -> Self {
        Self {
            layout,
            bindings: HashMap::new(),
        }
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// Reposition the wheel under live contacts; bindings keep their sector
    /// indices, the next move re-resolves against the new position.
    pub fn set_center(&mut self, center: Point) {
        self.layout.set_center(center);
    }

    /// Sector currently held by `id`, if any.
    pub fn active_sector(&self, id: ContactId) -> Option<usize> {
        self.bindings.get(&id).copied().flatten()
    }

    /// Number of tracked (grabbed) contacts.
    pub fn live_contacts(&self) -> usize {
        self.bindings.len()
    }

    /// Contact landed. A hit activates the sector and starts tracking the
    /// contact; dead space (the center hole, outside the rim) produces no
    /// binding and no events.
    pub fn on_down(&mut self, id: ContactId, point: Point) -> Vec<SectorEvent> {
        let Some(sector) = self.layout.sector_at(point) else {
            return Vec::new();
        };
        let index = sector.index;
        self.bindings.insert(id, Some(index));
        log::trace!("contact {id} down on sector {index}");
        vec![SectorEvent::Activate(index)]
    }

    /// Contact moved. Staying within the same sector (or within dead space)
    /// is a no-op; a transition deactivates the old sector before activating
    /// the new one, so per-sector events strictly alternate. Moves for a
    /// contact that never validly started are ignored.
    pub fn on_move(&mut self, id: ContactId, point: Point) -> Vec<SectorEvent> {
        let Some(current) = self.bindings.get(&id).copied() else {
            return Vec::new();
        };

        let target = self.layout.sector_at(point).map(|s| s.index);
        if target == current {
            return Vec::new();
        }

        let mut events = Vec::with_capacity(2);
        if let Some(old) = current {
            events.push(SectorEvent::Deactivate(old));
        }
        if let Some(new) = target {
            events.push(SectorEvent::Activate(new));
        }
        self.bindings.insert(id, target);
        log::trace!("contact {id} slid {current:?} -> {target:?}");
        events
    }

    /// Contact lifted. Deactivates whatever it held; idempotent for unknown
    /// contacts and for contacts resting in dead space.
    pub fn on_up(&mut self, id: ContactId) -> Vec<SectorEvent> {
        match self.bindings.remove(&id) {
            Some(Some(index)) => {
                log::trace!("contact {id} released sector {index}");
                vec![SectorEvent::Deactivate(index)]
            }
            _ => Vec::new(),
        }
    }

    /// Force-release every live contact, as if each had received its up
    /// event. Ordering across contacts is unconstrained by contract; events
    /// come out sorted by sector index so consumers see a stable order.
    pub fn release_all(&mut self) -> Vec<SectorEvent> {
        let mut events: Vec<SectorEvent> = self
            .bindings
            .drain()
            .filter_map(|(_, sector)| sector.map(SectorEvent::Deactivate))
            .collect();
        events.sort_by_key(|e| e.sector());
        events
    }

    /// Install a freshly built layout (sector count or radii changed).
    /// Indices from the old layout are meaningless in the new one, so every
    /// live binding is deactivated first; a held note must never outlive
    /// its sector.
    pub fn set_layout(&mut self, layout: Layout) -> Vec<SectorEvent> {
        let events = self.release_all();
        self.layout = layout;
        events
    }
}
