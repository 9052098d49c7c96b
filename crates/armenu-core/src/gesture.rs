//! Turns a unified pointer stream (touch or mouse) into pan and pinch deltas.
//!
//! Every pointer that goes down is remembered in arrival order, but only the
//! first two are *tracked*: a third finger changes nothing until one of the
//! tracked pointers lifts, at which point the next-oldest active pointer is
//! promoted into the tracked pair. Any change of the tracked set re-seeds the
//! per-gesture state, so the move that follows a transition is measured from
//! the positions recorded at that transition, never from stale ones.

use crate::constants::MIN_PINCH_DISTANCE;
use glam::Vec2;
use smallvec::SmallVec;

pub type PointerId = i32;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerPhase {
    Down,
    Move,
    Up,
    Cancel,
}

/// Pointer payload as delivered by the platform. Coordinates are optional so
/// that malformed events can be represented and rejected here.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RawPointerEvent {
    pub phase: PointerPhase,
    pub pointer_id: PointerId,
    pub x: Option<f32>,
    pub y: Option<f32>,
}

impl RawPointerEvent {
    pub fn new(phase: PointerPhase, pointer_id: PointerId, x: f32, y: f32) -> Self {
        Self {
            phase,
            pointer_id,
            x: Some(x),
            y: Some(y),
        }
    }

    pub fn down(pointer_id: PointerId, x: f32, y: f32) -> Self {
        Self::new(PointerPhase::Down, pointer_id, x, y)
    }

    pub fn moved(pointer_id: PointerId, x: f32, y: f32) -> Self {
        Self::new(PointerPhase::Move, pointer_id, x, y)
    }

    pub fn up(pointer_id: PointerId) -> Self {
        Self {
            phase: PointerPhase::Up,
            pointer_id,
            x: None,
            y: None,
        }
    }

    #[inline]
    fn position(&self) -> Option<Vec2> {
        match (self.x, self.y) {
            (Some(x), Some(y)) if x.is_finite() && y.is_finite() => Some(Vec2::new(x, y)),
            _ => None,
        }
    }
}

/// Delta produced by a pointer move.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GestureOutput {
    Pan(Vec2),
    Pinch(f32),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GestureKind {
    None,
    Pan,
    Pinch,
}

/// Minimal per-gesture memory.
///
/// `previous_pinch_distance` is `Some` exactly when two pointers are tracked,
/// and `previous_single_point` exactly when one is. The recorded pinch
/// distance is floored at `MIN_PINCH_DISTANCE`, so the first ratio after a
/// near-coincident touch-down is smaller than the true one (the scale clamp
/// bounds it either way).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GestureState {
    pub previous_single_point: Option<Vec2>,
    pub previous_pinch_midpoint: Option<Vec2>,
    pub previous_pinch_distance: Option<f32>,
}

#[derive(Clone, Copy, Debug)]
struct ActivePointer {
    id: PointerId,
    pos: Vec2,
}

#[derive(Clone, Debug, Default)]
pub struct GestureTracker {
    // Arrival order; the first two entries form the tracked pair.
    pointers: SmallVec<[ActivePointer; 4]>,
    state: GestureState,
}

impl GestureTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of tracked pointers: 0, 1 or 2.
    #[inline]
    pub fn active_pointer_count(&self) -> usize {
        self.pointers.len().min(2)
    }

    pub fn kind(&self) -> GestureKind {
        match self.active_pointer_count() {
            0 => GestureKind::None,
            1 => GestureKind::Pan,
            _ => GestureKind::Pinch,
        }
    }

    #[inline]
    pub fn is_panning(&self) -> bool {
        self.kind() == GestureKind::Pan
    }

    pub fn state(&self) -> &GestureState {
        &self.state
    }

    /// Forget every pointer and all gesture memory.
    pub fn clear(&mut self) {
        self.pointers.clear();
        self.state = GestureState::default();
    }

    /// Feed one event. Returns a delta only for moves of a tracked pointer
    /// that continue an already seeded gesture.
    pub fn handle(&mut self, ev: RawPointerEvent) -> Option<GestureOutput> {
        match ev.phase {
            PointerPhase::Down => {
                let pos = ev.position()?;
                self.pointer_down(ev.pointer_id, pos);
                None
            }
            PointerPhase::Move => {
                let pos = ev.position()?;
                self.pointer_move(ev.pointer_id, pos)
            }
            PointerPhase::Up | PointerPhase::Cancel => {
                self.pointer_up(ev.pointer_id);
                None
            }
        }
    }

    fn index_of(&self, id: PointerId) -> Option<usize> {
        self.pointers.iter().position(|p| p.id == id)
    }

    fn pointer_down(&mut self, id: PointerId, pos: Vec2) {
        let idx = match self.index_of(id) {
            Some(i) => {
                self.pointers[i].pos = pos;
                i
            }
            None => {
                self.pointers.push(ActivePointer { id, pos });
                self.pointers.len() - 1
            }
        };
        if idx < 2 {
            self.reseed();
        }
    }

    fn pointer_move(&mut self, id: PointerId, pos: Vec2) -> Option<GestureOutput> {
        let idx = self.index_of(id)?;
        self.pointers[idx].pos = pos;
        if idx >= 2 {
            return None;
        }
        match self.active_pointer_count() {
            1 => {
                let out = self
                    .state
                    .previous_single_point
                    .map(|prev| GestureOutput::Pan(pos - prev));
                self.state.previous_single_point = Some(pos);
                out
            }
            _ => {
                let (a, b) = (self.pointers[0].pos, self.pointers[1].pos);
                let current = a.distance(b).max(MIN_PINCH_DISTANCE);
                let out = self
                    .state
                    .previous_pinch_distance
                    .map(|prev| GestureOutput::Pinch(current / prev));
                self.state.previous_pinch_distance = Some(current);
                self.state.previous_pinch_midpoint = Some((a + b) * 0.5);
                out
            }
        }
    }

    fn pointer_up(&mut self, id: PointerId) {
        let Some(idx) = self.index_of(id) else {
            return;
        };
        self.pointers.remove(idx);
        if idx < 2 {
            self.reseed();
        }
    }

    // Tracked set changed: record fresh baselines for the new gesture kind.
    fn reseed(&mut self) {
        self.state = match self.active_pointer_count() {
            0 => GestureState::default(),
            1 => GestureState {
                previous_single_point: Some(self.pointers[0].pos),
                ..GestureState::default()
            },
            _ => {
                let (a, b) = (self.pointers[0].pos, self.pointers[1].pos);
                GestureState {
                    previous_single_point: None,
                    previous_pinch_midpoint: Some((a + b) * 0.5),
                    previous_pinch_distance: Some(a.distance(b).max(MIN_PINCH_DISTANCE)),
                }
            }
        };
        log::debug!(
            "[gesture] tracked pointers={} kind={:?}",
            self.active_pointer_count(),
            self.kind()
        );
    }
}
