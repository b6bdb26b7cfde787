use std::fmt;

use crate::item::{DisplayItem, ItemId};

pub const CARD_WIDTH: f32 = 256.0;
pub const CARD_HEIGHT: f32 = 384.0;
pub const EXPANDED_WIDTH: f32 = 352.0;
pub const EXPANDED_HEIGHT: f32 = 480.0;

pub const STACK_STEP_Y: f32 = -10.0;
pub const STACK_TILT_DEG: f32 = 3.0;

pub const SPREAD_STEP_X: f32 = 160.0;
pub const SPREAD_MAX_SPAN_X: f32 = 640.0;
pub const SPREAD_LIFT_Y: f32 = -100.0;
pub const SPREAD_DROP_Y: f32 = 35.0;
pub const SPREAD_STEP_DEG: f32 = 11.0;

pub const SPREAD_Z_BASE: i32 = 10;
pub const EXPANDED_Z_MIN: i32 = 50;
pub const DIMMED_OPACITY: f32 = 0.5;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeckState {
    Idle,
    Spread,
    Expanded(ItemId),
}

impl DeckState {
    pub fn expanded(&self) -> Option<ItemId> {
        match self {
            DeckState::Expanded(id) => Some(*id),
            _ => None,
        }
    }
}

impl fmt::Display for DeckState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeckState::Idle => f.write_str("Idle"),
            DeckState::Spread => f.write_str("Spread"),
            DeckState::Expanded(id) => write!(f, "Expanded({id})"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DeckTransition {
    pub from: DeckState,
    pub to: DeckState,
}

impl DeckTransition {
    fn new(from: DeckState, to: DeckState) -> Self {
        Self { from, to }
    }

    pub fn changed(&self) -> bool {
        self.from != self.to
    }
}

impl fmt::Display for DeckTransition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.from, self.to)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeckError {
    UnknownItem { id: ItemId },
}

impl fmt::Display for DeckError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeckError::UnknownItem { id } => write!(f, "no card with id {id} in the deck"),
        }
    }
}

impl std::error::Error for DeckError {}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeckEvent {
    PointerEnter,
    PointerLeave,
    ItemClick(ItemId),
    GlobalPointerDown { inside: bool },
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpreadSlot {
    pub x: f32,
    pub y: f32,
    pub rotation_deg: f32,
}

/// Paint parameters for one card. Offsets are relative to the deck center,
/// in CSS pixels; the card is centered on that point before the offset applies.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayoutTransform {
    pub x: f32,
    pub y: f32,
    pub rotation_deg: f32,
    pub z_index: i32,
    pub opacity: f32,
    pub width: f32,
    pub height: f32,
}

/// Fan position for `index` out of `count` cards. Slots are symmetric about
/// the middle of the set: offset and rotation grow with the distance from it.
/// The horizontal step shrinks once the fan would exceed `SPREAD_MAX_SPAN_X`.
pub fn spread_slot(index: usize, count: usize) -> SpreadSlot {
    if count <= 1 {
        return SpreadSlot {
            x: 0.0,
            y: SPREAD_LIFT_Y,
            rotation_deg: 0.0,
        };
    }
    let center = (count - 1) as f32 * 0.5;
    let rel = index as f32 - center;
    let step_x = SPREAD_STEP_X.min(SPREAD_MAX_SPAN_X / (count - 1) as f32);
    let step_deg = SPREAD_STEP_DEG * (step_x / SPREAD_STEP_X);
    SpreadSlot {
        x: rel * step_x,
        y: SPREAD_LIFT_Y + rel.abs() * SPREAD_DROP_Y,
        rotation_deg: rel * step_deg,
    }
}

pub fn expanded_z_index(count: usize) -> i32 {
    let top_spread = SPREAD_Z_BASE.saturating_add(count.min(i32::MAX as usize) as i32);
    EXPANDED_Z_MIN.max(top_spread)
}

fn stacked_transform(index: usize) -> LayoutTransform {
    let tilt = if index % 2 == 0 {
        -STACK_TILT_DEG
    } else {
        STACK_TILT_DEG
    };
    LayoutTransform {
        x: 0.0,
        y: index as f32 * STACK_STEP_Y,
        rotation_deg: tilt,
        z_index: index.min(i32::MAX as usize) as i32,
        opacity: 1.0,
        width: CARD_WIDTH,
        height: CARD_HEIGHT,
    }
}

fn spread_transform(index: usize, count: usize) -> LayoutTransform {
    let slot = spread_slot(index, count);
    LayoutTransform {
        x: slot.x,
        y: slot.y,
        rotation_deg: slot.rotation_deg,
        z_index: SPREAD_Z_BASE.saturating_add(index.min(i32::MAX as usize) as i32),
        opacity: 1.0,
        width: CARD_WIDTH,
        height: CARD_HEIGHT,
    }
}

pub fn compute_transform(
    item: ItemId,
    index: usize,
    count: usize,
    state: DeckState,
) -> LayoutTransform {
    match state {
        DeckState::Idle => stacked_transform(index),
        DeckState::Spread => spread_transform(index, count),
        DeckState::Expanded(active) if active == item => LayoutTransform {
            x: 0.0,
            y: 0.0,
            rotation_deg: 0.0,
            z_index: expanded_z_index(count),
            opacity: 1.0,
            width: EXPANDED_WIDTH,
            height: EXPANDED_HEIGHT,
        },
        DeckState::Expanded(_) => LayoutTransform {
            opacity: DIMMED_OPACITY,
            ..spread_transform(index, count)
        },
    }
}

/// Interaction state for the project deck.
///
/// `pointer_inside` is tracked next to the state so that closing an expanded
/// card can fall back to `Spread` while the pointer is still over the deck.
#[derive(Clone, Debug)]
pub struct CardDeck {
    items: Vec<ItemId>,
    state: DeckState,
    pointer_inside: bool,
}

impl CardDeck {
    pub fn new(items: Vec<ItemId>) -> Self {
        Self {
            items,
            state: DeckState::Idle,
            pointer_inside: false,
        }
    }

    pub fn from_items(items: &[DisplayItem]) -> Self {
        Self::new(items.iter().map(|item| item.id).collect())
    }

    pub fn state(&self) -> DeckState {
        self.state
    }

    pub fn pointer_inside(&self) -> bool {
        self.pointer_inside
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn contains(&self, id: ItemId) -> bool {
        self.items.contains(&id)
    }

    pub fn is_expanded(&self, id: ItemId) -> bool {
        self.state.expanded() == Some(id)
    }

    pub fn shows_deck_base(&self) -> bool {
        self.state == DeckState::Idle
    }

    fn set_state(&mut self, next: DeckState) -> DeckTransition {
        let transition = DeckTransition::new(self.state, next);
        self.state = next;
        transition
    }

    pub fn on_pointer_enter_deck(&mut self) -> DeckTransition {
        self.pointer_inside = true;
        match self.state {
            DeckState::Idle => self.set_state(DeckState::Spread),
            current => DeckTransition::new(current, current),
        }
    }

    pub fn on_pointer_leave_deck(&mut self) -> DeckTransition {
        self.pointer_inside = false;
        match self.state {
            DeckState::Spread => self.set_state(DeckState::Idle),
            current => DeckTransition::new(current, current),
        }
    }

    /// Toggles the expansion of `id`. Ids outside the deck are rejected and
    /// leave the state untouched.
    pub fn on_item_click(&mut self, id: ItemId) -> Result<DeckTransition, DeckError> {
        if !self.contains(id) {
            return Err(DeckError::UnknownItem { id });
        }
        let next = if self.is_expanded(id) {
            if self.pointer_inside {
                DeckState::Spread
            } else {
                DeckState::Idle
            }
        } else {
            DeckState::Expanded(id)
        };
        Ok(self.set_state(next))
    }

    pub fn on_outside_interaction(&mut self) -> DeckTransition {
        self.pointer_inside = false;
        self.set_state(DeckState::Idle)
    }

    pub fn on_global_pointer_down(&mut self, inside: bool) -> DeckTransition {
        if inside {
            return DeckTransition::new(self.state, self.state);
        }
        self.on_outside_interaction()
    }

    pub fn apply(&mut self, event: DeckEvent) -> Result<DeckTransition, DeckError> {
        match event {
            DeckEvent::PointerEnter => Ok(self.on_pointer_enter_deck()),
            DeckEvent::PointerLeave => Ok(self.on_pointer_leave_deck()),
            DeckEvent::ItemClick(id) => self.on_item_click(id),
            DeckEvent::GlobalPointerDown { inside } => Ok(self.on_global_pointer_down(inside)),
        }
    }

    pub fn transform_at(&self, index: usize) -> Option<LayoutTransform> {
        let id = *self.items.get(index)?;
        Some(compute_transform(id, index, self.items.len(), self.state))
    }

    pub fn transform_for(&self, id: ItemId) -> Option<LayoutTransform> {
        let index = self.items.iter().position(|item| *item == id)?;
        self.transform_at(index)
    }

    pub fn layout(&self) -> Vec<LayoutTransform> {
        let count = self.items.len();
        self.items
            .iter()
            .enumerate()
            .map(|(index, id)| compute_transform(*id, index, count, self.state))
            .collect()
    }
}

/// Rebuilds a deck from an event log. Rejected events are skipped, matching
/// what the live controller does with them.
pub fn replay(items: Vec<ItemId>, events: &[DeckEvent]) -> CardDeck {
    let mut deck = CardDeck::new(items);
    for event in events {
        let _ = deck.apply(*event);
    }
    deck
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(count: u32) -> Vec<ItemId> {
        (1..=count).map(ItemId).collect()
    }

    #[test]
    fn spread_slots_are_symmetric() {
        for count in 2..9 {
            for index in 0..count {
                let left = spread_slot(index, count);
                let right = spread_slot(count - 1 - index, count);
                assert!((left.x + right.x).abs() < 1e-4);
                assert!((left.y - right.y).abs() < 1e-4);
                assert!((left.rotation_deg + right.rotation_deg).abs() < 1e-4);
            }
        }
    }

    #[test]
    fn spread_magnitude_grows_away_from_center() {
        let count = 7;
        let center = spread_slot(3, count);
        let near = spread_slot(4, count);
        let far = spread_slot(6, count);
        assert_eq!(center.x, 0.0);
        assert!(near.x.abs() < far.x.abs());
        assert!(near.rotation_deg.abs() < far.rotation_deg.abs());
        assert!(center.y < near.y && near.y < far.y);
    }

    #[test]
    fn wide_decks_stay_within_span() {
        let count = 20;
        let first = spread_slot(0, count);
        let last = spread_slot(count - 1, count);
        assert!((last.x - first.x) <= SPREAD_MAX_SPAN_X + 1e-3);
    }

    #[test]
    fn single_and_empty_decks_do_not_divide_by_zero() {
        let single = spread_slot(0, 1);
        assert_eq!(single.x, 0.0);
        let empty = spread_slot(0, 0);
        assert!(empty.x.is_finite() && empty.y.is_finite());

        let mut deck = CardDeck::new(Vec::new());
        assert_eq!(deck.on_pointer_enter_deck().to, DeckState::Spread);
        assert!(deck.layout().is_empty());
        assert!(deck.transform_at(0).is_none());
    }

    #[test]
    fn idle_alternates_tilt_and_lifts_each_card() {
        let deck = CardDeck::new(ids(4));
        let layout = deck.layout();
        assert_eq!(layout[0].rotation_deg, -STACK_TILT_DEG);
        assert_eq!(layout[1].rotation_deg, STACK_TILT_DEG);
        assert_eq!(layout[3].y, 3.0 * STACK_STEP_Y);
        assert!(deck.shows_deck_base());
    }

    #[test]
    fn enter_and_leave_are_no_ops_while_expanded() {
        let mut deck = CardDeck::new(ids(3));
        deck.on_item_click(ItemId(2)).unwrap();
        assert!(!deck.on_pointer_enter_deck().changed());
        assert!(!deck.on_pointer_leave_deck().changed());
        assert_eq!(deck.state(), DeckState::Expanded(ItemId(2)));
    }

    #[test]
    fn unknown_click_is_rejected_without_change() {
        let mut deck = CardDeck::new(ids(3));
        deck.on_pointer_enter_deck();
        let err = deck.on_item_click(ItemId(99)).unwrap_err();
        assert_eq!(err, DeckError::UnknownItem { id: ItemId(99) });
        assert_eq!(deck.state(), DeckState::Spread);
    }

    #[test]
    fn expanded_z_beats_large_spreads() {
        assert_eq!(expanded_z_index(4), EXPANDED_Z_MIN);
        let count = 60;
        let mut deck = CardDeck::new((1..=count as u32).map(ItemId).collect());
        deck.on_item_click(ItemId(1)).unwrap();
        let layout = deck.layout();
        let top = layout[0].z_index;
        assert!(layout[1..].iter().all(|t| t.z_index < top));
    }

    #[test]
    fn inside_pointer_down_keeps_state() {
        let mut deck = CardDeck::new(ids(2));
        deck.on_item_click(ItemId(1)).unwrap();
        assert!(!deck.on_global_pointer_down(true).changed());
        assert_eq!(deck.on_global_pointer_down(false).to, DeckState::Idle);
    }

    #[test]
    fn state_display_reads_like_a_log_line() {
        let transition = DeckTransition::new(DeckState::Spread, DeckState::Expanded(ItemId(3)));
        assert_eq!(transition.to_string(), "Spread -> Expanded(3)");
    }
}
