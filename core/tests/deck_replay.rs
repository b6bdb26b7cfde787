use portfolio_core::deck::{DIMMED_OPACITY, EXPANDED_HEIGHT, EXPANDED_WIDTH, SPREAD_Z_BASE};
use portfolio_core::{replay, spread_slot, CardDeck, DeckEvent, DeckState, ItemId};

fn four_cards() -> Vec<ItemId> {
    (1..=4).map(ItemId).collect()
}

#[test]
fn idle_stacking_increases_with_index() {
    let deck = CardDeck::new(four_cards());
    let layout = deck.layout();
    for pair in layout.windows(2) {
        assert!(pair[0].z_index < pair[1].z_index);
    }
    assert!(layout.iter().all(|t| t.opacity == 1.0));
}

#[test]
fn hover_click_close_scenario() {
    let mut deck = CardDeck::new(four_cards());

    let enter = deck.on_pointer_enter_deck();
    assert_eq!(enter.to, DeckState::Spread);
    let spread_layout = deck.layout();
    for (index, transform) in spread_layout.iter().enumerate() {
        let slot = spread_slot(index, 4);
        assert_eq!((transform.x, transform.y), (slot.x, slot.y));
        assert_eq!(transform.rotation_deg, slot.rotation_deg);
        assert_eq!(transform.z_index, SPREAD_Z_BASE + index as i32);
    }

    deck.on_item_click(ItemId(3)).unwrap();
    assert_eq!(deck.state(), DeckState::Expanded(ItemId(3)));
    let expanded = deck.transform_for(ItemId(3)).unwrap();
    assert_eq!(expanded.opacity, 1.0);
    assert_eq!((expanded.width, expanded.height), (EXPANDED_WIDTH, EXPANDED_HEIGHT));
    assert_eq!((expanded.x, expanded.y, expanded.rotation_deg), (0.0, 0.0, 0.0));
    for other in [1, 2, 4] {
        let transform = deck.transform_for(ItemId(other)).unwrap();
        assert_eq!(transform.opacity, DIMMED_OPACITY);
        let index = (other - 1) as usize;
        assert_eq!(transform.x, spread_layout[index].x);
        assert_eq!(transform.z_index, spread_layout[index].z_index);
    }

    deck.on_item_click(ItemId(3)).unwrap();
    assert_eq!(deck.state(), DeckState::Spread);
    assert_eq!(deck.layout(), spread_layout);
}

#[test]
fn double_click_from_idle_returns_to_idle() {
    let deck = replay(
        four_cards(),
        &[DeckEvent::ItemClick(ItemId(2)), DeckEvent::ItemClick(ItemId(2))],
    );
    assert_eq!(deck.state(), DeckState::Idle);
}

#[test]
fn outside_interaction_always_collapses() {
    let logs: Vec<Vec<DeckEvent>> = vec![
        vec![DeckEvent::ItemClick(ItemId(1))],
        vec![DeckEvent::PointerEnter, DeckEvent::ItemClick(ItemId(4))],
        vec![
            DeckEvent::PointerEnter,
            DeckEvent::ItemClick(ItemId(4)),
            DeckEvent::PointerLeave,
        ],
        vec![DeckEvent::PointerEnter],
    ];
    for mut log in logs {
        log.push(DeckEvent::GlobalPointerDown { inside: false });
        let deck = replay(four_cards(), &log);
        assert_eq!(deck.state(), DeckState::Idle, "log {:?}", log);
    }
}

#[test]
fn expanded_card_outranks_and_others_dim() {
    let events = [
        DeckEvent::PointerEnter,
        DeckEvent::ItemClick(ItemId(1)),
        DeckEvent::ItemClick(ItemId(2)),
    ];
    let deck = replay(four_cards(), &events);
    assert_eq!(deck.state(), DeckState::Expanded(ItemId(2)));
    let active = deck.transform_for(ItemId(2)).unwrap();
    for id in [1, 3, 4] {
        let other = deck.transform_for(ItemId(id)).unwrap();
        assert!(other.z_index < active.z_index);
        assert!(other.opacity < 1.0);
    }
}

#[test]
fn at_most_one_card_is_expanded_after_any_click_sequence() {
    let ids = four_cards();
    let mut seed = 0x2545_F491_u32;
    for _ in 0..64 {
        let mut deck = CardDeck::new(ids.clone());
        for _ in 0..24 {
            seed ^= seed << 13;
            seed ^= seed >> 17;
            seed ^= seed << 5;
            let event = match seed % 5 {
                0 => DeckEvent::PointerEnter,
                1 => DeckEvent::PointerLeave,
                2 => DeckEvent::GlobalPointerDown { inside: (seed & 8) == 0 },
                _ => DeckEvent::ItemClick(ItemId(1 + (seed >> 4) % 5)),
            };
            let _ = deck.apply(event);
            let expanded = ids.iter().filter(|id| deck.is_expanded(**id)).count();
            assert!(expanded <= 1);
        }
    }
}

#[test]
fn leaving_a_spread_deck_restacks_it() {
    let deck = replay(
        four_cards(),
        &[DeckEvent::PointerEnter, DeckEvent::PointerLeave],
    );
    assert_eq!(deck.state(), DeckState::Idle);
    assert!(!deck.pointer_inside());
    assert!(deck.shows_deck_base());
    assert_eq!(deck.layout(), CardDeck::new(four_cards()).layout());
}

#[test]
fn leave_while_expanded_then_close_goes_idle() {
    let deck = replay(
        four_cards(),
        &[
            DeckEvent::PointerEnter,
            DeckEvent::ItemClick(ItemId(1)),
            DeckEvent::PointerLeave,
            DeckEvent::ItemClick(ItemId(1)),
        ],
    );
    assert_eq!(deck.state(), DeckState::Idle);
}

#[test]
fn unknown_ids_in_a_log_are_skipped() {
    let deck = replay(
        four_cards(),
        &[DeckEvent::PointerEnter, DeckEvent::ItemClick(ItemId(42))],
    );
    assert_eq!(deck.state(), DeckState::Spread);
}
