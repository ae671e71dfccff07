use holdem_table::action::Action;
use holdem_table::config::TableConfig;
use holdem_table::shuffler::OrderedShuffler;
use holdem_table::table::{GameState, Table, TableError};

fn started_three() -> Table {
    let mut t = Table::with_shuffler(TableConfig::default(), OrderedShuffler);
    t.add_player("al-capone", "Al").unwrap();
    t.add_player("alice", "Alice").unwrap();
    t.add_player("bob", "Bob").unwrap();
    t.start().unwrap();
    t
}

fn act(t: &mut Table, action: &str, amount: u64) {
    t.perform_action(action, amount).unwrap_or_else(|e| panic!("{action} {amount}: {e}"));
}

fn cash(t: &Table) -> Vec<u64> {
    t.players().iter().map(|p| p.cash()).collect()
}

fn current_id(t: &Table) -> Option<&str> {
    t.current_player().map(|p| p.id())
}

/// Three raises in a row: 10, 20, 30.
fn raise_ladder(t: &mut Table) {
    act(t, "raise", 10);
    act(t, "raise", 20);
    act(t, "raise", 30);
}

/// The first two seats call up to 30 and the third checks on the flop.
fn call_to_consensus(t: &mut Table) {
    act(t, "call", 20);
    act(t, "call", 10);
    act(t, "check", 0);
}

#[test]
fn checks_move_the_turn_along() {
    let mut t = started_three();
    assert_eq!(current_id(&t), Some("al-capone"));
    act(&mut t, "check", 0);
    assert_eq!(current_id(&t), Some("alice"));
    act(&mut t, "check", 0);
    assert_eq!(current_id(&t), Some("bob"));
    let checked: Vec<bool> = t.players().iter().map(|p| p.is_checked()).collect();
    assert_eq!(checked, vec![true, true, false]);
}

#[test]
fn a_full_round_of_checks_deals_the_flop_and_resets_checks() {
    let mut t = started_three();
    for _ in 0..3 {
        act(&mut t, "check", 0);
    }
    assert_eq!(t.state(), GameState::Flop);
    assert_eq!(t.community_cards().len(), 3);
    assert!(t.round_is_complete());
    assert!(t.players().iter().all(|p| !p.is_checked()));
    assert_eq!(t.pot(), 0);
    assert_eq!(cash(&t), vec![100, 100, 100]);
}

#[test]
fn raise_must_beat_the_outstanding_bet() {
    let mut t = started_three();
    act(&mut t, "raise", 50);
    let err = t.perform_action("raise", 40).unwrap_err();
    assert!(matches!(err, TableError::IllegalAmount(_)));
    assert_eq!(current_id(&t), Some("alice"));
}

#[test]
fn raises_climb_and_are_recorded() {
    let mut t = started_three();
    act(&mut t, "raise", 40);
    assert_eq!(t.bets().values().max(), Some(&40));
    act(&mut t, "raise", 60);
    assert_eq!(t.bets().values().max(), Some(&60));
    assert_eq!(t.pot(), 100);
}

#[test]
fn raise_takes_cash_from_the_raiser() {
    let mut t = started_three();
    act(&mut t, "raise", 50);
    assert_eq!(t.players()[0].cash(), 50);
    assert_eq!(t.players()[0].bet(), 50);
    assert!(t.players()[0].has_raised());
}

#[test]
fn raise_above_own_cash_is_rejected() {
    let mut t = started_three();
    let err = t.perform_action("raise", 101).unwrap_err();
    assert!(matches!(err, TableError::IllegalAmount(_)));
    assert_eq!(cash(&t), vec![100, 100, 100]);
}

#[test]
fn raise_above_another_players_cash_is_rejected() {
    let mut t = started_three();
    act(&mut t, "raise", 50);
    let err = t.perform_action("raise", 90).unwrap_err();
    assert_eq!(
        err,
        TableError::IllegalAmount(
            "raise of 90 is more than al-capone's remaining cash of 50".into()
        )
    );
}

#[test]
fn call_needs_an_earlier_raise() {
    let mut t = started_three();
    act(&mut t, "check", 0);
    act(&mut t, "check", 0);
    let err = t.perform_action("call", 20).unwrap_err();
    assert_eq!(
        err,
        TableError::IllegalAction("cannot call, none of the previous players raised".into())
    );
}

#[test]
fn call_needs_a_raise_on_every_street() {
    let mut t = started_three();
    for street in [GameState::Flop, GameState::Turn, GameState::River] {
        for _ in 0..3 {
            act(&mut t, "check", 0);
        }
        assert_eq!(t.state(), street);
        let seat = t.current_seat();
        let err = t.perform_action("call", 0).unwrap_err();
        assert!(matches!(err, TableError::IllegalAction(_)), "{}: {err}", street.label());
        assert_eq!(t.current_seat(), seat);
        assert_eq!(t.pot(), 0);
    }
}

#[test]
fn call_matches_the_highest_bet() {
    let mut t = started_three();
    act(&mut t, "raise", 10);
    act(&mut t, "raise", 20);
    act(&mut t, "call", 20);
    assert_eq!(cash(&t), vec![90, 80, 80]);
    assert_eq!(t.pot(), 50);
    assert_eq!(t.state(), GameState::PreFlop);
}

#[test]
fn calls_cover_every_later_raise() {
    let mut t = started_three();
    raise_ladder(&mut t);
    assert_eq!(current_id(&t), Some("al-capone"));
    call_to_consensus(&mut t);
    assert_eq!(cash(&t), vec![70, 70, 70]);
    assert_eq!(t.pot(), 90);
    assert_eq!(t.state(), GameState::Flop);
    assert_eq!(current_id(&t), Some("al-capone"));
}

#[test]
fn check_is_refused_while_a_bet_is_outstanding() {
    let mut t = started_three();
    raise_ladder(&mut t);
    act(&mut t, "call", 20);
    act(&mut t, "raise", 20);
    let err = t.perform_action("check", 0).unwrap_err();
    assert_eq!(
        err,
        TableError::IllegalAction("cannot check, outstanding bet amount of 10".into())
    );
    assert_eq!(current_id(&t), Some("bob"));
}

#[test]
fn turn_skips_folded_players() {
    let mut t = started_three();
    raise_ladder(&mut t);
    call_to_consensus(&mut t);

    act(&mut t, "fold", 0);
    act(&mut t, "raise", 20);
    act(&mut t, "call", 0);

    assert_eq!(cash(&t), vec![70, 50, 50]);
    let active: Vec<bool> = t.players().iter().map(|p| p.is_active()).collect();
    assert_eq!(active, vec![false, true, true]);
    assert_ne!(current_id(&t), Some("al-capone"));
    assert!(t.current_player().is_some_and(|p| p.is_active()));
}

#[test]
fn unknown_and_blank_actions_are_illegal() {
    let mut t = started_three();
    for name in ["undefined", "", "   "] {
        let err = t.perform_action(name, 0).unwrap_err();
        assert!(matches!(err, TableError::IllegalAction(_)), "{name:?}");
    }
    assert_eq!(current_id(&t), Some("al-capone"));
}

#[test]
fn typed_actions_match_named_ones() {
    let mut t = started_three();
    t.apply(Action::Raise(15)).unwrap();
    t.apply(Action::Call).unwrap();
    t.apply(Action::Call).unwrap();
    assert_eq!(t.pot(), 45);
    assert_eq!(t.state(), GameState::Flop);

    t.apply(Action::Fold).unwrap();
    assert_eq!(t.state(), GameState::Turn);
    assert_eq!(t.community_cards().len(), 4);
}

#[test]
fn a_fold_before_matching_keeps_the_round_open() {
    let mut t = started_three();
    act(&mut t, "raise", 15);
    act(&mut t, "call", 0);
    act(&mut t, "fold", 0);
    // the folded seat still counts with its zero bet
    assert_eq!(t.state(), GameState::PreFlop);
    assert!(!t.round_is_complete());
    assert_eq!(current_id(&t), Some("al-capone"));
}

#[test]
fn call_beyond_cash_is_rejected() {
    let mut t = Table::with_shuffler(TableConfig::default(), OrderedShuffler);
    t.add_player("a", "A").unwrap();
    t.add_player("b", "B").unwrap();
    t.start().unwrap();
    act(&mut t, "raise", 40);
    act(&mut t, "raise", 50);
    // a raise replaces the recorded bet, so a's debt outgrows its cash
    act(&mut t, "raise", 20);
    act(&mut t, "raise", 30);
    assert_eq!(cash(&t), vec![40, 20]);
    assert_eq!(t.call_amount(), 60);

    let err = t.perform_action("call", 0).unwrap_err();
    assert!(matches!(err, TableError::IllegalAmount(_)), "{err}");
    assert_eq!(t.pot(), 140);
}
