use holdem_table::cards::parse_cards;
use holdem_table::config::TableConfig;
use holdem_table::shuffler::{OrderedShuffler, SeededShuffler};
use holdem_table::table::{GameState, HistoryVerb, Table, TableError};

fn started(ids: &[&str]) -> Table {
    let mut t = Table::with_shuffler(TableConfig::default(), OrderedShuffler);
    for id in ids {
        t.add_player(*id, id.to_uppercase()).unwrap();
    }
    t.start().unwrap();
    t
}

fn check_round(t: &mut Table) {
    let state = t.state();
    for _ in 0..t.players().len() {
        assert_eq!(t.state(), state, "round closed early");
        t.perform_action("check", 0).unwrap();
    }
}

#[test]
fn check_down_reaches_the_end_with_a_full_board() {
    let mut t = started(&["p1", "p2", "p3"]);
    check_round(&mut t);
    assert_eq!(t.state(), GameState::Flop);
    assert_eq!(t.community_cards(), parse_cards("8c 9c Tc").unwrap());
    check_round(&mut t);
    assert_eq!(t.state(), GameState::Turn);
    assert_eq!(t.community_cards().len(), 4);
    check_round(&mut t);
    assert_eq!(t.state(), GameState::River);
    check_round(&mut t);

    assert_eq!(t.state(), GameState::Ended);
    assert_eq!(t.community_cards(), parse_cards("8c 9c Tc Jc Qc").unwrap());
    assert!(t.round_is_complete());
    assert_eq!(t.winner().map(|p| p.id()), Some("p1"));
    assert_eq!(t.winner_hand(), parse_cards("2c 3c").unwrap());
    assert_eq!(t.pot(), 0);
}

#[test]
fn pot_goes_to_the_winner_at_the_end() {
    let mut t = started(&["p1", "p2"]);
    t.perform_action("raise", 30).unwrap();
    t.perform_action("call", 0).unwrap();
    assert_eq!(t.state(), GameState::Flop);
    for _ in 0..3 {
        check_round(&mut t);
    }
    assert_eq!(t.state(), GameState::Ended);
    let winner = t.winner().expect("a winner once the river closes");
    assert_eq!(winner.cash(), 130);
    assert_eq!(t.pot(), 0);
    let total: u64 = t.players().iter().map(|p| p.cash()).sum();
    assert_eq!(total, 200);
    assert_eq!(t.history_recent(1)[0].verb, HistoryVerb::Win);
}

/// Flop reached with everyone at 70 and the third seat already checked.
fn three_on_the_turn() -> Table {
    let mut t = started(&["al-capone", "alice", "bob"]);
    for (action, amount) in [
        ("raise", 10),
        ("raise", 20),
        ("raise", 30),
        ("call", 20),
        ("call", 10),
        ("check", 0),
        ("check", 0),
        ("check", 0),
        ("check", 0),
    ] {
        t.perform_action(action, amount).unwrap();
    }
    assert_eq!(t.state(), GameState::Turn);
    t
}

#[test]
fn turn_moves_to_river() {
    let mut t = three_on_the_turn();
    for _ in 0..3 {
        t.perform_action("check", 0).unwrap();
    }
    assert_eq!(t.state(), GameState::River);
    assert_eq!(t.community_cards().len(), 5);
}

#[test]
fn river_moves_to_ended_and_closes_the_table() {
    let mut t = three_on_the_turn();
    for _ in 0..3 {
        t.perform_action("check", 0).unwrap();
    }
    t.perform_action("check", 0).unwrap();
    t.perform_action("check", 0).unwrap();
    assert_eq!(t.state(), GameState::Ended);
    assert_eq!(t.winner().map(|p| p.id()), Some("bob"));
    assert_eq!(t.winner().map(|p| p.cash()), Some(70 + 90));

    let err = t.perform_action("check", 0).unwrap_err();
    assert!(matches!(err, TableError::IllegalAction(_)));
}

#[test]
fn last_player_standing_takes_the_pot_unseen() {
    let mut t = started(&["al-capone", "alice", "bob"]);
    t.perform_action("raise", 10).unwrap();
    t.perform_action("fold", 0).unwrap();
    let active: Vec<bool> = t.players().iter().map(|p| p.is_active()).collect();
    assert_eq!(active, vec![true, false, true]);
    t.perform_action("fold", 0).unwrap();

    assert_eq!(t.state(), GameState::Ended);
    assert_eq!(t.winner().map(|p| p.id()), Some("al-capone"));
    assert_eq!(t.winner().map(|p| p.cash()), Some(100));
    assert_eq!(t.pot(), 0);
    assert!(t.player_cards("al-capone").is_empty());
    assert!(t.winner_hand().is_empty());
    assert!(t.community_cards().is_empty());
}

#[test]
fn fold_out_without_bets_completes_the_round() {
    let mut t = started(&["al-capone", "alice", "bob"]);
    t.perform_action("fold", 0).unwrap();
    t.perform_action("fold", 0).unwrap();
    assert_eq!(t.state(), GameState::Ended);
    assert_eq!(t.winner().map(|p| p.id()), Some("bob"));
    let remaining = t.players().iter().find(|p| p.is_active()).map(|p| p.hand().to_vec());
    assert_eq!(Some(t.winner_hand().to_vec()), remaining);
    assert_eq!(t.pot(), 0);
    assert!(t.round_is_complete());
}

#[test]
fn seeded_hands_replay_exactly() {
    let deal = |seed: u64| {
        let mut t = Table::with_shuffler(TableConfig::default(), SeededShuffler::new(seed));
        t.add_player("a", "A").unwrap();
        t.add_player("b", "B").unwrap();
        t.start().unwrap();
        while t.state().in_hand() {
            t.perform_action("check", 0).unwrap();
        }
        (t.player_cards("a").to_vec(), t.community_cards().to_vec(), t.winner_seat())
    };
    assert_eq!(deal(99), deal(99));
    assert_ne!(deal(1).1, deal(2).1);
}
