//! Tests for the session store: snapshots, observers, and rehydration.

use std::sync::{Arc, Mutex};

use tumblin_core::{Dice, SessionState, Zone, player_score};
use tumblin_dice::{
    MemoryBackend, RandomIdSource, SESSION_KEY, SequentialIdSource, SessionBackend, SessionStore,
    StoreObserver,
};

fn open_memory_store(backend: &MemoryBackend) -> SessionStore {
    SessionStore::open(
        Box::new(backend.clone()),
        Box::new(SequentialIdSource::new()),
    )
}

#[test]
fn test_store_starts_empty_without_a_payload() {
    let store = open_memory_store(&MemoryBackend::new());
    assert_eq!(*store.snapshot(), SessionState::default());
}

#[test]
fn test_store_starts_empty_on_a_corrupt_payload() {
    let backend = MemoryBackend::with_entry(SESSION_KEY, "definitely not json");
    let store = open_memory_store(&backend);
    assert_eq!(*store.snapshot(), SessionState::default());
}

#[test]
fn test_every_mutation_persists_the_snapshot() {
    let backend = MemoryBackend::new();
    let mut store = open_memory_store(&backend);

    store.add_game();

    let payload = backend
        .read(SESSION_KEY)
        .expect("backend readable")
        .expect("payload written");
    assert!(payload.contains("game-1"));
    assert!(payload.contains("Game 1"));
}

#[test]
fn test_session_round_trips_across_reopen() {
    let backend = MemoryBackend::new();

    let mut store = open_memory_store(&backend);
    store.add_game();
    store.select_game("game-1".into());
    store.add_player(Some("Alice".into()));
    store.add_player(None);
    store.add_round();
    store.select_player(0);
    store.set_zone_result(Zone::X2, vec![Dice::Five, Dice::Six]);
    let before = store.snapshot();
    drop(store);

    let reopened = open_memory_store(&backend);
    let after = reopened.snapshot();
    assert_eq!(*after, *before);
    // Selection survives the restart, down to the focused player.
    let player_focus = after
        .selected
        .as_ref()
        .and_then(|selection| selection.player())
        .expect("player focus rehydrated");
    assert_eq!(player_focus.player_index, 0);
}

#[test]
fn test_old_snapshots_are_unaffected_by_later_mutations() {
    let mut store = open_memory_store(&MemoryBackend::new());
    store.add_game();

    let old = store.snapshot();
    store.add_game();

    assert_eq!(old.games.len(), 1);
    assert_eq!(store.snapshot().games.len(), 2);
}

struct CountingObserver {
    seen: Arc<Mutex<Vec<usize>>>,
}

impl StoreObserver for CountingObserver {
    fn state_changed(&self, state: &Arc<SessionState>) {
        self.seen
            .lock()
            .expect("observer mutex healthy")
            .push(state.games.len());
    }
}

#[test]
fn test_observers_see_each_new_snapshot() {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let mut store = open_memory_store(&MemoryBackend::new());
    store.subscribe(Box::new(CountingObserver {
        seen: Arc::clone(&seen),
    }));

    store.add_game();
    store.add_game();

    assert_eq!(*seen.lock().expect("observer mutex healthy"), vec![1, 2]);
}

#[test]
fn test_random_ids_are_unique_and_well_formed() {
    let mut store = SessionStore::open(
        Box::new(MemoryBackend::new()),
        Box::new(RandomIdSource::new()),
    );
    store.add_game();
    store.add_game();

    let snapshot = store.snapshot();
    let first = &snapshot.games[0].id;
    let second = &snapshot.games[1].id;
    assert_ne!(first, second);
    assert_eq!(first.len(), 10);
    assert!(first.bytes().all(|b| b.is_ascii_alphanumeric()));
}

#[test]
fn test_full_scoring_flow_through_the_store() {
    let mut store = open_memory_store(&MemoryBackend::new());
    store.add_game();
    store.select_game("game-1".into());
    store.add_player(Some("Alice".into()));
    store.add_player(Some("Bob".into()));
    store.add_round();
    store.select_player(0);
    store.set_zone_result(Zone::Malus, vec![Dice::Three, Dice::Four]);
    store.set_zone_result(Zone::X2, vec![Dice::Five, Dice::Six]);

    let snapshot = store.snapshot();
    let game = snapshot.selected_game().expect("game selected");
    assert_eq!(player_score(game, 0, None), Ok(15));
    assert_eq!(player_score(game, 1, None), Ok(0));
}

#[test]
fn test_stale_commands_leave_the_store_unchanged() {
    let mut store = open_memory_store(&MemoryBackend::new());
    store.add_game();

    // Nothing selected: these are stale and dropped.
    store.rename_game("Ignored".into());
    store.add_player(Some("Ghost".into()));
    store.add_round();

    let snapshot = store.snapshot();
    assert_eq!(snapshot.games[0].name, "Game 1");
    assert!(snapshot.games[0].players.is_empty());
    assert!(snapshot.games[0].rounds.is_empty());
}
