//! Id and color generation for new entities.

use rand::Rng;

/// Alphabet for generated game ids.
const ALPHA_NUM: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Length of generated game ids.
const GAME_ID_LEN: usize = 10;

/// Supplies opaque ids for new games and display colors for new players.
///
/// The reducer never touches a random number generator; this seam resolves
/// nondeterminism at the store boundary and lets tests pin the output.
pub trait IdSource {
    /// Returns a fresh opaque game id.
    fn next_game_id(&mut self) -> String;

    /// Returns a display color for a new player, as `#rrggbb`.
    fn next_player_color(&mut self) -> String;
}

/// Production id source backed by the thread-local RNG.
///
/// Ids are 10 characters from a 62-symbol alphabet; collisions are
/// negligible for any realistic game count.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomIdSource;

impl RandomIdSource {
    /// Creates a new random id source.
    pub fn new() -> Self {
        Self
    }
}

impl IdSource for RandomIdSource {
    fn next_game_id(&mut self) -> String {
        let mut rng = rand::thread_rng();
        (0..GAME_ID_LEN)
            .map(|_| ALPHA_NUM[rng.gen_range(0..ALPHA_NUM.len())] as char)
            .collect()
    }

    fn next_player_color(&mut self) -> String {
        format!("#{:06x}", rand::thread_rng().gen_range(0..0x100_0000u32))
    }
}

/// Deterministic id source for tests: `game-1`, `game-2`, … with a fixed
/// player color.
#[derive(Debug, Clone, Default)]
pub struct SequentialIdSource {
    next: u32,
}

impl SequentialIdSource {
    /// Creates a source starting at `game-1`.
    pub fn new() -> Self {
        Self::default()
    }
}

impl IdSource for SequentialIdSource {
    fn next_game_id(&mut self) -> String {
        self.next += 1;
        format!("game-{}", self.next)
    }

    fn next_player_color(&mut self) -> String {
        "#808080".to_string()
    }
}
