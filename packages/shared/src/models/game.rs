use serde::{Deserialize, Serialize};

pub const GAME_KEY_PREFIX: &str = "game:";

pub const SEED_GAME_ID: &str = "game_1";
pub const SEED_GAME_CODE: &str = "AYA4G";
pub const SEED_HOST_USER_ID: &str = "user_1";
pub const SEED_MAX_PLAYERS: u32 = 15;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameStatus {
    Waiting,
    InProgress,
    Finished,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerRef {
    pub user_id: String,
}

impl PlayerRef {
    pub fn new(user_id: &str) -> Self {
        PlayerRef {
            user_id: user_id.to_string(),
        }
    }
}

/// A lobby-level game entry as the game service stores it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameRecord {
    pub game_id: String,
    pub game_code: String,
    pub host_user_id: String,
    pub game_status: GameStatus,
    pub max_players: u32,
    pub current_players: u32,
    pub players: Vec<PlayerRef>,
}

impl GameRecord {
    /// Opens a waiting game with the host as its only player.
    pub fn new(game_id: &str, game_code: &str, host_user_id: &str, max_players: u32) -> Self {
        GameRecord {
            game_id: game_id.to_string(),
            game_code: game_code.to_string(),
            host_user_id: host_user_id.to_string(),
            game_status: GameStatus::Waiting,
            max_players,
            current_players: 1,
            players: vec![PlayerRef::new(host_user_id)],
        }
    }

    pub fn storage_key(&self) -> String {
        format!("{}{}", GAME_KEY_PREFIX, self.game_id)
    }

    /// Player count matches the roster and fits within capacity.
    pub fn is_consistent(&self) -> bool {
        self.max_players > 0
            && self.current_players as usize == self.players.len()
            && self.current_players <= self.max_players
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    pub fn from_json(value: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(value)
    }
}

/// The development game written by the seeder.
pub fn seed_game() -> GameRecord {
    GameRecord::new(
        SEED_GAME_ID,
        SEED_GAME_CODE,
        SEED_HOST_USER_ID,
        SEED_MAX_PLAYERS,
    )
}
