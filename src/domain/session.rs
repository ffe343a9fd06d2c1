use crate::domain::card::CardAsset;
use crate::domain::game::Game;
use crate::domain::stats::PlayerStats;
use crate::domain::tag::PlayerTag;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Where one user is in the lookup conversation. Data accumulated so far
/// lives in the state itself, so states that should not carry stats cannot.
#[derive(Debug, Default, Clone, PartialEq)]
pub enum SessionState {
    #[default]
    Idle,
    AwaitingGame,
    AwaitingTag {
        game: Game,
    },
    AwaitingDescription {
        game: Game,
        tag: PlayerTag,
        stats: PlayerStats,
        asset: Option<CardAsset>,
    },
}

#[derive(Debug, Default)]
pub struct Session {
    pub state: SessionState,
}

impl Session {
    pub fn reset(&mut self) {
        self.state = SessionState::Idle;
    }

    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.state == SessionState::Idle
    }
}

type Inner = HashMap<u64, Arc<Mutex<Session>>>;

/// All live sessions, one per user. Each entry carries its own lock so two
/// updates from the same user run one at a time while different users never
/// wait on each other.
#[derive(Default, Clone)]
pub struct SessionStore {
    inner: Arc<Mutex<Inner>>,
}

impl SessionStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn entry(&self, user_id: u64) -> Arc<Mutex<Session>> {
        let mut lock = self.inner.lock().await;

        Arc::clone(lock.entry(user_id).or_default())
    }
}
