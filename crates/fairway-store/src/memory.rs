use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::{RwLock, broadcast};

use fairway_core::course::Course;
use fairway_core::match_play::Match;
use fairway_core::player::Player;
use fairway_core::scorecard::{Scorecard, TeamScorecard};

use crate::error::{StoreError, decode, encode};
use crate::repository::{
    CourseRepository, MatchRepository, PlayerRepository, ScorecardChange, ScorecardRepository,
};

/// Default broadcast channel capacity for change fan-out.
const DEFAULT_BROADCAST_CAPACITY: usize = 256;

/// Encoded documents of one kind, keyed by id.
struct Collection {
    kind: &'static str,
    docs: HashMap<String, Vec<u8>>,
}

impl Collection {
    fn named(kind: &'static str) -> Self {
        Self {
            kind,
            docs: HashMap::new(),
        }
    }

    fn get<T: serde::de::DeserializeOwned>(&self, id: &str) -> Result<T, StoreError> {
        let bytes = self.docs.get(id).ok_or_else(|| StoreError::NotFound {
            kind: self.kind,
            id: id.to_string(),
        })?;
        decode(bytes)
    }

    fn put<T: serde::Serialize>(&mut self, id: String, doc: &T) -> Result<(), StoreError> {
        let bytes = encode(doc)?;
        self.docs.insert(id, bytes);
        Ok(())
    }

    fn all<T: serde::de::DeserializeOwned>(&self) -> Result<Vec<T>, StoreError> {
        self.docs.values().map(|bytes| decode(bytes)).collect()
    }
}

struct Documents {
    players: Collection,
    matches: Collection,
    scorecards: Collection,
    team_scorecards: Collection,
    courses: Collection,
}

impl Default for Documents {
    fn default() -> Self {
        Self {
            players: Collection::named("player"),
            matches: Collection::named("match"),
            scorecards: Collection::named("scorecard"),
            team_scorecards: Collection::named("team scorecard"),
            courses: Collection::named("course"),
        }
    }
}

/// In-memory document store with broadcast change notifications.
///
/// Cloning is cheap and every clone shares the same documents and channels.
#[derive(Clone)]
pub struct InMemoryStore {
    docs: Arc<RwLock<Documents>>,
    match_tx: broadcast::Sender<Match>,
    scorecard_tx: broadcast::Sender<ScorecardChange>,
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_BROADCAST_CAPACITY)
    }

    /// Create a store whose subscribers may fall this many changes behind
    /// before they start missing updates.
    pub fn with_capacity(broadcast_capacity: usize) -> Self {
        let (match_tx, _) = broadcast::channel(broadcast_capacity);
        let (scorecard_tx, _) = broadcast::channel(broadcast_capacity);
        Self {
            docs: Arc::new(RwLock::new(Documents::default())),
            match_tx,
            scorecard_tx,
        }
    }
}

fn assign_id(id: &mut String) {
    if id.is_empty() {
        *id = uuid::Uuid::new_v4().to_string();
    }
}

impl PlayerRepository for InMemoryStore {
    async fn get_player(&self, id: &str) -> Result<Player, StoreError> {
        self.docs.read().await.players.get(id)
    }

    async fn list_players(&self) -> Result<Vec<Player>, StoreError> {
        let mut players: Vec<Player> = self.docs.read().await.players.all()?;
        players.sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.id.cmp(&b.id)));
        Ok(players)
    }

    async fn upsert_player(&self, mut player: Player) -> Result<Player, StoreError> {
        assign_id(&mut player.id);
        self.docs
            .write()
            .await
            .players
            .put(player.id.clone(), &player)?;
        tracing::debug!(player_id = %player.id, "Stored player");
        Ok(player)
    }
}

impl MatchRepository for InMemoryStore {
    async fn get_match(&self, id: &str) -> Result<Match, StoreError> {
        self.docs.read().await.matches.get(id)
    }

    async fn upsert_match(&self, mut m: Match) -> Result<Match, StoreError> {
        assign_id(&mut m.id);
        self.docs.write().await.matches.put(m.id.clone(), &m)?;
        tracing::debug!(match_id = %m.id, status = ?m.status, "Stored match");
        // No subscribers is not an error
        let _ = self.match_tx.send(m.clone());
        Ok(m)
    }

    fn subscribe_matches(&self) -> broadcast::Receiver<Match> {
        self.match_tx.subscribe()
    }
}

impl ScorecardRepository for InMemoryStore {
    async fn get_scorecard(&self, player_id: &str) -> Result<Scorecard, StoreError> {
        self.docs.read().await.scorecards.get(player_id)
    }

    async fn upsert_scorecard(&self, card: Scorecard) -> Result<(), StoreError> {
        self.docs
            .write()
            .await
            .scorecards
            .put(card.player_id.clone(), &card)?;
        tracing::debug!(player_id = %card.player_id, status = ?card.status, "Stored scorecard");
        let _ = self.scorecard_tx.send(ScorecardChange::Individual { card });
        Ok(())
    }

    async fn get_team_scorecard(&self, team_id: &str) -> Result<TeamScorecard, StoreError> {
        self.docs.read().await.team_scorecards.get(team_id)
    }

    async fn upsert_team_scorecard(&self, card: TeamScorecard) -> Result<(), StoreError> {
        self.docs
            .write()
            .await
            .team_scorecards
            .put(card.team_id.clone(), &card)?;
        tracing::debug!(team_id = %card.team_id, format = %card.format, "Stored team scorecard");
        let _ = self.scorecard_tx.send(ScorecardChange::Team { card });
        Ok(())
    }

    fn subscribe_scorecards(&self) -> broadcast::Receiver<ScorecardChange> {
        self.scorecard_tx.subscribe()
    }
}

impl CourseRepository for InMemoryStore {
    async fn get_course(&self, name: &str) -> Result<Course, StoreError> {
        self.docs.read().await.courses.get(name)
    }

    async fn upsert_course(&self, course: Course) -> Result<(), StoreError> {
        self.docs
            .write()
            .await
            .courses
            .put(course.name.clone(), &course)
    }
}
