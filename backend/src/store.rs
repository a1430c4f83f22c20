use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};

use serde::Serialize;
use thiserror::Error;
use tracing::{debug, info};

use shared::{
    voter_id_matches, Candidate, CandidateRoster, CastError, ElectionData, Voter, VoterRoll,
};

use crate::seed;

pub const VOTERS_FILE: &str = "voters.json";
pub const CANDIDATES_FILE: &str = "candidates.json";

#[derive(Debug, Error)]
pub enum DataFileError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// Storage-level failures. Display strings are the messages the service
/// returns under its "Server error: " prefix.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Unable to read voter database")]
    ReadVoters(#[source] DataFileError),
    #[error("Unable to read candidates database")]
    ReadCandidates(#[source] DataFileError),
    #[error("Unable to read database")]
    Read(#[source] DataFileError),
    #[error("Unable to save vote")]
    Persist(#[source] DataFileError),
    #[error("Store lock poisoned")]
    LockPoisoned,
}

/// Why a cast failed: rejected by a precondition, or the store itself broke.
#[derive(Debug, Error)]
pub enum CastVoteError {
    #[error(transparent)]
    Rejected(#[from] CastError),
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Contract shared by both storage backends. Handlers depend only on this
/// trait; one explicitly constructed instance per process lives in managed
/// state.
pub trait ElectionStore: Send + Sync {
    fn list_voters(&self) -> Result<Vec<Voter>, StoreError>;

    fn list_candidates(&self) -> Result<Vec<Candidate>, StoreError>;

    /// Case-insensitive lookup; surrounding whitespace in the input is
    /// ignored.
    fn find_voter(&self, voter_id: &str) -> Result<Option<Voter>, StoreError>;

    fn find_candidate(&self, id: u32) -> Result<Option<Candidate>, StoreError>;

    /// Runs the whole check-then-mutate sequence as one critical section and
    /// returns the chosen candidate's display name. Two concurrent casts for
    /// the same voter serialize here, so at most one can pass the has-voted
    /// check.
    fn cast_vote(&self, voter_id: &str, candidate_id: u32) -> Result<String, CastVoteError>;
}

/// In-process store. State lives for the lifetime of the process and resets
/// on restart.
pub struct MemoryStore {
    data: Mutex<ElectionData>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::with_data(seed::election_data())
    }

    pub fn with_data(data: ElectionData) -> Self {
        Self {
            data: Mutex::new(data),
        }
    }

    fn guard(&self) -> Result<MutexGuard<'_, ElectionData>, StoreError> {
        self.data.lock().map_err(|_| StoreError::LockPoisoned)
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ElectionStore for MemoryStore {
    fn list_voters(&self) -> Result<Vec<Voter>, StoreError> {
        Ok(self.guard()?.voters.clone())
    }

    fn list_candidates(&self) -> Result<Vec<Candidate>, StoreError> {
        Ok(self.guard()?.candidates.clone())
    }

    fn find_voter(&self, voter_id: &str) -> Result<Option<Voter>, StoreError> {
        Ok(self.guard()?.find_voter(voter_id).cloned())
    }

    fn find_candidate(&self, id: u32) -> Result<Option<Candidate>, StoreError> {
        Ok(self.guard()?.find_candidate(id).cloned())
    }

    fn cast_vote(&self, voter_id: &str, candidate_id: u32) -> Result<String, CastVoteError> {
        let mut data = self.guard()?;
        let name = data.cast_vote(voter_id, candidate_id)?;
        debug!(candidate = %name, "vote applied in memory");
        Ok(name)
    }
}

/// Flat-file store: state lives in two JSON documents that are re-read on
/// every access and rewritten in full on every mutation, so it survives a
/// restart.
pub struct FileStore {
    voters_path: PathBuf,
    candidates_path: PathBuf,
    /// Serializes the read-check-write cycle across requests.
    write_lock: Mutex<()>,
}

impl FileStore {
    /// Opens the store rooted at `data_dir`, seeding any missing data file
    /// from the built-in seed.
    pub fn open(data_dir: impl AsRef<Path>) -> Result<Self, StoreError> {
        let data_dir = data_dir.as_ref();
        let store = Self {
            voters_path: data_dir.join(VOTERS_FILE),
            candidates_path: data_dir.join(CANDIDATES_FILE),
            write_lock: Mutex::new(()),
        };
        if !store.voters_path.exists() || !store.candidates_path.exists() {
            fs::create_dir_all(data_dir).map_err(|e| StoreError::Persist(e.into()))?;
            let seeded = seed::election_data();
            if !store.voters_path.exists() {
                info!(path = %store.voters_path.display(), "seeding voters file");
                write_atomic(
                    &store.voters_path,
                    &VoterRoll {
                        voters: seeded.voters,
                    },
                )
                .map_err(StoreError::Persist)?;
            }
            if !store.candidates_path.exists() {
                info!(path = %store.candidates_path.display(), "seeding candidates file");
                write_atomic(
                    &store.candidates_path,
                    &CandidateRoster {
                        candidates: seeded.candidates,
                    },
                )
                .map_err(StoreError::Persist)?;
            }
        }
        Ok(store)
    }

    fn load_voters(&self) -> Result<Vec<Voter>, DataFileError> {
        let raw = fs::read_to_string(&self.voters_path)?;
        Ok(serde_json::from_str::<VoterRoll>(&raw)?.voters)
    }

    fn load_candidates(&self) -> Result<Vec<Candidate>, DataFileError> {
        let raw = fs::read_to_string(&self.candidates_path)?;
        Ok(serde_json::from_str::<CandidateRoster>(&raw)?.candidates)
    }

    fn load(&self) -> Result<ElectionData, DataFileError> {
        Ok(ElectionData::new(self.load_voters()?, self.load_candidates()?))
    }

    /// Publishes both collections as one unit of work: both documents are
    /// fully written to temp files before either is renamed into place, so a
    /// failed write publishes neither. A crash between the two renames can
    /// still leave the pair inconsistent; there is no fsync guarantee beyond
    /// the rename itself.
    fn persist(&self, data: &ElectionData) -> Result<(), DataFileError> {
        let voters_tmp = stage(
            &self.voters_path,
            &VoterRoll {
                voters: data.voters.clone(),
            },
        )?;
        let candidates_tmp = stage(
            &self.candidates_path,
            &CandidateRoster {
                candidates: data.candidates.clone(),
            },
        )?;
        fs::rename(voters_tmp, &self.voters_path)?;
        fs::rename(candidates_tmp, &self.candidates_path)?;
        Ok(())
    }
}

/// Writes the serialized value next to `path` without renaming it into
/// place; returns the temp path.
fn stage<T: Serialize>(path: &Path, value: &T) -> Result<PathBuf, DataFileError> {
    let mut tmp = path.as_os_str().to_owned();
    tmp.push(".tmp");
    let tmp = PathBuf::from(tmp);
    fs::write(&tmp, serde_json::to_vec_pretty(value)?)?;
    Ok(tmp)
}

fn write_atomic<T: Serialize>(path: &Path, value: &T) -> Result<(), DataFileError> {
    let tmp = stage(path, value)?;
    fs::rename(tmp, path)?;
    Ok(())
}

impl ElectionStore for FileStore {
    fn list_voters(&self) -> Result<Vec<Voter>, StoreError> {
        self.load_voters().map_err(StoreError::ReadVoters)
    }

    fn list_candidates(&self) -> Result<Vec<Candidate>, StoreError> {
        self.load_candidates().map_err(StoreError::ReadCandidates)
    }

    fn find_voter(&self, voter_id: &str) -> Result<Option<Voter>, StoreError> {
        Ok(self
            .load_voters()
            .map_err(StoreError::ReadVoters)?
            .into_iter()
            .find(|v| voter_id_matches(&v.voter_id, voter_id)))
    }

    fn find_candidate(&self, id: u32) -> Result<Option<Candidate>, StoreError> {
        Ok(self
            .load_candidates()
            .map_err(StoreError::ReadCandidates)?
            .into_iter()
            .find(|c| c.id == id))
    }

    fn cast_vote(&self, voter_id: &str, candidate_id: u32) -> Result<String, CastVoteError> {
        let _guard = self
            .write_lock
            .lock()
            .map_err(|_| StoreError::LockPoisoned)?;
        let mut data = self.load().map_err(StoreError::Read)?;
        let name = data.cast_vote(voter_id, candidate_id)?;
        self.persist(&data).map_err(StoreError::Persist)?;
        debug!(candidate = %name, "vote persisted to disk");
        Ok(name)
    }
}
