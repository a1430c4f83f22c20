use serde::{Serialize, Deserialize};
use thiserror::Error;

use crate::models::{Candidate, CandidateStanding, Voter, VoteShare};
use crate::validation::voter_id_matches;

/// Rejections from the vote-casting state machine, in precondition order.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CastError {
    #[error("Invalid Voter ID")]
    VoterNotFound,
    #[error("You have already voted. Each voter can only vote once.")]
    AlreadyVoted,
    #[error("Invalid Candidate ID")]
    CandidateNotFound,
}

/// The full mutable state of one election: the voter roll and the candidate
/// roster. Both collections are fixed at load time; the only mutations are
/// the two applied together by [`cast_vote`](ElectionData::cast_vote).
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ElectionData {
    pub voters: Vec<Voter>,
    pub candidates: Vec<Candidate>,
}

impl ElectionData {
    pub fn new(voters: Vec<Voter>, candidates: Vec<Candidate>) -> Self {
        Self { voters, candidates }
    }

    pub fn find_voter(&self, voter_id: &str) -> Option<&Voter> {
        self.voters
            .iter()
            .find(|v| voter_id_matches(&v.voter_id, voter_id))
    }

    pub fn find_candidate(&self, id: u32) -> Option<&Candidate> {
        self.candidates.iter().find(|c| c.id == id)
    }

    /// Number of voters who have cast a vote. Always equals the sum of all
    /// candidates' counters.
    pub fn votes_cast(&self) -> u64 {
        self.voters.iter().filter(|v| v.has_voted).count() as u64
    }

    // Storage-level mutation primitives. Marking an already-marked voter is
    // harmless; callers prevent double increments via the has_voted check.
    fn mark_voted(&mut self, voter_idx: usize) {
        self.voters[voter_idx].has_voted = true;
    }

    fn increment_votes(&mut self, candidate_idx: usize) {
        self.candidates[candidate_idx].votes += 1;
    }

    /// The vote-casting state machine. Preconditions are checked in order
    /// and short-circuit; both mutations are applied only after every check
    /// has passed, so no partial vote is ever observable. Returns the chosen
    /// candidate's display name.
    ///
    /// Callers running on a multi-threaded host must hold whatever lock
    /// guards this data across the whole call; the check and the mutations
    /// form one critical section per voter.
    pub fn cast_vote(&mut self, voter_id: &str, candidate_id: u32) -> Result<String, CastError> {
        let voter_idx = self
            .voters
            .iter()
            .position(|v| voter_id_matches(&v.voter_id, voter_id))
            .ok_or(CastError::VoterNotFound)?;

        if self.voters[voter_idx].has_voted {
            return Err(CastError::AlreadyVoted);
        }

        let candidate_idx = self
            .candidates
            .iter()
            .position(|c| c.id == candidate_id)
            .ok_or(CastError::CandidateNotFound)?;

        self.mark_voted(voter_idx);
        self.increment_votes(candidate_idx);
        Ok(self.candidates[candidate_idx].name.clone())
    }
}

/// Snapshot of the current tally: total votes plus one standing per
/// candidate, in roster order. Computed on demand, never cached.
pub fn standings(candidates: &[Candidate]) -> (u64, Vec<CandidateStanding>) {
    let total_votes: u64 = candidates.iter().map(|c| c.votes).sum();
    let results = candidates
        .iter()
        .map(|c| CandidateStanding {
            id: c.id,
            name: c.name.clone(),
            party: c.party.clone(),
            symbol: c.symbol.clone(),
            votes: c.votes,
            percentage: VoteShare::from_tally(c.votes, total_votes),
        })
        .collect();
    (total_votes, results)
}
