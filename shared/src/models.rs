use serde::{Serialize, Deserialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Voter {
    pub voter_id: String,
    pub name: String,
    pub has_voted: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    pub id: u32,
    pub name: String,
    pub party: String,
    pub symbol: String,
    pub votes: u64,
}

/// On-disk shape of the voters file: a single top-level array field.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VoterRoll {
    pub voters: Vec<Voter>,
}

/// On-disk shape of the candidates file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CandidateRoster {
    pub candidates: Vec<Candidate>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub voter_id: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VoteRequest {
    pub voter_id: Option<String>,
    pub candidate_id: Option<CandidateRef>,
}

/// A candidate id as it arrives on the wire: either a JSON number or a
/// numeric string.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum CandidateRef {
    Number(i64),
    Text(String),
}

impl CandidateRef {
    /// Whether the supplied value counts as "not provided". Empty strings
    /// and the number zero are treated the same as an absent field.
    pub fn is_blank(&self) -> bool {
        match self {
            CandidateRef::Number(n) => *n == 0,
            CandidateRef::Text(s) => s.is_empty(),
        }
    }

    /// Resolves to a candidate id if the value is a representable positive
    /// integer. Anything else falls through to "not found" at lookup time.
    pub fn resolve(&self) -> Option<u32> {
        match self {
            CandidateRef::Number(n) => u32::try_from(*n).ok(),
            CandidateRef::Text(s) => crate::validation::parse_candidate_id(s),
        }
    }
}

/// The voter fields returned by a successful login: identity only, no vote
/// status and no candidate data.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct VoterSummary {
    pub voter_id: String,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub success: bool,
    pub message: String,
    pub voter: VoterSummary,
}

/// A candidate as shown on the ballot. `votes` is deliberately absent so a
/// logged-in voter cannot see the running tally.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CandidateSummary {
    pub id: u32,
    pub name: String,
    pub party: String,
    pub symbol: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidateListResponse {
    pub success: bool,
    pub candidates: Vec<CandidateSummary>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckVotedResponse {
    pub success: bool,
    pub has_voted: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VoteResponse {
    pub success: bool,
    pub message: String,
    pub candidate_name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultsResponse {
    pub success: bool,
    pub total_votes: u64,
    pub results: Vec<CandidateStanding>,
}

/// One row of the results view.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CandidateStanding {
    pub id: u32,
    pub name: String,
    pub party: String,
    pub symbol: String,
    pub votes: u64,
    pub percentage: VoteShare,
}

/// A candidate's share of the total vote. Serializes as a two-decimal string
/// once any vote has been cast, and as the bare number 0 while the tally is
/// empty.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum VoteShare {
    Percent(String),
    Empty(u8),
}

impl VoteShare {
    pub fn from_tally(votes: u64, total: u64) -> Self {
        if total == 0 {
            VoteShare::Empty(0)
        } else {
            VoteShare::Percent(format!("{:.2}", votes as f64 / total as f64 * 100.0))
        }
    }
}

/// Failure envelope shared by every endpoint and catcher.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    pub success: bool,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }
}
