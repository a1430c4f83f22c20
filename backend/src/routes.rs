use rocket::{State, FromForm, get, post, http::Status, serde::json::Json};
use tracing::{info, warn};

use shared::{
    standings, CandidateListResponse, CandidateSummary, CheckVotedResponse, LoginRequest,
    LoginResponse, ResultsResponse, VoteRequest, VoteResponse, VoterSummary,
};

use crate::error::ApiError;
use crate::store::ElectionStore;

/// Process-wide state: the single store instance every handler goes
/// through.
pub struct AppState {
    store: Box<dyn ElectionStore>,
}

impl AppState {
    pub fn new(store: Box<dyn ElectionStore>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &dyn ElectionStore {
        self.store.as_ref()
    }
}

#[post("/login", format = "json", data = "<request>")]
pub async fn login(
    state: &State<AppState>,
    request: Json<LoginRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    let voter_id = request.into_inner().voter_id.unwrap_or_default();
    if voter_id.trim().is_empty() {
        return Err(ApiError::InvalidRequest("Please enter a valid Voter ID".into()));
    }

    let voter = state.store().find_voter(&voter_id)?.ok_or_else(|| {
        ApiError::NotFound("Invalid Voter ID. Please check and try again.".into())
    })?;

    // Login doubles as the eligibility check: a voter who already voted
    // cannot re-enter the ballot flow.
    if voter.has_voted {
        warn!(voter_id = %voter.voter_id, "login rejected: already voted");
        return Err(ApiError::AlreadyVoted);
    }

    info!(voter_id = %voter.voter_id, "voter logged in");
    Ok(Json(LoginResponse {
        success: true,
        message: "Login successful".into(),
        voter: VoterSummary {
            voter_id: voter.voter_id,
            name: voter.name,
        },
    }))
}

#[get("/candidates")]
pub async fn list_candidates(
    state: &State<AppState>,
) -> Result<Json<CandidateListResponse>, ApiError> {
    let candidates = state
        .store()
        .list_candidates()?
        .into_iter()
        .map(|c| CandidateSummary {
            id: c.id,
            name: c.name,
            party: c.party,
            symbol: c.symbol,
        })
        .collect();
    Ok(Json(CandidateListResponse {
        success: true,
        candidates,
    }))
}

#[derive(FromForm)]
pub struct VoterIdQuery {
    #[field(name = "voterId")]
    voter_id: Option<String>,
}

#[get("/check-voted?<query..>")]
pub async fn check_voted(
    state: &State<AppState>,
    query: VoterIdQuery,
) -> Result<Json<CheckVotedResponse>, ApiError> {
    let voter_id = query
        .voter_id
        .filter(|id| !id.is_empty())
        .ok_or_else(|| ApiError::InvalidRequest("Voter ID is required".into()))?;
    vote_status(state.store(), &voter_id)
}

#[get("/check-voted/<voter_id>")]
pub async fn check_voted_by_path(
    state: &State<AppState>,
    voter_id: &str,
) -> Result<Json<CheckVotedResponse>, ApiError> {
    vote_status(state.store(), voter_id)
}

fn vote_status(
    store: &dyn ElectionStore,
    voter_id: &str,
) -> Result<Json<CheckVotedResponse>, ApiError> {
    let voter = store
        .find_voter(voter_id)?
        .ok_or_else(|| ApiError::NotFound("Voter not found".into()))?;
    Ok(Json(CheckVotedResponse {
        success: true,
        has_voted: voter.has_voted,
    }))
}

#[post("/vote", format = "json", data = "<request>")]
pub async fn cast_vote(
    state: &State<AppState>,
    request: Json<VoteRequest>,
) -> Result<Json<VoteResponse>, ApiError> {
    let VoteRequest {
        voter_id,
        candidate_id,
    } = request.into_inner();

    let (voter_id, candidate_ref) = match (voter_id, candidate_id) {
        (Some(v), Some(c)) if !v.is_empty() && !c.is_blank() => (v, c),
        _ => {
            return Err(ApiError::InvalidRequest(
                "Invalid request: Voter ID and Candidate ID are required".into(),
            ))
        }
    };

    // An unresolvable id can never match a candidate; 0 keeps it flowing
    // through the normal precondition order (voter first, candidate last).
    let candidate_id = candidate_ref.resolve().unwrap_or(0);

    let candidate_name = state.store().cast_vote(&voter_id, candidate_id)?;
    info!(voter_id = %voter_id.trim(), candidate = %candidate_name, "vote recorded");
    Ok(Json(VoteResponse {
        success: true,
        message: "Your vote has been recorded successfully!".into(),
        candidate_name,
    }))
}

#[get("/results")]
pub async fn get_results(state: &State<AppState>) -> Result<Json<ResultsResponse>, ApiError> {
    let candidates = state.store().list_candidates()?;
    let (total_votes, results) = standings(&candidates);
    Ok(Json(ResultsResponse {
        success: true,
        total_votes,
        results,
    }))
}

#[rocket::options("/<_..>")]
pub async fn all_options() -> Status {
    Status::Ok
}

// Rocket produces 404, not 405, when a path matches with the wrong method;
// these fallbacks give the documented routes their 405 behavior.

#[get("/login")]
pub async fn login_wrong_method() -> ApiError {
    ApiError::MethodNotAllowed
}

#[get("/vote")]
pub async fn vote_wrong_method() -> ApiError {
    ApiError::MethodNotAllowed
}

#[post("/candidates")]
pub async fn candidates_wrong_method() -> ApiError {
    ApiError::MethodNotAllowed
}

#[post("/results")]
pub async fn results_wrong_method() -> ApiError {
    ApiError::MethodNotAllowed
}

#[post("/check-voted")]
pub async fn check_voted_wrong_method() -> ApiError {
    ApiError::MethodNotAllowed
}

#[post("/check-voted/<_voter_id>")]
pub async fn check_voted_path_wrong_method(_voter_id: &str) -> ApiError {
    ApiError::MethodNotAllowed
}
