/// Compares a stored voter id against raw user input. Input is trimmed and
/// compared case-insensitively; stored ids are assumed already canonical.
pub fn voter_id_matches(stored: &str, input: &str) -> bool {
    stored.eq_ignore_ascii_case(input.trim())
}

/// Parses a candidate id supplied as text. Non-numeric input yields `None`
/// so an unparseable id falls through to "not found" instead of an error.
pub fn parse_candidate_id(raw: &str) -> Option<u32> {
    raw.trim().parse().ok()
}
