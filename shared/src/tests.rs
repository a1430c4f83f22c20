#[cfg(test)]
mod tests {
    use serde_json::json;
    use crate::election::{standings, CastError, ElectionData};
    use crate::models::{Candidate, CandidateRef, Voter, VoteShare};
    use crate::validation::{parse_candidate_id, voter_id_matches};

    fn voter(id: &str, name: &str) -> Voter {
        Voter {
            voter_id: id.into(),
            name: name.into(),
            has_voted: false,
        }
    }

    fn candidate(id: u32, name: &str, votes: u64) -> Candidate {
        Candidate {
            id,
            name: name.into(),
            party: format!("{name} Party"),
            symbol: "X".into(),
            votes,
        }
    }

    fn election() -> ElectionData {
        ElectionData::new(
            vec![
                voter("VOTER001", "Asha"),
                voter("VOTER002", "Bhanu"),
                voter("VOTER003", "Chitra"),
            ],
            vec![candidate(1, "Arun", 0), candidate(2, "Sunita", 0)],
        )
    }

    #[test]
    fn test_cast_vote_marks_voter_and_increments() {
        let mut e = election();
        let name = e.cast_vote("VOTER001", 1).unwrap();
        assert_eq!(name, "Arun");
        assert!(e.find_voter("VOTER001").unwrap().has_voted);
        assert_eq!(e.find_candidate(1).unwrap().votes, 1);
        assert_eq!(e.find_candidate(2).unwrap().votes, 0);
    }

    #[test]
    fn test_repeat_cast_rejected_without_side_effects() {
        let mut e = election();
        e.cast_vote("VOTER001", 1).unwrap();
        let before = e.candidates.clone();
        assert!(matches!(
            e.cast_vote("VOTER001", 2),
            Err(CastError::AlreadyVoted)
        ));
        assert_eq!(e.candidates, before);
    }

    #[test]
    fn test_unknown_voter_and_candidate() {
        let mut e = election();
        assert!(matches!(
            e.cast_vote("VOTERX", 1),
            Err(CastError::VoterNotFound)
        ));
        assert!(matches!(
            e.cast_vote("VOTER001", 99),
            Err(CastError::CandidateNotFound)
        ));
        // Failed casts leave everything untouched.
        assert!(!e.find_voter("VOTER001").unwrap().has_voted);
        assert_eq!(e.votes_cast(), 0);
    }

    #[test]
    fn test_precondition_order() {
        let mut e = election();
        e.cast_vote("VOTER001", 1).unwrap();
        // Already-voted is checked before the candidate id is resolved.
        assert!(matches!(
            e.cast_vote("VOTER001", 99),
            Err(CastError::AlreadyVoted)
        ));
    }

    #[test]
    fn test_lookup_is_trimmed_and_case_insensitive() {
        let e = election();
        let a = e.find_voter(" voter001 ").unwrap();
        let b = e.find_voter("VOTER001").unwrap();
        assert_eq!(a, b);
        assert!(voter_id_matches("VOTER001", "\tvoter001\n"));
        assert!(!voter_id_matches("VOTER001", "VOTER0012"));

        let mut e = election();
        e.cast_vote("  voter002  ", 2).unwrap();
        assert!(e.find_voter("VOTER002").unwrap().has_voted);
    }

    #[test]
    fn test_global_tally_invariant() {
        let mut e = election();
        e.cast_vote("VOTER001", 1).unwrap();
        e.cast_vote("VOTER002", 1).unwrap();
        let _ = e.cast_vote("VOTER002", 2);
        e.cast_vote("VOTER003", 2).unwrap();
        let total: u64 = e.candidates.iter().map(|c| c.votes).sum();
        assert_eq!(total, e.votes_cast());
        assert_eq!(total, 3);
    }

    #[test]
    fn test_standings_percentages() {
        let roster = vec![
            candidate(1, "A", 3),
            candidate(2, "B", 1),
            candidate(3, "C", 0),
            candidate(4, "D", 0),
        ];
        let (total, results) = standings(&roster);
        assert_eq!(total, 4);
        let shares: Vec<_> = results.iter().map(|r| r.percentage.clone()).collect();
        assert_eq!(
            shares,
            vec![
                VoteShare::Percent("75.00".into()),
                VoteShare::Percent("25.00".into()),
                VoteShare::Percent("0.00".into()),
                VoteShare::Percent("0.00".into()),
            ]
        );
    }

    #[test]
    fn test_standings_empty_tally() {
        let roster = vec![candidate(1, "A", 0), candidate(2, "B", 0)];
        let (total, results) = standings(&roster);
        assert_eq!(total, 0);
        for row in &results {
            assert_eq!(row.percentage, VoteShare::Empty(0));
        }
        // The empty share serializes as the bare number 0, not "0.00".
        assert_eq!(serde_json::to_value(&results[0].percentage).unwrap(), json!(0));
    }

    #[test]
    fn test_vote_share_serialization() {
        let share = VoteShare::from_tally(3, 4);
        assert_eq!(serde_json::to_value(&share).unwrap(), json!("75.00"));
    }

    #[test]
    fn test_parse_candidate_id() {
        assert_eq!(parse_candidate_id("2"), Some(2));
        assert_eq!(parse_candidate_id(" 2 "), Some(2));
        assert_eq!(parse_candidate_id("abc"), None);
        assert_eq!(parse_candidate_id("-1"), None);
        assert_eq!(parse_candidate_id("1.5"), None);
        assert_eq!(parse_candidate_id(""), None);
    }

    #[test]
    fn test_candidate_ref() {
        assert!(CandidateRef::Number(0).is_blank());
        assert!(CandidateRef::Text(String::new()).is_blank());
        assert!(!CandidateRef::Text(" ".into()).is_blank());
        assert_eq!(CandidateRef::Number(3).resolve(), Some(3));
        assert_eq!(CandidateRef::Number(-1).resolve(), None);
        assert_eq!(CandidateRef::Text("4".into()).resolve(), Some(4));
        assert_eq!(CandidateRef::Text("x".into()).resolve(), None);
    }

    #[test]
    fn test_candidate_ref_deserializes_from_number_or_string() {
        let n: CandidateRef = serde_json::from_value(json!(2)).unwrap();
        assert_eq!(n.resolve(), Some(2));
        let s: CandidateRef = serde_json::from_value(json!("2")).unwrap();
        assert_eq!(s.resolve(), Some(2));
    }
}
