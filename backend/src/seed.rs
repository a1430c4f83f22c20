use shared::{Candidate, ElectionData, Voter};

fn voter(id: &str, name: &str) -> Voter {
    Voter {
        voter_id: id.into(),
        name: name.into(),
        has_voted: false,
    }
}

fn candidate(id: u32, name: &str, party: &str, symbol: &str) -> Candidate {
    Candidate {
        id,
        name: name.into(),
        party: party.into(),
        symbol: symbol.into(),
        votes: 0,
    }
}

/// The fixed seed: the registered voter roll and the candidate roster. The
/// memory backend starts from this; the file backend writes it out when a
/// data file is missing.
pub fn election_data() -> ElectionData {
    ElectionData::new(
        vec![
            voter("VOTER001", "Rahul Kumar"),
            voter("VOTER002", "Priya Sharma"),
            voter("VOTER003", "Amit Singh"),
            voter("VOTER004", "Sneha Patel"),
            voter("VOTER005", "Vijay Reddy"),
            voter("VOTER006", "Anita Desai"),
            voter("VOTER007", "Rajesh Gupta"),
            voter("VOTER008", "Meera Iyer"),
            voter("VOTER009", "Suresh Nair"),
            voter("VOTER010", "Kavita Joshi"),
            voter("VOTER011", "Arjun Malhotra"),
            voter("VOTER012", "Deepa Krishnan"),
            voter("VOTER013", "Sanjay Mehta"),
            voter("VOTER014", "Pooja Agarwal"),
            voter("VOTER015", "Vikram Choudhary"),
            voter("VOTER016", "Nisha Kapoor"),
            voter("VOTER017", "Karan Saxena"),
            voter("VOTER018", "Swati Bhatt"),
            voter("VOTER019", "Prakash Yadav"),
            voter("VOTER020", "Ritu Bansal"),
            voter("VOTER021", "Nikhil Sharma"),
            voter("VOTER022", "Anjali Mishra"),
            voter("VOTER023", "Rohit Verma"),
            voter("VOTER024", "Shreya Pandey"),
            voter("VOTER025", "Aditya Jain"),
            voter("VOTER026", "Divya Srivastava"),
            voter("VOTER027", "Manish Dubey"),
            voter("VOTER028", "Priyanka Thakur"),
            voter("VOTER029", "Ashish Tripathi"),
            voter("VOTER030", "Neha Goyal"),
        ],
        vec![
            candidate(1, "Arun Verma", "Progressive Party", "🍎"),
            candidate(2, "Sunita Rao", "Reform Alliance", "🔦"),
            candidate(3, "Manish Tiwari", "Unity Front", "🚲"),
            candidate(4, "Lakshmi Menon", "People's Voice", "✋"),
        ],
    )
}
