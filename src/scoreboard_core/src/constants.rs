/// First letter used for bucket labels
pub const FIRST_LABEL: u8 = b'A';

/// Number of distinct letters before labels roll over to two characters
pub const LABEL_ALPHABET: usize = 26;

/// Note attached when there are no teams at all
pub const NOTE_NO_TEAMS: &str = "no teams to distribute";

/// Note attached when exactly one team is registered
pub const NOTE_SINGLE_TEAM: &str = "single team";

/// Note attached when the team count is prime
pub const NOTE_PRIME_COUNT: &str = "equal division not possible (prime number)";

/// Note attached when factorization yields no multi-bucket layout
pub const NOTE_NO_FACTOR_PAIRS: &str = "single bucket (no valid factor pairs)";
