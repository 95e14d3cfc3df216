use serde::{Deserialize, Serialize};

/// A swap listing: something offered (`have`) in exchange for something sought (`want`)
///
/// Listings can sit on either side of a matching; a vacancy listing accepts
/// a profile listing whose `have` satisfies its `want`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Listing {
    pub id: String,
    pub want: String,
    pub have: String,
}

impl Listing {
    pub fn new(id: impl Into<String>, want: impl Into<String>, have: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            want: want.into(),
            have: have.into(),
        }
    }

    /// Whether `other` offers exactly what this listing wants
    #[inline]
    pub fn complements(&self, other: &Listing) -> bool {
        self.want == other.have
    }

    /// Preference predicate: a vacancy accepts a complementary profile
    pub fn prefers(vacancy: &Listing, _current: Option<&Listing>, proposed: &Listing) -> bool {
        vacancy.complements(proposed)
    }
}

/// A matched pair, by listing id
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchPair {
    #[serde(rename = "vacancyId")]
    pub vacancy_id: String,
    #[serde(rename = "profileId")]
    pub profile_id: String,
}

impl From<(&Listing, &Listing)> for MatchPair {
    fn from((vacancy, profile): (&Listing, &Listing)) -> Self {
        Self {
            vacancy_id: vacancy.id.clone(),
            profile_id: profile.id.clone(),
        }
    }
}
