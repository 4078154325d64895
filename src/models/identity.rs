use serde::{Deserialize, Serialize};

/// A resolved platform account.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub id: String,
    pub email: String,
}
