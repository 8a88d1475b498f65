use super::gender::{Gender, Preference};
use super::stage::Stage;

/// One Telegram user known to the bot. Created on first contact, kept for
/// the process lifetime. `partner` is `Some` exactly while `stage` is
/// `Chatting`, and the mapping is symmetric between the two sides.
#[derive(Debug)]
pub struct User {
    pub id: i64,
    pub stage: Stage,
    pub gender: Option<Gender>,
    pub preference: Option<Preference>,
    pub partner: Option<i64>,
}

impl User {
    pub fn new(id: i64) -> Self {
        Self {
            id,
            stage: Stage::New,
            gender: None,
            preference: None,
            partner: None,
        }
    }
}
