//! Pairing operations: search, next, stop, onboarding and relay routing.
//!
//! Every operation runs synchronously against the registry while the caller
//! holds the lock, and returns the full list of replies to send. Network
//! I/O happens only after the lock is released, so a slow send can never
//! stall an unrelated pairing operation.

use crate::models::gender::{Gender, Preference};
use crate::models::stage::Stage;
use crate::registry::Registry;
use crate::texts;

/// One outbound notification, computed inside the critical section and
/// delivered after it.
#[derive(Debug, PartialEq, Eq)]
pub struct Reply {
    pub to: i64,
    pub text: String,
}

impl Reply {
    fn new(to: i64, text: impl Into<String>) -> Self {
        Self {
            to,
            text: text.into(),
        }
    }
}

impl Registry {
    /// `/start`: begin (or resume) onboarding, or confirm readiness once a
    /// user is past it. Gender and preference are set once; `/start` never
    /// rewrites them.
    pub fn start(&mut self, id: i64) -> Vec<Reply> {
        let onboarding = self.onboarding_enabled();
        let user = self.resolve(id);

        if !onboarding {
            return vec![Reply::new(id, texts::WELCOME_OPEN)];
        }

        match user.stage {
            Stage::New => {
                user.stage = Stage::AwaitingGender;
                vec![
                    Reply::new(id, texts::WELCOME),
                    Reply::new(id, texts::ASK_GENDER),
                ]
            }
            Stage::AwaitingGender => vec![Reply::new(id, texts::ASK_GENDER)],
            Stage::AwaitingPreference => vec![Reply::new(id, texts::ASK_PREFERENCE)],
            _ => vec![Reply::new(id, texts::READY)],
        }
    }

    /// Routes a plain text message: onboarding answers advance the state
    /// machine, a chatting user's text is relayed verbatim to their partner,
    /// and anything else is dropped without a reply.
    pub fn handle_text(&mut self, id: i64, text: &str) -> Vec<Reply> {
        let user = self.resolve(id);

        match user.stage {
            Stage::AwaitingGender => match Gender::parse(text) {
                Some(gender) => {
                    user.gender = Some(gender);
                    user.stage = Stage::AwaitingPreference;
                    vec![Reply::new(id, texts::ASK_PREFERENCE)]
                }
                None => vec![Reply::new(id, texts::GENDER_RETRY)],
            },
            Stage::AwaitingPreference => match Preference::parse(text) {
                Some(pref) => {
                    user.preference = Some(pref);
                    user.stage = Stage::Idle;
                    vec![Reply::new(id, texts::ONBOARDED)]
                }
                None => vec![Reply::new(id, texts::PREFERENCE_RETRY)],
            },
            Stage::Chatting => {
                debug_assert!(user.partner.is_some(), "chatting user {id} has no partner");
                match user.partner {
                    Some(partner) => vec![Reply::new(partner, text)],
                    None => Vec::new(),
                }
            }
            Stage::New | Stage::Idle | Stage::Waiting => Vec::new(),
        }
    }

    /// `/search`: pair with the first compatible pooled user, or join the
    /// pool. Searching while chatting or while already pooled is answered
    /// with a corrective message and changes nothing.
    pub fn search(&mut self, id: i64) -> Vec<Reply> {
        match self.resolve(id).stage {
            Stage::Chatting => return vec![Reply::new(id, texts::ALREADY_CHATTING)],
            Stage::Waiting => return vec![Reply::new(id, texts::ALREADY_WAITING)],
            Stage::New | Stage::AwaitingGender | Stage::AwaitingPreference => {
                return vec![Reply::new(id, texts::NOT_REGISTERED)]
            }
            Stage::Idle => {}
        }

        match self.find_compatible(id) {
            Some(partner) => {
                self.connect(id, partner);
                vec![
                    Reply::new(id, texts::CONNECTED),
                    Reply::new(partner, texts::CONNECTED),
                ]
            }
            None => {
                self.enqueue(id);
                vec![Reply::new(id, texts::WAITING)]
            }
        }
    }

    /// `/next`: leave the current conversation, tell the former partner,
    /// then immediately search again. Not chatting behaves like `/search`.
    pub fn next(&mut self, id: i64) -> Vec<Reply> {
        let mut replies = Vec::new();
        if let Some(partner) = self.disconnect(id) {
            replies.push(Reply::new(partner, texts::PARTNER_LEFT));
        }
        replies.extend(self.search(id));
        replies
    }

    /// `/stop`: leave the pool or the conversation, whichever the user is
    /// in. Always confirms to the caller; a second `/stop` is a no-op
    /// beyond the same confirmation.
    pub fn stop(&mut self, id: i64) -> Vec<Reply> {
        self.resolve(id);

        let mut replies = Vec::new();
        if self.dequeue(id) {
            if let Some(user) = self.user_mut(id) {
                user.stage = Stage::Idle;
            }
        } else if let Some(partner) = self.disconnect(id) {
            replies.push(Reply::new(partner, texts::PARTNER_LEFT));
        }
        replies.push(Reply::new(id, texts::STOPPED));
        replies
    }

    /// Links two users as partners. The callee is pulled out of the pool;
    /// both sides end up `Chatting` before the lock is released.
    fn connect(&mut self, a: i64, b: i64) {
        debug_assert_ne!(a, b, "cannot pair user {a} with itself");

        self.dequeue(b);
        if let Some(user) = self.user_mut(a) {
            user.stage = Stage::Chatting;
            user.partner = Some(b);
        }
        if let Some(user) = self.user_mut(b) {
            user.stage = Stage::Chatting;
            user.partner = Some(a);
        }
    }

    /// Clears a pairing from both sides, returning the former partner.
    /// `None` if the user was not chatting.
    fn disconnect(&mut self, id: i64) -> Option<i64> {
        let user = self.user_mut(id)?;
        if user.stage != Stage::Chatting {
            return None;
        }

        let partner = user.partner.take();
        user.stage = Stage::Idle;

        if let Some(partner_id) = partner {
            if let Some(other) = self.user_mut(partner_id) {
                debug_assert_eq!(other.partner, Some(id), "pairing must be symmetric");
                other.partner = None;
                other.stage = Stage::Idle;
            }
        }
        partner
    }
}
