use std::collections::{HashMap, VecDeque};

use crate::models::gender::Preference;
use crate::models::stage::Stage;
use crate::models::user::User;

/// All mutable session state: every known user plus the waiting pool.
///
/// The registry is volatile and process-lifetime only. One instance is
/// constructed at startup and shared behind a single mutex; every pairing
/// operation runs against it as one critical section, so the methods here
/// never need to worry about interleaving.
pub struct Registry {
    users: HashMap<i64, User>,
    waiting: VecDeque<i64>,
    onboarding: bool,
}

impl Registry {
    pub fn new(onboarding: bool) -> Self {
        Self {
            users: HashMap::new(),
            waiting: VecDeque::new(),
            onboarding,
        }
    }

    pub fn onboarding_enabled(&self) -> bool {
        self.onboarding
    }

    /// Looks up a user, creating the record on first contact. With
    /// onboarding disabled a fresh user skips straight to `Idle`.
    pub fn resolve(&mut self, id: i64) -> &mut User {
        let onboarding = self.onboarding;
        self.users.entry(id).or_insert_with(|| {
            let mut user = User::new(id);
            if !onboarding {
                user.stage = Stage::Idle;
            }
            user
        })
    }

    pub fn get(&self, id: i64) -> Option<&User> {
        self.users.get(&id)
    }

    pub(crate) fn user_mut(&mut self, id: i64) -> Option<&mut User> {
        self.users.get_mut(&id)
    }

    pub fn in_pool(&self, id: i64) -> bool {
        self.waiting.contains(&id)
    }

    pub fn pool_len(&self) -> usize {
        self.waiting.len()
    }

    /// Appends to the tail of the pool and marks the user `Waiting`.
    pub fn enqueue(&mut self, id: i64) {
        debug_assert!(!self.in_pool(id), "user {id} is already in the pool");
        if let Some(user) = self.users.get_mut(&id) {
            debug_assert_eq!(user.partner, None, "waiting user {id} has a partner");
            user.stage = Stage::Waiting;
        }
        self.waiting.push_back(id);
    }

    /// Removes by identity, wherever the user sits in the pool. Returns
    /// whether the user was present. Does not touch the user's stage.
    pub fn dequeue(&mut self, id: i64) -> bool {
        match self.waiting.iter().position(|&w| w == id) {
            Some(pos) => {
                let _ = self.waiting.remove(pos);
                true
            }
            None => false,
        }
    }

    /// First entry in the pool, in insertion order, that is mutually
    /// compatible with the requester. The pool is left untouched; the
    /// requester itself is never considered.
    ///
    /// An unset preference behaves as `Any`, so with onboarding disabled
    /// every scan succeeds on the head entry and matching is pure FIFO.
    pub fn find_compatible(&self, id: i64) -> Option<i64> {
        let me = self.users.get(&id)?;
        let my_pref = me.preference.unwrap_or(Preference::Any);

        for &candidate in &self.waiting {
            if candidate == id {
                continue;
            }
            let Some(other) = self.users.get(&candidate) else {
                continue;
            };
            let their_pref = other.preference.unwrap_or(Preference::Any);

            if my_pref.accepts(other.gender) && their_pref.accepts(me.gender) {
                return Some(candidate);
            }
        }

        None
    }

    /// Checks every structural invariant. Test-only; production paths rely
    /// on the targeted `debug_assert!`s instead.
    #[cfg(test)]
    pub fn assert_invariants(&self) {
        let mut seen = std::collections::HashSet::new();
        for &id in &self.waiting {
            assert!(seen.insert(id), "user {id} appears twice in the pool");
            let user = self.users.get(&id).expect("pooled user has no record");
            assert_eq!(user.stage, Stage::Waiting, "pooled user {id} not Waiting");
        }

        for user in self.users.values() {
            match user.stage {
                Stage::Chatting => {
                    assert!(!self.in_pool(user.id), "chatting user {} pooled", user.id);
                    let partner_id = user.partner.expect("chatting user has no partner");
                    assert_ne!(partner_id, user.id, "user {} paired with itself", user.id);
                    let partner = self.users.get(&partner_id).expect("dangling partner");
                    assert_eq!(partner.partner, Some(user.id), "asymmetric pairing");
                    assert_eq!(partner.stage, Stage::Chatting, "partner not chatting");
                }
                Stage::Waiting => {
                    assert!(self.in_pool(user.id), "waiting user {} not pooled", user.id);
                    assert_eq!(user.partner, None);
                }
                _ => {
                    assert!(!self.in_pool(user.id), "idle user {} pooled", user.id);
                    assert_eq!(user.partner, None);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::gender::Gender;

    fn user_with(reg: &mut Registry, id: i64, gender: Gender, pref: Preference) {
        let user = reg.resolve(id);
        user.stage = Stage::Idle;
        user.gender = Some(gender);
        user.preference = Some(pref);
    }

    #[test]
    fn dequeue_removes_by_identity_not_position() {
        let mut reg = Registry::new(false);
        for id in [1, 2, 3] {
            reg.resolve(id);
            reg.enqueue(id);
        }

        assert!(reg.dequeue(2));
        assert!(!reg.in_pool(2));
        assert!(reg.in_pool(1));
        assert!(reg.in_pool(3));
        assert!(!reg.dequeue(2));
    }

    #[test]
    fn find_compatible_skips_the_requester() {
        let mut reg = Registry::new(false);
        reg.resolve(7);
        reg.enqueue(7);

        // Even erroneously pooled, a user never matches itself.
        assert_eq!(reg.find_compatible(7), None);
    }

    #[test]
    fn find_compatible_takes_first_mutual_match() {
        let mut reg = Registry::new(true);
        user_with(&mut reg, 1, Gender::Male, Preference::Any);
        user_with(&mut reg, 2, Gender::Female, Preference::Any);
        reg.enqueue(1);
        reg.enqueue(2);

        // Requester wants a female partner; P1 is skipped, P2 selected.
        user_with(&mut reg, 3, Gender::Male, Preference::Female);
        assert_eq!(reg.find_compatible(3), Some(2));
        // The scan itself never mutates the pool.
        assert!(reg.in_pool(1));
        assert!(reg.in_pool(2));
    }

    #[test]
    fn compatibility_must_hold_in_both_directions() {
        let mut reg = Registry::new(true);
        // Pool: a male who only wants females.
        user_with(&mut reg, 1, Gender::Male, Preference::Female);
        reg.enqueue(1);

        // A male requester wanting males: his preference matches P1's
        // gender, but P1 does not want males back.
        user_with(&mut reg, 2, Gender::Male, Preference::Male);
        assert_eq!(reg.find_compatible(2), None);

        // A female requester wanting males satisfies both directions.
        user_with(&mut reg, 3, Gender::Female, Preference::Male);
        assert_eq!(reg.find_compatible(3), Some(1));
    }

    #[test]
    fn open_matching_degenerates_to_fifo() {
        let mut reg = Registry::new(false);
        for id in [10, 11, 12] {
            reg.resolve(id);
            reg.enqueue(id);
        }

        reg.resolve(13);
        assert_eq!(reg.find_compatible(13), Some(10));
    }

    #[test]
    fn first_contact_stage_depends_on_onboarding_mode() {
        let mut gated = Registry::new(true);
        assert_eq!(gated.resolve(1).stage, Stage::New);

        let mut open = Registry::new(false);
        assert_eq!(open.resolve(1).stage, Stage::Idle);
    }
}
