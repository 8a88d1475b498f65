/// Where a user is in the onboarding/session lifecycle.
///
/// `Waiting` and `Chatting` are mutually exclusive with each other and with
/// membership in the waiting pool being stale: a `Waiting` user is in the
/// pool, a `Chatting` user never is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Stage {
    #[default]
    New,
    AwaitingGender,
    AwaitingPreference,
    Idle,
    Waiting,
    Chatting,
}
