//! Every message the bot sends, in one place.

pub const WELCOME: &str = "Welcome to the anonymous chat!";
pub const WELCOME_OPEN: &str =
    "Welcome to the anonymous chat!\n\n/search - find a chat partner";

pub const ASK_GENDER: &str = "What is your gender? (male/female/other)";
pub const ASK_PREFERENCE: &str = "Who do you want to chat with? (male/female/any)";
pub const GENDER_RETRY: &str = "Please choose: male, female or other";
pub const PREFERENCE_RETRY: &str = "Please choose: male, female or any";
pub const ONBOARDED: &str = "Done! Use /search to find a chat partner.";
pub const READY: &str = "You're all set! Use /search to find a chat partner.";

pub const NOT_REGISTERED: &str = "Finish registration first!\n\n/start";
pub const ALREADY_CHATTING: &str = "You're already chatting. Use /next to skip.";
pub const ALREADY_WAITING: &str = "You're already searching. Hold on!";

pub const CONNECTED: &str = "Connected! Say hi!\n\n/next - new partner\n/stop - leave";
pub const WAITING: &str = "Waiting for a partner...";
pub const PARTNER_LEFT: &str = "Your partner left. Use /search to find someone new.";
pub const STOPPED: &str = "You left the chat. Use /search to find someone else.";
