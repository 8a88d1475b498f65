use teloxide::utils::command::BotCommands;

#[derive(BotCommands, Clone)]
#[command(rename_rule = "lowercase", description = "Available commands:")]
pub enum Command {
    #[command(description = "show this list")]
    Help,

    #[command(description = "get started")]
    Start,

    #[command(description = "find a chat partner")]
    Search,

    #[command(description = "skip to the next partner")]
    Next,

    #[command(description = "leave the chat")]
    Stop,
}
