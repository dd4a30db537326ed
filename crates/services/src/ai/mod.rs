mod agent;
mod chat_completions;

pub use agent::{AgentSession, ChatAgent};
pub use chat_completions::ChatCompletionsAgent;
