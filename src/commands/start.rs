use crate::services::welcome_service::WELCOME_MESSAGE;

/// Single static welcome line; never touches the explorers
pub fn execute() -> Vec<String> {
    vec![WELCOME_MESSAGE.to_string()]
}
