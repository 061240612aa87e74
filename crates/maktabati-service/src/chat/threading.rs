//! Turns stored conversation turns into a chronological message thread.

use maktabati_entity::conversation::{ChatMessage, Conversation};

/// Expand stored turns into alternating user/assistant messages.
///
/// The repository returns turns newest first; a single reverse restores
/// chronological order before each turn is expanded into its two
/// messages.
pub fn thread_history(mut turns: Vec<Conversation>) -> Vec<ChatMessage> {
    turns.reverse();
    let mut messages = Vec::with_capacity(turns.len() * 2);
    for turn in turns {
        messages.push(ChatMessage::user(turn.query));
        messages.push(ChatMessage::assistant(turn.response, turn.sources));
    }
    messages
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};
    use maktabati_entity::conversation::ChatRole;
    use uuid::Uuid;

    fn turn(n: u32, minutes_ago: i64) -> Conversation {
        Conversation {
            id: Uuid::new_v4(),
            owner_id: Uuid::new_v4(),
            section_id: Uuid::new_v4(),
            query: format!("question {n}"),
            response: format!("answer {n}"),
            sources: Vec::new(),
            timestamp: Utc::now() - Duration::minutes(minutes_ago),
        }
    }

    #[test]
    fn test_newest_first_turns_become_chronological_messages() {
        // Repository order: T3 (newest), T2, T1 (oldest).
        let messages = thread_history(vec![turn(3, 1), turn(2, 2), turn(1, 3)]);

        assert_eq!(messages.len(), 6);
        let expected = [
            (ChatRole::User, "question 1"),
            (ChatRole::Assistant, "answer 1"),
            (ChatRole::User, "question 2"),
            (ChatRole::Assistant, "answer 2"),
            (ChatRole::User, "question 3"),
            (ChatRole::Assistant, "answer 3"),
        ];
        for (message, (role, content)) in messages.iter().zip(expected) {
            assert_eq!(message.role, role);
            assert_eq!(message.content, content);
        }
    }

    #[test]
    fn test_empty_history() {
        assert!(thread_history(Vec::new()).is_empty());
    }
}
