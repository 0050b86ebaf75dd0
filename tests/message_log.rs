use faq_core::chat::{MemoryMessageLog, MessageKind, MessageLog, MessageQuery, NewMessage};
use faq_core::store::StoreError;
use faq_core::types::{ChatbotId, MessageId, SessionId};

fn message(content: &str, kind: MessageKind, session: &str) -> NewMessage {
    NewMessage {
        content: content.to_string(),
        kind,
        session_id: SessionId::new(session),
        user_id: None,
        chatbot_id: ChatbotId::new("bot"),
    }
}

fn conversation(turns: usize) -> MemoryMessageLog {
    let mut log = MemoryMessageLog::new();
    for i in 0..turns {
        log.append(message(&format!("question {i}"), MessageKind::User, "s1"))
            .unwrap();
        log.append(message(&format!("answer {i}"), MessageKind::Bot, "s1"))
            .unwrap();
    }
    log
}

#[test]
fn bot_messages_start_read_and_resolved() {
    let mut log = MemoryMessageLog::new();
    let user = log.append(message(" hi ", MessageKind::User, "s")).unwrap();
    let bot = log.append(message("hello", MessageKind::Bot, "s")).unwrap();
    let system = log.append(message("agent joined", MessageKind::System, "s")).unwrap();

    assert_eq!(user.content, "hi");
    assert!(!user.is_read && !user.is_resolved);
    assert!(bot.is_read && bot.is_resolved);
    assert!(!system.is_read && !system.is_resolved);
}

#[test]
fn listing_is_newest_first_with_defaults() {
    let log = conversation(15);
    let page = log.list(&MessageQuery::default()).unwrap();

    assert_eq!(page.messages.len(), 20);
    assert_eq!(page.messages[0].content, "answer 14");
    assert_eq!(page.messages[1].content, "question 14");
    assert_eq!(page.pagination.page, 1);
    assert_eq!(page.pagination.limit, 20);
    assert_eq!(page.pagination.total, 30);
    assert_eq!(page.pagination.total_pages, 2);
}

#[test]
fn later_pages_hold_the_remainder() {
    let log = conversation(15);
    let page = log
        .list(&MessageQuery {
            page: Some(2),
            ..MessageQuery::default()
        })
        .unwrap();

    assert_eq!(page.messages.len(), 10);
    assert_eq!(page.messages.last().unwrap().content, "question 0");

    let beyond = log
        .list(&MessageQuery {
            page: Some(9),
            ..MessageQuery::default()
        })
        .unwrap();
    assert!(beyond.messages.is_empty());
    assert_eq!(beyond.pagination.total, 30);
}

#[test]
fn zero_page_and_limit_are_clamped() {
    let log = conversation(2);
    let page = log
        .list(&MessageQuery {
            page: Some(0),
            limit: Some(0),
            ..MessageQuery::default()
        })
        .unwrap();
    assert_eq!(page.pagination.page, 1);
    assert_eq!(page.pagination.limit, 1);
    assert_eq!(page.messages.len(), 1);
    assert_eq!(page.pagination.total_pages, 4);
}

#[test]
fn filters_and_stats_apply_to_the_whole_filtered_set() {
    let mut log = conversation(3);
    log.append(message("other session", MessageKind::User, "s2"))
        .unwrap();

    let all = log.list(&MessageQuery::default()).unwrap();
    assert_eq!(all.stats.total, 7);
    assert_eq!(all.stats.user_messages, 4);
    assert_eq!(all.stats.bot_messages, 3);
    assert_eq!(all.stats.unread, 4);
    assert_eq!(all.stats.unresolved, 4);

    let unread = log
        .list(&MessageQuery {
            is_read: Some(false),
            limit: Some(1),
            ..MessageQuery::default()
        })
        .unwrap();
    assert_eq!(unread.messages.len(), 1);
    assert_eq!(unread.stats.total, 4);
    assert_eq!(unread.stats.bot_messages, 0);

    let s2 = log
        .list(&MessageQuery {
            session_id: Some(SessionId::new("s2")),
            ..MessageQuery::default()
        })
        .unwrap();
    assert_eq!(s2.messages.len(), 1);
    assert_eq!(s2.messages[0].content, "other session");

    let bots = log
        .list(&MessageQuery {
            kind: Some(MessageKind::Bot),
            ..MessageQuery::default()
        })
        .unwrap();
    assert!(bots.messages.iter().all(|m| m.kind == MessageKind::Bot));
}

#[test]
fn status_updates_change_only_given_flags() {
    let mut log = MemoryMessageLog::new();
    let record = log.append(message("help", MessageKind::User, "s")).unwrap();

    let updated = log.update_status(&record.id, Some(true), None).unwrap();
    assert!(updated.is_read);
    assert!(!updated.is_resolved);

    let resolved = log
        .list(&MessageQuery {
            is_resolved: Some(false),
            ..MessageQuery::default()
        })
        .unwrap();
    assert_eq!(resolved.stats.total, 1);
    assert_eq!(resolved.stats.unread, 0);
}

#[test]
fn delete_and_missing_ids() {
    let mut log = MemoryMessageLog::new();
    let record = log.append(message("bye", MessageKind::User, "s")).unwrap();

    log.delete(&record.id).unwrap();
    assert!(log.is_empty());

    let missing = MessageId::new("msg-missing");
    assert!(matches!(log.delete(&missing), Err(StoreError::MessageNotFound(_))));
    assert!(matches!(
        log.update_status(&missing, Some(true), Some(true)),
        Err(StoreError::MessageNotFound(_))
    ));
}
