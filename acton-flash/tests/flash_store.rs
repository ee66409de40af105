//! Request-to-request behavior of the flash store over an in-memory session

use std::sync::Arc;
use std::thread;

use acton_flash::prelude::*;
use parking_lot::RwLock;
use serde_json::json;

fn open(session: &mut SessionData) -> FlashStore<'_, SessionData> {
    FlashStore::open(session, FlashConfig::default()).expect("open flash store")
}

#[test]
fn test_last_added_value_is_returned_for_each_category() {
    let mut session = SessionData::new();
    let mut flash = open(&mut session);

    for category in FlashCategory::ALL {
        flash.add(category, "first").unwrap();
        flash.add(category, format!("last {category}")).unwrap();

        let entries = flash.get_by_type(category).unwrap();
        assert_eq!(entries.last(), Some(&json!(format!("last {category}"))));
    }
}

#[test]
fn test_fresh_bucket_is_empty_for_every_category() {
    let mut session = SessionData::new();
    let flash = open(&mut session);

    for category in FlashCategory::ALL {
        assert!(flash.get_by_type(category).unwrap().is_empty());
    }
    assert!(flash.get_by_type("anything-else").unwrap().is_empty());
    assert!(flash.is_empty().unwrap());
}

#[test]
fn test_double_initialization_keeps_entries() {
    let mut session = SessionData::new();
    let config = FlashConfig::default();

    FlashStore::ensure_initialized(&mut session, &config).unwrap();
    FlashStore::new(&mut session, config.clone()).add_warning("W").unwrap();
    let before = session.clone();

    FlashStore::ensure_initialized(&mut session, &config).unwrap();
    FlashStore::ensure_initialized(&mut session, &config).unwrap();

    assert_eq!(session, before);
}

#[test]
fn test_insertion_order_is_preserved() {
    let mut session = SessionData::new();
    let mut flash = open(&mut session);
    flash.add("info", "A").unwrap();
    flash.add("info", "B").unwrap();

    assert_eq!(flash.get_by_type("info").unwrap(), vec![json!("A"), json!("B")]);
}

#[test]
fn test_clear_by_type_empties_category() {
    let mut session = SessionData::new();
    let mut flash = open(&mut session);
    flash.add("error", "X").unwrap();
    flash.clear_by_type("error").unwrap();

    assert!(flash.get_by_type("error").unwrap().is_empty());
}

#[test]
fn test_clear_all_empties_known_categories() {
    let mut session = SessionData::new();
    let mut flash = open(&mut session);
    flash.add("success", "S1").unwrap();
    flash.add("warning", "W1").unwrap();
    flash.clear_all().unwrap();

    assert!(flash.get_by_type("success").unwrap().is_empty());
    assert!(flash.get_by_type("warning").unwrap().is_empty());
}

#[test]
fn test_new_slot_leaves_old_bucket_untouched() {
    let mut session = SessionData::new();
    open(&mut session).add_info("under default").unwrap();

    let mut default_bucket = FlashBucket::new();
    default_bucket.push("info", json!("under default"));
    assert_eq!(open(&mut session).get().unwrap(), default_bucket);

    let custom = FlashConfig::new("_alerts").unwrap();
    let mut flash = FlashStore::open(&mut session, custom).unwrap();
    assert_eq!(flash.get().unwrap(), FlashBucket::new());
    flash.add_info("under custom").unwrap();
    assert_eq!(flash.get_by_type("info").unwrap(), vec![json!("under custom")]);

    let mut custom_bucket = FlashBucket::new();
    custom_bucket.push("info", json!("under custom"));
    assert_eq!(flash.get().unwrap(), custom_bucket);

    let flash = open(&mut session);
    assert_eq!(flash.get_by_type("info").unwrap(), vec![json!("under default")]);
    assert_eq!(flash.get().unwrap(), default_bucket);
}

#[test]
fn test_messages_survive_between_requests() {
    let mut session = SessionData::new();

    // POST handler queues messages and redirects
    {
        let mut flash = open(&mut session);
        flash.add_success("Saved").unwrap();
        flash.push(FlashMessage::info("Sync scheduled").with_title("Background")).unwrap();
    }

    // Session is persisted by the transport between requests
    let persisted = serde_json::to_string(&session).unwrap();
    let mut session: SessionData = serde_json::from_str(&persisted).unwrap();

    // GET handler renders and consumes
    let mut flash = open(&mut session);
    let info: Vec<FlashMessage> = flash.get_by_type_as(FlashCategory::Info).unwrap();
    assert_eq!(info[0].title.as_deref(), Some("Background"));
    assert_eq!(flash.take_by_type(FlashCategory::Success).unwrap(), vec![json!("Saved")]);

    flash.clear_all().unwrap();
    assert!(flash.is_empty().unwrap());
}

#[test]
fn test_shared_session_behind_lock() {
    let session = Arc::new(RwLock::new(SessionData::new()));
    FlashStore::ensure_initialized(&mut *session.write(), &FlashConfig::default()).unwrap();

    let handles: Vec<_> = (0..4)
        .map(|i| {
            let session = Arc::clone(&session);
            thread::spawn(move || {
                let mut guard = session.write();
                let mut flash = FlashStore::new(&mut *guard, FlashConfig::default());
                flash.add_info(i).unwrap();
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    let mut guard = session.write();
    let flash = open(&mut guard);
    let mut seen: Vec<i32> = flash.get_by_type_as(FlashCategory::Info).unwrap();
    seen.sort_unstable();
    assert_eq!(seen, vec![0, 1, 2, 3]);
}
