//! Black-box walk through the console as the shell would drive it.

use goldline_auth::{LoginError, Session};
use goldline_catalog::CatalogItem;
use goldline_console::{Console, ConsoleConfig, ConsoleEvent};
use goldline_core::{CredentialError, DomainError, ViolationKind};
use goldline_events::Event;

fn console() -> Console<goldline_auth::FixedCredential> {
    Console::from_config(&ConsoleConfig::default()).expect("seeded console")
}

#[test]
fn catalog_editor_round_trip() {
    let mut c = console();
    let sub = c.subscribe();

    // Rejected form: every bad field comes back at once.
    let err = c
        .add_item(CatalogItem::new("", "", 0.0, ""))
        .expect_err("empty form must be rejected");
    let DomainError::Validation(v) = err else {
        panic!("expected validation error");
    };
    assert_eq!(v.violations().len(), 4);

    // Replace an article: remove, then add under the same id.
    c.remove_item("ART005").expect("ART005 is seeded");
    c.add_item(CatalogItem::new("ART005", "AU 999", 2.4, "Подвеска"))
        .expect("id is free again");

    let ids: Vec<_> = c.list_items().iter().map(|i| i.id.as_str()).collect();
    assert_eq!(ids.len(), 20);
    assert_eq!(ids.last(), Some(&"ART005"));
    assert!(!ids[..19].contains(&"ART005"));

    let dup = c
        .add_item(CatalogItem::new("ART005", "AU 999", 2.4, "Подвеска"))
        .expect_err("duplicate id");
    assert!(matches!(dup, DomainError::Validation(ref v) if v.has("id", ViolationKind::Duplicate)));

    let events = sub.drain();
    assert_eq!(events.len(), 2);
    assert!(matches!(&events[0], ConsoleEvent::CatalogItemRemoved { id, .. } if id == "ART005"));
    assert!(matches!(&events[1], ConsoleEvent::CatalogItemAdded { id, .. } if id == "ART005"));
}

#[test]
fn sales_dashboard_feeds_charts_in_display_order() {
    let c = console();
    let d = c.dashboard();

    assert_eq!(d.daily.len(), 5);
    assert_eq!(d.channels.labels(), vec!["online", "offline"]);
    let share_sum: f64 = d.channels.values().iter().sum();
    assert!((share_sum - 100.0).abs() < 1e-9);
    assert_eq!(d.hourly.labels().first(), Some(&"9:00"));

    let json = serde_json::to_value(&d).expect("dashboard serializes");
    assert_eq!(json["channels"][0]["label"], "online");
    assert_eq!(json["summary"]["total_amount"], 90_000);
}

#[test]
fn login_logout_cycle() {
    let mut c = console();
    let sub = c.subscribe();

    match c.attempt_login("", "") {
        Err(LoginError::Validation(v)) => {
            assert!(v.violations().len() >= 2);
            assert!(v.has("login", ViolationKind::Empty));
            assert!(v.has("password", ViolationKind::Empty));
        }
        other => panic!("unexpected {other:?}"),
    }
    assert_eq!(
        c.attempt_login("AlexSmirnov", "wrongpw"),
        Err(LoginError::InvalidCredentials(CredentialError))
    );
    assert_eq!(c.current_session(), &Session::Anonymous);

    let profile = c.attempt_login("AlexSmirnov", "pass123").expect("known account");
    assert_eq!(profile.role.as_str(), "Старший менеджер");
    assert!(c.current_session().is_authenticated());

    c.logout();
    c.logout();
    assert_eq!(c.current_session(), &Session::Anonymous);

    let kinds: Vec<_> = sub.drain().iter().map(Event::event_type).collect();
    assert_eq!(kinds, vec!["session.started", "session.ended"]);
}

#[test]
fn login_error_folds_into_domain_error() {
    let mut c = console();
    let err: DomainError = c.attempt_login("AlexSmirnov", "wrongpw").unwrap_err().into();
    assert_eq!(err.to_string(), "invalid credentials");
}

#[test]
fn profile_screen_shows_own_orders_only_while_signed_in() {
    let mut c = console();
    assert!(c.profile_view().is_none());

    c.attempt_login("AlexSmirnov", "pass123").expect("known account");
    let view = c.profile_view().expect("signed in");
    let json = serde_json::to_value(&view).expect("profile serializes");

    assert_eq!(json["profile"]["display_name"], "Алексей Смирнов");
    assert_eq!(json["monthly_sales"][0]["label"], "2025-01");
    assert_eq!(json["recent_orders"][0]["id"], "ORD-7651");
    assert_eq!(json["recent_orders"][2]["status"], "processing");

    c.logout();
    assert!(c.profile_view().is_none());
}
