//! Facade-level delivery behavior: publish always, email only in the window.

mod common;

use chrono::{TimeZone, Utc};
use common::{marker_reply, sample_article, MemoryDashboard, MemoryMailer, Scripted, ScriptedProvider, ScriptedSource};
use marketbrief::domain::ports::delivery::MailSink;
use marketbrief::domain::values::send_window::SendWindow;
use marketbrief::MarketBrief;
use std::sync::Arc;
use std::time::Duration;

fn app(
    mailer: Option<Arc<MemoryMailer>>,
) -> (MarketBrief, Arc<MemoryDashboard>) {
    let source = ScriptedSource::new()
        .with("Gold market", Scripted::Article(sample_article("Gold up", "https://x/1", "Reuters", "s")))
        .with("Bitcoin", Scripted::Nothing);
    let provider = Arc::new(ScriptedProvider::replying(&marker_reply("Positive", "hold")));
    let dashboard = Arc::new(MemoryDashboard::default());

    let app = MarketBrief::with_ports(
        Arc::new(source),
        provider,
        dashboard.clone(),
        mailer.map(|m| m as Arc<dyn MailSink>),
        vec!["Gold market".to_string(), "Bitcoin".to_string()],
        Duration::from_millis(1),
        SendWindow::new(6),
        "https://dash.example/index.html".to_string(),
    );
    (app, dashboard)
}

#[tokio::test(start_paused = true)]
async fn test_dashboard_published_outside_send_window() {
    let mailer = Arc::new(MemoryMailer::working());
    let (app, dashboard) = app(Some(mailer.clone()));
    let outside = Utc.with_ymd_and_hms(2026, 8, 29, 14, 0, 0).unwrap();

    let report = app.run_once(outside, true).await.unwrap();

    assert!(report.dashboard_published);
    assert!(!report.email_sent);
    assert_eq!(report.records, 1);
    assert_eq!(dashboard.published.lock().unwrap().len(), 1);
    assert!(mailer.sent.lock().unwrap().is_empty());
}

#[tokio::test(start_paused = true)]
async fn test_email_sent_inside_window_with_dated_subject() {
    let mailer = Arc::new(MemoryMailer::working());
    let (app, _) = app(Some(mailer.clone()));
    let inside = Utc.with_ymd_and_hms(2026, 8, 29, 6, 15, 0).unwrap();

    let report = app.run_once(inside, true).await.unwrap();

    assert!(report.email_sent);
    let sent = mailer.sent.lock().unwrap();
    assert_eq!(sent.len(), 1);
    assert!(sent[0].0.contains("29-08-2026"));
    assert!(sent[0].1.contains("Gold up"));
}

#[tokio::test(start_paused = true)]
async fn test_failed_email_does_not_fail_the_run() {
    let (app, dashboard) = app(Some(Arc::new(MemoryMailer::broken())));
    let inside = Utc.with_ymd_and_hms(2026, 8, 29, 6, 0, 0).unwrap();

    let report = app.run_once(inside, true).await.unwrap();

    assert!(report.dashboard_published);
    assert!(!report.email_sent);
    assert_eq!(dashboard.published.lock().unwrap().len(), 1);
}

#[tokio::test(start_paused = true)]
async fn test_skip_email_flag_wins_over_window() {
    let mailer = Arc::new(MemoryMailer::working());
    let (app, _) = app(Some(mailer.clone()));
    let inside = Utc.with_ymd_and_hms(2026, 8, 29, 6, 0, 0).unwrap();

    let report = app.run_once(inside, false).await.unwrap();

    assert!(!report.email_sent);
    assert!(mailer.sent.lock().unwrap().is_empty());
}

#[tokio::test(start_paused = true)]
async fn test_report_serializes_run_counters() {
    let (app, _) = app(None);
    let now = Utc.with_ymd_and_hms(2026, 8, 29, 14, 0, 0).unwrap();

    let report = app.run_once(now, true).await.unwrap();
    let json = serde_json::to_value(&report).unwrap();

    assert_eq!(json["instruments"], 2);
    assert_eq!(json["records"], 1);
    assert_eq!(json["skipped"], 1);
    assert_eq!(json["dashboard_published"], true);
    assert_eq!(json["email_sent"], false);
}

#[tokio::test(start_paused = true)]
async fn test_missing_mailer_is_not_an_error() {
    let (app, dashboard) = app(None);
    let inside = Utc.with_ymd_and_hms(2026, 8, 29, 6, 0, 0).unwrap();

    let report = app.run_once(inside, true).await.unwrap();

    assert!(!report.email_sent);
    assert_eq!(dashboard.published.lock().unwrap().len(), 1);
}
