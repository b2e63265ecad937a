use std::path::Path;
use std::sync::Arc;

use certa_audit::desk::ReviewDesk;
use certa_audit::persistence::{LoadedTrail, Mirror, TrailPersistence, reconcile};
use certa_audit::session::AuditSession;
use certa_audit::trail::AuditTrail;
use certa_catalog::Catalog;
use certa_core::models::record::{AuditRecord, ReviewResult};
use uuid::Uuid;

fn record(disease_id: u32, result: ReviewResult) -> AuditRecord {
    record_at(disease_id, result, "2024-05-01T08:30:00.123456Z")
}

fn record_at(disease_id: u32, result: ReviewResult, timestamp: &str) -> AuditRecord {
    AuditRecord {
        id: Uuid::new_v4(),
        timestamp: timestamp.parse().unwrap(),
        applicant_name: "李伟".to_string(),
        applicant_id_number: "360102199001011234".to_string(),
        disease_id,
        disease_name: format!("{disease_id}. 测试病种"),
        result,
        criteria_met: vec!["1".into()],
        notes: "备注：复核".to_string(),
    }
}

#[tokio::test]
async fn missing_file_loads_as_empty_trail() {
    let dir = tempfile::tempdir().unwrap();
    let trail = TrailPersistence::local(dir.path().join("trail.json")).load().await.trail;
    assert!(trail.is_empty());
}

#[tokio::test]
async fn flush_then_load_round_trips() {
    let dir = tempfile::tempdir().unwrap();
    let persistence = TrailPersistence::local(dir.path().join("nested/audit/trail.json"));
    let trail = AuditTrail::from_records(vec![record(7, ReviewResult::Pass), record(2, ReviewResult::Fail)]);

    assert_eq!(persistence.flush(&trail).await.unwrap(), Mirror::Disabled);
    let loaded = persistence.load().await.trail;
    assert_eq!(loaded, trail);
    assert!(!dir.path().join("nested/audit/trail.json.tmp").exists());
}

#[tokio::test]
async fn load_then_save_without_appends_is_byte_identical() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("trail.json");
    let persistence = TrailPersistence::local(&path);
    persistence
        .flush(&AuditTrail::from_records(vec![record(7, ReviewResult::Pass), record(13, ReviewResult::Fail)]))
        .await
        .unwrap();
    let before = std::fs::read(&path).unwrap();

    let loaded = persistence.load().await.trail;
    persistence.flush(&loaded).await.unwrap();
    let after = std::fs::read(&path).unwrap();

    assert_eq!(before, after);
}

#[tokio::test]
async fn corrupt_file_loads_as_empty_and_is_moved_aside() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("trail.json");
    std::fs::write(&path, b"{ not a trail").unwrap();

    let trail = TrailPersistence::local(&path).load().await.trail;
    assert!(trail.is_empty());
    assert!(!path.exists());

    let aside: Vec<_> = std::fs::read_dir(dir.path())
        .unwrap()
        .filter_map(Result::ok)
        .filter(|e| e.file_name().to_string_lossy().contains("corrupt"))
        .collect();
    assert_eq!(aside.len(), 1);
    assert_eq!(std::fs::read(aside[0].path()).unwrap(), b"{ not a trail");
}

/// An S3 endpoint nothing listens on: every call fails fast.
fn unreachable_s3() -> aws_sdk_s3::Client {
    use aws_sdk_s3::config::retry::RetryConfig;
    use aws_sdk_s3::config::{BehaviorVersion, Credentials, Region};

    let config = aws_sdk_s3::Config::builder()
        .behavior_version(BehaviorVersion::latest())
        .region(Region::new("us-east-1"))
        .credentials_provider(Credentials::new("test", "test", None, None, "certa-tests"))
        .endpoint_url("http://127.0.0.1:9")
        .force_path_style(true)
        .retry_config(RetryConfig::disabled())
        .build();
    aws_sdk_s3::Client::from_conf(config)
}

#[test]
fn local_copy_ahead_of_remote_wins_and_marks_remote_stale() {
    let older = record_at(7, ReviewResult::Pass, "2024-05-01T08:00:00Z");
    let newer = record_at(2, ReviewResult::Fail, "2024-05-02T08:00:00Z");
    let local = AuditTrail::from_records(vec![newer.clone(), older.clone()]);
    let remote = AuditTrail::from_records(vec![older]);

    let loaded = reconcile(Some(local.clone()), Some(remote));
    assert_eq!(loaded.trail, local);
    assert!(loaded.remote_stale);
    assert!(!loaded.local_stale);
}

#[test]
fn records_only_in_remote_are_merged_newest_first() {
    let a = record_at(7, ReviewResult::Pass, "2024-05-01T08:00:00Z");
    let b = record_at(13, ReviewResult::Fail, "2024-05-02T08:00:00Z");
    let c = record_at(2, ReviewResult::Pass, "2024-05-03T08:00:00Z");
    let local = AuditTrail::from_records(vec![c.clone(), a.clone()]);
    let remote = AuditTrail::from_records(vec![b.clone(), a.clone()]);

    let loaded = reconcile(Some(local), Some(remote));
    let ids: Vec<Uuid> = loaded.trail.records().iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![c.id, b.id, a.id]);
    assert!(loaded.local_stale);
    assert!(loaded.remote_stale);
}

#[test]
fn identical_copies_need_no_sync() {
    let trail = AuditTrail::from_records(vec![record(7, ReviewResult::Pass)]);
    let loaded = reconcile(Some(trail.clone()), Some(trail.clone()));
    assert_eq!(
        loaded,
        LoadedTrail {
            trail,
            local_stale: false,
            remote_stale: false
        }
    );
}

#[test]
fn unreadable_remote_is_not_marked_stale() {
    let trail = AuditTrail::from_records(vec![record(7, ReviewResult::Pass)]);
    let loaded = reconcile(Some(trail.clone()), None);
    assert_eq!(loaded.trail, trail);
    assert!(!loaded.remote_stale);

    let loaded = reconcile(None, Some(trail.clone()));
    assert_eq!(loaded.trail, trail);
    assert!(loaded.local_stale);
}

#[tokio::test]
async fn failed_upload_is_reported_and_local_copy_still_loads() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("trail.json");
    let persistence = TrailPersistence::local(&path).with_s3(unreachable_s3(), "certa", "audit/trail.json");
    let trail = AuditTrail::from_records(vec![record(7, ReviewResult::Pass)]);

    assert_eq!(persistence.flush(&trail).await.unwrap(), Mirror::Failed);

    let loaded = persistence.load().await;
    assert_eq!(loaded.trail, trail);
}

async fn open_mirrored_desk(path: &Path) -> ReviewDesk {
    let persistence = TrailPersistence::local(path).with_s3(unreachable_s3(), "certa", "audit/trail.json");
    ReviewDesk::open(AuditSession::new(Arc::new(Catalog::jiangxi().clone())), persistence).await
}

#[tokio::test]
async fn desk_keeps_a_failed_upload_pending_across_restarts() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("trail.json");
    let mut desk = open_mirrored_desk(&path).await;
    let session = desk.session_mut();
    session.select_disease(7).unwrap();
    session.toggle_criterion("1").unwrap();
    session.toggle_criterion("3").unwrap();
    session.set_applicant_name("Li Wei").unwrap();
    session.set_applicant_id_number("360102199001011234").unwrap();

    let receipt = desk.submit().await.unwrap();
    assert!(receipt.persisted);
    assert!(desk.is_remote_dirty());
    assert!(desk.is_dirty());

    // Still failing: stays pending, nothing lost.
    desk.flush().await.unwrap();
    assert!(desk.is_remote_dirty());

    let reopened = open_mirrored_desk(&path).await;
    assert_eq!(reopened.trail().len(), 1);
    assert_eq!(reopened.trail().records()[0].id, receipt.record.id);
}
