//! End-to-end behaviour of the provisioning flow against an in-memory CRM

mod common;

use common::{settings, FailingConfirmer, FakeCrm, Request, ScriptedConfirmer};
use std::cell::Cell;
use twenty_setup::config::{Settings, WORKSPACE_ID_VAR};
use twenty_setup::provision::provision_fields;
use twenty_setup::runner::{run_with, AbortReason, Outcome, SetupSummary};
use twenty_setup::schema::{Catalog, ObjectType};

fn completed(outcome: Outcome) -> SetupSummary {
    match outcome {
        Outcome::Completed(summary) => summary,
        Outcome::Aborted(reason) => panic!("run aborted: {}", reason),
    }
}

#[tokio::test]
async fn test_missing_api_key_aborts_before_connecting() {
    let dir = tempfile::tempdir().unwrap();
    let fake = FakeCrm::new();
    let connected = Cell::new(false);
    let mut confirmer = ScriptedConfirmer::answering("yes");

    let missing_key = Settings::from_lookup(|name| {
        (name == WORKSPACE_ID_VAR).then(|| "ws-test".to_string())
    });
    let outcome = run_with(
        missing_key,
        |_| {
            connected.set(true);
            Ok(fake.clone())
        },
        &Catalog::standard(),
        &mut confirmer,
        dir.path(),
    )
    .await;

    assert!(matches!(
        outcome,
        Outcome::Aborted(AbortReason::MissingCredentials(ref msg)) if msg == "TWENTY_CRM_API_KEY not set"
    ));
    assert!(!connected.get());
    assert!(fake.requests().is_empty());
    assert_eq!(confirmer.asked, 0);
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[tokio::test]
async fn test_missing_workspace_aborts_before_connecting() {
    let dir = tempfile::tempdir().unwrap();
    let fake = FakeCrm::new();
    let mut confirmer = ScriptedConfirmer::answering("yes");

    let outcome = run_with(
        Settings::from_lookup(|_| None),
        |_| Ok(fake.clone()),
        &Catalog::standard(),
        &mut confirmer,
        dir.path(),
    )
    .await;

    assert!(matches!(outcome, Outcome::Aborted(AbortReason::MissingCredentials(_))));
    assert!(fake.requests().is_empty());
}

#[tokio::test]
async fn test_failed_connectivity_issues_no_mutations() {
    let dir = tempfile::tempdir().unwrap();
    let fake = FakeCrm::new().unreachable();
    let mut confirmer = ScriptedConfirmer::answering("yes");

    let outcome = run_with(
        Ok(settings()),
        |_| Ok(fake.clone()),
        &Catalog::standard(),
        &mut confirmer,
        dir.path(),
    )
    .await;

    assert!(matches!(
        outcome,
        Outcome::Aborted(AbortReason::ConnectionFailed(ref msg)) if msg.contains("401")
    ));
    assert_eq!(fake.requests(), vec![Request::Verify]);
    assert_eq!(confirmer.asked, 0);
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[tokio::test]
async fn test_client_construction_failure_aborts() {
    let dir = tempfile::tempdir().unwrap();
    let mut confirmer = ScriptedConfirmer::answering("yes");

    let outcome = run_with(
        Ok(settings()),
        |_| -> anyhow::Result<FakeCrm> { anyhow::bail!("no TLS backend") },
        &Catalog::standard(),
        &mut confirmer,
        dir.path(),
    )
    .await;

    assert!(matches!(outcome, Outcome::Aborted(AbortReason::ConnectionFailed(_))));
    assert_eq!(confirmer.asked, 0);
}

#[tokio::test]
async fn test_anything_but_yes_declines() {
    for answer in ["no", "y", "", "yes please", "ok"] {
        let dir = tempfile::tempdir().unwrap();
        let fake = FakeCrm::new();
        let mut confirmer = ScriptedConfirmer::answering(answer);

        let outcome = run_with(
            Ok(settings()),
            |_| Ok(fake.clone()),
            &Catalog::standard(),
            &mut confirmer,
            dir.path(),
        )
        .await;

        assert!(
            matches!(outcome, Outcome::Aborted(AbortReason::Declined)),
            "answer {:?} should decline",
            answer
        );
        assert_eq!(confirmer.asked, 1);
        assert!(fake.mutations().is_empty(), "answer {:?} mutated the CRM", answer);
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }
}

#[tokio::test]
async fn test_unreadable_confirmation_declines() {
    let dir = tempfile::tempdir().unwrap();
    let fake = FakeCrm::new();
    let mut confirmer = FailingConfirmer::default();

    let outcome = run_with(
        Ok(settings()),
        |_| Ok(fake.clone()),
        &Catalog::standard(),
        &mut confirmer,
        dir.path(),
    )
    .await;

    assert!(matches!(outcome, Outcome::Aborted(AbortReason::Declined)));
    assert_eq!(confirmer.asked, 1);
    assert_eq!(fake.requests(), vec![Request::Verify]);
    assert!(fake.mutations().is_empty());
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[tokio::test]
async fn test_yes_is_case_insensitive_and_trimmed() {
    let dir = tempfile::tempdir().unwrap();
    let fake = FakeCrm::new();
    let mut confirmer = ScriptedConfirmer::answering("  YeS \n");
    let catalog = Catalog::standard();

    let summary = completed(
        run_with(Ok(settings()), |_| Ok(fake.clone()), &catalog, &mut confirmer, dir.path()).await,
    );

    assert_eq!(summary.contact.counts(), (catalog.contact_fields.len(), 0));
    assert_eq!(summary.deal.counts(), (catalog.deal_fields.len(), 0));
    assert!(summary.pipeline_created);
    assert_eq!(summary.error_count(), 0);
    assert!(summary.export_path.is_some());
}

#[tokio::test]
async fn test_requests_follow_catalog_order() {
    let dir = tempfile::tempdir().unwrap();
    let fake = FakeCrm::new();
    let mut confirmer = ScriptedConfirmer::answering("yes");
    let catalog = Catalog::standard();

    completed(run_with(Ok(settings()), |_| Ok(fake.clone()), &catalog, &mut confirmer, dir.path()).await);

    let requests = fake.requests();
    let expected_len = 1 + catalog.contact_fields.len() + catalog.deal_fields.len() + 1;
    assert_eq!(requests.len(), expected_len);
    assert_eq!(requests[0], Request::Verify);

    let field_names: Vec<(ObjectType, String)> = requests
        .iter()
        .filter_map(|r| match r {
            Request::CreateField { object, body } => {
                Some((*object, body["name"].as_str().unwrap().to_string()))
            }
            _ => None,
        })
        .collect();
    let expected: Vec<(ObjectType, String)> = catalog
        .contact_fields
        .iter()
        .map(|f| (ObjectType::Contact, f.name.clone()))
        .chain(catalog.deal_fields.iter().map(|f| (ObjectType::Deal, f.name.clone())))
        .collect();
    assert_eq!(field_names, expected);

    assert!(matches!(requests.last(), Some(Request::CreatePipeline { .. })));
}

#[tokio::test]
async fn test_pipeline_body_keeps_stage_order_and_probabilities() {
    let dir = tempfile::tempdir().unwrap();
    let fake = FakeCrm::new();
    let mut confirmer = ScriptedConfirmer::answering("yes");
    let catalog = Catalog::standard();

    completed(run_with(Ok(settings()), |_| Ok(fake.clone()), &catalog, &mut confirmer, dir.path()).await);

    let body = fake
        .requests()
        .into_iter()
        .find_map(|r| match r {
            Request::CreatePipeline { body } => Some(body),
            _ => None,
        })
        .expect("pipeline request");

    assert_eq!(body["name"], "Sales Pipeline - Anclora");
    let stages = body["stages"].as_array().unwrap();
    assert_eq!(stages.len(), catalog.pipeline.stages.len());
    for (sent, declared) in stages.iter().zip(&catalog.pipeline.stages) {
        assert_eq!(sent["name"], declared.name.as_str());
        assert_eq!(sent["probability"], declared.probability);
        assert_eq!(sent["color"], declared.color.as_str());
    }
}

#[tokio::test]
async fn test_field_failures_do_not_stop_the_batch() {
    let fake = FakeCrm::new()
        .reject_field("leadScore")
        .reject_field("whatsapp")
        .reject_field("dataSource");
    let fields = Catalog::standard().contact_fields;
    let n = fields.len();

    let report = provision_fields(&fake, ObjectType::Contact, &fields).await;

    assert_eq!(report.success_count() + report.error_count(), n);
    assert_eq!(report.success_count(), n - 3);
    assert_eq!(report.attempted(), n);
    assert_eq!(fake.mutations().len(), n);

    let failed: Vec<&str> = report.failed.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(failed, vec!["leadScore", "whatsapp", "dataSource"]);
    assert_eq!(report.failed[0].error, "HTTP 404 Not Found");
    assert_eq!(report.failed[1].label, "WhatsApp");
}

#[tokio::test]
async fn test_pipeline_failure_is_reported_not_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let fake = FakeCrm::new().reject_pipeline().reject_field("dealType");
    let mut confirmer = ScriptedConfirmer::answering("yes");

    let summary = completed(
        run_with(Ok(settings()), |_| Ok(fake.clone()), &Catalog::standard(), &mut confirmer, dir.path())
            .await,
    );

    assert!(!summary.pipeline_created);
    assert_eq!(summary.deal.error_count(), 1);
    assert_eq!(summary.error_count(), 2);
    assert!(summary.export_path.is_some());
}

#[tokio::test]
async fn test_export_happens_when_everything_fails() {
    let dir = tempfile::tempdir().unwrap();
    let fake = FakeCrm::new().reject_all();
    let mut confirmer = ScriptedConfirmer::answering("yes");
    let catalog = Catalog::standard();

    let summary = completed(
        run_with(Ok(settings()), |_| Ok(fake.clone()), &catalog, &mut confirmer, dir.path()).await,
    );

    assert_eq!(summary.contact.counts(), (0, catalog.contact_fields.len()));
    assert_eq!(summary.deal.counts(), (0, catalog.deal_fields.len()));
    assert!(!summary.pipeline_created);

    let path = summary.export_path.expect("export written");
    assert!(path.starts_with(dir.path()));
    assert!(path.exists());
    assert_eq!(summary.export_error, None);
}

#[tokio::test]
async fn test_export_failure_is_recorded() {
    let dir = tempfile::tempdir().unwrap();
    let missing_dir = dir.path().join("does-not-exist");
    let fake = FakeCrm::new();
    let mut confirmer = ScriptedConfirmer::answering("yes");

    let summary = completed(
        run_with(Ok(settings()), |_| Ok(fake.clone()), &Catalog::standard(), &mut confirmer, &missing_dir)
            .await,
    );

    assert!(summary.export_path.is_none());
    assert!(summary.export_error.unwrap().contains("Failed to write configuration export"));
}
