mod support;

use std::sync::atomic::Ordering;

use portal_core::{AuthMode, GatewayState};
use portal_gateway::{GatewayError, demo};
use portal_workspace::{
    FileUpload, ListFilesRequest, MailError, MailMessage, Service, ServiceError, UploadMetadata,
    mime,
};
use pretty_assertions::assert_eq;
use support::{FakeProvider, Harness, assert_session_consistent, harness};

async fn signed_in(provider: FakeProvider) -> Harness {
    let h = harness(provider);
    h.gateway.initialize().await.unwrap();
    h.gateway.sign_in().await.unwrap();
    h
}

fn upload() -> FileUpload {
    FileUpload {
        metadata: UploadMetadata::in_root("lab-notes.txt"),
        content: b"observations".to_vec(),
    }
}

fn message() -> MailMessage {
    MailMessage::new("parent@example.com", "Field trip", "<p>Bring a jacket.</p>")
}

#[tokio::test]
async fn signed_out_operations_are_rejected_without_network() {
    for provider in [FakeProvider::default(), FakeProvider::failing_init()] {
        let h = harness(provider);
        h.gateway.initialize().await.unwrap();

        let g = &h.gateway;
        assert!(matches!(
            g.list_files(&ListFilesRequest::default()).await,
            Err(GatewayError::Unauthenticated)
        ));
        assert!(matches!(g.upload_file(upload()).await, Err(GatewayError::Unauthenticated)));
        assert!(matches!(g.list_courses().await, Err(GatewayError::Unauthenticated)));
        assert!(matches!(
            g.list_course_roster("c-1").await,
            Err(GatewayError::Unauthenticated)
        ));
        assert!(matches!(g.send_mail(&message()).await, Err(GatewayError::Unauthenticated)));

        assert_eq!(h.workspace.calls(), 0);
        assert_session_consistent(&h.session);
    }
}

#[tokio::test]
async fn operations_before_initialize_are_unauthenticated() {
    let h = harness(FakeProvider::default());
    assert!(matches!(
        h.gateway.list_courses().await,
        Err(GatewayError::Unauthenticated)
    ));
    assert_eq!(h.workspace.calls(), 0);
}

#[tokio::test]
async fn demo_fallback_serves_fixture_files() {
    let h = signed_in(FakeProvider::failing_init()).await;
    assert_eq!(h.gateway.mode(), Some(AuthMode::Demo));

    let files = h.gateway.list_files(&ListFilesRequest::default()).await.unwrap();

    assert_eq!(files, demo::files(&ListFilesRequest::default()));
    assert!(!files.is_empty());
    assert_eq!(h.workspace.calls(), 0);
}

#[tokio::test]
async fn demo_operations_are_deterministic() {
    let h = signed_in(FakeProvider::failing_init()).await;
    let g = &h.gateway;

    assert_eq!(g.list_courses().await.unwrap(), g.list_courses().await.unwrap());
    assert_eq!(
        g.list_course_roster(demo::DEMO_COURSE_ID).await.unwrap(),
        demo::roster(demo::DEMO_COURSE_ID)
    );
    assert_eq!(g.upload_file(upload()).await.unwrap().name, "lab-notes.txt");
    assert_eq!(g.send_mail(&message()).await.unwrap(), demo::sent());
    assert_eq!(h.workspace.calls(), 0);
}

#[tokio::test]
async fn live_operations_forward_to_workspace() {
    let h = signed_in(FakeProvider::default()).await;
    let g = &h.gateway;

    let files = g.list_files(&ListFilesRequest::with_page_size(5)).await.unwrap();
    assert_eq!(files.len(), 2);
    assert_eq!(files[0].id, "live-0");

    assert_eq!(g.upload_file(upload()).await.unwrap().id, "live-upload");
    assert_eq!(g.list_courses().await.unwrap()[0].id, "live-course");
    assert_eq!(g.list_course_roster("c-9").await.unwrap()[0].course_id, "c-9");
    assert_eq!(g.send_mail(&message()).await.unwrap().id, "live-msg");

    assert_eq!(h.workspace.calls(), 5);
}

#[tokio::test]
async fn live_mail_is_sent_as_encoded_envelope() {
    let h = signed_in(FakeProvider::default()).await;

    h.gateway.send_mail(&message()).await.unwrap();

    let raw = h.workspace.last_raw.lock().unwrap().clone().unwrap();
    assert_eq!(mime::decode_raw(&raw).unwrap(), message());
}

#[tokio::test]
async fn invalid_mail_fails_in_both_modes() {
    for provider in [FakeProvider::default(), FakeProvider::failing_init()] {
        let h = signed_in(provider).await;
        let bad = MailMessage::new("a@b.c\r\nBcc: x@y.z", "Hi", "body");

        let err = h.gateway.send_mail(&bad).await.unwrap_err();

        assert!(matches!(
            err,
            GatewayError::InvalidMail(MailError::HeaderInjection { .. })
        ));
        assert_eq!(h.workspace.calls(), 0);
    }
}

#[tokio::test]
async fn remote_failure_leaves_session_intact() {
    let h = signed_in(FakeProvider::default()).await;
    h.workspace.fail.store(true, Ordering::SeqCst);

    let err = h.gateway.list_courses().await.unwrap_err();

    match err {
        GatewayError::RemoteService { service, source } => {
            assert_eq!(service, Service::Classroom);
            assert!(matches!(source, ServiceError::Api { status: 500, .. }));
        }
        other => panic!("expected RemoteService, got {other:?}"),
    }
    assert!(h.session.is_signed_in());
    assert_eq!(h.gateway.state(), GatewayState::SignedIn(AuthMode::Live));
    assert_eq!(h.workspace.calls(), 1);
}

#[tokio::test]
async fn slow_remote_call_times_out() {
    let h = signed_in(FakeProvider::default()).await;
    h.workspace.hang.store(true, Ordering::SeqCst);

    let err = h
        .gateway
        .list_files(&ListFilesRequest::default())
        .await
        .unwrap_err();

    assert_eq!(err.service(), Some(Service::Drive));
    assert!(matches!(
        err,
        GatewayError::RemoteService {
            source: ServiceError::Timeout { after_secs: 1 },
            ..
        }
    ));
    assert!(h.session.is_signed_in());
}

#[tokio::test]
async fn expired_credential_signs_the_session_out() {
    let h = signed_in(FakeProvider::default()).await;
    h.provider.token_expired.store(true, Ordering::SeqCst);

    let err = h.gateway.list_courses().await.unwrap_err();

    assert!(matches!(err, GatewayError::Credential(_)));
    assert!(!h.session.is_signed_in());
    assert_eq!(h.gateway.state(), GatewayState::SignedOut(AuthMode::Live));
    assert_eq!(h.workspace.calls(), 0);
    assert_session_consistent(&h.session);
}
