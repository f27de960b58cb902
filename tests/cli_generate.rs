//! End-to-end generation against a mocked completion endpoint.

mod common;

use common::TestContext;
use predicates::prelude::*;
use std::fs;

const DOCUMENT: &str = "CRH GÉNÉRÉ\n\nMOTIF\nDouleur thoracique.\n\nDIAGNOSTICS DE SORTIE\n- Angor instable.\n";

fn completion_body(content: &str) -> String {
    serde_json::json!({
        "choices": [{"message": {"role": "assistant", "content": content}}]
    })
    .to_string()
}

#[test]
fn guided_generates_displays_and_exports() {
    let ctx = TestContext::new();
    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", "/")
        .match_header("authorization", "Bearer sk-test")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(completion_body(DOCUMENT))
        .expect(1)
        .create();

    ctx.write_config(&server.url());
    ctx.write_secrets("sk-test");

    ctx.cli()
        .args(["guided", "--batch", "--main-diagnosis", "Angor instable"])
        .assert()
        .success()
        .stdout(predicate::str::contains("CRH GÉNÉRÉ"));

    mock.assert();

    // Round-trip: the exported file equals the displayed document verbatim.
    let exported = ctx.exported_files();
    assert_eq!(exported.len(), 1);
    let name = exported[0].file_name().unwrap().to_str().unwrap();
    assert!(name.starts_with("CRH_") && name.ends_with(".txt"), "unexpected name {}", name);
    assert_eq!(fs::read_to_string(&exported[0]).unwrap(), DOCUMENT);
}

#[test]
fn api_key_can_come_from_the_environment() {
    let ctx = TestContext::new();
    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", "/")
        .match_header("authorization", "Bearer sk-env")
        .with_status(200)
        .with_body(completion_body("ok"))
        .expect(1)
        .create();

    ctx.write_config(&server.url());

    ctx.cli()
        .args(["freeform", "--no-export"])
        .env("OPENAI_API_KEY", "sk-env")
        .write_stdin("Brouillon.\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("ok"));

    mock.assert();
    assert!(ctx.exported_files().is_empty());
}

#[test]
fn didactic_export_uses_its_own_prefix() {
    let ctx = TestContext::new();
    let mut server = mockito::Server::new();
    let _mock = server
        .mock("POST", "/")
        .with_status(200)
        .with_body(completion_body("Retour pédagogique."))
        .create();

    ctx.write_config(&server.url());
    ctx.write_secrets("sk-test");

    ctx.cli().args(["didactic"]).write_stdin("Brouillon de CRH.\n").assert().success();

    let exported = ctx.exported_files();
    assert_eq!(exported.len(), 1);
    let name = exported[0].file_name().unwrap().to_str().unwrap();
    assert!(name.starts_with("CRH_didactique_"), "unexpected name {}", name);
}

#[test]
fn missing_api_key_aborts_the_action() {
    let ctx = TestContext::new();
    let mut server = mockito::Server::new();
    let mock = server.mock("POST", "/").expect(0).create();

    ctx.write_config(&server.url());

    ctx.cli()
        .args(["guided", "--batch"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No API key found"));

    mock.assert();
    assert!(ctx.exported_files().is_empty());
}

#[test]
fn endpoint_failure_is_reported_and_nothing_is_exported() {
    let ctx = TestContext::new();
    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", "/")
        .with_status(500)
        .with_header("content-type", "application/json")
        .with_body(r#"{"error":{"message":"The model is overloaded"}}"#)
        .expect(1)
        .create();

    ctx.write_config(&server.url());
    ctx.write_secrets("sk-test");

    ctx.cli()
        .args(["guided", "--batch"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("The model is overloaded"));

    mock.assert();
    assert!(ctx.exported_files().is_empty());
}

#[test]
fn sampling_flags_are_forwarded_to_the_endpoint() {
    let ctx = TestContext::new();
    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", "/")
        .match_body(mockito::Matcher::PartialJson(serde_json::json!({
            "model": "gpt-4o",
            "max_tokens": 2500,
        })))
        .with_status(200)
        .with_body(completion_body("ok"))
        .expect(1)
        .create();

    ctx.write_config(&server.url());
    ctx.write_secrets("sk-test");

    ctx.cli()
        .args(["guided", "--batch", "--no-export", "--temperature", "0.7", "--max-tokens", "2500"])
        .assert()
        .success();

    mock.assert();
}

#[test]
fn output_dir_receives_the_export() {
    let ctx = TestContext::new();
    let out = ctx.work_dir().join("out");
    fs::create_dir_all(&out).unwrap();

    let mut server = mockito::Server::new();
    let _mock = server
        .mock("POST", "/")
        .with_status(200)
        .with_body(completion_body("Version libre."))
        .create();

    ctx.write_config(&server.url());
    ctx.write_secrets("sk-test");

    ctx.cli()
        .args(["freeform", "--output-dir", "out"])
        .write_stdin("Brouillon.\n")
        .assert()
        .success();

    assert!(ctx.exported_files().is_empty());
    let saved: Vec<_> = fs::read_dir(&out).unwrap().collect();
    assert_eq!(saved.len(), 1);
    let path = saved[0].as_ref().unwrap().path();
    assert!(path.file_name().unwrap().to_str().unwrap().starts_with("CRH_libre_"));
}
