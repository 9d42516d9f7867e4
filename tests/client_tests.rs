// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::thread::{self, JoinHandle};

use budget_tracker::client::{ApiClient, Collections, Resource};
use budget_tracker::error::ClientError;
use budget_tracker::models::{NewSavingsAccount, SavingsAccount, Transaction};
use budget_tracker::page::LoadState;
use budget_tracker::pages::expenses::ExpensesPage;

/// Talks to the local responder directly, whatever proxy the environment sets.
fn client(base: &str) -> ApiClient {
    let http = reqwest::blocking::Client::builder()
        .no_proxy()
        .build()
        .unwrap();
    ApiClient::with_http(base, http)
}

/// Answers exactly one request with `status` and `body`; the handle yields
/// the raw request it received.
fn respond_once(status: &'static str, body: &'static str) -> (String, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    let handle = thread::spawn(move || {
        let (mut stream, _) = listener.accept().unwrap();
        let request = read_request(&mut stream);
        let resp = format!(
            "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status,
            body.len(),
            body
        );
        stream.write_all(resp.as_bytes()).unwrap();
        stream.flush().unwrap();
        request
    });
    (format!("http://{}", addr), handle)
}

fn read_request(stream: &mut TcpStream) -> String {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 1024];
    loop {
        let n = stream.read(&mut chunk).unwrap();
        if n == 0 {
            break;
        }
        buf.extend_from_slice(&chunk[..n]);
        if let Some(end) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
            let head = String::from_utf8_lossy(&buf[..end]).to_lowercase();
            let len = head
                .lines()
                .find_map(|l| l.strip_prefix("content-length:"))
                .and_then(|v| v.trim().parse::<usize>().ok())
                .unwrap_or(0);
            if buf.len() >= end + 4 + len {
                break;
            }
        }
    }
    String::from_utf8_lossy(&buf).to_string()
}

#[test]
fn list_keeps_backend_order() {
    let (base, server) = respond_once(
        "200 OK",
        r#"[{"id":2,"date":"2025-01-02","description":"B","category":"c","subcategory":"s","amount":2.5,"recurring":null,"transaction_type":"expense"},
            {"id":1,"date":"2025-01-01","description":"A","category":"c","subcategory":"s","amount":1,"recurring":"daily","transaction_type":"income"}]"#,
    );
    let client = client(&base);
    let txns: Vec<Transaction> = client.list(Resource::Transactions).unwrap();
    assert_eq!(txns.len(), 2);
    assert_eq!(txns[0].description.as_deref(), Some("B"));
    assert_eq!(txns[1].description.as_deref(), Some("A"));

    let request = server.join().unwrap();
    assert!(request.starts_with("GET /api/transactions HTTP/1.1"));
}

#[test]
fn create_posts_json() {
    let (base, server) = respond_once(
        "201 CREATED",
        r#"{"id":"a1b2","name":"Car","amount":100.0,"goal":500.0,"difference":400.0}"#,
    );
    let client = client(&format!("{}/", base));
    let created: SavingsAccount = client
        .create(
            Resource::Savings,
            &NewSavingsAccount {
                name: "Car".into(),
                amount: 100.0,
                goal: Some(500.0),
                date: None,
            },
        )
        .unwrap();
    assert_eq!(created.id.to_string(), "a1b2");
    assert_eq!(created.difference(), Some(400.0));

    let request = server.join().unwrap().to_lowercase();
    assert!(request.starts_with("post /api/savings http/1.1"));
    assert!(request.contains("content-type: application/json"));
    assert!(request.ends_with(r#"{"name":"car","amount":100.0,"goal":500.0}"#));
}

#[test]
fn error_status_is_a_failure() {
    let (base, server) = respond_once("500 INTERNAL SERVER ERROR", r#"{"error":"Internal server error"}"#);
    let client = client(&base);
    let err = client.list::<Transaction>(Resource::Transactions).unwrap_err();
    assert_eq!(
        err,
        ClientError::Status {
            url: format!("{}/api/transactions", base),
            status: 500
        }
    );
    server.join().unwrap();
}

#[test]
fn malformed_body_is_a_parse_failure() {
    let (base, server) = respond_once("200 OK", "<html>oops</html>");
    let client = client(&base);
    let err = client.list::<Transaction>(Resource::Transactions).unwrap_err();
    assert!(matches!(err, ClientError::Parse { .. }));
    server.join().unwrap();
}

#[test]
fn unreachable_backend_is_a_transport_failure() {
    let port = {
        let l = TcpListener::bind("127.0.0.1:0").unwrap();
        l.local_addr().unwrap().port()
    };
    let client = client(&format!("http://127.0.0.1:{}", port));
    let err = client.list::<Transaction>(Resource::Savings).unwrap_err();
    assert!(matches!(err, ClientError::Transport { .. }));
}

#[test]
fn page_over_http_surfaces_load_error() {
    let (base, server) = respond_once("404 NOT FOUND", "{}");
    let client = client(&base);
    let mut page = ExpensesPage::new();
    page.mount(&client);
    assert!(matches!(page.page.state(), LoadState::Error(_)));
    assert_eq!(
        page.render(),
        format!("Error: Network response was not ok (404) from {}/api/transactions", base)
    );
    server.join().unwrap();
}
