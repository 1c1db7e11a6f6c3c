use folio_core::{ContentSource, LoadError};
use folio_runtime::{ContactClient, Error, HttpSource, Site};
use folio_types::ContactMessage;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::sync::oneshot;

/// Serve exactly one request with a canned response and hand the raw
/// request back.
async fn serve_once(status: &str, body: &str) -> (String, oneshot::Receiver<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let response = format!(
        "HTTP/1.1 {}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{}",
        status,
        body.len(),
        body
    );
    let (tx, rx) = oneshot::channel();

    tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut request = Vec::new();
        let mut buf = [0u8; 4096];
        loop {
            let n = socket.read(&mut buf).await.unwrap();
            if n == 0 {
                break;
            }
            request.extend_from_slice(&buf[..n]);
            if request_complete(&request) {
                break;
            }
        }
        socket.write_all(response.as_bytes()).await.unwrap();
        socket.shutdown().await.ok();
        let _ = tx.send(String::from_utf8_lossy(&request).into_owned());
    });

    (format!("http://{}", addr), rx)
}

fn request_complete(raw: &[u8]) -> bool {
    let text = String::from_utf8_lossy(raw);
    let Some(header_end) = text.find("\r\n\r\n") else {
        return false;
    };
    let length = text[..header_end]
        .lines()
        .find_map(|line| {
            let (name, value) = line.split_once(':')?;
            name.eq_ignore_ascii_case("content-length")
                .then(|| value.trim().parse::<usize>().ok())
                .flatten()
        })
        .unwrap_or(0);
    raw.len() >= header_end + 4 + length
}

fn message() -> ContactMessage {
    ContactMessage {
        name: "Ada".into(),
        email: "ada@example.com".into(),
        subject: "Hello".into(),
        message: "Nice work".into(),
    }
}

#[tokio::test]
async fn http_source_loads_projects() -> anyhow::Result<()> {
    let (base, request) = serve_once(
        "200 OK",
        r#"[{"id": "a", "title": "Shop", "category": "Web", "thumbnail": "/a.png"}]"#,
    )
    .await;
    let site = Site::new(HttpSource::new(format!("{}/data/", base))?);

    let projects = site.projects().await?;
    assert_eq!(projects.len(), 1);
    assert_eq!(projects[0].title, "Shop");

    let raw = request.await?;
    assert!(raw.starts_with("GET /data/projects.json HTTP/1.1"));
    Ok(())
}

#[tokio::test]
async fn http_source_maps_statuses() -> anyhow::Result<()> {
    let (base, _) = serve_once("404 Not Found", "{}").await;
    let err = HttpSource::new(base)?.fetch("summary.json").await.unwrap_err();
    assert!(matches!(err, LoadError::NotFound(url) if url.ends_with("/summary.json")));

    let (base, _) = serve_once("503 Service Unavailable", "{}").await;
    let err = HttpSource::new(base)?.fetch("summary.json").await.unwrap_err();
    assert!(matches!(err, LoadError::Status { status: 503, .. }));
    Ok(())
}

#[tokio::test]
async fn contact_posts_json() -> anyhow::Result<()> {
    let (base, request) = serve_once("200 OK", r#"{"ok": true}"#).await;
    let client = ContactClient::new(format!("{}/f/abc", base))?;
    client.submit(&message()).await?;

    let raw = request.await?;
    assert!(raw.starts_with("POST /f/abc HTTP/1.1"));
    assert!(raw.to_ascii_lowercase().contains("accept: application/json"));
    assert!(raw.contains(r#""email":"ada@example.com""#));
    Ok(())
}

#[tokio::test]
async fn contact_rejection_surfaces_endpoint_error() -> anyhow::Result<()> {
    let (base, _) = serve_once("422 Unprocessable Entity", r#"{"error": "Invalid email"}"#).await;
    let client = ContactClient::new(base)?;

    match client.submit(&message()).await {
        Err(Error::Submission { status, message }) => {
            assert_eq!(status, 422);
            assert_eq!(message, "Invalid email");
        }
        other => panic!("unexpected result: {:?}", other),
    }
    Ok(())
}

#[tokio::test]
async fn contact_rejection_without_error_field() -> anyhow::Result<()> {
    let (base, _) = serve_once("500 Internal Server Error", "oops").await;
    let client = ContactClient::new(base)?;

    let err = client.submit(&message()).await.unwrap_err();
    assert_eq!(err.to_string(), "Submission rejected (500): Submission failed");
    Ok(())
}
