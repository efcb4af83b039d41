use tokio::net::UnixListener;

#[tokio::main]
async fn main() -> Result<(), std::io::Error> {
    let path = std::env::var("SOCKET").unwrap_or_else(|_| "/tmp/mock-daemon.sock".to_string());
    // A stale socket file from a previous run would make bind fail.
    let _ = std::fs::remove_file(&path);
    let listener = UnixListener::bind(&path)?;
    println!("listening on {path}");
    mock_daemon::run(listener).await
}
