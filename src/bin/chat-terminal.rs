//! Line-oriented chat front end: each line typed is sent to the proxy and the
//! answer (live or local fallback) is printed back.

use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};

use cybernet_chat::{
    logger,
    services::dispatcher::{DEFAULT_ENDPOINT, Dispatcher},
};

const BANNER: &str = "CyberNet Assistant online. Type a message, Ctrl+D to disconnect.";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    logger::init("warn");

    let endpoint = std::env::var("CHAT_ENDPOINT").unwrap_or_else(|_| DEFAULT_ENDPOINT.to_string());
    let dispatcher = Dispatcher::new(endpoint);
    tracing::debug!(endpoint = dispatcher.endpoint(), "chat terminal started");

    let mut stdout = tokio::io::stdout();
    stdout.write_all(format!("AI> {}\n> ", BANNER).as_bytes()).await?;
    stdout.flush().await?;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let message = line.trim();
        if !message.is_empty() {
            let reply = dispatcher.dispatch(message).await;
            stdout.write_all(format!("AI> {}\n", reply).as_bytes()).await?;
        }
        stdout.write_all(b"> ").await?;
        stdout.flush().await?;
    }

    Ok(())
}
