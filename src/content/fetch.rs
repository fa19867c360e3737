use std::sync::mpsc::{self, Receiver};
use std::thread;

use thiserror::Error;

/// Failure of the one-shot fragment fetch.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
}

/// Plain HTTP GET on a background thread, no timeout, no retry.
///
/// The result arrives on the returned channel; the sender disconnects
/// after delivering it.
pub fn spawn_fetch(url: String) -> Receiver<Result<String, FetchError>> {
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        let _ = tx.send(fetch_text(&url));
    });
    rx
}

fn fetch_text(url: &str) -> Result<String, FetchError> {
    let body = reqwest::blocking::get(url)?.error_for_status()?.text()?;
    Ok(body)
}
