use std::io;
use std::process::{Command, Stdio};
use thiserror::Error;
use url::Url;

#[derive(Debug, Error)]
pub enum BrowserError {
    #[error("this earthquake has no detail page")]
    EmptyUrl,
    #[error("invalid detail URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
    #[error("could not launch browser: {0}")]
    Launch(#[from] io::Error),
}

/// Hands a URL to something that can display it
pub trait UrlOpener {
    fn open(&self, url: &Url) -> io::Result<()>;
}

/// Delegates to the operating system's default handler
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemOpener;

impl UrlOpener for SystemOpener {
    fn open(&self, url: &Url) -> io::Result<()> {
        let mut command = opener_command(url.as_str());
        command
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map(|_| ())
    }
}

#[cfg(target_os = "macos")]
fn opener_command(url: &str) -> Command {
    let mut command = Command::new("open");
    command.arg(url);
    command
}

#[cfg(target_os = "windows")]
fn opener_command(url: &str) -> Command {
    let mut command = Command::new("cmd");
    command.args(["/C", "start", "", url]);
    command
}

#[cfg(not(any(target_os = "macos", target_os = "windows")))]
fn opener_command(url: &str) -> Command {
    let mut command = Command::new("xdg-open");
    command.arg(url);
    command
}

/// Resolves the stored string as a URI and opens it.
pub fn open_detail_url(opener: &dyn UrlOpener, raw: &str) -> Result<Url, BrowserError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(BrowserError::EmptyUrl);
    }

    let url = Url::parse(raw)?;
    opener.open(&url)?;
    Ok(url)
}
