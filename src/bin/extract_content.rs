//! Command-line extractor: prints the title and body text of a page.
//!
//! Usage: `extract_content [-d|--debug] <path|url>`
//!
//! A `http://` or `https://` argument is fetched; anything else is read as a
//! local file. `--debug` logs every scored block to stderr.

use std::env;
use std::fs;
use std::process::ExitCode;

use extractcontent::{ContentExtractor, Error, OptionOverrides, Result};
use url::Url;

const USAGE: &str = "usage: extract_content [-d|--debug] <path|url>";

fn main() -> ExitCode {
    let mut debug = false;
    let mut target = None;
    for arg in env::args().skip(1) {
        match arg.as_str() {
            "-d" | "--debug" => debug = true,
            _ if target.is_none() => target = Some(arg),
            _ => {
                eprintln!("{USAGE}");
                return ExitCode::from(2);
            }
        }
    }
    let Some(target) = target else {
        eprintln!("{USAGE}");
        return ExitCode::from(2);
    };

    let level = if debug { "extractcontent=debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let extractor = ContentExtractor::new(Some(&OptionOverrides {
        debug: Some(debug),
        ..OptionOverrides::default()
    }));

    let html = match load(&target) {
        Ok(html) => html,
        Err(err) => {
            eprintln!("{target}: {err}");
            return ExitCode::from(1);
        }
    };

    let (body, title) = extractor.analyze(&html, None).into_parts();
    println!("{title}");
    println!("{body}");
    ExitCode::SUCCESS
}

/// Reads a local file or fetches a URL, decoding it to text.
fn load(target: &str) -> Result<String> {
    match Url::parse(target) {
        Ok(url) if matches!(url.scheme(), "http" | "https") => fetch(&url),
        _ => {
            let bytes = fs::read(target)?;
            Ok(extractcontent::encoding::transcode_to_utf8(&bytes))
        }
    }
}

#[cfg(feature = "fetch")]
fn fetch(url: &Url) -> Result<String> {
    use std::time::Duration;

    let client = reqwest::blocking::Client::builder()
        .timeout(Duration::from_secs(10))
        .redirect(reqwest::redirect::Policy::limited(10))
        .build()
        .map_err(|e| Error::Fetch(e.to_string()))?;

    let response = client.get(url.as_str()).send().map_err(|e| {
        if e.is_timeout() {
            Error::Fetch(format!("timed out: {e}"))
        } else {
            Error::Fetch(e.to_string())
        }
    })?;

    if !response.status().is_success() {
        return Err(Error::Fetch(format!("HTTP {}", response.status())));
    }

    let charset = response
        .headers()
        .get(reqwest::header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .and_then(extractcontent::encoding::charset_from_content_type)
        .map(str::to_owned);
    log::debug!("fetched {url} (charset: {charset:?})");

    let bytes = response.bytes().map_err(|e| Error::Fetch(e.to_string()))?;
    Ok(extractcontent::encoding::decode_with_label(&bytes, charset.as_deref()))
}

#[cfg(not(feature = "fetch"))]
fn fetch(url: &Url) -> Result<String> {
    Err(Error::Fetch(format!("{url}: built without the `fetch` feature")))
}
