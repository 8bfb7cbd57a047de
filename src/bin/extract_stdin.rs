//! Simple CLI that reads HTML from stdin and outputs JSON to stdout.
//! Used by benchmark wrappers that drive extractors over a corpus.

use extractcontent::analyze_bytes;
use serde::Serialize;
use std::io::{self, Read};

#[derive(Serialize)]
struct Output {
    title: String,
    main_content: String,
}

fn main() {
    env_logger::init();

    // Raw bytes: the page's own charset declaration decides the decoding.
    let mut html = Vec::new();
    if io::stdin().read_to_end(&mut html).is_err() {
        eprintln!("Failed to read from stdin");
        std::process::exit(1);
    }

    let (main_content, title) = analyze_bytes(&html).into_parts();
    let output = Output {
        title,
        main_content,
    };

    println!("{}", serde_json::to_string(&output).unwrap_or_default());
}
