//! protodoc — regenerate the enum reference page for the proto APIs.
//!
//! Reads the preamble from `docs/api-reference/enums_pre.mdx`, fetches the
//! proto sources listed in [`SOURCES`] one at a time, extracts every enum
//! with its leading `///` block, and writes the combined page to
//! `docs/api-reference/enums.mdx`, including a link to each declaration line.

use anyhow::Result;
use log::info;
use protodoc::model::SourceSpec;
use protodoc::{assemble, fetch, parser, render};
use std::path::Path;

const PREAMBLE_PATH: &str = "docs/api-reference/enums_pre.mdx";
const OUTPUT_PATH: &str = "docs/api-reference/enums.mdx";

/// Proto sources, fetched in order. Sections appear in this order in the page.
const SOURCES: &[SourceSpec] = &[
    SourceSpec {
        name: "common.proto",
        raw_url: "https://raw.githubusercontent.com/QFEX-org/proto/main/common.proto",
        repo_url: "https://github.com/QFEX-org/proto/blob/main/proto/common.proto",
    },
    SourceSpec {
        name: "market_data.proto",
        raw_url: "https://raw.githubusercontent.com/QFEX-org/proto/main/market_data.proto",
        repo_url: "https://github.com/QFEX-org/proto/blob/main/proto/market_data.proto",
    },
    SourceSpec {
        name: "port.proto",
        raw_url: "https://raw.githubusercontent.com/QFEX-org/proto/main/port.proto",
        repo_url: "https://github.com/QFEX-org/proto/blob/main/proto/port.proto",
    },
];

fn main() -> Result<()> {
    env_logger::init();
    run()
}

fn run() -> Result<()> {
    // Preamble is read up front and the output written last: a failure at
    // any stage leaves the existing page untouched.
    let preamble = assemble::read_preamble(Path::new(PREAMBLE_PATH))?;

    let client = reqwest::blocking::Client::new();
    let mut enums = Vec::new();
    for source in SOURCES {
        let text = fetch::fetch_text(&client, source.raw_url)?;
        let found = parser::parse(&text, source);
        info!("{}: {} enums", source.name, found.len());
        enums.extend(found);
    }

    let sections: Vec<String> = enums.iter().map(render::render_enum).collect();
    let output = assemble::assemble(&preamble, &sections);
    assemble::write_output(Path::new(OUTPUT_PATH), &output)?;

    println!("written {OUTPUT_PATH}");
    Ok(())
}
