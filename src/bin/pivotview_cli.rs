//! CLI tool for pivotview - lays out a sheet config and outputs JSON
//!
//! Usage:
//!   pivotview_cli <config.json>                     # Layout JSON to stdout
//!   pivotview_cli <config.json> -o out.json         # Layout JSON to file
//!   pivotview_cli <config.json> --scroll 120 300    # Visible cells at a scroll position
//!
//! Set `RUST_LOG=debug` to see layout passes.

#![allow(clippy::exit)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::indexing_slicing)]

use std::env;
use std::fs;
use std::io::{self, Write};

use pivotview::{Facet, SheetConfig};

fn fail(message: String) -> ! {
    eprintln!("{message}");
    std::process::exit(1);
}

fn main() {
    #[cfg(not(target_arch = "wasm32"))]
    env_logger::init();

    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: pivotview_cli <config.json> [-o output.json] [--scroll x y]");
        std::process::exit(1);
    }

    let input_path = &args[1];
    let mut output_path: Option<&String> = None;
    let mut scroll: Option<(f32, f32)> = None;
    let mut i = 2;
    while i < args.len() {
        match args[i].as_str() {
            "-o" if i + 1 < args.len() => {
                output_path = Some(&args[i + 1]);
                i += 2;
            }
            "--scroll" if i + 2 < args.len() => {
                let x = args[i + 1]
                    .parse()
                    .unwrap_or_else(|e| fail(format!("Bad scroll x {}: {e}", args[i + 1])));
                let y = args[i + 2]
                    .parse()
                    .unwrap_or_else(|e| fail(format!("Bad scroll y {}: {e}", args[i + 2])));
                scroll = Some((x, y));
                i += 3;
            }
            other => fail(format!("Unknown argument: {other}")),
        }
    }

    // Read config
    let config = SheetConfig::from_path(input_path)
        .unwrap_or_else(|e| fail(format!("Error loading {input_path}: {e}")));

    // Lay out
    let facet = Facet::from_config(config).unwrap_or_else(|e| fail(format!("Error laying out sheet: {e}")));

    // Serialize to JSON
    let json = match scroll {
        Some((x, y)) => {
            let (x, y) = facet.clamp_scroll(x, y);
            serde_json::to_string_pretty(&facet.visible_cells(x, y))
        }
        None => serde_json::to_string_pretty(facet.layout_result()),
    }
    .unwrap_or_else(|e| fail(format!("Error serializing JSON: {e}")));

    // Output
    match output_path {
        Some(path) => {
            if let Err(e) = fs::write(path, &json) {
                fail(format!("Error writing {path}: {e}"));
            }
            eprintln!("Written: {path}");
        }
        None => {
            io::stdout().write_all(json.as_bytes()).unwrap();
            println!();
        }
    }
}
