//! glitchpad CLI — inspect and normalize pattern state documents.
//!
//! Usage:
//!   gp-cli path/to/pattern.txt
//!   gp-cli path/to/pattern.txt --normalize out.txt

use gp_editor::{Editor, NR_SLOTS, NR_STEPS};
use std::{env, fs};

fn main() {
    let args: Vec<String> = env::args().collect();
    let path = args.get(1).unwrap_or_else(|| {
        eprintln!("Usage: gp-cli <pattern.txt> [--normalize out.txt]");
        std::process::exit(1);
    });

    let out_path = args
        .iter()
        .position(|a| a == "--normalize")
        .and_then(|i| args.get(i + 1))
        .cloned();

    let text = fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("Failed to read {}: {}", path, e);
        std::process::exit(1);
    });

    let mut editor = Editor::new(NR_SLOTS, NR_STEPS);
    let records = editor.load(&text);

    println!("Grid:    {} slots x {} steps", NR_SLOTS, NR_STEPS);
    println!("Records: {}", records);
    println!("Active:  {} pads", editor.active_pads());

    if let Some(out) = out_path {
        let normalized = editor.save();
        fs::write(&out, &normalized).unwrap_or_else(|e| {
            eprintln!("Failed to write {}: {}", out, e);
            std::process::exit(1);
        });
        println!("Wrote normalized document to {}", out);
    }
}
