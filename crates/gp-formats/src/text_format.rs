//! Sparse text serialization of a pattern.
//!
//! Each non-empty pad emits one semicolon-terminated record:
//!
//! ```text
//! slot:3; step:14; gate:1.000; size:0.500; mix:0.500;
//! ```
//!
//! Empty pads are omitted. Field names come from the caller's symbol
//! table; numeric pad fields are written with three decimals.

use gp_core::{Pad, Pattern};

/// Symbol table for the text format.
///
/// The host persists each field under a name; the names are caller
/// configuration so documents survive renames and localization of the
/// outer state format.
#[derive(Clone, Copy, Debug)]
pub struct PadSymbols<'a> {
    pub slot: &'a str,
    pub step: &'a str,
    pub gate: &'a str,
    pub size: &'a str,
    pub mix: &'a str,
}

impl PadSymbols<'static> {
    /// Conventional field names.
    pub const DEFAULT: PadSymbols<'static> = PadSymbols {
        slot: "slot",
        step: "step",
        gate: "gate",
        size: "size",
        mix: "mix",
    };
}

/// How many characters past a `name:` prefix the number parser scans.
const LOOKAHEAD: usize = 63;

/// Serialize every non-empty pad of the pattern, one record per pad.
pub fn pattern_to_string(pattern: &Pattern, symbols: &PadSymbols) -> String {
    let mut out = String::new();
    for slot in 0..pattern.slots() {
        for step in 0..pattern.steps() {
            let pad = pattern.pad(slot, step);
            if pad.is_empty() {
                continue;
            }
            out.push_str(&format!(
                "{}:{}; {}:{}; {}:{:.3}; {}:{:.3}; {}:{:.3};\n",
                symbols.slot, slot,
                symbols.step, step,
                symbols.gate, pad.gate,
                symbols.size, pad.size,
                symbols.mix, pad.mix,
            ));
        }
    }
    out
}

/// Parse a pattern document, replacing the whole grid.
///
/// The grid is wiped to empty pads first; parsed records are applied on
/// top, and the entire import commits as a single undoable batch. A
/// record missing its slot or step value, or naming coordinates outside
/// the grid, stops the import at that point with a diagnostic on stderr
/// and leaves the records parsed so far applied. Unknown or absent pad
/// fields stay at their defaults; parsed values are clamped into range.
/// Returns the number of records applied.
pub fn pattern_from_string(pattern: &mut Pattern, text: &str, symbols: &PadSymbols) -> usize {
    for slot in 0..pattern.slots() {
        for step in 0..pattern.steps() {
            pattern.set_pad(slot, step, Pad::empty());
        }
    }

    let mut applied = 0;
    for record in text.split_terminator('\n') {
        if record.trim().is_empty() {
            continue;
        }

        let slot = find_field(record, symbols.slot);
        let step = find_field(record, symbols.step);
        let (slot, step) = match (slot, step) {
            (Some(slot), Some(step)) => (slot, step),
            _ => {
                eprintln!(
                    "[pattern] WARNING: record {} lacks a readable {}/{} value, import stopped",
                    applied, symbols.slot, symbols.step
                );
                break;
            }
        };

        if slot < 0.0
            || slot >= pattern.slots() as f32
            || step < 0.0
            || step >= pattern.steps() as f32
        {
            eprintln!(
                "[pattern] WARNING: record {} addresses ({}, {}) outside the {}x{} grid, import stopped",
                applied, slot, step,
                pattern.slots(), pattern.steps()
            );
            break;
        }

        let pad = Pad::new(
            find_field(record, symbols.gate).unwrap_or(0.0),
            find_field(record, symbols.size).unwrap_or(0.0),
            find_field(record, symbols.mix).unwrap_or(0.0),
        )
        .clamped();

        pattern.set_pad(slot as usize, step as usize, pad);
        applied += 1;
    }

    pattern.store();
    applied
}

/// Locate the `name:` key in the record and parse the number that
/// follows, scanning at most `LOOKAHEAD` characters past the prefix.
///
/// Keys are only recognized at the start of a `;`-separated segment,
/// so one symbol occurring inside another token (e.g. `s` inside
/// `pos:1`) is never taken for a key.
fn find_field(record: &str, name: &str) -> Option<f32> {
    for segment in record.split(';') {
        let value = match segment
            .trim_start()
            .strip_prefix(name)
            .and_then(|rest| rest.strip_prefix(':'))
        {
            Some(value) => value,
            None => continue,
        };

        let mut cut = value.len().min(LOOKAHEAD);
        while !value.is_char_boundary(cut) {
            cut -= 1;
        }
        let window = &value[..cut];

        let end = window.find(',').unwrap_or(window.len());
        return window[..end].trim().parse::<f32>().ok();
    }
    None
}
