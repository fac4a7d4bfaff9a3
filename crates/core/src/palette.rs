//! Stable color assignment for slot labels.
//!
//! The same slot label always maps to the same palette entry, on every
//! machine and across restarts, so a class keeps its color everywhere it is
//! shown.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SlotColor {
    Teal,
    Amber,
    Violet,
    Lime,
    Rose,
    Cyan,
    Fuchsia,
    Emerald,
}

pub const PALETTE: [SlotColor; 8] = [
    SlotColor::Teal,
    SlotColor::Amber,
    SlotColor::Violet,
    SlotColor::Lime,
    SlotColor::Rose,
    SlotColor::Cyan,
    SlotColor::Fuchsia,
    SlotColor::Emerald,
];

/// 31-multiplier string hash over UTF-16 code units, wrapping at 32 bits.
pub fn slot_hash(slot: &str) -> i32 {
    slot.encode_utf16()
        .fold(0i32, |hash, unit| hash.wrapping_mul(31).wrapping_add(i32::from(unit)))
}

/// Palette entry for a slot label. An empty label gets the first color.
pub fn slot_color(slot: &str) -> SlotColor {
    let len = PALETTE.len() as i32;
    let index = (slot_hash(slot) % len).unsigned_abs() as usize;
    PALETTE[index]
}
