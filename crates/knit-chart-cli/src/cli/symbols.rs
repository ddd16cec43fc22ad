//! Symbols command implementation.

use knit_chart::Symbol;

/// List symbol codes, names and glyphs.
pub fn cmd_symbols() {
    println!("Chart symbols:");
    for symbol in Symbol::all() {
        let glyph = match symbol.glyph() {
            "" => "(blank)",
            g => g,
        };
        println!("  {}  {:<9} {}", symbol.code(), symbol.name(), glyph);
    }
}
