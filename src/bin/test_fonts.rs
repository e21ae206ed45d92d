use gradient_logo::{
    glyphs::{check_font_file, discover_font_files, BROKEN_FONTS},
    palette::palette_preview,
    BuiltinPalettes, DEFAULT_PALETTE,
};
use std::io::Write;

fn main() {
    // Loading broken fonts panics; those panics are caught, so keep them off the screen.
    std::panic::set_hook(Box::new(|_| {}));

    println!("\nDiscovering all FIGlet fonts...\n");
    let fonts = discover_font_files();
    println!("Found {} font files\n", fonts.len());

    let mut working = Vec::new();
    let mut broken = Vec::new();
    for (i, (name, path)) in fonts.iter().enumerate() {
        print!("\r[{}/{}] Testing {:30} ", i + 1, fonts.len(), name);
        let _ = std::io::stdout().flush();

        if check_font_file(path) {
            working.push(name.clone());
        } else {
            broken.push(name.clone());
        }
    }

    let _ = std::panic::take_hook();

    let title = palette_preview(DEFAULT_PALETTE, &BuiltinPalettes).unwrap_or_else(|_| DEFAULT_PALETTE.to_string());
    println!("\n\n=== RESULTS ({title}) ===");
    println!("Working fonts: {} / {}", working.len(), fonts.len());
    println!("Broken fonts: {}\n", broken.len());

    println!("=== WORKING FONTS ===");
    for (i, name) in working.iter().enumerate() {
        print!("{name:20}");
        if (i + 1) % 4 == 0 {
            println!();
        }
    }
    println!("\n");

    if !broken.is_empty() {
        println!("=== BROKEN FONTS ({}) ===", broken.len());
        for name in &broken {
            let known = if BROKEN_FONTS.contains(&name.as_str()) { "" } else { " (not in the skip list)" };
            println!("  - {name}{known}");
        }
    }
}
