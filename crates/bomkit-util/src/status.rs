use std::io::Write;

use console::Style;

/// Print a Cargo-style status line to stdout: `  Generated sphereonLibraryBom.toml`
///
/// The `label` is right-aligned to 12 characters and printed in bold green.
pub fn status(label: &str, message: &str) {
    print_line(Style::new().green().bold(), label, message);
}

/// Like [`status`] with a bold cyan label, for listings and summaries.
pub fn status_info(label: &str, message: &str) {
    print_line(Style::new().cyan().bold(), label, message);
}

/// Like [`status`] with a bold yellow label.
pub fn status_warn(label: &str, message: &str) {
    print_line(Style::new().yellow().bold(), label, message);
}

fn print_line(style: Style, label: &str, message: &str) {
    let _ = writeln!(std::io::stdout(), "{:>12} {message}", style.apply_to(label));
}
