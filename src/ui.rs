/// User interface and status output utilities
///
/// This module handles:
/// - Colored terminal text with plain-text fallback
/// - Progress and success lines on stdout
/// - One-line error messages on stderr
use std::io::Write;

/// Write bold colored text to a terminal; false when the terminal can't do it
fn write_color<T: term::Terminal + ?Sized>(t: Option<Box<T>>, s: &str, fg: term::color::Color) -> bool {
    let Some(mut t) = t else {
        return false;
    };
    if t.fg(fg).is_err() {
        return false;
    }
    let _ = t.attr(term::Attr::Bold);
    if write!(t, "{}", s).is_err() {
        return false;
    }
    let _ = t.reset();
    true
}

/// Print a progress message
pub fn status(s: &str) {
    println!("{}", s);
}

/// Print a success message with a green check mark
pub fn print_success(msg: &str) {
    if !write_color(term::stdout(), "✓", term::color::BRIGHT_GREEN) {
        print!("✓");
    }
    println!(" {}", msg);
}

/// Print a one-line error message to stderr with a red "Error" prefix
pub fn print_error(msg: &str) {
    if !write_color(term::stderr(), "Error", term::color::BRIGHT_RED) {
        eprint!("Error");
    }
    eprintln!(": {}", msg);
}
