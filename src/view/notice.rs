// Transient toast lines and the one blocking notice, the terminal stand-ins
// for the original dialog/toast wiring.

pub fn toast_success(message: &str) {
    println!("✅ {}", message);
}

pub fn toast_info(message: &str) {
    println!("ℹ️  {}", message);
}

pub fn toast_error(message: &str) {
    eprintln!("❌ {}", message);
}

/// Blocking modal analog: a bordered notice printed once, e.g. for the
/// fire-once fetch failure.
pub fn blocking_error(title: &str, text: &str) {
    eprintln!("+{:-<50}+", "");
    eprintln!("| {:<48} |", title);
    eprintln!("+{:-<50}+", "");
    for line in text.lines() {
        eprintln!("| {:<48} |", line);
    }
    eprintln!("+{:-<50}+", "");
}
