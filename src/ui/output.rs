use chrono::{DateTime, Local};
use colored::*;
use std::io::{self, Write};

/// Print a rendered page once
pub fn print_page(content: &str) {
    println!("{}", content.trim_end());
}

/// Redraw the screen with a rendered page, as used by watch mode
pub fn print_frame(content: &str, updated: DateTime<Local>, clear: bool) {
    if clear {
        print!("\x1b[2J\x1b[H");
    }
    println!(
        "{} {}",
        "Command Center".bold(),
        format!("(updated {}, Ctrl-C to stop)", updated.format("%H:%M:%S")).dimmed()
    );
    println!();
    println!("{}", content.trim_end());
    let _ = io::stdout().flush();
}

/// Hide all but the last four characters of a secret
pub fn mask_secret(secret: &str) -> String {
    let count = secret.chars().count();
    if count == 0 {
        return String::new();
    }
    if count <= 4 {
        return "*".repeat(count);
    }
    let tail: String = secret.chars().skip(count - 4).collect();
    format!("{}{}", "*".repeat(count - 4), tail)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask_secret() {
        assert_eq!(mask_secret(""), "");
        assert_eq!(mask_secret("abc"), "***");
        assert_eq!(mask_secret("test-api-key"), "********-key");
    }
}
