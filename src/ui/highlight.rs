use colored::*;
use serde_json::Value;
use syntect::easy::HighlightLines;
use syntect::highlighting::{Style, ThemeSet};
use syntect::parsing::SyntaxSet;
use syntect::util::{as_24_bit_terminal_escaped, LinesWithEndings};

const THEME: &str = "Solarized (dark)";

/// Turns page content into terminal text.
///
/// A plain renderer emits no escape codes at all, which keeps `--raw`
/// output pipeable and makes rendered pages easy to assert on.
pub struct Renderer {
    highlighter: Option<JsonHighlighter>,
}

struct JsonHighlighter {
    syntax_set: SyntaxSet,
    theme_set: ThemeSet,
}

impl Renderer {
    pub fn styled() -> Self {
        Self {
            highlighter: Some(JsonHighlighter::new()),
        }
    }

    pub fn plain() -> Self {
        Self { highlighter: None }
    }

    pub fn is_plain(&self) -> bool {
        self.highlighter.is_none()
    }

    pub fn title(&self, text: &str) -> String {
        if self.is_plain() {
            text.to_string()
        } else {
            text.bold().cyan().to_string()
        }
    }

    pub fn muted(&self, text: &str) -> String {
        if self.is_plain() {
            text.to_string()
        } else {
            text.dimmed().to_string()
        }
    }

    pub fn error(&self, message: &str) -> String {
        let line = format!("Error: {}", message);
        if self.is_plain() {
            line
        } else {
            line.red().to_string()
        }
    }

    /// Pretty-printed JSON, highlighted unless plain
    pub fn json(&self, value: &Value) -> String {
        let pretty = serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string());
        match &self.highlighter {
            Some(highlighter) => highlighter.highlight(&pretty),
            None => pretty,
        }
    }
}

impl JsonHighlighter {
    fn new() -> Self {
        Self {
            syntax_set: SyntaxSet::load_defaults_newlines(),
            theme_set: ThemeSet::load_defaults(),
        }
    }

    fn highlight(&self, code: &str) -> String {
        let Some(theme) = self.theme_set.themes.get(THEME) else {
            return code.to_string();
        };

        let syntax = self
            .syntax_set
            .find_syntax_by_extension("json")
            .unwrap_or_else(|| self.syntax_set.find_syntax_plain_text());

        let mut highlighter = HighlightLines::new(syntax, theme);
        let mut output = String::new();

        for line in LinesWithEndings::from(code) {
            match highlighter.highlight_line(line, &self.syntax_set) {
                Ok(ranges) => {
                    let ranges: &[(Style, &str)] = &ranges;
                    output.push_str(&as_24_bit_terminal_escaped(ranges, false));
                }
                Err(_) => output.push_str(line),
            }
        }

        // Reset so the terminal colour doesn't leak past the block
        output.push_str("\x1b[0m");
        output
    }
}
