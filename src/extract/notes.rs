use regex::Regex;

/// Ordered note matchers for a single target name.
///
/// Timesheets carry shift codes next to the employee's name in a handful of
/// layouts. Each matcher captures the code in group 1; they are tried in
/// priority order and the first hit wins. The bare-parenthesis pattern comes
/// first on purpose, even though a parenthetical elsewhere on the line can be
/// picked up instead of one tied to the name. Downstream data relies on that
/// ordering, so it stays.
pub struct NoteMatchers {
    patterns: Vec<Regex>,
}

impl NoteMatchers {
    /// Compile the matcher list for one employee name
    pub fn new(name: &str) -> Self {
        let name = regex::escape(name);
        let sources = [
            // Any parenthesized text on the line
            r"\(([^)]*)\)".to_string(),
            // Name(CODE), parentheses directly adjacent
            format!(r"{name}\(([^)]*)\)"),
            // Name CODE followed by whitespace or end of line
            format!(r"{name}\s+([A-Z]{{2,4}})(?:\s|$)"),
            // CODE Name
            format!(r"([A-Z]{{2,4}})\s+{name}"),
            // Name CODE immediately before an opening parenthesis
            format!(r"{name}\s+([A-Z]{{2,4}})\("),
        ];
        let patterns = sources
            .iter()
            .filter_map(|src| Regex::new(src).ok())
            .collect();
        Self { patterns }
    }

    /// Extract a shift-code note from a line, empty string when nothing matches
    pub fn extract(&self, line: &str) -> String {
        for pattern in &self.patterns {
            if let Some(caps) = pattern.captures(line) {
                if let Some(note) = caps.get(1) {
                    return note.as_str().to_string();
                }
            }
        }
        String::new()
    }
}
