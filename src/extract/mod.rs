pub mod notes;

use crate::model::{DayAssignment, Schedule, CURRENT_WEEK_LABEL, WEEKDAYS};
use lazy_static::lazy_static;
use notes::NoteMatchers;
use regex::Regex;
use tracing::{debug, info};

lazy_static! {
    /// Shift time range token, e.g. "9:00-17:30". Hours and minutes are kept
    /// as written; no numeric range validation happens here.
    static ref TIME_RANGE: Regex = Regex::new(r"(\d{1,2}:\d{2})-\d{1,2}:\d{2}").unwrap();

    /// Week-ending labels, one pattern per date delimiter. Trial order is
    /// slash, period, dash; the first pattern matching anywhere in the raw
    /// text wins regardless of document position.
    static ref WEEK_ENDING: [Regex; 3] = [
        Regex::new(r"(?i)week ending\s+(\d{1,2}/\d{1,2}/\d{4})").unwrap(),
        Regex::new(r"(?i)week ending\s+(\d{1,2}\.\d{1,2}\.\d{4})").unwrap(),
        Regex::new(r"(?i)week ending\s+(\d{1,2}-\d{1,2}-\d{4})").unwrap(),
    ];
}

/// How many lines past a time token the employee's name may appear
const SEARCH_WINDOW: usize = 14;

/// Section headers that end a name search when a line starts with one
const STOP_HEADERS: [&str; 4] = ["Dispatch", "Warehouse", "Office", "Totals"];

/// A time token tentatively tied to a mention of the target name
#[derive(Debug, Clone)]
struct Candidate {
    start_time: String,
    note: String,
    /// Position of the line the name was found on, over the filtered lines
    line_index: usize,
    /// Raw text of that line, for logging only
    matched_line: String,
}

/// Extract one employee's week from raw timesheet text.
///
/// Never fails: unparseable or unmatched text degrades to an empty `days`
/// list, which callers treat as "no schedule found" rather than an error.
pub fn extract_schedule(document_text: &str, target_name: &str) -> Schedule {
    let lines = segment_lines(document_text);
    let matchers = NoteMatchers::new(target_name);

    let candidates = collect_candidates(&lines, target_name, &matchers);
    info!(
        "Found {} candidate entries for {} over {} lines",
        candidates.len(),
        target_name,
        lines.len()
    );

    let mut kept = dedup_candidates(candidates);

    // Document order of the name match stands in for weekday order: the nth
    // surviving entry becomes the nth weekday, Monday first.
    kept.sort_by_key(|c| c.line_index);
    kept.truncate(WEEKDAYS.len());

    let mut schedule = Schedule::new(detect_week_ending(document_text));
    for (slot, candidate) in kept.into_iter().enumerate() {
        debug!(
            "Assigning {} {} from line {}: {:?}",
            WEEKDAYS[slot], candidate.start_time, candidate.line_index, candidate.matched_line
        );
        schedule.days.push(DayAssignment {
            day: WEEKDAYS[slot].to_string(),
            time: candidate.start_time,
            note: candidate.note,
        });
    }
    schedule
}

/// Split raw text into trimmed non-empty lines. Indices are positions in the
/// filtered sequence; gaps left by blank lines are not preserved.
fn segment_lines(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Scan lines for time tokens and tie each to the nearest following mention
/// of the target name, within a bounded window.
fn collect_candidates(
    lines: &[String],
    target_name: &str,
    matchers: &NoteMatchers,
) -> Vec<Candidate> {
    let mut candidates = Vec::new();

    for (i, line) in lines.iter().enumerate() {
        let Some(caps) = TIME_RANGE.captures(line) else {
            continue;
        };
        let Some(start_time) = caps.get(1) else {
            continue;
        };

        for j in (i + 1)..lines.len().min(i + 1 + SEARCH_WINDOW) {
            let ahead = &lines[j];

            // Case-sensitive substring match, per the source documents'
            // consistent capitalization of names
            if ahead.contains(target_name) {
                candidates.push(Candidate {
                    start_time: start_time.as_str().to_string(),
                    note: matchers.extract(ahead),
                    line_index: j,
                    matched_line: ahead.clone(),
                });
                break;
            }

            // Another shift block or a section header means this time token
            // belongs to someone else; give up on it entirely
            if TIME_RANGE.is_match(ahead)
                || STOP_HEADERS.iter().any(|header| ahead.starts_with(header))
            {
                break;
            }
        }
    }

    candidates
}

/// Collapse duplicate start times. An entry with a note beats one without;
/// otherwise the first encountered wins.
fn dedup_candidates(candidates: Vec<Candidate>) -> Vec<Candidate> {
    let mut kept: Vec<Candidate> = Vec::new();

    for candidate in candidates {
        match kept
            .iter_mut()
            .find(|existing| existing.start_time == candidate.start_time)
        {
            Some(existing) => {
                if existing.note.is_empty() && !candidate.note.is_empty() {
                    *existing = candidate;
                }
            }
            None => kept.push(candidate),
        }
    }

    kept
}

/// Find the week-ending label anywhere in the raw text, falling back to the
/// current-week sentinel when no pattern matches.
fn detect_week_ending(text: &str) -> String {
    for pattern in WEEK_ENDING.iter() {
        if let Some(caps) = pattern.captures(text) {
            if let Some(date) = caps.get(1) {
                return date.as_str().to_string();
            }
        }
    }
    CURRENT_WEEK_LABEL.to_string()
}
