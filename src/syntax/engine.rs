//! Per-document incremental highlighting
//!
//! A `Highlighter` tracks, for one document, the state each line exits
//! with and the styles computed for it. It never stores line text; the
//! host hands text over through `TextSource` whenever lines need to be
//! recomputed.
//!
//! After an edit, lines are recomputed from the first changed line and
//! propagation stops as soon as a line exits with the same state it had
//! before. Only edits that open or close an unterminated span walk further.

use std::ops::Range;
use std::sync::Arc;

use tracing::{debug, trace, warn};

use super::driver::highlight_line;
use super::language::LanguageProfile;
use super::registry::ProfileRegistry;
use super::rules::LineState;
use super::style::LineStyleResult;

/// Returned for lines the highlighter does not track
static EMPTY_RESULT: LineStyleResult = LineStyleResult::EMPTY;

/// Read access to the host's document text
pub trait TextSource {
    /// Number of lines in the document
    fn line_count(&self) -> usize;

    /// Text of one line, without its line terminator
    fn line(&self, idx: usize) -> Option<&str>;
}

impl<S: AsRef<str>> TextSource for [S] {
    fn line_count(&self) -> usize {
        self.len()
    }

    fn line(&self, idx: usize) -> Option<&str> {
        self.get(idx).map(|s| s.as_ref())
    }
}

impl<S: AsRef<str>, const N: usize> TextSource for [S; N] {
    fn line_count(&self) -> usize {
        N
    }

    fn line(&self, idx: usize) -> Option<&str> {
        self.get(idx).map(|s| s.as_ref())
    }
}

impl<S: AsRef<str>> TextSource for Vec<S> {
    fn line_count(&self) -> usize {
        self.len()
    }

    fn line(&self, idx: usize) -> Option<&str> {
        self.get(idx).map(|s| s.as_ref())
    }
}

/// A change to a contiguous run of lines
///
/// `old_count` lines starting at `start` were replaced by `new_count` lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineEdit {
    pub start: usize,
    pub old_count: usize,
    pub new_count: usize,
}

impl LineEdit {
    /// Replace `old_count` lines at `start` with `new_count` lines
    pub fn new(start: usize, old_count: usize, new_count: usize) -> Self {
        Self {
            start,
            old_count,
            new_count,
        }
    }

    /// A single line whose text changed in place
    pub fn changed(line: usize) -> Self {
        Self::new(line, 1, 1)
    }
}

/// Incremental highlighter for one document
#[derive(Debug, Clone)]
pub struct Highlighter {
    /// Active profile (shared, immutable)
    profile: Arc<LanguageProfile>,
    /// State at the end of each line
    exits: Vec<LineState>,
    /// Styles computed for each line
    styles: Vec<LineStyleResult>,
    /// First line not yet reached by a pending full recompute
    pending: Option<usize>,
    /// Maximum lines per `resume` call (0 = no limit)
    batch: usize,
}

impl Highlighter {
    /// Create a highlighter tracking no lines
    pub fn new(profile: Arc<LanguageProfile>) -> Self {
        Self {
            profile,
            exits: Vec::new(),
            styles: Vec::new(),
            pending: None,
            batch: 0,
        }
    }

    /// Limit how many lines a single `resume` call recomputes (0 = no limit)
    pub fn with_batch(mut self, batch: usize) -> Self {
        self.batch = batch;
        self
    }

    /// Get the active profile
    pub fn profile(&self) -> &Arc<LanguageProfile> {
        &self.profile
    }

    /// Number of tracked lines
    pub fn line_count(&self) -> usize {
        self.exits.len()
    }

    /// Check that no full recompute is pending
    pub fn is_settled(&self) -> bool {
        self.pending.is_none()
    }

    /// Styles for a line, empty for lines that are not tracked
    pub fn styled_spans(&self, line: usize) -> &LineStyleResult {
        self.styles.get(line).unwrap_or(&EMPTY_RESULT)
    }

    /// State a line exits with, if tracked
    pub fn exit_state(&self, line: usize) -> Option<LineState> {
        self.exits.get(line).copied()
    }

    /// State a line is entered with
    pub fn entering_state(&self, line: usize) -> LineState {
        match line.checked_sub(1) {
            Some(prev) => self.exits.get(prev).copied().unwrap_or_default(),
            None => LineState::Outside,
        }
    }

    /// Start over for a freshly loaded document
    ///
    /// Returns whether the document is fully highlighted (see `resume`).
    pub fn on_document_loaded<D: TextSource + ?Sized>(&mut self, doc: &D) -> bool {
        self.reset(doc.line_count());
        debug!(profile = %self.profile.id, lines = doc.line_count(), "document loaded");
        self.resume(doc)
    }

    /// Swap to another profile, scheduling a full recompute
    ///
    /// Returns false if the profile is already active.
    pub fn set_profile(&mut self, profile: Arc<LanguageProfile>) -> bool {
        if Arc::ptr_eq(&self.profile, &profile) {
            return false;
        }
        debug!(from = %self.profile.id, to = %profile.id, "switching profile");
        self.profile = profile;
        let lines = self.exits.len();
        self.reset(lines);
        true
    }

    /// Resolve a language tag and switch to it
    ///
    /// Returns whether the document is fully highlighted (see `resume`).
    pub fn on_profile_requested<D: TextSource + ?Sized>(
        &mut self,
        registry: &ProfileRegistry,
        tag: &str,
        doc: &D,
    ) -> bool {
        self.set_profile(registry.resolve(tag));
        self.resume(doc)
    }

    /// Continue a pending full recompute
    ///
    /// Recomputes at most the configured batch of lines and returns true
    /// once every line is highlighted.
    pub fn resume<D: TextSource + ?Sized>(&mut self, doc: &D) -> bool {
        let Some(from) = self.pending else {
            return true;
        };
        self.sync_len(doc);

        let total = self.exits.len();
        let end = match self.batch {
            0 => total,
            n => from.saturating_add(n).min(total),
        };
        for line in from..end {
            self.recompute(doc, line);
        }

        if end >= total {
            trace!(from, lines = total - from, "full recompute finished");
            self.pending = None;
            true
        } else {
            trace!(from, to = end, "full recompute paused");
            self.pending = Some(end);
            false
        }
    }

    /// Apply an edit reported by the host
    ///
    /// `old_count` lines at `start` were replaced by `new_count` lines whose
    /// text is now in `doc`. Returns the range of lines that were
    /// recomputed and need repainting.
    pub fn on_lines_changed<D: TextSource + ?Sized>(
        &mut self,
        doc: &D,
        start: usize,
        old_count: usize,
        new_count: usize,
    ) -> Range<usize> {
        let start = start.min(self.exits.len());
        let old_count = old_count.min(self.exits.len() - start);
        let old_end = start + old_count;

        // State the first line after the replaced run used to enter with
        let old_boundary = self.entering_state(old_end);

        self.exits
            .splice(start..old_end, std::iter::repeat(LineState::Outside).take(new_count));
        self.styles
            .splice(start..old_end, std::iter::repeat(LineStyleResult::EMPTY).take(new_count));
        let expected = self.exits.len();
        self.sync_len(doc);
        // Lines the host did not report but the document has
        let grown = expected..self.exits.len().max(expected);
        let new_end = (start + new_count).min(self.exits.len());

        // Lines at or past `limit` still wait for the pending recompute
        let limit = match self.pending {
            Some(cursor) if cursor <= start => {
                trace!(start, cursor, "edit inside pending recompute");
                return start..start;
            }
            Some(cursor) if cursor >= old_end => {
                let shifted = (cursor - old_count + new_count).min(self.exits.len());
                self.pending = Some(shifted);
                shifted
            }
            Some(_) => {
                self.pending = Some(new_end);
                new_end
            }
            None => self.exits.len(),
        };

        for line in start..new_end {
            self.recompute(doc, line);
        }

        let mut line = new_end;
        if self.entering_state(line) != old_boundary {
            while line < limit {
                let changed = self.recompute(doc, line);
                line += 1;
                if !changed {
                    break;
                }
            }
        }

        if self.pending.is_none() && !grown.is_empty() {
            for extra in grown.start.max(line)..grown.end {
                self.recompute(doc, extra);
            }
            line = line.max(grown.end);
        }

        trace!(start, old_count, new_count, recomputed = line - start, "lines changed");
        start..line
    }

    /// Apply a `LineEdit`
    pub fn apply_edit<D: TextSource + ?Sized>(&mut self, doc: &D, edit: LineEdit) -> Range<usize> {
        self.on_lines_changed(doc, edit.start, edit.old_count, edit.new_count)
    }

    /// Recompute one line, returning whether its exit state changed
    fn recompute<D: TextSource + ?Sized>(&mut self, doc: &D, line: usize) -> bool {
        let entering = self.entering_state(line);
        let text = doc.line(line).unwrap_or_default();
        let result = highlight_line(text, entering, &self.profile);
        let changed = self.exits[line] != result.exit;
        self.exits[line] = result.exit;
        self.styles[line] = result.styles;
        changed
    }

    /// Forget every computed line and schedule a full recompute
    fn reset(&mut self, lines: usize) {
        self.exits.clear();
        self.exits.resize(lines, LineState::Outside);
        self.styles.clear();
        self.styles.resize(lines, LineStyleResult::EMPTY);
        self.pending = Some(0);
    }

    /// Match the tracked arrays to the document's line count
    fn sync_len<D: TextSource + ?Sized>(&mut self, doc: &D) {
        let lines = doc.line_count();
        if lines != self.exits.len() {
            warn!(tracked = self.exits.len(), lines, "line count out of sync with document");
            self.exits.resize(lines, LineState::Outside);
            self.styles.resize(lines, LineStyleResult::EMPTY);
            if let Some(cursor) = self.pending {
                self.pending = Some(cursor.min(lines));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::style::StyledSpan;
    use crate::syntax::tokens::StyleId;

    fn registry() -> ProfileRegistry {
        ProfileRegistry::new().unwrap()
    }

    fn loaded(lines: &[&str], tag: &str) -> Highlighter {
        let mut hl = Highlighter::new(registry().resolve(tag));
        assert!(hl.on_document_loaded(lines));
        hl
    }

    fn exits(hl: &Highlighter) -> Vec<LineState> {
        (0..hl.line_count()).filter_map(|i| hl.exit_state(i)).collect()
    }

    fn fresh(lines: &[&str], hl: &Highlighter) -> Highlighter {
        let mut other = Highlighter::new(Arc::clone(hl.profile()));
        other.on_document_loaded(lines);
        other
    }

    fn assert_matches_full(lines: &[&str], hl: &Highlighter) {
        let full = fresh(lines, hl);
        assert_eq!(exits(hl), exits(&full));
        for i in 0..lines.len() {
            assert_eq!(hl.styled_spans(i), full.styled_spans(i), "line {i}");
        }
    }

    use LineState::{InsideSpan as In, Outside as Out};

    #[test]
    fn test_load_two_line_comment() {
        let doc = ["/* a", "b */"];
        let hl = loaded(&doc, "cpp");
        assert_eq!(exits(&hl), [In, Out]);
        assert_eq!(
            hl.styled_spans(0).spans(),
            &[StyledSpan::new(0, 4, StyleId::BlockComment)]
        );
        assert_eq!(
            hl.styled_spans(1).spans(),
            &[StyledSpan::new(0, 4, StyleId::BlockComment)]
        );
    }

    #[test]
    fn test_span_round_trip_any_length() {
        for n in [0, 1, 5, 40] {
            let mut doc = vec!["int x = 1; /* open".to_string()];
            doc.extend((0..n).map(|i| format!("int y{i} = {i};")));
            doc.push("close */ int z;".to_string());

            let mut hl = Highlighter::new(registry().resolve("cpp"));
            hl.on_document_loaded(&doc);

            assert_eq!(hl.exit_state(0), Some(In));
            for i in 1..=n {
                assert_eq!(hl.exit_state(i), Some(In));
                assert_eq!(
                    hl.styled_spans(i).spans(),
                    &[StyledSpan::new(0, doc[i].len(), StyleId::BlockComment)]
                );
            }
            let last = n + 1;
            assert_eq!(hl.exit_state(last), Some(Out));
            assert_eq!(hl.styled_spans(last).style_at(0), StyleId::BlockComment);
            assert_eq!(hl.styled_spans(last).style_at(7), StyleId::BlockComment);
            assert_eq!(hl.styled_spans(last).style_at(9), StyleId::Keyword);
            assert_eq!(hl.styled_spans(0).style_at(0), StyleId::Keyword);
            assert_eq!(hl.styled_spans(0).style_at(11), StyleId::BlockComment);
        }
    }

    #[test]
    fn test_edit_without_state_change_stops() {
        let mut doc = vec!["int a;", "/* x", "y */", "int b;"];
        let mut hl = loaded(&doc, "cpp");

        doc[0] = "int a = 5;";
        let range = hl.on_lines_changed(&doc, 0, 1, 1);
        assert_eq!(range, 0..1);
        assert_matches_full(&doc, &hl);
    }

    #[test]
    fn test_opening_comment_propagates() {
        let mut doc = vec!["int a;", "int b;", "int c;", "int d;"];
        let mut hl = loaded(&doc, "cpp");

        doc[1] = "int b; /* oops";
        let range = hl.on_lines_changed(&doc, 1, 1, 1);
        assert_eq!(range, 1..4);
        assert_eq!(exits(&hl), [Out, In, In, In]);
        assert_matches_full(&doc, &hl);

        doc[2] = "*/ int c;";
        let range = hl.on_lines_changed(&doc, 2, 1, 1);
        assert_eq!(range, 2..4);
        assert_eq!(exits(&hl), [Out, In, Out, Out]);
        assert_matches_full(&doc, &hl);
    }

    #[test]
    fn test_propagation_stops_at_existing_close() {
        let mut doc = vec!["a", "b", "c */", "int d;", "int e;"];
        let mut hl = loaded(&doc, "cpp");
        let before_tail = hl.styled_spans(4).clone();

        doc[0] = "/* a";
        let range = hl.on_lines_changed(&doc, 0, 1, 1);
        // Line 2 closes the span and exits Outside as before
        assert_eq!(range, 0..3);
        assert_eq!(hl.styled_spans(4), &before_tail);
        assert_matches_full(&doc, &hl);
    }

    #[test]
    fn test_insert_lines() {
        let mut doc = vec!["int a;", "int b;"];
        let mut hl = loaded(&doc, "cpp");

        doc.insert(1, "/* new");
        doc.insert(2, "still");
        let range = hl.on_lines_changed(&doc, 1, 0, 2);
        assert_eq!(range, 1..4);
        assert_eq!(exits(&hl), [Out, In, In, In]);
        assert_matches_full(&doc, &hl);
    }

    #[test]
    fn test_insert_plain_line_inside_comment() {
        let mut doc = vec!["/* a", "b */", "int c;"];
        let mut hl = loaded(&doc, "cpp");

        doc.insert(1, "middle");
        let range = hl.on_lines_changed(&doc, 1, 0, 1);
        // The line after the insertion enters with the same state as before
        assert_eq!(range, 1..2);
        assert_matches_full(&doc, &hl);
    }

    #[test]
    fn test_delete_opening_line() {
        let mut doc = vec!["/* a", "b", "c */", "int d;"];
        let mut hl = loaded(&doc, "cpp");

        doc.remove(0);
        let range = hl.on_lines_changed(&doc, 0, 1, 0);
        // "c */" exits Outside either way
        assert_eq!(range, 0..2);
        assert_eq!(exits(&hl), [Out, Out, Out]);
        assert_matches_full(&doc, &hl);
    }

    #[test]
    fn test_delete_plain_lines() {
        let mut doc = vec!["int a;", "int b;", "int c;", "int d;"];
        let mut hl = loaded(&doc, "cpp");

        doc.drain(1..3);
        let range = hl.on_lines_changed(&doc, 1, 2, 0);
        assert_eq!(range, 1..1);
        assert_eq!(hl.line_count(), 2);
        assert_matches_full(&doc, &hl);
    }

    #[test]
    fn test_delete_to_end() {
        let mut doc = vec!["/* a", "b"];
        let mut hl = loaded(&doc, "cpp");

        doc.truncate(1);
        let range = hl.on_lines_changed(&doc, 1, 1, 0);
        assert_eq!(range, 1..1);
        assert_matches_full(&doc, &hl);
    }

    #[test]
    fn test_out_of_range_query_is_empty() {
        let hl = loaded(&["int a;"], "cpp");
        assert!(hl.styled_spans(99).is_empty());
        assert_eq!(hl.exit_state(99), None);
    }

    #[test]
    fn test_profile_swap_and_back() {
        let reg = registry();
        let doc = ["/* int x", "def f(): */ return 1", "# not a directive"];
        let mut hl = Highlighter::new(reg.resolve("cpp"));
        hl.on_document_loaded(&doc);
        let original: Vec<_> = (0..doc.len()).map(|i| hl.styled_spans(i).clone()).collect();

        assert!(hl.on_profile_requested(&reg, "py", &doc));
        assert_eq!(hl.profile().id, "py");
        assert_eq!(exits(&hl), [Out, Out, Out]);
        assert_eq!(hl.styled_spans(1).style_at(0), StyleId::Keyword);

        assert!(hl.on_profile_requested(&reg, "cpp", &doc));
        let restored: Vec<_> = (0..doc.len()).map(|i| hl.styled_spans(i).clone()).collect();
        assert_eq!(original, restored);
    }

    #[test]
    fn test_same_profile_is_noop() {
        let reg = registry();
        let mut hl = Highlighter::new(reg.resolve("cpp"));
        assert!(!hl.set_profile(reg.resolve("c")));
        assert!(hl.set_profile(reg.resolve("xyz")));
        assert_eq!(hl.profile().id, "generic");
    }

    #[test]
    fn test_batched_recompute() {
        let doc = ["/* 1", "2", "3", "4 */", "5"];
        let mut hl = Highlighter::new(registry().resolve("cpp")).with_batch(2);

        assert!(!hl.on_document_loaded(&doc));
        assert_eq!(exits(&hl)[..2], [In, In]);
        assert!(!hl.is_settled());
        assert!(!hl.resume(&doc));
        assert!(hl.resume(&doc));
        assert!(hl.is_settled());
        assert_matches_full(&doc, &hl);
    }

    #[test]
    fn test_edit_before_pending_cursor() {
        let mut doc = vec!["int a;", "int b;", "int c;", "int d;", "int e;", "int f;"];
        let mut hl = Highlighter::new(registry().resolve("cpp")).with_batch(3);
        assert!(!hl.on_document_loaded(&doc));

        doc[0] = "/* a";
        let range = hl.on_lines_changed(&doc, 0, 1, 1);
        // Eager propagation stops where the pending pass resumes
        assert_eq!(range, 0..3);
        assert!(!hl.is_settled());
        assert!(hl.resume(&doc));
        assert_matches_full(&doc, &hl);
    }

    #[test]
    fn test_edit_after_pending_cursor() {
        let mut doc = vec!["int a;", "int b;", "int c;", "int d;"];
        let mut hl = Highlighter::new(registry().resolve("cpp")).with_batch(2);
        assert!(!hl.on_document_loaded(&doc));

        doc.insert(3, "/* late");
        let range = hl.on_lines_changed(&doc, 3, 0, 1);
        assert!(range.is_empty());
        assert_eq!(hl.line_count(), 5);
        while !hl.resume(&doc) {}
        assert_matches_full(&doc, &hl);
    }

    #[test]
    fn test_profile_request_supersedes_pending() {
        let reg = registry();
        let doc = ["/* a", "b", "c */", "d"];
        let mut hl = Highlighter::new(reg.resolve("cpp")).with_batch(1);
        assert!(!hl.on_document_loaded(&doc));
        assert!(!hl.on_profile_requested(&reg, "py", &doc));
        while !hl.resume(&doc) {}
        assert_eq!(exits(&hl), [Out, Out, Out, Out]);
        assert_matches_full(&doc, &hl);
    }

    #[test]
    fn test_line_count_mismatch_resyncs() {
        let mut hl = loaded(&["int a;"], "cpp");
        let doc = ["int a;", "/* b", "c"];
        // Host reports only the first line but the document grew
        let dirty = hl.on_lines_changed(&doc, 0, 1, 1);
        assert_eq!(dirty, 0..3);
        assert_eq!(hl.line_count(), 3);
        assert_eq!(hl.exit_state(1), Some(LineState::InsideSpan));
        assert_eq!(hl.styled_spans(1).style_at(0), StyleId::BlockComment);
        assert_eq!(hl.styled_spans(2).style_at(0), StyleId::BlockComment);
        assert_matches_full(&doc, &hl);
    }

    #[test]
    fn test_line_count_mismatch_after_unchanged_edit() {
        let mut hl = loaded(&["int a;", "int b;"], "cpp");
        let doc = ["int a;", "int b;", "/* c", "d */ 1"];
        // The edited line keeps its exit state; the extra lines still get styled
        let dirty = hl.on_lines_changed(&doc, 0, 1, 1);
        assert_eq!(dirty, 0..4);
        assert_eq!(hl.exit_state(2), Some(LineState::InsideSpan));
        assert_eq!(hl.exit_state(3), Some(LineState::Outside));
        assert_matches_full(&doc, &hl);
    }

    #[test]
    fn test_line_count_shrinks() {
        let mut hl = loaded(&["/* a", "b", "c */"], "cpp");
        let doc = ["int a;"];
        hl.on_lines_changed(&doc, 0, 1, 1);
        assert_eq!(hl.line_count(), 1);
        assert_matches_full(&doc, &hl);
    }
}
