//! Domain-specific assertion macros for aidr harnesses.
//!
//! These wrap `pretty_assertions` and add context-rich failure messages that
//! make it clear *which* part of the report was wrong and what it held.

// ---------------------------------------------------------------------------
// Entry assertions
// ---------------------------------------------------------------------------

/// Assert that an entry list contains a path, optionally with an expected
/// object type.
///
/// ```rust
/// assert_has_path!(report.added, "/etc/cron.d/backdoor");
/// assert_has_path!(report.added, "/etc/cron.d/backdoor", "File");
/// ```
#[macro_export]
macro_rules! assert_has_path {
    ($entries:expr, $path:expr) => {{
        let entries: &[aidr::ChangeEntry] = &$entries;
        let path: &str = $path;
        if !entries.iter().any(|e| e.path == path) {
            panic!(
                "assert_has_path! failed: {:?} not found.\n  Paths present: {:?}",
                path,
                entries.iter().map(|e| e.path.as_str()).collect::<Vec<_>>()
            );
        }
    }};
    ($entries:expr, $path:expr, $object_type:expr) => {{
        let entries: &[aidr::ChangeEntry] = &$entries;
        let path: &str = $path;
        let expected: &str = $object_type;
        match entries.iter().find(|e| e.path == path) {
            Some(e) if e.object_type == expected => {}
            Some(e) => panic!(
                "assert_has_path! failed for {:?}:\n  expected object_type: {:?}\n  actual:               {:?}",
                path, expected, e.object_type
            ),
            None => panic!(
                "assert_has_path! failed: {:?} not found.\n  Paths present: {:?}",
                path,
                entries.iter().map(|e| e.path.as_str()).collect::<Vec<_>>()
            ),
        }
    }};
}

// ---------------------------------------------------------------------------
// Summary assertions
// ---------------------------------------------------------------------------

/// Assert the added/removed/changed counters of a summary in one go.
///
/// ```rust
/// assert_counts!(report.summary, added: 2, removed: 1, changed: 2);
/// ```
#[macro_export]
macro_rules! assert_counts {
    ($summary:expr, added: $a:expr, removed: $r:expr, changed: $c:expr) => {{
        let summary: &aidr::Summary = &$summary;
        let expected: (u64, u64, u64) = ($a, $r, $c);
        let actual = (summary.files_added, summary.files_removed, summary.files_changed);
        if actual != expected {
            panic!(
                "assert_counts! failed:\n  expected (added, removed, changed): {:?}\n  actual:                             {:?}\n  summary: {:#?}",
                expected, actual, summary
            );
        }
    }};
}

/// Assert that no entry in any list has both an empty object type and an
/// empty path.
#[macro_export]
macro_rules! assert_no_blank_entries {
    ($report:expr) => {{
        let report: &aidr::NormalizedReport = &$report;
        for (name, entries) in [
            ("added", &report.added),
            ("removed", &report.removed),
            ("changed", &report.changed),
        ] {
            if let Some(e) = entries
                .iter()
                .find(|e| e.object_type.is_empty() && e.path.is_empty())
            {
                panic!("assert_no_blank_entries! failed: blank entry in {name}: {e:?}");
            }
        }
    }};
}
