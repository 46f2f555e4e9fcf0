//! Check report types and formatting.

use std::collections::BTreeMap;
use std::fmt;

use owo_colors::OwoColorize;
use owo_colors::Stream::{Stderr, Stdout};

use super::scan::{BrokenRef, ScannedFile};
use crate::utils::plural_s;

/// Most leading-slash findings printed in detail.
const MAX_LEADING_SLASH_SHOWN: usize = 20;
/// Most broken references printed in detail.
const MAX_BROKEN_SHOWN: usize = 50;

/// Unified check report, grouped by the file each finding came from.
#[derive(Debug, Default)]
pub struct CheckReport {
    pub html_files: usize,
    pub css_files: usize,
    pub js_files: usize,
    /// Root-relative `href`/`src` snippets, grouped by source file.
    pub leading_slash: BTreeMap<String, Vec<String>>,
    /// Unresolvable references, grouped by source file.
    pub broken: BTreeMap<String, Vec<BrokenRef>>,
}

impl CheckReport {
    /// Merge the findings of one scanned file.
    pub fn add_file(&mut self, owner: String, scanned: ScannedFile) {
        if !scanned.leading_slash.is_empty() {
            self.leading_slash
                .entry(owner.clone())
                .or_default()
                .extend(scanned.leading_slash);
        }
        if !scanned.broken.is_empty() {
            self.broken.entry(owner).or_default().extend(scanned.broken);
        }
    }

    /// Total leading-slash finding count.
    pub fn leading_slash_count(&self) -> usize {
        self.leading_slash.values().map(Vec::len).sum()
    }

    /// Total broken reference count.
    pub fn broken_count(&self) -> usize {
        self.broken.values().map(Vec::len).sum()
    }

    /// No findings at all.
    pub fn is_clean(&self) -> bool {
        self.leading_slash.is_empty() && self.broken.is_empty()
    }

    /// Print the detailed report to stderr (leading slash -> broken refs).
    pub fn print(&self) {
        self.print_section(
            "leading slash",
            &self.leading_slash,
            MAX_LEADING_SLASH_SHOWN,
            |snippet| snippet.to_string(),
        );
        self.print_section("missing assets", &self.broken, MAX_BROKEN_SHOWN, |b| {
            format!(
                "`{}` {}",
                b.reference,
                format!("({}, {})", b.kind.label(), b.problem.label())
                    .if_supports_color(Stderr, |t| t.dimmed())
            )
        });
    }

    /// Print one section, stopping after `limit` entries.
    fn print_section<T>(
        &self,
        name: &str,
        findings: &BTreeMap<String, Vec<T>>,
        limit: usize,
        describe: impl Fn(&T) -> String,
    ) {
        if findings.is_empty() {
            return;
        }
        eprintln!();

        let file_count = findings.len();
        let count: usize = findings.values().map(Vec::len).sum();
        let shown = count.min(limit);
        let header = if shown < count {
            format!(
                "({file_count} file{}, {count} finding{}, first {shown} shown)",
                plural_s(file_count),
                plural_s(count)
            )
        } else {
            format!(
                "({file_count} file{}, {count} finding{})",
                plural_s(file_count),
                plural_s(count)
            )
        };
        eprintln!(
            "{} {}",
            name.if_supports_color(Stderr, |t| t.style(owo_colors::Style::new().red().bold())),
            header.if_supports_color(Stderr, |t| t.dimmed())
        );

        let mut remaining = limit;
        for (path, items) in findings {
            if remaining == 0 {
                break;
            }
            eprintln!(
                "{}{}{}",
                "[".if_supports_color(Stderr, |t| t.dimmed()),
                path.if_supports_color(Stderr, |t| t.cyan()),
                "]".if_supports_color(Stderr, |t| t.dimmed())
            );
            for item in items.iter().take(remaining) {
                eprintln!("{} {}", "→".if_supports_color(Stderr, |t| t.red()), describe(item));
            }
            remaining = remaining.saturating_sub(items.len());
        }
    }
}

impl fmt::Display for CheckReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let total = self.leading_slash_count() + self.broken_count();

        if total == 0 {
            write!(
                f,
                "{}",
                "all checks passed".if_supports_color(Stdout, |t| t.green())
            )
        } else {
            write!(
                f,
                "{} {} {}",
                "found".if_supports_color(Stdout, |t| t.dimmed()),
                total.if_supports_color(Stdout, |t| t.style(owo_colors::Style::new().red().bold())),
                format!("problem{}", plural_s(total)).if_supports_color(Stdout, |t| t.dimmed())
            )
        }
    }
}
