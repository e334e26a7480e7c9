//! Line diff between the original and optimized resume.
//!
//! `compute_diff` is a pure longest-common-subsequence diff over lines;
//! `render_diff` prints it with +/- coloring. Nothing here feeds back
//! into the pipeline.

use colored::Colorize;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiffLine {
    Context(String),
    Removed(String),
    Added(String),
}

/// Computes a line-level diff via LCS. Resumes are small, so the O(n*m)
/// table is fine.
pub fn compute_diff(original: &str, modified: &str) -> Vec<DiffLine> {
    let a: Vec<&str> = original.lines().collect();
    let b: Vec<&str> = modified.lines().collect();

    // lcs[i][j] = length of the LCS of a[i..] and b[j..]
    let mut lcs = vec![vec![0usize; b.len() + 1]; a.len() + 1];
    for i in (0..a.len()).rev() {
        for j in (0..b.len()).rev() {
            lcs[i][j] = if a[i] == b[j] {
                lcs[i + 1][j + 1] + 1
            } else {
                lcs[i + 1][j].max(lcs[i][j + 1])
            };
        }
    }

    let mut out = Vec::new();
    let (mut i, mut j) = (0, 0);
    while i < a.len() && j < b.len() {
        if a[i] == b[j] {
            out.push(DiffLine::Context(a[i].to_string()));
            i += 1;
            j += 1;
        } else if lcs[i + 1][j] >= lcs[i][j + 1] {
            out.push(DiffLine::Removed(a[i].to_string()));
            i += 1;
        } else {
            out.push(DiffLine::Added(b[j].to_string()));
            j += 1;
        }
    }
    while i < a.len() {
        out.push(DiffLine::Removed(a[i].to_string()));
        i += 1;
    }
    while j < b.len() {
        out.push(DiffLine::Added(b[j].to_string()));
        j += 1;
    }
    out
}

/// Prints the diff to stdout. Says so when there are no changes.
pub fn render_diff(original: &str, modified: &str) {
    let diff = compute_diff(original, modified);
    let changed = diff
        .iter()
        .any(|line| !matches!(line, DiffLine::Context(_)));

    if !changed {
        println!("\n{}", "No changes between original and optimized resume.".yellow());
        return;
    }

    println!("\n{}", "Resume diff".cyan().bold());
    println!("{}", "=".repeat(72));
    for line in &diff {
        match line {
            DiffLine::Context(text) => println!("  {text}"),
            DiffLine::Removed(text) => println!("{}", format!("- {text}").red()),
            DiffLine::Added(text) => println!("{}", format!("+ {text}").green()),
        }
    }
    println!("{}", "=".repeat(72));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical_texts_produce_only_context_lines() {
        let text = "a\nb\nc";
        let diff = compute_diff(text, text);
        assert!(diff.iter().all(|l| matches!(l, DiffLine::Context(_))));
        assert_eq!(diff.len(), 3);
    }

    #[test]
    fn test_changed_line_shows_removal_then_addition() {
        let diff = compute_diff("a\nb\nc", "a\nB\nc");
        assert_eq!(
            diff,
            vec![
                DiffLine::Context("a".to_string()),
                DiffLine::Removed("b".to_string()),
                DiffLine::Added("B".to_string()),
                DiffLine::Context("c".to_string()),
            ]
        );
    }

    #[test]
    fn test_appended_line_shows_as_addition() {
        let diff = compute_diff("a\nb", "a\nb\nc");
        assert_eq!(
            diff.last(),
            Some(&DiffLine::Added("c".to_string()))
        );
    }

    #[test]
    fn test_unrelated_texts_keep_both_sides() {
        let diff = compute_diff("x", "y");
        assert_eq!(
            diff,
            vec![
                DiffLine::Removed("x".to_string()),
                DiffLine::Added("y".to_string()),
            ]
        );
    }
}
