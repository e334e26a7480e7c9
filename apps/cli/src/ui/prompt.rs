//! Interactive review of recommendations: one accept/skip question per
//! item, in priority order.

use std::io::{self, BufRead, Write};

use colored::Colorize;

use crate::pipeline::recommender::{Recommendation, SuggestedChange};

/// Walks the user through each recommendation and returns one accept/skip
/// decision per item, aligned with the input order.
pub fn review_recommendations(recommendations: &[Recommendation]) -> io::Result<Vec<bool>> {
    let mut decisions = Vec::with_capacity(recommendations.len());
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    println!(
        "\n{}",
        format!("Reviewing {} recommendations", recommendations.len())
            .cyan()
            .bold()
    );

    for (index, rec) in recommendations.iter().enumerate() {
        println!(
            "\n{}",
            format!("--- Recommendation {}/{} ---", index + 1, recommendations.len()).cyan()
        );
        print_recommendation(rec);

        let accepted = loop {
            print!("{}", "Apply this recommendation? [Y/n]: ".cyan());
            io::stdout().flush()?;

            let line = match lines.next() {
                Some(line) => line?,
                None => break false, // stdin closed: skip the rest
            };
            match parse_decision(&line) {
                Some(decision) => break decision,
                None => println!("{}", "Please answer 'y' or 'n'.".red()),
            }
        };

        if accepted {
            println!("{}", "Accepted".green());
        } else {
            println!("{}", "Skipped".yellow());
        }
        decisions.push(accepted);
    }

    let accepted = decisions.iter().filter(|d| **d).count();
    println!(
        "\n{}",
        format!("Selected {accepted}/{} recommendations", recommendations.len())
            .green()
            .bold()
    );

    Ok(decisions)
}

/// Prints the recommendation list without prompting (used by `analyze`).
pub fn display_recommendations(recommendations: &[Recommendation]) {
    if recommendations.is_empty() {
        println!("\n{}", "No recommendations generated.".yellow());
        return;
    }

    println!(
        "\n{}",
        format!("Generated {} recommendations:", recommendations.len())
            .cyan()
            .bold()
    );
    for rec in recommendations {
        let tag = colorize_priority(rec.priority, &format!("[P{}]", rec.priority));
        println!(
            "  {} {} ({}) {}",
            tag,
            rec.id,
            rec.target_section,
            truncate(&change_summary(rec), 70)
        );
    }
}

fn print_recommendation(rec: &Recommendation) {
    let label = priority_label(rec.priority);
    println!(
        "  {} {}",
        colorize_priority(rec.priority, &format!("Priority {} ({label})", rec.priority)),
        rec.id.dimmed()
    );
    println!("  Section: {}", rec.target_section.bold());
    println!("  Change:  {}", change_summary(rec));
    if !rec.rationale.is_empty() {
        println!("  Why:     {}", rec.rationale);
    }
}

/// One-line human description of the proposed change.
pub fn change_summary(rec: &Recommendation) -> String {
    match &rec.change {
        SuggestedChange::Replace { find, replace } => {
            format!("replace \"{find}\" with \"{replace}\"")
        }
        SuggestedChange::Append { text } => format!("add \"{text}\""),
    }
}

fn parse_decision(input: &str) -> Option<bool> {
    match input.trim().to_lowercase().as_str() {
        "" | "y" | "yes" => Some(true),
        "n" | "no" => Some(false),
        _ => None,
    }
}

fn priority_label(priority: u8) -> &'static str {
    match priority {
        1 => "Critical",
        2 => "Important",
        3 => "Suggested",
        _ => "Minor",
    }
}

fn colorize_priority(priority: u8, text: &str) -> colored::ColoredString {
    match priority {
        1 => text.red().bold(),
        2 => text.yellow().bold(),
        3 => text.cyan(),
        _ => text.dimmed(),
    }
}

fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        text.to_string()
    } else {
        let cut: String = text.chars().take(max_chars).collect();
        format!("{cut}...")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::recommender::SuggestedChange;

    #[test]
    fn test_parse_decision_defaults_to_yes() {
        assert_eq!(parse_decision(""), Some(true));
        assert_eq!(parse_decision("  "), Some(true));
        assert_eq!(parse_decision("y"), Some(true));
        assert_eq!(parse_decision("YES"), Some(true));
        assert_eq!(parse_decision("n"), Some(false));
        assert_eq!(parse_decision("No"), Some(false));
        assert_eq!(parse_decision("maybe"), None);
    }

    #[test]
    fn test_change_summary_names_both_sides_of_a_replace() {
        let rec = Recommendation {
            id: "rec_001".to_string(),
            priority: 1,
            target_section: "Skills".to_string(),
            change: SuggestedChange::Replace {
                find: "Go".to_string(),
                replace: "Go, Kafka".to_string(),
            },
            rationale: String::new(),
        };
        let summary = change_summary(&rec);
        assert!(summary.contains("Go"));
        assert!(summary.contains("Go, Kafka"));
    }

    #[test]
    fn test_truncate_appends_ellipsis_only_when_needed() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("0123456789abc", 10), "0123456789...");
    }

    #[test]
    fn test_priority_labels() {
        assert_eq!(priority_label(1), "Critical");
        assert_eq!(priority_label(2), "Important");
        assert_eq!(priority_label(3), "Suggested");
        assert_eq!(priority_label(9), "Minor");
    }
}
