//! Plain-text tables for the command-line driver.

use crate::process::ProcessSet;
use crate::schedulers::Outcome;

pub const RULE: &str = "--------------------------------------------------------";

/// One row per process: id, active flag, arrival, service.
pub fn process_table(set: &ProcessSet) -> String {
    let mut out = format!(
        "{:>5} {:>6} {:>8} {:>8}\n",
        "PID", "ACTIVE", "ARRIVAL", "SERVICE"
    );
    for p in set {
        out.push_str(&format!(
            "{:>5} {:>6} {:>8} {:>8}\n",
            p.id().to_string(),
            u8::from(p.is_active()),
            p.arrival(),
            p.service()
        ));
    }
    out
}

/// ATT line for one policy, with the `d/ATT` ratio.
pub fn outcome_summary(outcome: &Outcome, d: f64) -> String {
    let ratio = if outcome.att > 0.0 {
        format!("{:.4}", d / outcome.att)
    } else {
        "inf".to_string()
    };
    format!(
        "The ATT for {} is: {:.2}. d/ATT: {}. makespan {} preemptions {}",
        outcome.policy, outcome.att, ratio, outcome.makespan, outcome.preemptions
    )
}

/// Turnaround lines in termination order.
pub fn turnaround_lines(outcome: &Outcome) -> String {
    outcome
        .completions
        .iter()
        .map(|c| format!("TT for {} : {}\n", c.pid, c.turnaround))
        .collect()
}

/// Per-process TT grid, one column per policy, rows in arrival order.
pub fn comparison_table(set: &ProcessSet, outcomes: &[Outcome]) -> String {
    let mut rows = Vec::with_capacity(set.len() + 2);

    let header: String = outcomes
        .iter()
        .map(|o| format!(" {:>8}", o.policy.name()))
        .collect();
    rows.push(format!("{:>5}{}", "PID", header));

    for p in set {
        let cells: String = outcomes
            .iter()
            .map(|o| match o.turnaround_of(p.id()) {
                Some(tt) => format!(" {:>8}", tt),
                None => format!(" {:>8}", "-"),
            })
            .collect();
        rows.push(format!("{:>5}{}", p.id().to_string(), cells));
    }

    let atts: String = outcomes.iter().map(|o| format!(" {:>8.2}", o.att)).collect();
    rows.push(format!("{:>5}{}", "ATT", atts));

    rows.join("\n") + "\n"
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::run_all;
    use crate::schedulers::Policy;

    #[test]
    fn comparison_table_lists_every_policy() {
        let set = ProcessSet::from_pairs(&[(0, 5), (1, 1)]);
        let outcomes = run_all(&set, &[Policy::Fifo, Policy::Srt]).unwrap();
        let table = comparison_table(&set, &outcomes);
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines[0], "  PID     FIFO      SRT");
        assert_eq!(lines[1], "   p1        5        6");
        assert_eq!(lines[2], "   p2        5        1");
        assert_eq!(lines[3], "  ATT     5.00     3.50");
    }

    #[test]
    fn summary_reports_ratio() {
        let set = ProcessSet::from_pairs(&[(0, 4)]);
        let outcomes = run_all(&set, &[Policy::Fifo]).unwrap();
        let line = outcome_summary(&outcomes[0], 2.0);
        assert!(line.starts_with("The ATT for FIFO is: 4.00. d/ATT: 0.5000."));
    }

    #[test]
    fn process_table_shows_active_flag() {
        let set = ProcessSet::from_pairs(&[(3, 9)]);
        let table = process_table(&set);
        assert_eq!(table.lines().nth(1), Some("   p1      1        3        9"));
    }
}
