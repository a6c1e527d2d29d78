//! # Row and column labels
//!
//! Each row of the tableau is labeled with the variable that is basic in that row, each column
//! with a variable that is non-basic. A pivot exchanges one row label with one column label.
use std::fmt;

/// Name of a row or column of the tableau.
#[derive(Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Label {
    /// Slack variable of the constraint with this (1-based) number, rendered as `s1`, `s2`, ...
    Slack(usize),
    /// Decision variable of the problem, rendered with a leading minus: `-x1`.
    ///
    /// The minus is presentational only; it does not change any stored value.
    Decision(String),
    /// The objective function row, rendered as `F`.
    Objective,
    /// The constant (right-hand side) column, rendered as `const`.
    Constant,
}

impl Label {
    /// Name of the decision variable, without the presentational minus.
    pub fn decision_variable(&self) -> Option<&str> {
        match self {
            Label::Decision(name) => Some(name.as_str()),
            _ => None,
        }
    }

    /// Whether this label names a variable, as opposed to the objective row or constant column.
    pub fn is_variable(&self) -> bool {
        matches!(self, Label::Slack(_) | Label::Decision(_))
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Label::Slack(number) => format!("s{}", number),
            Label::Decision(name) => format!("-{}", name),
            Label::Objective => "F".to_string(),
            Label::Constant => "const".to_string(),
        };

        f.pad(&text)
    }
}

#[cfg(test)]
mod test {
    use crate::algorithm::two_phase::tableau::label::Label;

    #[test]
    fn display() {
        assert_eq!(Label::Slack(2).to_string(), "s2");
        assert_eq!(Label::Decision("x1".to_string()).to_string(), "-x1");
        assert_eq!(Label::Objective.to_string(), "F");
        assert_eq!(format!("{:<7}|", Label::Constant), "const  |");
    }

    #[test]
    fn variables() {
        assert_eq!(Label::Decision("y".to_string()).decision_variable(), Some("y"));
        assert_eq!(Label::Slack(1).decision_variable(), None);
        assert!(Label::Slack(1).is_variable());
        assert!(!Label::Constant.is_variable());
        assert!(!Label::Objective.is_variable());
    }
}
