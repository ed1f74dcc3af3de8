use std::fmt;

/// A patient waiting for triage.  Lower urgency is served sooner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Patient {
    pub name: String,
    pub urgency: i64,
}

impl Patient {
    pub fn new(name: impl Into<String>, urgency: i64) -> Self {
        Patient {
            name: name.into(),
            urgency,
        }
    }
}

impl fmt::Display for Patient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.urgency)
    }
}

impl<S: Into<String>> From<(S, i64)> for Patient {
    fn from(pair: (S, i64)) -> Self {
        Patient::new(pair.0, pair.1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(Patient::new("Taylor", 1).to_string(), "Taylor (1)");
        assert_eq!(Patient::from(("Avery", -5)).to_string(), "Avery (-5)");
    }
}
