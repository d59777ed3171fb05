use serde_json::json;

/// Append-only display log of a battle.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BattleLogger {
    lines: Vec<String>,
}

impl BattleLogger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    pub fn extend<I>(&mut self, lines: I)
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.lines.extend(lines.into_iter().map(Into::into));
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Lines appended after the first `start`.
    pub fn since(&self, start: usize) -> &[String] {
        self.lines.get(start..).unwrap_or(&[])
    }

    /// The last `n` lines, oldest first.
    pub fn tail(&self, n: usize) -> &[String] {
        let start = self.lines.len().saturating_sub(n);
        &self.lines[start..]
    }

    pub fn to_json(&self) -> serde_json::Value {
        json!({
            "lines": self.lines.len(),
            "log": self.lines,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tail_and_since() {
        let mut log = BattleLogger::new();
        log.push("Battle start!");
        log.extend(["a", "b", "c"]);
        assert_eq!(log.len(), 4);
        assert_eq!(log.tail(2), ["b".to_string(), "c".to_string()]);
        assert_eq!(log.tail(10).len(), 4);
        assert_eq!(log.since(3), ["c".to_string()]);
        assert!(log.since(9).is_empty());
    }

    #[test]
    fn json_export() {
        let mut log = BattleLogger::new();
        log.push("Turn 1");
        let value = log.to_json();
        assert_eq!(value["lines"], 1);
        assert_eq!(value["log"][0], "Turn 1");
    }
}
