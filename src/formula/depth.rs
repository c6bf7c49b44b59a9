//! Nesting depth of canonical text, measured without building the tree

/// Operators and negations seen so far inside one pair of parentheses
#[derive(Debug, Default)]
struct Level {
    /// `&&` and `||` bytes, two per operator
    operator_bytes: usize,
    /// `!` waiting for their operand
    negations: usize,
    /// Deepest operand closed at this level
    deepest: usize,
}

impl Level {
    fn close_operand(&mut self, inner: usize) {
        self.deepest = self.deepest.max(self.negations + inner);
        self.negations = 0;
    }

    fn depth(&self) -> usize {
        self.operator_bytes.div_ceil(2) + self.deepest.max(self.negations)
    }
}

/// Upper bound on the number of operators along any root-to-leaf path of the
/// tree [`Formula::parse`](super::Formula::parse) would build from `canonical`
///
/// A chain of `k` binary operators at one parenthesis level associates into a
/// tree up to `k` deep, and every `!` adds one level to its operand.
/// Parentheses on their own add nothing. The scan is a single pass with an
/// explicit stack, so malformed or very long input is measured safely.
///
/// # Examples
///
/// ```
/// use latex_truth_table::formula::nesting_depth;
///
/// assert_eq!(nesting_depth("p"), 0);
/// assert_eq!(nesting_depth("((p))"), 0);
/// assert_eq!(nesting_depth("!(!(q))"), 2);
/// assert_eq!(nesting_depth("p && q || r"), 2);
/// ```
pub fn nesting_depth(canonical: &str) -> usize {
    let mut stack: Vec<Level> = Vec::new();
    let mut level = Level::default();

    for byte in canonical.bytes() {
        match byte {
            b'!' => level.negations += 1,
            b'&' | b'|' => level.operator_bytes += 1,
            b'(' => stack.push(std::mem::take(&mut level)),
            b')' => {
                // An unmatched `)` is left for the parser to report
                if let Some(outer) = stack.pop() {
                    let inner = level.depth();
                    level = outer;
                    level.close_operand(inner);
                }
            }
            b if b.is_ascii_alphanumeric() => level.close_operand(0),
            _ => {}
        }
    }

    while let Some(outer) = stack.pop() {
        let inner = level.depth();
        level = outer;
        level.close_operand(inner);
    }
    level.depth()
}
