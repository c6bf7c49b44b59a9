//! The generation pipeline
//!
//! raw text → [`normalize`] → [`eliminate_implications`] → parse + extract
//! variables → one evaluation per assignment → [`render_markdown`].

use crate::assignment::Assignments;
use crate::cancel::CancelToken;
use crate::error::TruthTableError;
use crate::formula::{nesting_depth, Formula, FormulaError, VariableSet};
use crate::implication::eliminate_implications;
use crate::log::targets::{EVALUATION, PIPELINE};
use crate::normalize::normalize;
use crate::table::{render_markdown, Row, TruthTable};
use crate::TruthTableConfig;
use std::time::{Duration, Instant};

/// A formula that went through normalization, implication elimination and
/// parsing, ready to be evaluated any number of times
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreparedFormula {
    canonical: String,
    formula: Formula,
    variables: VariableSet,
}

impl PreparedFormula {
    /// The canonical expression text the formula was parsed from
    pub fn canonical(&self) -> &str {
        &self.canonical
    }

    /// The parsed tree
    pub fn formula(&self) -> &Formula {
        &self.formula
    }

    /// The variable columns
    pub fn variables(&self) -> &VariableSet {
        &self.variables
    }

    /// Evaluate under one assignment aligned with [`variables`](Self::variables)
    pub fn evaluate(&self, values: &[bool]) -> Result<bool, FormulaError> {
        self.formula.evaluate(&self.variables, values)
    }
}

/// Generates truth tables under a [`TruthTableConfig`]
///
/// # Examples
///
/// ```
/// use latex_truth_table::{TruthTableConfig, TruthTableGenerator};
///
/// # fn main() -> Result<(), latex_truth_table::TruthTableError> {
/// let generator = TruthTableGenerator::new(TruthTableConfig {
///     result_label: "f".to_string(),
///     ..Default::default()
/// });
///
/// let table = generator.build(r"p \wedge \neg q")?;
/// assert_eq!(table.results().collect::<Vec<_>>(), vec![false, false, true, false]);
///
/// let markdown = generator.generate(r"p \wedge \neg q")?;
/// assert!(markdown.starts_with("|$p$|$q$|$\\text{f}$|"));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct TruthTableGenerator {
    config: TruthTableConfig,
    cancel: CancelToken,
}

impl TruthTableGenerator {
    /// Create a generator with the given configuration
    pub fn new(config: TruthTableConfig) -> Self {
        TruthTableGenerator {
            config,
            cancel: CancelToken::new(),
        }
    }

    /// The configuration in use
    pub fn config(&self) -> &TruthTableConfig {
        &self.config
    }

    /// A handle that stops this generator's row evaluation when cancelled
    pub fn cancel_token(&self) -> CancelToken {
        self.cancel.clone()
    }

    /// Normalize, eliminate implications, parse and collect variables
    ///
    /// Fails on blank input, formulas nested deeper than
    /// [`TruthTableConfig::max_depth`], malformed expressions, and formulas
    /// with more variables than [`TruthTableConfig::max_variables`].
    pub fn prepare(&self, input: &str) -> Result<PreparedFormula, TruthTableError> {
        let normalized = normalize(input);
        if normalized.trim().is_empty() {
            return Err(TruthTableError::EmptyInput);
        }

        let canonical = eliminate_implications(&normalized);

        let depth = nesting_depth(&canonical);
        if depth > self.config.max_depth {
            log::warn!(
                target: PIPELINE,
                "Refusing nesting depth {}, limit is {}",
                depth,
                self.config.max_depth
            );
            return Err(TruthTableError::TooDeep {
                depth,
                limit: self.config.max_depth,
            });
        }

        let formula = Formula::parse(&canonical)?;
        let variables = VariableSet::extract(&canonical);

        if variables.len() > self.config.max_variables {
            log::warn!(
                target: PIPELINE,
                "Refusing {} variables, limit is {}",
                variables.len(),
                self.config.max_variables
            );
            return Err(TruthTableError::TooManyVariables {
                count: variables.len(),
                limit: self.config.max_variables,
            });
        }

        log::debug!(
            target: PIPELINE,
            "Prepared {:?} with variables {}",
            canonical,
            variables
        );
        Ok(PreparedFormula {
            canonical,
            formula,
            variables,
        })
    }

    /// Stream the rows of a prepared formula in enumeration order
    ///
    /// Cancellation and the timeout are checked before every row. The first
    /// error ends the stream.
    pub fn rows<'a>(&'a self, prepared: &'a PreparedFormula) -> Rows<'a> {
        Rows {
            prepared,
            assignments: Assignments::new(prepared.variables.len()),
            cancel: &self.cancel,
            timeout: self
                .config
                .timeout
                .map(|budget| (Instant::now(), budget)),
            finished: false,
        }
    }

    /// Build the complete table for `input`
    pub fn build(&self, input: &str) -> Result<TruthTable, TruthTableError> {
        let prepared = self.prepare(input)?;
        let rows = self.rows(&prepared).collect::<Result<Vec<_>, _>>()?;
        Ok(TruthTable::new(prepared.variables, rows))
    }

    /// Build the table for `input` and render it as Markdown
    pub fn generate(&self, input: &str) -> Result<String, TruthTableError> {
        let table = self.build(input)?;
        Ok(render_markdown(&table, &self.config.result_label))
    }
}

/// Iterator over the rows of a truth table, see [`TruthTableGenerator::rows`]
#[derive(Debug)]
pub struct Rows<'a> {
    prepared: &'a PreparedFormula,
    assignments: Assignments,
    cancel: &'a CancelToken,
    timeout: Option<(Instant, Duration)>,
    finished: bool,
}

impl Rows<'_> {
    fn check_interrupted(&self) -> Result<(), TruthTableError> {
        if self.cancel.is_cancelled() {
            log::warn!(target: EVALUATION, "Cancelled");
            return Err(TruthTableError::Cancelled);
        }
        if let Some((start, budget)) = self.timeout {
            if start.elapsed() >= budget {
                log::warn!(target: EVALUATION, "Timed out after {:?}", budget);
                return Err(TruthTableError::TimedOut { after: budget });
            }
        }
        Ok(())
    }
}

impl Iterator for Rows<'_> {
    type Item = Result<Row, TruthTableError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        let assignment = self.assignments.next()?;

        let outcome = self.check_interrupted().and_then(|()| {
            self.prepared
                .evaluate(&assignment)
                .map_err(TruthTableError::from)
        });
        match outcome {
            Ok(result) => {
                log::trace!(target: EVALUATION, "{:?} => {}", assignment, result);
                Some(Ok(Row { assignment, result }))
            }
            Err(err) => {
                self.finished = true;
                Some(Err(err))
            }
        }
    }
}
