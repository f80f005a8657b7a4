//! Per-column, per-row cleaning of a [`Table`].
//!
//! Each target column is cleaned into a standalone sequence of cells, one
//! per row, which is then attached to the table as `<column><suffix>`.
//! Columns are handled in the order given; rows in table order.

use crate::config::{Config, FailurePolicy, ProcessingConfig, TableConfig};
use crate::error::{CleanError, Result};
use crate::filter::{FilterStats, TokenFilter};
use crate::table::{read_table, Table, Value};
use crate::text::Tagger;
use log::{info, warn};
use rayon::prelude::*;
use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Lemmas of one row with their token counts.
type Cleaned = (Vec<String>, FilterStats);

/// Outcome of cleaning one column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnReport {
    /// Source column.
    pub column: String,
    /// Derived column written.
    pub derived: String,
    /// Number of rows cleaned.
    pub rows: usize,
    /// Rows whose tagging failed and were stored empty.
    pub failed_rows: Vec<usize>,
    /// Token counts across all rows.
    pub stats: FilterStats,
}

/// Applies a tagger and a token filter to table columns.
pub struct RowProcessor<T: Tagger> {
    tagger: T,
    filter: TokenFilter,
    table: TableConfig,
    processing: ProcessingConfig,
    /// Dedicated pool when a fixed thread count is configured.
    pool: Option<rayon::ThreadPool>,
}

impl<T: Tagger> RowProcessor<T> {
    /// Creates a processor with default filter and processing settings.
    pub fn new(tagger: T) -> Self {
        Self {
            tagger,
            filter: TokenFilter::default(),
            table: TableConfig::default(),
            processing: ProcessingConfig::default(),
            pool: None,
        }
    }

    /// Creates a processor from configuration.
    ///
    /// The configuration is validated, and the thread pool is built once
    /// here when parallel processing asks for a fixed thread count.
    pub fn from_config(tagger: T, config: &Config) -> Result<Self> {
        config.validate()?;

        let processing = config.processing.clone();
        let pool = if processing.parallel && processing.num_threads > 0 {
            let pool = rayon::ThreadPoolBuilder::new()
                .num_threads(processing.num_threads)
                .build()
                .map_err(|e| CleanError::Config(format!("cannot build thread pool: {}", e)))?;
            Some(pool)
        } else {
            None
        };

        Ok(Self {
            tagger,
            filter: TokenFilter::new(config.filter.clone()),
            table: config.table.clone(),
            processing,
            pool,
        })
    }

    /// Replaces the token filter.
    pub fn with_filter(mut self, filter: TokenFilter) -> Self {
        self.filter = filter;
        self
    }

    /// Sets the tagger failure policy.
    pub fn with_policy(mut self, policy: FailurePolicy) -> Self {
        self.processing.on_tagger_error = policy;
        self
    }

    /// Enables or disables parallel row annotation.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.processing.parallel = parallel;
        self
    }

    /// The tagger in use.
    pub fn tagger(&self) -> &T {
        &self.tagger
    }

    /// Annotates and filters one text.
    pub fn clean_text(&self, text: &str) -> Result<Vec<String>> {
        let tokens = self.tagger.annotate(text)?;
        Ok(self.filter.filter(&tokens))
    }

    fn clean_with_stats(&self, text: &str) -> Result<Cleaned> {
        let tokens = self.tagger.annotate(text)?;
        Ok(self.filter.filter_with_stats(&tokens))
    }

    /// Cleans one column, returning the derived cells in row order.
    pub fn clean_column(&self, table: &Table, column: &str) -> Result<(Vec<Value>, ColumnReport)> {
        let texts = table
            .column(column)?
            .enumerate()
            .map(|(row, value)| match value {
                Value::Text(text) => Ok(text.as_str()),
                Value::Null => Ok(""),
                Value::Tokens(_) => Err(CleanError::NotText {
                    column: column.to_string(),
                    row,
                }),
            })
            .collect::<Result<Vec<&str>>>()?;

        let outcomes = self.annotate_all(&texts);

        let mut values = Vec::with_capacity(outcomes.len());
        let mut report = ColumnReport {
            column: column.to_string(),
            derived: self.table.derived_name(column),
            rows: outcomes.len(),
            failed_rows: Vec::new(),
            stats: FilterStats::default(),
        };

        for (row, outcome) in outcomes.into_iter().enumerate() {
            let outcome = match outcome {
                Some(outcome) => outcome,
                // rows after an aborting failure are never tagged
                None => break,
            };
            match outcome {
                Ok((lemmas, stats)) => {
                    report.stats.merge(stats);
                    values.push(Value::Tokens(lemmas));
                }
                Err(err) => match self.processing.on_tagger_error {
                    FailurePolicy::Abort => {
                        return Err(CleanError::RowFailed {
                            column: column.to_string(),
                            row,
                            source: Box::new(err),
                        });
                    }
                    FailurePolicy::Skip => {
                        warn!("Skipping row {} of column '{}': {}", row, column, err);
                        report.failed_rows.push(row);
                        values.push(Value::Tokens(Vec::new()));
                    }
                },
            }
        }

        Ok((values, report))
    }

    /// Tags and filters every text. Output order matches input order.
    ///
    /// Under [`FailurePolicy::Abort`] no row after the lowest failing row
    /// is tagged; those slots come back as `None`. Every row before the
    /// lowest failure is always tagged, so the failure reported is the
    /// same as in a sequential run.
    fn annotate_all(&self, texts: &[&str]) -> Vec<Option<Result<Cleaned>>> {
        let abort = self.processing.on_tagger_error == FailurePolicy::Abort;
        let first_failure = AtomicUsize::new(usize::MAX);

        let step = |(row, text): (usize, &&str)| {
            if abort && row > first_failure.load(Ordering::Acquire) {
                return None;
            }
            let outcome = self.clean_with_stats(text);
            if abort && outcome.is_err() {
                first_failure.fetch_min(row, Ordering::AcqRel);
            }
            Some(outcome)
        };

        if !self.processing.parallel {
            return texts.iter().enumerate().map(&step).collect();
        }

        let run = || texts.par_iter().enumerate().map(&step).collect::<Vec<_>>();
        match &self.pool {
            Some(pool) => pool.install(run),
            None => run(),
        }
    }

    /// Cleans `columns` in order and returns the table with derived columns.
    pub fn process<S: AsRef<str>>(&self, table: Table, columns: &[S]) -> Result<Table> {
        self.process_with_report(table, columns).map(|(table, _)| table)
    }

    /// Like [`process`](Self::process), also returning one report per column.
    pub fn process_with_report<S: AsRef<str>>(
        &self,
        mut table: Table,
        columns: &[S],
    ) -> Result<(Table, Vec<ColumnReport>)> {
        for column in columns {
            let derived = self.table.derived_name(column.as_ref());
            if columns.iter().any(|c| c.as_ref() == derived) {
                return Err(CleanError::Config(format!(
                    "derived column '{}' would overwrite a source column",
                    derived
                )));
            }
        }

        let mut reports = Vec::with_capacity(columns.len());
        for column in columns {
            let column = column.as_ref();
            let (values, report) = self.clean_column(&table, column)?;
            info!(
                "Cleaned column '{}' into '{}': {} rows, kept {} of {} tokens",
                report.column, report.derived, report.rows, report.stats.kept, report.stats.seen
            );
            if !report.failed_rows.is_empty() {
                warn!(
                    "Column '{}': {} rows failed tagging and were left empty",
                    column,
                    report.failed_rows.len()
                );
            }
            table = table.with_column(&report.derived, values)?;
            reports.push(report);
        }

        Ok((table, reports))
    }

    /// Reads `path` and cleans `columns`.
    pub fn process_file<S: AsRef<str>>(&self, path: &Path, columns: &[S]) -> Result<Table> {
        let table = read_table(path, &self.table)?;
        self.process(table, columns)
    }
}

/// Reads a delimited file and cleans `columns` with `tagger`.
pub fn clean_file<T: Tagger, S: AsRef<str>>(
    path: &Path,
    columns: &[S],
    tagger: T,
    config: &Config,
) -> Result<Table> {
    RowProcessor::from_config(tagger, config)?.process_file(path, columns)
}
