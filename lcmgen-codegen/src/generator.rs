//! Generation driver.
//!
//! Walks the IR once, in declaration order, and writes one `.vala` file per
//! struct whose output is stale according to the configured gate.

use crate::error::CodegenError;
use crate::gate::{Always, Lazy, RegenerationGate};
use crate::options::ValaOptions;
use crate::vala::ClassGenerator;
use lcmgen_schema::ir::SchemaIr;
use std::fs::File;
use std::io::Write;
use std::path::PathBuf;

/// Outcome of a generation run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerationReport {
    /// Files written, in IR order.
    pub written: Vec<PathBuf>,
    /// Files left untouched because they were up to date.
    pub skipped: Vec<PathBuf>,
}

/// Vala backend driver.
pub struct Generator<'a> {
    ir: &'a SchemaIr,
    options: ValaOptions,
    gate: Box<dyn RegenerationGate + 'a>,
}

impl<'a> Generator<'a> {
    /// Creates a driver. The gate follows `options`: lazy options compare
    /// timestamps, otherwise every file is regenerated.
    #[must_use]
    pub fn new(ir: &'a SchemaIr, options: ValaOptions) -> Self {
        let gate: Box<dyn RegenerationGate + 'a> = if options.is_lazy() {
            Box::new(Lazy)
        } else {
            Box::new(Always)
        };
        Self { ir, options, gate }
    }

    /// Replaces the regeneration gate.
    #[must_use]
    pub fn gate(mut self, gate: impl RegenerationGate + 'a) -> Self {
        self.gate = Box::new(gate);
        self
    }

    /// Runs the generation pass.
    ///
    /// A file that cannot be opened stops the run immediately; files written
    /// before that point are kept.
    ///
    /// # Errors
    /// Returns `CodegenError::OpenOutput` if an output file cannot be opened,
    /// `CodegenError::Io` if writing fails, or the rendering error of the
    /// first struct that cannot be generated.
    pub fn run(&self) -> Result<GenerationReport, CodegenError> {
        let classes = ClassGenerator::new(self.ir);
        let mut report = GenerationReport::default();

        for def in self.ir.structs() {
            let path = self.options.output_path(&def.name);

            if !self.gate.needs_generation(&def.source_file, &path) {
                tracing::debug!("{} is up to date", path.display());
                report.skipped.push(path);
                continue;
            }

            let code = classes.generate_struct(def)?;

            let mut file =
                File::create(&path).map_err(|e| CodegenError::open_output(&path, e))?;
            file.write_all(code.as_bytes())?;
            file.flush()?;

            tracing::info!("Generated {} for struct {}", path.display(), def.name);
            report.written.push(path);
        }

        tracing::debug!(
            "Vala generation finished: {} written, {} skipped",
            report.written.len(),
            report.skipped.len()
        );

        Ok(report)
    }
}
