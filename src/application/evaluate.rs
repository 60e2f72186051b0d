//! Evaluate Use Case
//!
//! Reads a plan document through the [`FileSystem`] port, decodes it,
//! evaluates it and optionally writes the HTML report next to it.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::info;

use crate::config::Config;
use crate::domain::entities::Plan;
use crate::domain::ports::FileSystem;
use crate::domain::services::{EvaluationResult, PlanEvaluator};
use crate::error::{GearplanError, GearplanResult};
use crate::infrastructure::decoders::decoder_for_path;
use crate::presentation::html::{render_report, ReportOptions};

/// Outcome of one evaluate (and optional render) run
#[derive(Debug, Clone, Serialize)]
pub struct EvaluateReport {
    pub plan_path: PathBuf,
    /// Where the HTML report was written, if it was
    pub report_path: Option<PathBuf>,
    pub result: EvaluationResult,
}

impl EvaluateReport {
    pub fn is_clean(&self) -> bool {
        self.result.is_clean()
    }
}

/// `<plan file name><suffix>`, next to the plan
pub fn report_path_for(plan_path: &Path, suffix: &str) -> PathBuf {
    let mut name = OsString::from(plan_path.as_os_str());
    name.push(suffix);
    PathBuf::from(name)
}

pub struct EvaluateUseCase<FS> {
    fs: FS,
    config: Config,
}

impl<FS: FileSystem> EvaluateUseCase<FS> {
    pub fn new(fs: FS, config: Config) -> Self {
        Self { fs, config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    fn evaluator(&self) -> PlanEvaluator {
        PlanEvaluator::new(self.config.stash())
    }

    /// Read and decode a plan document
    pub fn load_plan(&self, path: &Path) -> GearplanResult<Plan> {
        let decoder = decoder_for_path(path)?;
        let content = self.fs.read(path)?;
        decoder.decode(&content, path)
    }

    /// Evaluate without producing a report
    pub fn check(&self, plan_path: &Path) -> GearplanResult<EvaluateReport> {
        let plan = self.load_plan(plan_path)?;
        let result = self.evaluator().evaluate(&plan);

        Ok(EvaluateReport {
            plan_path: plan_path.to_path_buf(),
            report_path: None,
            result,
        })
    }

    /// Evaluate and write the HTML report to `output`, or next to the plan.
    pub fn render(&self, plan_path: &Path, output: Option<&Path>) -> GearplanResult<EvaluateReport> {
        let plan = self.load_plan(plan_path)?;
        let options = ReportOptions::from_config(&self.config.report);
        let rendered = render_report(&plan, &self.evaluator(), &options);

        let report_path = match output {
            Some(path) => path.to_path_buf(),
            None => report_path_for(plan_path, &self.config.report.suffix),
        };
        self.fs
            .write(&report_path, &rendered.html)
            .map_err(|e| GearplanError::report_write(&report_path, e))?;

        info!(
            plan = %plan_path.display(),
            report = %report_path.display(),
            clean = rendered.result.is_clean(),
            "report written"
        );

        Ok(EvaluateReport {
            plan_path: plan_path.to_path_buf(),
            report_path: Some(report_path),
            result: rendered.result,
        })
    }
}
