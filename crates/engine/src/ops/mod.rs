//! The recalculation driver.
//!
//! [`CostingModel`] owns one year's [`ModelInput`] together with the
//! [`ModelOutput`] derived from it. Every edit goes through
//! [`CostingModel::mutate`]: the edit is applied to a working copy, the copy
//! is validated and fully recalculated, and only then are input and output
//! swapped in together. A failed edit leaves the model exactly as it was.
//!
//! The per-entity edit operations live in the submodules.

use crate::{ModelInput, ModelOutput, Notice, ResultEngine, calculate, reconcile};

mod assets;
mod non_salary;
mod registry;
mod rooms;
mod staff;
mod usage;

#[derive(Clone, Debug)]
pub struct CostingModel {
    input: ModelInput,
    output: ModelOutput,
    revision: u64,
}

impl CostingModel {
    /// Validate and cost `input`.
    pub fn new(input: ModelInput) -> ResultEngine<Self> {
        let output = calculate(&input)?;
        Ok(Self {
            input,
            output,
            revision: 0,
        })
    }

    pub fn input(&self) -> &ModelInput {
        &self.input
    }

    /// Derived output, always consistent with [`Self::input`].
    pub fn output(&self) -> &ModelOutput {
        &self.output
    }

    /// Number of successful edits since the model was created.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Reconciliation notices for the current input.
    pub fn notices(&self) -> ResultEngine<Vec<Notice>> {
        reconcile(&self.input, &self.output)
    }

    /// Give the input back, dropping the derived data.
    pub fn into_input(self) -> ModelInput {
        self.input
    }

    /// Apply `edit` and recompute everything from scratch.
    ///
    /// Input and output are replaced together only when both the edit and the
    /// recalculation succeed.
    pub(crate) fn mutate<T>(
        &mut self,
        action: &'static str,
        edit: impl FnOnce(&mut ModelInput) -> ResultEngine<T>,
    ) -> ResultEngine<T> {
        let mut working = self.input.clone();
        let value = edit(&mut working).inspect_err(|err| {
            tracing::warn!(action, financial_year = %self.input.financial_year, "edit rejected: {err}");
        })?;
        let output = calculate(&working).inspect_err(|err| {
            tracing::warn!(action, financial_year = %self.input.financial_year, "recalculation rejected: {err}");
        })?;

        self.input = working;
        self.output = output;
        self.revision += 1;
        tracing::debug!(
            action,
            financial_year = %self.input.financial_year,
            revision = self.revision,
            "costing model recalculated"
        );
        Ok(value)
    }
}
