use futures::try_join;
use tracing::instrument;

use layered_expect::{Comparator, DataTable, ExpectResult, Value};

use crate::Steps;

impl Steps {
    /// Validate one value against another.
    ///
    /// `I expect '$value' equals to '$anotherValue'`
    /// `I expect '$value' does not contain '56'`
    #[instrument(skip(self), err(Display))]
    pub async fn expect(&self, actual: &str, validation: &str, expected: &str) -> ExpectResult<()> {
        let validation = self.engine.dispatch(validation)?;
        let (actual, expected) = try_join!(self.engine.resolve(actual), self.engine.resolve(expected))?;
        validation.compare(&actual, &expected)?;
        Ok(())
    }

    /// `I expect at least 2 elements in '$arr' array to be above '50'`
    #[instrument(skip(self), err(Display))]
    pub async fn expect_at_least(
        &self,
        required: usize,
        array: &str,
        validation: &str,
        expected: &str,
    ) -> ExpectResult<()> {
        let validation = self.engine.dispatch(validation)?;
        let (array, expected) = try_join!(self.resolve_array(array), self.engine.resolve(expected))?;
        self.engine
            .validate_at_least(required, &array, &validation, &expected)
    }

    /// `I expect every element in '$arr' array to be above '50'`
    #[instrument(skip(self), err(Display))]
    pub async fn expect_every(&self, array: &str, validation: &str, expected: &str) -> ExpectResult<()> {
        let validation = self.engine.dispatch(validation)?;
        let (array, expected) = try_join!(self.resolve_array(array), self.engine.resolve(expected))?;
        self.engine.validate_every(&array, &validation, &expected)
    }

    /// `I expect '$arr' array to be sorted by '$ascending'`
    ///
    /// The sorter must be a function stored in memory; none is provided here.
    #[instrument(skip(self), err(Display))]
    pub async fn expect_sorted(&self, array: &str, sorter: &str) -> ExpectResult<()> {
        let (array, sorter) = try_join!(self.resolve_array(array), self.engine.resolve(sorter))?;
        self.engine.verify_sorted(&array, &sorter)
    }

    /// Validate an array against the last cell of every table row.
    ///
    /// ```text
    /// I expect '$arr' array to have members:
    ///   | uno  |
    ///   | dos  |
    ///   | tres |
    /// ```
    #[instrument(skip(self, table), err(Display))]
    pub async fn expect_array_table(
        &self,
        array: &str,
        validation: &str,
        table: &DataTable,
    ) -> ExpectResult<()> {
        let validation = self.engine.dispatch(validation)?;
        let (array, members) = try_join!(self.engine.resolve(array), self.engine.rows_to_sequence(table))?;
        validation.compare(&array, &Value::Array(members))?;
        Ok(())
    }

    /// `I expect '$text' to equal at least one of '$jq(["free", "11.99"])'`
    #[instrument(skip(self), err(Display))]
    pub async fn expect_any_of(&self, actual: &str, validation: &str, candidates: &str) -> ExpectResult<()> {
        let validation = self.engine.dispatch(validation)?;
        let (actual, candidates) = try_join!(self.engine.resolve(actual), self.resolve_array(candidates))?;
        self.engine.validate_any_of(&actual, &candidates, &validation)
    }

    /// ```text
    /// I expect '$text' to equal at least one of:
    ///   | free  |
    ///   | 11.99 |
    /// ```
    #[instrument(skip(self, table), err(Display))]
    pub async fn expect_any_of_table(
        &self,
        actual: &str,
        validation: &str,
        table: &DataTable,
    ) -> ExpectResult<()> {
        let validation = self.engine.dispatch(validation)?;
        let (actual, candidates) = try_join!(self.engine.resolve(actual), self.engine.rows_to_sequence(table))?;
        self.engine
            .validate_any_of(&actual, &Value::Array(candidates), &validation)
    }

    /// `I expect '$text' not to equal all of '$jq(["free", "10.00"])'`
    #[instrument(skip(self), err(Display))]
    pub async fn expect_all_of(&self, actual: &str, validation: &str, candidates: &str) -> ExpectResult<()> {
        let validation = self.engine.dispatch(validation)?;
        let (actual, candidates) = try_join!(self.engine.resolve(actual), self.resolve_array(candidates))?;
        self.engine.validate_all_of(&actual, &candidates, &validation)
    }

    #[instrument(skip(self, table), err(Display))]
    pub async fn expect_all_of_table(
        &self,
        actual: &str,
        validation: &str,
        table: &DataTable,
    ) -> ExpectResult<()> {
        let validation = self.engine.dispatch(validation)?;
        let (actual, candidates) = try_join!(self.engine.resolve(actual), self.engine.rows_to_sequence(table))?;
        self.engine
            .validate_all_of(&actual, &Value::Array(candidates), &validation)
    }
}
