use crate::core::arithmetic::{squares, try_calculate_sum};
use crate::core::greeting::greet;
use crate::core::repr::PyRepr;
use crate::core::{OutputSink, Result, ShowcaseInputs};

/// Runs the four showcase steps in order and writes one line per step.
pub struct Showcase {
    inputs: ShowcaseInputs,
}

impl Showcase {
    pub fn new(inputs: ShowcaseInputs) -> Self {
        Self { inputs }
    }

    pub fn inputs(&self) -> &ShowcaseInputs {
        &self.inputs
    }

    /// Renders every line without writing anything.
    pub fn render(inputs: &ShowcaseInputs) -> Result<Vec<String>> {
        tracing::debug!("Step 1: greeting {:?}", inputs.name);
        let greeting = greet(&inputs.name);

        tracing::debug!("Step 2: summing {} numbers", inputs.numbers.len());
        let total = try_calculate_sum(&inputs.numbers)?;
        let sum_line = format!("Sum of numbers {}: {}", inputs.numbers.repr()?, total);

        tracing::debug!("Step 3: building {} squares", inputs.square_count);
        let squares = squares(inputs.square_count);
        let squares_line = format!(
            "First {} square numbers: {}",
            inputs.square_count,
            squares.repr()?
        );

        tracing::debug!("Step 4: rendering person record");
        let person_line = format!("Person details: {}", inputs.person.repr()?);

        Ok(vec![greeting, sum_line, squares_line, person_line])
    }

    /// Writes all lines to `sink` and returns how many were written.
    ///
    /// Nothing reaches the sink if rendering fails.
    pub fn run<S: OutputSink>(&self, mut sink: S) -> Result<usize> {
        let lines = Self::render(&self.inputs)?;

        for line in &lines {
            sink.write_line(line)?;
        }
        sink.flush()?;

        tracing::debug!("Showcase wrote {} lines", lines.len());
        Ok(lines.len())
    }
}

impl Default for Showcase {
    fn default() -> Self {
        Self::new(ShowcaseInputs::default())
    }
}
