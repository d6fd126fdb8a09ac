//! Interactive console session: read two triangles and a point, print results.
//!
//! The session is generic over its input and output so it can run against
//! stdin/stdout or an in-memory transcript.

use crate::error::{Result, TriangleError};
use crate::input::parse_point;
use crate::primitives::Point2;
use crate::triangle::{compare_areas, AreaComparison, Containment, Triangle};
use std::io::{BufRead, Write};

/// Knobs for a [`Session`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionSettings {
    /// Digits after the decimal point when printing areas.
    pub precision: usize,
    /// Rule used for the point-in-triangle test.
    pub containment: Containment,
    /// Maximum attempts per prompt; `None` retries forever.
    pub max_attempts: Option<usize>,
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            precision: 2,
            containment: Containment::default(),
            max_attempts: None,
        }
    }
}

/// Everything a completed session computed.
#[derive(Debug)]
pub struct Report {
    /// The first accepted triangle.
    pub first: Triangle<f64>,
    /// The second accepted triangle.
    pub second: Triangle<f64>,
    /// How the first triangle's area compares to the second's.
    pub comparison: AreaComparison,
    /// The query point.
    pub point: Point2<f64>,
    /// Whether the point lies inside the first triangle.
    pub in_first: bool,
    /// Whether the point lies inside the second triangle.
    pub in_second: bool,
    /// Number of rejected answers across all prompts.
    pub retries: usize,
}

/// A console session over a reader and a writer.
pub struct Session<R, W> {
    input: R,
    output: W,
    settings: SessionSettings,
    retries: usize,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, output: W, settings: SessionSettings) -> Self {
        Self {
            input,
            output,
            settings,
            retries: 0,
        }
    }

    /// Consumes the session and returns its writer.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Runs the full dialogue.
    ///
    /// # Errors
    ///
    /// Only unrecoverable errors escape: end of input, I/O failures and
    /// [`TriangleError::AttemptsExhausted`]. Malformed answers are reported
    /// to the user and asked again.
    pub fn run(&mut self) -> Result<Report> {
        tracing::info!(
            containment = ?self.settings.containment,
            precision = self.settings.precision,
            "starting session"
        );

        let first = self.read_triangle("first", "3,4,5")?;
        let second = self.read_triangle("second", "6,8,10")?;

        writeln!(self.output, "First triangle: {first}")?;
        writeln!(self.output, "Second triangle: {second}")?;

        let comparison = compare_areas(&first, &second);
        let verdict = match comparison {
            AreaComparison::FirstLarger => "The first triangle has the larger area.",
            AreaComparison::SecondLarger => "The second triangle has the larger area.",
            AreaComparison::Equal => "The triangles have equal areas.",
        };
        writeln!(self.output, "{verdict}")?;

        let point = self.prompt(
            "point",
            "Enter the point coordinates to test (e.g. 1,1):",
            parse_point::<f64>,
        )?;

        let mode = self.settings.containment;
        let in_first = first.contains_point_with(point, mode);
        let in_second = second.contains_point_with(point, mode);
        self.report_containment(point, "first", in_first)?;
        self.report_containment(point, "second", in_second)?;

        tracing::info!(
            ?comparison,
            in_first,
            in_second,
            retries = self.retries,
            "session finished"
        );

        Ok(Report {
            first,
            second,
            comparison,
            point,
            in_first,
            in_second,
            retries: self.retries,
        })
    }

    /// Prints the exit prompt and waits for one line. End of input is fine.
    pub fn wait_for_exit(&mut self) -> Result<()> {
        writeln!(self.output, "Press Enter to exit...")?;
        self.output.flush()?;
        let mut buf = Vec::new();
        self.input.read_until(b'\n', &mut buf)?;
        Ok(())
    }

    fn read_triangle(&mut self, ordinal: &'static str, example: &str) -> Result<Triangle<f64>> {
        let message = format!(
            "Enter the sides of the {ordinal} triangle separated by commas (e.g. {example}):"
        );
        let triangle = self.prompt(ordinal, &message, Triangle::<f64>::parse)?;

        if triangle.is_degenerate() {
            tracing::warn!(
                sides = ?triangle.sides(),
                "sides violate the triangle inequality; area is not meaningful"
            );
        } else {
            tracing::debug!(sides = ?triangle.sides(), "accepted {ordinal} triangle");
        }

        writeln!(
            self.output,
            "Area of the {ordinal} triangle: {:.*}",
            self.settings.precision,
            triangle.area()
        )?;
        Ok(triangle)
    }

    fn report_containment(&mut self, point: Point2<f64>, ordinal: &str, inside: bool) -> Result<()> {
        if inside {
            writeln!(self.output, "Point {point} lies inside the {ordinal} triangle.")?;
        } else {
            writeln!(
                self.output,
                "Point {point} does not lie inside the {ordinal} triangle."
            )?;
        }
        Ok(())
    }

    // Asks `message` until `parse` accepts a line or a fatal error occurs.
    fn prompt<T>(
        &mut self,
        what: &'static str,
        message: &str,
        parse: impl Fn(&str) -> Result<T>,
    ) -> Result<T> {
        let mut attempts = 0;
        loop {
            attempts += 1;
            writeln!(self.output, "{message}")?;
            self.output.flush()?;

            let line = self.read_line()?;
            match parse(&line) {
                Ok(value) => return Ok(value),
                Err(err) if err.is_recoverable() => {
                    tracing::warn!(input = %line.trim_end(), error = %err, "rejected {what}");
                    self.retries += 1;
                    writeln!(self.output, "Error: {err}")?;

                    if self
                        .settings
                        .max_attempts
                        .is_some_and(|max| attempts >= max)
                    {
                        return Err(TriangleError::AttemptsExhausted { what, attempts });
                    }
                    writeln!(self.output, "Please try again.")?;
                }
                Err(err) => return Err(err),
            }
        }
    }

    // Undecodable bytes become U+FFFD so they fail parsing and get re-prompted.
    fn read_line(&mut self) -> Result<String> {
        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Err(TriangleError::UnexpectedEof);
        }
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }
}
