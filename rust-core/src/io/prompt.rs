// Interactive collection of the lattice type, k-path, budget and output name.
// Invalid answers are explained and asked again until the input runs out.

use std::io::{self, BufRead, Write};

use log::debug;
use thiserror::Error;

use crate::kpath::{KPathError, check_budget, recommend_budget};
use crate::symmetries::{KPath, LatticeLibrary, ResolvedPath};

#[derive(Debug, Error)]
pub enum PromptError {
    #[error("terminal i/o failed: {0}")]
    Io(#[from] io::Error),

    #[error("input ended before a valid answer was given")]
    EndOfInput,

    #[error("the lattice library is empty")]
    EmptyLibrary,
}

/// Asks questions on `output` and reads the answers line by line from `input`
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }

    fn ask(&mut self, question: &str) -> Result<String, PromptError> {
        writeln!(self.output, "{}", question)?;
        self.output.flush()?;

        let mut answer = String::new();
        if self.input.read_line(&mut answer)? == 0 {
            return Err(PromptError::EndOfInput);
        }
        debug!("Answer to '{}': '{}'", question, answer.trim());
        Ok(answer.trim().to_string())
    }

    fn tell(&mut self, message: impl std::fmt::Display) -> Result<(), PromptError> {
        writeln!(self.output, "{}", message)?;
        Ok(())
    }

    /// Ask for a lattice type that exists in the library
    pub fn ask_lattice_type(&mut self, library: &LatticeLibrary) -> Result<String, PromptError> {
        if library.is_empty() {
            return Err(PromptError::EmptyLibrary);
        }

        let available = library.lattice_types().join(", ");
        loop {
            let answer = self.ask(&format!(
                "Enter the lattice type in the lattice type library ({})",
                available
            ))?;
            match library.lattice(&answer) {
                Ok(entry) => return Ok(entry.name.clone()),
                Err(e) => self.tell(e)?,
            }
        }
    }

    /// Ask for a k-path whose labels all exist in the lattice and whose segments have length
    pub fn ask_kpath(
        &mut self,
        library: &LatticeLibrary,
        lattice_type: &str,
    ) -> Result<ResolvedPath, PromptError> {
        let labels = library
            .lattice(lattice_type)
            .map(|entry| entry.labels().join(", "))
            .unwrap_or_default();

        loop {
            let answer = self.ask(&format!(
                "Enter the k-path as a string of labels, e.g. GXMG ({})",
                labels
            ))?;

            let resolved = match KPath::parse(&answer).and_then(|p| library.resolve(lattice_type, &p)) {
                Ok(resolved) => resolved,
                Err(e) => {
                    self.tell(e)?;
                    continue;
                }
            };

            match resolved.lengths() {
                Ok(_) => return Ok(resolved),
                Err(e) => self.tell(e)?,
            }
        }
    }

    /// Ask for the total number of k-points, suggesting budgets that split evenly
    pub fn ask_total_points(&mut self, path: &ResolvedPath) -> Result<usize, PromptError> {
        let budget = path.lengths().and_then(|l| recommend_budget(&l)).ok();
        let question = match &budget {
            Some(budget) => format!(
                "Enter total k-points (Recommended: {}*N+1 where N is an integer)",
                budget.base
            ),
            None => "Enter total k-points".to_string(),
        };

        loop {
            let answer = self.ask(&question)?;
            let Ok(total_points) = answer.parse::<usize>() else {
                self.tell(format!("'{}' is not a valid number of k-points", answer))?;
                continue;
            };

            match check_budget(total_points, path.segment_count()) {
                Ok(()) => return Ok(total_points),
                Err(e @ KPathError::InsufficientBudget { .. }) => {
                    self.tell(e)?;
                    if let Some(budget) = &budget {
                        let suggestion = budget.at_least(path.segment_count() as u64 + 1);
                        self.tell(format!("The smallest recommended total is {}", suggestion))?;
                    }
                }
                Err(e) => self.tell(e)?,
            }
        }
    }

    /// Ask for the name used for the output files
    pub fn ask_file_name(&mut self) -> Result<String, PromptError> {
        loop {
            let answer = self.ask("Enter the filename to save file")?;
            if answer.is_empty() || answer.contains(['/', '\\']) {
                self.tell("The filename must be non-empty and must not contain path separators")?;
                continue;
            }
            return Ok(answer);
        }
    }
}
