use std::io::Write;

use crate::error::{MakeGenError, Result};
use crate::rule::BuildRule;
use crate::utils::join_strings;

/// A writer for emitting Makefile rule blocks with proper syntax
pub struct MakefileWriter<W: Write> {
  /// The underlying writer
  writer: W,
}

impl<W: Write> MakefileWriter<W> {
  /// Create a new MakefileWriter
  pub fn new(writer: W) -> Self {
    Self { writer }
  }

  /// Write a line followed by a newline
  pub fn writeln(&mut self, content: &str) -> Result<()> {
    self
      .writer
      .write_all(content.as_bytes())
      .map_err(|e| MakeGenError::Io(e))?;

    self
      .writer
      .write_all(b"\n")
      .map_err(|e| MakeGenError::Io(e))
  }

  /// Write a blank line
  pub fn newline(&mut self) -> Result<()> {
    self
      .writer
      .write_all(b"\n")
      .map_err(|e| MakeGenError::Io(e))
  }

  /// Write a comment, one `# ` line per input line
  pub fn write_comment(&mut self, comment: &str) -> Result<()> {
    for line in comment.lines() {
      self.writeln(&format!("# {}", line))?;
    }
    Ok(())
  }

  /// Write a target line: `target:` alone, or `target: p1 p2 ...`
  pub fn write_target_line(&mut self, target: &str, prerequisites: &[String]) -> Result<()> {
    if prerequisites.is_empty() {
      self.writeln(&format!("{}:", target))
    } else {
      self.writeln(&format!("{}: {}", target, join_strings(prerequisites, " ")))
    }
  }

  /// Write a recipe line, indented with the single tab make requires
  pub fn write_recipe(&mut self, command: &str) -> Result<()> {
    self.writeln(&format!("\t{}", command))
  }

  /// Write a whole rule block: target line plus its recipe line
  pub fn write_rule(&mut self, rule: &BuildRule) -> Result<()> {
    self.write_target_line(&rule.target, &rule.prerequisites)?;
    self.write_recipe(&rule.recipe)
  }

  /// Flush the underlying writer
  pub fn flush(&mut self) -> Result<()> {
    self.writer.flush().map_err(|e| MakeGenError::Io(e))
  }
}
