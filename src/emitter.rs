use anyhow::Context as AnyhowContext;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::Result;
use crate::makefile_writer::MakefileWriter;
use crate::project::Project;

/// Generate a Makefile at `output_path` describing every example build
///
/// Any existing file is truncated; failure to open the path is fatal and
/// surfaces with the path in the error context.
pub fn generate_makefile(project: &Project, output_path: &Path) -> Result<()> {
  let file = File::create(output_path)
    .with_context(|| format!("Failed to create output file: {}", output_path.display()))?;
  let mut writer = MakefileWriter::new(BufWriter::new(file));

  write_rules(project, &mut writer)?;

  // Flush the writer
  writer.flush()?;

  Ok(())
}

/// Write the default target line and the per-example rule blocks
pub fn write_rules<W: Write>(project: &Project, writer: &mut MakefileWriter<W>) -> Result<()> {
  // Default target: every example's binary and reference artifact
  writer.write_target_line("all", &project.default_target_prerequisites())?;

  for name in project.example_names() {
    writer.write_rule(&project.test_rule(name))?;
    writer.write_rule(&project.reference_rule(name))?;
  }

  Ok(())
}
