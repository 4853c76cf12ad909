use std::path::Path;

use anyhow::Result;

use makegen::{generate_makefile, Project};

/// Source files linked into every test build
const LIB_FILES: [&str; 2] = ["glimpl.cpp", "glut.cpp"];
/// Example programs, by base name
const EXAMPLE_NAMES: [&str; 2] = ["gl2", "gl3"];
/// Destination of the generated build file
const OUTPUT_FILE_NAME: &str = "Makefile";

fn main() -> Result<()> {
  let mut project = Project::new();
  for file in LIB_FILES {
    project.add_library_file(file);
  }
  for name in EXAMPLE_NAMES {
    project.add_example(name);
  }

  generate_makefile(&project, Path::new(OUTPUT_FILE_NAME))?;

  Ok(())
}
