use crate::rule::BuildRule;
use crate::utils::with_extension;

/// Description of the example programs and shared sources a Makefile is built from
pub struct Project {
  /// Source files linked into every test build, in order
  library_files: Vec<String>,
  /// Base names of the example programs, in order
  example_names: Vec<String>,
  /// Compiler invoked by every recipe
  compiler: String,
  /// Language-standard flag passed to the compiler
  standard_flag: String,
  /// Library linked by test builds
  window_library: String,
  /// Libraries linked by reference builds, in order
  reference_libraries: Vec<String>,
}

impl Project {
  /// Create a new Project with empty file lists and the default toolchain
  pub fn new() -> Self {
    Self {
      library_files: Vec::new(),
      example_names: Vec::new(),
      compiler: "g++".to_string(),
      standard_flag: "-std=c++11".to_string(),
      window_library: "X11".to_string(),
      reference_libraries: vec!["GL".to_string(), "glut".to_string()],
    }
  }

  /// Append a library source file shared by every test build
  pub fn add_library_file(&mut self, file: &str) {
    self.library_files.push(file.to_string());
  }

  /// Append an example program by base name; `<name>.cpp` is assumed to exist
  pub fn add_example(&mut self, name: &str) {
    self.example_names.push(name.to_string());
  }

  /// Get the library source files
  pub fn library_files(&self) -> &[String] {
    &self.library_files
  }

  /// Get the example base names
  pub fn example_names(&self) -> &[String] {
    &self.example_names
  }

  /// Set the compiler used in recipes
  pub fn set_compiler(&mut self, compiler: &str) {
    self.compiler = compiler.to_string();
  }

  /// Get the compiler used in recipes
  pub fn compiler(&self) -> &str {
    &self.compiler
  }

  /// Set the language-standard flag
  pub fn set_standard_flag(&mut self, flag: &str) {
    self.standard_flag = flag.to_string();
  }

  /// Get the language-standard flag
  pub fn standard_flag(&self) -> &str {
    &self.standard_flag
  }

  /// Set the library test builds link against
  pub fn set_window_library(&mut self, library: &str) {
    self.window_library = library.to_string();
  }

  /// Get the library test builds link against
  pub fn window_library(&self) -> &str {
    &self.window_library
  }

  /// Set the libraries reference builds link against
  pub fn set_reference_libraries(&mut self, libraries: &[&str]) {
    self.reference_libraries = libraries.iter().map(|s| s.to_string()).collect();
  }

  /// Get the libraries reference builds link against
  pub fn reference_libraries(&self) -> &[String] {
    &self.reference_libraries
  }

  /// Prerequisites of the default target: `<name>.bin <name>.ref` per example
  pub fn default_target_prerequisites(&self) -> Vec<String> {
    let mut prerequisites = Vec::new();
    for name in &self.example_names {
      prerequisites.push(with_extension(name, "bin"));
      prerequisites.push(with_extension(name, "ref"));
    }
    prerequisites
  }

  /// Rule building `<name>.bin` from the example source plus every library file
  pub fn test_rule(&self, name: &str) -> BuildRule {
    let mut prerequisites = vec![with_extension(name, "cpp")];
    prerequisites.extend(self.library_files.iter().cloned());

    let command = format!(
      "{} -o$@ {} $^ -l{}",
      self.compiler, self.standard_flag, self.window_library
    );

    BuildRule::new(&with_extension(name, "bin"), prerequisites, &command)
  }

  /// Rule building `<name>.ref` from the example source alone
  pub fn reference_rule(&self, name: &str) -> BuildRule {
    let mut command = format!("{} -o$@ {} $^", self.compiler, self.standard_flag);
    for library in &self.reference_libraries {
      command.push_str(&format!(" -l{}", library));
    }

    BuildRule::new(
      &with_extension(name, "ref"),
      vec![with_extension(name, "cpp")],
      &command,
    )
  }
}

impl Default for Project {
  fn default() -> Self {
    Self::new()
  }
}
