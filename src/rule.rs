/// A single build rule: target, prerequisites, and the recipe that produces it
#[derive(Debug, Clone)]
pub struct BuildRule {
  /// The name make treats as this rule's output
  pub target: String,
  /// Files or targets that must exist before the recipe runs, in order
  pub prerequisites: Vec<String>,
  /// The shell command line that produces the target
  pub recipe: String,
}

impl BuildRule {
  /// Create a new build rule
  pub fn new(target: &str, prerequisites: Vec<String>, recipe: &str) -> Self {
    Self {
      target: target.to_string(),
      prerequisites,
      recipe: recipe.to_string(),
    }
  }
}
