//! Built-in values used when the configuration does not override them.

use super::category::Category;

/// Marker written into the composed line where the cursor should land.
pub static CURSOR_PLACEHOLDER: &str = "CURSOR";

/// Lines starting with this are ignored by git.
pub static COMMENT_PREFIX: &str = "#";

/// The conventional-commit types as `(name, short code, aliases)`.
static CATEGORIES: &[(&str, &str, &[&str])] = &[
    ("Features", "feat", &["feature", "new"]),
    ("Bug Fixes", "fix", &["bug", "bugfix", "hotfix"]),
    ("Documentation", "docs", &["doc", "documentation"]),
    ("Styles", "style", &["format", "formatting"]),
    ("Code Refactoring", "refactor", &["refactoring", "cleanup"]),
    ("Performance Improvements", "perf", &["performance", "optimize"]),
    ("Tests", "test", &["tests", "testing"]),
    ("Builds", "build", &["deps", "dependencies"]),
    ("Continuous Integration", "ci", &["pipeline"]),
    ("Chores", "chore", &["misc"]),
    ("Reverts", "revert", &["rollback"]),
];

pub fn categories() -> Vec<Category> {
    CATEGORIES
        .iter()
        .map(|(name, short_code, aliases)| Category::new(name, short_code, aliases))
        .collect()
}
