//! Structural inspection of Argo profile files
//!
//! Checks that a NetCDF file exposes the dimensions and variables the
//! decoder needs, with the expected dimensionality, and prints the result
//! for diagnosing malformed inputs.

use crate::errors::{ExplorerError, Result};
use netcdf::File;

/// Profile-count dimension
pub const N_PROF: &str = "N_PROF";
/// Depth-level dimension
pub const N_LEVELS: &str = "N_LEVELS";

/// Expected dimensionality of a required variable
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VariableShape {
    /// `[N_PROF]`
    PerProfile,
    /// `[N_PROF]` or `[N_PROF, <string length>]`
    PerProfileText,
    /// `[N_PROF, N_LEVELS]`
    PerLevel,
}

impl VariableShape {
    fn describe(self) -> &'static str {
        match self {
            Self::PerProfile => "[N_PROF]",
            Self::PerProfileText => "[N_PROF, STRING]",
            Self::PerLevel => "[N_PROF, N_LEVELS]",
        }
    }

    fn accepts(self, dims: &[DimensionInfo]) -> bool {
        let names: Vec<&str> = dims.iter().map(|d| d.name.as_str()).collect();
        match self {
            Self::PerProfile => names == [N_PROF],
            Self::PerProfileText => matches!(names.as_slice(), [N_PROF] | [N_PROF, _]),
            Self::PerLevel => names == [N_PROF, N_LEVELS],
        }
    }
}

/// Variables every profile file must carry
pub const REQUIRED_VARIABLES: [(&str, VariableShape); 8] = [
    ("JULD", VariableShape::PerProfile),
    ("LATITUDE", VariableShape::PerProfile),
    ("LONGITUDE", VariableShape::PerProfile),
    ("PLATFORM_NUMBER", VariableShape::PerProfileText),
    ("CYCLE_NUMBER", VariableShape::PerProfile),
    ("PRES", VariableShape::PerLevel),
    ("TEMP", VariableShape::PerLevel),
    ("PSAL", VariableShape::PerLevel),
];

/// Information about a dimension
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DimensionInfo {
    pub name: String,
    pub length: usize,
}

/// Outcome of checking one required variable
#[derive(Debug, Clone)]
pub struct VariableCheck {
    pub name: &'static str,
    pub expected: VariableShape,
    /// `None` when the variable is absent
    pub found: Option<FoundVariable>,
}

#[derive(Debug, Clone)]
pub struct FoundVariable {
    pub data_type: String,
    pub dimensions: Vec<DimensionInfo>,
}

impl VariableCheck {
    /// Reason the variable is unusable, if any
    pub fn problem(&self) -> Option<String> {
        match &self.found {
            None => Some(format!("variable '{}' is missing", self.name)),
            Some(found) if !self.expected.accepts(&found.dimensions) => {
                let dims: Vec<&str> = found.dimensions.iter().map(|d| d.name.as_str()).collect();
                Some(format!(
                    "variable '{}' has dimensions [{}], expected {}",
                    self.name,
                    dims.join(", "),
                    self.expected.describe()
                ))
            }
            Some(_) => None,
        }
    }
}

/// Structural summary of a profile file
#[derive(Debug, Clone)]
pub struct ProfileFileLayout {
    pub profile_count: Option<usize>,
    pub level_count: Option<usize>,
    pub variables: Vec<VariableCheck>,
}

impl ProfileFileLayout {
    /// Inspect an open file. Never fails; problems are recorded in the layout.
    pub fn inspect(file: &File) -> Self {
        let variables = REQUIRED_VARIABLES
            .iter()
            .map(|&(name, expected)| VariableCheck {
                name,
                expected,
                found: file.variable(name).map(|var| FoundVariable {
                    data_type: format!("{:?}", var.vartype()).to_lowercase(),
                    dimensions: var
                        .dimensions()
                        .iter()
                        .map(|d| DimensionInfo {
                            name: d.name().to_string(),
                            length: d.len(),
                        })
                        .collect(),
                }),
            })
            .collect();

        Self {
            profile_count: file.dimension(N_PROF).map(|d| d.len()),
            level_count: file.dimension(N_LEVELS).map(|d| d.len()),
            variables,
        }
    }

    /// All structural problems found
    pub fn problems(&self) -> Vec<String> {
        let mut problems = Vec::new();
        if self.profile_count.is_none() {
            problems.push(format!("dimension '{N_PROF}' is missing"));
        }
        if self.level_count.is_none() {
            problems.push(format!("dimension '{N_LEVELS}' is missing"));
        }
        problems.extend(self.variables.iter().filter_map(VariableCheck::problem));
        problems
    }

    /// Returns `(profile_count, level_count)` if the file is decodable.
    ///
    /// # Errors
    ///
    /// Returns [`ExplorerError::MalformedSource`] listing every problem found.
    pub fn validate(&self, source_name: &str) -> Result<(usize, usize)> {
        match (self.profile_count, self.level_count, self.problems()) {
            (Some(profiles), Some(levels), problems) if problems.is_empty() => Ok((profiles, levels)),
            (_, _, problems) => Err(ExplorerError::malformed(source_name, problems.join("; "))),
        }
    }

    /// Look up a required variable's check by name
    pub fn variable(&self, name: &str) -> Option<&VariableCheck> {
        self.variables.iter().find(|v| v.name == name)
    }

    /// Prints the layout in a readable form.
    pub fn print(&self, source_name: &str) {
        println!("\n Profile File: {}", source_name);
        println!("={}", "=".repeat(source_name.len() + 15));

        let show = |count: Option<usize>| match count {
            Some(n) => n.to_string(),
            None => "(missing)".to_string(),
        };
        println!("    {} = {}", N_PROF, show(self.profile_count));
        println!("    {} = {}", N_LEVELS, show(self.level_count));

        println!("\n Required Variables");
        println!("====================");
        for check in &self.variables {
            match &check.found {
                Some(found) => {
                    let dims: Vec<String> = found
                        .dimensions
                        .iter()
                        .map(|d| format!("{}[{}]", d.name, d.length))
                        .collect();
                    let status = if check.problem().is_some() { "✗" } else { "✓" };
                    println!(
                        "  {} {} ({}): {}",
                        status,
                        check.name,
                        found.data_type,
                        dims.join(", ")
                    );
                }
                None => println!("  ✗ {} (missing)", check.name),
            }
        }

        let problems = self.problems();
        if problems.is_empty() {
            println!("\n✅ File is a decodable profile file");
        } else {
            println!("\n⚠ Problems:");
            for problem in problems {
                println!("    {}", problem);
            }
        }
    }
}
