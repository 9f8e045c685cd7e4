//! Validation result types.
//!
//! A [`ValidationResult`] is a node in an owned tree: it holds the issues found on one
//! value plus a [`ChildResult`] for every nested property or array element that was
//! validated on its own.

use serde::Serialize;

//--------------------------------------------------------------------------------------------------
// Types
//--------------------------------------------------------------------------------------------------

/// A single problem found while validating a value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationIssue {
    /// Human-readable description of the problem.
    pub message: String,
}

/// Issues for one value, plus results for its children.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationResult {
    /// Issues for *this* value (property or array element).
    issues: Vec<ValidationIssue>,

    /// Results for child values (object properties or array elements), in iteration order.
    #[serde(rename = "childResults")]
    child_results: Vec<ChildResult>,
}

/// Result for a child value, tagged with its position among its siblings.
///
/// The index is the ordinal position of the property or element, never its key: keys
/// may be empty or collide once trimmed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChildResult {
    /// Position of this child among its siblings.
    index: usize,

    /// The child's own result tree.
    #[serde(flatten)]
    result: ValidationResult,
}

//--------------------------------------------------------------------------------------------------
// Methods
//--------------------------------------------------------------------------------------------------

impl ValidationResult {
    /// Creates a result from issues (or plain messages) and already-built children.
    pub fn new<I>(issues: I, child_results: Vec<ChildResult>) -> Self
    where
        I: IntoIterator,
        I::Item: Into<ValidationIssue>,
    {
        Self {
            issues: issues.into_iter().map(Into::into).collect(),
            child_results,
        }
    }

    /// Issues attached directly to this value.
    pub fn issues(&self) -> &[ValidationIssue] {
        &self.issues
    }

    /// Results for child values.
    pub fn child_results(&self) -> &[ChildResult] {
        &self.child_results
    }

    /// Returns true if neither this value nor any descendant has an issue.
    pub fn is_empty(&self) -> bool {
        self.issues.is_empty() && self.child_results.iter().all(|c| c.result.is_empty())
    }

    /// All messages in the tree: this value's issues first, then each child's messages
    /// in child order.
    pub fn error_messages(&self) -> Vec<String> {
        let mut messages = Vec::new();
        self.collect_messages(&mut messages);
        messages
    }

    /// Appends an issue to this value.
    pub fn add_issue(&mut self, message: impl Into<String>) {
        self.issues.push(ValidationIssue {
            message: message.into(),
        });
    }

    /// Appends a child result at `index`.
    ///
    /// `child` can be a full [`ValidationResult`], a single message, or a list of
    /// messages.
    pub fn add_child_result(&mut self, index: usize, child: impl Into<ValidationResult>) {
        self.child_results.push(ChildResult::new(index, child));
    }

    /// Pulls every descendant issue up into this result and drops the tree structure.
    ///
    /// Message order is preserved, so `flatten().error_messages()` equals
    /// `error_messages()`.
    pub fn flatten(self) -> Self {
        let mut issues = self.issues;
        for child in self.child_results {
            issues.extend(child.result.flatten().issues);
        }
        Self {
            issues,
            child_results: Vec::new(),
        }
    }

    fn collect_messages(&self, out: &mut Vec<String>) {
        out.extend(self.issues.iter().map(|i| i.message.clone()));
        for child in &self.child_results {
            child.result.collect_messages(out);
        }
    }
}

impl ChildResult {
    /// Creates a child result at `index`.
    pub fn new(index: usize, result: impl Into<ValidationResult>) -> Self {
        Self {
            index,
            result: result.into(),
        }
    }

    /// Position of this child among its siblings.
    pub fn index(&self) -> usize {
        self.index
    }

    /// The child's result tree.
    pub fn result(&self) -> &ValidationResult {
        &self.result
    }

    /// Issues attached directly to this child.
    pub fn issues(&self) -> &[ValidationIssue] {
        self.result.issues()
    }

    /// Results for this child's own children.
    pub fn child_results(&self) -> &[ChildResult] {
        self.result.child_results()
    }

    /// All messages in this child's subtree.
    pub fn error_messages(&self) -> Vec<String> {
        self.result.error_messages()
    }
}

//--------------------------------------------------------------------------------------------------
// Trait Implementations
//--------------------------------------------------------------------------------------------------

impl From<&str> for ValidationIssue {
    fn from(message: &str) -> Self {
        Self {
            message: message.to_string(),
        }
    }
}

impl From<String> for ValidationIssue {
    fn from(message: String) -> Self {
        Self { message }
    }
}

impl From<&str> for ValidationResult {
    fn from(message: &str) -> Self {
        Self::new([message], Vec::new())
    }
}

impl From<String> for ValidationResult {
    fn from(message: String) -> Self {
        Self::new([message], Vec::new())
    }
}

impl From<Vec<String>> for ValidationResult {
    fn from(messages: Vec<String>) -> Self {
        Self::new(messages, Vec::new())
    }
}

impl From<Vec<&str>> for ValidationResult {
    fn from(messages: Vec<&str>) -> Self {
        Self::new(messages, Vec::new())
    }
}

//--------------------------------------------------------------------------------------------------
// Tests
//--------------------------------------------------------------------------------------------------
