//! Parsing contexts.
//!
//! A [`Context`] consumes one character at a time and answers with an
//! [`Outcome`] telling the [`Parser`](crate::Parser) what to do next. Contexts
//! never touch their parent: a finished child hands back a [`Fold`] and the
//! parser applies it to whichever context sits below it on the stack.

use crate::error::{ContextKind, StructuralError};
use crate::token::{self, ROW_BREAK};

/// One syntactic region of the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Context {
    /// Top-level text. The only context allowed at end of input.
    Root(Root),
    /// A run of operator characters, e.g. `<=>`.
    Operator(Operator),
    /// A `[ ... ]` matrix.
    Matrix(Matrix),
}

/// What the parser should do after handing a character to a context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The character was absorbed.
    Consumed,
    /// The character opened a child context and was absorbed by doing so.
    Pushed(Context),
    /// The character only marked a transition; feed it again afterwards.
    Replay(Transition),
    /// The character closed this context; fold it into the parent.
    Folded(Fold),
    /// The input broke a structural rule.
    Failed(StructuralError),
}

/// A stack change that does not consume the character that caused it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    Push(Context),
    Pop(Fold),
}

/// How a finished child merges its output into its parent's buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fold {
    /// Append the text as is.
    Append(String),
    /// Set the text apart with single spaces, dropping trailing spaces and tabs
    /// already in the buffer. No space is added next to a line break.
    Separate(String),
}

impl Fold {
    pub fn apply(self, compiled: &mut String) {
        match self {
            Fold::Append(text) => compiled.push_str(&text),
            Fold::Separate(text) => {
                let kept = compiled.trim_end_matches([' ', '\t']).len();
                compiled.truncate(kept);
                if !compiled.is_empty() && !compiled.ends_with('\n') {
                    compiled.push(' ');
                }
                compiled.push_str(&text);
                if !text.ends_with('\n') {
                    compiled.push(' ');
                }
            }
        }
    }
}

impl Default for Context {
    fn default() -> Self {
        Context::Root(Root::default())
    }
}

impl Context {
    pub fn accept(&mut self, c: char) -> Outcome {
        match self {
            Context::Root(root) => root.accept(c),
            Context::Operator(operator) => operator.accept(c),
            Context::Matrix(matrix) => matrix.accept(c),
        }
    }

    pub fn kind(&self) -> ContextKind {
        match self {
            Context::Root(_) => ContextKind::Root,
            Context::Operator(_) => ContextKind::Operator,
            Context::Matrix(_) => ContextKind::Matrix,
        }
    }

    /// The LaTeX produced by this context so far.
    pub fn compiled(&self) -> &str {
        match self {
            Context::Root(root) => &root.compiled,
            Context::Operator(operator) => &operator.compiled,
            Context::Matrix(matrix) => &matrix.compiled,
        }
    }

    pub(crate) fn compiled_mut(&mut self) -> &mut String {
        match self {
            Context::Root(root) => &mut root.compiled,
            Context::Operator(operator) => &mut operator.compiled,
            Context::Matrix(matrix) => &mut matrix.compiled,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Root {
    compiled: String,
}

impl Root {
    fn accept(&mut self, c: char) -> Outcome {
        if c == '[' {
            Outcome::Pushed(Context::Matrix(Matrix::default()))
        } else if token::is_operator_char(c) {
            Outcome::Replay(Transition::Push(Context::Operator(Operator::default())))
        } else {
            self.compiled.push(c);
            Outcome::Consumed
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Operator {
    compiled: String,
    candidate: String,
}

impl Operator {
    /// Operator characters seen so far.
    pub fn candidate(&self) -> &str {
        &self.candidate
    }

    fn accept(&mut self, c: char) -> Outcome {
        if token::is_operator_char(c) {
            self.candidate.push(c);
            Outcome::Consumed
        } else {
            Outcome::Replay(Transition::Pop(self.resolve()))
        }
    }

    /// Renders the candidate. Also used for the virtual end-of-input character.
    pub(crate) fn resolve(&mut self) -> Fold {
        self.compiled = token::render(&self.candidate);
        Fold::Separate(self.compiled.clone())
    }
}

/// A matrix under construction.
///
/// `[` inside a matrix is plain cell text: matrices do not nest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matrix {
    compiled: String,
    rows: Vec<Vec<String>>,
    aggregate: String,
    bar_index: Option<usize>,
}

impl Default for Matrix {
    fn default() -> Self {
        Self {
            compiled: String::new(),
            rows: vec![Vec::new()],
            aggregate: String::new(),
            bar_index: None,
        }
    }
}

impl Matrix {
    /// Completed cells, row by row. The last row is the one being filled.
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// Raw characters of the cell being read.
    pub fn aggregate(&self) -> &str {
        &self.aggregate
    }

    /// 1-based column after which a `|` separator is drawn.
    pub fn bar_index(&self) -> Option<usize> {
        self.bar_index
    }

    fn accept(&mut self, c: char) -> Outcome {
        match c {
            ',' => self.push_cell(),
            '|' => {
                self.push_cell();
                let index = self.current_row().len();
                match self.bar_index {
                    None => self.bar_index = Some(index),
                    Some(bar) if bar != index => {
                        return Outcome::Failed(StructuralError::InconsistentBarIndex);
                    }
                    Some(_) => {}
                }
            }
            '\n' | ';' => {
                self.push_cell();
                if !self.row_fits() {
                    return Outcome::Failed(StructuralError::InconsistentRowSize);
                }
                self.rows.push(Vec::new());
            }
            ']' => {
                if !self.aggregate.trim().is_empty() {
                    self.push_cell();
                }
                if self.rows.len() > 1 && self.current_row().is_empty() {
                    self.rows.pop();
                }
                if !self.row_fits() {
                    return Outcome::Failed(StructuralError::InconsistentRowSize);
                }
                self.compiled = self.render();
                return Outcome::Folded(Fold::Append(self.compiled.clone()));
            }
            _ => self.aggregate.push(c),
        }
        Outcome::Consumed
    }

    fn current_row(&self) -> &[String] {
        self.rows.last().map(Vec::as_slice).unwrap_or_default()
    }

    fn push_cell(&mut self) {
        let cell = self.aggregate.trim().to_string();
        self.aggregate.clear();
        if let Some(row) = self.rows.last_mut() {
            row.push(cell);
        }
    }

    /// Whether the current row has as many cells as the first one.
    fn row_fits(&self) -> bool {
        self.rows.len() == 1 || self.current_row().len() == self.rows[0].len()
    }

    fn render(&self) -> String {
        let columns = self.rows.first().map_or(0, Vec::len);
        let mut spec = String::with_capacity(columns + 1);
        for column in 1..=columns {
            spec.push('c');
            if self.bar_index == Some(column) {
                spec.push('|');
            }
        }
        let body = self
            .rows
            .iter()
            .map(|row| row.join(" & "))
            .collect::<Vec<_>>()
            .join(ROW_BREAK);
        format!("\\left[\n\\begin{{array}}{{{spec}}}\n{body}\n\\end{{array}}\n\\right]")
    }
}
