use crate::context::{Context, Fold, Outcome, Transition};
use crate::error::{ParseError, Position};
use crate::finalize;

/// How often a single character may be replayed before the parser gives up.
///
/// Well-formed transitions replay a character at most once: into a fresh
/// operator, or back to the root when an operator ends.
const MAX_REPLAYS: usize = 4;

/// An incremental matype parser.
///
/// `Parser` takes its input one character at a time or in chunks of any size,
/// keeping a stack of nested [`Context`]s. Chunk boundaries never change the
/// result: feeding `"[1,2]"` whole or as `"[1"` and `",2]"` gives the same
/// output and the same error positions.
#[derive(Debug, Clone)]
pub struct Parser {
    context: Context,
    parents: Vec<Context>,
    cursor: Position,
    error: Option<ParseError>,
}

impl Default for Parser {
    /// Creates a parser sitting in the root context.
    fn default() -> Self {
        Self::new()
    }
}

impl Parser {
    /// Creates a new `Parser` sitting in the root context.
    pub fn new() -> Self {
        Self {
            context: Context::default(),
            parents: Vec::new(),
            cursor: Position::default(),
            error: None,
        }
    }

    /// Feeds a chunk of input.
    ///
    /// # Errors
    ///
    /// Returns the first error raised by any character so far. Once an error
    /// is latched the rest of the input is ignored.
    pub fn update(&mut self, input: &str) -> Result<(), ParseError> {
        for ch in input.chars() {
            self.feed(ch)?;
        }
        Ok(())
    }

    /// Feeds a single character.
    ///
    /// # Errors
    ///
    /// Returns the latched error if this or any earlier character failed.
    pub fn feed(&mut self, ch: char) -> Result<(), ParseError> {
        if let Some(error) = &self.error {
            return Err(error.clone());
        }

        if ch == '\n' {
            self.cursor.line += 1;
            self.cursor.column = 0;
        } else {
            self.cursor.column += 1;
        }
        let at = self.cursor;
        let result = self.dispatch(ch, at);

        if let Err(error) = &result {
            log::debug!("{} context failed: {error}", self.context.kind());
            self.error = Some(error.clone());
        }
        result
    }

    /// Finishes parsing and returns the compiled LaTeX.
    ///
    /// An open operator is resolved as if one more non-operator character had
    /// arrived. Any other open context is an error.
    pub fn finish(mut self) -> Result<String, ParseError> {
        if let Some(error) = self.error.take() {
            return Err(error);
        }

        loop {
            let fold = match &mut self.context {
                Context::Operator(operator) => operator.resolve(),
                _ => break,
            };
            self.pop(fold);
        }

        if !matches!(self.context, Context::Root(_)) {
            return Err(ParseError::Unterminated {
                context: self.context.kind(),
            });
        }
        let latex = finalize::normalize(self.context.compiled());
        log::debug!("compiled {} bytes of LaTeX", latex.len());
        Ok(latex)
    }

    /// Parses a complete input in one go.
    pub fn parse(mut self, input: &str) -> Result<String, ParseError> {
        self.update(input)?;
        self.finish()
    }

    /// The innermost open context. After an error this is the context that
    /// raised it.
    pub fn context(&self) -> &Context {
        &self.context
    }

    /// Number of contexts enclosing the active one.
    pub fn depth(&self) -> usize {
        self.parents.len()
    }

    /// Position of the last character fed.
    pub fn position(&self) -> Position {
        self.cursor
    }

    /// The latched error, if any.
    pub fn error(&self) -> Option<&ParseError> {
        self.error.as_ref()
    }

    fn dispatch(&mut self, ch: char, at: Position) -> Result<(), ParseError> {
        for _ in 0..=MAX_REPLAYS {
            match self.context.accept(ch) {
                Outcome::Consumed => return Ok(()),
                Outcome::Pushed(child) => {
                    self.push(child);
                    return Ok(());
                }
                Outcome::Folded(fold) => {
                    self.pop(fold);
                    return Ok(());
                }
                Outcome::Replay(Transition::Push(child)) => self.push(child),
                Outcome::Replay(Transition::Pop(fold)) => self.pop(fold),
                Outcome::Failed(error) => {
                    return Err(ParseError::Structural {
                        error,
                        position: at,
                    });
                }
            }
        }
        Err(ParseError::Stalled { ch, position: at })
    }

    fn push(&mut self, child: Context) {
        log::trace!("enter {} context at {}", child.kind(), self.cursor);
        let parent = std::mem::replace(&mut self.context, child);
        self.parents.push(parent);
    }

    fn pop(&mut self, fold: Fold) {
        let Some(parent) = self.parents.pop() else {
            // Only children fold; the root has nowhere to go.
            log::warn!("{} context folded without a parent", self.context.kind());
            fold.apply(self.context.compiled_mut());
            return;
        };
        let child = std::mem::replace(&mut self.context, parent);
        log::trace!("leave {} context at {}", child.kind(), self.cursor);
        fold.apply(self.context.compiled_mut());
    }
}

/// Compiles a complete matype input to LaTeX.
///
/// # Examples
///
/// ```
/// assert_eq!(matype::compile("a <= b").unwrap(), "a \\leq b");
/// ```
pub fn compile(input: &str) -> Result<String, ParseError> {
    Parser::new().parse(input)
}
