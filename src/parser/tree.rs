//! Shallow parse-tree builder
//!
//! Walks the token stream once and recognizes a handful of statement forms
//! inside `main`: assignments, increments, decrements and returns. Only the
//! lexeme of each token is consulted, never its category, so an identifier
//! spelled `main` or `return` is treated as the construct it names.

use super::lexer::Token;

/// A node of the parse tree.
///
/// `Program` is always the root and holds only `Function` nodes. A
/// `Function` body holds only the four statement variants, in source order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseNode {
    Program { statements: Vec<ParseNode> },
    Function { name: String, body: Vec<ParseNode> },
    Return { value: String },
    Increment { variable: String },
    Decrement { variable: String },
    Assignment { variable: String, value: String },
}

impl ParseNode {
    /// An empty root.
    pub fn program() -> Self {
        ParseNode::Program {
            statements: Vec::new(),
        }
    }

    /// Direct children of this node (statements of a program, body of a function).
    pub fn children(&self) -> &[ParseNode] {
        match self {
            ParseNode::Program { statements } => statements,
            ParseNode::Function { body, .. } => body,
            _ => &[],
        }
    }
}

/// Which token a neighbour lookup is made relative to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LookupMode {
    /// Relative to the token currently being scanned.
    #[default]
    ScanPosition,
    /// Relative to the first token in the whole stream with the same lexeme.
    ///
    /// With repeated lexemes (two `x++` statements, two `=` assignments)
    /// every repetition resolves to the first one's neighbours.
    FirstOccurrence,
}

/// Single-pass tree builder.
#[derive(Debug, Clone, Copy, Default)]
pub struct TreeBuilder {
    mode: LookupMode,
}

impl TreeBuilder {
    pub fn new(mode: LookupMode) -> Self {
        TreeBuilder { mode }
    }

    pub fn mode(&self) -> LookupMode {
        self.mode
    }

    /// Build the tree for `tokens`.
    ///
    /// Never fails. Statements seen before any `main` are dropped, and a
    /// neighbour that falls outside the stream reads as the empty string.
    pub fn build(&self, tokens: &[Token]) -> ParseNode {
        let mut statements: Vec<ParseNode> = Vec::new();
        let mut current_function: Option<usize> = None;

        for (position, token) in tokens.iter().enumerate() {
            let lexeme = token.lexeme();

            if lexeme == "main" {
                statements.push(ParseNode::Function {
                    name: lexeme.to_string(),
                    body: Vec::new(),
                });
                current_function = Some(statements.len() - 1);
                continue;
            }

            let Some(statement) = self.recognize(tokens, position) else {
                continue;
            };
            push_statement(&mut statements, current_function, statement);
        }

        ParseNode::Program { statements }
    }

    /// Recognize the statement introduced by the token at `position`, if any.
    fn recognize(&self, tokens: &[Token], position: usize) -> Option<ParseNode> {
        let lexeme = tokens[position].lexeme();
        let anchor = self.anchor(tokens, position);

        match lexeme {
            "return" => Some(ParseNode::Return {
                value: after(tokens, anchor),
            }),
            "++" => Some(ParseNode::Increment {
                variable: before(tokens, anchor),
            }),
            "--" => Some(ParseNode::Decrement {
                variable: before(tokens, anchor),
            }),
            "=" => Some(ParseNode::Assignment {
                variable: before(tokens, anchor),
                value: after(tokens, anchor),
            }),
            _ => None,
        }
    }

    fn anchor(&self, tokens: &[Token], position: usize) -> usize {
        match self.mode {
            LookupMode::ScanPosition => position,
            LookupMode::FirstOccurrence => {
                let lexeme = tokens[position].lexeme();
                tokens
                    .iter()
                    .position(|t| t.lexeme() == lexeme)
                    .unwrap_or(position)
            }
        }
    }
}

fn push_statement(
    statements: &mut [ParseNode],
    current_function: Option<usize>,
    statement: ParseNode,
) {
    let Some(index) = current_function else {
        return;
    };
    if let Some(ParseNode::Function { body, .. }) = statements.get_mut(index) {
        body.push(statement);
    }
}

fn before(tokens: &[Token], anchor: usize) -> String {
    anchor
        .checked_sub(1)
        .and_then(|i| tokens.get(i))
        .map(|t| t.lexeme().to_string())
        .unwrap_or_default()
}

fn after(tokens: &[Token], anchor: usize) -> String {
    tokens
        .get(anchor + 1)
        .map(|t| t.lexeme().to_string())
        .unwrap_or_default()
}

/// Build a tree with the default [`LookupMode`].
pub fn build_tree(tokens: &[Token]) -> ParseNode {
    TreeBuilder::default().build(tokens)
}
