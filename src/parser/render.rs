//! Text rendering for tokens and parse trees
//!
//! Pure formatting: every composite node prints one `name:` line per field
//! and its value one level deeper, two spaces per level.

use super::lexer::Token;
use super::tree::ParseNode;
use std::fmt;

const INDENT: &str = "  ";

/// Render `node` as indented text starting at `depth`.
pub fn render(node: &ParseNode, depth: usize) -> String {
    let mut out = String::new();
    render_node(&mut out, node, depth);
    out
}

/// Render a token listing, one `lexeme -> Category` line per token.
pub fn render_tokens(tokens: &[Token]) -> String {
    tokens
        .iter()
        .map(Token::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_node(out: &mut String, node: &ParseNode, depth: usize) {
    match node {
        ParseNode::Program { statements } => {
            field(out, "Program", depth);
            field(out, "Declarations and Statements", depth + 1);
            render_sequence(out, statements, depth + 2);
        }
        ParseNode::Function { name, body } => {
            field(out, "Function", depth);
            scalar(out, name, depth + 1);
            field(out, "Body", depth);
            render_sequence(out, body, depth + 1);
        }
        ParseNode::Return { value } => {
            field(out, "Return Statement", depth);
            scalar(out, value, depth + 1);
        }
        ParseNode::Increment { variable } => {
            field(out, "Increment", depth);
            scalar(out, variable, depth + 1);
        }
        ParseNode::Decrement { variable } => {
            field(out, "Decrement", depth);
            scalar(out, variable, depth + 1);
        }
        ParseNode::Assignment { variable, value } => {
            field(out, "Assignment", depth);
            field(out, "Variable", depth + 1);
            scalar(out, variable, depth + 2);
            field(out, "Value", depth + 1);
            scalar(out, value, depth + 2);
        }
    }
}

fn render_sequence(out: &mut String, nodes: &[ParseNode], depth: usize) {
    for node in nodes {
        render_node(out, node, depth);
    }
}

fn field(out: &mut String, name: &str, depth: usize) {
    out.push_str(&INDENT.repeat(depth));
    out.push_str(name);
    out.push_str(":\n");
}

fn scalar(out: &mut String, value: &str, depth: usize) {
    out.push_str(&INDENT.repeat(depth));
    out.push_str(value);
    out.push('\n');
}

impl fmt::Display for ParseNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render(self, 0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::lexer::tokenize;
    use crate::parser::tree::build_tree;

    #[test]
    fn test_render_empty_program() {
        assert_eq!(
            render(&ParseNode::program(), 0),
            "Program:\n  Declarations and Statements:\n"
        );
    }

    #[test]
    fn test_render_full_function() {
        let tree = build_tree(&tokenize("int main() { int x; x = 5; x++; return x; }"));

        let expected = "\
Program:
  Declarations and Statements:
    Function:
      main
    Body:
      Assignment:
        Variable:
          x
        Value:
          5
      Increment:
        x
      Return Statement:
        x
";
        assert_eq!(render(&tree, 0), expected);
        assert_eq!(tree.to_string(), expected);
    }

    #[test]
    fn test_render_at_depth() {
        let node = ParseNode::Decrement {
            variable: "i".to_string(),
        };
        assert_eq!(render(&node, 2), "    Decrement:\n      i\n");
    }

    #[test]
    fn test_render_empty_body() {
        let node = ParseNode::Function {
            name: "main".to_string(),
            body: vec![],
        };
        assert_eq!(render(&node, 0), "Function:\n  main\nBody:\n");
    }

    #[test]
    fn test_render_tokens() {
        let tokens = tokenize("char c = 1;");
        assert_eq!(
            render_tokens(&tokens),
            "char -> Data Type\nc -> Identifier\n= -> Operator\n1 -> Literal\n; -> Delimiter"
        );
        assert_eq!(render_tokens(&[]), "");
    }

    #[test]
    fn test_render_is_repeatable() {
        let tree = build_tree(&tokenize("main y = 3; y--; return y;"));
        let first = render(&tree, 0);
        let second = render(&tree, 0);
        assert_eq!(first, second);
    }
}
