// Integration tests for the tokenize -> build -> render pipeline

use cviz::parser::{
    build_tree, render, render_tokens, tokenize, LookupMode, ParseNode, TokenCategory, TreeBuilder,
};
use cviz::session::Session;
use std::fs;
use std::path::Path;

const SOURCE: &str = "int main() { int x; x = 5; x++; return x; }";

#[test]
fn test_reference_token_categories() {
    let tokens = tokenize(SOURCE);
    let expected = [
        ("int", TokenCategory::Keyword),
        ("main", TokenCategory::Identifier),
        ("(", TokenCategory::Delimiter),
        (")", TokenCategory::Delimiter),
        ("{", TokenCategory::Delimiter),
        ("int", TokenCategory::Keyword),
        ("x", TokenCategory::Identifier),
        (";", TokenCategory::Delimiter),
        ("x", TokenCategory::Identifier),
        ("=", TokenCategory::Operator),
        ("5", TokenCategory::Literal),
        (";", TokenCategory::Delimiter),
        ("x", TokenCategory::Identifier),
        ("++", TokenCategory::Operator),
        (";", TokenCategory::Delimiter),
        ("return", TokenCategory::Keyword),
        ("x", TokenCategory::Identifier),
        (";", TokenCategory::Delimiter),
        ("}", TokenCategory::Delimiter),
    ];

    assert_eq!(tokens.len(), expected.len());
    for (token, (lexeme, category)) in tokens.iter().zip(expected) {
        assert_eq!(token.lexeme(), lexeme);
        assert_eq!(token.category(), category, "category of {}", lexeme);
    }
}

#[test]
fn test_reference_tree() {
    let tree = build_tree(&tokenize(SOURCE));

    let functions = tree.children();
    assert_eq!(functions.len(), 1);
    match &functions[0] {
        ParseNode::Function { name, body } => {
            assert_eq!(name, "main");
            assert_eq!(
                body,
                &vec![
                    ParseNode::Assignment {
                        variable: "x".to_string(),
                        value: "5".to_string(),
                    },
                    ParseNode::Increment {
                        variable: "x".to_string(),
                    },
                    ParseNode::Return {
                        value: "x".to_string(),
                    },
                ]
            );
        }
        other => panic!("Expected a function, got {:?}", other),
    }
}

#[test]
fn test_every_lexeme_is_non_empty() {
    let sources = [
        "",
        SOURCE,
        "while (a <= b || !c) { a += 1; }",
        "#include <stdio.h>\nint main(void) { printf(\"%s\\n\", \"hi\"); }",
        "def f(x): return x ** 2",
    ];

    for source in sources {
        for token in tokenize(source) {
            assert!(!token.lexeme().is_empty(), "empty lexeme in {:?}", source);
        }
    }
}

#[test]
fn test_classification_depends_only_on_lexeme() {
    let tokens = tokenize("int a; float b; a = b; int c = a == b;");

    for left in &tokens {
        for right in &tokens {
            if left.lexeme() == right.lexeme() {
                assert_eq!(left.category(), right.category());
            }
        }
    }
    assert!(tokens
        .iter()
        .filter(|t| t.lexeme() == "int")
        .all(|t| t.category() == TokenCategory::Keyword));
}

#[test]
fn test_no_main_gives_empty_program() {
    let tree = build_tree(&tokenize("int helper() { x = 1; x++; return x; }"));
    assert!(tree.children().is_empty());
    assert_eq!(render(&tree, 0), "Program:\n  Declarations and Statements:\n");
}

#[test]
fn test_render_is_deterministic() {
    let first = render(&build_tree(&tokenize(SOURCE)), 0);
    let second = render(&build_tree(&tokenize(SOURCE)), 0);
    assert_eq!(first, second);

    let tree = build_tree(&tokenize(SOURCE));
    let snapshot = tree.clone();
    assert_eq!(render(&tree, 0), render(&tree, 0));
    assert_eq!(tree, snapshot);
}

#[test]
fn test_modes_agree_without_repeats() {
    let tokens = tokenize("int main() { a = 1; b++; return c; }");
    let scan = TreeBuilder::new(LookupMode::ScanPosition).build(&tokens);
    let first = TreeBuilder::new(LookupMode::FirstOccurrence).build(&tokens);
    assert_eq!(scan, first);
}

#[test]
fn test_modes_differ_with_repeats() {
    let tokens = tokenize("int main() { i++; j++; }");
    let scan = TreeBuilder::new(LookupMode::ScanPosition).build(&tokens);
    let first = TreeBuilder::new(LookupMode::FirstOccurrence).build(&tokens);

    assert!(render(&scan, 0).contains("Increment:\n        j\n"));
    assert!(!render(&first, 0).contains("        j\n"));
}

#[test]
fn test_sample_file() {
    let path = Path::new("demos/sample.c");
    let source = fs::read_to_string(path).expect("Failed to read sample file");

    let tokens = tokenize(&source);
    let listing = render_tokens(&tokens);
    assert!(listing.starts_with("include -> Identifier\n<"));
    assert!(listing.contains("printf -> Identifier"));

    let mut session = Session::default();
    session.select_file(path);
    session.show_input().expect("show input");
    session.visualize().expect("visualize");

    assert_eq!(session.input_code(), source);
    assert_eq!(
        session.tree_text(),
        "\
Program:
  Declarations and Statements:
    Function:
      main
    Body:
      Assignment:
        Variable:
          count
        Value:
          10
      Increment:
        count
      Decrement:
        count
      Return Statement:
        count
"
    );
}
