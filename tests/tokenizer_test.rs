use mrp::{NewickTokenizer, Token, TokenizerMode};

#[test]
fn test_token_kinds() {
    let test_cases = vec![
        ("Leaf names only", "(A,B,(C,D));", vec!["(", "A", "B", "(", "C", "D", ")", ")", ";"]),
        ("Branch lengths only", "(:0.1,:0.2,(:0.3,:0.4):0.5);", vec!["(", "(", ")", ")", ";"]),
        (
            "Names and branch lengths",
            "(A:0.1,B:0.2,(C:0.3,D:0.4):0.5);",
            vec!["(", "A", "B", "(", "C", "D", ")", ")", ";"],
        ),
        ("Empty nodes", "(,,(,));", vec!["(", "(", ")", ")", ";"]),
        ("Internal names", "(A,B,(C,D)E)F;", vec!["(", "A", "B", "(", "C", "D", ")", ")", ";"]),
        ("Scientific notation", "(A:1e-5,B:2.5E+3);", vec!["(", "A", "B", ")", ";"]),
        ("Single node", "A;", vec!["A", ";"]),
        ("No terminator", "(A,B)", vec!["(", "A", "B", ")"]),
    ];

    for (name, newick, expected) in test_cases {
        println!("Testing: {}", name);
        let tokens: Vec<String> =
            NewickTokenizer::new(newick).map(|t| t.to_string()).collect();
        assert_eq!(tokens, expected, "Wrong tokens for {name}");
    }
}

#[test]
fn test_raw_mode_keeps_close_annotations() {
    let test_cases = vec![
        ("Support values", "((A,B)0.95,C)1.0;", vec![")0.95", ")1.0"]),
        ("Internal labels", "((A,B)Inner:0.2,C)Root:0.0;", vec![")Inner", ")Root"]),
        ("No annotation", "((A,B),C);", vec![")", ")"]),
    ];

    for (name, newick, expected) in test_cases {
        println!("Testing: {}", name);
        let closes: Vec<&str> = NewickTokenizer::with_mode(newick, TokenizerMode::Raw)
            .filter_map(|token| match token {
                Token::Close(text) => Some(text),
                _ => None,
            })
            .collect();
        assert_eq!(closes, expected, "Wrong close tokens for {name}");

        let stripped = NewickTokenizer::new(newick)
            .filter(|token| matches!(token, Token::Close(text) if *text != ")"))
            .count();
        assert_eq!(stripped, 0, "Annotation leaked in strip mode for {name}");
    }
}

#[test]
fn test_labels_never_include_branch_lengths() {
    for mode in [TokenizerMode::Strip, TokenizerMode::Raw] {
        let labels: Vec<&str> = NewickTokenizer::with_mode("((A:0.1,B:0.2)90:0.3,C:4);", mode)
            .filter_map(|token| match token {
                Token::Label(label) => Some(label),
                _ => None,
            })
            .collect();
        assert_eq!(labels, vec!["A", "B", "C"], "Wrong labels in {mode:?} mode");
    }
}

#[test]
fn test_has_next() {
    let mut tokenizer = NewickTokenizer::new("(A:0.1, B) ; ");
    let mut count = 0;
    while tokenizer.has_next() {
        assert!(tokenizer.next().is_some());
        count += 1;
    }
    assert_eq!(count, 5);
    assert_eq!(tokenizer.next(), None);
    assert_eq!(tokenizer.next(), None);

    assert!(!NewickTokenizer::new("").has_next());
    assert!(!NewickTokenizer::new(",, :1.0").has_next());
}
