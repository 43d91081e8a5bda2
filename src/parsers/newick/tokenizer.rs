use std::fmt::Display;

/// Characters that end an unquoted label.
fn is_label_delimiter(character: char) -> bool {
    matches!(character, ',' | ')' | ';' | '(' | ':')
}

/// Characters that end the annotation following a closing parenthesis.
fn is_annotation_delimiter(character: char) -> bool {
    matches!(character, ',' | ':' | ';' | ')')
}

/// Characters that end a branch length.
fn is_branch_length_delimiter(character: char) -> bool {
    matches!(character, ',' | ')' | ';' | '(')
}

/// What the tokenizer does with the text following a closing parenthesis.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum TokenizerMode {
    /// Support values and internal node labels are dropped; every close
    /// token is exactly `)`.
    #[default]
    Strip,
    /// Close tokens keep their trailing annotation, e.g. `)0.95`.
    Raw,
}

/// A single lexical unit of a NEWICK tree string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token<'a> {
    Open,
    /// Closing parenthesis, including any annotation kept in raw mode.
    Close(&'a str),
    End,
    /// Leaf or internal node name; never empty.
    Label(&'a str),
}

impl Display for Token<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Token::Open => write!(f, "("),
            Token::Close(text) => write!(f, "{text}"),
            Token::End => write!(f, ";"),
            Token::Label(label) => write!(f, "{label}"),
        }
    }
}

/// Lazy token stream over one NEWICK line.
///
/// Commas, whitespace around labels and branch lengths (a `:` together with
/// the text after it) never reach the caller. The tokenizer only recognizes
/// lexical categories; whether the tokens form a well-formed tree is left to
/// the consumer.
///
/// ```
/// use mrp::{NewickTokenizer, Token};
///
/// let tokens: Vec<Token> = NewickTokenizer::new("(A:0.1,B)90;").collect();
/// assert_eq!(
///     tokens,
///     vec![
///         Token::Open,
///         Token::Label("A"),
///         Token::Label("B"),
///         Token::Close(")"),
///         Token::End
///     ]
/// );
/// ```
#[derive(Debug, Clone)]
pub struct NewickTokenizer<'a> {
    input: &'a str,
    position: usize,
    mode: TokenizerMode,
}

impl<'a> NewickTokenizer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self::with_mode(input, TokenizerMode::Strip)
    }

    pub fn with_mode(input: &'a str, mode: TokenizerMode) -> Self {
        let mut tokenizer = Self { input, position: 0, mode };
        tokenizer.skip_ignorable();
        tokenizer
    }

    pub fn mode(&self) -> TokenizerMode { self.mode }

    /// Whether another token remains in the input.
    pub fn has_next(&self) -> bool { self.position < self.input.len() }

    fn rest(&self) -> &'a str { &self.input[self.position..] }

    /// Length of the remaining input up to (not including) the first
    /// character matching `delimiter`.
    fn span_until(&self, delimiter: fn(char) -> bool) -> usize {
        let rest = self.rest();
        rest.find(delimiter).unwrap_or(rest.len())
    }

    /// Advances past commas, whitespace and branch lengths so that the next
    /// character, if any, starts a token.
    fn skip_ignorable(&mut self) {
        while let Some(character) = self.rest().chars().next() {
            if character == ',' || character.is_whitespace() {
                self.position += character.len_utf8();
            } else if character == ':' {
                self.position += 1;
                self.position += self.span_until(is_branch_length_delimiter);
            } else {
                break;
            }
        }
    }

    fn read_close(&mut self) -> Token<'a> {
        let start = self.position;
        self.position += 1;
        self.position += self.span_until(is_annotation_delimiter);
        match self.mode {
            TokenizerMode::Strip => Token::Close(")"),
            TokenizerMode::Raw => {
                Token::Close(&self.input[start..self.position])
            }
        }
    }

    fn read_label(&mut self) -> Token<'a> {
        let start = self.position;
        self.position += self.span_until(is_label_delimiter);
        Token::Label(self.input[start..self.position].trim_end())
    }
}

impl<'a> Iterator for NewickTokenizer<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let token = match self.rest().chars().next()? {
            '(' => {
                self.position += 1;
                Token::Open
            }
            ')' => self.read_close(),
            ';' => {
                self.position += 1;
                Token::End
            }
            _ => self.read_label(),
        };
        self.skip_ignorable();
        Some(token)
    }
}

impl std::iter::FusedIterator for NewickTokenizer<'_> {}
