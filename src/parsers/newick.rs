mod tokenizer;

pub use tokenizer::NewickTokenizer;
pub use tokenizer::Token;
pub use tokenizer::TokenizerMode;
