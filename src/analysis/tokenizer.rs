pub trait Tokenizer: Send + Sync {
    fn tokenize<'a>(&self, text: &'a str) -> Vec<&'a str>;

    fn name(&self) -> &str;
}

/// Splits on whitespace runs. Case-sensitive; no stemming, no stop words.
#[derive(Clone, Copy, Default)]
pub struct WhitespaceTokenizer;

impl Tokenizer for WhitespaceTokenizer {
    fn tokenize<'a>(&self, text: &'a str) -> Vec<&'a str> {
        text.split_whitespace().collect()
    }

    fn name(&self) -> &str {
        "whitespace"
    }
}
