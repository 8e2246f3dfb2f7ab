//! Position renumbering filter.
//!
//! Filters that drop tokens (stop words, over-long tokens) leave holes in
//! token positions. Query words are analyzed one at a time, so a phrase query
//! always expects its terms at consecutive positions. This filter renumbers
//! the surviving tokens 0, 1, 2, ... so indexed text lines up with phrases
//! built from the same analyzer.

use tantivy::tokenizer::{Token, TokenFilter, TokenStream, Tokenizer};

/// Token filter assigning consecutive positions to the tokens that reach it.
#[derive(Clone, Copy, Debug, Default)]
pub struct ContiguousPositions;

impl TokenFilter for ContiguousPositions {
    type Tokenizer<T: Tokenizer> = ContiguousPositionsFilter<T>;

    fn transform<T: Tokenizer>(self, tokenizer: T) -> Self::Tokenizer<T> {
        ContiguousPositionsFilter { tokenizer }
    }
}

/// Tokenizer wrapper produced by [`ContiguousPositions`].
#[derive(Clone)]
pub struct ContiguousPositionsFilter<T> {
    /// The wrapped tokenizer.
    tokenizer: T,
}

impl<T: Tokenizer> Tokenizer for ContiguousPositionsFilter<T> {
    type TokenStream<'a> = ContiguousPositionsStream<T::TokenStream<'a>>;

    fn token_stream<'a>(&'a mut self, text: &'a str) -> Self::TokenStream<'a> {
        ContiguousPositionsStream {
            tail: self.tokenizer.token_stream(text),
            next_position: 0,
        }
    }
}

/// Token stream produced by [`ContiguousPositionsFilter`].
pub struct ContiguousPositionsStream<T> {
    /// The upstream token stream.
    tail: T,
    /// Position given to the next token.
    next_position: usize,
}

impl<T: TokenStream> TokenStream for ContiguousPositionsStream<T> {
    fn advance(&mut self) -> bool {
        if !self.tail.advance() {
            return false;
        }
        let position = self.next_position;
        self.tail.token_mut().position = position;
        self.next_position += 1;
        true
    }

    fn token(&self) -> &Token {
        self.tail.token()
    }

    fn token_mut(&mut self) -> &mut Token {
        self.tail.token_mut()
    }
}
