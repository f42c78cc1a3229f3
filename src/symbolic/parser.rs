use super::{Coeff, Expr, ExprError, Term};

#[derive(Debug, Clone, PartialEq)]
enum Token {
    Number(String),
    Symbol(String),
    Plus,
    Minus,
    Star,
    DoubleStar,
    Slash,
    LParen,
    RParen,
}

fn describe(token: &Token) -> String {
    match token {
        Token::Number(s) | Token::Symbol(s) => s.clone(),
        Token::Plus => "+".to_string(),
        Token::Minus => "-".to_string(),
        Token::Star => "*".to_string(),
        Token::DoubleStar => "**".to_string(),
        Token::Slash => "/".to_string(),
        Token::LParen => "(".to_string(),
        Token::RParen => ")".to_string(),
    }
}

fn tokenize(input: &str) -> Result<Vec<Token>, ExprError> {
    let chars: Vec<char> = input.chars().collect();
    let mut tokens = Vec::new();
    let mut i = 0;
    while i < chars.len() {
        match chars[i] {
            ' ' | '\t' | '\r' | '\n' => i += 1,
            '+' => {
                tokens.push(Token::Plus);
                i += 1;
            }
            '-' => {
                tokens.push(Token::Minus);
                i += 1;
            }
            '*' => {
                if chars.get(i + 1) == Some(&'*') {
                    tokens.push(Token::DoubleStar);
                    i += 2;
                } else {
                    tokens.push(Token::Star);
                    i += 1;
                }
            }
            '/' => {
                tokens.push(Token::Slash);
                i += 1;
            }
            '(' => {
                tokens.push(Token::LParen);
                i += 1;
            }
            ')' => {
                tokens.push(Token::RParen);
                i += 1;
            }
            c if c.is_ascii_digit() || c == '.' => {
                let start = i;
                while i < chars.len() && (chars[i].is_ascii_digit() || chars[i] == '.') {
                    i += 1;
                }
                // Scientific notation, only when digits actually follow
                if i < chars.len() && (chars[i] == 'e' || chars[i] == 'E') {
                    let mut j = i + 1;
                    if j < chars.len() && (chars[j] == '+' || chars[j] == '-') {
                        j += 1;
                    }
                    if j < chars.len() && chars[j].is_ascii_digit() {
                        i = j;
                        while i < chars.len() && chars[i].is_ascii_digit() {
                            i += 1;
                        }
                    }
                }
                tokens.push(Token::Number(chars[start..i].iter().collect()));
            }
            c if c.is_ascii_alphabetic() || c == '_' => {
                let start = i;
                while i < chars.len() && (chars[i].is_ascii_alphanumeric() || chars[i] == '_') {
                    i += 1;
                }
                tokens.push(Token::Symbol(chars[start..i].iter().collect()));
            }
            other => return Err(ExprError::UnexpectedChar(other)),
        }
    }
    Ok(tokens)
}

fn number_term(lexeme: &str) -> Result<Term, ExprError> {
    let coeff = if lexeme.contains(['.', 'e', 'E']) {
        lexeme
            .parse::<f64>()
            .map(Coeff::Float)
            .map_err(|_| ExprError::MalformedNumber(lexeme.to_string()))?
    } else {
        lexeme
            .parse::<i64>()
            .map(Coeff::Int)
            .map_err(|_| ExprError::MalformedNumber(lexeme.to_string()))?
    };
    Ok(Term::constant(coeff))
}

fn integer_exponent(expr: &Expr) -> Result<u32, ExprError> {
    match expr.terms() {
        [] => Ok(0),
        [term] if term.factors().is_empty() => match term.coeff() {
            Coeff::Int(n) if n >= 0 => Ok(n as u32),
            _ => Err(ExprError::NonIntegerExponent(expr.to_string())),
        },
        _ => Err(ExprError::NonIntegerExponent(expr.to_string())),
    }
}

struct Parser {
    tokens: Vec<Token>,
    pos: usize,
}

impl Parser {
    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    fn advance(&mut self) -> Option<Token> {
        let token = self.tokens.get(self.pos).cloned();
        if token.is_some() {
            self.pos += 1;
        }
        token
    }

    fn parse_expr(&mut self) -> Result<Expr, ExprError> {
        let mut expr = self.parse_term()?;
        loop {
            match self.peek() {
                Some(Token::Plus) => {
                    self.pos += 1;
                    let rhs = self.parse_term()?;
                    expr = expr.add(&rhs);
                }
                Some(Token::Minus) => {
                    self.pos += 1;
                    let rhs = self.parse_term()?;
                    expr = expr.add(&rhs.neg());
                }
                _ => break,
            }
        }
        Ok(expr)
    }

    fn parse_term(&mut self) -> Result<Expr, ExprError> {
        let mut expr = self.parse_unary()?;
        loop {
            match self.peek() {
                Some(Token::Star) => {
                    self.pos += 1;
                    let rhs = self.parse_unary()?;
                    expr = expr.mul(&rhs);
                }
                Some(Token::Slash) => {
                    self.pos += 1;
                    let rhs = self.parse_unary()?;
                    expr = expr.div(&rhs)?;
                }
                _ => break,
            }
        }
        Ok(expr)
    }

    fn parse_unary(&mut self) -> Result<Expr, ExprError> {
        let mut negate = false;
        loop {
            match self.peek() {
                Some(Token::Minus) => {
                    self.pos += 1;
                    negate = !negate;
                }
                Some(Token::Plus) => {
                    self.pos += 1;
                }
                _ => break,
            }
        }
        let expr = self.parse_power()?;
        Ok(if negate { expr.neg() } else { expr })
    }

    fn parse_power(&mut self) -> Result<Expr, ExprError> {
        let base = self.parse_atom()?;
        if self.peek() == Some(&Token::DoubleStar) {
            self.pos += 1;
            // Right-associative, and the exponent may carry its own sign
            let exponent = self.parse_unary()?;
            base.pow(integer_exponent(&exponent)?)
        } else {
            Ok(base)
        }
    }

    fn parse_atom(&mut self) -> Result<Expr, ExprError> {
        match self.advance() {
            Some(Token::Number(lexeme)) => {
                number_term(&lexeme).map(|term| Expr::from_terms(vec![term]))
            }
            Some(Token::Symbol(name)) => Ok(Expr::from_terms(vec![Term::symbol(name)])),
            Some(Token::LParen) => {
                let expr = self.parse_expr()?;
                match self.advance() {
                    Some(Token::RParen) => Ok(expr),
                    Some(other) => Err(ExprError::UnexpectedToken(describe(&other))),
                    None => Err(ExprError::UnexpectedEnd),
                }
            }
            Some(other) => Err(ExprError::UnexpectedToken(describe(&other))),
            None => Err(ExprError::UnexpectedEnd),
        }
    }
}

pub(super) fn parse(input: &str) -> Result<Expr, ExprError> {
    let tokens = tokenize(input)?;
    let mut parser = Parser { tokens, pos: 0 };
    let expr = parser.parse_expr()?;
    match parser.peek() {
        Some(token) => Err(ExprError::UnexpectedToken(describe(token))),
        None => Ok(expr),
    }
}
