#![deny(warnings)]

// Buffered character scanner. Consumed chars stay in an internal buffer
// until extracted or ignored so the cursor can rewind to any buffered
// position.
pub struct Scanner<I: Iterator<Item = char>> {
    src: I,
    buf: Vec<char>,
    pos: isize,
}

impl<'a> Scanner<std::str::Chars<'a>> {
    pub fn from_str(source: &'a str) -> Self {
        Scanner::new(source.chars())
    }
}

impl<I: Iterator<Item = char>> Iterator for Scanner<I> {
    type Item = char;
    fn next(&mut self) -> Option<char> {
        self.pos += 1;
        while self.pos >= self.buf.len() as isize {
            match self.src.next() {
                Some(c) => self.buf.push(c),
                None => break,
            }
        }
        let blen = self.buf.len() as isize;
        if self.pos >= blen {
            self.pos = blen;
        }
        self.curr()
    }
}

impl<I: Iterator<Item = char>> Scanner<I> {
    pub fn new(source: I) -> Scanner<I> {
        Scanner {
            src: source,
            buf: Vec::new(),
            pos: -1,
        }
    }

    pub fn pos(&self) -> isize {
        self.pos
    }

    pub fn set_pos(&mut self, pos: isize) -> bool {
        if pos < -1 || pos > (self.buf.len() as isize) {
            return false;
        }
        self.pos = pos;
        true
    }

    pub fn curr(&self) -> Option<char> {
        if self.pos < 0 || self.pos >= self.buf.len() as isize {
            return None;
        }
        Some(self.buf[self.pos as usize])
    }

    pub fn peek(&mut self) -> Option<char> {
        let backtrack = self.pos;
        let peeked = self.next();
        self.pos = backtrack;
        peeked
    }

    // Drop everything up to the cursor, the scanner starts fresh.
    pub fn ignore(&mut self) {
        if self.pos >= 0 {
            let consumed = (self.pos + 1) as usize;
            if self.buf.len() > consumed {
                self.buf.drain(..consumed);
            } else {
                self.buf.clear();
            }
        }
        self.pos = -1;
    }

    // Take everything up to the cursor out of the buffer.
    pub fn extract_string(&mut self) -> String {
        let n = ((self.pos + 1).max(0) as usize).min(self.buf.len());
        let lexeme: String = self.buf[..n].iter().collect();
        self.ignore();
        lexeme
    }

    // Advance only if the next char is 'what'.
    pub fn accept_char(&mut self, what: char) -> bool {
        let backtrack = self.pos;
        if self.next() == Some(what) {
            return true;
        }
        self.pos = backtrack;
        false
    }

    // Advance only if the next char is in the 'any' set, returning the
    // matched char.
    pub fn accept_any_char(&mut self, any: &str) -> Option<char> {
        let backtrack = self.pos;
        if let Some(next) = self.next() {
            if any.contains(next) {
                return Some(next);
            }
        }
        self.pos = backtrack;
        None
    }

    // Skip over the 'over' set, result is whether the scanner advanced.
    pub fn skip_all_chars(&mut self, over: &str) -> bool {
        let mut advanced = false;
        while self.accept_any_char(over).is_some() {
            advanced = true;
        }
        advanced
    }

    // Discard whitespace between tokens, it never reaches any output.
    pub fn ignore_ws(&mut self) {
        self.skip_all_chars(" \n\r\t");
        self.ignore();
    }
}
