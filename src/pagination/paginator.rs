//! Paginator
//!
//! Parses a pagination initializer into fragments and drives them to
//! produce one label per scanned image.
//!
//! # Initializer grammar
//!
//! - ASCII digits: decimal numeral, zero-padded to the literal's width
//! - Roman letters of one case: Roman numeral (`IV`, `xii`)
//! - Other letters and symbols: static text
//! - `` `…` ``: verbatim static text, even if it looks like a numeral
//! - Superscript digits and a non-leading `½`: increment of the preceding fragment
//! - `¡` / `¿`: the next fragment only shows on odd (recto) / even (verso) sides
//! - `ª`: the next letter run is an alphabetic numeral
//! - Leading `½`: the sequence starts on the back side of its first value

use super::fragment::{
    is_roman_letter, AlphabeticNumeral, DecimalNumeral, Fragment, PageSide, RomanNumeral,
    StaticText,
};
use super::types::{
    HalfInteger, PaginationError, Result, ALPHABETIC_MARKER, EVEN_PAGE_MARKER, HALF,
    ODD_PAGE_MARKER, SUPERSCRIPT_DIGITS, TEXT_ESCAPE,
};
use std::str::FromStr;
use tracing::{debug, trace};

// ============================================================
// Character classes
// ============================================================

/// Semantic class of an initializer character
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum CharClass {
    Decimal,
    UppercaseRoman,
    LowercaseRoman,
    Text,
    Symbol,
    Increment,
    HalfPage,
    FullPage,
    Alphabetic,
    TextEscape,
    End,
}

impl CharClass {
    /// Classify one character outside of escaped text
    pub(crate) fn of(c: char) -> CharClass {
        match c {
            TEXT_ESCAPE => CharClass::TextEscape,
            ODD_PAGE_MARKER => CharClass::HalfPage,
            EVEN_PAGE_MARKER => CharClass::FullPage,
            ALPHABETIC_MARKER => CharClass::Alphabetic,
            HALF => CharClass::Increment,
            c if SUPERSCRIPT_DIGITS.contains(&c) => CharClass::Increment,
            '0'..='9' => CharClass::Decimal,
            c if is_roman_letter(c) && c.is_ascii_uppercase() => CharClass::UppercaseRoman,
            c if is_roman_letter(c) => CharClass::LowercaseRoman,
            c if c.is_alphabetic() => CharClass::Text,
            _ => CharClass::Symbol,
        }
    }

    fn is_letter(self) -> bool {
        matches!(
            self,
            CharClass::Text | CharClass::UppercaseRoman | CharClass::LowercaseRoman
        )
    }

    /// Class of a buffer of class `self` after appending a `next` character,
    /// or `None` when the buffer must be flushed first.
    ///
    /// Letter runs that mix text and Roman letters, or both Roman cases,
    /// are text: "Chapter" is not the numeral C followed by text.
    pub(crate) fn absorb(self, next: CharClass) -> Option<CharClass> {
        match (self, next) {
            (current, next) if current == next => Some(current),
            (current, next) if current.is_letter() && next.is_letter() => Some(CharClass::Text),
            _ => None,
        }
    }
}

// ============================================================
// Parser
// ============================================================

/// Single-pass initializer parser
#[derive(Debug, Default)]
struct Parser {
    fragments: Vec<Fragment>,
    buffer: String,
    class: Option<CharClass>,
    escaped: bool,
    pending_side: PageSide,
    pending_alphabetic: bool,
}

impl Parser {
    fn parse(mut self, initializer: &str) -> Result<Vec<Fragment>> {
        for c in initializer.chars().map(Some).chain(std::iter::once(None)) {
            self.accept(c)?;
        }
        Ok(self.fragments)
    }

    /// Feed one character, `None` marking the end of the initializer
    fn accept(&mut self, c: Option<char>) -> Result<()> {
        if self.escaped {
            match c {
                Some(TEXT_ESCAPE) => {
                    // Escaped text stands alone: nothing after it joins the run
                    self.escaped = false;
                    self.flush()?;
                }
                Some(c) => self.buffer.push(c),
                None => {
                    return Err(PaginationError::InvalidInitializer(
                        "unmatched text escape".to_string(),
                    ))
                }
            }
            return Ok(());
        }

        match c.map_or(CharClass::End, CharClass::of) {
            CharClass::TextEscape => {
                self.flush()?;
                self.class = Some(CharClass::Text);
                self.escaped = true;
            }
            CharClass::HalfPage => {
                self.flush()?;
                self.pending_side = PageSide::Odd;
            }
            CharClass::FullPage => {
                self.flush()?;
                self.pending_side = PageSide::Even;
            }
            CharClass::Alphabetic => {
                self.flush()?;
                self.pending_alphabetic = true;
            }
            CharClass::End => self.accept_end()?,
            class => {
                self.append(class)?;
                self.buffer.extend(c);
            }
        }
        Ok(())
    }

    /// Switch the buffer to the class of an incoming character
    fn append(&mut self, class: CharClass) -> Result<()> {
        match self.class.and_then(|current| current.absorb(class)) {
            Some(merged) => self.class = Some(merged),
            None => {
                self.flush()?;
                self.class = Some(class);
            }
        }
        Ok(())
    }

    fn accept_end(&mut self) -> Result<()> {
        self.flush()?;
        if self.pending_side != PageSide::Any || self.pending_alphabetic {
            return Err(PaginationError::InvalidInitializer(
                "marker at the end of the initializer tags nothing".to_string(),
            ));
        }
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        let Some(class) = self.class.take() else {
            return Ok(());
        };
        let literal = std::mem::take(&mut self.buffer);
        if literal.is_empty() {
            return Ok(());
        }

        if class == CharClass::Increment {
            let increment = parse_increment(&literal)?;
            let previous = self.fragments.last_mut().ok_or_else(|| {
                PaginationError::InvalidInitializer(format!(
                    "increment \"{}\" does not follow a fragment",
                    literal
                ))
            })?;
            previous.set_increment(increment);
            return Ok(());
        }

        let side = std::mem::take(&mut self.pending_side);
        let fragment = if std::mem::take(&mut self.pending_alphabetic) {
            if side != PageSide::Any {
                return Err(PaginationError::InvalidInitializer(format!(
                    "alphabetic numeral \"{}\" cannot be limited to one page side",
                    literal
                )));
            }
            Fragment::Alphabetic(AlphabeticNumeral::parse(&literal)?)
        } else if side != PageSide::Any {
            Fragment::StaticText(StaticText::new(literal, side))
        } else {
            match class {
                CharClass::Decimal => Fragment::Decimal(DecimalNumeral::parse(&literal)?),
                CharClass::UppercaseRoman | CharClass::LowercaseRoman => {
                    Fragment::Roman(RomanNumeral::parse(&literal)?)
                }
                _ => Fragment::StaticText(StaticText::new(literal, PageSide::Any)),
            }
        };
        self.fragments.push(fragment);
        Ok(())
    }
}

/// Value of an increment run: superscript digits plus one half per `½`
fn parse_increment(literal: &str) -> Result<HalfInteger> {
    let mut whole: i64 = 0;
    let mut halves = HalfInteger::ZERO;
    for c in literal.chars() {
        if c == HALF {
            halves = halves + HalfInteger::ONE_HALF;
        } else if let Some(digit) = SUPERSCRIPT_DIGITS.iter().position(|&d| d == c) {
            whole = whole
                .checked_mul(10)
                .and_then(|w| w.checked_add(digit as i64))
                .ok_or_else(|| {
                    PaginationError::NumberFormat(format!("increment \"{}\" is too large", literal))
                })?;
        }
    }
    Ok(HalfInteger::from(whole) + halves)
}

// ============================================================
// Paginator
// ============================================================

/// Label generator built from a pagination initializer
///
/// Every call to [`Iterator::next`] formats each fragment with the shared
/// counter and then advances the counter by that fragment's increment, so
/// later fragments in the same label see the advanced value. The sequence
/// never ends; the caller decides how many labels it needs.
#[derive(Debug, Clone)]
pub struct Paginator {
    fragments: Vec<Fragment>,
    reverse: bool,
    value: HalfInteger,
}

impl Paginator {
    /// Build a paginator from an initializer string
    pub fn new(initializer: &str) -> Result<Self> {
        if initializer.is_empty() {
            return Err(PaginationError::InvalidInitializer(
                "empty initializer".to_string(),
            ));
        }

        let (starts_half, body) = match initializer.strip_prefix(HALF) {
            Some(rest) => (true, rest),
            None => (false, initializer),
        };

        let fragments = Parser::default().parse(body)?;
        if starts_half && fragments.is_empty() {
            return Err(PaginationError::InvalidInitializer(
                "leading half is not followed by a fragment".to_string(),
            ));
        }
        let mut paginator = Self {
            fragments,
            reverse: false,
            value: HalfInteger::ZERO,
        };
        paginator.initialize_increments()?;
        if starts_half {
            paginator.value = paginator.value + HalfInteger::ONE_HALF;
        }

        debug!(
            initializer,
            fragments = paginator.fragments.len(),
            reverse = paginator.reverse,
            start = %paginator.value,
            "Paginator initialized"
        );
        Ok(paginator)
    }

    /// Fill in missing increments and pick the counting direction
    fn initialize_increments(&mut self) -> Result<()> {
        let counting: Vec<usize> = self
            .fragments
            .iter()
            .enumerate()
            .filter(|(_, fragment)| fragment.is_counting())
            .map(|(index, _)| index)
            .collect();

        match counting.as_slice() {
            [] => self.value = HalfInteger::ZERO,
            [only] => {
                let fragment = &mut self.fragments[*only];
                if fragment.increment().is_none() {
                    fragment.set_increment(HalfInteger::from(1));
                }
                self.value = HalfInteger::from(initial(&self.fragments, *only));
            }
            [first, .., last] => {
                let first_value = initial(&self.fragments, *first);
                let last_value = initial(&self.fragments, *last);
                self.reverse = first_value > last_value;

                // Counting fragments in the order they are driven
                let mut order = counting.clone();
                if self.reverse {
                    order.reverse();
                }

                let steps = order.len() as i64 - 1;
                let mut average = last_value
                    .checked_sub(first_value)
                    .and_then(|distance| HalfInteger::split(distance.abs(), steps))
                    .ok_or_else(|| too_far_apart(first_value, last_value))?;
                if average == HalfInteger::ZERO {
                    average = HalfInteger::from(1);
                }

                for pair in order.windows(2) {
                    let (current, following) = (pair[0], pair[1]);
                    if self.fragments[current].increment().is_none() {
                        let (from, to) = (
                            initial(&self.fragments, current),
                            initial(&self.fragments, following),
                        );
                        let distance = to
                            .checked_sub(from)
                            .ok_or_else(|| too_far_apart(from, to))?;
                        self.fragments[current].set_increment(HalfInteger::from(distance));
                    }
                }

                let (start, tail) = (order[0], order[order.len() - 1]);
                if self.fragments[tail].increment().is_none() {
                    self.fragments[tail].set_increment(average);
                }
                self.value = HalfInteger::from(initial(&self.fragments, start));
            }
        }
        Ok(())
    }

    /// Produce the next label and advance the counter
    pub fn next_label(&mut self) -> String {
        let mut label = String::new();
        if self.reverse {
            for fragment in self.fragments.iter().rev() {
                label.insert_str(0, &fragment.format(self.value));
                if let Some(increment) = fragment.increment() {
                    self.value = self.value + increment;
                }
            }
        } else {
            for fragment in &self.fragments {
                label.push_str(&fragment.format(self.value));
                if let Some(increment) = fragment.increment() {
                    self.value = self.value + increment;
                }
            }
        }
        trace!(label = %label, next = %self.value, "Generated label");
        label
    }

    /// Collect the next `count` labels
    pub fn labels(&mut self, count: usize) -> Vec<String> {
        (0..count).map(|_| self.next_label()).collect()
    }

    pub fn fragments(&self) -> &[Fragment] {
        &self.fragments
    }

    /// Whether fragments are driven right to left
    pub fn is_reverse(&self) -> bool {
        self.reverse
    }

    /// Counter value the next label starts from
    pub fn value(&self) -> HalfInteger {
        self.value
    }
}

impl FromStr for Paginator {
    type Err = PaginationError;

    fn from_str(initializer: &str) -> Result<Self> {
        Paginator::new(initializer)
    }
}

impl Iterator for Paginator {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        Some(self.next_label())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

/// Initial value of the counting fragment at `index`
fn initial(fragments: &[Fragment], index: usize) -> i64 {
    fragments[index].initial_value().unwrap_or_default()
}

fn too_far_apart(from: i64, to: i64) -> PaginationError {
    PaginationError::NumberFormat(format!("no increment fits between {} and {}", from, to))
}

/// Build a paginator and collect `count` labels from it
pub fn generate_labels(initializer: &str, count: usize) -> Result<Vec<String>> {
    Ok(Paginator::new(initializer)?.labels(count))
}
