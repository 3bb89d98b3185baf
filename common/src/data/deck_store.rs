//! Reading and writing decks as CSV, one card per row.
//!
//! The first row is a header. Columns are matched by name, ignoring case:
//! `text` (also `card`, `prompt`, `response`), `number` (also `card_number`,
//! `id`, `#`) and, for prompts, `category`. Without a text header the first
//! column holds the text. Other columns are ignored.

use std::{fs::File, io, path::Path};

use csv::{ReaderBuilder, StringRecord, Trim, WriterBuilder};
use log::debug;

use super::cards::{Card, PromptCard, ResponseCard};
use crate::error::ParseError;

const TEXT_HEADERS: &[&str] = &["text", "card", "prompt", "response"];
const NUMBER_HEADERS: &[&str] = &["number", "card_number", "id", "#"];
const CATEGORY_HEADERS: &[&str] = &["category"];

/// A card kind that has a CSV row layout.
pub trait CsvCard: Card + Sized {
    const HEADER: &'static [&'static str];

    fn from_row(text: String, number: Option<String>, category: Option<String>) -> Self;

    fn to_row(&self) -> Vec<&str>;
}

impl CsvCard for PromptCard {
    const HEADER: &'static [&'static str] = &["text", "number", "category"];

    fn from_row(text: String, number: Option<String>, category: Option<String>) -> Self {
        let mut card = PromptCard::new(text);
        if let Some(number) = number {
            card = card.with_number(number);
        }
        if let Some(category) = category {
            card = card.with_category(category);
        }
        card
    }

    fn to_row(&self) -> Vec<&str> {
        vec![
            self.text(),
            self.number().unwrap_or(""),
            self.category().unwrap_or(""),
        ]
    }
}

impl CsvCard for ResponseCard {
    const HEADER: &'static [&'static str] = &["text", "number"];

    fn from_row(text: String, number: Option<String>, _category: Option<String>) -> Self {
        let card = ResponseCard::new(text);
        match number {
            Some(number) => card.with_number(number),
            None => card,
        }
    }

    fn to_row(&self) -> Vec<&str> {
        vec![self.text(), self.number().unwrap_or("")]
    }
}

struct Columns {
    text: usize,
    number: Option<usize>,
    category: Option<usize>,
}

impl Columns {
    fn from_headers(headers: &StringRecord) -> Result<Self, ParseError> {
        if headers.is_empty() {
            return Err(ParseError::EmptyHeader);
        }

        let find = |names: &[&str]| {
            headers
                .iter()
                .position(|header| names.iter().any(|name| header.eq_ignore_ascii_case(name)))
        };

        Ok(Columns {
            text: find(TEXT_HEADERS).unwrap_or(0),
            number: find(NUMBER_HEADERS),
            category: find(CATEGORY_HEADERS),
        })
    }
}

pub fn load_prompts<P: AsRef<Path>>(path: P) -> Result<Vec<PromptCard>, ParseError> {
    load(path.as_ref())
}

pub fn load_responses<P: AsRef<Path>>(path: P) -> Result<Vec<ResponseCard>, ParseError> {
    load(path.as_ref())
}

/// Loads every card of a file in file order.
pub fn load<C: CsvCard>(path: &Path) -> Result<Vec<C>, ParseError> {
    let file = File::open(path).map_err(|source| ParseError::Io {
        path: path.to_owned(),
        source,
    })?;
    let cards = read(file)?;
    debug!("Loaded {} {} cards from {}", cards.len(), C::KIND, path.display());
    Ok(cards)
}

pub fn read_prompts<R: io::Read>(reader: R) -> Result<Vec<PromptCard>, ParseError> {
    read(reader)
}

pub fn read_responses<R: io::Read>(reader: R) -> Result<Vec<ResponseCard>, ParseError> {
    read(reader)
}

pub fn read<C: CsvCard, R: io::Read>(reader: R) -> Result<Vec<C>, ParseError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .trim(Trim::All)
        .from_reader(reader);
    let columns = Columns::from_headers(reader.headers().map_err(ParseError::csv)?)?;

    let mut cards = Vec::new();
    let mut record = StringRecord::new();
    while reader.read_record(&mut record).map_err(ParseError::csv)? {
        let line = record.position().map_or(0, |position| position.line());
        let field = |index: Option<usize>| {
            index
                .and_then(|index| record.get(index))
                .filter(|value| !value.is_empty())
                .map(str::to_owned)
        };

        let text = field(Some(columns.text)).ok_or(ParseError::BlankText { line })?;
        cards.push(C::from_row(
            text,
            field(columns.number),
            field(columns.category),
        ));
    }

    Ok(cards)
}

/// Writes cards in the canonical column layout. Reading the output back
/// yields the same cards in the same order.
pub fn write<C: CsvCard, W: io::Write>(cards: &[C], writer: W) -> csv::Result<()> {
    let mut writer = WriterBuilder::new().from_writer(writer);
    writer.write_record(C::HEADER)?;
    for card in cards {
        writer.write_record(card.to_row())?;
    }
    writer.flush()?;
    Ok(())
}

pub fn save<C: CsvCard, P: AsRef<Path>>(cards: &[C], path: P) -> csv::Result<()> {
    let file = File::create(path.as_ref())?;
    write(cards, file)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_aliases_and_order() {
        let csv = "Card Number,Category,Prompt\n\
                   7,privacy,The assistant remembered ____.\n\
                   8,,Who signed off on ____?\n";
        // "Card Number" is not an alias.
        let prompts = read_prompts(csv.as_bytes()).unwrap();

        assert_eq!(prompts.len(), 2);
        assert_eq!(prompts[0].text(), "The assistant remembered ____.");
        assert_eq!(prompts[0].category(), Some("privacy"));
        assert_eq!(prompts[0].number(), None);
        assert_eq!(prompts[1].category(), None);
    }

    #[test]
    fn test_first_column_is_text_without_header_match() {
        let csv = "Card text,#\nA model trained on group chats,12\n";
        let responses = read_responses(csv.as_bytes()).unwrap();

        assert_eq!(responses[0].text(), "A model trained on group chats");
        assert_eq!(responses[0].number(), Some("12"));
    }

    #[test]
    fn test_fields_are_trimmed() {
        let csv = "text,number\n  Hallucinated citations  , 3 \n";
        let responses = read_responses(csv.as_bytes()).unwrap();

        assert_eq!(responses[0].text(), "Hallucinated citations");
        assert_eq!(responses[0].number(), Some("3"));
    }

    #[test]
    fn test_ragged_row_reports_line() {
        let csv = "text,number\nfine,1\nragged,2,extra\n";
        let err = read_responses(csv.as_bytes()).unwrap_err();

        assert!(matches!(err, ParseError::Csv { .. }));
        assert_eq!(err.line(), Some(3));
    }

    #[test]
    fn test_whitespace_text_is_blank() {
        let csv = "text,number\nfine,1\n\"   \",2\n";
        let err = read_responses(csv.as_bytes()).unwrap_err();

        assert!(matches!(err, ParseError::BlankText { line: 3 }));
    }

    #[test]
    fn test_empty_input_has_no_header() {
        let err = read_prompts(&b""[..]).unwrap_err();
        assert!(matches!(err, ParseError::EmptyHeader));
    }

    #[test]
    fn test_invalid_utf8_is_parse_error() {
        let mut bytes = b"text\n".to_vec();
        bytes.extend_from_slice(&[0xff, 0xfe, b'\n']);

        assert!(matches!(
            read_responses(&bytes[..]),
            Err(ParseError::Csv { .. })
        ));
    }

    #[test]
    fn test_write_quotes_commas() {
        let cards = vec![PromptCard::new("Fast, cheap, or ____?").with_number("1")];
        let mut out = Vec::new();
        write(&cards, &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert_eq!(text, "text,number,category\n\"Fast, cheap, or ____?\",1,\n");
        assert_eq!(read_prompts(text.as_bytes()).unwrap(), cards);
    }
}
