use serde::Serialize;

/// Minimum run of underscores that counts as a blank on a prompt.
pub const BLANK_RUN: usize = 3;

/// Shared surface of both card kinds.
pub trait Card {
    const KIND: &'static str;

    fn text(&self) -> &str;

    fn number(&self) -> Option<&str>;
}

/// A black card: the scenario the czar reads out.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct PromptCard {
    text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    category: Option<String>,
}

impl PromptCard {
    pub fn new(text: impl Into<String>) -> Self {
        PromptCard {
            text: text.into(),
            number: None,
            category: None,
        }
    }

    pub fn with_number(mut self, number: impl Into<String>) -> Self {
        self.number = Some(number.into());
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    /// Number of response slots written into the text.
    pub fn blanks(&self) -> usize {
        let mut blanks = 0;
        let mut run = 0;
        for c in self.text.chars().chain(std::iter::once(' ')) {
            if c == '_' {
                run += 1;
            } else {
                if run >= BLANK_RUN {
                    blanks += 1;
                }
                run = 0;
            }
        }
        blanks
    }

    /// How many responses the prompt asks for. A prompt without a blank is a
    /// question and takes one.
    pub fn pick(&self) -> usize {
        self.blanks().max(1)
    }
}

impl Card for PromptCard {
    const KIND: &'static str = "prompt";

    fn text(&self) -> &str {
        &self.text
    }

    fn number(&self) -> Option<&str> {
        self.number.as_deref()
    }
}

/// A white card: a candidate answer held in a player's hand.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct ResponseCard {
    text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    number: Option<String>,
}

impl ResponseCard {
    pub fn new(text: impl Into<String>) -> Self {
        ResponseCard {
            text: text.into(),
            number: None,
        }
    }

    pub fn with_number(mut self, number: impl Into<String>) -> Self {
        self.number = Some(number.into());
        self
    }
}

impl Card for ResponseCard {
    const KIND: &'static str = "response";

    fn text(&self) -> &str {
        &self.text
    }

    fn number(&self) -> Option<&str> {
        self.number.as_deref()
    }
}

/// A named pair of decks, as stored in one pack directory.
#[derive(Serialize, Debug, Clone)]
pub struct Pack {
    pub name: String,
    pub prompts: Vec<PromptCard>,
    pub responses: Vec<ResponseCard>,
}

impl Pack {
    pub fn new(name: impl Into<String>, prompts: Vec<PromptCard>, responses: Vec<ResponseCard>) -> Self {
        Pack {
            name: name.into(),
            prompts,
            responses,
        }
    }

    pub fn meta(&self) -> PackMeta {
        PackMeta {
            num_prompts: self.prompts.len(),
            num_responses: self.responses.len(),
        }
    }
}

impl PartialEq for Pack {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Pack {}

#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct PackMeta {
    pub num_prompts: usize,
    pub num_responses: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_blanks() {
        assert_eq!(PromptCard::new("Why did the chatbot ____?").blanks(), 1);
        assert_eq!(PromptCard::new("___ + ___ = a lawsuit").blanks(), 2);
        assert_eq!(PromptCard::new("Ends with a blank ___").blanks(), 1);
        assert_eq!(PromptCard::new("What could go wrong?").blanks(), 0);
        assert_eq!(PromptCard::new("snake_case and __init__ are not blanks").blanks(), 0);
    }

    #[test]
    fn test_question_picks_one() {
        assert_eq!(PromptCard::new("What could go wrong?").pick(), 1);
        assert_eq!(PromptCard::new("___ meets ___").pick(), 2);
    }

    #[test]
    fn test_optional_fields() {
        let prompt = PromptCard::new("text").with_number("P1").with_category("privacy");
        assert_eq!(prompt.number(), Some("P1"));
        assert_eq!(prompt.category(), Some("privacy"));
        assert_eq!(ResponseCard::new("text").number(), None);
    }
}
