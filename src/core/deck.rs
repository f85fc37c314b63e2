use crate::core::Flashcard;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CardSide {
    #[default]
    Front,
    Back,
}

impl CardSide {
    pub fn flipped(self) -> Self {
        match self {
            CardSide::Front => CardSide::Back,
            CardSide::Back => CardSide::Front,
        }
    }
}

/// Text for one visible side of a card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardFace<'a> {
    pub heading: String,
    pub body: &'a str,
    pub hint: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeckCard {
    pub card: Flashcard,
    pub side: CardSide,
}

impl DeckCard {
    pub fn is_flipped(&self) -> bool {
        self.side == CardSide::Back
    }
}

/// The cards currently on screen, in the order the server returned them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CardDeck {
    cards: Vec<DeckCard>,
}

impl CardDeck {
    pub fn new(flashcards: Vec<Flashcard>) -> Self {
        Self {
            cards: flashcards
                .into_iter()
                .map(|card| DeckCard { card, side: CardSide::Front })
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn cards(&self) -> &[DeckCard] {
        &self.cards
    }

    pub fn flashcards(&self) -> impl Iterator<Item = &Flashcard> {
        self.cards.iter().map(|c| &c.card)
    }

    /// Out-of-range indices are ignored.
    pub fn toggle(&mut self, index: usize) {
        if let Some(card) = self.cards.get_mut(index) {
            card.side = card.side.flipped();
        }
    }

    pub fn face(&self, index: usize) -> Option<CardFace<'_>> {
        let entry = self.cards.get(index)?;
        Some(match entry.side {
            CardSide::Front => CardFace {
                heading: format!("Question {}", index + 1),
                body: &entry.card.question,
                hint: "(Click to flip)",
            },
            CardSide::Back => CardFace {
                heading: "Answer".to_string(),
                body: &entry.card.answer,
                hint: "(Click to flip back)",
            },
        })
    }
}

/// What the card area is showing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CardDisplay {
    #[default]
    Empty,
    Loading,
    Cards(CardDeck),
}

impl CardDisplay {
    pub fn deck_mut(&mut self) -> Option<&mut CardDeck> {
        match self {
            CardDisplay::Cards(deck) => Some(deck),
            _ => None,
        }
    }
}
