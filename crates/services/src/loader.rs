use std::borrow::Cow;
use std::io::ErrorKind;
use std::path::PathBuf;

use flashdeck_core::model::Flashcard;
use quick_xml::Reader;
use quick_xml::events::Event;

use crate::error::LoadError;

/// Flashcard document compiled into the binary.
pub const BUNDLED_FLASHCARDS: &str = include_str!("../assets/flashcards.xml");

const CARD: &[u8] = b"card";
const QUESTION: &[u8] = b"question";
const ANSWER: &[u8] = b"answer";

/// Where a flashcard document comes from.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FlashcardSource {
    #[default]
    Bundled,
    File(PathBuf),
    Inline(String),
}

impl FlashcardSource {
    fn read(&self) -> Result<Cow<'_, str>, LoadError> {
        match self {
            FlashcardSource::Bundled => Ok(Cow::Borrowed(BUNDLED_FLASHCARDS)),
            FlashcardSource::Inline(text) => Ok(Cow::Borrowed(text.as_str())),
            FlashcardSource::File(path) => match std::fs::read_to_string(path) {
                Ok(text) => Ok(Cow::Owned(text)),
                Err(err) if err.kind() == ErrorKind::NotFound => {
                    Err(LoadError::NotFound { path: path.clone() })
                }
                Err(source) => Err(LoadError::Io {
                    path: path.clone(),
                    source,
                }),
            },
        }
    }

    fn describe(&self) -> String {
        match self {
            FlashcardSource::Bundled => "bundled flashcards".to_string(),
            FlashcardSource::File(path) => path.display().to_string(),
            FlashcardSource::Inline(_) => "inline flashcards".to_string(),
        }
    }
}

/// Loads the flashcard deck once at startup.
#[derive(Debug, Clone, Default)]
pub struct FlashcardLoader {
    source: FlashcardSource,
}

impl FlashcardLoader {
    #[must_use]
    pub fn new(source: FlashcardSource) -> Self {
        Self { source }
    }

    /// Read and parse the source.
    ///
    /// # Errors
    ///
    /// Returns `LoadError::NotFound` or `LoadError::Io` when the resource
    /// cannot be read, and `LoadError::Malformed` / `LoadError::Xml` when the
    /// document cannot be parsed. No partial deck is returned on failure.
    pub fn load(&self) -> Result<Vec<Flashcard>, LoadError> {
        let text = self.source.read()?;
        let cards = parse_flashcards(&text)?;
        tracing::info!(
            source = %self.source.describe(),
            count = cards.len(),
            "loaded flashcards"
        );
        Ok(cards)
    }

    /// Like [`load`](Self::load), but a failure is logged and yields an empty
    /// deck.
    #[must_use]
    pub fn load_or_empty(&self) -> Vec<Flashcard> {
        match self.load() {
            Ok(cards) => cards,
            Err(err) if err.is_not_found() => {
                tracing::warn!(error = %err, "flashcard resource missing, starting with an empty deck");
                Vec::new()
            }
            Err(err) => {
                tracing::warn!(error = %err, "flashcard resource unusable, starting with an empty deck");
                Vec::new()
            }
        }
    }
}

/// Parse a flashcard document in a single forward pass.
///
/// `question` and `answer` text is collected into pending slots that reset
/// whenever a `card` starts. A card is kept on its end tag only when both
/// slots hold non-empty text; anything else is dropped without an error.
/// Unknown elements and attributes are ignored.
///
/// # Errors
///
/// Returns `LoadError` when the document is not well-formed XML, has no root
/// element or more than one, or nests elements inside `question` / `answer`.
pub fn parse_flashcards(xml: &str) -> Result<Vec<Flashcard>, LoadError> {
    let mut reader = Reader::from_str(xml);

    let mut cards = Vec::new();
    let mut pending_question: Option<String> = None;
    let mut pending_answer: Option<String> = None;
    let mut depth = 0usize;
    let mut saw_root = false;
    let mut root_closed = false;

    loop {
        match reader.read_event()? {
            Event::Start(e) => {
                if root_closed {
                    return Err(LoadError::malformed("content after root element"));
                }
                saw_root = true;
                match e.local_name().as_ref() {
                    CARD => {
                        pending_question = None;
                        pending_answer = None;
                        depth += 1;
                    }
                    QUESTION => {
                        pending_question = Some(read_text_content(&mut reader, "question")?);
                    }
                    ANSWER => {
                        pending_answer = Some(read_text_content(&mut reader, "answer")?);
                    }
                    _ => depth += 1,
                }
            }
            Event::Empty(e) => {
                if root_closed {
                    return Err(LoadError::malformed("content after root element"));
                }
                saw_root = true;
                root_closed = depth == 0;
                match e.local_name().as_ref() {
                    CARD => {
                        pending_question = None;
                        pending_answer = None;
                        tracing::debug!("dropping empty card");
                    }
                    QUESTION => pending_question = Some(String::new()),
                    ANSWER => pending_answer = Some(String::new()),
                    _ => {}
                }
            }
            Event::End(e) => {
                depth = depth.saturating_sub(1);
                root_closed = depth == 0;
                if e.local_name().as_ref() == CARD {
                    finish_card(
                        &mut cards,
                        pending_question.as_deref(),
                        pending_answer.as_deref(),
                    );
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if !saw_root {
        return Err(LoadError::malformed("document has no root element"));
    }
    if depth != 0 {
        return Err(LoadError::malformed("document ended inside an open element"));
    }

    Ok(cards)
}

fn finish_card(cards: &mut Vec<Flashcard>, question: Option<&str>, answer: Option<&str>) {
    let (Some(question), Some(answer)) = (question, answer) else {
        tracing::debug!("dropping card without both question and answer");
        return;
    };
    match Flashcard::new(question, answer) {
        Ok(card) => cards.push(card),
        Err(err) => tracing::debug!(error = %err, "dropping card"),
    }
}

fn read_text_content(reader: &mut Reader<&[u8]>, element: &str) -> Result<String, LoadError> {
    let mut text = String::new();
    loop {
        match reader.read_event()? {
            Event::Text(e) => text.push_str(&e.unescape().map_err(quick_xml::Error::from)?),
            Event::CData(e) => text.push_str(&reader.decoder().decode(&e)?),
            Event::End(_) => return Ok(text),
            Event::Start(_) | Event::Empty(_) => {
                return Err(LoadError::malformed(format!(
                    "<{element}> must contain only text"
                )));
            }
            Event::Eof => {
                return Err(LoadError::malformed(format!(
                    "document ended inside <{element}>"
                )));
            }
            _ => {}
        }
    }
}
