//! Assigns segment ids to lines or words of text.
//!
//! A differencing engine working at line or word granularity turns each
//! distinct segment into a [`SegmentId`], diffs the id sequences, and renders
//! the result back through the same `Vocabulary`.

use rustc_hash::FxHashMap as HashMap;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::prelude::*;
use crate::{Error, Result};

/// `Vocabulary` of text segments.
///
/// ## Examples
///
/// ### Tokenize two texts line by line.
/// ```rust
/// use diff_primitives::prelude::*;
///
/// let mut vocabulary = Vocabulary::new();
/// let old = vocabulary.tokenize_lines("a\nb\nc\n").expect("Tokenize failed");
/// let new = vocabulary.tokenize_lines("a\nc\n").expect("Tokenize failed");
///
/// assert_eq!(old.len(), 3);
/// assert_eq!(new, vec![old[0], old[2]]);
/// assert_eq!(vocabulary.render(&new).expect("Render failed"), "a\nc\n");
/// ```
///
/// ### Insert segments manually.
/// ```rust
/// use diff_primitives::prelude::*;
///
/// let mut vocabulary = Vocabulary::new();
/// let id = vocabulary.try_insert("segment").expect("New segment inserted");
/// assert_eq!(vocabulary.segment_id("segment"), Some(id));
/// assert_eq!(vocabulary.segment(id), Some("segment"));
/// assert_eq!(vocabulary.len(), 1);
/// ```
///
/// Serializes as the list of its segments in id order. Deserializing rebuilds
/// the segment-to-id map from that list.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct Vocabulary {
    /// Segments in id order, the id of a segment is its position.
    segments: Vec<String>,
    ids: HashMap<String, SegmentId>,
}

impl Vocabulary {
    /// Creates an empty vocabulary.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns all segments, indexed by their ids.
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Returns the id of a segment if it is in the vocabulary.
    pub fn segment_id(&self, segment: impl AsRef<str>) -> Option<SegmentId> {
        self.ids.get(segment.as_ref()).copied()
    }

    /// Returns the segment with the given id.
    pub fn segment(&self, id: SegmentId) -> Option<&str> {
        self.segments.get(id.index()).map(String::as_str)
    }

    /// Returns the id of `segment`, assigning the next free one if it is new.
    pub fn try_insert(&mut self, segment: impl AsRef<str>) -> Result<SegmentId> {
        let segment = segment.as_ref();
        if let Some(id) = self.ids.get(segment) {
            return Ok(*id);
        }
        let id = SegmentId::try_from(self.segments.len()).map_err(|e| {
            debug!(segments = self.segments.len(), "Vocabulary ran out of segment ids");
            e
        })?;
        trace!(%id, segment, "New segment");
        self.segments.push(segment.to_owned());
        self.ids.insert(segment.to_owned(), id);
        Ok(id)
    }

    /// Tokenizes `text` into lines, each keeping its trailing newline.
    pub fn tokenize_lines(&mut self, text: &str) -> Result<Vec<SegmentId>> {
        text.split_inclusive('\n')
            .map(|line| self.try_insert(line))
            .collect()
    }

    /// Tokenizes `text` into alternating runs of whitespace and other characters.
    pub fn tokenize_words(&mut self, text: &str) -> Result<Vec<SegmentId>> {
        let mut ids = Vec::new();
        let mut start = 0;
        let mut in_space = None;
        for (i, c) in text.char_indices() {
            let is_space = c.is_whitespace();
            if in_space.is_some_and(|prev| prev != is_space) {
                ids.push(self.try_insert(&text[start..i])?);
                start = i;
            }
            in_space = Some(is_space);
        }
        if start < text.len() {
            ids.push(self.try_insert(&text[start..])?);
        }
        Ok(ids)
    }

    /// Concatenates the segments of `ids` back into text.
    pub fn render(&self, ids: &[SegmentId]) -> Result<String> {
        let mut text = String::new();
        for &id in ids {
            let Some(segment) = self.segment(id) else {
                debug!(%id, "Segment id is not in the vocabulary");
                return Err(Error::InvalidToken(id.id()));
            };
            text.push_str(segment);
        }
        Ok(text)
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}

impl std::fmt::Display for Vocabulary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(
            f,
            "Vocabulary object with {} segments and the following ids to segments:",
            self.segments.len()
        )?;
        for (id, segment) in self.segments.iter().enumerate() {
            writeln!(f, "{:?} -> {:?}", id, segment)?;
        }
        Ok(())
    }
}

impl<S: AsRef<str>> TryFrom<&[S]> for Vocabulary {
    type Error = Error;

    fn try_from(segments: &[S]) -> Result<Self, Self::Error> {
        let mut vocabulary = Vocabulary::new();
        for segment in segments {
            vocabulary.try_insert(segment)?;
        }
        Ok(vocabulary)
    }
}

impl TryFrom<Vec<String>> for Vocabulary {
    type Error = Error;

    fn try_from(segments: Vec<String>) -> Result<Self, Self::Error> {
        let mut ids = HashMap::default();
        for (index, segment) in segments.iter().enumerate() {
            let id = SegmentId::try_from(index)?;
            if ids.insert(segment.clone(), id).is_some() {
                debug!(segment = segment.as_str(), "Segment listed twice");
                return Err(Error::DuplicateSegment(segment.as_str().into()));
            }
        }
        Ok(Vocabulary { segments, ids })
    }
}

impl From<Vocabulary> for Vec<String> {
    fn from(vocabulary: Vocabulary) -> Self {
        vocabulary.segments
    }
}
