//! Session-only annotations attached to widgets
//!
//! Annotations are never persisted. The reading source has its own shape
//! (books and favorites); every other source shares a generic notes record
//! keyed by data source.

use std::collections::HashMap;

use crate::widget::DataSourceId;

pub const MAX_NOTES: usize = 5;
pub const MAX_BOOKS: usize = 5;
pub const MAX_FAVORITES: usize = 3;

/// Generic per-metric notes
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MetricNotes {
    pub notes: [String; MAX_NOTES],
    /// Reserved for account linking; never set from the UI
    pub link: Option<String>,
    pub show_on_widget: bool,
}

impl MetricNotes {
    /// Non-blank notes in entry order
    pub fn filled_notes(&self) -> impl Iterator<Item = &str> {
        non_blank(&self.notes)
    }

    pub fn is_blank(&self) -> bool {
        self.filled_notes().next().is_none()
    }
}

/// Reading list annotation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReadingNotes {
    pub books: [String; MAX_BOOKS],
    pub favorites: [String; MAX_FAVORITES],
    /// Reserved for account linking; never set from the UI
    pub link: Option<String>,
    pub show_on_widget: bool,
}

impl ReadingNotes {
    pub fn filled_books(&self) -> impl Iterator<Item = &str> {
        non_blank(&self.books)
    }

    pub fn filled_favorites(&self) -> impl Iterator<Item = &str> {
        non_blank(&self.favorites)
    }
}

fn non_blank(entries: &[String]) -> impl Iterator<Item = &str> {
    entries
        .iter()
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
}

/// Borrowed view of the annotation that applies to one widget
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnnotationRef<'a> {
    Reading(&'a ReadingNotes),
    Notes(&'a MetricNotes),
}

impl AnnotationRef<'_> {
    pub fn show_on_widget(&self) -> bool {
        match self {
            AnnotationRef::Reading(r) => r.show_on_widget,
            AnnotationRef::Notes(n) => n.show_on_widget,
        }
    }
}

/// All annotations for the current session
#[derive(Debug, Clone, Default)]
pub struct Annotations {
    pub reading: ReadingNotes,
    metrics: HashMap<DataSourceId, MetricNotes>,
}

impl Annotations {
    pub fn new() -> Self {
        Self::default()
    }

    /// Annotation routed to a widget with the given source
    ///
    /// Reading always has a record; other sources only once notes were saved.
    pub fn for_source(&self, source: &DataSourceId) -> Option<AnnotationRef<'_>> {
        match source {
            DataSourceId::Reading => Some(AnnotationRef::Reading(&self.reading)),
            other => self.metrics.get(other).map(AnnotationRef::Notes),
        }
    }

    /// Notes for a non-reading source, or an empty record
    pub fn notes(&self, source: &DataSourceId) -> MetricNotes {
        self.metrics.get(source).cloned().unwrap_or_default()
    }

    pub fn set_notes(&mut self, source: DataSourceId, notes: MetricNotes) {
        self.metrics.insert(source, notes);
    }

    pub fn set_reading(&mut self, reading: ReadingNotes) {
        self.reading = reading;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reading_always_resolves() {
        let annotations = Annotations::new();
        assert!(matches!(
            annotations.for_source(&DataSourceId::Reading),
            Some(AnnotationRef::Reading(_))
        ));
    }

    #[test]
    fn test_notes_keyed_by_source() {
        let mut annotations = Annotations::new();
        assert!(annotations.for_source(&DataSourceId::Gaming).is_none());

        let mut notes = MetricNotes::default();
        notes.notes[0] = "Finished Hades".into();
        notes.show_on_widget = true;
        annotations.set_notes(DataSourceId::Gaming, notes);

        let resolved = annotations.for_source(&DataSourceId::Gaming).unwrap();
        assert!(resolved.show_on_widget());
        assert!(annotations.for_source(&DataSourceId::Running).is_none());
    }

    #[test]
    fn test_filled_entries_skip_blanks() {
        let mut reading = ReadingNotes::default();
        reading.books[1] = "Dune".into();
        reading.books[3] = "   ".into();
        reading.favorites[0] = "Piranesi".into();

        assert_eq!(reading.filled_books().collect::<Vec<_>>(), vec!["Dune"]);
        assert_eq!(reading.filled_favorites().collect::<Vec<_>>(), vec!["Piranesi"]);
    }

    #[test]
    fn test_blank_notes() {
        assert!(MetricNotes::default().is_blank());
    }
}
