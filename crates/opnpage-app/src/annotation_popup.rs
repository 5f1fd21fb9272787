//! Annotation popup state
//!
//! Edits a draft copy of one source's session annotation. The reading source
//! collects books and favorites; every other source collects free-form notes.

use opnpage_core::{
    Annotations, DataSourceId, MetricNotes, ReadingNotes, MAX_BOOKS, MAX_FAVORITES, MAX_NOTES,
};

/// Which annotation record the popup edits
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnnotationTarget {
    Reading,
    Metric(DataSourceId),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnotationPopupState {
    pub target: AnnotationTarget,
    pub title: String,
    /// Text inputs in display order
    pub inputs: Vec<String>,
    pub show_on_widget: bool,
    /// Index into `inputs`; `inputs.len()` is the "show on widget" toggle
    pub focus: usize,
}

impl AnnotationPopupState {
    /// Open a popup for `source`, titled after `metric_label`
    pub fn open(source: &DataSourceId, metric_label: &str, annotations: &Annotations) -> Self {
        match source {
            DataSourceId::Reading => {
                let reading = &annotations.reading;
                Self {
                    target: AnnotationTarget::Reading,
                    title: "Reading Widget Details".to_string(),
                    inputs: reading
                        .books
                        .iter()
                        .chain(reading.favorites.iter())
                        .cloned()
                        .collect(),
                    show_on_widget: reading.show_on_widget,
                    focus: 0,
                }
            }
            other => {
                let notes = annotations.notes(other);
                Self {
                    target: AnnotationTarget::Metric(other.clone()),
                    title: format!("{} Widget Details", metric_label),
                    inputs: notes.notes.to_vec(),
                    show_on_widget: notes.show_on_widget,
                    focus: 0,
                }
            }
        }
    }

    /// Placeholder text for input `index`
    pub fn input_label(&self, index: usize) -> String {
        match self.target {
            AnnotationTarget::Reading if index < MAX_BOOKS => format!("Book {}", index + 1),
            AnnotationTarget::Reading => format!("Favorite {}", index - MAX_BOOKS + 1),
            AnnotationTarget::Metric(_) => format!("Note {}", index + 1),
        }
    }

    /// Link placeholder shown as a disabled button
    pub fn link_label(&self) -> &'static str {
        match self.target {
            AnnotationTarget::Reading => "Link Goodreads (Under Development)",
            AnnotationTarget::Metric(_) => "Link Account (Under Development)",
        }
    }

    pub fn toggle_focused(&self) -> bool {
        self.focus == self.inputs.len()
    }

    pub fn focus_next(&mut self) {
        self.focus = (self.focus + 1) % (self.inputs.len() + 1);
    }

    pub fn focus_previous(&mut self) {
        let stops = self.inputs.len() + 1;
        self.focus = (self.focus + stops - 1) % stops;
    }

    pub fn input_char(&mut self, c: char) {
        if let Some(input) = self.inputs.get_mut(self.focus) {
            input.push(c);
        }
    }

    pub fn backspace(&mut self) {
        if let Some(input) = self.inputs.get_mut(self.focus) {
            input.pop();
        }
    }

    pub fn toggle_show_on_widget(&mut self) {
        self.show_on_widget = !self.show_on_widget;
    }

    /// Write the draft into the session annotations
    pub fn apply(self, annotations: &mut Annotations) {
        match self.target {
            AnnotationTarget::Reading => {
                let mut reading = ReadingNotes {
                    link: annotations.reading.link.clone(),
                    show_on_widget: self.show_on_widget,
                    ..ReadingNotes::default()
                };
                fill(&mut reading.books, &self.inputs[..MAX_BOOKS.min(self.inputs.len())]);
                if self.inputs.len() > MAX_BOOKS {
                    let end = (MAX_BOOKS + MAX_FAVORITES).min(self.inputs.len());
                    fill(&mut reading.favorites, &self.inputs[MAX_BOOKS..end]);
                }
                annotations.set_reading(reading);
            }
            AnnotationTarget::Metric(source) => {
                let mut notes = MetricNotes {
                    link: annotations.notes(&source).link,
                    show_on_widget: self.show_on_widget,
                    ..MetricNotes::default()
                };
                fill(&mut notes.notes, &self.inputs[..MAX_NOTES.min(self.inputs.len())]);
                annotations.set_notes(source, notes);
            }
        }
    }
}

fn fill(slots: &mut [String], values: &[String]) {
    for (slot, value) in slots.iter_mut().zip(values) {
        slot.clone_from(value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use opnpage_core::AnnotationRef;

    #[test]
    fn test_reading_popup_layout() {
        let popup = AnnotationPopupState::open(&DataSourceId::Reading, "Reading", &Annotations::new());
        assert_eq!(popup.title, "Reading Widget Details");
        assert_eq!(popup.inputs.len(), 8);
        assert_eq!(popup.input_label(0), "Book 1");
        assert_eq!(popup.input_label(5), "Favorite 1");
        assert_eq!(popup.link_label(), "Link Goodreads (Under Development)");
    }

    #[test]
    fn test_metric_popup_title() {
        let popup = AnnotationPopupState::open(&DataSourceId::Gaming, "Gaming", &Annotations::new());
        assert_eq!(popup.title, "Gaming Widget Details");
        assert_eq!(popup.inputs.len(), 5);
        assert_eq!(popup.input_label(4), "Note 5");
    }

    #[test]
    fn test_save_reading_annotation() {
        let mut annotations = Annotations::new();
        let mut popup = AnnotationPopupState::open(&DataSourceId::Reading, "Reading", &annotations);
        "Dune".chars().for_each(|c| popup.input_char(c));
        popup.focus = 5;
        "Piranesi".chars().for_each(|c| popup.input_char(c));
        popup.focus = popup.inputs.len();
        popup.input_char('x');
        popup.toggle_show_on_widget();
        popup.apply(&mut annotations);

        assert_eq!(annotations.reading.books[0], "Dune");
        assert_eq!(annotations.reading.favorites[0], "Piranesi");
        assert!(annotations.reading.show_on_widget);
    }

    #[test]
    fn test_save_metric_notes_and_reopen() {
        let mut annotations = Annotations::new();
        let mut popup = AnnotationPopupState::open(&DataSourceId::Running, "Running", &annotations);
        "Half marathon".chars().for_each(|c| popup.input_char(c));
        popup.toggle_show_on_widget();
        popup.apply(&mut annotations);

        match annotations.for_source(&DataSourceId::Running) {
            Some(AnnotationRef::Notes(notes)) => {
                assert_eq!(notes.notes[0], "Half marathon");
                assert!(notes.show_on_widget);
            }
            other => panic!("unexpected annotation {:?}", other),
        }

        let reopened = AnnotationPopupState::open(&DataSourceId::Running, "Running", &annotations);
        assert_eq!(reopened.inputs[0], "Half marathon");
        assert!(reopened.show_on_widget);
    }

    #[test]
    fn test_discarded_popup_changes_nothing() {
        let annotations = Annotations::new();
        let mut popup = AnnotationPopupState::open(&DataSourceId::Gaming, "Gaming", &annotations);
        popup.input_char('x');
        drop(popup);
        assert!(annotations.for_source(&DataSourceId::Gaming).is_none());
    }

    #[test]
    fn test_focus_wraps_through_toggle() {
        let mut popup = AnnotationPopupState::open(&DataSourceId::Gaming, "Gaming", &Annotations::new());
        popup.focus_previous();
        assert!(popup.toggle_focused());
        popup.focus_next();
        assert_eq!(popup.focus, 0);
        popup.backspace();
        assert_eq!(popup.inputs[0], "");
    }
}
