//! FAQ editor state
//!
//! A view over the FAQ list inside the configuration record. Every change
//! sends the *whole* list back as one field, so the editor always builds a
//! full copy, swaps in the edit, and lets the server's answer replace the
//! cache. At most one entry is in edit mode at a time.

use super::{Generation, LoadState, Tab, TextField};
use crate::api::{ApiError, ApiRequest, ConfigPatch, Configuration, FaqEntry, Ticket};

const FETCH_FAILED: &str = "Failed to fetch configuration";
const UPDATE_FAILED: &str = "Failed to update FAQ";
const ADD_FAILED: &str = "Failed to add new FAQ";
const EMPTY_EXISTS: &str = "Please fill out the existing empty FAQ first";

/// Which half of the entry is being typed into
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FaqField {
    #[default]
    Question,
    Answer,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Pending {
    Fetch,
    Update,
    Add,
}

/// Entry currently in edit mode
#[derive(Debug, Clone, Default)]
pub struct FaqDraft {
    pub index: usize,
    pub question: TextField,
    pub answer: TextField,
    pub focus: FaqField,
}

impl FaqDraft {
    fn open(index: usize, entry: &FaqEntry) -> Self {
        Self {
            index,
            question: TextField::with_value(entry.question.clone()),
            answer: TextField::with_value(entry.answer.clone()),
            focus: FaqField::Question,
        }
    }

    fn entry(&self) -> FaqEntry {
        FaqEntry::new(self.question.value(), self.answer.value())
    }

    pub fn focused_mut(&mut self) -> &mut TextField {
        match self.focus {
            FaqField::Question => &mut self.question,
            FaqField::Answer => &mut self.answer,
        }
    }
}

#[derive(Debug, Default)]
pub struct FaqEditor {
    generation: Generation,
    pub state: LoadState,
    config: Option<Configuration>,
    pending: Option<Pending>,
    draft: Option<FaqDraft>,
    /// Highlighted row; `entries().len()` is the "Add FAQ" row
    pub selected: usize,
    pub error: Option<String>,
}

impl FaqEditor {
    pub fn new() -> Self {
        Self::default()
    }

    fn ticket(&mut self) -> Ticket {
        Ticket::new(Tab::Faq, self.generation.bump())
    }

    pub fn mount(&mut self) -> ApiRequest {
        *self = Self {
            generation: self.generation,
            ..Self::default()
        };
        self.state = LoadState::Loading;
        self.pending = Some(Pending::Fetch);
        ApiRequest::FetchConfig(self.ticket())
    }

    pub fn unmount(&mut self) {
        self.generation.bump();
        *self = Self {
            generation: self.generation,
            ..Self::default()
        };
    }

    pub fn entries(&self) -> &[FaqEntry] {
        self.config.as_ref().map(|c| c.faq.as_slice()).unwrap_or(&[])
    }

    pub fn is_busy(&self) -> bool {
        self.pending.is_some()
    }

    pub fn draft(&self) -> Option<&FaqDraft> {
        self.draft.as_ref()
    }

    pub fn draft_mut(&mut self) -> Option<&mut FaqDraft> {
        self.draft.as_mut()
    }

    pub fn is_editing(&self) -> bool {
        self.draft.is_some()
    }

    /// The Add row is highlighted
    pub fn on_add_row(&self) -> bool {
        self.selected >= self.entries().len()
    }

    pub fn select_next(&mut self) {
        if self.draft.is_none() {
            self.selected = (self.selected + 1).min(self.entries().len());
        }
    }

    pub fn select_prev(&mut self) {
        if self.draft.is_none() {
            self.selected = self.selected.saturating_sub(1);
        }
    }

    /// Enter on the highlighted row: edit it, or add on the Add row
    pub fn activate(&mut self) -> Option<ApiRequest> {
        if self.on_add_row() {
            self.add_entry()
        } else {
            self.begin_edit(self.selected);
            None
        }
    }

    /// Put `index` in edit mode. Ignored while busy or already editing.
    pub fn begin_edit(&mut self, index: usize) {
        if self.is_busy() || self.draft.is_some() {
            return;
        }
        if let Some(entry) = self.entries().get(index) {
            self.draft = Some(FaqDraft::open(index, entry));
            self.selected = index;
            self.error = None;
        }
    }

    pub fn switch_field(&mut self) {
        if let Some(draft) = &mut self.draft {
            draft.focus = match draft.focus {
                FaqField::Question => FaqField::Answer,
                FaqField::Answer => FaqField::Question,
            };
        }
    }

    /// Leave edit mode, saving the draft if it is complete
    pub fn commit_edit(&mut self) -> Option<ApiRequest> {
        if self.is_busy() {
            return None;
        }
        let draft = self.draft.as_ref()?;
        let (index, entry) = (draft.index, draft.entry());
        self.update_entry(index, entry)
    }

    /// Replace entry `index` and send the full list.
    ///
    /// An entry with a blank question or answer is discarded: edit mode
    /// closes and nothing is sent. Values go out as typed, untrimmed.
    pub fn update_entry(&mut self, index: usize, entry: FaqEntry) -> Option<ApiRequest> {
        if self.is_busy() {
            return None;
        }
        if !entry.is_complete() {
            self.draft = None;
            return None;
        }

        let mut list = self.entries().to_vec();
        let slot = list.get_mut(index)?;
        *slot = entry;

        self.error = None;
        self.pending = Some(Pending::Update);
        let ticket = self.ticket();
        Some(ApiRequest::PatchConfig(ticket, ConfigPatch::faq(list)))
    }

    /// Append an empty entry and send the full list.
    ///
    /// Refused while any existing entry is completely blank.
    pub fn add_entry(&mut self) -> Option<ApiRequest> {
        if self.is_busy() || self.draft.is_some() {
            return None;
        }
        let config = self.config.as_ref()?;

        if config.faq.iter().any(FaqEntry::is_blank) {
            self.error = Some(EMPTY_EXISTS.to_string());
            return None;
        }

        let mut list = config.faq.clone();
        list.push(FaqEntry::default());

        self.error = None;
        self.pending = Some(Pending::Add);
        let ticket = self.ticket();
        Some(ApiRequest::PatchConfig(ticket, ConfigPatch::faq(list)))
    }

    /// Apply a `/config` response. Returns false if it was stale.
    pub fn apply(&mut self, generation: Generation, result: Result<Configuration, ApiError>) -> bool {
        if generation != self.generation {
            tracing::debug!("Dropping stale FAQ response");
            return false;
        }
        let Some(pending) = self.pending.take() else {
            return false;
        };

        match (pending, result) {
            (Pending::Fetch, Ok(config)) => {
                self.config = Some(config);
                self.state = LoadState::Ready;
            }
            (Pending::Fetch, Err(e)) => {
                tracing::warn!("FAQ fetch failed: {}", e);
                self.state = LoadState::Failed(e.user_message(FETCH_FAILED));
            }
            (Pending::Update, Ok(config)) => {
                tracing::info!("FAQ updated ({} entries)", config.faq.len());
                self.config = Some(config);
                self.draft = None;
            }
            (Pending::Update, Err(e)) => {
                // Draft stays open so the edit is not lost
                tracing::warn!("FAQ update failed: {}", e);
                self.error = Some(e.user_message(UPDATE_FAILED));
            }
            (Pending::Add, Ok(config)) => {
                tracing::info!("FAQ entry added");
                self.config = Some(config);
                if let Some(entry) = self.entries().last().cloned() {
                    let last = self.entries().len() - 1;
                    self.draft = Some(FaqDraft::open(last, &entry));
                    self.selected = last;
                }
            }
            (Pending::Add, Err(e)) => {
                tracing::warn!("FAQ add failed: {}", e);
                self.error = Some(e.user_message(ADD_FAILED));
            }
        }
        self.selected = self.selected.min(self.entries().len());
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::StatusCode;

    fn record(faq: Vec<FaqEntry>) -> Configuration {
        Configuration {
            faq,
            ..Configuration::default()
        }
    }

    fn failure() -> ApiError {
        ApiError::Status {
            endpoint: "/config",
            status: StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn sent(request: &ApiRequest) -> (Generation, Vec<FaqEntry>) {
        match request {
            ApiRequest::PatchConfig(t, patch) => (t.generation, patch.faq.clone().unwrap()),
            other => panic!("unexpected request {:?}", other),
        }
    }

    fn loaded(faq: Vec<FaqEntry>) -> FaqEditor {
        let mut editor = FaqEditor::new();
        let req = editor.mount();
        let ApiRequest::FetchConfig(ticket) = req else {
            panic!("expected fetch");
        };
        assert!(editor.apply(ticket.generation, Ok(record(faq))));
        editor
    }

    #[test]
    fn update_sends_full_list_with_entry_replaced() {
        let mut editor = loaded(vec![FaqEntry::new("a", "1"), FaqEntry::new("b", "2")]);
        let req = editor.update_entry(1, FaqEntry::new("b", "3")).unwrap();
        let (_, list) = sent(&req);
        assert_eq!(list, vec![FaqEntry::new("a", "1"), FaqEntry::new("b", "3")]);
    }

    #[test]
    fn edit_then_commit_round() {
        let mut editor = loaded(vec![FaqEntry::new("Hours?", "9-5")]);
        editor.begin_edit(0);
        editor.switch_field();
        {
            let draft = editor.draft_mut().unwrap();
            draft.focused_mut().set("9-6");
        }
        let req = editor.commit_edit().unwrap();
        let (generation, list) = sent(&req);
        assert_eq!(list, vec![FaqEntry::new("Hours?", "9-6")]);
        // Still in edit mode until the server answers
        assert!(editor.is_editing());

        editor.apply(generation, Ok(record(list)));
        assert!(!editor.is_editing());
        assert_eq!(editor.entries()[0].answer, "9-6");
    }

    #[test]
    fn blank_field_discards_edit_without_request() {
        let mut editor = loaded(vec![FaqEntry::new("a", "1")]);
        editor.begin_edit(0);
        editor.draft_mut().unwrap().answer.set("   ");
        assert!(editor.commit_edit().is_none());
        assert!(!editor.is_editing());
        assert_eq!(editor.entries()[0], FaqEntry::new("a", "1"));
    }

    #[test]
    fn values_are_sent_untrimmed() {
        let mut editor = loaded(vec![FaqEntry::new("a", "1")]);
        let req = editor.update_entry(0, FaqEntry::new(" a ", "1 ")).unwrap();
        assert_eq!(sent(&req).1[0], FaqEntry::new(" a ", "1 "));
    }

    #[test]
    fn failed_update_keeps_draft_and_reports() {
        let mut editor = loaded(vec![FaqEntry::new("a", "1")]);
        editor.begin_edit(0);
        editor.draft_mut().unwrap().question.set("changed");
        let req = editor.commit_edit().unwrap();
        editor.apply(sent(&req).0, Err(failure()));

        assert_eq!(editor.error.as_deref(), Some("Failed to update FAQ"));
        assert!(editor.is_editing());
        assert_eq!(editor.entries()[0].question, "a");
    }

    #[test]
    fn add_is_blocked_while_a_blank_entry_exists() {
        let mut editor = loaded(vec![FaqEntry::new("a", "1"), FaqEntry::new(" ", "")]);
        assert!(editor.add_entry().is_none());
        assert_eq!(
            editor.error.as_deref(),
            Some("Please fill out the existing empty FAQ first")
        );
        assert_eq!(editor.entries().len(), 2);
        assert!(!editor.is_busy());
    }

    #[test]
    fn half_filled_entry_does_not_block_add() {
        let mut editor = loaded(vec![FaqEntry::new("q only", "")]);
        assert!(editor.add_entry().is_some());
    }

    #[test]
    fn add_appends_and_opens_new_entry() {
        let mut editor = loaded(vec![FaqEntry::new("a", "1")]);
        let req = editor.add_entry().unwrap();
        let (generation, list) = sent(&req);
        assert_eq!(list, vec![FaqEntry::new("a", "1"), FaqEntry::default()]);

        editor.apply(generation, Ok(record(list)));
        let draft = editor.draft().unwrap();
        assert_eq!(draft.index, 1);
        assert_eq!(editor.selected, 1);
    }

    #[test]
    fn failed_add_leaves_list_alone() {
        let mut editor = loaded(vec![]);
        let req = editor.add_entry().unwrap();
        editor.apply(sent(&req).0, Err(failure()));
        assert_eq!(editor.error.as_deref(), Some("Failed to add new FAQ"));
        assert!(editor.entries().is_empty());
        assert!(!editor.is_editing());
    }

    #[test]
    fn activate_on_add_row_adds() {
        let mut editor = loaded(vec![FaqEntry::new("a", "1")]);
        editor.select_next();
        assert!(editor.on_add_row());
        assert!(editor.activate().is_some());
    }

    #[test]
    fn only_one_entry_in_edit_mode() {
        let mut editor = loaded(vec![FaqEntry::new("a", "1"), FaqEntry::new("b", "2")]);
        editor.begin_edit(0);
        editor.begin_edit(1);
        assert_eq!(editor.draft().unwrap().index, 0);
        // Navigation is frozen while editing
        editor.select_next();
        assert_eq!(editor.selected, 0);
    }

    #[test]
    fn stale_response_is_ignored() {
        let mut editor = loaded(vec![FaqEntry::new("a", "1")]);
        let req = editor.update_entry(0, FaqEntry::new("a", "2")).unwrap();
        editor.unmount();
        assert!(!editor.apply(sent(&req).0, Ok(record(vec![]))));
        assert!(editor.entries().is_empty());
        assert_eq!(editor.state, LoadState::Idle);
    }
}
