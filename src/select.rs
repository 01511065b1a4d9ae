use ratatui::widgets::ListState;
use tui_input::Input;

/// State for the searchable dropdown primitive.
///
/// Pure display state: the widget never owns domain values. The form
/// hands it the option list for whichever field is focused and applies
/// the reported selection itself; the same primitive backs every
/// selection point on the form.
#[derive(Default)]
pub struct SearchableSelect {
    pub open: bool,
    pub filter: Input,
    pub highlighted: usize,
    pub list_state: ListState,
}

impl SearchableSelect {
    /// Open the dropdown. The filter resets to empty so all options
    /// show, and the filter input takes focus.
    pub fn open(&mut self) {
        self.open = true;
        self.filter.reset();
        self.highlighted = 0;
        self.list_state.select(Some(0));
    }

    /// Close without changing any value
    pub fn close(&mut self) {
        self.open = false;
        self.filter.reset();
        self.highlighted = 0;
        self.list_state.select(None);
    }

    /// Case-insensitive substring filter, order preserving. An empty
    /// filter returns the full option list.
    pub fn filtered<'a>(&self, options: &'a [String]) -> Vec<&'a str> {
        let needle = self.filter.value().to_lowercase();
        options
            .iter()
            .map(String::as_str)
            .filter(|opt| needle.is_empty() || opt.to_lowercase().contains(&needle))
            .collect()
    }

    pub fn highlight_next(&mut self, visible: usize) {
        if visible == 0 {
            return;
        }
        self.highlighted = (self.highlighted + 1) % visible;
        self.list_state.select(Some(self.highlighted));
    }

    pub fn highlight_previous(&mut self, visible: usize) {
        if visible == 0 {
            return;
        }
        self.highlighted = self.highlighted.checked_sub(1).unwrap_or(visible - 1);
        self.list_state.select(Some(self.highlighted));
    }

    /// Keep the highlight inside the filtered view after a filter edit
    pub fn clamp_highlight(&mut self, visible: usize) {
        if visible == 0 {
            self.highlighted = 0;
            self.list_state.select(None);
        } else {
            if self.highlighted >= visible {
                self.highlighted = visible - 1;
            }
            self.list_state.select(Some(self.highlighted));
        }
    }

    /// Confirm the highlighted option: returns the exact option string,
    /// closes the dropdown and clears the filter. `None` when the
    /// filtered view is empty.
    pub fn take_selection(&mut self, options: &[String]) -> Option<String> {
        let choice = self
            .filtered(options)
            .get(self.highlighted)
            .map(|s| s.to_string());
        if choice.is_some() {
            self.close();
        }
        choice
    }

    /// Confirm a specific row of the filtered view (mouse selection)
    pub fn take_selection_at(&mut self, options: &[String], row: usize) -> Option<String> {
        let choice = self.filtered(options).get(row).map(|s| s.to_string());
        if choice.is_some() {
            self.close();
        }
        choice
    }
}
