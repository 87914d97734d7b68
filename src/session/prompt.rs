use reedline::{Prompt, PromptEditMode, PromptHistorySearch};
use std::borrow::Cow;

/// Prompt rendered by the line editor: the configured text, nothing else.
pub(crate) struct AssistantPrompt<'a> {
    text: &'a str,
}

impl<'a> AssistantPrompt<'a> {
    pub(crate) fn new(text: &'a str) -> Self {
        Self { text }
    }
}

impl Prompt for AssistantPrompt<'_> {
    fn render_prompt_left(&self) -> Cow<str> {
        Cow::Borrowed(self.text)
    }

    fn render_prompt_right(&self) -> Cow<str> {
        "".into()
    }

    fn render_prompt_indicator(&self, _: PromptEditMode) -> Cow<str> {
        "".into()
    }

    fn render_prompt_multiline_indicator(&self) -> Cow<str> {
        "... ".into()
    }

    fn render_prompt_history_search_indicator(&self, _: PromptHistorySearch) -> Cow<str> {
        "".into()
    }
}
