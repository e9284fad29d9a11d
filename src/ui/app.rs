use crate::form::FormValues;
use crate::ui::form::{
    CompletionCallback, FieldChange, FormController, FormIntent, FormState, SubmitOutcome,
};

pub struct App {
    should_quit: bool,
    form: FormController<CompletionCallback>,
}

impl Default for App {
    fn default() -> Self {
        Self::new(Box::new(|_: &FormValues| {}))
    }
}

impl App {
    /// Create the app with the action to run for each accepted submission.
    pub fn new(on_complete: CompletionCallback) -> Self {
        Self {
            should_quit: false,
            form: FormController::new(on_complete),
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn form(&self) -> &FormState {
        self.form.state()
    }

    pub fn dispatch(&mut self, intent: FormIntent) {
        self.form.dispatch(intent);
    }

    pub fn change(&mut self, change: FieldChange) {
        self.form.change(change);
    }

    pub fn submit(&mut self) -> SubmitOutcome {
        self.form.submit()
    }

    pub fn reset(&mut self) {
        self.form.reset();
    }

    pub fn dismiss_confirmation(&mut self) {
        self.form.dismiss_confirmation();
    }

    /// Append pasted text to the focused text field.
    pub fn on_paste(&mut self, text: &str) {
        let Some(field) = self.form().focused_field() else {
            return;
        };
        let Some(current) = field.text(&self.form().values) else {
            return;
        };
        let pasted: String = text.chars().filter(|c| !c.is_control()).collect();
        if pasted.is_empty() {
            return;
        }
        let value = format!("{current}{pasted}");
        self.change(FieldChange::Text { field, value });
    }
}
