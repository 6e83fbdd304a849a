use tilewire_protocol::{ActionKind, Tile};

use crate::{ActionPrompt, TableView};

/// What the player asked for, sent up from the presentation surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    /// A tile in the local hand was clicked.
    TilePlayed(Tile),
    /// A button on the claim prompt was clicked.
    ActionChosen(ActionKind),
}

/// The surface a session draws on.
///
/// Implementations only draw. They never decide whether an action is legal;
/// clicks go back up as [`Intent`]s and the session filters them.
pub trait Presenter {
    /// Appends one line to the message log.
    fn log(&mut self, line: &str);

    /// Redraws the whole table. Any previously drawn state is discarded.
    fn render(&mut self, view: &TableView);

    /// Shows the claim prompt, replacing any prompt already on screen.
    fn show_prompt(&mut self, prompt: &ActionPrompt);

    /// Removes the claim prompt, if one is showing.
    fn retract_prompt(&mut self);
}

/// Draws nothing. Useful for headless clients.
impl Presenter for () {
    fn log(&mut self, _line: &str) {}
    fn render(&mut self, _view: &TableView) {}
    fn show_prompt(&mut self, _prompt: &ActionPrompt) {}
    fn retract_prompt(&mut self) {}
}

impl<P: Presenter + ?Sized> Presenter for &mut P {
    fn log(&mut self, line: &str) {
        (**self).log(line);
    }

    fn render(&mut self, view: &TableView) {
        (**self).render(view);
    }

    fn show_prompt(&mut self, prompt: &ActionPrompt) {
        (**self).show_prompt(prompt);
    }

    fn retract_prompt(&mut self) {
        (**self).retract_prompt();
    }
}
