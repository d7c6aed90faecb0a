/// Outcome of handling an input event, passed up to the application
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// The timestamp text was edited
    TimeEdited,

    // App control
    Quit,
    None,
}
