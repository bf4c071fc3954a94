use common::pipeline::NotifyOutcome;

pub enum Msg {
    SetName(String),
    StageSchema(String),
    AddSchema,
    ChangeSchema(usize, String),
    RemoveSchema(usize),
    Save,
    Delivered(NotifyOutcome),
    Cancel,
}
