use crate::error::Result;
use crate::repository::Reminders;
use crate::store::DataStore;

pub fn load_reminders<S: DataStore>(store: &mut S) -> Result<Reminders> {
    Ok(Reminders::new(store.load()?))
}

pub fn save_reminders<S: DataStore>(store: &mut S, reminders: &Reminders) -> Result<()> {
    store.save(reminders.as_slice())
}
