pub mod add;
pub mod delete;
pub mod edit;
pub mod export;
pub mod list;
pub mod print;
pub mod show;
pub mod update;

#[cfg(test)]
pub(crate) mod test_support {
    use crate::store::TicketStore;

    pub fn setup_store() -> (TicketStore, Vec<u8>) {
        (TicketStore::seeded(), Vec::new())
    }

    pub fn output(out: &[u8]) -> String {
        String::from_utf8_lossy(out).into_owned()
    }
}
