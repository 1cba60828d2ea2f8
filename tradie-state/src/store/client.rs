//! Client Store
//!
//! Keeps every known client keyed by id. Clients are only ever added.

use std::collections::{BTreeSet, HashMap};

use tradie_core::domain::{Client, ClientId};

#[derive(Debug, Clone, Default)]
pub struct ClientStore {
    clients: HashMap<ClientId, Client>,
}

impl ClientStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts each client, replacing any existing record with the same id
    ///
    /// Returns true when the stored mapping changed.
    pub fn add_all_clients(&mut self, clients: impl IntoIterator<Item = Client>) -> bool {
        let mut changed = false;
        for client in clients {
            if self.clients.get(&client.id) != Some(&client) {
                tracing::debug!("Client stored: {} ({})", client.id, client.client_code);
                self.clients.insert(client.id.clone(), client);
                changed = true;
            }
        }
        changed
    }

    pub fn clients(&self) -> &HashMap<ClientId, Client> {
        &self.clients
    }

    pub fn get(&self, id: &str) -> Option<&Client> {
        self.clients.get(id)
    }

    /// Looks a client up by id, then by client code (ignoring case)
    pub fn find(&self, id_or_code: &str) -> Option<&Client> {
        self.clients.get(id_or_code).or_else(|| {
            self.clients
                .values()
                .find(|client| client.client_code.eq_ignore_ascii_case(id_or_code))
        })
    }

    /// Every client code, the universe for the client filter
    pub fn client_codes(&self) -> BTreeSet<String> {
        self.clients
            .values()
            .map(|client| client.client_code.clone())
            .collect()
    }

    /// Clients ordered by name, for listings
    pub fn sorted_by_name(&self) -> Vec<&Client> {
        let mut clients: Vec<&Client> = self.clients.values().collect();
        clients.sort_by(|a, b| crate::text::compare_text(&a.name, &b.name));
        clients
    }

    pub fn len(&self) -> usize {
        self.clients.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clients.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn clients() -> Vec<Client> {
        vec![
            Client::new("c1", "SMI", "Jane Smith").with_phone("021 555 0101"),
            Client::new("c2", "BRO", "Bob Brown"),
        ]
    }

    #[test]
    fn test_add_all_clients_keys_by_id() {
        let mut store = ClientStore::new();
        assert!(store.add_all_clients(clients()));

        assert_eq!(store.len(), 2);
        assert_eq!(store.get("c1").unwrap().name, "Jane Smith");
        assert!(store.get("c3").is_none());
    }

    #[test]
    fn test_add_all_clients_is_idempotent() {
        let mut store = ClientStore::new();
        store.add_all_clients(clients());
        let before = store.clients().clone();

        assert!(!store.add_all_clients(clients()));
        assert_eq!(store.clients(), &before);
    }

    #[test]
    fn test_add_all_clients_overwrites_same_id() {
        let mut store = ClientStore::new();
        store.add_all_clients(clients());
        store.add_all_clients(vec![Client::new("c2", "BRO", "Robert Brown")]);

        assert_eq!(store.len(), 2);
        assert_eq!(store.get("c2").unwrap().name, "Robert Brown");
    }

    #[test]
    fn test_find_by_id_or_code() {
        let mut store = ClientStore::new();
        store.add_all_clients(clients());

        assert_eq!(store.find("c2").unwrap().client_code, "BRO");
        assert_eq!(store.find("smi").unwrap().id, "c1");
        assert!(store.find("XYZ").is_none());
    }

    #[test]
    fn test_client_codes_and_name_order() {
        let mut store = ClientStore::new();
        store.add_all_clients(clients());

        let codes: Vec<String> = store.client_codes().into_iter().collect();
        assert_eq!(codes, vec!["BRO".to_string(), "SMI".to_string()]);

        let names: Vec<&str> = store.sorted_by_name().iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Bob Brown", "Jane Smith"]);
    }
}
