//! Demo clients loaded at the start of a session

use tradie_core::domain::Client;

pub fn demo_clients() -> Vec<Client> {
    vec![
        Client::new("client-1", "SMI", "Jane Smith")
            .with_phone("021 555 0101")
            .with_email("jane.smith@example.com"),
        Client::new("client-2", "BRO", "Bob Brown").with_phone("027 555 0142"),
        Client::new("client-3", "PAT", "Priya Patel").with_email("priya@patel.example.com"),
        Client::new("client-4", "NGU", "Minh Nguyen")
            .with_phone("022 555 0199")
            .with_email("minh.nguyen@example.com"),
        Client::new("client-5", "OCO", "Aoife O'Connor"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_demo_clients_have_unique_ids_and_codes() {
        let clients = demo_clients();
        let ids: HashSet<&str> = clients.iter().map(|c| c.id.as_str()).collect();
        let codes: HashSet<&str> = clients.iter().map(|c| c.client_code.as_str()).collect();

        assert_eq!(ids.len(), clients.len());
        assert_eq!(codes.len(), clients.len());
    }
}
