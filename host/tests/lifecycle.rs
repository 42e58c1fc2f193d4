//! Full session lifecycle against the live mock server.
//!
//! # Design
//! Starts the mock server on a random port, then drives every session action
//! over real HTTP with `UreqTransport`, checking the local list against what
//! the store reports after each step.

use std::net::SocketAddr;

use todo_core::{EditMode, NetworkError, StoreClient, TodoError, TodoList};
use todo_host::{Config, Session, Transport, UreqTransport};

fn start_server() -> SocketAddr {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();

    let std_listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = std_listener.local_addr().unwrap();
    std_listener.set_nonblocking(true).unwrap();

    std::thread::spawn(move || {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        rt.block_on(async {
            let listener = tokio::net::TcpListener::from_std(std_listener).unwrap();
            mock_server::run(listener).await
        })
        .unwrap();
    });

    addr
}

fn config(addr: SocketAddr) -> Config {
    Config {
        base_url: format!("http://{addr}"),
        timeout: None,
    }
}

/// What the store itself holds, read through a fresh list.
fn store_snapshot(config: &Config) -> TodoList {
    let transport = UreqTransport::new(config);
    let mut list = TodoList::new(StoreClient::new(&config.base_url));
    let command = list.begin_load();
    let outcome = transport.execute(command.request);
    list.settle(command.pending, outcome).unwrap();
    list
}

#[test]
fn session_lifecycle() {
    let config = config(start_server());
    let mut session = Session::new(&config, UreqTransport::new(&config));

    // Step 1: load an empty store.
    assert!(session.list().is_loading());
    session.load().unwrap();
    assert!(!session.list().is_loading());
    assert!(session.list().items().is_empty());

    // Step 2: create two todos, one through the draft.
    session.create("walk dog").unwrap();
    session.set_draft("buy milk");
    session.submit_draft().unwrap();
    assert_eq!(session.list().draft(), "");
    let items = session.list().items().to_vec();
    assert_eq!(items.len(), 2);
    assert_eq!(items[1].text, "buy milk");
    assert!(!items[1].completed);
    assert_eq!(store_snapshot(&config).items(), items.as_slice());

    // Step 3: toggle the first.
    let first = items[0].id.clone();
    session.toggle_complete(&first).unwrap();
    assert!(session.list().items()[0].completed);
    assert!(!session.list().items()[1].completed);

    // Step 4: edit the second.
    let second = items[1].id.clone();
    session.begin_edit(&second).unwrap();
    session.set_edit_text("buy oat milk");
    session.commit_edit(&second).unwrap();
    assert_eq!(session.list().items()[1].text, "buy oat milk");
    assert_eq!(session.list().edit_mode(), &EditMode::NotEditing);
    assert_eq!(store_snapshot(&config).items(), session.list().items());

    // Step 5: delete the first; deleting it again is NotFound and changes nothing.
    session.remove(&first).unwrap();
    assert_eq!(session.list().items().len(), 1);
    let err = session.remove(&first).unwrap_err();
    assert_eq!(err, TodoError::Network(NetworkError::NotFound));
    assert_eq!(session.list().items().len(), 1);

    // Step 6: a fresh load matches the local mirror.
    let local = session.list().items().to_vec();
    session.load().unwrap();
    assert_eq!(session.list().items(), local.as_slice());
}

#[test]
fn unreachable_store_degrades_to_empty_list() {
    // Bind then drop, so the port refuses connections.
    let addr = std::net::TcpListener::bind("127.0.0.1:0")
        .unwrap()
        .local_addr()
        .unwrap();
    let config = config(addr);
    let mut session = Session::new(&config, UreqTransport::new(&config));

    let err = session.load().unwrap_err();
    assert!(matches!(err, TodoError::Network(NetworkError::Transport(_))));
    assert!(session.list().items().is_empty());
    assert!(!session.list().is_loading());

    let err = session.create("anything").unwrap_err();
    assert!(matches!(err, TodoError::Network(NetworkError::Transport(_))));
    assert!(session.list().items().is_empty());
}
