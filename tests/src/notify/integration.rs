#![cfg(test)]
use std::cell::RefCell;
use std::rc::Rc;

use biblio_common::book;
use biblio_common::config::{Config, DEFAULT_NOTICE};
use biblio_common::notify::{Notifier, NotifyReport, Observer};
use biblio_core::library::Library;
use biblio_core::subscribers::LibraryUser;

type Inbox = Rc<RefCell<Vec<(&'static str, String)>>>;

fn mailbox(name: &'static str, inbox: &Inbox) -> Box<dyn Observer> {
    let inbox = Rc::clone(inbox);
    Box::new(move |message: &str| -> anyhow::Result<()> {
        inbox.borrow_mut().push((name, message.to_string()));
        Ok(())
    })
}

#[test]
fn two_subscribers_receive_once_in_order() {
    let inbox: Inbox = Rc::default();
    let mut notifier = Notifier::new();
    notifier.subscribe(mailbox("first", &inbox));
    notifier.subscribe(mailbox("second", &inbox));

    notifier.notify("msg");

    assert_eq!(
        *inbox.borrow(),
        vec![("first", "msg".to_string()), ("second", "msg".to_string())]
    );
}

#[test]
fn failing_subscriber_is_skipped() {
    let inbox: Inbox = Rc::default();
    let mut notifier = Notifier::new();
    notifier.subscribe(Box::new(|_: &str| -> anyhow::Result<()> {
        anyhow::bail!("offline")
    }));
    notifier.subscribe(mailbox("after", &inbox));
    notifier.subscribe(Box::new(LibraryUser::new("ana")));

    let report: NotifyReport = notifier.notify("msg");

    assert_eq!(report, NotifyReport { delivered: 2, failed: 1 });
    assert_eq!(inbox.borrow().len(), 1);
}

#[test]
fn adding_a_book_notifies_every_subscriber() {
    let inbox: Inbox = Rc::default();
    let mut library = Library::with_stock_users(&Config::default());
    library.subscribe(mailbox("watcher", &inbox));

    let report = library.add_book(book::create_book("Dune", "Herbert").unwrap());

    assert_eq!(report.delivered, 3);
    assert_eq!(*inbox.borrow(), vec![("watcher", DEFAULT_NOTICE.to_string())]);
}

#[test]
fn removal_does_not_notify() {
    let inbox: Inbox = Rc::default();
    let mut library = Library::new(&Config::default());
    library.add_book(book::create_book("Dune", "Herbert").unwrap());
    library.subscribe(mailbox("late", &inbox));

    assert!(library.remove_book("Dune"));
    assert!(inbox.borrow().is_empty());
}
