// Observer fan-out tests
use std::cell::RefCell;
use std::rc::Rc;

use sigcheck::report::{
    CollectingObserver, Failure, FailureType, ObserverList, ResultObserver,
};

/// Observer whose record is visible outside the list that owns it.
struct SharedObserver {
    failures: Rc<RefCell<Vec<Failure>>>,
}

impl ResultObserver for SharedObserver {
    fn notify_failure(&mut self, failure_type: FailureType, description: &str) {
        self.failures.borrow_mut().push(Failure {
            failure_type,
            description: description.to_string(),
        });
    }
}

#[test]
fn observer_list_fans_out_to_all_subscribers() {
    let first = Rc::new(RefCell::new(Vec::new()));
    let second = Rc::new(RefCell::new(Vec::new()));

    let mut list = ObserverList::new();
    list.add_observer(Box::new(SharedObserver {
        failures: first.clone(),
    }));
    list.add_observer(Box::new(SharedObserver {
        failures: second.clone(),
    }));
    assert_eq!(list.len(), 2);

    list.notify_failure(FailureType::MissingClass, "pkg.Gone");

    assert_eq!(first.borrow().len(), 1);
    assert_eq!(second.borrow().len(), 1);
    assert_eq!(first.borrow()[0].description, "pkg.Gone");
}

#[test]
fn removed_observer_stops_receiving() {
    let record = Rc::new(RefCell::new(Vec::new()));

    let mut list = ObserverList::new();
    list.add_observer(Box::new(SharedObserver {
        failures: record.clone(),
    }));
    list.notify_failure(FailureType::MissingField, "pkg.Foo#x(int)");

    assert!(list.remove_observer(0).is_some());
    assert!(list.remove_observer(0).is_none());
    list.notify_failure(FailureType::MissingField, "pkg.Foo#y(int)");

    assert_eq!(record.borrow().len(), 1);
}

#[test]
fn clear_observers_empties_the_list() {
    let mut list = ObserverList::new();
    list.add_observer(Box::new(CollectingObserver::new()));
    list.add_observer(Box::new(CollectingObserver::new()));
    list.clear_observers();
    assert!(list.is_empty());
}

#[test]
fn collecting_observer_records_in_order() {
    let mut observer = CollectingObserver::new();
    observer.notify_failure(FailureType::MissingClass, "pkg.A");
    observer.notify_failure(FailureType::MismatchMethod, "pkg.B#m()");
    assert!(!observer.is_clean());
    assert_eq!(observer.failures.len(), 2);
    assert_eq!(observer.failures[0].failure_type, FailureType::MissingClass);
    assert_eq!(observer.failures[1].description, "pkg.B#m()");
    assert_eq!(
        observer.failures[1].to_string(),
        "MISMATCH_METHOD: pkg.B#m()"
    );
}
