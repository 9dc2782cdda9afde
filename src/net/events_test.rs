use std::cell::RefCell;
use std::rc::Rc;

use super::*;

#[test]
fn emit_without_handler_is_noop() {
    reset();
    // Must not panic.
    emit_unauthorized();
    emit_error("ignored");
}

#[test]
fn installed_handlers_receive_events() {
    reset();
    let hits = Rc::new(RefCell::new(0u32));
    let messages = Rc::new(RefCell::new(Vec::new()));

    let h = Rc::clone(&hits);
    on_unauthorized(move || *h.borrow_mut() += 1);
    let m = Rc::clone(&messages);
    on_error(move |msg| m.borrow_mut().push(msg));

    emit_unauthorized();
    emit_unauthorized();
    emit_error("primeiro");
    emit_error("segundo");

    assert_eq!(*hits.borrow(), 2);
    assert_eq!(messages.borrow().as_slice(), ["primeiro", "segundo"]);
}

#[test]
fn reinstalling_replaces_the_previous_handler() {
    reset();
    let first = Rc::new(RefCell::new(0u32));
    let second = Rc::new(RefCell::new(0u32));

    let f = Rc::clone(&first);
    on_unauthorized(move || *f.borrow_mut() += 1);
    let s = Rc::clone(&second);
    on_unauthorized(move || *s.borrow_mut() += 1);

    emit_unauthorized();

    assert_eq!(*first.borrow(), 0);
    assert_eq!(*second.borrow(), 1);
}
